use super::*;
use mica_diagnostic::ErrorCode;
use mica_ir::{ExprKind, Type};
use pretty_assertions::assert_eq;

fn code(expr: &str) -> ErrorCode {
    type_of(expr).expect_err("expression should not type").code
}

#[test]
fn literal_types() {
    assert_eq!(type_of("NIL").unwrap(), Type::Nil);
    assert_eq!(type_of("TRUE").unwrap(), Type::Boolean);
    assert_eq!(type_of("42").unwrap(), Type::Integer);
    assert_eq!(type_of("4.2").unwrap(), Type::Decimal);
    assert_eq!(type_of("'x'").unwrap(), Type::Character);
    assert_eq!(type_of("\"x\"").unwrap(), Type::String);
    assert_eq!(type_of("(((1)))").unwrap(), Type::Integer);
}

#[test]
fn integer_literals_must_fit_i32() {
    assert_eq!(type_of("2147483647").unwrap(), Type::Integer);
    assert_eq!(type_of("-2147483648").unwrap(), Type::Integer);
    assert_eq!(code("2147483648"), ErrorCode::E2008);
    assert_eq!(code("-2147483649"), ErrorCode::E2008);
}

#[test]
fn decimal_literals_must_be_finite() {
    let huge = format!("1{}.0", "0".repeat(400));
    assert_eq!(code(&huge), ErrorCode::E2008);
}

#[test]
fn logical_operators() {
    assert_eq!(type_of("TRUE AND FALSE OR TRUE").unwrap(), Type::Boolean);
    assert_eq!(code("TRUE AND 1"), ErrorCode::E2001);
    assert_eq!(code("0 OR TRUE"), ErrorCode::E2001);
}

#[test]
fn comparisons() {
    assert_eq!(type_of("1 < 2").unwrap(), Type::Boolean);
    assert_eq!(type_of("'a' >= 'b'").unwrap(), Type::Boolean);
    assert_eq!(type_of("\"a\" == \"b\"").unwrap(), Type::Boolean);
    assert_eq!(type_of("1.0 != 2.0").unwrap(), Type::Boolean);
    assert_eq!(code("1 < 2.0"), ErrorCode::E2001);
    assert_eq!(code("TRUE == FALSE"), ErrorCode::E2001);
    assert_eq!(code("NIL == NIL"), ErrorCode::E2001);
}

#[test]
fn string_concatenation() {
    assert_eq!(type_of("\"a\" + 1").unwrap(), Type::String);
    assert_eq!(type_of("1 + \"a\"").unwrap(), Type::String);
    assert_eq!(type_of("'c' + \"a\"").unwrap(), Type::String);
}

#[test]
fn arithmetic() {
    assert_eq!(type_of("1 + 2 * 3").unwrap(), Type::Integer);
    assert_eq!(type_of("1.5 * 2.0 - 0.5").unwrap(), Type::Decimal);
    assert_eq!(type_of("7 / 2").unwrap(), Type::Integer);
    assert_eq!(code("1 + 1.0"), ErrorCode::E2001);
    assert_eq!(code("1.0 / 2"), ErrorCode::E2001);
}

#[test]
fn names_and_calls() {
    assert_eq!(code("missing"), ErrorCode::E2002);
    assert_eq!(code("missing()"), ErrorCode::E2003);
    assert_eq!(code("print(1, 2)"), ErrorCode::E2003);
    assert_eq!(code("range(0, \"a\")"), ErrorCode::E2001);
    assert_eq!(type_of("range(0, 3)").unwrap(), Type::IntegerIterable);
    assert_eq!(type_of("print(1)").unwrap(), Type::Nil);
}

#[test]
fn slots_are_filled() {
    let interner = StringInterner::new();
    let mut source = parse_program(&in_main("LET a = 1; print(a + 2);"), &interner);
    analyze(&mut source, &interner).unwrap();

    let body = source.arena.get_stmt_list(source.methods[0].body);
    let StmtKind::Expression(call) = source.arena.get_stmt(body[1]).kind else {
        panic!("expected expression statement");
    };
    let call = source.arena.get_expr(call);
    assert_eq!(call.ty, Some(Type::Nil));
    let ExprKind::Call { resolved, args, .. } = &call.kind else {
        panic!("expected call");
    };
    let print = resolved.as_ref().unwrap();
    assert_eq!(interner.lookup(print.name), "print");
    assert_eq!(print.params, vec![Type::Any]);

    let sum = source.arena.get_expr(source.arena.get_expr_list(*args)[0]);
    assert_eq!(sum.ty, Some(Type::Integer));
    let ExprKind::Binary { left, .. } = sum.kind else {
        panic!("expected binary");
    };
    let ExprKind::Access { resolved, .. } = &source.arena.get_expr(left).kind else {
        panic!("expected access");
    };
    assert_eq!(resolved.as_ref().unwrap().ty, Type::Integer);
}
