use super::*;
use mica_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

fn code(stmts: &str) -> ErrorCode {
    check_err(&in_main(stmts)).code
}

#[test]
fn expression_statements_must_be_calls() {
    assert_eq!(code("1 + 2;"), ErrorCode::E2005);
    assert_eq!(code("(print(1));"), ErrorCode::E2005);
    check(&in_main("print(1);")).unwrap();
}

#[test]
fn assignment_targets_must_be_accesses() {
    assert_eq!(code("print(1) = 2;"), ErrorCode::E2006);
}

#[test]
fn assignment_checks_compatibility() {
    let err = check_err("LET x: Integer = 1; DEF main() DO x = \"s\"; RETURN x; END");
    assert_eq!(err.code, ErrorCode::E2001);
    check("LET x: Any = 1; DEF main() DO x = \"s\"; RETURN 0; END").unwrap();
}

#[test]
fn declaration_infers_from_initializer() {
    let source = check(&in_main("LET c = 'c';")).unwrap();
    let first = source.arena.get_stmt_list(source.methods[0].body)[0];
    let StmtKind::Declaration { resolved, .. } = &source.arena.get_stmt(first).kind else {
        panic!("expected declaration");
    };
    assert_eq!(resolved.as_ref().unwrap().ty, Type::Character);
}

#[test]
fn declaration_rules() {
    check(&in_main("LET a: Decimal; LET b: Comparable = 1;")).unwrap();
    assert_eq!(code("LET a;"), ErrorCode::E2010);
    assert_eq!(code("LET a: Boolean = 1;"), ErrorCode::E2001);
    assert_eq!(code("LET a: Nope;"), ErrorCode::E2004);
}

#[test]
fn if_rules() {
    check(&in_main("IF TRUE DO print(1); ELSE print(2); END")).unwrap();
    check(&in_main("IF 1 < 2 DO print(1); END")).unwrap();
    assert_eq!(code("IF 1 DO print(1); END"), ErrorCode::E2001);
    assert_eq!(code("IF TRUE DO ELSE print(1); END"), ErrorCode::E2009);
}

#[test]
fn block_declarations_are_scoped() {
    assert_eq!(code("IF TRUE DO LET z = 1; END print(z);"), ErrorCode::E2002);
    assert_eq!(code("WHILE FALSE DO LET z = 1; END print(z);"), ErrorCode::E2002);
    check(&in_main("LET z = 1; IF TRUE DO z = 2; END print(z);")).unwrap();
}

#[test]
fn for_rules() {
    check(&in_main("FOR i IN range(0, 3) DO print(i); END")).unwrap();
    assert_eq!(
        code("FOR i IN range(0, 3) DO LET s: String = i; END"),
        ErrorCode::E2001
    );
    assert_eq!(code("FOR i IN 5 DO print(i); END"), ErrorCode::E2001);
    assert_eq!(code("FOR i IN range(0, 3) DO END"), ErrorCode::E2009);
    assert_eq!(code("FOR i IN range(0, 3) DO print(i); END print(i);"), ErrorCode::E2002);
}

#[test]
fn while_rules() {
    check(&in_main("WHILE FALSE DO END")).unwrap();
    check(&in_main("LET n = 0; WHILE n < 3 DO n = n + 1; END")).unwrap();
    assert_eq!(code("WHILE 0 DO print(1); END"), ErrorCode::E2001);
}

#[test]
fn return_checks_declared_type() {
    let err = check_err("DEF main(): Integer DO RETURN \"x\"; END");
    assert_eq!(err.code, ErrorCode::E2001);
    check("DEF f(): Any DO RETURN \"x\"; END DEF main(): Integer DO RETURN 1; END").unwrap();
}

#[test]
fn parameters_are_in_scope() {
    check("DEF twice(n: Integer): Integer DO RETURN n + n; END DEF main() DO RETURN twice(2); END")
        .unwrap();
    let err = check_err("DEF f(n: Integer) DO RETURN m; END DEF main() DO RETURN 0; END");
    assert_eq!(err.code, ErrorCode::E2002);
}
