use super::*;
use mica_ir::BinaryOp;
use num_bigint::BigInt;
use pretty_assertions::assert_eq;

/// Render an expression tree back to a fully parenthesized string.
fn render(source: &Source, id: ExprId, interner: &StringInterner) -> String {
    match &expr(source, id).kind {
        ExprKind::Literal(lit) => lit.to_string(),
        ExprKind::Group(inner) => render(source, *inner, interner),
        ExprKind::Binary { op, left, right } => format!(
            "({} {} {})",
            render(source, *left, interner),
            op.as_symbol(),
            render(source, *right, interner)
        ),
        ExprKind::Access { receiver, name, .. } => match receiver {
            Some(r) => format!("{}.{}", render(source, *r, interner), interner.lookup(*name)),
            None => interner.lookup(*name).to_string(),
        },
        ExprKind::Call {
            receiver,
            name,
            args,
            ..
        } => {
            let args: Vec<_> = source
                .arena
                .get_expr_list(*args)
                .iter()
                .map(|a| render(source, *a, interner))
                .collect();
            let callee = match receiver {
                Some(r) => format!("{}.{}", render(source, *r, interner), interner.lookup(*name)),
                None => interner.lookup(*name).to_string(),
            };
            format!("{callee}({})", args.join(", "))
        }
    }
}

fn rendered(src: &str) -> String {
    let (source, id, interner) = parse_returned_expr(src);
    render(&source, id, &interner)
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(rendered("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(rendered("1 * 2 + 3"), "((1 * 2) + 3)");
}

#[test]
fn same_tier_is_left_associative() {
    assert_eq!(rendered("a - b - c"), "((a - b) - c)");
    assert_eq!(rendered("a / b * c"), "((a / b) * c)");
}

#[test]
fn and_or_share_one_tier() {
    assert_eq!(rendered("a OR b AND c"), "((a OR b) AND c)");
    assert_eq!(rendered("a AND b OR c"), "((a AND b) OR c)");
}

#[test]
fn comparison_binds_looser_than_arithmetic() {
    assert_eq!(rendered("a + 1 < b * 2"), "((a + 1) < (b * 2))");
    assert_eq!(rendered("a == b AND c != d"), "((a == b) AND (c != d))");
}

#[test]
fn groups_override_precedence() {
    assert_eq!(rendered("(1 + 2) * 3"), "((1 + 2) * 3)");
    let (source, id, _) = parse_returned_expr("(1 + 2) * 3");
    let ExprKind::Binary { left, .. } = expr(&source, id).kind else {
        panic!("expected binary");
    };
    assert!(matches!(expr(&source, left).kind, ExprKind::Group(_)));
}

#[test]
fn member_access_and_calls_chain() {
    assert_eq!(rendered("a.b.c"), "a.b.c");
    assert_eq!(rendered("a.f(1, 2).g()"), "a.f(1, 2).g()");
    assert_eq!(rendered("f(g(x), y.z)"), "f(g(x), y.z)");
}

#[test]
fn member_access_binds_tighter_than_operators() {
    assert_eq!(rendered("p.x * p.y"), "(p.x * p.y)");
}

#[test]
fn all_comparison_operators() {
    for (text, op) in [
        ("==", BinaryOp::Eq),
        ("!=", BinaryOp::NotEq),
        ("<", BinaryOp::Lt),
        ("<=", BinaryOp::LtEq),
        (">", BinaryOp::Gt),
        (">=", BinaryOp::GtEq),
    ] {
        let (source, id, _) = parse_returned_expr(&format!("a {text} b"));
        let ExprKind::Binary { op: parsed, .. } = expr(&source, id).kind else {
            panic!("expected binary for {text}");
        };
        assert_eq!(parsed, op);
    }
}

#[test]
fn keyword_literals() {
    let (source, id, _) = parse_returned_expr("NIL");
    assert_eq!(literal(&source, id), &Literal::Nil);
    let (source, id, _) = parse_returned_expr("TRUE");
    assert_eq!(literal(&source, id), &Literal::Boolean(true));
    let (source, id, _) = parse_returned_expr("FALSE");
    assert_eq!(literal(&source, id), &Literal::Boolean(false));
}

#[test]
fn signed_integer_literals() {
    let (source, id, _) = parse_returned_expr("+42");
    assert_eq!(literal(&source, id), &Literal::Integer(BigInt::from(42)));
    let (source, id, _) = parse_returned_expr("-7");
    assert_eq!(literal(&source, id), &Literal::Integer(BigInt::from(-7)));
}

#[test]
fn decimal_literal_keeps_scale() {
    let (source, id, _) = parse_returned_expr("1.50");
    let Literal::Decimal(value) = literal(&source, id) else {
        panic!("expected decimal");
    };
    assert_eq!(mica_ir::ast::format_decimal(value), "1.50");
}

#[test]
fn text_literals_are_unescaped() {
    let (source, id, _) = parse_returned_expr(r#""a\tb\"c""#);
    assert_eq!(literal(&source, id), &Literal::String("a\tb\"c".to_string()));
    let (source, id, _) = parse_returned_expr(r"'\n'");
    assert_eq!(literal(&source, id), &Literal::Character('\n'));
    let (source, id, _) = parse_returned_expr("'x'");
    assert_eq!(literal(&source, id), &Literal::Character('x'));
}

#[test]
fn negative_literal_after_space_is_an_operand() {
    // `n -1` is two tokens: `n` and `-1`, which is not a valid expression tail.
    let (result, _) = parse_source("DEF main() DO RETURN n -1; END");
    assert!(result.is_err());
    assert_eq!(rendered("n - 1"), "(n - 1)");
}

#[test]
fn binary_span_covers_both_operands() {
    let src = "DEF main() DO RETURN ab + cd; END";
    let (source, id, _) = parse_returned_expr("ab + cd");
    let span = expr(&source, id).span;
    assert_eq!(&src[span.to_range()], "ab + cd");
}
