use super::*;
use mica_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

fn error(src: &str) -> crate::SyntaxError {
    let (result, _) = parse_source(src);
    result.expect_err("source should not parse")
}

#[test]
fn missing_semicolon_reports_next_token() {
    let src = "LET a = 1 LET b;";
    let err = error(src);
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.offset as usize, src.find("LET b").unwrap());
    assert!(err.message.contains("`;`"), "{}", err.message);
}

#[test]
fn fields_after_methods_are_rejected() {
    let src = "DEF f() DO END LET a;";
    let err = error(src);
    assert_eq!(err.offset as usize, src.find("LET").unwrap());
    assert!(err.message.contains("`LET` or `DEF`"), "{}", err.message);
}

#[test]
fn unterminated_method_reports_end_of_input() {
    let src = "DEF main() DO RETURN 1;";
    let err = error(src);
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.offset as usize, src.len());
    assert!(err.message.contains("`END`"), "{}", err.message);
}

#[test]
fn unterminated_if_names_both_terminators() {
    let err = error("DEF main() DO IF x DO a();");
    assert!(err.message.contains("`ELSE` or `END`"), "{}", err.message);
}

#[test]
fn missing_operand() {
    let src = "DEF main() DO RETURN 1 + ; END";
    let err = error(src);
    assert_eq!(err.offset as usize, src.find(';').unwrap());
    assert!(err.message.contains("expression"), "{}", err.message);
}

#[test]
fn unclosed_group() {
    let src = "DEF main() DO RETURN (1 + 2; END";
    let err = error(src);
    assert_eq!(err.offset as usize, src.find(';').unwrap());
}

#[test]
fn parameter_list_requires_identifiers() {
    let err = error("DEF f(1) DO END");
    assert!(err.message.contains("parameter name"), "{}", err.message);
}

#[test]
fn trailing_comma_in_arguments() {
    let err = error("DEF main() DO f(1,); END");
    assert!(err.message.contains("expression"), "{}", err.message);
}

#[test]
fn stray_top_level_token() {
    let err = error("RETURN 1;");
    assert_eq!(err.offset, 0);
}

#[test]
fn diagnostic_carries_code_and_span() {
    let err = error("LET a = ;");
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.primary_span(), Some(err.span));
}
