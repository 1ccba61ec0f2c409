use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_collects_labels() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("type mismatch")
        .with_label(Span::new(10, 14), "found `String`")
        .with_label(Span::new(0, 3), "declared here");

    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.labels[1], Label::new(Span::new(0, 3), "declared here"));
    assert_eq!(diag.primary_span(), Some(Span::new(10, 14)));
}

#[test]
fn no_labels_means_no_primary_span() {
    let diag = Diagnostic::error(ErrorCode::E2009).with_message("empty body");
    assert_eq!(diag.primary_span(), None);
}

#[test]
fn display_is_single_line() {
    let diag = Diagnostic::error(ErrorCode::E6001).with_message("division by zero");
    assert_eq!(diag.to_string(), "error[E6001]: division by zero");
}
