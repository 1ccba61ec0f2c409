#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::ErrorCode;
use mica_ir::Span;

fn sample() -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message("type mismatch: expected `Integer`, found `String`")
        .with_label(Span::new(24, 31), "found `String`")
}

fn render(emitter: TerminalEmitter<Vec<u8>>, diag: &Diagnostic) -> String {
    let mut emitter = emitter;
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn plain_output_without_source() {
    let text = render(
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, true),
        &sample(),
    );
    assert!(text.starts_with("error[E2001]: type mismatch"));
    assert!(text.contains("found `String`"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn snippet_with_source() {
    let source = "DEF main() DO\n  LET x: Integer = \"seven\";\nEND";
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("type mismatch")
        .with_label(Span::new(33, 40), "found `String`");
    let text = render(
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
            .with_source(source)
            .with_file_path("demo.mica"),
        &diag,
    );
    assert!(text.contains("--> demo.mica:2:20"), "{text}");
    assert!(text.contains("2 |   LET x: Integer = \"seven\";"), "{text}");
    assert!(text.contains("^^^^^^^ found `String`"), "{text}");
}

#[test]
fn every_label_gets_a_snippet() {
    let source = "DEF main() DO\n  LET x: Integer = \"seven\";\nEND";
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("type mismatch")
        .with_label(Span::new(33, 40), "found `String`")
        .with_label(Span::new(23, 30), "declared `Integer`");
    let text = render(
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false).with_source(source),
        &diag,
    );
    assert_eq!(text.matches("--> <input>:2:").count(), 2, "{text}");
    assert!(text.contains("^^^^^^^ declared `Integer`"), "{text}");
    assert!(!text.contains("note"), "{text}");
}

#[test]
fn always_mode_colors_without_tty() {
    let text = render(
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false),
        &sample(),
    );
    assert!(text.contains("\x1b["));
    assert!(text.contains("E2001"));
}

#[test]
fn emit_all_renders_each() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_all(&[
        Diagnostic::error(ErrorCode::E1001).with_message("first"),
        Diagnostic::error(ErrorCode::E6001).with_message("second"),
    ]);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.contains("first"));
    assert!(text.contains("second"));
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn color_mode_parse() {
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("sometimes"), None);
}
