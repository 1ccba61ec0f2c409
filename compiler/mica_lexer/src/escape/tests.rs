use super::*;

#[test]
fn every_escape_resolves() {
    assert_eq!(resolve_escape('b'), Some('\u{8}'));
    assert_eq!(resolve_escape('n'), Some('\n'));
    assert_eq!(resolve_escape('r'), Some('\r'));
    assert_eq!(resolve_escape('t'), Some('\t'));
    assert_eq!(resolve_escape('\''), Some('\''));
    assert_eq!(resolve_escape('"'), Some('"'));
    assert_eq!(resolve_escape('\\'), Some('\\'));
    assert_eq!(resolve_escape('q'), None);
}

#[test]
fn string_escapes_decode() {
    assert_eq!(unescape_string(r"a\nb"), "a\nb");
    assert_eq!(unescape_string(r#"say \"hi\""#), "say \"hi\"");
    assert_eq!(unescape_string(r"back\\slash"), "back\\slash");
    assert_eq!(unescape_string(r"it\'s"), "it's");
}

#[test]
fn unknown_escape_is_verbatim() {
    assert_eq!(unescape_string(r"\q"), "\\q");
    assert_eq!(unescape_string("trailing\\"), "trailing\\");
}

#[test]
fn char_bodies() {
    assert_eq!(unescape_char("a"), Some('a'));
    assert_eq!(unescape_char(r"\'"), Some('\''));
    assert_eq!(unescape_char(r"\t"), Some('\t'));
    assert_eq!(unescape_char(""), None);
    assert_eq!(unescape_char("ab"), None);
    assert_eq!(unescape_char(r"\q"), None);
}
