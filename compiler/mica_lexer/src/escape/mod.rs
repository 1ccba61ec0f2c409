//! Escape decoding for string and character literal text.
//!
//! Recognized escapes: `\b`, `\n`, `\r`, `\t`, `\'`, `\"`, `\\`.

/// Resolve the character after a backslash.
#[inline]
pub fn resolve_escape(c: char) -> Option<char> {
    match c {
        'b' => Some('\u{8}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\'' => Some('\''),
        '"' => Some('"'),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Decode the body of a string literal (quotes already stripped).
///
/// Unrecognized escapes are kept verbatim; the lexer never produces them.
pub fn unescape_string(body: &str) -> String {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => match resolve_escape(esc) {
                Some(resolved) => result.push(resolved),
                None => {
                    result.push('\\');
                    result.push(esc);
                }
            },
            None => result.push('\\'),
        }
    }

    result
}

/// Decode the body of a character literal (quotes already stripped).
///
/// Returns `None` unless the body is exactly one character or one escape.
pub fn unescape_char(body: &str) -> Option<char> {
    let mut chars = body.chars();
    let c = match chars.next()? {
        '\\' => resolve_escape(chars.next()?)?,
        c => c,
    };
    chars.next().is_none().then_some(c)
}

#[cfg(test)]
mod tests;
