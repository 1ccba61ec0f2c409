//! Literal values as they appear in source.

use std::fmt;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};

/// A literal constant. Numbers are arbitrary-precision.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Nil,
    Boolean(bool),
    Integer(BigInt),
    Decimal(BigDecimal),
    Character(char),
    String(String),
}

/// Render a decimal in plain notation, keeping its scale (`1.50` stays `1.50`).
///
/// Decimals with a non-positive scale render as whole numbers.
pub fn format_decimal(value: &BigDecimal) -> String {
    let (digits, scale) = value.as_bigint_and_exponent();
    if scale <= 0 {
        let zeros = u32::try_from(scale.unsigned_abs()).unwrap_or(u32::MAX);
        return (digits * BigInt::from(10u8).pow(zeros)).to_string();
    }

    let scale = usize::try_from(scale).unwrap_or(usize::MAX);
    let mut text = digits.magnitude().to_string();
    if text.len() <= scale {
        text.insert_str(0, &"0".repeat(scale - text.len() + 1));
    }
    text.insert(text.len() - scale, '.');
    if digits.sign() == Sign::Minus {
        text.insert(0, '-');
    }
    text
}

fn escape_char(c: char, quote: char, out: &mut fmt::Formatter<'_>) -> fmt::Result {
    match c {
        '\u{8}' => out.write_str("\\b"),
        '\n' => out.write_str("\\n"),
        '\r' => out.write_str("\\r"),
        '\t' => out.write_str("\\t"),
        '\\' => out.write_str("\\\\"),
        c if c == quote => write!(out, "\\{c}"),
        c => write!(out, "{c}"),
    }
}

/// Source form: printing a literal and lexing the result yields it back.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Nil => f.write_str("NIL"),
            Literal::Boolean(true) => f.write_str("TRUE"),
            Literal::Boolean(false) => f.write_str("FALSE"),
            Literal::Integer(value) => write!(f, "{value}"),
            Literal::Decimal(value) => {
                let text = format_decimal(value);
                if text.contains('.') {
                    f.write_str(&text)
                } else {
                    write!(f, "{text}.0")
                }
            }
            Literal::Character(c) => {
                f.write_str("'")?;
                escape_char(*c, '\'', f)?;
                f.write_str("'")
            }
            Literal::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    escape_char(c, '"', f)?;
                }
                f.write_str("\"")
            }
        }
    }
}
