//! Runtime values.

use std::fmt;

use bigdecimal::BigDecimal;
use mica_ir::ast::format_decimal;
use mica_ir::{Literal, ScopeId};
use num_bigint::BigInt;

/// A runtime value.
///
/// Numbers are arbitrary-precision. A `Record` is a handle to a scope in
/// the interpreter's environment; two records are equal only if they are
/// the same scope.
///
/// Equality is structural. Decimals are equal only with the same digits
/// and scale, so `1.0 != 1.00`; ordering them is numeric.
#[derive(Clone, Debug)]
pub enum Value {
    Nil,
    Boolean(bool),
    Integer(BigInt),
    Decimal(BigDecimal),
    Character(char),
    String(String),
    Record(ScopeId),
    /// Integers from `start` up to but excluding `end`.
    Range { start: BigInt, end: BigInt },
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => {
                a.as_bigint_and_exponent() == b.as_bigint_and_exponent()
            }
            (Value::Character(a), Value::Character(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (
                Value::Range { start, end },
                Value::Range {
                    start: other_start,
                    end: other_end,
                },
            ) => start == other_start && end == other_end,
            _ => false,
        }
    }
}

impl Value {
    /// Name of the value's runtime type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "Nil",
            Value::Boolean(_) => "Boolean",
            Value::Integer(_) => "Integer",
            Value::Decimal(_) => "Decimal",
            Value::Character(_) => "Character",
            Value::String(_) => "String",
            Value::Record(_) => "Record",
            Value::Range { .. } => "IntegerIterable",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<ScopeId> {
        match self {
            Value::Record(scope) => Some(*scope),
            _ => None,
        }
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Nil => Value::Nil,
            Literal::Boolean(b) => Value::Boolean(*b),
            Literal::Integer(n) => Value::Integer(n.clone()),
            Literal::Decimal(d) => Value::Decimal(d.clone()),
            Literal::Character(c) => Value::Character(*c),
            Literal::String(s) => Value::String(s.clone()),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(BigInt::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

/// Display text, as used by `print` and string concatenation.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("NIL"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Decimal(d) => f.write_str(&format_decimal(d)),
            Value::Character(c) => write!(f, "{c}"),
            Value::String(s) => f.write_str(s),
            Value::Record(_) => f.write_str("<record>"),
            Value::Range { start, end } => write!(f, "range({start}, {end})"),
        }
    }
}
