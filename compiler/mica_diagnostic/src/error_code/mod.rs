//! Error codes for all Mica diagnostics.

use std::fmt;

/// Diagnostic error code.
///
/// Format: E#### where the first digit names the phase:
/// - E0xxx: lexer
/// - E1xxx: parser
/// - E2xxx: analyzer
/// - E6xxx: interpreter
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Character that starts no token
    E0001,
    /// Unterminated or malformed string literal
    E0002,
    /// Unterminated or malformed character literal
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Unexpected end of input
    E1002,
    /// Malformed literal text
    E1003,

    // Analyzer Errors (E2xxx)
    /// Type mismatch (not assignable)
    E2001,
    /// Undefined variable
    E2002,
    /// Undefined function for this arity
    E2003,
    /// Unknown type name
    E2004,
    /// Expression statement is not a call
    E2005,
    /// Assignment target is not an access
    E2006,
    /// Missing or mistyped `main`
    E2007,
    /// Literal out of range
    E2008,
    /// Block body must not be empty
    E2009,
    /// Declaration without type or initializer
    E2010,
    /// Receiver has no members
    E2011,
    /// Return type cannot be inferred
    E2012,
    /// Too many live scopes
    E2013,

    // Runtime Errors (E6xxx)
    /// Division by zero
    E6001,
    /// Operand or value type mismatch
    E6002,
    /// Undefined variable
    E6003,
    /// Undefined function for this arity
    E6004,
    /// Receiver is not a record
    E6005,
    /// Value is not iterable
    E6006,
    /// Maximum call depth exceeded
    E6007,
    /// Assignment target is not an access
    E6008,
    /// Too many live scopes
    E6009,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E2010 => "E2010",
            ErrorCode::E2011 => "E2011",
            ErrorCode::E2012 => "E2012",
            ErrorCode::E2013 => "E2013",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is an analyzer error (E2xxx range).
    pub fn is_type_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this is a runtime error (E6xxx range).
    pub fn is_eval_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
