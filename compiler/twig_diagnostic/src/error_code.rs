use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Scanner errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime (evaluator) errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanner Errors (E0xxx)
    /// Unexpected character in source
    E0001,
    /// Unterminated string literal
    E0002,
    /// Malformed number literal
    E0003,
    /// Symbol quote without a name
    E0004,

    // Parser Errors (E1xxx)
    /// Expected a specific token kind
    E1001,
    /// Expected expression
    E1002,

    // Runtime Errors (E6xxx)
    /// Unbound identifier
    E6001,
    /// Value is not callable
    E6002,
    /// Argument count mismatch
    E6003,
    /// Node kind or shape the evaluator cannot handle
    E6004,
    /// Literal text cannot be converted
    E6005,
    /// Call depth limit exceeded
    E6006,
    /// Native function reported a failure
    E6007,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
