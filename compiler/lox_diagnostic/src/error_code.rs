use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unexpected character in source
    E0001,
    /// Unterminated string literal
    E0002,
    /// Source too large to lex
    E0003,

    // Parser Errors (E1xxx)
    /// Expected expression
    E1001,
    /// Expected a specific token
    E1002,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 5] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
        }
    }

    /// One-line summary of what the code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unexpected character",
            ErrorCode::E0002 => "unterminated string literal",
            ErrorCode::E0003 => "source too large",
            ErrorCode::E1001 => "expected expression",
            ErrorCode::E1002 => "expected token",
        }
    }

    /// The front-end phase that reports this code, from its first digit.
    pub fn phase(&self) -> Phase {
        if self.as_str().starts_with("E0") {
            Phase::Scan
        } else {
            Phase::Parse
        }
    }
}

/// Front-end phase a diagnostic comes from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Scan,
    Parse,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Scan => write!(f, "scanner"),
            Phase::Parse => write!(f, "parser"),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    /// Case-insensitive: `e1001` parses as `E1001`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}
