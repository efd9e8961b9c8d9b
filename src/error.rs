// error.rs - Idiomatic Rust error type for jsregex.
//
// Folds the compile error codes (positive, 1..=17) and the negative
// execute result codes into one semantic enum, keeping the original code.

use std::fmt;

use crate::pcre::*;
use crate::pcre_error::ErrorCode;

/// Error type for regex compilation and matching operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexError {
    /// The pattern failed to compile.
    Syntax { code: i32, message: String },
    /// The match limit was exceeded.
    HitLimit,
    /// Memory for the match could not be obtained.
    NoMemory,
    /// Internal engine error (should not occur in correct usage).
    Internal,
    /// Other code not covered by specific variants.
    Other(i32),
}

impl fmt::Display for RegexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegexError::Syntax { message, .. } => write!(f, "syntax error: {}", message),
            RegexError::HitLimit => write!(f, "match limit exceeded"),
            RegexError::NoMemory => write!(f, "memory allocation failed"),
            RegexError::Internal => write!(f, "internal matcher error"),
            RegexError::Other(code) => write!(f, "error code {}", code),
        }
    }
}

impl std::error::Error for RegexError {}

impl From<ErrorCode> for RegexError {
    fn from(code: ErrorCode) -> Self {
        RegexError::Syntax { code: code.code(), message: code.message().to_string() }
    }
}

impl From<i32> for RegexError {
    fn from(code: i32) -> Self {
        match code {
            JS_REGEXP_ERROR_HIT_LIMIT => RegexError::HitLimit,
            JS_REGEXP_ERROR_NO_MEMORY => RegexError::NoMemory,
            JS_REGEXP_ERROR_INTERNAL => RegexError::Internal,
            c => match ErrorCode::from_code(c) {
                Some(e) => e.into(),
                None => RegexError::Other(c),
            },
        }
    }
}

impl RegexError {
    /// Returns the underlying integer code.
    pub fn code(&self) -> i32 {
        match self {
            RegexError::Syntax { code, .. } => *code,
            RegexError::HitLimit => JS_REGEXP_ERROR_HIT_LIMIT,
            RegexError::NoMemory => JS_REGEXP_ERROR_NO_MEMORY,
            RegexError::Internal => JS_REGEXP_ERROR_INTERNAL,
            RegexError::Other(code) => *code,
        }
    }
}
