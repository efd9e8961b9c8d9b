// pcre_error.rs - Compile error codes.
// Each code carries a fixed message; codes are stable and start at 1.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    Err1 = 1,
    Err2 = 2,
    Err3 = 3,
    Err4 = 4,
    Err5 = 5,
    Err6 = 6,
    Err7 = 7,
    Err8 = 8,
    Err9 = 9,
    Err10 = 10,
    Err11 = 11,
    Err12 = 12,
    Err13 = 13,
    Err14 = 14,
    Err15 = 15,
    Err16 = 16,
    Err17 = 17,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 17] = [
        ErrorCode::Err1,
        ErrorCode::Err2,
        ErrorCode::Err3,
        ErrorCode::Err4,
        ErrorCode::Err5,
        ErrorCode::Err6,
        ErrorCode::Err7,
        ErrorCode::Err8,
        ErrorCode::Err9,
        ErrorCode::Err10,
        ErrorCode::Err11,
        ErrorCode::Err12,
        ErrorCode::Err13,
        ErrorCode::Err14,
        ErrorCode::Err15,
        ErrorCode::Err16,
        ErrorCode::Err17,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<ErrorCode> {
        if (1..=17).contains(&code) {
            Some(Self::ALL[(code - 1) as usize])
        } else {
            None
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::Err1 => "\\ at end of pattern",
            ErrorCode::Err2 => "\\c at end of pattern",
            ErrorCode::Err3 => "character value in \\x{...} sequence is too large",
            ErrorCode::Err4 => "numbers out of order in {} quantifier",
            ErrorCode::Err5 => "number too big in {} quantifier",
            ErrorCode::Err6 => "missing terminating ] for character class",
            ErrorCode::Err7 => "internal error: code overflow",
            ErrorCode::Err8 => "range out of order in character class",
            ErrorCode::Err9 => "nothing to repeat",
            ErrorCode::Err10 => "unmatched parentheses",
            ErrorCode::Err11 => "internal error: unexpected repeat",
            ErrorCode::Err12 => "unrecognized character after (?",
            ErrorCode::Err13 => "failed to get memory",
            ErrorCode::Err14 => "missing )",
            ErrorCode::Err15 => "reference to non-existent subpattern",
            ErrorCode::Err16 => "regular expression too large",
            ErrorCode::Err17 => "parentheses nested too deeply",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ErrorCode {}
