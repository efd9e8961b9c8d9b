// pcre.rs - Public types and constants.
// Result codes, compile options, program option flags and the global
// match limit.

use std::sync::atomic::{AtomicU32, Ordering};

use bitflags::bitflags;

// === Execute result codes ===
pub const JS_REGEXP_ERROR_NO_MATCH: i32 = -1;
pub const JS_REGEXP_ERROR_HIT_LIMIT: i32 = -2;
pub const JS_REGEXP_ERROR_NO_MEMORY: i32 = -3;
pub const JS_REGEXP_ERROR_INTERNAL: i32 = -4;

/// Case sensitivity requested at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum JsRegExpIgnoreCaseOption {
    #[default]
    DoNotIgnoreCase,
    IgnoreCase,
}

/// Whether `^` and `$` also match at line terminators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum JsRegExpMultilineOption {
    #[default]
    SingleLine,
    Multiline,
}

bitflags! {
    /// Flags stored in a compiled program header.
    ///
    /// The low bits record the compile options; the high bits are set by
    /// the static optimizer and select search shortcuts.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct RegExpOptions: u32 {
        const IGNORE_CASE = 0x0000_0001;
        const MULTILINE = 0x0000_0002;
        const IS_ANCHORED = 0x0200_0000;
        const USE_MULTILINE_FIRST_BYTE_OPTIMIZATION = 0x0400_0000;
        const USE_FIRST_BYTE_OPTIMIZATION = 0x0800_0000;
        const USE_REQUIRED_BYTE_OPTIMIZATION = 0x1000_0000;
    }
}

impl RegExpOptions {
    pub fn from_compile_options(
        ignore_case: JsRegExpIgnoreCaseOption,
        multiline: JsRegExpMultilineOption,
    ) -> Self {
        let mut options = RegExpOptions::empty();
        if ignore_case == JsRegExpIgnoreCaseOption::IgnoreCase {
            options |= RegExpOptions::IGNORE_CASE;
        }
        if multiline == JsRegExpMultilineOption::Multiline {
            options |= RegExpOptions::MULTILINE;
        }
        options
    }
}

// ============================================================================
// Global match limit
// ============================================================================

/// Frame pushes allowed per execute call before giving up.
pub const DEFAULT_MATCH_LIMIT: u32 = 1_000_000;

static MATCH_LIMIT: AtomicU32 = AtomicU32::new(DEFAULT_MATCH_LIMIT);

pub fn js_reg_exp_set_match_limit(n: u32) {
    MATCH_LIMIT.store(n, Ordering::Relaxed);
}

pub fn js_reg_exp_get_match_limit() -> u32 {
    MATCH_LIMIT.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_options_to_flags() {
        let o = RegExpOptions::from_compile_options(
            JsRegExpIgnoreCaseOption::IgnoreCase,
            JsRegExpMultilineOption::SingleLine,
        );
        assert!(o.contains(RegExpOptions::IGNORE_CASE));
        assert!(!o.contains(RegExpOptions::MULTILINE));

        let o = RegExpOptions::from_compile_options(
            JsRegExpIgnoreCaseOption::DoNotIgnoreCase,
            JsRegExpMultilineOption::Multiline,
        );
        assert_eq!(o, RegExpOptions::MULTILINE);
    }

    #[test]
    fn optimizer_flags_do_not_overlap_compile_flags() {
        let optimizer = RegExpOptions::IS_ANCHORED
            | RegExpOptions::USE_MULTILINE_FIRST_BYTE_OPTIMIZATION
            | RegExpOptions::USE_FIRST_BYTE_OPTIMIZATION
            | RegExpOptions::USE_REQUIRED_BYTE_OPTIMIZATION;
        assert!(!optimizer.intersects(RegExpOptions::IGNORE_CASE | RegExpOptions::MULTILINE));
    }

    #[test]
    fn default_match_limit() {
        assert_eq!(DEFAULT_MATCH_LIMIT, 1_000_000);
    }
}
