// match_limit.rs - The global match limit.
//
// Lives in its own test binary because the limit is process-wide.

use jsregex::api::Regex;
use jsregex::error::RegexError;
use jsregex::pcre::*;
use jsregex::pcre_compile::js_reg_exp_compile;
use jsregex::pcre_exec::js_reg_exp_execute;

#[test]
fn limit_is_configurable_and_enforced() {
    assert_eq!(js_reg_exp_get_match_limit(), DEFAULT_MATCH_LIMIT);

    let pattern: Vec<u16> = "^(a+)+$".encode_utf16().collect();
    let re = js_reg_exp_compile(
        &pattern,
        JsRegExpIgnoreCaseOption::DoNotIgnoreCase,
        JsRegExpMultilineOption::SingleLine,
    )
    .unwrap();
    let subject: Vec<u16> = format!("{}!", "a".repeat(30)).encode_utf16().collect();
    let mut offsets = [0i32; 6];
    assert_eq!(js_reg_exp_execute(&re, &subject, 0, &mut offsets), JS_REGEXP_ERROR_HIT_LIMIT);

    // A tiny limit stops even simple searches that need a few frames.
    js_reg_exp_set_match_limit(3);
    assert_eq!(js_reg_exp_get_match_limit(), 3);
    let api = Regex::new(r"(a|b)+c").unwrap();
    assert_eq!(api.try_captures_units(b"ababababc".as_slice(), 0), Err(RegexError::HitLimit));
    assert!(!api.is_match("ababababc"));

    // Raising it lets the same search finish.
    js_reg_exp_set_match_limit(DEFAULT_MATCH_LIMIT);
    assert!(api.is_match("ababababc"));
}
