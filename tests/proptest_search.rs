// proptest_search.rs - Property tests for compile and search.

use jsregex::api::Regex;
use jsregex::pcre::*;
use jsregex::pcre_compile::js_reg_exp_compile;
use jsregex::pcre_exec::js_reg_exp_execute;
use proptest::collection::vec;
use proptest::prelude::*;

fn fragment_strategy() -> BoxedStrategy<&'static str> {
    prop_oneof![
        Just("a"),
        Just("b"),
        Just("[ab]"),
        Just("[^a]"),
        Just("\\d"),
        Just("."),
        Just("(a|b)"),
        Just("a*"),
        Just("b+?"),
        Just("(?:ab)?"),
        Just("c{1,2}"),
        Just("(?=a)"),
        Just("(?!b)"),
        Just("\\b"),
        Just("$"),
    ]
    .boxed()
}

fn pattern_strategy() -> BoxedStrategy<String> {
    vec(fragment_strategy(), 0..6).prop_map(|parts| parts.concat()).boxed()
}

fn compile(pattern: &str, ignore_case: JsRegExpIgnoreCaseOption) -> jsregex::pcre_internal::JsRegExp {
    let p: Vec<u16> = pattern.encode_utf16().collect();
    js_reg_exp_compile(&p, ignore_case, JsRegExpMultilineOption::SingleLine).unwrap()
}

proptest! {
    #[test]
    fn literal_search_agrees_with_str_find(
        needle in "[a-c]{1,4}",
        haystack in "[a-d]{0,40}",
    ) {
        let re = Regex::new(&needle).unwrap();
        let found = re.find(&haystack).map(|m| m.start());
        prop_assert_eq!(found, haystack.find(needle.as_str()));
    }

    #[test]
    fn ignore_case_matches_folded_text(
        needle in "[a-z]{1,4}",
        haystack in "[a-zA-Z]{0,30}",
    ) {
        let re = Regex::builder(&needle).case_insensitive(true).build().unwrap();
        let found = re.find(&haystack).map(|m| m.start());
        prop_assert_eq!(found, haystack.to_ascii_lowercase().find(needle.as_str()));
    }

    #[test]
    fn recompiling_is_deterministic(pattern in pattern_strategy(), subject in "[abc12 ]{0,20}") {
        let first = compile(&pattern, JsRegExpIgnoreCaseOption::DoNotIgnoreCase);
        let second = compile(&pattern, JsRegExpIgnoreCaseOption::DoNotIgnoreCase);
        prop_assert_eq!(&first.ops, &second.ops);
        prop_assert_eq!(first.options, second.options);
        prop_assert_eq!(first.first_byte, second.first_byte);
        prop_assert_eq!(first.req_byte, second.req_byte);

        let units: Vec<u16> = subject.encode_utf16().collect();
        let size = (first.top_bracket as usize + 1) * 3;
        let mut a = vec![0; size];
        let mut b = vec![0; size];
        let ra = js_reg_exp_execute(&first, &units, 0, &mut a);
        let rb = js_reg_exp_execute(&second, &units, 0, &mut b);
        prop_assert_eq!(ra, rb);
        if ra > 0 {
            prop_assert_eq!(&a[..2], &b[..2]);
        }
    }

    #[test]
    fn matches_stay_inside_subject(pattern in pattern_strategy(), subject in "[abc12 ]{0,20}") {
        let re = Regex::new(&pattern).unwrap();
        let units: Vec<u16> = subject.encode_utf16().collect();
        let groups = re.try_captures_units(&units, 0).unwrap();
        if let Some(groups) = groups {
            prop_assert_eq!(groups.len(), re.captures_len() + 1);
            let whole = groups[0].clone().unwrap();
            prop_assert!(whole.start <= whole.end && whole.end <= units.len());
            for group in groups.iter().flatten() {
                prop_assert!(group.start <= group.end && group.end <= units.len());
            }
        }
    }
}
