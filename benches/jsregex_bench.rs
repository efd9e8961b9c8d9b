// Criterion benchmark suite for jsregex.
//
// Run: cargo bench
// Specific group: cargo bench -- compile
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use jsregex::pcre::*;
use jsregex::pcre_compile::js_reg_exp_compile;
use jsregex::pcre_exec::js_reg_exp_execute;
use jsregex::pcre_internal::JsRegExp;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn compile(pattern: &str, ignore_case: JsRegExpIgnoreCaseOption) -> JsRegExp {
    let p: Vec<u16> = pattern.encode_utf16().collect();
    js_reg_exp_compile(&p, ignore_case, JsRegExpMultilineOption::SingleLine)
        .expect("compile failed")
}

fn utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

fn execute(re: &JsRegExp, subject: &[u16], offsets: &mut [i32]) -> i32 {
    js_reg_exp_execute(re, subject, 0, offsets)
}

// ---------------------------------------------------------------------------
// 1. compile -- measure compilation time
// ---------------------------------------------------------------------------

fn bench_compile(c: &mut Criterion) {
    let patterns: &[(&str, &str)] = &[
        ("literal", "hello world"),
        ("dot_star", "foo.*bar"),
        ("alternation", "alpha|beta|gamma|delta"),
        ("char_class", "[a-zA-Z0-9_]+"),
        ("quantifier", "a{2,5}b+c?d*"),
        ("group", "(abc)+(def)*"),
        ("backref", "(\\w+)\\s+\\1"),
        ("lookahead", "foo(?=bar)"),
        ("date", "(\\d{4})-(\\d{2})-(\\d{2})"),
    ];

    let mut group = c.benchmark_group("compile");
    for (name, pat) in patterns {
        let units = utf16(pat);
        group.bench_with_input(BenchmarkId::from_parameter(name), &units, |b, units| {
            b.iter(|| {
                let re = js_reg_exp_compile(
                    black_box(units),
                    JsRegExpIgnoreCaseOption::DoNotIgnoreCase,
                    JsRegExpMultilineOption::SingleLine,
                );
                black_box(&re);
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. literal_match -- first/required character shortcuts
// ---------------------------------------------------------------------------

fn bench_literal_match(c: &mut Criterion) {
    let text = utf16("The quick brown fox jumps over the lazy dog near the riverbank");
    let cases: &[(&str, &str)] = &[
        ("exact", "lazy dog"),
        ("anchored_start", "^The quick"),
        ("anchored_end", "riverbank$"),
        ("word_boundary", "\\bfox\\b"),
    ];

    let mut group = c.benchmark_group("literal_match");
    for (name, pat) in cases {
        let re = compile(pat, JsRegExpIgnoreCaseOption::DoNotIgnoreCase);
        assert!(execute(&re, &text, &mut [0; 3]) > 0, "{name}: expected a match");
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            let mut offsets = [0i32; 3];
            b.iter(|| black_box(execute(&re, black_box(text), &mut offsets)));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 3. quantifiers
// ---------------------------------------------------------------------------

fn bench_quantifiers(c: &mut Criterion) {
    let text = utf16("aaaaabbbbbccccc12345");
    let cases: &[(&str, &str)] = &[
        ("greedy", "a+b+c+"),
        ("lazy", "a+?b+?c+?"),
        ("counted", "a{2,5}b{5}"),
        ("nested", "(a+b+)+"),
    ];

    let mut group = c.benchmark_group("quantifiers");
    for (name, pat) in cases {
        let re = compile(pat, JsRegExpIgnoreCaseOption::DoNotIgnoreCase);
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            let mut offsets = [0i32; 6];
            b.iter(|| black_box(execute(&re, black_box(text), &mut offsets)));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 4. captures and backreferences
// ---------------------------------------------------------------------------

fn bench_captures(c: &mut Criterion) {
    let text = utf16("log 2026-10-16 the the end");
    let cases: &[(&str, &str)] = &[
        ("date", "(\\d{4})-(\\d{2})-(\\d{2})"),
        ("repeated_word", "\\b(\\w+)\\s+\\1\\b"),
        ("alternation", "(?:end|log|the)\\s"),
    ];

    let mut group = c.benchmark_group("captures");
    for (name, pat) in cases {
        let re = compile(pat, JsRegExpIgnoreCaseOption::DoNotIgnoreCase);
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            let mut offsets = [0i32; 12];
            b.iter(|| black_box(execute(&re, black_box(text), &mut offsets)));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 5. case-insensitive and Latin-1 subjects
// ---------------------------------------------------------------------------

fn bench_subject_kinds(c: &mut Criterion) {
    let long = "lorem ipsum dolor sit amet ".repeat(64) + "NEEDLE";
    let units = utf16(&long);
    let bytes = long.as_bytes().to_vec();
    let caseless = compile("needle", JsRegExpIgnoreCaseOption::IgnoreCase);
    let exact = compile("NEEDLE", JsRegExpIgnoreCaseOption::DoNotIgnoreCase);

    let mut group = c.benchmark_group("subject_kinds");
    group.bench_function("utf16_caseless", |b| {
        let mut offsets = [0i32; 3];
        b.iter(|| black_box(execute(&caseless, black_box(&units), &mut offsets)));
    });
    group.bench_function("latin1_memchr", |b| {
        let mut offsets = [0i32; 3];
        b.iter(|| black_box(js_reg_exp_execute(&exact, black_box(&bytes[..]), 0, &mut offsets)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_compile,
    bench_literal_match,
    bench_quantifiers,
    bench_captures,
    bench_subject_kinds
);
criterion_main!(benches);
