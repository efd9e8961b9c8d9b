// api.rs - Idiomatic Rust API for jsregex.
//
// Wraps js_reg_exp_compile / js_reg_exp_execute with Rust-native types:
// Regex, RegexBuilder, Match, Captures, FindIter. `&str` text is matched
// as UTF-16 and offsets are mapped back to bytes; the `*_units` methods
// take code units directly and report code-unit offsets.

use std::ops::Range;

use crate::error::RegexError;
use crate::pcre::*;
use crate::pcre_compile::js_reg_exp_compile;
use crate::pcre_exec::{js_reg_exp_execute, CodeUnit};
use crate::pcre_internal::JsRegExp;

/// A compiled regular expression with ECMAScript semantics.
///
/// # Examples
///
/// ```
/// use jsregex::api::Regex;
///
/// let re = Regex::new(r"\d+").unwrap();
/// assert!(re.is_match("hello 42"));
///
/// let m = re.find("hello 42").unwrap();
/// assert_eq!(m.as_str(), "42");
/// assert_eq!(m.start(), 6);
/// assert_eq!(m.end(), 8);
/// ```
#[derive(Clone)]
pub struct Regex {
    inner: JsRegExp,
    pattern: String,
}

impl Regex {
    /// Compile a pattern with default options (case-sensitive, single-line).
    pub fn new(pattern: &str) -> Result<Regex, RegexError> {
        RegexBuilder::new(pattern).build()
    }

    /// Compile a pattern given as UTF-16 code units. Unpaired surrogates
    /// are allowed.
    pub fn from_utf16(pattern: &[u16]) -> Result<Regex, RegexError> {
        RegexBuilder::from_utf16(pattern).build()
    }

    /// Create a [`RegexBuilder`] for fine-grained control over compilation.
    pub fn builder(pattern: &str) -> RegexBuilder {
        RegexBuilder::new(pattern)
    }

    /// The pattern this regex was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Number of capture groups in the pattern (excluding group 0).
    pub fn captures_len(&self) -> usize {
        self.inner.num_subpatterns() as usize
    }

    /// Check whether `text` matches the pattern anywhere.
    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// Return the first match in `text`, or `None` if no match.
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.find_at(text, 0)
    }

    /// Return the first match starting at or after byte offset `start`.
    pub fn find_at<'t>(&self, text: &'t str, start: usize) -> Option<Match<'t>> {
        let utf16 = Utf16Text::new(text);
        let units = self.find_units(&utf16.units, utf16.unit_offset(start))?;
        Some(utf16.to_match(text, units))
    }

    /// Return the first match with all capture groups, or `None`.
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        let utf16 = Utf16Text::new(text);
        let groups = self.captures_units(&utf16.units, 0)?;
        let groups = groups.into_iter().map(|g| g.map(|r| utf16.to_bytes(r))).collect();
        Some(Captures { text, groups })
    }

    /// Iterate over all non-overlapping matches in `text`.
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> FindIter<'r, 't> {
        FindIter {
            regex: self,
            text,
            utf16: Utf16Text::new(text),
            next_unit: 0,
            done: false,
        }
    }

    /// First match at or after `start` in a code-unit subject, as a
    /// code-unit range.
    pub fn find_units<C: CodeUnit>(&self, subject: &[C], start: usize) -> Option<Range<usize>> {
        let mut offsets = [0i32; 3];
        let rc = js_reg_exp_execute(&self.inner, subject, start, &mut offsets);
        if rc < 0 {
            return None;
        }
        Some(offsets[0] as usize..offsets[1] as usize)
    }

    /// Every group of the first match at or after `start`, as code-unit
    /// ranges. Groups that did not participate are `None`.
    pub fn captures_units<C: CodeUnit>(
        &self,
        subject: &[C],
        start: usize,
    ) -> Option<Vec<Option<Range<usize>>>> {
        self.try_captures_units(subject, start).ok().flatten()
    }

    /// Like [`Regex::captures_units`], but reports match-time failures
    /// such as [`RegexError::HitLimit`] instead of treating them as no match.
    pub fn try_captures_units<C: CodeUnit>(
        &self,
        subject: &[C],
        start: usize,
    ) -> Result<Option<Vec<Option<Range<usize>>>>, RegexError> {
        let pairs = self.captures_len() + 1;
        let mut offsets = vec![-1i32; pairs * 3];
        let rc = js_reg_exp_execute(&self.inner, subject, start, &mut offsets);
        if rc == JS_REGEXP_ERROR_NO_MATCH {
            return Ok(None);
        }
        if rc < 0 {
            return Err(RegexError::from(rc));
        }
        let groups = offsets[..pairs * 2]
            .chunks_exact(2)
            .map(|pair| (pair[0] >= 0).then(|| pair[0] as usize..pair[1] as usize))
            .collect();
        Ok(Some(groups))
    }

    /// Access the compiled program.
    pub fn as_raw(&self) -> &JsRegExp {
        &self.inner
    }
}

impl std::fmt::Debug for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Regex").field("pattern", &self.pattern).finish_non_exhaustive()
    }
}

// === RegexBuilder ===

/// Builder for compiling a [`Regex`] with custom options.
///
/// # Examples
///
/// ```
/// use jsregex::api::Regex;
///
/// let re = Regex::builder(r"hello world")
///     .case_insensitive(true)
///     .build()
///     .unwrap();
/// assert!(re.is_match("Hello World"));
/// ```
pub struct RegexBuilder {
    pattern: Vec<u16>,
    source: String,
    ignore_case: JsRegExpIgnoreCaseOption,
    multiline: JsRegExpMultilineOption,
}

impl RegexBuilder {
    /// Create a new builder for the given pattern.
    pub fn new(pattern: &str) -> Self {
        RegexBuilder {
            pattern: pattern.encode_utf16().collect(),
            source: pattern.to_string(),
            ignore_case: JsRegExpIgnoreCaseOption::default(),
            multiline: JsRegExpMultilineOption::default(),
        }
    }

    /// Create a new builder for a pattern given as UTF-16 code units.
    pub fn from_utf16(pattern: &[u16]) -> Self {
        RegexBuilder {
            pattern: pattern.to_vec(),
            source: String::from_utf16_lossy(pattern),
            ignore_case: JsRegExpIgnoreCaseOption::default(),
            multiline: JsRegExpMultilineOption::default(),
        }
    }

    /// Enable or disable case-insensitive matching.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.ignore_case = if yes {
            JsRegExpIgnoreCaseOption::IgnoreCase
        } else {
            JsRegExpIgnoreCaseOption::DoNotIgnoreCase
        };
        self
    }

    /// Enable or disable `^`/`$` matching at every line boundary.
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multiline = if yes {
            JsRegExpMultilineOption::Multiline
        } else {
            JsRegExpMultilineOption::SingleLine
        };
        self
    }

    /// Compile the pattern into a [`Regex`].
    pub fn build(self) -> Result<Regex, RegexError> {
        let inner = js_reg_exp_compile(&self.pattern, self.ignore_case, self.multiline)?;
        Ok(Regex { inner, pattern: self.source })
    }
}

// === UTF-16 view of a &str ===

struct Utf16Text {
    units: Vec<u16>,
    /// Byte offset of each unit, plus one entry for the end of the text.
    /// Both units of a pair map to the start of their character.
    byte_offsets: Vec<usize>,
}

impl Utf16Text {
    fn new(text: &str) -> Self {
        let mut units = Vec::with_capacity(text.len());
        let mut byte_offsets = Vec::with_capacity(text.len() + 1);
        let mut buf = [0u16; 2];
        for (i, ch) in text.char_indices() {
            for &u in ch.encode_utf16(&mut buf).iter() {
                units.push(u);
                byte_offsets.push(i);
            }
        }
        byte_offsets.push(text.len());
        Utf16Text { units, byte_offsets }
    }

    /// First unit whose byte offset is at or after `byte`.
    fn unit_offset(&self, byte: usize) -> usize {
        self.byte_offsets.partition_point(|&b| b < byte)
    }

    fn to_bytes(&self, units: Range<usize>) -> Range<usize> {
        self.byte_offsets[units.start]..self.byte_offsets[units.end]
    }

    fn to_match<'t>(&self, text: &'t str, units: Range<usize>) -> Match<'t> {
        let bytes = self.to_bytes(units);
        Match { text, start: bytes.start, end: bytes.end }
    }

    /// Unit index one character after `i`.
    fn next_char(&self, i: usize) -> usize {
        if i + 1 < self.units.len()
            && (0xd800..0xdc00).contains(&self.units[i])
            && (0xdc00..0xe000).contains(&self.units[i + 1])
        {
            i + 2
        } else {
            i + 1
        }
    }
}

// === Match ===

/// A single match result referencing the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    /// Byte offset of the start of the match.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the end of the match (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Byte range of the match.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched text.
    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    /// Returns the length of the match in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the match is empty (zero-length).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// === Captures ===

/// All capture groups from a single match.
///
/// Group 0 is the entire match. Groups 1..N correspond to `(...)` in the pattern.
pub struct Captures<'t> {
    text: &'t str,
    groups: Vec<Option<Range<usize>>>,
}

impl<'t> Captures<'t> {
    /// Get capture group `i`, or `None` if the group did not participate.
    pub fn get(&self, i: usize) -> Option<Match<'t>> {
        let range = self.groups.get(i)?.clone()?;
        Some(Match { text: self.text, start: range.start, end: range.end })
    }

    /// Number of capture groups (including group 0).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups (never the case for a match).
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over all capture groups.
    pub fn iter(&self) -> CapturesIter<'_, 't> {
        CapturesIter { captures: self, index: 0 }
    }
}

impl std::fmt::Debug for Captures<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// === CapturesIter ===

/// Iterator over capture groups in a [`Captures`].
pub struct CapturesIter<'c, 't> {
    captures: &'c Captures<'t>,
    index: usize,
}

impl<'c, 't> Iterator for CapturesIter<'c, 't> {
    type Item = Option<Match<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.captures.len() {
            return None;
        }
        let m = self.captures.get(self.index);
        self.index += 1;
        Some(m)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.captures.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CapturesIter<'_, '_> {}

// === FindIter ===

/// Iterator over all non-overlapping matches in a text.
pub struct FindIter<'r, 't> {
    regex: &'r Regex,
    text: &'t str,
    utf16: Utf16Text,
    next_unit: usize,
    done: bool,
}

impl<'r, 't> Iterator for FindIter<'r, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        if self.done || self.next_unit > self.utf16.units.len() {
            return None;
        }
        let Some(units) = self.regex.find_units(&self.utf16.units, self.next_unit) else {
            self.done = true;
            return None;
        };

        // An empty match moves the search on by one character.
        self.next_unit = if units.is_empty() {
            self.utf16.next_char(units.end)
        } else {
            units.end
        };
        Some(self.utf16.to_match(self.text, units))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_new_and_find() {
        let re = Regex::new(r"\d+").unwrap();
        let m = re.find("hello 42 world").unwrap();
        assert_eq!(m.as_str(), "42");
        assert_eq!(m.start(), 6);
        assert_eq!(m.end(), 8);
        assert_eq!(m.range(), 6..8);
        assert_eq!(m.len(), 2);
        assert!(!m.is_empty());
    }

    #[test]
    fn regex_no_match() {
        let re = Regex::new(r"\d+").unwrap();
        assert!(re.find("no digits here").is_none());
    }

    #[test]
    fn regex_is_match() {
        let re = Regex::new(r"hello").unwrap();
        assert!(re.is_match("say hello"));
        assert!(!re.is_match("say goodbye"));
    }

    #[test]
    fn regex_captures() {
        let re = Regex::new(r"(\d{4})-(\d{2})-(\d{2})").unwrap();
        let caps = re.captures("date: 2026-02-14").unwrap();
        assert_eq!(caps.get(0).unwrap().as_str(), "2026-02-14");
        assert_eq!(caps.get(1).unwrap().as_str(), "2026");
        assert_eq!(caps.get(2).unwrap().as_str(), "02");
        assert_eq!(caps.get(3).unwrap().as_str(), "14");
        assert!(caps.get(4).is_none());
        assert_eq!(caps.len(), 4);
    }

    #[test]
    fn regex_captures_len_and_source() {
        let re = Regex::new(r"(a)(b)(c)").unwrap();
        assert_eq!(re.captures_len(), 3);
        assert_eq!(re.as_str(), "(a)(b)(c)");
    }

    #[test]
    fn regex_find_iter() {
        let re = Regex::new(r"\d+").unwrap();
        let matches: Vec<&str> = re.find_iter("1 + 22 = 333").map(|m| m.as_str()).collect();
        assert_eq!(matches, vec!["1", "22", "333"]);
    }

    #[test]
    fn regex_builder_options() {
        let re = Regex::builder(r"hello").case_insensitive(true).build().unwrap();
        assert!(re.is_match("HELLO"));
        assert!(re.is_match("Hello"));

        let re = Regex::builder(r"^b").multi_line(true).build().unwrap();
        assert_eq!(re.find("a\nb").map(|m| m.start()), Some(2));
        assert!(!Regex::new(r"^b").unwrap().is_match("a\nb"));
    }

    #[test]
    fn regex_invalid_pattern() {
        let err = Regex::new(r"(unclosed").unwrap_err();
        assert!(matches!(err, RegexError::Syntax { code: 14, .. }));
        let err = Regex::new(r"a**").unwrap_err();
        assert_eq!(err.code(), 9);
    }

    #[test]
    fn captures_iter() {
        let re = Regex::new(r"(a)(b)?").unwrap();
        let caps = re.captures("a").unwrap();
        let items: Vec<_> = caps.iter().collect();
        // group 2 did not participate
        assert_eq!(items.len(), 3);
        assert!(items[0].is_some());
        assert!(items[1].is_some());
        assert!(items[2].is_none());
    }

    #[test]
    fn empty_match_find_iter() {
        let re = Regex::new(r"").unwrap();
        let starts: Vec<_> = re.find_iter("ab").map(|m| m.start()).collect();
        assert_eq!(starts, vec![0, 1, 2]);

        let starts: Vec<_> = re.find_iter("\u{1F600}x").map(|m| m.start()).collect();
        assert_eq!(starts, vec![0, 4, 5]);
    }

    #[test]
    fn byte_offsets_for_non_ascii_text() {
        let re = Regex::new("b+").unwrap();
        let m = re.find("\u{e9}\u{1F600}bb").unwrap();
        assert_eq!(m.range(), 6..8);
        assert_eq!(m.as_str(), "bb");
        assert_eq!(re.find_at("bb\u{e9}b", 3).map(|m| m.range()), Some(4..5));
    }

    #[test]
    fn code_unit_subjects() {
        let re = Regex::new(r"(\w+)@(\w+)").unwrap();
        let latin1 = b"mail: joe@example";
        assert_eq!(re.find_units(latin1.as_slice(), 0), Some(6..17));

        let utf16: Vec<u16> = "x joe@host".encode_utf16().collect();
        let groups = re.captures_units(&utf16, 0).unwrap();
        assert_eq!(groups, vec![Some(2..10), Some(2..5), Some(6..10)]);
        assert_eq!(re.captures_units(&utf16, 7), None);
    }

    #[test]
    fn from_utf16_pattern() {
        let pattern: Vec<u16> = "a\\d".encode_utf16().collect();
        let re = Regex::from_utf16(&pattern).unwrap();
        assert_eq!(re.as_str(), "a\\d");
        assert!(re.is_match("xa1"));
    }

    #[test]
    fn try_captures_reports_no_match() {
        let re = Regex::new("z").unwrap();
        assert_eq!(re.try_captures_units(b"abc".as_slice(), 0), Ok(None));
    }
}
