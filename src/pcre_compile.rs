// pcre_compile.rs - Pattern compiler.
// Turns a UTF-16 pattern into an instruction program. A structural dry run
// (calculate_compiled_pattern_length) validates the pattern and bounds the
// program size; the second pass emits instructions while tracking the
// first/required character facts used by the search driver.

use tracing::debug;

use crate::pcre::*;
use crate::pcre_error::ErrorCode;
use crate::pcre_internal::*;
use crate::pcre_optimize::*;
use crate::pcre_tables::*;
use crate::pcre_ucp_searchfuncs::{get_othercase_range, ucp_othercase};

// ============================================================================
// Pattern access
// ============================================================================

#[inline]
fn peek(pattern: &[u16], i: usize) -> Option<u32> {
    pattern.get(i).map(|&u| u as u32)
}

#[inline]
fn next_is(pattern: &[u16], i: usize, c: u8) -> bool {
    peek(pattern, i) == Some(c as u32)
}

/// Reads the character at `*ptr`, combining a surrogate pair into one code
/// point. `*ptr` is left on the last unit consumed.
fn read_char(pattern: &[u16], ptr: &mut usize) -> u32 {
    let c = pattern[*ptr] as u32;
    if is_lead_surrogate(c) {
        if let Some(t) = peek(pattern, *ptr + 1) {
            if is_trail_surrogate(t) {
                *ptr += 1;
                return combine_surrogates(c, t);
            }
        }
    }
    c
}

// ============================================================================
// Escapes
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Escape {
    /// A literal character.
    Char(u32),
    /// A character type or word boundary test.
    Type(OpCode),
    /// A backreference to the given group.
    BackRef(u32),
}

/// Interprets the escape whose backslash is at `*ptr`. On return `*ptr` is
/// on the last character of the escape.
///
/// `bracount` is the number of capturing groups in the whole pattern. A
/// decimal escape is a backreference when its full value is within it, and
/// an octal escape otherwise.
pub fn check_escape(
    pattern: &[u16],
    ptr: &mut usize,
    bracount: u32,
    is_class: bool,
) -> Result<Escape, ErrorCode> {
    *ptr += 1;
    let Some(c) = peek(pattern, *ptr) else {
        return Err(ErrorCode::Err1);
    };

    if c > 127 || !is_ascii_alphanumeric(c) {
        return Ok(Escape::Char(c));
    }

    let escape = match c as u8 {
        b'b' if is_class => Escape::Char(0x08),
        b'B' if is_class => Escape::Char('B' as u32),
        b'b' => Escape::Type(OpCode::WordBoundary),
        b'B' => Escape::Type(OpCode::NotWordBoundary),
        b'd' => Escape::Type(OpCode::Digit),
        b'D' => Escape::Type(OpCode::NotDigit),
        b's' => Escape::Type(OpCode::Whitespace),
        b'S' => Escape::Type(OpCode::NotWhitespace),
        b'w' => Escape::Type(OpCode::Wordchar),
        b'W' => Escape::Type(OpCode::NotWordchar),
        b'f' => Escape::Char(0x0c),
        b'n' => Escape::Char(0x0a),
        b'r' => Escape::Char(0x0d),
        b't' => Escape::Char(0x09),
        b'v' => Escape::Char(0x0b),

        b'1'..=b'9' => {
            if !is_class {
                let mut n = c - '0' as u32;
                let mut last = *ptr;
                while let Some(d) = peek(pattern, last + 1).filter(|&d| is_ascii_digit(d)) {
                    n = n.saturating_mul(10).saturating_add(d - '0' as u32);
                    last += 1;
                }
                // The whole digit run names the group, or none of it does.
                if n <= bracount {
                    *ptr = last;
                    return Ok(Escape::BackRef(n));
                }
            }
            if c >= '8' as u32 {
                Escape::Char(c)
            } else {
                Escape::Char(read_octal(pattern, ptr, c))
            }
        }
        b'0' => Escape::Char(read_octal(pattern, ptr, c)),

        b'x' => match read_hex(pattern, *ptr + 1, 2) {
            Some(v) => {
                *ptr += 2;
                Escape::Char(v)
            }
            None => Escape::Char(c),
        },
        b'u' => match read_hex(pattern, *ptr + 1, 4) {
            Some(v) => {
                *ptr += 4;
                Escape::Char(v)
            }
            None => Escape::Char(c),
        },

        b'c' => {
            let Some(x) = peek(pattern, *ptr + 1) else {
                return Err(ErrorCode::Err2);
            };
            if (!is_class && !is_ascii_alpha(x)) || (!is_ascii_alphanumeric(x) && x != '_' as u32)
            {
                // Literal backslash; parsing resumes at the 'c'.
                *ptr -= 1;
                return Ok(Escape::Char('\\' as u32));
            }
            *ptr += 1;
            Escape::Char(to_ascii_upper(x) ^ 0x40)
        }

        _ => Escape::Char(c),
    };
    Ok(escape)
}

/// Up to three octal digits starting with `first` (already at `*ptr`),
/// stopping before the value would exceed 255.
fn read_octal(pattern: &[u16], ptr: &mut usize, first: u32) -> u32 {
    let mut c = first - '0' as u32;
    for _ in 0..2 {
        match peek(pattern, *ptr + 1) {
            Some(d) if is_ascii_octal_digit(d) => {
                let cc = c * 8 + d - '0' as u32;
                if cc > 255 {
                    break;
                }
                c = cc;
                *ptr += 1;
            }
            _ => break,
        }
    }
    c
}

fn read_hex(pattern: &[u16], start: usize, digits: usize) -> Option<u32> {
    let mut v = 0;
    for i in 0..digits {
        let d = peek(pattern, start + i)?;
        if !is_ascii_hex_digit(d) {
            return None;
        }
        v = v * 16 + hex_value(d);
    }
    Some(v)
}

// ============================================================================
// Counted repeats
// ============================================================================

/// Whether the text at `p` (just after a `{`) is a well-formed `n}`,
/// `n,}` or `n,m}`.
pub fn is_counted_repeat(pattern: &[u16], mut p: usize) -> bool {
    let digit_at = |p: usize| peek(pattern, p).is_some_and(is_ascii_digit);

    if !digit_at(p) {
        return false;
    }
    while digit_at(p) {
        p += 1;
    }
    if next_is(pattern, p, b'}') {
        return true;
    }
    if !next_is(pattern, p, b',') {
        return false;
    }
    p += 1;
    if next_is(pattern, p, b'}') {
        return true;
    }
    if !digit_at(p) {
        return false;
    }
    while digit_at(p) {
        p += 1;
    }
    next_is(pattern, p, b'}')
}

fn read_number(pattern: &[u16], p: &mut usize) -> u32 {
    let mut n: u32 = 0;
    while let Some(d) = peek(pattern, *p).filter(|&d| is_ascii_digit(d)) {
        n = n.saturating_mul(10).saturating_add(d - '0' as u32);
        *p += 1;
    }
    n
}

/// Reads the counts of a quantifier already checked by
/// [`is_counted_repeat`]. `*p` starts after the `{` and ends on the `}`.
/// A `None` maximum means unbounded.
pub fn read_repeat_counts(pattern: &[u16], p: &mut usize) -> Result<(u32, Option<u32>), ErrorCode> {
    let min = read_number(pattern, p);
    if min > MAX_REPEAT_COUNT {
        return Err(ErrorCode::Err5);
    }
    if next_is(pattern, *p, b'}') {
        return Ok((min, Some(min)));
    }
    *p += 1;
    if next_is(pattern, *p, b'}') {
        return Ok((min, None));
    }
    let max = read_number(pattern, p);
    if max > MAX_REPEAT_COUNT {
        return Err(ErrorCode::Err5);
    }
    if max < min {
        return Err(ErrorCode::Err4);
    }
    Ok((min, Some(max)))
}

// ============================================================================
// Character classes
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClassItem {
    Char(u32),
    Range(u32, u32),
    Type(OpCode),
}

/// Parses `[...]` starting at the `[` and leaves `*ptr` on the `]`.
/// Returns the negation flag and the members in source order. Members are
/// code units; a surrogate pair is two members.
fn parse_class_items(
    pattern: &[u16],
    ptr: &mut usize,
    bracount: u32,
) -> Result<(bool, Vec<ClassItem>), ErrorCode> {
    *ptr += 1;
    let negate = next_is(pattern, *ptr, b'^');
    if negate {
        *ptr += 1;
    }

    let mut items = Vec::new();
    loop {
        let Some(raw) = peek(pattern, *ptr) else {
            return Err(ErrorCode::Err6);
        };
        if raw == ']' as u32 {
            return Ok((negate, items));
        }

        let c = if raw == '\\' as u32 {
            match check_escape(pattern, ptr, bracount, true)? {
                Escape::Char(v) => v,
                Escape::Type(t) => {
                    items.push(ClassItem::Type(t));
                    *ptr += 1;
                    continue;
                }
                Escape::BackRef(_) => unreachable!("no backreferences inside a class"),
            }
        } else {
            raw
        };

        if next_is(pattern, *ptr + 1, b'-')
            && peek(pattern, *ptr + 2).is_some_and(|e| e != ']' as u32)
        {
            let save = *ptr;
            *ptr += 2;
            let d = if next_is(pattern, *ptr, b'\\') {
                match check_escape(pattern, ptr, bracount, true)? {
                    Escape::Char(v) => Some(v),
                    _ => None,
                }
            } else {
                peek(pattern, *ptr)
            };
            match d {
                Some(d) => {
                    if d < c {
                        return Err(ErrorCode::Err8);
                    }
                    items.push(if d == c { ClassItem::Char(c) } else { ClassItem::Range(c, d) });
                    *ptr += 1;
                    continue;
                }
                None => {
                    // `[a-\d]`: the '-' is literal.
                    *ptr = save;
                }
            }
        }

        items.push(ClassItem::Char(c));
        *ptr += 1;
    }
}

/// Result of building a class: either a lone character the caller emits as
/// a literal (or `Not`), or a class instruction.
#[derive(Debug)]
enum BuiltClass {
    Single { c: u32, negate: bool },
    Op(Operation),
}

struct ClassBuilder {
    bits: [u8; 32],
    data: Vec<u8>,
    ignore_case: bool,
    class_utf8: bool,
    flip_negation: bool,
    char_count: u32,
    last_char: u32,
}

impl ClassBuilder {
    fn new(ignore_case: bool) -> Self {
        ClassBuilder {
            bits: [0; 32],
            data: Vec::new(),
            ignore_case,
            class_utf8: false,
            flip_negation: false,
            char_count: 0,
            last_char: 0,
        }
    }

    #[inline]
    fn set_bit(&mut self, c: u32) {
        self.bits[(c / 8) as usize] |= 1 << (c % 8);
    }

    fn or_cbits(&mut self, offset: usize, invert: bool) {
        for i in 0..32 {
            let b = CBITS[offset + i];
            self.bits[i] |= if invert { !b } else { b };
        }
    }

    fn push_xcl(&mut self, lo: u32, hi: u32) {
        if lo == hi {
            self.data.push(XCL_SINGLE);
            encode_utf8(lo, &mut self.data);
        } else {
            self.data.push(XCL_RANGE);
            encode_utf8(lo, &mut self.data);
            encode_utf8(hi, &mut self.data);
        }
    }

    fn add_type(&mut self, ty: OpCode) {
        match ty {
            OpCode::Digit => self.or_cbits(CBIT_DIGIT, false),
            OpCode::NotDigit => {
                self.or_cbits(CBIT_DIGIT, true);
                self.flip_negation = true;
            }
            OpCode::Wordchar => self.or_cbits(CBIT_WORD, false),
            OpCode::NotWordchar => {
                self.or_cbits(CBIT_WORD, true);
                self.flip_negation = true;
            }
            OpCode::Whitespace => {
                self.or_cbits(CBIT_SPACE, false);
                self.class_utf8 = true;
                for &(lo, hi) in SPACE_RANGES_ABOVE_LATIN1 {
                    self.push_xcl(lo, hi);
                }
            }
            OpCode::NotWhitespace => {
                self.or_cbits(CBIT_SPACE, true);
                self.class_utf8 = true;
                let mut next = 0x100;
                for &(lo, hi) in SPACE_RANGES_ABOVE_LATIN1 {
                    if lo > next {
                        self.push_xcl(next, lo - 1);
                    }
                    next = hi + 1;
                }
                self.push_xcl(next, 0x10ffff);
            }
            _ => {}
        }
        // Never collapse a class holding a type to a single character.
        self.char_count += 2;
    }

    fn add_char(&mut self, c: u32) {
        if c > 255 || (self.ignore_case && c > 127) {
            self.class_utf8 = true;
            self.push_xcl(c, c);
            if self.ignore_case {
                if let Some(other) = ucp_othercase(c) {
                    self.push_xcl(other, other);
                }
            }
            return;
        }
        self.set_bit(c);
        if self.ignore_case {
            self.set_bit(flip_case(c));
        }
        self.char_count += 1;
        self.last_char = c;
    }

    fn add_range(&mut self, mut c: u32, mut d: u32) {
        if d > 255 || (self.ignore_case && d > 127) {
            self.class_utf8 = true;
            if self.ignore_case {
                let orig_d = d;
                let mut cc = c;
                while let Some((occ, ocd)) = get_othercase_range(&mut cc, orig_d) {
                    if occ >= c && ocd <= d {
                        continue;
                    }
                    if occ < c && ocd + 1 >= c {
                        c = occ;
                        continue;
                    }
                    if ocd > d && occ <= d + 1 {
                        d = ocd;
                        continue;
                    }
                    self.push_xcl(occ, ocd);
                }
            }
            self.push_xcl(c, d);
            return;
        }
        for x in c..=d {
            self.set_bit(x);
            if self.ignore_case {
                self.set_bit(flip_case(x));
            }
        }
        self.char_count += d - c + 1;
        self.last_char = d;
    }

    fn finish(mut self, negate: bool) -> BuiltClass {
        if self.char_count == 1 && !self.class_utf8 && (!negate || self.last_char < 128) {
            return BuiltClass::Single { c: self.last_char, negate };
        }

        if self.class_utf8 && !self.flip_negation {
            let mut flags = 0;
            if negate {
                flags |= XCL_NOT;
            }
            if self.char_count > 0 {
                flags |= XCL_MAP;
            }
            self.data.push(XCL_END);
            return BuiltClass::Op(Operation::new(
                OpCode::XClass,
                OperationPayload::XClass(Box::new(XClassData {
                    flags,
                    map: self.bits,
                    data: self.data,
                })),
            ));
        }

        let opcode = if negate == self.flip_negation { OpCode::Class } else { OpCode::NClass };
        let mut bits = self.bits;
        if negate {
            for b in bits.iter_mut() {
                *b = !*b;
            }
        }
        BuiltClass::Op(Operation::new(opcode, OperationPayload::Class { bits: Box::new(bits) }))
    }
}

fn build_class(negate: bool, items: &[ClassItem], ignore_case: bool) -> BuiltClass {
    let mut builder = ClassBuilder::new(ignore_case);
    for &item in items {
        match item {
            ClassItem::Char(c) => builder.add_char(c),
            ClassItem::Range(c, d) => builder.add_range(c, d),
            ClassItem::Type(t) => builder.add_type(t),
        }
    }
    builder.finish(negate)
}

// ============================================================================
// Second pass: code generation
// ============================================================================

struct CompileData<'a> {
    pattern: &'a [u16],
    ops: Vec<Operation>,
    /// Capturing groups in the whole pattern, from the length pass.
    num_capturing_brackets: u32,
    /// Capturing groups opened so far.
    brackets: u32,
    top_backref: u32,
    /// Bit n set when group n (n < 32) is referenced; bit 0 for higher groups.
    backref_map: u32,
    ignore_case: bool,
    multiline: bool,
}

/// First/required character bookkeeping for one branch.
struct BranchState {
    firstbyte: i32,
    reqbyte: i32,
    zerofirstbyte: i32,
    zeroreqbyte: i32,
    req_caseopt: i32,
    req_varyopt: i32,
    groupsetfirstbyte: bool,
    /// Most recent repeatable item.
    previous: Option<usize>,
}

impl BranchState {
    fn new(ignore_case: bool) -> Self {
        BranchState {
            firstbyte: REQ_UNSET,
            reqbyte: REQ_UNSET,
            zerofirstbyte: REQ_UNSET,
            zeroreqbyte: REQ_UNSET,
            req_caseopt: if ignore_case { REQ_IGNORE_CASE } else { 0 },
            req_varyopt: 0,
            groupsetfirstbyte: false,
            previous: None,
        }
    }

    /// An item that matches a character but gives no usable hint.
    fn no_first_hint(&mut self) {
        if self.firstbyte == REQ_UNSET {
            self.firstbyte = REQ_NONE;
        }
        self.zerofirstbyte = self.firstbyte;
        self.zeroreqbyte = self.reqbyte;
    }
}

impl<'a> CompileData<'a> {
    /// First and last code units of `c` usable as search hints. `None` for
    /// a caseless character outside ASCII that has another case.
    fn char_hint(&self, c: u32) -> Option<(i32, i32)> {
        if c < 128 {
            let u = if self.ignore_case { to_ascii_lower(c) } else { c } as i32;
            return Some((u, u));
        }
        if self.ignore_case && ucp_othercase(c).is_some() {
            return None;
        }
        if c > 0xffff {
            Some((lead_surrogate(c) as i32, trail_surrogate(c) as i32))
        } else {
            Some((c as i32, c as i32))
        }
    }

    fn emit_char(&mut self, st: &mut BranchState, c: u32) {
        st.previous = Some(self.ops.len());
        let op = if c < 128 {
            if self.ignore_case && is_ascii_alpha(c) {
                Operation::new(OpCode::AsciiLetterIgnoringCase, OperationPayload::Char { c: c | 0x20 })
            } else {
                Operation::new(OpCode::AsciiChar, OperationPayload::Char { c })
            }
        } else if self.ignore_case {
            Operation::new(OpCode::CharIgnoringCase, OperationPayload::Char { c })
        } else {
            Operation::new(OpCode::Char, OperationPayload::Char { c })
        };
        self.ops.push(op);

        let hint = self.char_hint(c);
        if st.firstbyte == REQ_UNSET {
            st.zerofirstbyte = REQ_NONE;
            st.zeroreqbyte = st.reqbyte;
            match hint {
                Some((first, last)) => {
                    st.firstbyte = first | st.req_caseopt;
                    if c > 0xffff {
                        st.reqbyte = last | st.req_caseopt | st.req_varyopt;
                    }
                }
                None => {
                    st.firstbyte = REQ_NONE;
                    st.reqbyte = REQ_NONE;
                }
            }
        } else {
            st.zerofirstbyte = st.firstbyte;
            st.zeroreqbyte = st.reqbyte;
            if let Some((_, last)) = hint {
                st.reqbyte = last | st.req_caseopt | st.req_varyopt;
            }
        }
    }

    /// Compiles one alternative, stopping at `|`, `)` or the end of the
    /// pattern with `*ptr` on that character.
    fn compile_branch(
        &mut self,
        ptr: &mut usize,
        first_out: &mut i32,
        req_out: &mut i32,
    ) -> Result<(), ErrorCode> {
        let mut st = BranchState::new(self.ignore_case);

        while let Some(c) = peek(self.pattern, *ptr) {
            let meta = if c < 128 { c as u8 } else { 0 };
            match meta {
                b'|' | b')' => break,

                b'^' => {
                    if self.multiline {
                        if st.firstbyte == REQ_UNSET {
                            st.firstbyte = REQ_NONE;
                        }
                        self.ops.push(Operation::simple(OpCode::Bol));
                    } else {
                        self.ops.push(Operation::simple(OpCode::Circ));
                    }
                    st.previous = None;
                }

                b'$' => {
                    st.previous = None;
                    let op = if self.multiline { OpCode::Eol } else { OpCode::Dollar };
                    self.ops.push(Operation::simple(op));
                }

                b'.' => {
                    st.no_first_hint();
                    st.previous = Some(self.ops.len());
                    self.ops.push(Operation::simple(OpCode::NotNewline));
                }

                b'[' => {
                    let (negate, items) =
                        parse_class_items(self.pattern, ptr, self.num_capturing_brackets)?;
                    match build_class(negate, &items, self.ignore_case) {
                        BuiltClass::Single { c, negate: false } => self.emit_char(&mut st, c),
                        BuiltClass::Single { c, negate: true } => {
                            st.no_first_hint();
                            st.previous = Some(self.ops.len());
                            self.ops.push(Operation::new(OpCode::Not, OperationPayload::Char { c }));
                        }
                        BuiltClass::Op(op) => {
                            st.no_first_hint();
                            st.previous = Some(self.ops.len());
                            self.ops.push(op);
                        }
                    }
                }

                b'{' if is_counted_repeat(self.pattern, *ptr + 1) => {
                    *ptr += 1;
                    let (min, max) = read_repeat_counts(self.pattern, ptr)?;
                    let minimize = self.skip_lazy_marker(ptr);
                    self.compile_repeat(&mut st, min, max, minimize)?;
                }
                b'*' | b'+' | b'?' => {
                    let (min, max) = match meta {
                        b'*' => (0, None),
                        b'+' => (1, None),
                        _ => (0, Some(1)),
                    };
                    let minimize = self.skip_lazy_marker(ptr);
                    self.compile_repeat(&mut st, min, max, minimize)?;
                }

                b'(' => self.compile_group(&mut st, ptr)?,

                b'\\' => match check_escape(self.pattern, ptr, self.num_capturing_brackets, false)? {
                    Escape::Char(v) => {
                        let v = self.combine_escaped_pair(ptr, v);
                        self.emit_char(&mut st, v);
                    }
                    Escape::Type(t) => {
                        let matches_char =
                            !matches!(t, OpCode::WordBoundary | OpCode::NotWordBoundary);
                        if matches_char {
                            st.no_first_hint();
                        } else {
                            st.zerofirstbyte = st.firstbyte;
                            st.zeroreqbyte = st.reqbyte;
                        }
                        st.previous = matches_char.then_some(self.ops.len());
                        self.ops.push(Operation::simple(t));
                    }
                    Escape::BackRef(n) => {
                        st.no_first_hint();
                        st.previous = Some(self.ops.len());
                        self.ops.push(Operation::new(
                            OpCode::Ref,
                            OperationPayload::Ref { number: n as u16 },
                        ));
                        self.top_backref = self.top_backref.max(n);
                        self.backref_map |= if n < 32 { 1 << n } else { 1 };
                    }
                },

                _ => {
                    let c = read_char(self.pattern, ptr);
                    self.emit_char(&mut st, c);
                }
            }
            *ptr += 1;
        }

        *first_out = st.firstbyte;
        *req_out = st.reqbyte;
        Ok(())
    }

    fn skip_lazy_marker(&self, ptr: &mut usize) -> bool {
        if next_is(self.pattern, *ptr + 1, b'?') {
            *ptr += 1;
            true
        } else {
            false
        }
    }

    /// `\uD83D\uDE00` denotes one supplementary character.
    fn combine_escaped_pair(&self, ptr: &mut usize, c: u32) -> u32 {
        if !is_lead_surrogate(c)
            || !next_is(self.pattern, *ptr + 1, b'\\')
            || !next_is(self.pattern, *ptr + 2, b'u')
        {
            return c;
        }
        match read_hex(self.pattern, *ptr + 3, 4) {
            Some(t) if is_trail_surrogate(t) => {
                *ptr += 6;
                combine_surrogates(c, t)
            }
            _ => c,
        }
    }

    fn compile_group(&mut self, st: &mut BranchState, ptr: &mut usize) -> Result<(), ErrorCode> {
        let start = self.ops.len();
        let opcode = if next_is(self.pattern, *ptr + 1, b'?') {
            let opcode = match peek(self.pattern, *ptr + 2).filter(|&c| c < 128).map(|c| c as u8) {
                Some(b':') => OpCode::Bra,
                Some(b'=') => OpCode::Assert,
                Some(b'!') => OpCode::AssertNot,
                _ => return Err(ErrorCode::Err12),
            };
            *ptr += 3;
            if opcode == OpCode::Bra {
                self.ops.push(Operation::new(
                    OpCode::Bra,
                    OperationPayload::Bracket { link: 0, number: 0 },
                ));
            } else {
                self.ops.push(Operation::link(opcode, 0));
            }
            opcode
        } else {
            *ptr += 1;
            self.brackets += 1;
            let number = self.brackets;
            self.ops.push(Operation::new(
                OpCode::Bra,
                OperationPayload::Bracket { link: 0, number: number.min(EXTRACT_BASIC_MAX + 1) },
            ));
            if number > EXTRACT_BASIC_MAX {
                self.ops.push(Operation::new(
                    OpCode::BraNumber,
                    OperationPayload::BraNumber { number },
                ));
            }
            OpCode::Bra
        };

        st.previous = Some(start);
        let tempreqvary = st.req_varyopt;
        let mut subfirstbyte = REQ_UNSET;
        let mut subreqbyte = REQ_UNSET;
        self.compile_bracket(ptr, start, &mut subfirstbyte, &mut subreqbyte)?;

        st.zeroreqbyte = st.reqbyte;
        st.zerofirstbyte = st.firstbyte;
        st.groupsetfirstbyte = false;

        if opcode == OpCode::Bra {
            if st.firstbyte == REQ_UNSET {
                if subfirstbyte >= 0 {
                    st.firstbyte = subfirstbyte;
                    st.groupsetfirstbyte = true;
                } else {
                    st.firstbyte = REQ_NONE;
                }
                st.zerofirstbyte = REQ_NONE;
            } else if subfirstbyte >= 0 && subreqbyte < 0 {
                subreqbyte = subfirstbyte | tempreqvary;
            }
            if subreqbyte >= 0 {
                st.reqbyte = subreqbyte;
            }
        } else if opcode == OpCode::Assert && subreqbyte >= 0 {
            // Only the required byte: an asserted first char is recovered
            // later by the optimizer.
            st.reqbyte = subreqbyte;
        }

        if !next_is(self.pattern, *ptr, b')') {
            return Err(ErrorCode::Err14);
        }
        Ok(())
    }

    fn compile_repeat(
        &mut self,
        st: &mut BranchState,
        min: u32,
        max: Option<u32>,
        minimize: bool,
    ) -> Result<(), ErrorCode> {
        let Some(prev) = st.previous else {
            return Err(ErrorCode::Err9);
        };
        if min == 0 {
            st.firstbyte = st.zerofirstbyte;
            st.reqbyte = st.zeroreqbyte;
        }
        let reqvary = if max == Some(min) { 0 } else { REQ_VARY };

        match self.ops[prev].opcode {
            OpCode::Char | OpCode::CharIgnoringCase | OpCode::AsciiChar
            | OpCode::AsciiLetterIgnoringCase => {
                if min > 1 {
                    let hint = self.ops[prev].char_value().and_then(|c| self.char_hint(c));
                    if let Some((_, last)) = hint {
                        st.reqbyte = last | st.req_caseopt | st.req_varyopt;
                    }
                }
                self.output_single_repeat(prev, RepeatFamily::Char, min, max, minimize);
            }
            OpCode::Not => self.output_single_repeat(prev, RepeatFamily::Not, min, max, minimize),
            op if op.is_char_type() => {
                self.output_single_repeat(prev, RepeatFamily::Type, min, max, minimize)
            }

            OpCode::Class | OpCode::NClass | OpCode::XClass | OpCode::Ref => {
                if max == Some(0) {
                    self.ops.truncate(prev);
                } else {
                    let op = match (min, max) {
                        (0, None) => Operation::simple(cr_opcode(RepeatShape::Star, minimize)),
                        (1, None) => Operation::simple(cr_opcode(RepeatShape::Plus, minimize)),
                        (0, Some(1)) => Operation::simple(cr_opcode(RepeatShape::Query, minimize)),
                        _ => Operation::new(
                            cr_opcode(RepeatShape::Upto, minimize),
                            OperationPayload::Range { min: min as u16, max: max.unwrap_or(0) as u16 },
                        ),
                    };
                    self.ops.push(op);
                }
            }

            OpCode::Bra => self.repeat_group(st, prev, min, max, minimize),

            OpCode::Assert | OpCode::AssertNot => {
                if min == 0 {
                    self.ops.truncate(prev);
                }
            }

            _ => return Err(ErrorCode::Err11),
        }

        st.previous = None;
        st.req_varyopt |= reqvary;
        Ok(())
    }

    /// Rewrites the single-character item at `prev` (the last instruction)
    /// into its repeat form.
    fn output_single_repeat(
        &mut self,
        prev: usize,
        family: RepeatFamily,
        min: u32,
        max: Option<u32>,
        minimize: bool,
    ) {
        debug_assert_eq!(prev + 1, self.ops.len());
        let Some(item) = self.ops.pop() else {
            return;
        };
        if max == Some(0) {
            return;
        }

        let c = item.char_value().unwrap_or(0);
        let ty = item.opcode;
        let make = |shape: RepeatShape, count: Option<u32>| {
            let payload = match (family, count) {
                (RepeatFamily::Type, None) => OperationPayload::Type { ty },
                (RepeatFamily::Type, Some(n)) => OperationPayload::TypeCount { ty, count: n as u16 },
                (_, None) => OperationPayload::Char { c },
                (_, Some(n)) => OperationPayload::CharCount { c, count: n as u16 },
            };
            Operation::new(repeat_opcode(family, shape, minimize), payload)
        };

        match (min, max) {
            (0, None) => self.ops.push(make(RepeatShape::Star, None)),
            (0, Some(1)) => self.ops.push(make(RepeatShape::Query, None)),
            (0, Some(m)) => self.ops.push(make(RepeatShape::Upto, Some(m))),
            (1, None) => self.ops.push(make(RepeatShape::Plus, None)),
            (1, Some(m)) => {
                self.ops.push(item);
                if m > 1 {
                    self.ops.push(make(RepeatShape::Upto, Some(m - 1)));
                }
            }
            (n, max) => {
                self.ops.push(make(RepeatShape::Exact, Some(n)));
                match max {
                    None => self.ops.push(make(RepeatShape::Star, None)),
                    Some(m) if m != n => self.ops.push(make(RepeatShape::Upto, Some(m - n))),
                    Some(_) => {}
                }
            }
        }
    }

    /// Replicates the group starting at `prev` (which runs to the end of
    /// the program) for a quantifier.
    fn repeat_group(
        &mut self,
        st: &mut BranchState,
        prev: usize,
        min: u32,
        max: Option<u32>,
        minimize: bool,
    ) {
        let len = self.ops.len() - prev;
        let brazero = if minimize { OpCode::BraMinZero } else { OpCode::BraZero };
        // Optional wrapper brackets whose kets are still to be written.
        let mut pending: Vec<usize> = Vec::new();
        let mut src = prev;
        let mut repeat_max: i64 = max.map_or(-1, i64::from);

        if min == 0 {
            if repeat_max == 0 {
                self.ops.truncate(prev);
                return;
            }
            if repeat_max <= 1 {
                self.ops.insert(prev, Operation::simple(brazero));
                src = prev + 1;
            } else {
                self.ops.insert(prev, Operation::simple(brazero));
                self.ops.insert(
                    prev + 1,
                    Operation::new(OpCode::Bra, OperationPayload::Bracket { link: 0, number: 0 }),
                );
                pending.push(prev + 1);
                src = prev + 2;
            }
            repeat_max -= 1;
        } else {
            if min > 1 {
                if st.groupsetfirstbyte && st.reqbyte < 0 {
                    st.reqbyte = st.firstbyte;
                }
                for _ in 1..min {
                    self.ops.extend_from_within(src..src + len);
                }
            }
            if repeat_max > 0 {
                repeat_max -= min as i64;
            }
        }

        if repeat_max >= 0 {
            for i in (0..repeat_max).rev() {
                self.ops.push(Operation::simple(brazero));
                if i != 0 {
                    pending.push(self.ops.len());
                    self.ops.push(Operation::new(
                        OpCode::Bra,
                        OperationPayload::Bracket { link: 0, number: 0 },
                    ));
                }
                self.ops.extend_from_within(src..src + len);
            }
            while let Some(bra) = pending.pop() {
                let offset = self.ops.len() - bra;
                self.ops.push(Operation::link(OpCode::Ket, offset));
                self.ops[bra].set_link(offset);
            }
        } else if let Some(ket) = self.ops.last_mut() {
            ket.opcode = if minimize { OpCode::KetRmin } else { OpCode::KetRmax };
        }
    }

    /// Compiles `|`-separated branches after the opener at `start`, then
    /// writes the closing `Ket`. `*ptr` is left on the `)` or at the end.
    fn compile_bracket(
        &mut self,
        ptr: &mut usize,
        start: usize,
        first_out: &mut i32,
        req_out: &mut i32,
    ) -> Result<(), ErrorCode> {
        let mut firstbyte = REQ_UNSET;
        let mut reqbyte = REQ_UNSET;
        let mut last_branch = start;

        loop {
            let mut branchfirstbyte = REQ_UNSET;
            let mut branchreqbyte = REQ_UNSET;
            self.compile_branch(ptr, &mut branchfirstbyte, &mut branchreqbyte)?;

            if self.ops[last_branch].opcode != OpCode::Alt {
                firstbyte = branchfirstbyte;
                reqbyte = branchreqbyte;
            } else {
                if firstbyte >= 0 && firstbyte != branchfirstbyte {
                    if reqbyte < 0 {
                        reqbyte = firstbyte;
                    }
                    firstbyte = REQ_NONE;
                }
                if firstbyte < 0 && branchfirstbyte >= 0 && branchreqbyte < 0 {
                    branchreqbyte = branchfirstbyte;
                }
                if (reqbyte & !REQ_VARY) != (branchreqbyte & !REQ_VARY) {
                    reqbyte = REQ_NONE;
                } else {
                    reqbyte |= branchreqbyte;
                }
            }

            if !next_is(self.pattern, *ptr, b'|') {
                // Reverse the backward Alt chain into forward links.
                let ket = self.ops.len();
                let mut length = ket - last_branch;
                loop {
                    let prev_length = self.ops[last_branch].link_value();
                    self.ops[last_branch].set_link(length);
                    length = prev_length;
                    if length == 0 {
                        break;
                    }
                    last_branch -= length;
                }
                self.ops.push(Operation::link(OpCode::Ket, ket - start));
                *first_out = firstbyte;
                *req_out = reqbyte;
                return Ok(());
            }

            let alt = self.ops.len();
            self.ops.push(Operation::link(OpCode::Alt, alt - last_branch));
            last_branch = alt;
            *ptr += 1;
        }
    }
}

// ============================================================================
// First pass: validation and size bound
// ============================================================================

/// Extra instructions a quantifier on a group of `len` instructions may add.
fn group_repeat_extra(len: usize, min: u32, max: Option<u32>) -> usize {
    let min = min as usize;
    let extra = if min == 0 {
        match max {
            Some(m) if m > 1 => (m as usize).saturating_mul(len + 3),
            _ => 0,
        }
    } else {
        let copies = (min - 1).saturating_mul(len);
        let optional = match max {
            Some(m) => (m as usize).saturating_sub(min).saturating_mul(len + 3),
            None => 0,
        };
        copies.saturating_add(optional)
    };
    extra.saturating_add(1)
}

/// Walks the pattern without emitting code. Returns an upper bound on the
/// number of instructions and the number of capturing groups.
pub fn calculate_compiled_pattern_length(pattern: &[u16]) -> Result<(usize, u32), ErrorCode> {
    let mut length: usize = 4;
    let mut bracount: u32 = 0;
    // Length at the start of each open group.
    let mut stack: Vec<usize> = Vec::new();
    // Size of a group that was just closed, for a following quantifier.
    let mut last_group: Option<usize> = None;
    let mut ptr = 0;

    while let Some(c) = peek(pattern, ptr) {
        let meta = if c < 128 { c as u8 } else { 0 };
        let mut closed_group = None;

        match meta {
            b'\\' => {
                check_escape(pattern, &mut ptr, bracount, false)?;
                length += 2;
            }
            b'^' | b'$' => length += 1,
            b'[' => {
                parse_class_items(pattern, &mut ptr, bracount)?;
                length += 2;
            }
            b'{' if is_counted_repeat(pattern, ptr + 1) => {
                ptr += 1;
                let (min, max) = read_repeat_counts(pattern, &mut ptr)?;
                if next_is(pattern, ptr + 1, b'?') {
                    ptr += 1;
                }
                if let Some(len) = last_group {
                    length = length.saturating_add(group_repeat_extra(len, min, max));
                }
            }
            b'*' | b'+' | b'?' => {
                let (min, max) = match meta {
                    b'*' => (0, None),
                    b'+' => (1, None),
                    _ => (0, Some(1)),
                };
                if next_is(pattern, ptr + 1, b'?') {
                    ptr += 1;
                }
                if let Some(len) = last_group {
                    length = length.saturating_add(group_repeat_extra(len, min, max));
                }
            }
            b'(' => {
                if next_is(pattern, ptr + 1, b'?') {
                    match peek(pattern, ptr + 2).filter(|&c| c < 128).map(|c| c as u8) {
                        Some(b':' | b'=' | b'!') => ptr += 2,
                        _ => return Err(ErrorCode::Err12),
                    }
                } else {
                    bracount += 1;
                }
                if stack.len() >= BRACKET_NEST_LIMIT {
                    return Err(ErrorCode::Err17);
                }
                stack.push(length);
                length += 2;
            }
            b'|' => length += 1,
            b')' => {
                length += 1;
                // A stray ')' is reported by the compile pass.
                if let Some(start) = stack.pop() {
                    closed_group = Some(length - start);
                }
            }
            _ => {
                read_char(pattern, &mut ptr);
                length += 2;
            }
        }

        last_group = closed_group;
        if length > MAX_PATTERN_SIZE {
            return Err(ErrorCode::Err16);
        }
        ptr += 1;
    }

    if !stack.is_empty() {
        return Err(ErrorCode::Err14);
    }
    Ok((length, bracount))
}

// ============================================================================
// Entry points
// ============================================================================

/// Compiles `pattern` into a program.
pub fn js_reg_exp_compile(
    pattern: &[u16],
    ignore_case: JsRegExpIgnoreCaseOption,
    multiline: JsRegExpMultilineOption,
) -> Result<JsRegExp, ErrorCode> {
    let options = RegExpOptions::from_compile_options(ignore_case, multiline);
    match compile_pattern(pattern, options) {
        Ok(re) => {
            debug!(
                ops = re.ops.len(),
                captures = re.top_bracket,
                first_byte = re.first_byte,
                req_byte = re.req_byte,
                options = ?re.options,
                "compiled pattern"
            );
            Ok(re)
        }
        Err(e) => {
            debug!(code = e.code(), error = %e, "pattern compile failed");
            Err(e)
        }
    }
}

/// Releases a compiled program.
pub fn js_reg_exp_free(re: JsRegExp) {
    drop(re);
}

fn compile_pattern(pattern: &[u16], mut options: RegExpOptions) -> Result<JsRegExp, ErrorCode> {
    let (bound, bracount) = calculate_compiled_pattern_length(pattern)?;

    let mut ops = Vec::new();
    ops.try_reserve_exact(bound).map_err(|_| ErrorCode::Err13)?;

    let mut cd = CompileData {
        pattern,
        ops,
        num_capturing_brackets: bracount,
        brackets: 0,
        top_backref: 0,
        backref_map: 0,
        ignore_case: options.contains(RegExpOptions::IGNORE_CASE),
        multiline: options.contains(RegExpOptions::MULTILINE),
    };

    cd.ops.push(Operation::new(OpCode::Bra, OperationPayload::Bracket { link: 0, number: 0 }));
    let mut ptr = 0;
    let mut firstbyte = REQ_UNSET;
    let mut reqbyte = REQ_UNSET;
    cd.compile_bracket(&mut ptr, 0, &mut firstbyte, &mut reqbyte)?;
    if ptr < pattern.len() {
        return Err(ErrorCode::Err10);
    }
    cd.ops.push(Operation::simple(OpCode::End));

    if cd.ops.len() > bound {
        return Err(ErrorCode::Err7);
    }
    if cd.top_backref > cd.brackets {
        return Err(ErrorCode::Err15);
    }

    let ops = cd.ops;
    let mut re_first_byte = REQ_NONE;
    let mut re_req_byte = REQ_NONE;

    if bracket_is_anchored(&ops, 0) {
        options |= RegExpOptions::IS_ANCHORED;
    } else {
        if firstbyte < 0 {
            firstbyte = bracket_find_first_asserted_character(&ops, 0, false);
            if firstbyte >= 0 && cd.ignore_case {
                firstbyte |= REQ_IGNORE_CASE;
            }
        }
        if firstbyte >= 0 {
            let ch = (firstbyte & REQ_CHAR_MASK) as u32;
            if ch < 127 {
                re_first_byte = if firstbyte & REQ_IGNORE_CASE != 0 && flip_case(ch) == ch {
                    ch as i32
                } else {
                    firstbyte
                };
                options |= RegExpOptions::USE_FIRST_BYTE_OPTIMIZATION;
            }
        } else if bracket_needs_line_start(&ops, 0, 0, cd.backref_map) {
            options |= RegExpOptions::USE_MULTILINE_FIRST_BYTE_OPTIMIZATION;
        }
    }

    // An anchored pattern only benefits when the byte follows a variable
    // length item.
    if reqbyte >= 0 && (!options.contains(RegExpOptions::IS_ANCHORED) || reqbyte & REQ_VARY != 0)
    {
        let ch = (reqbyte & REQ_CHAR_MASK) as u32;
        if ch < 127 {
            re_req_byte = if reqbyte & REQ_IGNORE_CASE != 0 && flip_case(ch) == ch {
                reqbyte & !REQ_IGNORE_CASE
            } else {
                reqbyte
            };
            options |= RegExpOptions::USE_REQUIRED_BYTE_OPTIMIZATION;
        }
    }

    Ok(JsRegExp {
        options,
        top_bracket: cd.brackets,
        top_backref: cd.top_backref,
        first_byte: re_first_byte,
        req_byte: re_req_byte,
        ops,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    fn compile(s: &str) -> Result<JsRegExp, ErrorCode> {
        js_reg_exp_compile(
            &utf16(s),
            JsRegExpIgnoreCaseOption::DoNotIgnoreCase,
            JsRegExpMultilineOption::SingleLine,
        )
    }

    fn compile_ic(s: &str) -> JsRegExp {
        js_reg_exp_compile(
            &utf16(s),
            JsRegExpIgnoreCaseOption::IgnoreCase,
            JsRegExpMultilineOption::SingleLine,
        )
        .unwrap()
    }

    fn opcodes(re: &JsRegExp) -> Vec<OpCode> {
        re.ops.iter().map(|op| op.opcode).collect()
    }

    fn escape(s: &str, bracount: u32, is_class: bool) -> (Escape, usize) {
        let p = utf16(s);
        let mut ptr = 0;
        let e = check_escape(&p, &mut ptr, bracount, is_class).unwrap();
        (e, ptr)
    }

    // === Escapes ===

    #[test]
    fn escape_types_and_controls() {
        assert_eq!(escape("\\d", 0, false).0, Escape::Type(OpCode::Digit));
        assert_eq!(escape("\\W", 0, false).0, Escape::Type(OpCode::NotWordchar));
        assert_eq!(escape("\\b", 0, false).0, Escape::Type(OpCode::WordBoundary));
        assert_eq!(escape("\\b", 0, true).0, Escape::Char(0x08));
        assert_eq!(escape("\\B", 0, true).0, Escape::Char('B' as u32));
        assert_eq!(escape("\\n", 0, false).0, Escape::Char(0x0a));
        assert_eq!(escape("\\v", 0, false).0, Escape::Char(0x0b));
        assert_eq!(escape("\\.", 0, false).0, Escape::Char('.' as u32));
        assert_eq!(escape("\\q", 0, false).0, Escape::Char('q' as u32));
    }

    #[test]
    fn escape_hex_and_unicode() {
        assert_eq!(escape("\\x41", 0, false), (Escape::Char(0x41), 3));
        assert_eq!(escape("\\x4", 0, false), (Escape::Char('x' as u32), 1));
        assert_eq!(escape("\\u00e9", 0, false), (Escape::Char(0xe9), 5));
        assert_eq!(escape("\\u12G4", 0, false), (Escape::Char('u' as u32), 1));
    }

    #[test]
    fn escape_control_letters() {
        assert_eq!(escape("\\cJ", 0, false), (Escape::Char(0x0a), 2));
        assert_eq!(escape("\\cj", 0, false), (Escape::Char(0x0a), 2));
        // Not a letter: literal backslash, resume at 'c'.
        assert_eq!(escape("\\c1", 0, false), (Escape::Char('\\' as u32), 0));
        assert_eq!(escape("\\c1", 0, true), (Escape::Char(0x71), 2));
        assert_eq!(escape("\\c_", 0, true), (Escape::Char(0x1f), 2));
        let p = utf16("\\c");
        assert_eq!(check_escape(&p, &mut 0, 0, false), Err(ErrorCode::Err2));
        let p = utf16("\\");
        assert_eq!(check_escape(&p, &mut 0, 0, false), Err(ErrorCode::Err1));
    }

    #[test]
    fn escape_backrefs_and_octal() {
        assert_eq!(escape("\\1", 1, false), (Escape::BackRef(1), 1));
        assert_eq!(escape("\\12", 1, false), (Escape::Char(0o12), 2));
        assert_eq!(escape("\\18", 1, false), (Escape::Char(1), 1));
        assert_eq!(escape("\\123", 12, false), (Escape::Char(0o123), 3));
        assert_eq!(escape("\\12", 12, false), (Escape::BackRef(12), 2));
        assert_eq!(escape("\\12", 0, false), (Escape::Char(0o12), 2));
        assert_eq!(escape("\\1", 1, true), (Escape::Char(1), 1));
        assert_eq!(escape("\\0", 5, false), (Escape::Char(0), 1));
        assert_eq!(escape("\\101", 0, false), (Escape::Char(0x41), 3));
        assert_eq!(escape("\\400", 0, false), (Escape::Char(0o40), 2));
        assert_eq!(escape("\\8", 0, false), (Escape::Char('8' as u32), 1));
    }

    // === Counted repeats ===

    #[test]
    fn counted_repeat_recognition() {
        let ok = |s: &str| is_counted_repeat(&utf16(s), 0);
        assert!(ok("2}"));
        assert!(ok("2,}"));
        assert!(ok("2,5}"));
        assert!(!ok(",5}"));
        assert!(!ok("2"));
        assert!(!ok("2,5"));
        assert!(!ok("a}"));
    }

    #[test]
    fn repeat_counts() {
        let read = |s: &str| read_repeat_counts(&utf16(s), &mut 0);
        assert_eq!(read("3}"), Ok((3, Some(3))));
        assert_eq!(read("3,}"), Ok((3, None)));
        assert_eq!(read("3,7}"), Ok((3, Some(7))));
        assert_eq!(read("7,3}"), Err(ErrorCode::Err4));
        assert_eq!(read("70000}"), Err(ErrorCode::Err5));
        assert_eq!(read("1,70000}"), Err(ErrorCode::Err5));
    }

    // === Code generation ===

    #[test]
    fn literal_sequence() {
        let re = compile("ab").unwrap();
        use OpCode::*;
        assert_eq!(opcodes(&re), vec![Bra, AsciiChar, AsciiChar, Ket, End]);
        assert_eq!(re.num_subpatterns(), 0);
        js_reg_exp_free(re);
    }

    #[test]
    fn single_repeats() {
        use OpCode::*;
        assert_eq!(opcodes(&compile("a?").unwrap()), vec![Bra, Query, Ket, End]);
        assert_eq!(opcodes(&compile("a*?").unwrap()), vec![Bra, MinStar, Ket, End]);
        assert_eq!(opcodes(&compile("a{2,3}").unwrap()), vec![Bra, Exact, Upto, Ket, End]);
        assert_eq!(opcodes(&compile("a{2,}").unwrap()), vec![Bra, Exact, Star, Ket, End]);
        assert_eq!(opcodes(&compile("a{1,3}").unwrap()), vec![Bra, AsciiChar, Upto, Ket, End]);
        assert_eq!(opcodes(&compile("a{0,0}b").unwrap()), vec![Bra, AsciiChar, Ket, End]);
        assert_eq!(opcodes(&compile("\\d+").unwrap()), vec![Bra, TypePlus, Ket, End]);
        assert_eq!(opcodes(&compile("[^x]{0,4}").unwrap()), vec![Bra, NotUpto, Ket, End]);

        let re = compile("a{2,5}").unwrap();
        assert_eq!(re.ops[1].payload, OperationPayload::CharCount { c: 'a' as u32, count: 2 });
        assert_eq!(re.ops[2].payload, OperationPayload::CharCount { c: 'a' as u32, count: 3 });
    }

    #[test]
    fn class_repeats() {
        use OpCode::*;
        assert_eq!(opcodes(&compile("[ab]*").unwrap()), vec![Bra, Class, CrStar, Ket, End]);
        let re = compile("[ab]{2,}?").unwrap();
        assert_eq!(opcodes(&re), vec![Bra, Class, CrMinRange, Ket, End]);
        assert_eq!(re.ops[2].payload, OperationPayload::Range { min: 2, max: 0 });
        assert_eq!(opcodes(&compile("(a)\\1+").unwrap())[4..6], [Ref, CrPlus]);
    }

    #[test]
    fn group_repeats() {
        use OpCode::*;
        assert_eq!(
            opcodes(&compile("(a)*").unwrap()),
            vec![Bra, BraZero, Bra, AsciiChar, KetRmax, Ket, End]
        );
        assert_eq!(
            opcodes(&compile("(?:a)+?").unwrap()),
            vec![Bra, Bra, AsciiChar, KetRmin, Ket, End]
        );
        assert_eq!(
            opcodes(&compile("(a){2}").unwrap()),
            vec![Bra, Bra, AsciiChar, Ket, Bra, AsciiChar, Ket, Ket, End]
        );

        let re = compile("(?:a){0,2}").unwrap();
        assert_eq!(
            opcodes(&re),
            vec![
                Bra, BraZero, Bra, Bra, AsciiChar, Ket, BraZero, Bra, AsciiChar, Ket, Ket, Ket,
                End
            ]
        );
        assert_eq!(advance_to_end_of_bracket(&re.ops, 2), 10);
        assert_eq!(re.ops[10].link_value(), 8);
        assert_eq!(advance_to_end_of_bracket(&re.ops, 0), 11);
    }

    #[test]
    fn lookahead_repeats() {
        use OpCode::*;
        assert_eq!(opcodes(&compile("(?=a)?b").unwrap()), vec![Bra, AsciiChar, Ket, End]);
        assert_eq!(
            opcodes(&compile("(?!a){2}b").unwrap()),
            vec![Bra, AssertNot, AsciiChar, Ket, AsciiChar, Ket, End]
        );
    }

    #[test]
    fn alternation_links() {
        let re = compile("a|bc|d").unwrap();
        use OpCode::*;
        assert_eq!(
            opcodes(&re),
            vec![Bra, AsciiChar, Alt, AsciiChar, AsciiChar, Alt, AsciiChar, Ket, End]
        );
        assert_eq!(re.ops[0].link_value(), 2);
        assert_eq!(re.ops[2].link_value(), 3);
        assert_eq!(re.ops[5].link_value(), 2);
        assert_eq!(re.ops[7].link_value(), 7);
    }

    #[test]
    fn many_groups_use_branumber() {
        let pattern = "(a)".repeat(101);
        let re = compile(&pattern).unwrap();
        assert_eq!(re.num_subpatterns(), 101);
        let last_bra = re.ops.iter().rposition(|op| op.opcode == OpCode::Bra).unwrap();
        assert_eq!(bracket_number(&re.ops, last_bra), 101);
        assert_eq!(re.ops[last_bra + 1].opcode, OpCode::BraNumber);
    }

    // === Classes ===

    #[test]
    fn class_collapse_and_kinds() {
        use OpCode::*;
        assert_eq!(opcodes(&compile("[a]").unwrap())[1], AsciiChar);
        assert_eq!(opcodes(&compile("[^a]").unwrap())[1], Not);
        assert_eq!(opcodes(&compile("[ab]").unwrap())[1], Class);
        assert_eq!(opcodes(&compile("[^ab]").unwrap())[1], NClass);
        assert_eq!(opcodes(&compile("[\\D]").unwrap())[1], NClass);
        assert_eq!(opcodes(&compile("[^\\D]").unwrap())[1], Class);
        assert_eq!(opcodes(&compile("[\u{e9}]").unwrap())[1], Char);
        assert_eq!(opcodes(&compile("[\\u0100]").unwrap())[1], XClass);
        assert_eq!(opcodes(&compile("[\\s]").unwrap())[1], XClass);
        assert_eq!(opcodes(&compile("[]").unwrap())[1], Class);
        assert_eq!(opcodes(&compile("[^]").unwrap())[1], NClass);
    }

    #[test]
    fn class_range_with_type_end_is_literal_dash() {
        let p = utf16("[a-\\d]");
        let items = parse_class_items(&p, &mut 0, 0).unwrap().1;
        assert_eq!(
            items,
            vec![
                ClassItem::Char('a' as u32),
                ClassItem::Char('-' as u32),
                ClassItem::Type(OpCode::Digit)
            ]
        );
    }

    #[test]
    fn caseless_class_adds_other_case_ranges() {
        let re = compile_ic("[\\u0430-\\u0433]");
        let OperationPayload::XClass(x) = &re.ops[1].payload else {
            panic!("expected xclass");
        };
        assert!(crate::pcre_xclass::xclass_match(0x0411, x));
        assert!(crate::pcre_xclass::xclass_match(0x0432, x));
        assert!(!crate::pcre_xclass::xclass_match(0x0414, x));
    }

    // === Errors ===

    #[test]
    fn compile_errors() {
        assert_eq!(compile("a**").unwrap_err(), ErrorCode::Err9);
        assert_eq!(compile("*a").unwrap_err(), ErrorCode::Err9);
        assert_eq!(compile("^*").unwrap_err(), ErrorCode::Err9);
        assert_eq!(compile("(?<a)").unwrap_err(), ErrorCode::Err12);
        assert_eq!(compile("(a").unwrap_err(), ErrorCode::Err14);
        assert_eq!(compile("a)").unwrap_err(), ErrorCode::Err10);
        assert_eq!(compile("[a").unwrap_err(), ErrorCode::Err6);
        assert_eq!(compile("[z-a]").unwrap_err(), ErrorCode::Err8);
        assert_eq!(compile("a\\").unwrap_err(), ErrorCode::Err1);
        assert_eq!(compile("\\c").unwrap_err(), ErrorCode::Err2);
        assert_eq!(compile("a{3,2}").unwrap_err(), ErrorCode::Err4);
        assert_eq!(compile("a{99999}").unwrap_err(), ErrorCode::Err5);
    }

    #[test]
    fn nesting_and_size_limits() {
        let deep = format!("{}{}", "(".repeat(201), ")".repeat(201));
        assert_eq!(compile(&deep).unwrap_err(), ErrorCode::Err17);
        let ok = format!("{}{}", "(".repeat(200), ")".repeat(200));
        assert!(compile(&ok).is_ok());
        assert_eq!(compile(&"a".repeat(40000)).unwrap_err(), ErrorCode::Err16);
        assert_eq!(compile("(?:abc){60000}").unwrap_err(), ErrorCode::Err16);
    }

    #[test]
    fn literal_braces() {
        use OpCode::*;
        assert_eq!(opcodes(&compile("a{").unwrap()), vec![Bra, AsciiChar, AsciiChar, Ket, End]);
        assert_eq!(opcodes(&compile("a{,2}").unwrap()).len(), 8);
        assert_eq!(compile("{1}").unwrap_err(), ErrorCode::Err9);
    }

    // === Header hints ===

    #[test]
    fn first_and_required_bytes() {
        let re = compile("abc").unwrap();
        assert!(re.options.contains(RegExpOptions::USE_FIRST_BYTE_OPTIMIZATION));
        assert_eq!(re.first_byte, 'a' as i32);
        assert!(re.options.contains(RegExpOptions::USE_REQUIRED_BYTE_OPTIMIZATION));
        assert_eq!(re.req_byte & REQ_CHAR_MASK, 'c' as i32);

        let re = compile_ic("Abc");
        assert_eq!(re.first_byte, 'a' as i32 | REQ_IGNORE_CASE);

        let re = compile_ic("1bc");
        assert_eq!(re.first_byte, '1' as i32);

        let re = compile("a|b").unwrap();
        assert!(!re.options.contains(RegExpOptions::USE_FIRST_BYTE_OPTIMIZATION));
        assert!(!re.options.contains(RegExpOptions::USE_REQUIRED_BYTE_OPTIMIZATION));

        let re = compile("\u{e9}t\u{e9}").unwrap();
        assert!(!re.options.contains(RegExpOptions::USE_FIRST_BYTE_OPTIMIZATION));
        assert!(!re.options.contains(RegExpOptions::USE_REQUIRED_BYTE_OPTIMIZATION));
    }

    #[test]
    fn anchoring_and_line_start() {
        let re = compile("^abc").unwrap();
        assert!(re.is_anchored());
        assert!(!re.options.contains(RegExpOptions::USE_REQUIRED_BYTE_OPTIMIZATION));

        let re = compile("^ab+c").unwrap();
        assert!(re.options.contains(RegExpOptions::USE_REQUIRED_BYTE_OPTIMIZATION));

        let re = js_reg_exp_compile(
            &utf16("^abc"),
            JsRegExpIgnoreCaseOption::DoNotIgnoreCase,
            JsRegExpMultilineOption::Multiline,
        )
        .unwrap();
        assert!(!re.is_anchored());
        assert!(re.options.contains(RegExpOptions::USE_MULTILINE_FIRST_BYTE_OPTIMIZATION));

        let re = compile(".*foo").unwrap();
        assert!(re.options.contains(RegExpOptions::USE_MULTILINE_FIRST_BYTE_OPTIMIZATION));

        let re = compile("(.*)\\1x").unwrap();
        assert!(!re.options.contains(RegExpOptions::USE_MULTILINE_FIRST_BYTE_OPTIMIZATION));
    }

    #[test]
    fn asserted_first_character() {
        let re = compile("(?=x)\\w+").unwrap();
        assert!(re.options.contains(RegExpOptions::USE_FIRST_BYTE_OPTIMIZATION));
        assert_eq!(re.first_byte, 'x' as i32);
    }

    #[test]
    fn length_pass_counts_groups() {
        assert_eq!(calculate_compiled_pattern_length(&utf16("(a)(?:b)(c)")).unwrap().1, 2);
        assert_eq!(calculate_compiled_pattern_length(&utf16("[(]\\(")).unwrap().1, 0);
    }

    #[test]
    fn recompile_is_deterministic() {
        let a = compile("(a|b)*c[x-z]+\\1").unwrap();
        let b = compile("(a|b)*c[x-z]+\\1").unwrap();
        assert_eq!(a.ops, b.ops);
        assert_eq!((a.first_byte, a.req_byte, a.options), (b.first_byte, b.req_byte, b.options));
    }
}
