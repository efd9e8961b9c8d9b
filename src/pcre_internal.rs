// pcre_internal.rs - Internal types shared by the compiler and the matcher.
// OpCode, Operation, JsRegExp, bracket link helpers, and the UTF-8 helpers
// used for code points stored in extended class data.

use crate::pcre::RegExpOptions;

// === Limits ===
/// Largest program the compiler will produce, in instructions.
pub const MAX_PATTERN_SIZE: usize = 1 << 16;
pub const BRACKET_NEST_LIMIT: usize = 200;
/// Capture numbers above this are carried by a trailing `BraNumber`.
pub const EXTRACT_BASIC_MAX: u32 = 100;
/// The required-character scan only runs on subjects shorter than this.
pub const REQ_BYTE_MAX: usize = 1000;
pub const MAX_REPEAT_COUNT: u32 = 65535;

// === First/required character flags ===
pub const REQ_UNSET: i32 = -2;
pub const REQ_NONE: i32 = -1;
pub const REQ_IGNORE_CASE: i32 = 0x10000;
pub const REQ_VARY: i32 = 0x20000;
pub const REQ_CHAR_MASK: i32 = 0xffff;

// === Extended class encoding ===
pub const XCL_NOT: u8 = 0x01;
pub const XCL_MAP: u8 = 0x02;

pub const XCL_END: u8 = 0;
pub const XCL_SINGLE: u8 = 1;
pub const XCL_RANGE: u8 = 2;

// === OpCode Enum ===
//
// The first block (NotWordBoundary..Wordchar) is ordered to line up with
// the escape codes produced by check_escape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    End = 0,

    NotWordBoundary = 1,
    WordBoundary = 2,
    NotDigit = 3,
    Digit = 4,
    NotWhitespace = 5,
    Whitespace = 6,
    NotWordchar = 7,
    Wordchar = 8,
    NotNewline = 9,

    Circ = 10,
    Dollar = 11,
    Bol = 12,
    Eol = 13,

    Char = 14,
    CharIgnoringCase = 15,
    AsciiChar = 16,
    AsciiLetterIgnoringCase = 17,
    Not = 18,

    Star = 19,
    MinStar = 20,
    Plus = 21,
    MinPlus = 22,
    Query = 23,
    MinQuery = 24,
    Upto = 25,
    MinUpto = 26,
    Exact = 27,

    NotStar = 28,
    NotMinStar = 29,
    NotPlus = 30,
    NotMinPlus = 31,
    NotQuery = 32,
    NotMinQuery = 33,
    NotUpto = 34,
    NotMinUpto = 35,
    NotExact = 36,

    TypeStar = 37,
    TypeMinStar = 38,
    TypePlus = 39,
    TypeMinPlus = 40,
    TypeQuery = 41,
    TypeMinQuery = 42,
    TypeUpto = 43,
    TypeMinUpto = 44,
    TypeExact = 45,

    CrStar = 46,
    CrMinStar = 47,
    CrPlus = 48,
    CrMinPlus = 49,
    CrQuery = 50,
    CrMinQuery = 51,
    CrRange = 52,
    CrMinRange = 53,

    Class = 54,
    NClass = 55,
    XClass = 56,
    Ref = 57,

    Alt = 58,
    Ket = 59,
    KetRmax = 60,
    KetRmin = 61,
    Assert = 62,
    AssertNot = 63,
    BraZero = 64,
    BraMinZero = 65,
    BraNumber = 66,
    Bra = 67,
}

impl OpCode {
    /// Single-character type tests that a quantifier may follow.
    #[inline]
    pub fn is_char_type(self) -> bool {
        matches!(
            self,
            OpCode::NotDigit
                | OpCode::Digit
                | OpCode::NotWhitespace
                | OpCode::Whitespace
                | OpCode::NotWordchar
                | OpCode::Wordchar
                | OpCode::NotNewline
        )
    }
}

// === Repeat opcode families ===

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatFamily {
    Char,
    Not,
    Type,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatShape {
    Star,
    Plus,
    Query,
    Upto,
    Exact,
}

const CHAR_REPEATS: [OpCode; 9] = [
    OpCode::Star,
    OpCode::MinStar,
    OpCode::Plus,
    OpCode::MinPlus,
    OpCode::Query,
    OpCode::MinQuery,
    OpCode::Upto,
    OpCode::MinUpto,
    OpCode::Exact,
];
const NOT_REPEATS: [OpCode; 9] = [
    OpCode::NotStar,
    OpCode::NotMinStar,
    OpCode::NotPlus,
    OpCode::NotMinPlus,
    OpCode::NotQuery,
    OpCode::NotMinQuery,
    OpCode::NotUpto,
    OpCode::NotMinUpto,
    OpCode::NotExact,
];
const TYPE_REPEATS: [OpCode; 9] = [
    OpCode::TypeStar,
    OpCode::TypeMinStar,
    OpCode::TypePlus,
    OpCode::TypeMinPlus,
    OpCode::TypeQuery,
    OpCode::TypeMinQuery,
    OpCode::TypeUpto,
    OpCode::TypeMinUpto,
    OpCode::TypeExact,
];
const CR_REPEATS: [OpCode; 8] = [
    OpCode::CrStar,
    OpCode::CrMinStar,
    OpCode::CrPlus,
    OpCode::CrMinPlus,
    OpCode::CrQuery,
    OpCode::CrMinQuery,
    OpCode::CrRange,
    OpCode::CrMinRange,
];

fn family_table(family: RepeatFamily) -> &'static [OpCode; 9] {
    match family {
        RepeatFamily::Char => &CHAR_REPEATS,
        RepeatFamily::Not => &NOT_REPEATS,
        RepeatFamily::Type => &TYPE_REPEATS,
    }
}

/// Picks the opcode for a single-item repeat. `Exact` has no lazy form.
pub fn repeat_opcode(family: RepeatFamily, shape: RepeatShape, minimize: bool) -> OpCode {
    let table = family_table(family);
    match shape {
        RepeatShape::Exact => table[8],
        _ => table[shape as usize * 2 + minimize as usize],
    }
}

/// Inverse of [`repeat_opcode`].
pub fn repeat_shape(op: OpCode) -> Option<(RepeatFamily, RepeatShape, bool)> {
    const SHAPES: [RepeatShape; 5] = [
        RepeatShape::Star,
        RepeatShape::Plus,
        RepeatShape::Query,
        RepeatShape::Upto,
        RepeatShape::Exact,
    ];
    for family in [RepeatFamily::Char, RepeatFamily::Not, RepeatFamily::Type] {
        if let Some(i) = family_table(family).iter().position(|&o| o == op) {
            return Some((family, SHAPES[i / 2], i % 2 == 1));
        }
    }
    None
}

/// Opcode for a class or backreference repeat suffix.
/// `shape` here is only Star, Plus, Query or Upto (meaning a counted range).
pub fn cr_opcode(shape: RepeatShape, minimize: bool) -> OpCode {
    let base = match shape {
        RepeatShape::Star => 0,
        RepeatShape::Plus => 2,
        RepeatShape::Query => 4,
        RepeatShape::Upto | RepeatShape::Exact => 6,
    };
    CR_REPEATS[base + minimize as usize]
}

// === Operation (one instruction) ===

/// Relative distance between two instructions.
pub type LinkType = usize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XClassData {
    /// `XCL_NOT` and/or `XCL_MAP`.
    pub flags: u8,
    /// Bitmap for code points below 256; meaningful only with `XCL_MAP`.
    pub map: [u8; 32],
    /// `XCL_SINGLE c` / `XCL_RANGE lo hi` items, UTF-8 encoded, ending in `XCL_END`.
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationPayload {
    None,
    Char { c: u32 },
    CharCount { c: u32, count: u16 },
    Type { ty: OpCode },
    TypeCount { ty: OpCode, count: u16 },
    /// `max == 0` means no upper bound.
    Range { min: u16, max: u16 },
    Class { bits: Box<[u8; 32]> },
    XClass(Box<XClassData>),
    Ref { number: u16 },
    Bracket { link: LinkType, number: u32 },
    Link { link: LinkType },
    BraNumber { number: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operation {
    pub opcode: OpCode,
    pub payload: OperationPayload,
}

impl Operation {
    #[inline]
    pub fn new(opcode: OpCode, payload: OperationPayload) -> Self {
        Operation { opcode, payload }
    }

    #[inline]
    pub fn simple(opcode: OpCode) -> Self {
        Operation { opcode, payload: OperationPayload::None }
    }

    #[inline]
    pub fn link(opcode: OpCode, link: LinkType) -> Self {
        Operation { opcode, payload: OperationPayload::Link { link } }
    }

    /// Link distance of a bracket opener, `Alt` or `Ket`; zero otherwise.
    #[inline]
    pub fn link_value(&self) -> LinkType {
        match self.payload {
            OperationPayload::Bracket { link, .. } | OperationPayload::Link { link } => link,
            _ => 0,
        }
    }

    #[inline]
    pub fn set_link(&mut self, value: LinkType) {
        match &mut self.payload {
            OperationPayload::Bracket { link, .. } | OperationPayload::Link { link } => {
                *link = value
            }
            _ => {}
        }
    }

    /// Character carried by a character-bearing instruction.
    #[inline]
    pub fn char_value(&self) -> Option<u32> {
        match self.payload {
            OperationPayload::Char { c } | OperationPayload::CharCount { c, .. } => Some(c),
            _ => None,
        }
    }
}

/// Capture number of the bracket opener at `ops[i]` (0 for non-capturing).
pub fn bracket_number(ops: &[Operation], i: usize) -> u32 {
    match ops[i].payload {
        OperationPayload::Bracket { number, .. } if number > EXTRACT_BASIC_MAX => {
            match ops.get(i + 1).map(|op| &op.payload) {
                Some(OperationPayload::BraNumber { number }) => *number,
                _ => number,
            }
        }
        OperationPayload::Bracket { number, .. } => number,
        _ => 0,
    }
}

/// Follows the alternative chain from a bracket opener or `Alt` to the
/// closing ket and returns its index.
pub fn advance_to_end_of_bracket(ops: &[Operation], mut i: usize) -> usize {
    loop {
        i += ops[i].link_value();
        if ops[i].opcode != OpCode::Alt {
            return i;
        }
    }
}

// === Compiled program ===

/// A compiled regular expression program.
#[derive(Clone, Debug)]
pub struct JsRegExp {
    pub options: RegExpOptions,
    /// Number of capturing brackets.
    pub top_bracket: u32,
    /// Highest backreference number.
    pub top_backref: u32,
    /// First-character hint, or negative when unused.
    pub first_byte: i32,
    /// Required-character hint, or negative when unused.
    pub req_byte: i32,
    pub ops: Vec<Operation>,
}

impl JsRegExp {
    pub fn num_subpatterns(&self) -> u32 {
        self.top_bracket
    }

    pub fn is_anchored(&self) -> bool {
        self.options.contains(RegExpOptions::IS_ANCHORED)
    }
}

// ============================================================================
// UTF-8 helpers for extended class data
// ============================================================================
//
// Unlike `char::encode_utf8` these accept any value up to 0x10FFFF,
// including lone surrogates, which may legitimately appear in a pattern.

pub fn encode_utf8(c: u32, buf: &mut Vec<u8>) {
    if c < 0x80 {
        buf.push(c as u8);
    } else if c < 0x800 {
        buf.push(0xc0 | (c >> 6) as u8);
        buf.push(0x80 | (c & 0x3f) as u8);
    } else if c < 0x10000 {
        buf.push(0xe0 | (c >> 12) as u8);
        buf.push(0x80 | ((c >> 6) & 0x3f) as u8);
        buf.push(0x80 | (c & 0x3f) as u8);
    } else {
        buf.push(0xf0 | (c >> 18) as u8);
        buf.push(0x80 | ((c >> 12) & 0x3f) as u8);
        buf.push(0x80 | ((c >> 6) & 0x3f) as u8);
        buf.push(0x80 | (c & 0x3f) as u8);
    }
}

/// Decodes one character written by [`encode_utf8`] and advances `pos`.
pub fn decode_utf8(data: &[u8], pos: &mut usize) -> u32 {
    let first = data[*pos] as u32;
    *pos += 1;
    let extra = if first < 0x80 {
        return first;
    } else if first < 0xe0 {
        1
    } else if first < 0xf0 {
        2
    } else {
        3
    };
    let mut c = first & (0x3f >> extra);
    for _ in 0..extra {
        c = (c << 6) | (data[*pos] as u32 & 0x3f);
        *pos += 1;
    }
    c
}

// === UTF-16 helpers ===

#[inline]
pub fn is_lead_surrogate(c: u32) -> bool {
    (0xd800..=0xdbff).contains(&c)
}

#[inline]
pub fn is_trail_surrogate(c: u32) -> bool {
    (0xdc00..=0xdfff).contains(&c)
}

#[inline]
pub fn combine_surrogates(lead: u32, trail: u32) -> u32 {
    0x10000 + ((lead - 0xd800) << 10) + (trail - 0xdc00)
}

#[inline]
pub fn lead_surrogate(c: u32) -> u32 {
    0xd800 + ((c - 0x10000) >> 10)
}

#[inline]
pub fn trail_surrogate(c: u32) -> u32 {
    0xdc00 + ((c - 0x10000) & 0x3ff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_helpers_cover_all_widths() {
        for c in [0x41u32, 0xe9, 0x7ff, 0x800, 0xd800, 0xffff, 0x10000, 0x1f600, 0x10ffff] {
            let mut buf = Vec::new();
            encode_utf8(c, &mut buf);
            let mut pos = 0;
            assert_eq!(decode_utf8(&buf, &mut pos), c, "{c:#x}");
            assert_eq!(pos, buf.len());
        }
    }

    #[test]
    fn utf8_matches_std_for_scalar_values() {
        for ch in ['a', 'é', '€', '😀'] {
            let mut buf = Vec::new();
            encode_utf8(ch as u32, &mut buf);
            let mut std_buf = [0u8; 4];
            assert_eq!(buf.as_slice(), ch.encode_utf8(&mut std_buf).as_bytes());
        }
    }

    #[test]
    fn surrogate_helpers() {
        let c = 0x1f600;
        let (lead, trail) = (lead_surrogate(c), trail_surrogate(c));
        assert_eq!((lead, trail), (0xd83d, 0xde00));
        assert!(is_lead_surrogate(lead));
        assert!(is_trail_surrogate(trail));
        assert_eq!(combine_surrogates(lead, trail), c);
    }

    #[test]
    fn repeat_opcode_tables() {
        assert_eq!(repeat_opcode(RepeatFamily::Char, RepeatShape::Star, false), OpCode::Star);
        assert_eq!(repeat_opcode(RepeatFamily::Not, RepeatShape::Plus, true), OpCode::NotMinPlus);
        assert_eq!(repeat_opcode(RepeatFamily::Type, RepeatShape::Upto, true), OpCode::TypeMinUpto);
        assert_eq!(repeat_opcode(RepeatFamily::Type, RepeatShape::Exact, true), OpCode::TypeExact);
        assert_eq!(
            repeat_shape(OpCode::NotMinQuery),
            Some((RepeatFamily::Not, RepeatShape::Query, true))
        );
        assert_eq!(repeat_shape(OpCode::Exact), Some((RepeatFamily::Char, RepeatShape::Exact, false)));
        assert_eq!(repeat_shape(OpCode::Class), None);
        assert_eq!(cr_opcode(RepeatShape::Upto, true), OpCode::CrMinRange);
        assert_eq!(cr_opcode(RepeatShape::Query, false), OpCode::CrQuery);
    }

    #[test]
    fn bracket_links() {
        // Bra | a | Alt | b | Ket | End
        let ops = vec![
            Operation::new(OpCode::Bra, OperationPayload::Bracket { link: 2, number: 1 }),
            Operation::new(OpCode::AsciiChar, OperationPayload::Char { c: 'a' as u32 }),
            Operation::link(OpCode::Alt, 2),
            Operation::new(OpCode::AsciiChar, OperationPayload::Char { c: 'b' as u32 }),
            Operation::link(OpCode::Ket, 4),
            Operation::simple(OpCode::End),
        ];
        assert_eq!(advance_to_end_of_bracket(&ops, 0), 4);
        assert_eq!(advance_to_end_of_bracket(&ops, 2), 4);
        assert_eq!(bracket_number(&ops, 0), 1);
    }

    #[test]
    fn large_bracket_numbers_use_branumber() {
        let ops = vec![
            Operation::new(
                OpCode::Bra,
                OperationPayload::Bracket { link: 2, number: EXTRACT_BASIC_MAX + 1 },
            ),
            Operation::new(OpCode::BraNumber, OperationPayload::BraNumber { number: 250 }),
            Operation::link(OpCode::Ket, 2),
        ];
        assert_eq!(bracket_number(&ops, 0), 250);
    }
}
