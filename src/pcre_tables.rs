// pcre_tables.rs - Locale-independent character tables and predicates.
//
// The 256-entry tables are built at compile time: lower-case (LCC),
// flip-case (FCC), class bitmaps (CBITS) and character types (CTYPES).
// The ECMAScript predicates at the bottom cover the full 16-bit range.

// === Class bitmap offsets into CBITS ===
pub const CBIT_SPACE: usize = 0;
pub const CBIT_DIGIT: usize = 32;
pub const CBIT_WORD: usize = 64;
pub const CBIT_LENGTH: usize = 96;

// === Character type flags (CTYPES) ===
pub const CTYPE_SPACE: u8 = 0x01;
pub const CTYPE_LETTER: u8 = 0x02;
pub const CTYPE_DIGIT: u8 = 0x04;
pub const CTYPE_XDIGIT: u8 = 0x08;
pub const CTYPE_WORD: u8 = 0x10;
pub const CTYPE_META: u8 = 0x80;

const fn is_upper_byte(c: usize) -> bool {
    c >= b'A' as usize && c <= b'Z' as usize
}

const fn is_lower_byte(c: usize) -> bool {
    c >= b'a' as usize && c <= b'z' as usize
}

const fn is_digit_byte(c: usize) -> bool {
    c >= b'0' as usize && c <= b'9' as usize
}

const fn is_space_byte(c: usize) -> bool {
    (c >= 0x09 && c <= 0x0d) || c == 0x20 || c == 0xa0
}

const fn build_lcc() -> [u8; 256] {
    let mut t = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        t[i] = if is_upper_byte(i) { (i + 0x20) as u8 } else { i as u8 };
        i += 1;
    }
    t
}

const fn build_fcc() -> [u8; 256] {
    let mut t = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        t[i] = if is_upper_byte(i) {
            (i + 0x20) as u8
        } else if is_lower_byte(i) {
            (i - 0x20) as u8
        } else {
            i as u8
        };
        i += 1;
    }
    t
}

const fn build_cbits() -> [u8; CBIT_LENGTH] {
    let mut t = [0u8; CBIT_LENGTH];
    let mut i = 0;
    while i < 256 {
        if is_space_byte(i) {
            t[CBIT_SPACE + i / 8] |= 1 << (i % 8);
        }
        if is_digit_byte(i) {
            t[CBIT_DIGIT + i / 8] |= 1 << (i % 8);
        }
        if is_digit_byte(i) || is_upper_byte(i) || is_lower_byte(i) || i == b'_' as usize {
            t[CBIT_WORD + i / 8] |= 1 << (i % 8);
        }
        i += 1;
    }
    t
}

const fn build_ctypes() -> [u8; 256] {
    let meta = b"\\^$.[|()?*+{";
    let mut t = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut v = 0u8;
        if is_space_byte(i) {
            v |= CTYPE_SPACE;
        }
        if is_upper_byte(i) || is_lower_byte(i) {
            v |= CTYPE_LETTER | CTYPE_WORD;
        }
        if is_digit_byte(i) {
            v |= CTYPE_DIGIT | CTYPE_XDIGIT | CTYPE_WORD;
        }
        if (i >= b'a' as usize && i <= b'f' as usize) || (i >= b'A' as usize && i <= b'F' as usize)
        {
            v |= CTYPE_XDIGIT;
        }
        if i == b'_' as usize {
            v |= CTYPE_WORD;
        }
        let mut m = 0;
        while m < meta.len() {
            if meta[m] as usize == i {
                v |= CTYPE_META;
            }
            m += 1;
        }
        t[i] = v;
        i += 1;
    }
    t
}

pub static LCC: [u8; 256] = build_lcc();
pub static FCC: [u8; 256] = build_fcc();
pub static CBITS: [u8; CBIT_LENGTH] = build_cbits();
pub static CTYPES: [u8; 256] = build_ctypes();

// === ASCII predicates ===

#[inline]
fn ctype_is(c: u32, flag: u8) -> bool {
    c < 128 && CTYPES[c as usize] & flag != 0
}

#[inline]
pub fn is_ascii_digit(c: u32) -> bool {
    ctype_is(c, CTYPE_DIGIT)
}

#[inline]
pub fn is_ascii_alpha(c: u32) -> bool {
    ctype_is(c, CTYPE_LETTER)
}

#[inline]
pub fn is_ascii_alphanumeric(c: u32) -> bool {
    ctype_is(c, CTYPE_LETTER | CTYPE_DIGIT)
}

#[inline]
pub fn is_ascii_hex_digit(c: u32) -> bool {
    ctype_is(c, CTYPE_XDIGIT)
}

#[inline]
pub fn is_ascii_octal_digit(c: u32) -> bool {
    (b'0' as u32..=b'7' as u32).contains(&c)
}

#[inline]
pub fn to_ascii_upper(c: u32) -> u32 {
    if c < 128 && is_lower_byte(c as usize) {
        c - 0x20
    } else {
        c
    }
}

#[inline]
pub fn to_ascii_lower(c: u32) -> u32 {
    if c < 256 {
        LCC[c as usize] as u32
    } else {
        c
    }
}

/// Swaps the case of an ASCII letter; everything else is returned as is.
#[inline]
pub fn flip_case(c: u32) -> u32 {
    if c < 256 {
        FCC[c as usize] as u32
    } else {
        c
    }
}

#[inline]
pub fn hex_value(c: u32) -> u32 {
    if c <= b'9' as u32 {
        c - b'0' as u32
    } else {
        (c | 0x20) - b'a' as u32 + 10
    }
}

#[inline]
pub fn cbit_at(offset: usize, c: u32) -> bool {
    c < 256 && CBITS[offset + (c as usize) / 8] & (1 << (c % 8)) != 0
}

// === ECMAScript predicates ===

/// LineTerminator: LF, CR, LINE SEPARATOR, PARAGRAPH SEPARATOR.
#[inline]
pub fn is_newline(c: u32) -> bool {
    c == 0x0a || c == 0x0d || c == 0x2028 || c == 0x2029
}

/// WhiteSpace or LineTerminator, as matched by `\s`.
pub fn is_space_char(c: u32) -> bool {
    if c < 256 {
        return cbit_at(CBIT_SPACE, c);
    }
    matches!(
        c,
        0x1680 | 0x180e | 0x2000..=0x200a | 0x2028 | 0x2029 | 0x202f | 0x205f | 0x3000 | 0xfeff
    )
}

/// Code points above 255 matched by `\s`, as (first, last) ranges.
pub const SPACE_RANGES_ABOVE_LATIN1: &[(u32, u32)] = &[
    (0x1680, 0x1680),
    (0x180e, 0x180e),
    (0x2000, 0x200a),
    (0x2028, 0x2029),
    (0x202f, 0x202f),
    (0x205f, 0x205f),
    (0x3000, 0x3000),
    (0xfeff, 0xfeff),
];

#[inline]
pub fn is_word_char(c: u32) -> bool {
    cbit_at(CBIT_WORD, c)
}
