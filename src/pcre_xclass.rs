// pcre_xclass.rs - Extended character class matching.
// Classes that contain code points above 255 (or above 127 under
// ignore-case) are compiled to XClass and tested here.

use crate::pcre_internal::*;

/// Returns whether `c` matches the extended class.
pub fn xclass_match(c: u32, xclass: &XClassData) -> bool {
    let negated = xclass.flags & XCL_NOT != 0;

    if c < 256 && xclass.flags & XCL_MAP != 0 {
        if xclass.map[(c / 8) as usize] & (1 << (c % 8)) != 0 {
            return !negated;
        }
    }

    let data = &xclass.data;
    let mut pos = 0;
    while pos < data.len() {
        let t = data[pos];
        pos += 1;
        match t {
            XCL_END => break,
            XCL_SINGLE => {
                if c == decode_utf8(data, &mut pos) {
                    return !negated;
                }
            }
            XCL_RANGE => {
                let lo = decode_utf8(data, &mut pos);
                let hi = decode_utf8(data, &mut pos);
                if (lo..=hi).contains(&c) {
                    return !negated;
                }
            }
            _ => break,
        }
    }

    negated
}
