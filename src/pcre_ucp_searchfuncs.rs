// pcre_ucp_searchfuncs.rs - Case-fold lookups over the static case table.

use std::cmp::Ordering;

use crate::ucptable::UCP_TABLE;

/// Returns the other-case partner of `c`, or `None` when `c` has no other
/// case (or lies outside the Basic Multilingual Plane).
pub fn ucp_othercase(c: u32) -> Option<u32> {
    let idx = UCP_TABLE
        .binary_search_by(|&(first, last, _)| {
            if last < c {
                Ordering::Less
            } else if first > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()?;
    let delta = UCP_TABLE[idx].2;
    if delta == 0 {
        return None;
    }
    Some((c as i64 + delta as i64) as u32)
}

/// Finds the longest run starting at `*cptr` (and not past `d`) whose
/// other-case partners are contiguous. On success `*cptr` is moved past the
/// run and the partner range is returned.
///
/// Used when building case-insensitive extended classes, where a whole
/// range like U+0410..U+042F maps onto U+0430..U+044F in one step.
pub fn get_othercase_range(cptr: &mut u32, d: u32) -> Option<(u32, u32)> {
    let mut c = *cptr;
    let mut othercase = None;
    while c <= d {
        othercase = ucp_othercase(c);
        if othercase.is_some() {
            break;
        }
        c += 1;
    }
    let first = othercase?;
    let mut next = first + 1;
    c += 1;
    while c <= d {
        if ucp_othercase(c) != Some(next) {
            break;
        }
        next += 1;
        c += 1;
    }
    *cptr = c;
    Some((first, next - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_contiguous() {
        let mut expected = 0u32;
        for &(first, last, _) in UCP_TABLE {
            assert_eq!(first, expected);
            assert!(last >= first);
            expected = last + 1;
        }
        assert_eq!(expected, 0x10000);
    }

    #[test]
    fn ascii_letters() {
        assert_eq!(ucp_othercase('a' as u32), Some('A' as u32));
        assert_eq!(ucp_othercase('Z' as u32), Some('z' as u32));
        assert_eq!(ucp_othercase('1' as u32), None);
        assert_eq!(ucp_othercase('_' as u32), None);
    }

    #[test]
    fn latin1_and_greek() {
        assert_eq!(ucp_othercase(0xE9), Some(0xC9));
        assert_eq!(ucp_othercase(0xC9), Some(0xE9));
        assert_eq!(ucp_othercase(0x3B1), Some(0x391));
        assert_eq!(ucp_othercase(0x0430), Some(0x0410));
        assert_eq!(ucp_othercase(0xD7), None);
    }

    #[test]
    fn no_mapping_across_ascii_boundary() {
        // LATIN SMALL LETTER LONG S and KELVIN SIGN
        assert_eq!(ucp_othercase(0x017F), None);
        assert_eq!(ucp_othercase(0x212A), None);
    }

    #[test]
    fn out_of_table() {
        assert_eq!(ucp_othercase(0x10400), None);
        assert_eq!(ucp_othercase(0xD800), None);
    }

    #[test]
    fn othercase_range_cyrillic() {
        let mut c = 0x0410;
        let r = get_othercase_range(&mut c, 0x042F);
        assert_eq!(r, Some((0x0430, 0x044F)));
        assert_eq!(c, 0x0430);
    }

    #[test]
    fn othercase_range_none() {
        let mut c = 0x2000;
        assert_eq!(get_othercase_range(&mut c, 0x2010), None);
    }

    #[test]
    fn othercase_range_splits_runs() {
        // U+0100..U+0103 alternate between upper and lower case.
        let mut c = 0x0100;
        assert_eq!(get_othercase_range(&mut c, 0x0103), Some((0x0101, 0x0101)));
        assert_eq!(c, 0x0101);
        assert_eq!(get_othercase_range(&mut c, 0x0103), Some((0x0100, 0x0100)));
        assert_eq!(c, 0x0102);
    }
}
