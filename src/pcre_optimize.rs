// pcre_optimize.rs - Static analyses over a compiled program.
// Anchoring, "starts at a line start" and first-asserted-character
// detection. Each walks every alternative of a bracket starting at its
// opener index.

use crate::pcre_internal::*;

fn first_significant_op(ops: &[Operation], mut i: usize) -> usize {
    while ops[i].opcode == OpCode::BraNumber {
        i += 1;
    }
    i
}

fn first_significant_op_skipping_assertions(ops: &[Operation], mut i: usize) -> usize {
    loop {
        match ops[i].opcode {
            OpCode::AssertNot => i = advance_to_end_of_bracket(ops, i) + 1,
            OpCode::WordBoundary | OpCode::NotWordBoundary => i += 1,
            _ => return first_significant_op(ops, i),
        }
    }
}

/// Calls `f` with the first instruction index of each alternative of the
/// bracket opened at `start`; stops early when `f` returns false.
fn each_branch(ops: &[Operation], start: usize, mut f: impl FnMut(usize) -> bool) -> bool {
    let mut i = start;
    loop {
        if !f(i + 1) {
            return false;
        }
        i += ops[i].link_value();
        if ops[i].opcode != OpCode::Alt {
            return true;
        }
    }
}

// === Anchoring ===

fn branch_is_anchored(ops: &[Operation], i: usize) -> bool {
    let s = first_significant_op(ops, i);
    match ops[s].opcode {
        OpCode::Bra | OpCode::Assert => bracket_is_anchored(ops, s),
        op => op == OpCode::Circ,
    }
}

/// True when every alternative starts with `^` (single-line mode).
pub fn bracket_is_anchored(ops: &[Operation], start: usize) -> bool {
    each_branch(ops, start, |b| branch_is_anchored(ops, b))
}

// === Line start ===

fn branch_needs_line_start(ops: &[Operation], i: usize, capture_map: u32, backref_map: u32) -> bool {
    let s = first_significant_op(ops, i);
    match ops[s].opcode {
        OpCode::Bra => {
            let n = bracket_number(ops, s);
            let map = match n {
                0 => capture_map,
                n if n < 32 => capture_map | (1 << n),
                _ => capture_map | 1,
            };
            bracket_needs_line_start(ops, s, map, backref_map)
        }
        OpCode::Assert => bracket_needs_line_start(ops, s, capture_map, backref_map),
        // `.*` may only be used when no enclosing group is backreferenced.
        OpCode::TypeStar | OpCode::TypeMinStar => {
            ops[s].payload == OperationPayload::Type { ty: OpCode::NotNewline }
                && capture_map & backref_map == 0
        }
        op => op == OpCode::Circ || op == OpCode::Bol,
    }
}

/// True when every alternative can only match at the start of the subject
/// or just after a line terminator.
pub fn bracket_needs_line_start(
    ops: &[Operation],
    start: usize,
    capture_map: u32,
    backref_map: u32,
) -> bool {
    each_branch(ops, start, |b| branch_needs_line_start(ops, b, capture_map, backref_map))
}

// === Asserted first character ===

/// The character every alternative asserts at its start, or -1.
///
/// A character only counts inside a positive lookahead; outside one the
/// compiler has already recorded it as the first byte.
pub fn bracket_find_first_asserted_character(ops: &[Operation], start: usize, inassert: bool) -> i32 {
    let mut c: i32 = -1;
    let found = each_branch(ops, start, |b| {
        let s = first_significant_op_skipping_assertions(ops, b);
        let d = match ops[s].opcode {
            op @ (OpCode::Bra | OpCode::Assert) => {
                bracket_find_first_asserted_character(ops, s, op == OpCode::Assert)
            }
            OpCode::Exact
            | OpCode::Char
            | OpCode::CharIgnoringCase
            | OpCode::AsciiChar
            | OpCode::AsciiLetterIgnoringCase
            | OpCode::Plus
            | OpCode::MinPlus => {
                if !inassert {
                    return false;
                }
                match ops[s].char_value() {
                    Some(ch) if ch > 0xffff => lead_surrogate(ch) as i32,
                    Some(ch) => ch as i32,
                    None => -1,
                }
            }
            _ => -1,
        };
        if d < 0 || (c >= 0 && c != d) {
            return false;
        }
        c = d;
        true
    });
    if found {
        c
    } else {
        -1
    }
}
