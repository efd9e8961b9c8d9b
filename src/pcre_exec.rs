// pcre_exec.rs - Matcher and search driver.
// match_at interprets the program with an explicit frame stack: opcodes
// either consume input and advance, push a child frame to try a
// sub-pattern (remembering where to resume), or return match/no-match to
// the parent frame. js_reg_exp_execute drives match_at across start
// positions using the header hints.

use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::pcre::*;
use crate::pcre_internal::*;
use crate::pcre_tables::*;
use crate::pcre_ucp_searchfuncs::ucp_othercase;
use crate::pcre_xclass::xclass_match;

// ============================================================================
// Subject code units
// ============================================================================

/// A subject element: 8-bit (Latin-1) or 16-bit (UTF-16) code unit.
pub trait CodeUnit: Copy + Into<u32> {
    /// Index of the first unit equal to `c`.
    fn find(haystack: &[Self], c: u32) -> Option<usize> {
        haystack.iter().position(|&u| u.into() == c)
    }

    /// Index of the first unit equal to `a` or `b`.
    fn find2(haystack: &[Self], a: u32, b: u32) -> Option<usize> {
        haystack.iter().position(|&u| {
            let u = u.into();
            u == a || u == b
        })
    }
}

impl CodeUnit for u8 {
    fn find(haystack: &[u8], c: u32) -> Option<usize> {
        u8::try_from(c).ok().and_then(|b| memchr::memchr(b, haystack))
    }

    fn find2(haystack: &[u8], a: u32, b: u32) -> Option<usize> {
        match (u8::try_from(a), u8::try_from(b)) {
            (Ok(a), Ok(b)) => memchr::memchr2(a, b, haystack),
            (Ok(a), Err(_)) => memchr::memchr(a, haystack),
            (Err(_), Ok(b)) => memchr::memchr(b, haystack),
            (Err(_), Err(_)) => None,
        }
    }
}

impl CodeUnit for u16 {}

// ============================================================================
// Match state
// ============================================================================

struct MatchData<'s, 'o, C> {
    subject: &'s [C],
    offset_vector: &'o mut [i32],
    /// Scratch slot for group n lives at `offset_end - n`.
    offset_end: usize,
    /// Visible slots usable for captures.
    offset_max: usize,
    offset_overflow: bool,
    end_match_ptr: usize,
    end_offset_top: usize,
    ignore_case: bool,
    match_count: u32,
    match_limit: u32,
}

impl<C: CodeUnit> MatchData<'_, '_, C> {
    #[inline]
    fn end(&self) -> usize {
        self.subject.len()
    }

    #[inline]
    fn unit(&self, i: usize) -> u32 {
        self.subject[i].into()
    }
}

/// Something a repeat loop matches one of at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RepeatItem {
    Char { c: u32, othercase: Option<u32> },
    NotChar { c: u32 },
    Type(OpCode),
    /// Index of a `Class`/`NClass` instruction.
    Class { index: usize },
    /// Index of an `XClass` instruction.
    XClass { index: usize },
    Ref { offset: usize, length: usize },
}

#[derive(Clone, Copy, Debug)]
struct RepeatState {
    item: RepeatItem,
    max: u32,
    count: u32,
    /// Subject position after the minimum was satisfied.
    start: usize,
    next_ip: usize,
}

// ============================================================================
// Frames
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReturnLocation {
    Root,
    BracketAlt,
    AssertAlt,
    AssertContinue,
    AssertNotAlt,
    BraZero,
    BraMinZero,
    KetRminContinue,
    KetRminRepeat,
    KetRmaxRepeat,
    KetRmaxContinue,
    RepeatLazy,
    RepeatGreedy,
}

/// How a child frame's bracket chain is set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GroupMode {
    Inherit,
    /// Open a group starting at the current subject position.
    New,
    /// Like `New`, but with no enclosing groups (lookahead bodies).
    Isolated,
}

#[derive(Clone, Copy, Debug, Default)]
struct BracketChainNode {
    previous: Option<usize>,
    bracket_start: usize,
}

#[derive(Clone, Copy, Debug)]
struct MatchFrameArgs {
    subject_ptr: usize,
    instruction_ptr: usize,
    offset_top: usize,
    /// Stack index of the frame owning the innermost open group.
    bracket_chain: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default)]
struct MatchFrameLocals {
    bracket_node: BracketChainNode,
    number: usize,
    offset: usize,
    save_offsets: [i32; 3],
    capturing: bool,
    /// Opener of the group a Ket or lookahead is working on.
    opener: usize,
    /// Length of `Matcher::assert_saves` before this lookahead saved into it.
    save_base: usize,
    repeat: Option<RepeatState>,
}

#[derive(Clone, Copy, Debug)]
struct MatchFrame {
    return_location: ReturnLocation,
    args: MatchFrameArgs,
    locals: MatchFrameLocals,
}

type MatchStack = SmallVec<[MatchFrame; 16]>;

enum Action {
    /// Continue with the instruction now at the current frame's pointer.
    Next,
    Recurse { location: ReturnLocation, ip: usize, group: GroupMode },
    Return(bool),
}

// ============================================================================
// Item matching
// ============================================================================

fn type_matches(ty: OpCode, c: u32) -> bool {
    match ty {
        OpCode::Digit => is_ascii_digit(c),
        OpCode::NotDigit => !is_ascii_digit(c),
        OpCode::Whitespace => is_space_char(c),
        OpCode::NotWhitespace => !is_space_char(c),
        OpCode::Wordchar => is_word_char(c),
        OpCode::NotWordchar => !is_word_char(c),
        OpCode::NotNewline => !is_newline(c),
        _ => false,
    }
}

/// Compares `length` units at `pos` with the text captured at `offset`.
fn match_ref<C: CodeUnit>(md: &MatchData<C>, offset: usize, pos: usize, length: usize) -> bool {
    if length > md.end() - pos {
        return false;
    }
    let start = md.offset_vector[offset] as usize;
    (0..length).all(|i| {
        let c = md.unit(start + i);
        let d = md.unit(pos + i);
        c == d || (md.ignore_case && ucp_othercase(c) == Some(d))
    })
}

/// Matches one occurrence of `item` at `pos`, returning the position after it.
fn match_item<C: CodeUnit>(
    ops: &[Operation],
    md: &MatchData<C>,
    item: RepeatItem,
    pos: usize,
) -> Option<usize> {
    let end = md.end();
    if let RepeatItem::Ref { offset, length } = item {
        return match_ref(md, offset, pos, length).then_some(pos + length);
    }
    if pos >= end {
        return None;
    }
    match item {
        RepeatItem::Char { c, othercase } => {
            if c > 0xffff {
                let hit = pos + 1 < end
                    && md.unit(pos) == lead_surrogate(c)
                    && md.unit(pos + 1) == trail_surrogate(c);
                hit.then_some(pos + 2)
            } else {
                let u = md.unit(pos);
                (u == c || Some(u) == othercase).then_some(pos + 1)
            }
        }
        RepeatItem::NotChar { c } => {
            let u = md.unit(pos);
            let same = if md.ignore_case { to_ascii_lower(u) == to_ascii_lower(c) } else { u == c };
            (!same).then_some(pos + 1)
        }
        RepeatItem::Type(ty) => type_matches(ty, md.unit(pos)).then_some(pos + 1),
        RepeatItem::Class { index } => {
            let u = md.unit(pos);
            let hit = match &ops[index].payload {
                OperationPayload::Class { .. } if u > 255 => ops[index].opcode == OpCode::NClass,
                OperationPayload::Class { bits } => bits[(u / 8) as usize] & (1 << (u % 8)) != 0,
                _ => false,
            };
            hit.then_some(pos + 1)
        }
        RepeatItem::XClass { index } => match &ops[index].payload {
            OperationPayload::XClass(x) if xclass_match(md.unit(pos), x) => Some(pos + 1),
            _ => None,
        },
        RepeatItem::Ref { .. } => None,
    }
}

// ============================================================================
// match_at
// ============================================================================

struct Matcher<'r, 's, 'o, C> {
    ops: &'r [Operation],
    md: MatchData<'s, 'o, C>,
    stack: MatchStack,
    /// Capture pairs `(offset, start, end)` from before each pending positive
    /// lookahead, put back if the match fails after the lookahead succeeded.
    assert_saves: Vec<(usize, i32, i32)>,
}

impl<'r, 's, 'o, C: CodeUnit> Matcher<'r, 's, 'o, C> {
    /// Tries to match the whole program starting exactly at `start`.
    fn match_at(&mut self, start: usize) -> Result<bool, i32> {
        self.stack.clear();
        self.assert_saves.clear();
        self.stack.push(MatchFrame {
            return_location: ReturnLocation::Root,
            args: MatchFrameArgs {
                subject_ptr: start,
                instruction_ptr: 0,
                offset_top: 2,
                bracket_chain: None,
            },
            locals: MatchFrameLocals::default(),
        });

        let mut action = self.execute()?;
        loop {
            action = match action {
                Action::Next => self.execute()?,
                Action::Recurse { location, ip, group } => {
                    self.push_frame(location, ip, group)?;
                    self.execute()?
                }
                Action::Return(matched) => {
                    let frame = self.stack.pop().ok_or(JS_REGEXP_ERROR_INTERNAL)?;
                    if self.stack.is_empty() {
                        return Ok(matched);
                    }
                    self.resume(frame.return_location, matched)?
                }
            };
        }
    }

    fn push_frame(
        &mut self,
        location: ReturnLocation,
        ip: usize,
        group: GroupMode,
    ) -> Result<(), i32> {
        self.md.match_count += 1;
        if self.md.match_count > self.md.match_limit {
            return Err(JS_REGEXP_ERROR_HIT_LIMIT);
        }
        let parent = self.stack.last().ok_or(JS_REGEXP_ERROR_INTERNAL)?.args;
        let index = self.stack.len();
        let mut frame = MatchFrame {
            return_location: location,
            args: MatchFrameArgs { instruction_ptr: ip, ..parent },
            locals: MatchFrameLocals::default(),
        };
        if group != GroupMode::Inherit {
            frame.locals.bracket_node = BracketChainNode {
                previous: if group == GroupMode::New { parent.bracket_chain } else { None },
                bracket_start: parent.subject_ptr,
            };
            frame.args.bracket_chain = Some(index);
        }
        self.stack.push(frame);
        Ok(())
    }

    fn top(&mut self) -> Result<&mut MatchFrame, i32> {
        self.stack.last_mut().ok_or(JS_REGEXP_ERROR_INTERNAL)
    }

    /// Advances past a single-item instruction or fails.
    fn single(&mut self, item: RepeatItem) -> Result<Action, i32> {
        let ops = self.ops;
        let sp = self.top()?.args.subject_ptr;
        match match_item(ops, &self.md, item, sp) {
            Some(next) => {
                let f = self.top()?;
                f.args.subject_ptr = next;
                f.args.instruction_ptr += 1;
                Ok(Action::Next)
            }
            None => Ok(Action::Return(false)),
        }
    }

    fn start_repeat(
        &mut self,
        item: RepeatItem,
        min: u32,
        max: u32,
        minimize: bool,
        next_ip: usize,
    ) -> Result<Action, i32> {
        let ops = self.ops;
        let mut sp = self.top()?.args.subject_ptr;
        for _ in 0..min {
            match match_item(ops, &self.md, item, sp) {
                Some(next) => sp = next,
                None => return Ok(Action::Return(false)),
            }
        }

        if min == max {
            let f = self.top()?;
            f.args.subject_ptr = sp;
            f.args.instruction_ptr = next_ip;
            return Ok(Action::Next);
        }

        if minimize {
            let f = self.top()?;
            f.args.subject_ptr = sp;
            f.locals.repeat = Some(RepeatState { item, max, count: min, start: sp, next_ip });
            return Ok(Action::Recurse {
                location: ReturnLocation::RepeatLazy,
                ip: next_ip,
                group: GroupMode::Inherit,
            });
        }

        let start = sp;
        let mut count = min;
        while count < max {
            match match_item(ops, &self.md, item, sp) {
                Some(next) => sp = next,
                None => break,
            }
            count += 1;
        }
        let f = self.top()?;
        f.args.subject_ptr = sp;
        f.locals.repeat = Some(RepeatState { item, max, count, start, next_ip });
        Ok(Action::Recurse {
            location: ReturnLocation::RepeatGreedy,
            ip: next_ip,
            group: GroupMode::Inherit,
        })
    }

    /// Position one item before `sp` in a greedy run.
    fn back_off(item: RepeatItem, sp: usize) -> usize {
        match item {
            RepeatItem::Char { c, .. } if c > 0xffff => sp - 2,
            RepeatItem::Ref { length, .. } => sp - length,
            _ => sp - 1,
        }
    }

    /// Repeat bounds for a class or backreference, from an optional
    /// following Cr instruction: (min, max, minimize, next instruction).
    fn cr_bounds(&self, ip: usize) -> (u32, u32, bool, usize) {
        let Some(next) = self.ops.get(ip + 1) else {
            return (1, 1, false, ip + 1);
        };
        let (min, max, minimize) = match next.opcode {
            OpCode::CrStar => (0, u32::MAX, false),
            OpCode::CrMinStar => (0, u32::MAX, true),
            OpCode::CrPlus => (1, u32::MAX, false),
            OpCode::CrMinPlus => (1, u32::MAX, true),
            OpCode::CrQuery => (0, 1, false),
            OpCode::CrMinQuery => (0, 1, true),
            OpCode::CrRange | OpCode::CrMinRange => {
                let (min, max) = match next.payload {
                    OperationPayload::Range { min, max } => (min as u32, max as u32),
                    _ => (1, 1),
                };
                let max = if max == 0 { u32::MAX } else { max };
                (min, max, next.opcode == OpCode::CrMinRange)
            }
            _ => return (1, 1, false, ip + 1),
        };
        (min, max, minimize, ip + 2)
    }

    fn char_item(&self, c: u32, caseless: bool) -> RepeatItem {
        let othercase = if caseless && c <= 0xffff { ucp_othercase(c) } else { None };
        RepeatItem::Char { c, othercase }
    }
}

impl<'r, 's, 'o, C: CodeUnit> Matcher<'r, 's, 'o, C> {
    /// Runs the instruction at the current frame's instruction pointer.
    fn execute(&mut self) -> Result<Action, i32> {
        let ops = self.ops;
        let (ip, sp) = {
            let f = self.top()?;
            (f.args.instruction_ptr, f.args.subject_ptr)
        };
        let op = &ops[ip];
        let end = self.md.end();

        match op.opcode {
            OpCode::End => {
                let offset_top = self.top()?.args.offset_top;
                self.md.end_match_ptr = sp;
                self.md.end_offset_top = offset_top;
                Ok(Action::Return(true))
            }

            // === Brackets ===
            OpCode::Bra => {
                let number = bracket_number(ops, ip) as usize;
                let md = &mut self.md;
                let f = self.stack.last_mut().ok_or(JS_REGEXP_ERROR_INTERNAL)?;
                f.locals.capturing = false;
                if number > 0 {
                    let offset = number << 1;
                    if offset < md.offset_max {
                        let scratch = md.offset_end - number;
                        f.locals.number = number;
                        f.locals.offset = offset;
                        f.locals.save_offsets = [
                            md.offset_vector[offset],
                            md.offset_vector[offset + 1],
                            md.offset_vector[scratch],
                        ];
                        f.locals.capturing = true;
                        md.offset_vector[scratch] = sp as i32;
                    }
                }
                Ok(Action::Recurse {
                    location: ReturnLocation::BracketAlt,
                    ip: ip + 1,
                    group: GroupMode::New,
                })
            }
            OpCode::BraNumber => {
                self.top()?.args.instruction_ptr += 1;
                Ok(Action::Next)
            }
            // Reaching an Alt means the branch before it matched.
            OpCode::Alt => {
                self.top()?.args.instruction_ptr = advance_to_end_of_bracket(ops, ip);
                Ok(Action::Next)
            }
            OpCode::Ket | OpCode::KetRmax | OpCode::KetRmin => self.ket(),
            OpCode::Assert => {
                self.save_captures_in(ip)?;
                Ok(Action::Recurse {
                    location: ReturnLocation::AssertAlt,
                    ip: ip + 1,
                    group: GroupMode::Isolated,
                })
            }
            OpCode::AssertNot => {
                self.top()?.locals.opener = ip;
                Ok(Action::Recurse {
                    location: ReturnLocation::AssertNotAlt,
                    ip: ip + 1,
                    group: GroupMode::Isolated,
                })
            }
            OpCode::BraZero => Ok(Action::Recurse {
                location: ReturnLocation::BraZero,
                ip: ip + 1,
                group: GroupMode::Inherit,
            }),
            OpCode::BraMinZero => Ok(Action::Recurse {
                location: ReturnLocation::BraMinZero,
                ip: advance_to_end_of_bracket(ops, ip + 1) + 1,
                group: GroupMode::Inherit,
            }),

            // === Assertions on position ===
            OpCode::Circ | OpCode::Bol | OpCode::Dollar | OpCode::Eol => {
                let holds = match op.opcode {
                    OpCode::Circ => sp == 0,
                    OpCode::Bol => sp == 0 || is_newline(self.md.unit(sp - 1)),
                    OpCode::Dollar => sp >= end,
                    _ => sp >= end || is_newline(self.md.unit(sp)),
                };
                if !holds {
                    return Ok(Action::Return(false));
                }
                self.top()?.args.instruction_ptr += 1;
                Ok(Action::Next)
            }
            OpCode::WordBoundary | OpCode::NotWordBoundary => {
                let previous = sp > 0 && is_word_char(self.md.unit(sp - 1));
                let current = sp < end && is_word_char(self.md.unit(sp));
                if (op.opcode == OpCode::WordBoundary) == (previous == current) {
                    return Ok(Action::Return(false));
                }
                self.top()?.args.instruction_ptr += 1;
                Ok(Action::Next)
            }

            // === Single items ===
            OpCode::NotDigit
            | OpCode::Digit
            | OpCode::NotWhitespace
            | OpCode::Whitespace
            | OpCode::NotWordchar
            | OpCode::Wordchar
            | OpCode::NotNewline => self.single(RepeatItem::Type(op.opcode)),
            OpCode::Char | OpCode::AsciiChar => {
                let c = op.char_value().ok_or(JS_REGEXP_ERROR_INTERNAL)?;
                self.single(RepeatItem::Char { c, othercase: None })
            }
            OpCode::CharIgnoringCase | OpCode::AsciiLetterIgnoringCase => {
                let c = op.char_value().ok_or(JS_REGEXP_ERROR_INTERNAL)?;
                let item = self.char_item(c, true);
                self.single(item)
            }
            OpCode::Not => {
                let c = op.char_value().ok_or(JS_REGEXP_ERROR_INTERNAL)?;
                self.single(RepeatItem::NotChar { c })
            }

            // === Classes and backreferences, optionally repeated ===
            OpCode::Class | OpCode::NClass | OpCode::XClass => {
                let item = if op.opcode == OpCode::XClass {
                    RepeatItem::XClass { index: ip }
                } else {
                    RepeatItem::Class { index: ip }
                };
                let (min, max, minimize, next_ip) = self.cr_bounds(ip);
                self.start_repeat(item, min, max, minimize, next_ip)
            }
            OpCode::Ref => {
                let OperationPayload::Ref { number } = op.payload else {
                    return Err(JS_REGEXP_ERROR_INTERNAL);
                };
                let offset = (number as usize) << 1;
                let offset_top = self.top()?.args.offset_top;
                // An unset group gets a length no subject can supply, so only a
                // zero minimum lets the pattern go on.
                let length = if offset >= offset_top || self.md.offset_vector[offset] < 0 {
                    end + 1
                } else {
                    let ov = &self.md.offset_vector;
                    (ov[offset + 1] - ov[offset]).max(0) as usize
                };
                let (min, max, minimize, next_ip) = self.cr_bounds(ip);
                if length == 0 {
                    self.top()?.args.instruction_ptr = next_ip;
                    return Ok(Action::Next);
                }
                self.start_repeat(RepeatItem::Ref { offset, length }, min, max, minimize, next_ip)
            }

            // === Single-item repeats ===
            opcode => {
                let Some((family, shape, minimize)) = repeat_shape(opcode) else {
                    return Err(JS_REGEXP_ERROR_INTERNAL);
                };
                let (value, count, ty) = match op.payload {
                    OperationPayload::Char { c } => (c, 0, None),
                    OperationPayload::CharCount { c, count } => (c, count as u32, None),
                    OperationPayload::Type { ty } => (0, 0, Some(ty)),
                    OperationPayload::TypeCount { ty, count } => (0, count as u32, Some(ty)),
                    _ => return Err(JS_REGEXP_ERROR_INTERNAL),
                };
                let item = match (family, ty) {
                    (RepeatFamily::Char, _) => self.char_item(value, self.md.ignore_case),
                    (RepeatFamily::Not, _) => RepeatItem::NotChar { c: value },
                    (RepeatFamily::Type, Some(ty)) => RepeatItem::Type(ty),
                    (RepeatFamily::Type, None) => return Err(JS_REGEXP_ERROR_INTERNAL),
                };
                let (min, max) = match shape {
                    RepeatShape::Star => (0, u32::MAX),
                    RepeatShape::Plus => (1, u32::MAX),
                    RepeatShape::Query => (0, 1),
                    RepeatShape::Upto => (0, count),
                    RepeatShape::Exact => (count, count),
                };
                self.start_repeat(item, min, max, minimize, ip + 1)
            }
        }
    }

    fn ket(&mut self) -> Result<Action, i32> {
        let ops = self.ops;
        let head = self.top()?.args.bracket_chain.ok_or(JS_REGEXP_ERROR_INTERNAL)?;
        let node = self.stack[head].locals.bracket_node;
        let md = &mut self.md;
        let f = self.stack.last_mut().ok_or(JS_REGEXP_ERROR_INTERNAL)?;
        let ip = f.args.instruction_ptr;
        let opener = ip - ops[ip].link_value();
        f.args.bracket_chain = node.previous;

        if matches!(ops[opener].opcode, OpCode::Assert | OpCode::AssertNot) {
            md.end_offset_top = f.args.offset_top;
            return Ok(Action::Return(true));
        }

        let number = bracket_number(ops, opener) as usize;
        if number > 0 {
            let offset = number << 1;
            if offset >= md.offset_max {
                md.offset_overflow = true;
            } else {
                md.offset_vector[offset] = md.offset_vector[md.offset_end - number];
                md.offset_vector[offset + 1] = f.args.subject_ptr as i32;
                if f.args.offset_top <= offset {
                    f.args.offset_top = offset + 2;
                }
            }
        }

        // A group that matched nothing is not repeated again.
        if ops[ip].opcode == OpCode::Ket || f.args.subject_ptr == node.bracket_start {
            f.args.instruction_ptr = ip + 1;
            return Ok(Action::Next);
        }

        f.locals.opener = opener;
        if ops[ip].opcode == OpCode::KetRmin {
            Ok(Action::Recurse {
                location: ReturnLocation::KetRminContinue,
                ip: ip + 1,
                group: GroupMode::Inherit,
            })
        } else {
            Ok(Action::Recurse {
                location: ReturnLocation::KetRmaxRepeat,
                ip: opener,
                group: GroupMode::Inherit,
            })
        }
    }

    /// Records the capture pairs of the groups inside the lookahead at
    /// `opener` so they can be put back by `restore_captures`.
    fn save_captures_in(&mut self, opener: usize) -> Result<(), i32> {
        let ops = self.ops;
        let base = self.assert_saves.len();
        let ket = advance_to_end_of_bracket(ops, opener);
        for i in opener + 1..ket {
            if ops[i].opcode != OpCode::Bra {
                continue;
            }
            let offset = (bracket_number(ops, i) as usize) << 1;
            if offset > 0 && offset < self.md.offset_max {
                let ov = &self.md.offset_vector;
                self.assert_saves.push((offset, ov[offset], ov[offset + 1]));
            }
        }
        let f = self.top()?;
        f.locals.opener = opener;
        f.locals.save_base = base;
        Ok(())
    }

    fn restore_captures(&mut self, base: usize) {
        for &(offset, start, end) in &self.assert_saves[base..] {
            self.md.offset_vector[offset] = start;
            self.md.offset_vector[offset + 1] = end;
        }
        self.assert_saves.truncate(base);
    }

    /// Captures made inside a failed negative lookahead are discarded.
    fn clear_captures_in(&mut self, opener: usize) {
        let ops = self.ops;
        let ket = advance_to_end_of_bracket(ops, opener);
        for i in opener + 1..ket {
            if ops[i].opcode != OpCode::Bra {
                continue;
            }
            let offset = (bracket_number(ops, i) as usize) << 1;
            if offset > 0 && offset < self.md.offset_max {
                self.md.offset_vector[offset] = -1;
                self.md.offset_vector[offset + 1] = -1;
            }
        }
    }

    /// Continues the current frame after a child returned `matched`.
    fn resume(&mut self, location: ReturnLocation, matched: bool) -> Result<Action, i32> {
        let ops = self.ops;
        let ip = self.top()?.args.instruction_ptr;

        let action = match location {
            ReturnLocation::Root => return Err(JS_REGEXP_ERROR_INTERNAL),

            ReturnLocation::BracketAlt => {
                if matched {
                    return Ok(Action::Return(true));
                }
                let next = ip + ops[ip].link_value();
                let md = &mut self.md;
                let f = self.stack.last_mut().ok_or(JS_REGEXP_ERROR_INTERNAL)?;
                f.args.instruction_ptr = next;
                if ops[next].opcode == OpCode::Alt {
                    Action::Recurse { location, ip: next + 1, group: GroupMode::New }
                } else {
                    if f.locals.capturing {
                        let [start, end, scratch] = f.locals.save_offsets;
                        md.offset_vector[f.locals.offset] = start;
                        md.offset_vector[f.locals.offset + 1] = end;
                        md.offset_vector[md.offset_end - f.locals.number] = scratch;
                    }
                    Action::Return(false)
                }
            }

            ReturnLocation::AssertAlt => {
                let end_offset_top = self.md.end_offset_top;
                let f = self.top()?;
                if matched {
                    // The rest of the pattern runs in a child frame so the
                    // lookahead's captures can be undone if it fails.
                    f.args.offset_top = end_offset_top;
                    Action::Recurse {
                        location: ReturnLocation::AssertContinue,
                        ip: advance_to_end_of_bracket(ops, ip) + 1,
                        group: GroupMode::Inherit,
                    }
                } else {
                    let next = ip + ops[ip].link_value();
                    f.args.instruction_ptr = next;
                    if ops[next].opcode == OpCode::Alt {
                        Action::Recurse { location, ip: next + 1, group: GroupMode::Isolated }
                    } else {
                        let base = f.locals.save_base;
                        self.assert_saves.truncate(base);
                        Action::Return(false)
                    }
                }
            }
            ReturnLocation::AssertContinue => {
                if !matched {
                    let base = self.top()?.locals.save_base;
                    self.restore_captures(base);
                }
                Action::Return(matched)
            }

            ReturnLocation::AssertNotAlt => {
                if matched {
                    let opener = self.top()?.locals.opener;
                    self.clear_captures_in(opener);
                    return Ok(Action::Return(false));
                }
                let next = ip + ops[ip].link_value();
                let f = self.top()?;
                if ops[next].opcode == OpCode::Alt {
                    f.args.instruction_ptr = next;
                    Action::Recurse { location, ip: next + 1, group: GroupMode::Isolated }
                } else {
                    f.args.instruction_ptr = next + 1;
                    Action::Next
                }
            }

            ReturnLocation::BraZero => {
                if matched {
                    return Ok(Action::Return(true));
                }
                self.top()?.args.instruction_ptr = advance_to_end_of_bracket(ops, ip + 1) + 1;
                Action::Next
            }
            ReturnLocation::BraMinZero => {
                if matched {
                    return Ok(Action::Return(true));
                }
                self.top()?.args.instruction_ptr = ip + 1;
                Action::Next
            }

            ReturnLocation::KetRminContinue => {
                if matched {
                    return Ok(Action::Return(true));
                }
                let opener = self.top()?.locals.opener;
                Action::Recurse {
                    location: ReturnLocation::KetRminRepeat,
                    ip: opener,
                    group: GroupMode::Inherit,
                }
            }
            ReturnLocation::KetRmaxRepeat => {
                if matched {
                    return Ok(Action::Return(true));
                }
                Action::Recurse {
                    location: ReturnLocation::KetRmaxContinue,
                    ip: ip + 1,
                    group: GroupMode::Inherit,
                }
            }
            ReturnLocation::KetRminRepeat | ReturnLocation::KetRmaxContinue => {
                Action::Return(matched)
            }

            ReturnLocation::RepeatLazy => {
                if matched {
                    return Ok(Action::Return(true));
                }
                let f = self.top()?;
                let sp = f.args.subject_ptr;
                let mut r = f.locals.repeat.ok_or(JS_REGEXP_ERROR_INTERNAL)?;
                if r.count >= r.max {
                    return Ok(Action::Return(false));
                }
                let Some(next) = match_item(ops, &self.md, r.item, sp) else {
                    return Ok(Action::Return(false));
                };
                r.count += 1;
                let f = self.top()?;
                f.args.subject_ptr = next;
                f.locals.repeat = Some(r);
                Action::Recurse { location, ip: r.next_ip, group: GroupMode::Inherit }
            }
            ReturnLocation::RepeatGreedy => {
                if matched {
                    return Ok(Action::Return(true));
                }
                let f = self.top()?;
                let sp = f.args.subject_ptr;
                let r = f.locals.repeat.ok_or(JS_REGEXP_ERROR_INTERNAL)?;
                if sp <= r.start {
                    return Ok(Action::Return(false));
                }
                let back = Self::back_off(r.item, sp);
                self.top()?.args.subject_ptr = back;
                Action::Recurse { location, ip: r.next_ip, group: GroupMode::Inherit }
            }
        };
        Ok(action)
    }
}

// ============================================================================
// Search driver
// ============================================================================

struct Found {
    start: usize,
    end: usize,
    end_offset_top: usize,
    overflow: bool,
}

/// Tries start positions from `start_offset` on, using the header hints to
/// skip positions that cannot match. `ov.len()` must be a multiple of 3.
fn search<C: CodeUnit>(
    re: &JsRegExp,
    subject: &[C],
    start_offset: usize,
    ov: &mut [i32],
) -> Result<Option<Found>, i32> {
    let ocount = ov.len();
    let offset_max = 2 * ocount / 3;
    let top_bracket = re.top_bracket as usize;

    // Scratch slots are saved and restored by brackets, so give them a
    // defined value once.
    for n in 1..=top_bracket {
        if n << 1 < offset_max {
            ov[ocount - n] = -1;
        }
    }
    let reset_count = (2 + 2 * top_bracket).min(offset_max);

    let end = subject.len();
    let anchored = re.is_anchored();
    let first_byte = if re.options.contains(RegExpOptions::USE_FIRST_BYTE_OPTIMIZATION) {
        let caseless = re.first_byte & REQ_IGNORE_CASE != 0;
        let c = (re.first_byte & REQ_CHAR_MASK) as u32;
        Some((if caseless { to_ascii_lower(c) } else { c }, caseless))
    } else {
        None
    };
    let req_byte = if re.options.contains(RegExpOptions::USE_REQUIRED_BYTE_OPTIMIZATION) {
        let c = (re.req_byte & REQ_CHAR_MASK) as u32;
        Some((c, flip_case(c), re.req_byte & REQ_IGNORE_CASE != 0))
    } else {
        None
    };
    let line_start = re.options.contains(RegExpOptions::USE_MULTILINE_FIRST_BYTE_OPTIMIZATION);

    let mut matcher = Matcher {
        ops: &re.ops,
        md: MatchData {
            subject,
            offset_vector: ov,
            offset_end: ocount,
            offset_max,
            offset_overflow: false,
            end_match_ptr: 0,
            end_offset_top: 0,
            ignore_case: re.options.contains(RegExpOptions::IGNORE_CASE),
            match_count: 0,
            match_limit: js_reg_exp_get_match_limit(),
        },
        stack: SmallVec::new(),
        assert_saves: Vec::new(),
    };

    let mut start_match = start_offset;
    let mut req_byte_ptr: Option<usize> = None;
    loop {
        matcher.md.offset_vector[..reset_count].fill(-1);

        if let Some((fb, caseless)) = first_byte {
            if caseless {
                while start_match < end {
                    let c: u32 = subject[start_match].into();
                    if c > 127 || to_ascii_lower(c) == fb {
                        break;
                    }
                    start_match += 1;
                }
            } else {
                start_match = C::find(&subject[start_match..], fb).map_or(end, |i| start_match + i);
            }
        } else if line_start && start_match > start_offset {
            while start_match < end && !is_newline(subject[start_match - 1].into()) {
                start_match += 1;
            }
        }

        // Scanning a very long subject for the required character costs more
        // than it saves, so only do it near the end.
        if let Some((rb, rb2, caseless)) = req_byte {
            if end - start_match < REQ_BYTE_MAX {
                let p = start_match + usize::from(first_byte.is_some());
                if req_byte_ptr.map_or(true, |r| p > r) {
                    let hay = subject.get(p..).unwrap_or(&[]);
                    let found = if caseless { C::find2(hay, rb, rb2) } else { C::find(hay, rb) };
                    match found {
                        Some(i) => req_byte_ptr = Some(p + i),
                        None => {
                            trace!(required = rb, "required character absent");
                            return Ok(None);
                        }
                    }
                }
            }
        }

        trace!(start = start_match, "match attempt");
        if matcher.match_at(start_match)? {
            let md = &mut matcher.md;
            // Groups past the last one set read as unset.
            if md.end_offset_top < reset_count {
                md.offset_vector[md.end_offset_top..reset_count].fill(-1);
            }
            return Ok(Some(Found {
                start: start_match,
                end: md.end_match_ptr,
                end_offset_top: md.end_offset_top,
                overflow: md.offset_overflow,
            }));
        }

        start_match += 1;
        if anchored || start_match > end {
            return Ok(None);
        }
    }
}

/// Searches `subject` from `start_offset` and fills `offsets` with
/// (start, end) pairs: the whole match, then each capture (-1 when unset).
///
/// Returns the number of pairs set (0 when `offsets` was too small to hold
/// them all), `JS_REGEXP_ERROR_NO_MATCH`, or a negative error code.
pub fn js_reg_exp_execute<C: CodeUnit>(
    re: &JsRegExp,
    subject: &[C],
    start_offset: usize,
    offsets: &mut [i32],
) -> i32 {
    if start_offset > subject.len() {
        return JS_REGEXP_ERROR_NO_MATCH;
    }
    let offset_count = offsets.len();
    let ocount = offset_count - offset_count % 3;
    let top_backref = re.top_backref as usize;

    // Backreferences need their groups recorded even when the caller asked
    // for fewer pairs.
    let result = if top_backref > 0 && top_backref >= ocount / 3 {
        let size = top_backref * 3 + 3;
        let mut temp: Vec<i32> = Vec::new();
        if temp.try_reserve_exact(size).is_err() {
            return JS_REGEXP_ERROR_NO_MEMORY;
        }
        temp.resize(size, -1);
        let mut result = search(re, subject, start_offset, &mut temp);
        if let Ok(Some(found)) = &mut result {
            if offset_count >= 4 {
                let n = offset_count.min(size);
                offsets[2..n].copy_from_slice(&temp[2..n]);
            }
            if found.end_offset_top > offset_count {
                found.overflow = true;
            }
        }
        result
    } else {
        search(re, subject, start_offset, &mut offsets[..ocount])
    };

    match result {
        Ok(Some(found)) => {
            if offset_count < 2 {
                return 0;
            }
            offsets[0] = found.start as i32;
            offsets[1] = found.end as i32;
            if found.overflow {
                0
            } else {
                (found.end_offset_top / 2) as i32
            }
        }
        Ok(None) => JS_REGEXP_ERROR_NO_MATCH,
        Err(code) => {
            if code == JS_REGEXP_ERROR_HIT_LIMIT {
                warn!(limit = js_reg_exp_get_match_limit(), "match limit exceeded");
            }
            code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pcre_compile::js_reg_exp_compile;

    fn compile(pattern: &str, ignore_case: bool, multiline: bool) -> JsRegExp {
        let p: Vec<u16> = pattern.encode_utf16().collect();
        let ic = if ignore_case {
            JsRegExpIgnoreCaseOption::IgnoreCase
        } else {
            JsRegExpIgnoreCaseOption::DoNotIgnoreCase
        };
        let ml = if multiline {
            JsRegExpMultilineOption::Multiline
        } else {
            JsRegExpMultilineOption::SingleLine
        };
        js_reg_exp_compile(&p, ic, ml).unwrap()
    }

    fn run(re: &JsRegExp, subject: &str) -> Option<Vec<i32>> {
        let s: Vec<u16> = subject.encode_utf16().collect();
        let pairs = re.top_bracket as usize + 1;
        let mut ov = vec![0; pairs * 3];
        let rc = js_reg_exp_execute(re, &s, 0, &mut ov);
        if rc == JS_REGEXP_ERROR_NO_MATCH {
            return None;
        }
        assert!(rc > 0, "unexpected result code {rc}");
        ov.truncate(pairs * 2);
        Some(ov)
    }

    fn exec(pattern: &str, subject: &str) -> Option<Vec<i32>> {
        run(&compile(pattern, false, false), subject)
    }

    fn exec_ic(pattern: &str, subject: &str) -> Option<Vec<i32>> {
        run(&compile(pattern, true, false), subject)
    }

    fn exec_ml(pattern: &str, subject: &str) -> Option<Vec<i32>> {
        run(&compile(pattern, false, true), subject)
    }

    #[test]
    fn literals_and_alternation() {
        assert_eq!(exec("abc", "xabcx"), Some(vec![1, 4]));
        assert_eq!(exec("ab|cd", "xcd"), Some(vec![1, 3]));
        assert_eq!(exec("abc", "ab"), None);
        assert_eq!(exec("", "xyz"), Some(vec![0, 0]));
    }

    #[test]
    fn greedy_and_lazy() {
        assert_eq!(exec("a.*b", "axbxb"), Some(vec![0, 5]));
        assert_eq!(exec("a.*?b", "axbxb"), Some(vec![0, 3]));
        assert_eq!(exec("x[ab]+?b", "xabb"), Some(vec![0, 3]));
        assert_eq!(exec("x[ab]+b", "xabb"), Some(vec![0, 4]));
        assert_eq!(exec("x\\d{2,}", "x1234"), Some(vec![0, 5]));
    }

    #[test]
    fn counted_repeats() {
        assert_eq!(exec("a{2,3}", "a"), None);
        assert_eq!(exec("a{2,3}", "aab"), Some(vec![0, 2]));
        assert_eq!(exec("a{2,3}", "aaab"), Some(vec![0, 3]));
        assert_eq!(exec("(?:ab){2}", "abab"), Some(vec![0, 4]));
    }

    #[test]
    fn captures() {
        assert_eq!(exec("(a)(b)?", "a"), Some(vec![0, 1, 0, 1, -1, -1]));
        assert_eq!(exec("(ab)+", "ababx"), Some(vec![0, 4, 2, 4]));
        assert_eq!(
            exec("(a|ab)(c|bcd)(d*)", "abcd"),
            Some(vec![0, 4, 0, 1, 1, 4, 4, 4])
        );
    }

    #[test]
    fn empty_group_iteration_stops() {
        assert_eq!(exec("(a*)*b", "b"), Some(vec![0, 1, 0, 0]));
        assert_eq!(exec("(?:a?)+c", "aac"), Some(vec![0, 3]));
    }

    #[test]
    fn backreferences() {
        assert_eq!(exec("(a)\\1", "aa"), Some(vec![0, 2, 0, 1]));
        assert_eq!(exec("(a)\\1", "ab"), None);
        assert_eq!(exec("(a)?\\1*", ""), Some(vec![0, 0, -1, -1]));
        assert_eq!(exec("(a)?\\1", ""), None);
        assert_eq!(exec("(a*)b\\1+", "aabaaaa"), Some(vec![0, 7, 0, 2]));
        assert_eq!(exec_ic("(a)\\1", "aA"), Some(vec![0, 2, 0, 1]));
    }

    #[test]
    fn anchors() {
        assert_eq!(exec("^abc", "xabc"), None);
        assert_eq!(exec_ml("^abc", "x\nabc"), Some(vec![2, 5]));
        assert_eq!(exec("a$", "ab a"), Some(vec![3, 4]));
        assert_eq!(exec("a$", "a\nb"), None);
        assert_eq!(exec_ml("a$", "a\nb"), Some(vec![0, 1]));
    }

    #[test]
    fn word_boundaries() {
        assert_eq!(exec("\\bfoo\\b", "a foo."), Some(vec![2, 5]));
        assert_eq!(exec("\\Bo", "foo"), Some(vec![1, 2]));
        assert_eq!(exec("\\bfoo\\b", "afoo"), None);
    }

    #[test]
    fn lookahead() {
        assert_eq!(exec("a(?=b)", "acab"), Some(vec![2, 3]));
        assert_eq!(exec("a(?!b)", "abac"), Some(vec![2, 3]));
        assert_eq!(exec("(?=(a))a", "a"), Some(vec![0, 1, 0, 1]));
    }

    #[test]
    fn lookahead_captures_revert_when_later_match_fails() {
        assert_eq!(exec("(?:(?=(a))ab|a)c", "ac"), Some(vec![0, 2, -1, -1]));
        assert_eq!(exec("(?:(?=(a))ab|a)(c)", "ac"), Some(vec![0, 2, -1, -1, 1, 2]));
        // The second iteration's capture is dropped; the first one's stays.
        assert_eq!(exec("(?:(?=(\\w))\\w)+b", "ab"), Some(vec![0, 2, 0, 1]));
    }

    #[test]
    fn trailing_unset_groups_read_unset() {
        let re = compile("(?:(?=(a))ab|a)c", false, false);
        let s: Vec<u16> = "ac".encode_utf16().collect();
        let mut ov = [7; 6];
        assert_eq!(js_reg_exp_execute(&re, &s, 0, &mut ov), 1);
        assert_eq!(&ov[..4], &[0, 2, -1, -1]);
    }

    #[test]
    fn negative_lookahead_discards_captures() {
        assert_eq!(exec("(?!(a)b)..|(..)", "ab"), Some(vec![0, 2, -1, -1, 0, 2]));
    }

    #[test]
    fn ignore_case() {
        assert_eq!(exec_ic("[A-Z]+", "abcXYZ"), Some(vec![0, 6]));
        assert_eq!(exec_ic("[^a]", "Ab"), Some(vec![1, 2]));
        assert_eq!(exec_ic("k+", "kKk"), Some(vec![0, 3]));
        assert_eq!(exec_ic("\u{e9}", "\u{c9}"), Some(vec![0, 1]));
        assert_eq!(exec("\u{e9}", "\u{c9}"), None);
    }

    #[test]
    fn supplementary_characters() {
        assert_eq!(exec("\u{1F600}+", "\u{1F600}\u{1F600}x"), Some(vec![0, 4]));
        assert_eq!(exec("^.$", "\u{1F600}"), None);
        assert_eq!(exec("^..$", "\u{1F600}"), Some(vec![0, 2]));
        assert_eq!(exec("[\u{1F600}a]*\u{1F600}", "\u{1F600}\u{1F600}"), Some(vec![0, 4]));
    }

    #[test]
    fn extended_classes_consume_one_code_unit() {
        assert_eq!(exec("[\\uD83D\\uDE00]", "\u{1F600}"), Some(vec![0, 1]));
        assert_eq!(exec("[\\u0100\\uD83D]", "\u{1F600}"), Some(vec![0, 1]));
        assert_eq!(exec("[^\\u0100]", "\u{1F600}"), Some(vec![0, 1]));
        assert_eq!(exec("[^\\u0100]+?\\uDE00", "\u{1F600}"), Some(vec![0, 2]));
        assert_eq!(exec("[\\u0100-\\uFFFF]*\\uDE00", "x\u{1F600}\u{1F600}"), Some(vec![1, 5]));
    }

    #[test]
    fn latin1_subject() {
        let re = compile("b+", false, false);
        let mut ov = [0; 3];
        assert_eq!(js_reg_exp_execute(&re, b"aabbb".as_slice(), 0, &mut ov), 1);
        assert_eq!(&ov[..2], &[2, 5]);

        let re = compile("B", true, false);
        assert_eq!(js_reg_exp_execute(&re, b"xxb".as_slice(), 0, &mut ov), 1);
        assert_eq!(&ov[..2], &[2, 3]);
    }

    #[test]
    fn start_offset() {
        let re = compile("a", false, false);
        let s: Vec<u16> = "aXa".encode_utf16().collect();
        let mut ov = [0; 3];
        assert_eq!(js_reg_exp_execute(&re, &s, 1, &mut ov), 1);
        assert_eq!(&ov[..2], &[2, 3]);
        assert_eq!(js_reg_exp_execute(&re, &s, 4, &mut ov), JS_REGEXP_ERROR_NO_MATCH);

        let empty = compile("", false, false);
        assert_eq!(js_reg_exp_execute(&empty, &s, 3, &mut ov), 1);
        assert_eq!(&ov[..2], &[3, 3]);
    }

    #[test]
    fn small_offset_vector() {
        let re = compile("(a)(b)(c)", false, false);
        let s: Vec<u16> = "abc".encode_utf16().collect();
        let mut ov = [-7; 3];
        assert_eq!(js_reg_exp_execute(&re, &s, 0, &mut ov), 0);
        assert_eq!(&ov[..2], &[0, 3]);

        let mut none: [i32; 0] = [];
        assert_eq!(js_reg_exp_execute(&re, &s, 0, &mut none), 0);
    }

    #[test]
    fn backreference_with_small_offset_vector() {
        let re = compile("(a)\\1", false, false);
        let s: Vec<u16> = "xaa".encode_utf16().collect();
        let mut ov = [0; 3];
        assert_eq!(js_reg_exp_execute(&re, &s, 0, &mut ov), 0);
        assert_eq!(&ov[..2], &[1, 3]);

        let mut wide = [0; 6];
        assert_eq!(js_reg_exp_execute(&re, &s, 0, &mut wide), 2);
        assert_eq!(&wide[..4], &[1, 3, 1, 2]);
    }

    #[test]
    fn pathological_pattern_hits_limit() {
        let re = compile("^(a+)+$", false, false);
        let subject: Vec<u16> = format!("{}!", "a".repeat(30)).encode_utf16().collect();
        let mut ov = [0; 6];
        assert_eq!(js_reg_exp_execute(&re, &subject, 0, &mut ov), JS_REGEXP_ERROR_HIT_LIMIT);
    }

    #[test]
    fn required_character_missing() {
        let re = compile("a.*z", false, false);
        assert_eq!(run(&re, "abcdef"), None);
        assert_eq!(run(&re, "abcdefz"), Some(vec![0, 7]));
    }
}
