//! # jsregex
//!
//! Pure-Rust regular expression engine with ECMAScript (JavaScript)
//! semantics, built as a compiler to a compact instruction program and an
//! explicit-stack backtracking matcher. Subjects are UTF-16 or Latin-1 code
//! units; literal scans use [`memchr`](https://crates.io/crates/memchr).
//!
//! ## Quick Start
//!
//! ```rust
//! use jsregex::prelude::*;
//!
//! let re = Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap();
//! let m = re.find("Date: 2026-02-12").unwrap();
//! assert_eq!(m.as_str(), "2026-02-12");
//! assert_eq!(m.start(), 6);
//! ```
//!
//! For fine-grained control, use [`RegexBuilder`](api::RegexBuilder):
//!
//! ```rust
//! use jsregex::prelude::*;
//!
//! let re = Regex::builder(r"^hello")
//!     .case_insensitive(true)
//!     .multi_line(true)
//!     .build()
//!     .unwrap();
//! assert!(re.is_match("bye\nHello World"));
//! ```
//!
//! ## Low-Level API
//!
//! The compile/execute pair works on code units and an offset vector:
//!
//! ```rust
//! use jsregex::pcre::*;
//! use jsregex::pcre_compile::js_reg_exp_compile;
//! use jsregex::pcre_exec::js_reg_exp_execute;
//!
//! let pattern: Vec<u16> = "(a)(b)?".encode_utf16().collect();
//! let re = js_reg_exp_compile(
//!     &pattern,
//!     JsRegExpIgnoreCaseOption::DoNotIgnoreCase,
//!     JsRegExpMultilineOption::SingleLine,
//! ).unwrap();
//!
//! let subject: Vec<u16> = "xa".encode_utf16().collect();
//! let mut offsets = [0i32; 9];
//! let rc = js_reg_exp_execute(&re, &subject, 0, &mut offsets);
//! assert_eq!(rc, 2); // pairs up to the last group that matched
//! assert_eq!(&offsets[..6], &[1, 2, 1, 2, -1, -1]);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`pcre`] | Public constants, options and the global match limit |
//! | [`pcre_internal`] | Opcodes, instruction payloads, compiled program |
//! | [`pcre_compile`] | Pattern length pass and code generation |
//! | [`pcre_optimize`] | Anchoring and first-character analyses |
//! | [`pcre_exec`] | Backtracking matcher and search driver |
//! | [`pcre_xclass`] | Extended (non-Latin-1) class membership |
//! | [`pcre_tables`] | Character tables and classification |
//! | [`ucptable`] | Simple case-folding ranges |
//! | [`pcre_ucp_searchfuncs`] | Other-case lookups |
//! | [`pcre_error`] | Compile error codes and messages |
//! | [`error`] | [`RegexError`](error::RegexError) |
//! | [`api`] | `Regex`, `Match`, `Captures`, `FindIter` |

#![allow(clippy::new_without_default)]
// Enable #[coverage(off)] attribute when running under cargo-llvm-cov on nightly.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod pcre;
pub mod pcre_compile;
pub mod pcre_error;
pub mod pcre_exec;
pub mod pcre_internal;
pub mod pcre_optimize;
pub mod pcre_tables;
pub mod pcre_ucp_searchfuncs;
pub mod pcre_xclass;
pub mod prelude;
pub mod ucptable;
