//! # boolfn-rs: named boolean functions, truth tables and Karnaugh maps
//!
//! **`boolfn-rs`** lets you define single-letter boolean functions from a
//! compact infix grammar, compose them by reference, and inspect them as
//! truth tables or Karnaugh maps.
//!
//! ## Grammar
//!
//! | Syntax | Meaning                                   |
//! |--------|-------------------------------------------|
//! | `a`    | variable `a` (any Latin letter)           |
//! | `$f`   | the function named `f`, inlined on demand |
//! | `!x`   | NOT                                       |
//! | `x*y`  | AND (also `xy`: adjacent operands)        |
//! | `x^y`  | XOR                                       |
//! | `x+y`  | OR                                        |
//! | `(x)`  | grouping                                  |
//!
//! Precedence from tightest to loosest: NOT, AND, XOR, OR.
//!
//! ## Pipeline
//!
//! ```text
//! expression ─▶ token ─▶ function ─▶ registry ─▶ resolve ─▶ enumerate ─▶ table / kmap
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use boolfn_rs::session::Session;
//!
//! let mut session = Session::default();
//! session.define('f', "a*b").unwrap();
//! session.define('g', "$f + c").unwrap();
//!
//! // Nested functions are inlined before enumeration.
//! let e = session.truth_table(&['g']).unwrap();
//! assert_eq!(e.len(), 8);
//!
//! // a=1, b=1, c=0
//! assert!(e.rows()[0b110].outputs[0]);
//! ```
//!
//! ## Core Components
//!
//! - **[`session`]**: the [`Session`][crate::session::Session] facade with `define`, `clear`, `view`, `table` and `kmap`.
//! - **[`resolve`]**: inline substitution of nested functions with cycle detection.
//! - **[`enumerate`]**: shared truth tables over several functions.
//! - **[`kmap`]**: Gray-code Karnaugh-map layout.
//! - **[`command`]**: parsing of chat-style `!b` commands.

pub mod ast;
pub mod command;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod function;
pub mod kmap;
pub mod parser;
pub mod registry;
pub mod resolve;
pub mod session;
pub mod table;
pub mod token;
pub mod types;

pub use error::{Error, Result};
