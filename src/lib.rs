//! # pdnf-rs: Principal Disjunctive Normal Form in Rust
//!
//! **`pdnf-rs`** compiles propositional formulas into their **Principal Disjunctive Normal Form (PDNF)**,
//! the disjunction of all minterms on which the formula is true.
//!
//! ## What is a PDNF?
//!
//! A minterm is a conjunction that mentions every variable exactly once, either plain or negated.
//! It is true under exactly one assignment. The PDNF of a formula lists one minterm per satisfying assignment,
//! which makes it **canonical**: for a fixed set of variables, every Boolean function has exactly one PDNF.
//! Two formulas are therefore logically equivalent iff their PDNFs coincide.
//!
//! ## Syntax
//!
//! - Variables are single lowercase letters `a`..`z` (at most 10 distinct ones per formula).
//! - `!` is negation, `*` is conjunction, `+` is disjunction, parentheses group.
//! - Juxtaposition means conjunction: `ab` is `a*b`, `a(b+c)` is `a*(b+c)`, `a!b` is `a*!b`.
//! - Spaces are ignored.
//!
//! ## Basic Usage
//!
//! ```rust
//! use pdnf_rs::formula::Formula;
//!
//! let f = Formula::new("a!b + !ab").unwrap();
//!
//! // Full truth table over [a, b]
//! let table = f.truth_table().unwrap();
//! assert_eq!(table.len(), 4);
//! assert_eq!(table.count_true(), 2);
//!
//! // Canonical form
//! assert_eq!(f.pdnf().unwrap().to_string(), "a!b+!ab");
//!
//! // Equivalence is equality of minterm sets
//! let g = Formula::new("(a+b)*!(a*b)").unwrap();
//! assert!(f.equivalent(&g).unwrap());
//! ```
//!
//! ## Pipeline
//!
//! Each stage is a pure function and can be used on its own:
//!
//! - **[`validate`]**: alphabet check of the raw text.
//! - **[`preprocess`]**: whitespace removal, double negation elimination, explicit conjunctions.
//! - **[`postfix`]**: operator-precedence conversion to postfix order.
//! - **[`eval`]**: stack evaluation of a postfix sequence under an [`Assignment`][crate::assignment::Assignment].
//! - **[`truth_table`]**: exhaustive enumeration of all 2ⁿ assignments.
//! - **[`pdnf`]**: minterm extraction.
//!
//! [`Formula`][crate::formula::Formula] ties them together and caches every intermediate result.

pub mod assignment;
pub mod error;
pub mod eval;
pub mod formula;
pub mod pdnf;
pub mod postfix;
pub mod preprocess;
pub mod truth_table;
pub mod types;
pub mod validate;
