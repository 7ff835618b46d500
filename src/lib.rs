//! # discrete-rs: discrete mathematics engines in Rust
//!
//! **`discrete-rs`** provides three independent, pure computation engines for
//! classic discrete-mathematics tasks. Each engine is a one-shot function of
//! its input with no shared mutable state, so invocations are freely
//! parallelizable.
//!
//! ## The engines
//!
//! - **Relation analysis** ([`relation`]): classifies a finite binary
//!   relation over a universe of elements along three exhaustive partitions
//!   (reflexivity, symmetry, transitivity) plus the antisymmetry flag.
//! - **Symbol coding** ([`coding`]): fixed-length and Shannon-Fano codecs
//!   behind one [`Codec`][crate::coding::Codec] contract, with a persisted
//!   [`Alphabet`][crate::alphabet::Alphabet] artifact for decode-only
//!   reconstruction.
//! - **Truth tables** ([`truth_table`]): parses a boolean expression over
//!   single-letter variables ([`expr`]) and enumerates all `2^n` assignments.
//!
//! ## Basic Usage
//!
//! ```rust
//! use discrete_rs::coding::{shannon_fano::ShannonFanoCode, Codec};
//! use discrete_rs::relation::Relation;
//! use discrete_rs::truth_table::TruthTable;
//!
//! // 1. Classify a relation
//! let identity = Relation::new(["a", "b"], [("a", "a"), ("b", "b")]);
//! let props = identity.analyze();
//! assert!(props.antisymmetric);
//!
//! // 2. Learn a prefix code and round-trip some text
//! let code = ShannonFanoCode::from_sample("abracadabra").unwrap();
//! let bits = code.encode("cabra").unwrap();
//! assert_eq!(code.decode(&bits).unwrap(), "cabra");
//!
//! // 3. Enumerate a truth table
//! let table = TruthTable::build("a AND NOT b").unwrap();
//! assert_eq!(table.rows().len(), 4);
//! ```
//!
//! ## Determinism
//!
//! Everywhere an order is observable (alphabet tables, Shannon-Fano
//! tie-breaking, variable columns, DOT node numbering) the crate uses an
//! explicit canonical order, so identical inputs always produce identical
//! outputs. No result depends on hash-map iteration order.

pub mod alphabet;
pub mod coding;
pub mod dot;
pub mod error;
pub mod expr;
pub mod relation;
pub mod truth_table;
