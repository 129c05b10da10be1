//! ZR5 Hash Library
//!
//! Tooling around the ZR5 proof-of-work / proof-of-stake hash.
//!
//! # Overview
//!
//! ZR5 chains the five SHA-3 finalists: Keccak-512 first, then BLAKE,
//! Grøstl, JH and Skein in one of 24 orders selected by the Keccak output.
//! The digest is the low 256 bits of the last stage.
//!
//! This crate adds the pieces an operator needs on top of the algorithm:
//! reading inputs (text, hex, files, stdin), JSON reports of a cascade trace,
//! and a known-answer self test.
//!
//! # Example
//!
//! ```rust
//! use zr5::algorithm::{hash, trace};
//! use zr5::report::HashReport;
//!
//! let input = b"block header bytes";
//! let digest = hash(input);
//!
//! let report = HashReport::from_trace(input.len(), &trace(input), false);
//! assert_eq!(report.digest, hex::encode(digest));
//! ```

// Re-export the core algorithm
pub use zr5_core as algorithm;

pub mod input;
pub mod report;
pub mod selftest;

// Convenience re-exports
pub use algorithm::{hash, hash_batch, hash_full, trace, zr_cascade, Algorithm, CascadeTrace};
