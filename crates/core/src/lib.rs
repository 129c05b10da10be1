//! # ZR5 Core Algorithm
//!
//! The ZR5 proof-of-work / proof-of-stake hash: a cascade of the five SHA-3
//! finalists where each stage hashes the full 512-bit output of the stage
//! before it.
//!
//! ## Algorithm
//!
//! 1. Keccak-512 over the input (original Keccak padding, not FIPS 202)
//! 2. The lowest little-endian 32-bit word of that digest, mod 24, selects
//!    one of the 24 orderings of BLAKE-512, Grøstl-512, JH-512 and Skein-512
//! 3. The four stages run in that order, each over the previous 64 bytes
//! 4. The result is the low-order 256 bits (first 32 bytes) of the last stage
//!
//! ## Example
//!
//! ```rust
//! use zr5_core::{hash, hash_full, trace};
//!
//! // Single-shot hashing
//! let digest = hash(b"input data");
//! assert_eq!(digest.len(), 32);
//!
//! // The 512-bit cascade output, of which `hash` is the low half
//! let full = hash_full(b"input data");
//! assert_eq!(&full[..32], &digest[..]);
//!
//! // Every intermediate, for auditing a stage ordering
//! let t = trace(b"input data");
//! assert_eq!(t.digest(), digest);
//! ```
//!
//! ## Primitives
//!
//! Each stage is usable on its own through [`HashPrimitive`]:
//!
//! ```rust
//! use zr5_core::{Algorithm, Error};
//!
//! let groestl = Algorithm::Groestl.primitive();
//! assert_eq!(groestl.hash(b"abc", 32).unwrap().len(), 32);
//! assert!(matches!(
//!     groestl.hash(b"abc", 20),
//!     Err(Error::UnsupportedOutputLength { .. })
//! ));
//! ```
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments with the `alloc` crate:
//!
//! ```toml
//! [dependencies]
//! zr5-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod cascade;
mod error;
mod params;
mod primitives;

pub use cascade::{
    Cascade, CascadeTrace, ORDERS, SEED_STAGE, hash, hash_batch, hash_full, select_order, trace,
    truncate, zr_cascade,
};
pub use error::{Error, Result};
pub use params::*;
pub use primitives::{Algorithm, Blake, Groestl, HashPrimitive, Jh, Keccak, Skein, blake};
