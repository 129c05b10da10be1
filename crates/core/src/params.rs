//! ZR5 Algorithm Parameters
//!
//! Sizes and counts fixed by the network. Changing any of them produces a
//! different, incompatible hash function.

/// Final digest size in bytes (256 bits)
pub const DIGEST_SIZE: usize = 32;

/// Size of every buffer passed between stages (512 bits)
pub const INTERMEDIATE_SIZE: usize = 64;

/// Total number of stages in one evaluation
pub const STAGES: usize = 5;

/// Stages whose order is selected per input (all but the Keccak seed stage)
pub const PERMUTED_STAGES: usize = STAGES - 1;

/// Number of entries in the order table (4!)
pub const ORDER_COUNT: usize = 24;

/// Algorithm version
pub const VERSION: u8 = 5;
