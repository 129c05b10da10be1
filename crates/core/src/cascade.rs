//! ZR5 cascade orchestration
//!
//! One evaluation runs five stages, each consuming the full 64-byte output of
//! the previous one:
//!
//! ```text
//! input ─► Keccak-512 ─► S1 ─► S2 ─► S3 ─► S4 ─► low 256 bits
//!              │
//!              └─► order = LE32(keccak[0..4]) mod 24,  [S1..S4] = ORDERS[order]
//! ```
//!
//! The seed stage and the order table are network constants. [`Cascade`]
//! is the explicit ordered stage list the orchestrator runs; the ZR5 entry
//! points derive that list from the seed stage output.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::params::*;
use crate::primitives::Algorithm;
use crate::primitives::Algorithm::{Blake, Groestl, Jh, Skein};

/// Stage that always runs first, over the caller's input
pub const SEED_STAGE: Algorithm = Algorithm::Keccak;

/// Every ordering of the four permutable stages, sorted lexicographically by
/// algorithm code (BLAKE, GROESTL, JH, SKEIN)
pub const ORDERS: [[Algorithm; PERMUTED_STAGES]; ORDER_COUNT] = [
    [Blake, Groestl, Jh, Skein],
    [Blake, Groestl, Skein, Jh],
    [Blake, Jh, Groestl, Skein],
    [Blake, Jh, Skein, Groestl],
    [Blake, Skein, Groestl, Jh],
    [Blake, Skein, Jh, Groestl],
    [Groestl, Blake, Jh, Skein],
    [Groestl, Blake, Skein, Jh],
    [Groestl, Jh, Blake, Skein],
    [Groestl, Jh, Skein, Blake],
    [Groestl, Skein, Blake, Jh],
    [Groestl, Skein, Jh, Blake],
    [Jh, Blake, Groestl, Skein],
    [Jh, Blake, Skein, Groestl],
    [Jh, Groestl, Blake, Skein],
    [Jh, Groestl, Skein, Blake],
    [Jh, Skein, Blake, Groestl],
    [Jh, Skein, Groestl, Blake],
    [Skein, Blake, Groestl, Jh],
    [Skein, Blake, Jh, Groestl],
    [Skein, Groestl, Blake, Jh],
    [Skein, Groestl, Jh, Blake],
    [Skein, Jh, Blake, Groestl],
    [Skein, Jh, Groestl, Blake],
];

/// Order table index for a seed stage output.
///
/// The seed digest is read as a little-endian 512-bit integer; its lowest
/// 32-bit word selects the entry.
#[inline(always)]
pub fn select_order(seed: &[u8; INTERMEDIATE_SIZE]) -> usize {
    let word = u32::from_le_bytes([seed[0], seed[1], seed[2], seed[3]]);
    word as usize % ORDER_COUNT
}

/// Low-order 256 bits of a 512-bit stage output.
///
/// Stage outputs are little-endian integers, so these are the first 32 bytes.
#[inline(always)]
pub fn truncate(full: &[u8; INTERMEDIATE_SIZE]) -> [u8; DIGEST_SIZE] {
    let mut out = [0u8; DIGEST_SIZE];
    out.copy_from_slice(&full[..DIGEST_SIZE]);
    out
}

/// A fixed, ordered list of cascade stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cascade {
    stages: [Algorithm; STAGES],
}

impl Cascade {
    /// Cascade over an explicit stage list
    pub const fn new(stages: [Algorithm; STAGES]) -> Self {
        Self { stages }
    }

    /// The ZR5 cascade for an order table entry (`index` is taken mod 24)
    pub const fn for_order(index: usize) -> Self {
        let order = ORDERS[index % ORDER_COUNT];
        Self::new([SEED_STAGE, order[0], order[1], order[2], order[3]])
    }

    /// The stages in execution order
    pub fn stages(&self) -> &[Algorithm; STAGES] {
        &self.stages
    }

    /// Final 256-bit digest
    pub fn hash(&self, input: &[u8]) -> [u8; DIGEST_SIZE] {
        truncate(&self.hash_full(input))
    }

    /// Full 512-bit output of the last stage
    pub fn hash_full(&self, input: &[u8]) -> [u8; INTERMEDIATE_SIZE] {
        self.run(input)[STAGES - 1]
    }

    /// Run the stages and keep every intermediate.
    ///
    /// The stage list is fixed by the caller, so `order_index` is `None`.
    pub fn trace(&self, input: &[u8]) -> CascadeTrace {
        CascadeTrace {
            order_index: None,
            stages: self.stages,
            intermediates: self.run(input),
        }
    }

    /// Every intermediate of one evaluation
    pub fn run(&self, input: &[u8]) -> [[u8; INTERMEDIATE_SIZE]; STAGES] {
        self.resume(self.stages[0].hash512(input))
    }

    /// Continue from an already computed first-stage output
    fn resume(&self, first: [u8; INTERMEDIATE_SIZE]) -> [[u8; INTERMEDIATE_SIZE]; STAGES] {
        let mut buffers = [[0u8; INTERMEDIATE_SIZE]; STAGES];
        buffers[0] = first;
        for i in 1..STAGES {
            buffers[i] = self.stages[i].hash512(&buffers[i - 1]);
        }
        buffers
    }
}

/// Record of one ZR5 evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeTrace {
    /// Entry of [`ORDERS`] selected by the seed stage; `None` when the
    /// stages were fixed by the caller
    pub order_index: Option<usize>,
    /// Stages in execution order
    pub stages: [Algorithm; STAGES],
    /// Output of each stage
    pub intermediates: [[u8; INTERMEDIATE_SIZE]; STAGES],
}

impl CascadeTrace {
    /// Full 512-bit output
    pub fn full(&self) -> &[u8; INTERMEDIATE_SIZE] {
        &self.intermediates[STAGES - 1]
    }

    /// Final 256-bit digest
    pub fn digest(&self) -> [u8; DIGEST_SIZE] {
        truncate(self.full())
    }
}

/// Run ZR5 and keep every intermediate
pub fn trace(input: &[u8]) -> CascadeTrace {
    let seed = SEED_STAGE.hash512(input);
    let order_index = select_order(&seed);
    let cascade = Cascade::for_order(order_index);

    CascadeTrace {
        order_index: Some(order_index),
        stages: cascade.stages,
        intermediates: cascade.resume(seed),
    }
}

/// Full 512-bit ZR5 output (what the reference `getPoWHash` binding returns)
pub fn hash_full(input: &[u8]) -> [u8; INTERMEDIATE_SIZE] {
    let seed = SEED_STAGE.hash512(input);
    Cascade::for_order(select_order(&seed)).resume(seed)[STAGES - 1]
}

/// ZR5 digest: the low 256 bits of the cascade output
pub fn zr_cascade(input: &[u8]) -> [u8; DIGEST_SIZE] {
    truncate(&hash_full(input))
}

/// Convenience alias for [`zr_cascade`]
#[inline(always)]
pub fn hash(input: &[u8]) -> [u8; DIGEST_SIZE] {
    zr_cascade(input)
}

/// Hash independent inputs, results in input order
///
/// Evaluations share nothing, so with the `parallel` feature they are spread
/// over the rayon pool.
#[cfg(feature = "parallel")]
pub fn hash_batch<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<[u8; DIGEST_SIZE]> {
    inputs.par_iter().map(|input| zr_cascade(input.as_ref())).collect()
}

/// Hash independent inputs, results in input order (sequential fallback)
#[cfg(not(feature = "parallel"))]
pub fn hash_batch<T: AsRef<[u8]>>(inputs: &[T]) -> Vec<[u8; DIGEST_SIZE]> {
    inputs.iter().map(|input| zr_cascade(input.as_ref())).collect()
}
