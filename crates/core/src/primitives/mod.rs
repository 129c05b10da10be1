//! Hash primitives used as cascade stages
//!
//! Every stage satisfies the same [`HashPrimitive`] contract: any input
//! length, deterministic fixed-size output, padding handled internally and
//! bit-exact to the reference algorithm. Keccak, Grøstl, JH and Skein come
//! from the RustCrypto implementations; BLAKE is implemented in [`blake`].

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;
use core::str::FromStr;

use digest::Digest;
use digest::consts::{U28, U32, U48, U64};

use crate::error::{Error, Result};
use crate::params::INTERMEDIATE_SIZE;

pub mod blake;

/// Digest sizes (bytes) offered by the 224/256/384/512 families
const FULL_FAMILY: &[usize] = &[28, 32, 48, 64];

/// Digest sizes (bytes) offered by the in-tree 64-bit BLAKE
const BLAKE_FAMILY: &[usize] = &[48, 64];

/// Common contract of a cascade stage
pub trait HashPrimitive: Send + Sync {
    /// Which algorithm this primitive computes
    fn algorithm(&self) -> Algorithm;

    /// Supported digest sizes in bytes
    fn output_lengths(&self) -> &'static [usize];

    /// 512-bit digest, the width every cascade stage runs at
    fn hash512(&self, input: &[u8]) -> [u8; INTERMEDIATE_SIZE];

    /// Digest of `output_len` bytes.
    ///
    /// Fails with [`Error::UnsupportedOutputLength`] if `output_len` is not
    /// one of [`HashPrimitive::output_lengths`]; the width is never coerced.
    fn hash(&self, input: &[u8], output_len: usize) -> Result<Vec<u8>>;

    /// Check `output_len` against the supported sizes
    fn check_output_len(&self, output_len: usize) -> Result<()> {
        if self.output_lengths().contains(&output_len) {
            Ok(())
        } else {
            Err(Error::UnsupportedOutputLength {
                algorithm: self.algorithm(),
                requested: output_len,
            })
        }
    }
}

/// Algorithm tag for a cascade stage
///
/// Declaration order matches the network's numeric codes for the four
/// permutable stages (BLAKE = 0, GROESTL = 1, JH = 2, SKEIN = 3), so the
/// derived `Ord` is the order the permutation table is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Blake,
    Groestl,
    Jh,
    Skein,
    Keccak,
}

impl Algorithm {
    /// All five algorithms
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Blake,
        Algorithm::Groestl,
        Algorithm::Jh,
        Algorithm::Skein,
        Algorithm::Keccak,
    ];

    /// Primitive implementing this algorithm
    pub fn primitive(self) -> &'static dyn HashPrimitive {
        match self {
            Algorithm::Blake => &Blake,
            Algorithm::Groestl => &Groestl,
            Algorithm::Jh => &Jh,
            Algorithm::Skein => &Skein,
            Algorithm::Keccak => &Keccak,
        }
    }

    /// 512-bit digest with this algorithm
    #[inline(always)]
    pub fn hash512(self, input: &[u8]) -> [u8; INTERMEDIATE_SIZE] {
        self.primitive().hash512(input)
    }

    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Blake => "blake",
            Algorithm::Groestl => "groestl",
            Algorithm::Jh => "jh",
            Algorithm::Skein => "skein",
            Algorithm::Keccak => "keccak",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|algo| s.eq_ignore_ascii_case(algo.name()))
            .ok_or(Error::UnknownAlgorithm)
    }
}

/// BLAKE (SHA-3 round 3 submission)
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake;

/// Grøstl
#[derive(Debug, Clone, Copy, Default)]
pub struct Groestl;

/// JH
#[derive(Debug, Clone, Copy, Default)]
pub struct Jh;

/// Keccak with the original submission padding (not FIPS 202 SHA-3)
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak;

/// Skein-512 with output sizes 224..512
#[derive(Debug, Clone, Copy, Default)]
pub struct Skein;

impl HashPrimitive for Blake {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Blake
    }

    fn output_lengths(&self) -> &'static [usize] {
        BLAKE_FAMILY
    }

    fn hash512(&self, input: &[u8]) -> [u8; INTERMEDIATE_SIZE] {
        blake::blake512(input)
    }

    fn hash(&self, input: &[u8], output_len: usize) -> Result<Vec<u8>> {
        self.check_output_len(output_len)?;
        Ok(match output_len {
            48 => blake::blake384(input).to_vec(),
            _ => blake::blake512(input).to_vec(),
        })
    }
}

impl HashPrimitive for Groestl {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Groestl
    }

    fn output_lengths(&self) -> &'static [usize] {
        FULL_FAMILY
    }

    fn hash512(&self, input: &[u8]) -> [u8; INTERMEDIATE_SIZE] {
        digest512::<groestl::Groestl512>(input)
    }

    fn hash(&self, input: &[u8], output_len: usize) -> Result<Vec<u8>> {
        self.check_output_len(output_len)?;
        Ok(match output_len {
            28 => digest_vec::<groestl::Groestl224>(input),
            32 => digest_vec::<groestl::Groestl256>(input),
            48 => digest_vec::<groestl::Groestl384>(input),
            _ => digest_vec::<groestl::Groestl512>(input),
        })
    }
}

impl HashPrimitive for Jh {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Jh
    }

    fn output_lengths(&self) -> &'static [usize] {
        FULL_FAMILY
    }

    fn hash512(&self, input: &[u8]) -> [u8; INTERMEDIATE_SIZE] {
        digest512::<jh::Jh512>(input)
    }

    fn hash(&self, input: &[u8], output_len: usize) -> Result<Vec<u8>> {
        self.check_output_len(output_len)?;
        Ok(match output_len {
            28 => digest_vec::<jh::Jh224>(input),
            32 => digest_vec::<jh::Jh256>(input),
            48 => digest_vec::<jh::Jh384>(input),
            _ => digest_vec::<jh::Jh512>(input),
        })
    }
}

impl HashPrimitive for Keccak {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Keccak
    }

    fn output_lengths(&self) -> &'static [usize] {
        FULL_FAMILY
    }

    fn hash512(&self, input: &[u8]) -> [u8; INTERMEDIATE_SIZE] {
        digest512::<sha3::Keccak512>(input)
    }

    fn hash(&self, input: &[u8], output_len: usize) -> Result<Vec<u8>> {
        self.check_output_len(output_len)?;
        Ok(match output_len {
            28 => digest_vec::<sha3::Keccak224>(input),
            32 => digest_vec::<sha3::Keccak256>(input),
            48 => digest_vec::<sha3::Keccak384>(input),
            _ => digest_vec::<sha3::Keccak512>(input),
        })
    }
}

impl HashPrimitive for Skein {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Skein
    }

    fn output_lengths(&self) -> &'static [usize] {
        FULL_FAMILY
    }

    fn hash512(&self, input: &[u8]) -> [u8; INTERMEDIATE_SIZE] {
        digest512::<skein::Skein512<U64>>(input)
    }

    fn hash(&self, input: &[u8], output_len: usize) -> Result<Vec<u8>> {
        self.check_output_len(output_len)?;
        Ok(match output_len {
            28 => digest_vec::<skein::Skein512<U28>>(input),
            32 => digest_vec::<skein::Skein512<U32>>(input),
            48 => digest_vec::<skein::Skein512<U48>>(input),
            _ => digest_vec::<skein::Skein512<U64>>(input),
        })
    }
}

/// One-shot 512-bit digest through the RustCrypto `Digest` interface
#[inline(always)]
fn digest512<D: Digest>(input: &[u8]) -> [u8; INTERMEDIATE_SIZE] {
    let mut out = [0u8; INTERMEDIATE_SIZE];
    out.copy_from_slice(&D::digest(input));
    out
}

/// One-shot digest of any size through the RustCrypto `Digest` interface
fn digest_vec<D: Digest>(input: &[u8]) -> Vec<u8> {
    D::digest(input).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_width_has_declared_length() {
        for algo in Algorithm::ALL {
            let primitive = algo.primitive();
            for &len in primitive.output_lengths() {
                let out = primitive.hash(b"width", len).unwrap();
                assert_eq!(out.len(), len, "{} at {} bytes", algo, len);
            }
        }
    }

    #[test]
    fn test_hash_512_matches_hash512() {
        for algo in Algorithm::ALL {
            let primitive = algo.primitive();
            let generic = primitive.hash(b"contract", 64).unwrap();
            assert_eq!(generic, primitive.hash512(b"contract").to_vec(), "{}", algo);
        }
    }

    #[test]
    fn test_unsupported_width_is_rejected() {
        assert_eq!(
            Blake.hash(b"x", 32),
            Err(Error::UnsupportedOutputLength {
                algorithm: Algorithm::Blake,
                requested: 32,
            })
        );
        for algo in Algorithm::ALL {
            assert!(algo.primitive().hash(b"x", 20).is_err(), "{}", algo);
            assert!(algo.primitive().hash(b"x", 0).is_err(), "{}", algo);
            assert!(algo.primitive().hash(b"x", 128).is_err(), "{}", algo);
        }
    }

    #[test]
    fn test_algorithm_round_trips_through_name() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>(), Ok(algo));
            assert_eq!(algo.primitive().algorithm(), algo);
        }
        assert_eq!("SKEIN".parse::<Algorithm>(), Ok(Algorithm::Skein));
        assert_eq!("sha256".parse::<Algorithm>(), Err(Error::UnknownAlgorithm));
    }

    #[test]
    fn test_primitives_disagree() {
        let outputs: Vec<[u8; 64]> = Algorithm::ALL.iter().map(|a| a.hash512(b"abc")).collect();
        for i in 0..outputs.len() {
            for j in (i + 1)..outputs.len() {
                assert_ne!(outputs[i], outputs[j]);
            }
        }
    }
}
