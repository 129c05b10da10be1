//! BLAKE-512 and BLAKE-384 (SHA-3 round 3 BLAKE, not BLAKE2/BLAKE3)
//!
//! RustCrypto only ships BLAKE2/BLAKE3, and the standalone `blake-hash` crate
//! is still on digest 0.9, so the 64-bit variant is implemented here from the
//! submission document and cross-checked against `blake-hash` in tests:
//! 16 rounds, zero salt, big-endian message words and a 128-bit bit counter.

/// Block size in bytes
const BLOCK_SIZE: usize = 128;

/// Offset of the 128-bit length field inside the final block
const LENGTH_OFFSET: usize = BLOCK_SIZE - 16;

/// Number of rounds for the 64-bit variants
const ROUNDS: usize = 16;

/// BLAKE-512 initial value (same as SHA-512)
const IV512: [u64; 8] = [
    0x6A09E667F3BCC908,
    0xBB67AE8584CAA73B,
    0x3C6EF372FE94F82B,
    0xA54FF53A5F1D36F1,
    0x510E527FADE682D1,
    0x9B05688C2B3E6C1F,
    0x1F83D9ABFB41BD6B,
    0x5BE0CD19137E2179,
];

/// BLAKE-384 initial value (same as SHA-384)
const IV384: [u64; 8] = [
    0xCBBB9D5DC1059ED8,
    0x629A292A367CD507,
    0x9159015A3070DD17,
    0x152FECD8F70E5939,
    0x67332667FFC00B31,
    0x8EB44A8768581511,
    0xDB0C2E0D64F98FA7,
    0x47B5481DBEFA4FA4,
];

/// First 1024 bits of the fractional part of pi
const C: [u64; 16] = [
    0x243F6A8885A308D3,
    0x13198A2E03707344,
    0xA4093822299F31D0,
    0x082EFA98EC4E6C89,
    0x452821E638D01377,
    0xBE5466CF34E90C6C,
    0xC0AC29B7C97C50DD,
    0x3F84D5B5B5470917,
    0x9216D5D98979FB1B,
    0xD1310BA698DFB5AC,
    0x2FFD72DBD01ADFB7,
    0xB8E1AFED6A267E96,
    0xBA7C9045F12C7F99,
    0x24A19947B3916CF7,
    0x0801F2E2858EFC16,
    0x636920D871574E69,
];

/// Message permutations; round r uses SIGMA[r % 10]
const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// BLAKE-512 digest
pub fn blake512(input: &[u8]) -> [u8; 64] {
    let h = hash_words(&IV512, 0x01, input);
    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(h.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// BLAKE-384 digest (truncated state, different IV and padding bit)
pub fn blake384(input: &[u8]) -> [u8; 48] {
    let h = hash_words(&IV384, 0x00, input);
    let mut out = [0u8; 48];
    for (chunk, word) in out.chunks_exact_mut(8).zip(h.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// Full message pass: every complete block, then one or two padding blocks.
///
/// `final_bit` is OR-ed into the byte preceding the length field
/// (1 for BLAKE-512, 0 for BLAKE-384).
fn hash_words(iv: &[u64; 8], final_bit: u8, input: &[u8]) -> [u64; 8] {
    let mut h = *iv;
    let total_bits = (input.len() as u128) * 8;

    // A block that ends the message is handled with the padding below,
    // so a message of exactly k blocks gets a padding-only block.
    let mut blocks = input.chunks_exact(BLOCK_SIZE);
    let mut counter: u128 = 0;
    for block in &mut blocks {
        counter += (BLOCK_SIZE as u128) * 8;
        compress(&mut h, block, counter);
    }

    let tail = blocks.remainder();
    let mut buf = [0u8; 2 * BLOCK_SIZE];
    buf[..tail.len()].copy_from_slice(tail);
    buf[tail.len()] = 0x80;

    if tail.len() < LENGTH_OFFSET {
        buf[LENGTH_OFFSET - 1] |= final_bit;
        buf[LENGTH_OFFSET..BLOCK_SIZE].copy_from_slice(&total_bits.to_be_bytes());
        // Counter is zero when the final block carries no message bits
        let t = if tail.is_empty() { 0 } else { total_bits };
        compress(&mut h, &buf[..BLOCK_SIZE], t);
    } else {
        compress(&mut h, &buf[..BLOCK_SIZE], total_bits);
        buf[BLOCK_SIZE + LENGTH_OFFSET - 1] |= final_bit;
        buf[BLOCK_SIZE + LENGTH_OFFSET..].copy_from_slice(&total_bits.to_be_bytes());
        compress(&mut h, &buf[BLOCK_SIZE..], 0);
    }

    h
}

/// BLAKE-512 compression function over one 128-byte block
#[inline(always)]
fn compress(h: &mut [u64; 8], block: &[u8], counter: u128) {
    debug_assert_eq!(block.len(), BLOCK_SIZE);

    let mut m = [0u64; 16];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *word = u64::from_be_bytes(bytes);
    }

    let t0 = counter as u64;
    let t1 = (counter >> 64) as u64;

    // Salt is always zero, so v[8..12] are the bare constants
    let mut v = [0u64; 16];
    v[0..8].copy_from_slice(h);
    v[8] = C[0];
    v[9] = C[1];
    v[10] = C[2];
    v[11] = C[3];
    v[12] = t0 ^ C[4];
    v[13] = t0 ^ C[5];
    v[14] = t1 ^ C[6];
    v[15] = t1 ^ C[7];

    for round in 0..ROUNDS {
        let s = &SIGMA[round % 10];

        // Column step
        g(&mut v, &m, s, 0, 4, 8, 12, 0);
        g(&mut v, &m, s, 1, 5, 9, 13, 2);
        g(&mut v, &m, s, 2, 6, 10, 14, 4);
        g(&mut v, &m, s, 3, 7, 11, 15, 6);

        // Diagonal step
        g(&mut v, &m, s, 0, 5, 10, 15, 8);
        g(&mut v, &m, s, 1, 6, 11, 12, 10);
        g(&mut v, &m, s, 2, 7, 8, 13, 12);
        g(&mut v, &m, s, 3, 4, 9, 14, 14);
    }

    for i in 0..8 {
        h[i] ^= v[i] ^ v[i + 8];
    }
}

/// BLAKE-512 G function; `i` is the even index into the round permutation
#[allow(clippy::too_many_arguments)]
#[inline(always)]
fn g(
    v: &mut [u64; 16],
    m: &[u64; 16],
    s: &[usize; 16],
    a: usize,
    b: usize,
    c: usize,
    d: usize,
    i: usize,
) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[s[i]] ^ C[s[i + 1]]);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(25);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[s[i + 1]] ^ C[s[i]]);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(11);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blake512_one_zero_byte_vector() {
        // Test vector from the BLAKE submission document (one-byte message 0x00)
        assert_eq!(
            hex::encode(blake512(&[0u8])),
            "97961587f6d970faba6d2478045de6d1fabd09b61ae50932054d52bc29d31be4\
             ff9102b9f69e2bbdb83be13d4b9c06091e5fa0b48bd081b634058be0ec49beb3"
        );
    }

    #[test]
    fn test_blake512_two_block_vector() {
        // Test vector from the BLAKE submission document (144 zero bytes)
        assert_eq!(
            hex::encode(blake512(&[0u8; 144])),
            "313717d608e9cf758dcb1eb0f0c3cf9fc150b2d500fb33f51c52afc99d358a2f\
             1374b8a38bba7974e7f6ef79cab16f22ce1e649d6e01ad9589c213045d545dde"
        );
    }

    #[test]
    fn test_padding_boundaries_are_distinct() {
        // Tails of 111 (single padding byte 0x81), 112 (padding spills into a
        // second block), 127 and 128 (padding-only block) bytes
        let lengths = [0usize, 1, 111, 112, 127, 128, 129, 239, 240, 256];
        let digests: Vec<[u8; 64]> = lengths.iter().map(|&n| blake512(&vec![0u8; n])).collect();

        for i in 0..digests.len() {
            for j in (i + 1)..digests.len() {
                assert_ne!(
                    digests[i], digests[j],
                    "lengths {} and {} collide",
                    lengths[i], lengths[j]
                );
            }
        }
    }

    #[test]
    fn test_blake384_differs_from_truncated_blake512() {
        let input = b"blake384";
        let long = blake512(input);
        let short = blake384(input);
        assert_ne!(&long[..48], &short[..]);
    }

    #[test]
    fn test_matches_blake_hash_crate() {
        use blake_hash::Digest;

        let input: Vec<u8> = (0..600u32).map(|i| (i * 7 + 3) as u8).collect();
        for len in 0..input.len() {
            let msg = &input[..len];
            assert_eq!(
                &blake512(msg)[..],
                &blake_hash::Blake512::digest(msg)[..],
                "BLAKE-512 length {}",
                len
            );
            assert_eq!(
                &blake384(msg)[..],
                &blake_hash::Blake384::digest(msg)[..],
                "BLAKE-384 length {}",
                len
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let input = [0x5Au8; 300];
        assert_eq!(blake512(&input), blake512(&input));
        assert_eq!(blake384(&input), blake384(&input));
    }
}
