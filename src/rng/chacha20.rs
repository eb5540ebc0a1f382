//! ChaCha20 block function (RFC 8439)
//!
//! Only the keystream block is provided. It is the expansion step of the
//! [`Csprng`](super::Csprng) and is not meant to be used as a cipher on its
//! own: there is no authentication and no nonce management here.

/// `"expand 32-byte k"` as little-endian words.
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Quarter-round lanes for one double round: four columns, then four
/// diagonals.
const DOUBLE_ROUND: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

/// Size of one keystream block in bytes.
pub(crate) const BLOCK_LEN: usize = 64;

#[inline(always)]
fn quarter_round(x: &mut [u32; 16], [a, b, c, d]: [usize; 4]) {
    for (dst, src, xor, rot) in [(a, b, d, 16), (c, d, b, 12), (a, b, d, 8), (c, d, b, 7)] {
        x[dst] = x[dst].wrapping_add(x[src]);
        x[xor] = (x[xor] ^ x[dst]).rotate_left(rot);
    }
}

#[inline(always)]
fn load_le(words: &mut [u32], bytes: &[u8]) {
    for (w, b) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *w = u32::from_le_bytes([b[0], b[1], b[2], b[3]]);
    }
}

/// Computes one 64-byte keystream block for `(key, counter, nonce)`.
///
/// Reusing a `(key, counter, nonce)` triple repeats the keystream; callers
/// must advance the counter or change the key between blocks.
pub(crate) fn block(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> [u8; BLOCK_LEN] {
    let mut input = [0u32; 16];
    input[..4].copy_from_slice(&SIGMA);
    load_le(&mut input[4..12], key);
    input[12] = counter;
    load_le(&mut input[13..], nonce);

    let mut x = input;
    for _ in 0..10 {
        for lanes in DOUBLE_ROUND {
            quarter_round(&mut x, lanes);
        }
    }

    let mut out = [0u8; BLOCK_LEN];
    for ((chunk, mixed), original) in out.chunks_exact_mut(4).zip(x).zip(input) {
        chunk.copy_from_slice(&mixed.wrapping_add(original).to_le_bytes());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::block;

    #[test]
    fn test_chacha20_block_rfc8439_vector() {
        let mut key = [0u8; 32];
        key.iter_mut().enumerate().for_each(|(i, k)| *k = i as u8);
        let nonce = [0, 0, 0, 0x09, 0, 0, 0, 0x4a, 0, 0, 0, 0];

        let expected: [u8; 64] = [
            0x10, 0xf1, 0xe7, 0xe4, 0xd1, 0x3b, 0x59, 0x15, 0x50, 0x0f, 0xdd, 0x1f, 0xa3, 0x20,
            0x71, 0xc4, 0xc7, 0xd1, 0xf4, 0xc7, 0x33, 0xc0, 0x68, 0x03, 0x04, 0x22, 0xaa, 0x9a,
            0xc3, 0xd4, 0x6c, 0x4e, 0xd2, 0x82, 0x64, 0x46, 0x07, 0x9f, 0xaa, 0x09, 0x14, 0xc2,
            0xd7, 0x05, 0xd9, 0x8b, 0x02, 0xa2, 0xb5, 0x12, 0x9c, 0xd1, 0xde, 0x16, 0x4e, 0xb9,
            0xcb, 0xd0, 0x83, 0xe8, 0xa2, 0x50, 0x3c, 0x4e,
        ];

        assert_eq!(block(&key, 1, &nonce), expected);
    }
}
