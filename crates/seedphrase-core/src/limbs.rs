//! Fixed-width big integer as an array of 64-bit limbs
//!
//! Limb 0 is the most significant. The only arithmetic needed by the encoder
//! is a logical right shift that carries bits from each limb into its less
//! significant neighbour, plus reading the low bits of the last limb.

use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Limbs<const N: usize>([u64; N]);

impl<const N: usize> Limbs<N> {
    pub fn new(limbs: [u64; N]) -> Self {
        Limbs(limbs)
    }

    /// Load `8 * N` big-endian bytes.
    ///
    /// # Panics
    ///
    /// If `bytes.len() != 8 * N`.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), 8 * N, "limb buffer length mismatch");

        let mut limbs = [0u64; N];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
            word.zeroize();
        }
        Limbs(limbs)
    }

    /// Logical right shift of the whole integer by `k` bits, `0 < k < 64`.
    pub fn shr(&mut self, k: u32) {
        debug_assert!(k > 0 && k < 64);

        for i in (1..N).rev() {
            self.0[i] = self.0[i] >> k | self.0[i - 1] << (64 - k);
        }
        if let Some(first) = self.0.first_mut() {
            *first >>= k;
        }
    }

    /// Low `n` bits of the integer, `n < 64`.
    pub fn low_bits(&self, n: u32) -> u64 {
        debug_assert!(n < 64);
        match self.0.last() {
            Some(last) => last & ((1u64 << n) - 1),
            None => 0,
        }
    }

    pub fn as_array(&self) -> &[u64; N] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&l| l == 0)
    }
}
