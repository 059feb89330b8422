//! # Permutation Table
//!
//! Seeded lattice hashing. Integer lattice coordinates are folded through
//! a table of pseudo-random integers, masking each intermediate index with
//! `size - 1`, so any `i32` input yields a valid index.
//!
//! ## Determinism Guarantee
//!
//! The table is filled from a ChaCha8 stream seeded with the 32-bit seed,
//! so the same seed produces the same table on every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{NoiseError, NoiseResult};

/// Pre-computed permutation table for lattice hashing.
#[derive(Clone, Debug)]
pub struct PermutationTable {
    /// Table entries, each in `[0, i32::MAX)`.
    table: Vec<i32>,
    /// `size - 1`.
    wrap: i32,
    /// Output mask; lookups return values in `[0, max]`.
    max: i32,
    /// Seed the table was last built with.
    seed: i32,
}

impl PermutationTable {
    /// Default number of entries.
    pub const DEFAULT_SIZE: usize = 1024;

    /// Default output mask.
    pub const DEFAULT_MAX: i32 = 255;

    /// Largest accepted size. Keeps `size - 1` representable as a mask
    /// over `i32` lattice coordinates.
    pub const MAX_SIZE: usize = 1 << 30;

    /// Returns true for a non-zero power of two up to [`Self::MAX_SIZE`].
    #[must_use]
    pub const fn is_valid_size(size: usize) -> bool {
        size.is_power_of_two() && size <= Self::MAX_SIZE
    }

    /// Builds a table of `size` entries whose lookups fall in `[0, max]`.
    ///
    /// `max` is clamped to at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::TableSizeNotPowerOfTwo`] if `size` is zero,
    /// not a power of two, or larger than 2^30.
    pub fn new(size: usize, max: i32, seed: i32) -> NoiseResult<Self> {
        if !Self::is_valid_size(size) {
            return Err(NoiseError::TableSizeNotPowerOfTwo(size));
        }

        let mut perm = Self {
            table: vec![0; size],
            wrap: (size - 1) as i32,
            max: max.max(1),
            seed,
        };
        perm.fill();
        Ok(perm)
    }

    /// Builds a table with the default size and max.
    #[must_use]
    pub fn with_seed(seed: i32) -> Self {
        let mut perm = Self {
            table: vec![0; Self::DEFAULT_SIZE],
            wrap: (Self::DEFAULT_SIZE - 1) as i32,
            max: Self::DEFAULT_MAX,
            seed,
        };
        perm.fill();
        perm
    }

    /// Rebuilds the table for `seed`.
    ///
    /// Returns `false` without touching the table if it was already built
    /// with this seed.
    pub fn build(&mut self, seed: i32) -> bool {
        if self.seed == seed {
            return false;
        }
        self.seed = seed;
        self.fill();
        true
    }

    fn fill(&mut self) {
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(self.seed as u32));
        for entry in &mut self.table {
            *entry = rng.gen_range(0..i32::MAX);
        }
        tracing::debug!(seed = self.seed, size = self.table.len(), "permutation table built");
    }

    /// Raw entry at a masked index.
    #[inline]
    fn at(&self, index: i32) -> i32 {
        self.table[(index & self.wrap) as usize]
    }

    /// Hash of a 1D lattice point, in `[0, max]`.
    #[inline]
    #[must_use]
    pub fn hash1(&self, i: i32) -> i32 {
        self.at(i) & self.max
    }

    /// Hash of a 2D lattice point, in `[0, max]`.
    #[inline]
    #[must_use]
    pub fn hash2(&self, i: i32, j: i32) -> i32 {
        self.at(j.wrapping_add(self.at(i))) & self.max
    }

    /// Hash of a 3D lattice point, in `[0, max]`.
    #[inline]
    #[must_use]
    pub fn hash3(&self, i: i32, j: i32, k: i32) -> i32 {
        self.at(k.wrapping_add(self.at(j.wrapping_add(self.at(i))))) & self.max
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Upper bound of lookups.
    #[inline]
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Seed the table was last built with.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> i32 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let a = PermutationTable::with_seed(12345);
        let b = PermutationTable::with_seed(12345);

        for i in -500..500 {
            assert_eq!(a.hash1(i), b.hash1(i));
            assert_eq!(a.hash2(i, i * 3), b.hash2(i, i * 3));
            assert_eq!(a.hash3(i, -i, i * 7), b.hash3(i, -i, i * 7));
        }
    }

    #[test]
    fn test_rebuild_same_seed_is_noop() {
        let mut perm = PermutationTable::with_seed(7);
        let before: Vec<i32> = (0..64).map(|i| perm.hash2(i, i + 1)).collect();

        assert!(!perm.build(7));
        assert!(!perm.build(7));

        let after: Vec<i32> = (0..64).map(|i| perm.hash2(i, i + 1)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_rebuild_new_seed_changes_table() {
        let mut perm = PermutationTable::with_seed(1);
        let before: Vec<i32> = (0..64).map(|i| perm.hash1(i)).collect();

        assert!(perm.build(2));
        assert_eq!(perm.seed(), 2);

        let after: Vec<i32> = (0..64).map(|i| perm.hash1(i)).collect();
        assert_ne!(before, after);

        // Building back yields the original table.
        assert!(perm.build(1));
        let restored: Vec<i32> = (0..64).map(|i| perm.hash1(i)).collect();
        assert_eq!(before, restored);
    }

    #[test]
    fn test_lookups_within_max() {
        let perm = PermutationTable::new(256, 63, 99).expect("valid size");
        for i in -1000..1000 {
            let h = perm.hash3(i, i.wrapping_mul(31), i ^ 0x55);
            assert!((0..=63).contains(&h), "hash {h} out of range");
        }
    }

    #[test]
    fn test_extreme_indices_do_not_panic() {
        let perm = PermutationTable::with_seed(3);
        let _ = perm.hash3(i32::MIN, i32::MAX, i32::MIN);
        let _ = perm.hash2(i32::MAX, i32::MAX);
        let _ = perm.hash1(i32::MIN);
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        assert_eq!(
            PermutationTable::new(1000, 255, 0).unwrap_err(),
            NoiseError::TableSizeNotPowerOfTwo(1000)
        );
        assert_eq!(
            PermutationTable::new(0, 255, 0).unwrap_err(),
            NoiseError::TableSizeNotPowerOfTwo(0)
        );
        assert!(PermutationTable::new(1, 255, 0).is_ok());
    }

    #[test]
    fn test_rejects_oversized_table() {
        // Rejected before anything is allocated.
        let size = PermutationTable::MAX_SIZE * 2;
        assert_eq!(
            PermutationTable::new(size, 255, 0).unwrap_err(),
            NoiseError::TableSizeNotPowerOfTwo(size)
        );
        assert!(PermutationTable::is_valid_size(PermutationTable::MAX_SIZE));
        assert!(!PermutationTable::is_valid_size(size));
    }

    #[test]
    fn test_max_clamped_to_one() {
        let perm = PermutationTable::new(16, 0, 5).expect("valid size");
        assert_eq!(perm.max(), 1);
    }
}
