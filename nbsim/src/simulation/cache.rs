//! Pairwise force cache for the symmetric loop
//!
//! Holds the force exerted by body `j` on body `i` for every unordered pair
//! `i < j`, stored as a strict upper triangle in one contiguous heap buffer.
//! Memory is `N * (N - 1) / 2` vectors, sized to the actual population.
//! Entries are overwritten every step; nothing carries over between steps.

use crate::simulation::states::NVec2;

#[derive(Debug, Clone)]
pub struct PairwiseForceCache {
    n: usize,
    pairs: Vec<NVec2>,
}

impl PairwiseForceCache {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            pairs: vec![NVec2::zeros(); pair_count(n)],
        }
    }

    /// Number of bodies this cache was sized for
    pub fn population(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Row-major offset of `(i, j)` inside the upper triangle
    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < j && j < self.n, "pair ({i}, {j}) outside triangle");
        i * (2 * self.n - i - 1) / 2 + (j - i - 1)
    }

    pub fn store(&mut self, i: usize, j: usize, f: NVec2) {
        let k = self.offset(i, j);
        self.pairs[k] = f;
    }

    /// Force of `j` on `i` (`i < j`), as applied to `i`
    pub fn action(&self, i: usize, j: usize) -> NVec2 {
        self.pairs[self.offset(i, j)]
    }

    /// The mirrored contribution applied to `j`
    pub fn reaction(&self, i: usize, j: usize) -> NVec2 {
        -self.action(i, j)
    }

    /// Iterate `(i, j, action)` in storage order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, NVec2)> + '_ {
        let n = self.n;
        (0..n)
            .flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
            .zip(self.pairs.iter())
            .map(|((i, j), f)| (i, j, *f))
    }
}

/// Unordered pairs in a population of `n`
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
