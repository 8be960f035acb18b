use aligned_vec::{avec, AVec};
use faer::{MatMut, MatRef};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// One unit vector per node, stored as a flat column-major `k * n` buffer.
///
/// Node `u`'s vector is the contiguous slice `[k * u..k * (u + 1)]`.
pub struct Embedding {
    nums: AVec<f64>,
    k: usize,
    n: usize,
}

impl Embedding {
    /// Places each node's vector uniformly at random on the `(k - 1)`-sphere.
    pub fn sample(n: usize, k: usize, rng: &mut impl Rng) -> Self {
        let mut nums = avec![0.0; k * n];
        if k > 0 {
            for vector in nums.chunks_exact_mut(k) {
                sample_unit(vector, rng);
            }
        }
        Self { nums, k, n }
    }

    pub fn dim(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn vector(&self, u: usize) -> &[f64] {
        &self.nums[self.k * u..self.k * (u + 1)]
    }

    pub fn values(&self) -> &[f64] {
        &self.nums
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.nums
    }

    pub fn as_ref(&self) -> MatRef<f64> {
        faer::mat::from_column_major_slice(self.nums.as_slice(), self.k, self.n)
    }

    pub fn as_mut(&mut self) -> MatMut<f64> {
        faer::mat::from_column_major_slice_mut(self.nums.as_mut_slice(), self.k, self.n)
    }
}

/// Overwrites `vector` with a fresh standard-normal draw scaled to unit norm.
///
/// An exactly-zero draw is redrawn rather than divided by zero. Empty vectors
/// (`k = 0`) are left as they are.
pub(crate) fn sample_unit(vector: &mut [f64], rng: &mut impl Rng) {
    if vector.is_empty() {
        return;
    }
    loop {
        let mut s = 0.0;
        for x in vector.iter_mut() {
            let g: f64 = StandardNormal.sample(rng);
            *x = g;
            s += g * g;
        }
        if s > 0.0 {
            let s = s.sqrt();
            for x in vector.iter_mut() {
                *x /= s;
            }
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn sampled_vectors_have_unit_norm() {
        let mut rng = StdRng::seed_from_u64(0);
        let embedding = Embedding::sample(32, 5, &mut rng);
        for u in 0..embedding.len() {
            let norm = embedding.as_ref().col(u).norm_l2();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn sampling_is_deterministic_given_a_seed() {
        let mut rng = StdRng::seed_from_u64(17);
        let a = Embedding::sample(20, 3, &mut rng);
        let mut rng = StdRng::seed_from_u64(17);
        let b = Embedding::sample(20, 3, &mut rng);
        assert!(a.values() == b.values());
    }

    #[test]
    fn zero_dimension_is_degenerate_but_sound() {
        let mut rng = StdRng::seed_from_u64(0);
        let embedding = Embedding::sample(4, 0, &mut rng);
        assert!(all(
            embedding.len() == 4,
            embedding.dim() == 0,
            embedding.vector(3).is_empty(),
        ));
    }
}
