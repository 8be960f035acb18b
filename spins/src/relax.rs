use equator::assert;
use rand::Rng;

use crate::{
    embedding::{sample_unit, Embedding},
    graph::Graph,
};

/// Runs `iterations` full sweeps unconditionally; there is no convergence
/// check.
pub fn relax(graph: &Graph, embedding: &mut Embedding, iterations: usize, rng: &mut impl Rng) {
    for _iter in 0..iterations {
        sweep(graph, embedding, rng);
    }
}

/// One in-place relaxation pass over the nodes in ascending id order.
///
/// Each node's vector is replaced by the negated, renormalized sum of its
/// neighbors' vectors. Updates are not synchronized: a neighbor with a
/// smaller id already carries this sweep's value when it is read
/// (Gauss-Seidel). A node whose accumulator is exactly zero (isolated, or
/// perfectly cancelling neighbors) is re-randomized on the unit sphere.
pub fn sweep(graph: &Graph, embedding: &mut Embedding, rng: &mut impl Rng) {
    assert!(embedding.len() == graph.n());
    let k = embedding.dim();
    let nums = embedding.values_mut();
    for u in 0..graph.n() {
        let base = k * u;
        nums[base..base + k].fill(0.0);
        for &v in graph.neighbors(u) {
            // for a self-loop this reads the partial accumulator itself,
            // zeroing the components one at a time
            let other = k * v;
            for j in 0..k {
                nums[base + j] -= nums[other + j];
            }
        }
        let mut s = 0.0;
        for j in 0..k {
            s += nums[base + j] * nums[base + j];
        }
        if s > 0.0 {
            let s = s.sqrt();
            for j in 0..k {
                nums[base + j] /= s;
            }
        } else {
            sample_unit(&mut nums[base..base + k], rng);
        }
    }
}
