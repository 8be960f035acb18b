use equator::assert;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::iter::zip;

use crate::{embedding::Embedding, graph::Graph};

/// Best labeling found by hyperplane rounding: how many nodes landed on each
/// side, and the number of edges the labeling cuts.
#[derive(Debug)]
pub struct HyperplaneCut {
    pub sides: (usize, usize),
    pub value: usize,
}

/// Owns the per-trial buffers for repeated hyperplane rounding.
pub struct CutHelper {
    direction: Vec<f64>,
    labels: Vec<i8>,
    best: Vec<i8>,
}

impl CutHelper {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            direction: vec![0.0; k],
            labels: vec![1; n],
            best: vec![1; n],
        }
    }

    /// Samples `trials` random hyperplanes through the origin, labels each
    /// node by the sign of its projection and keeps the labeling that cuts
    /// the most edges. Ties keep the earliest trial.
    pub fn cut(
        &mut self,
        graph: &Graph,
        embedding: &Embedding,
        trials: usize,
        rng: &mut impl Rng,
    ) -> HyperplaneCut {
        let Self {
            direction,
            labels,
            best,
        } = self;
        assert!(all(
            labels.len() == graph.n(),
            embedding.len() == graph.n(),
            embedding.dim() == direction.len(),
        ));
        let mut cut = HyperplaneCut {
            sides: (graph.n(), 0),
            value: 0,
        };
        for trial in 0..trials {
            for x in direction.iter_mut() {
                *x = StandardNormal.sample(rng);
            }
            let mut pos = 0;
            for (u, label) in labels.iter_mut().enumerate() {
                let s = dot(embedding.vector(u), direction);
                *label = if s < 0.0 {
                    -1
                } else {
                    pos += 1;
                    1
                };
            }
            let value = graph
                .edges()
                .iter()
                .filter(|edge| labels[edge.s] != labels[edge.t])
                .count();
            if trial == 0 || value > cut.value {
                cut = HyperplaneCut {
                    sides: (pos, graph.n() - pos),
                    value,
                };
                std::mem::swap(labels, best);
            }
        }
        cut
    }

    /// The winning ±1 labeling of the last `cut` call.
    pub fn labels(&self) -> &[i8] {
        &self.best
    }
}

/// The continuous objective of the relaxed program,
/// `(e - sum over edges of <v_a, v_b>) / 2`.
///
/// An upper bound on the true MaxCut value once the embedding has relaxed to
/// a local equilibrium.
pub fn sdp_objective(graph: &Graph, embedding: &Embedding) -> f64 {
    let mut total = 0.0;
    for edge in graph.edges() {
        total += dot(embedding.vector(edge.s), embedding.vector(edge.t));
    }
    (graph.e() as f64 - total) / 2.0
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    zip(a, b).map(|(a, b)| a * b).sum()
}
