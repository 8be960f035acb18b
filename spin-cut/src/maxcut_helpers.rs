use spins::graph::Graph;
use tensorboard_writer::{proto::tensorboard::Summary, SummaryBuilder};

#[derive(Debug)]
pub struct MaxcutParameters {
    pub dim: usize,
    pub sweeps: usize,
    pub trials: usize,
}

impl std::fmt::Display for MaxcutParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "dim.{}.sweeps.{}.trials.{}",
            self.dim, self.sweeps, self.trials
        )
    }
}

/// Tracks the SDP objective across relaxation sweeps and summarizes it for
/// tensorboard.
#[derive(Debug)]
pub struct RelaxLogger {
    num_edges: usize,
    max_sdp: f64,
    sweep: usize,
}

impl RelaxLogger {
    pub fn new(graph: &Graph, init_sdp: f64) -> (Self, Summary) {
        let logger = Self {
            num_edges: graph.e(),
            max_sdp: init_sdp,
            sweep: 0,
        };
        let summary = SummaryBuilder::new()
            .scalar("sdp/value", init_sdp as _)
            .scalar(
                "sdp/value_over_edges",
                (init_sdp / graph.e() as f64) as f32,
            )
            .build();
        (logger, summary)
    }

    pub fn log_sweep(&mut self, sdp: f64) -> Summary {
        let Self {
            num_edges,
            max_sdp,
            sweep,
        } = self;
        *sweep += 1;
        *max_sdp = max_sdp.max(sdp);
        let sdp_over_edges = sdp / *num_edges as f64;
        let sdp_over_max = sdp / *max_sdp;
        SummaryBuilder::new()
            .scalar("sdp/value", sdp as _)
            .scalar("sdp/value_over_edges", sdp_over_edges as _)
            .scalar("sdp/value_over_max", sdp_over_max as _)
            .build()
    }

    pub fn max_sdp(&self) -> f64 {
        self.max_sdp
    }
}
