use clap::Parser;
use linya::{Bar, Progress};
use rand::{rngs::StdRng, SeedableRng};
use spins::{embedding::Embedding, relax, rounding};
use std::time::{Instant, SystemTime};
use tensorboard_writer::TensorboardWriter;

use spin_cut::{
    edgelist::{read_edgelist, write_embedding, write_labels},
    maxcut_helpers::{MaxcutParameters, RelaxLogger},
};

#[derive(Debug, Parser)]
#[command(name = "maxcut")]
#[command(about = "Approximates MaxCut with relaxed spin embeddings and hyperplane rounding", long_about = None)]
struct Args {
    /// Input edgelist: one edge per line, two node ids separated by whitespace
    #[arg(short = 'g')]
    edgelist: std::path::PathBuf,
    /// The dimension of the spin embedding
    #[arg(short = 'k')]
    dim: usize,
    /// The number of relaxation sweeps
    #[arg(short = 'i')]
    iters: usize,
    /// Output file for the embedding table
    #[arg(short = 'e')]
    embedding: std::path::PathBuf,
    /// Output file for the node labels
    #[arg(short = 'l')]
    labels: std::path::PathBuf,
    /// The number of hyperplane rounding trials (default: 10)
    #[arg(short = 't')]
    trials: Option<usize>,
    /// Seeds the random generator (default: from entropy)
    #[arg(short = 's')]
    seed: Option<u64>,
    /// Output directory for tensorboard event logs
    #[arg(short = 'L')]
    log_dir: Option<std::path::PathBuf>,
}

fn main() -> eyre::Result<()> {
    let args = Args::try_parse()?;
    let Args {
        edgelist,
        dim,
        iters,
        embedding,
        labels,
        trials,
        seed,
        log_dir,
    } = args;
    let start = Instant::now();
    let parameters = MaxcutParameters {
        dim,
        sweeps: iters,
        trials: trials.unwrap_or(10),
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Reading edgelist from {edgelist:?}");
    let graph = read_edgelist(&edgelist)?;
    println!("Number of nodes: {}", graph.n());
    println!("Number of edges: {}", graph.e());

    println!("Computing the Goemans-Williamson embedding using {dim}-dimensional spins");
    let mut emb = Embedding::sample(graph.n(), dim, &mut rng);

    let mut writer = match log_dir {
        Some(dir) => {
            let run = dir.join(format!("{parameters}.{}", chrono::Utc::now().to_rfc3339()));
            std::fs::create_dir_all(&run)?;
            Some(TensorboardWriter::new(&run)?)
        }
        None => None,
    };
    let (mut logger, init_summary) = RelaxLogger::new(&graph, rounding::sdp_objective(&graph, &emb));
    if let Some(writer) = writer.as_mut() {
        writer.write_file_version()?;
        writer.write_summary(SystemTime::now(), 0, init_summary)?;
        writer.flush()?;
    }

    let mut progress = Progress::new();
    let bar: Bar = progress.bar(iters, "relaxing");
    for i in 1..=iters {
        relax::sweep(&graph, &mut emb, &mut rng);
        if let Some(writer) = writer.as_mut() {
            let summary = logger.log_sweep(rounding::sdp_objective(&graph, &emb));
            writer.write_summary(SystemTime::now(), i as _, summary)?;
            writer.flush()?;
        }
        progress.set_and_draw(&bar, i);
    }

    println!("Printing resulting embedding in file {embedding:?}");
    write_embedding(&embedding, &emb)?;

    println!("Random cut of the hypersphere");
    let mut helper = rounding::CutHelper::new(graph.n(), dim);
    let cut = helper.cut(&graph, &emb, parameters.trials, &mut rng);

    println!("Printing labels in file {labels:?}");
    write_labels(&labels, helper.labels())?;

    println!(
        "Objective of the sdp relaxation = {:e}",
        rounding::sdp_objective(&graph, &emb)
    );
    println!("Size of the cut = {}", cut.value);
    println!("- Overall time = {:.2?}", start.elapsed());

    Ok(())
}
