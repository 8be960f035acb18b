use spins::{embedding::Embedding, graph::Graph};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Parses whitespace-separated unsigned integer pairs into a graph.
///
/// Ingestion stops at the first token that fails to parse, or at a trailing
/// unpaired token. Whatever was read up to that point is kept.
pub fn parse_edgelist(text: &str) -> Graph {
    let mut tokens = text.split_ascii_whitespace();
    Graph::from_edges(std::iter::from_fn(|| {
        let s = tokens.next()?.parse().ok()?;
        let t = tokens.next()?.parse().ok()?;
        Some((s, t))
    }))
}

pub fn read_edgelist(path: &Path) -> eyre::Result<Graph> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_edgelist(&text))
}

/// Writes one line per node in id order: the k components of its vector,
/// space-separated, six decimal digits.
pub fn write_embedding(path: &Path, embedding: &Embedding) -> eyre::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for u in 0..embedding.len() {
        let vector = embedding.vector(u);
        for (j, x) in vector.iter().enumerate() {
            if j + 1 < vector.len() {
                write!(out, "{x:.6} ")?;
            } else {
                write!(out, "{x:.6}")?;
            }
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Writes one `1` or `-1` per node, one line each, in id order.
pub fn write_labels(path: &Path, labels: &[i8]) -> eyre::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for label in labels {
        writeln!(out, "{label}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn parses_pairs_in_arrival_order() {
        let graph = parse_edgelist("0 1\n1 2\n2 0\n");
        assert!(all(graph.n() == 3, graph.e() == 3));
        assert!(graph.neighbors(0) == [1, 2]);
    }

    #[test]
    fn malformed_tokens_stop_ingestion() {
        let graph = parse_edgelist("0 1\nfoo bar\n2 3\n");
        assert!(all(graph.n() == 2, graph.e() == 1));
    }

    #[test]
    fn trailing_unpaired_token_is_dropped() {
        let graph = parse_edgelist("0 1 2");
        assert!(all(graph.n() == 2, graph.e() == 1));
    }

    #[test]
    fn empty_input_gives_the_empty_graph() {
        let graph = parse_edgelist("");
        assert!(all(graph.n() == 0, graph.e() == 0));
    }

    #[test]
    fn embedding_table_round_trips_at_print_precision() {
        let mut rng = StdRng::seed_from_u64(2);
        let embedding = Embedding::sample(6, 3, &mut rng);
        let path = std::env::temp_dir().join("spin_cut_embedding_round_trip.txt");
        write_embedding(&path, &embedding).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let read: Vec<Vec<f64>> = text
            .lines()
            .map(|line| {
                line.split_ascii_whitespace()
                    .map(|tok| tok.parse().unwrap())
                    .collect()
            })
            .collect();
        assert!(read.len() == embedding.len());
        for (u, row) in read.iter().enumerate() {
            assert!(row.len() == embedding.dim());
            for (x, y) in row.iter().zip(embedding.vector(u)) {
                assert!((x - y).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn label_table_is_one_sign_per_line() {
        let path = std::env::temp_dir().join("spin_cut_label_table.txt");
        write_labels(&path, &[1, -1, -1, 1]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text == "1\n-1\n-1\n1\n");
    }
}
