#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub s: usize,
    pub t: usize,
}

/// Undirected multigraph with a flat CSR adjacency.
///
/// `adj[offsets[u]..offsets[u + 1]]` is `u`'s neighbor multiset in edge
/// arrival order. Self-loops and repeated edges are kept as given.
#[derive(Clone, Debug)]
pub struct Graph {
    n: usize,
    edges: Vec<Edge>,
    offsets: Vec<usize>,
    adj: Vec<usize>,
}

impl Graph {
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut n = 0;
        let edges: Vec<Edge> = edges
            .into_iter()
            .map(|(s, t)| {
                n = n.max(s + 1).max(t + 1);
                Edge { s, t }
            })
            .collect();

        let mut degree = vec![0usize; n];
        for &Edge { s, t } in &edges {
            degree[s] += 1;
            degree[t] += 1;
        }
        let mut offsets = vec![0usize; n + 1];
        for u in 0..n {
            offsets[u + 1] = offsets[u] + degree[u];
            // reused below as the per-node write cursor
            degree[u] = 0;
        }
        let mut adj = vec![0usize; 2 * edges.len()];
        for &Edge { s, t } in &edges {
            adj[offsets[s] + degree[s]] = t;
            degree[s] += 1;
            adj[offsets[t] + degree[t]] = s;
            degree[t] += 1;
        }

        Self {
            n,
            edges,
            offsets,
            adj,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn e(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adj[self.offsets[u]..self.offsets[u + 1]]
    }

    pub fn degree(&self, u: usize) -> usize {
        self.offsets[u + 1] - self.offsets[u]
    }
}
