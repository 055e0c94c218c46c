//! Weighted undirected graph and PageRank over it.

use rustc_hash::FxHashMap;

/// Undirected graph with `f64` edge weights and dense `usize` node ids.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<FxHashMap<usize, f64>>,
}

impl Graph {
    pub fn with_nodes(n: usize) -> Self {
        Self {
            adjacency: vec![FxHashMap::default(); n],
        }
    }

    /// Append a node and return its id.
    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(FxHashMap::default());
        self.adjacency.len() - 1
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Add `weight` to the edge between `a` and `b` in both directions.
    ///
    /// Self-loops and non-positive weights are ignored.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: f64) {
        if a == b || weight <= 0.0 {
            return;
        }
        *self.adjacency[a].entry(b).or_insert(0.0) += weight;
        *self.adjacency[b].entry(a).or_insert(0.0) += weight;
    }

    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adjacency[node].iter().map(|(&n, &w)| (n, w))
    }

    pub fn total_weight(&self, node: usize) -> f64 {
        self.adjacency[node].values().sum()
    }

    pub fn is_isolated(&self, node: usize) -> bool {
        self.adjacency[node].is_empty()
    }
}

/// Outcome of a PageRank run.
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Score per node id; sums to 1 for non-empty graphs.
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
}

/// Weighted PageRank by power iteration.
#[derive(Debug, Clone)]
pub struct PageRank {
    pub damping: f64,
    pub max_iterations: usize,
    /// Stop once the L1 change between iterations falls below this.
    pub threshold: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-4,
        }
    }
}

impl PageRank {
    pub fn run(&self, graph: &Graph) -> PageRankResult {
        let n = graph.num_nodes();
        if n == 0 {
            return PageRankResult {
                scores: Vec::new(),
                iterations: 0,
                converged: true,
            };
        }

        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let totals: Vec<f64> = (0..n).map(|i| graph.total_weight(i)).collect();
        let dangling: Vec<usize> = (0..n).filter(|&i| totals[i] <= 0.0).collect();
        let teleport = (1.0 - self.damping) / n as f64;

        let mut iterations = 0;
        let mut delta = f64::MAX;
        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // Isolated nodes spread their mass evenly.
            let dangling_mass: f64 = dangling.iter().map(|&d| scores[d]).sum();
            next.fill(teleport + self.damping * dangling_mass / n as f64);

            for (node, &score) in scores.iter().enumerate() {
                if totals[node] > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node) {
                        next[neighbor] += self.damping * score * weight / totals[node];
                    }
                }
            }

            delta = scores.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
            std::mem::swap(&mut scores, &mut next);
        }

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            scores.iter_mut().for_each(|s| *s /= sum);
        }

        PageRankResult {
            scores,
            iterations,
            converged: delta <= self.threshold,
        }
    }
}
