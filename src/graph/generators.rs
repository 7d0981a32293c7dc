use crate::graph::{DirectedGraph, MutableGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Number of vertices in [`demo_graph`]
pub const DEMO_VERTEX_COUNT: usize = 10;

/// Edges of the ten-node demo graph as `(from, to, weight)`
pub const DEMO_EDGES: [(usize, usize, u32); 13] = [
    (0, 1, 1),
    (0, 2, 3),
    (1, 3, 4),
    (1, 4, 2),
    (2, 5, 2),
    (3, 6, 5),
    (3, 7, 2),
    (4, 8, 3),
    (5, 8, 1),
    (5, 9, 4),
    (6, 9, 2),
    (7, 9, 3),
    (8, 9, 1),
];

/// The ten-node graph used by the leaderboard demo.
///
/// The shortest path from 0 to 9 is `0 -> 1 -> 4 -> 8 -> 9` with weight 7.
pub fn demo_graph() -> DirectedGraph<u32> {
    let mut graph = DirectedGraph::with_capacity(DEMO_VERTEX_COUNT);
    for (from, to, weight) in DEMO_EDGES {
        graph.add_edge(from, to, weight);
    }
    graph
}

/// Sample candidate paths scored by the leaderboard demo
pub fn demo_candidates() -> Vec<Vec<usize>> {
    vec![
        vec![0, 1, 3, 7, 8, 9],
        vec![0, 1, 3, 7, 8, 9, 9, 9, 9, 9],
        vec![0, 1, 3, 7, 8, 9, 4, 5, 6, 7, 8, 9],
        vec![0, 1, 3, 7, 8, 9, 2, 5, 8, 9],
    ]
}

/// Generates a random directed graph with roughly `edge_factor * n` edges.
///
/// Weights are drawn from `0..=max_weight`, self-loops are skipped and
/// parallel edges may occur. The same seed always yields the same graph.
pub fn generate_random_graph(n: usize, edge_factor: f64, max_weight: u32, seed: u64) -> DirectedGraph<u32> {
    let mut graph = DirectedGraph::with_capacity(n);
    if n < 2 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(0..=max_weight));
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn demo_graph_shape() {
        let graph = demo_graph();
        assert_eq!(graph.vertex_count(), 10);
        assert_eq!(graph.edge_count(), 13);
        assert_eq!(graph.get_edge_weight(4, 8), Some(3));
    }

    #[test]
    fn random_graph_is_reproducible() {
        let a = generate_random_graph(50, 3.0, 20, 7);
        let b = generate_random_graph(50, 3.0, 20, 7);
        assert_eq!(a, b);
        assert_eq!(a.vertex_count(), 50);
        assert!(a.edge_count() <= 150);
    }

    #[test]
    fn random_graph_tiny_sizes() {
        assert_eq!(generate_random_graph(0, 2.0, 5, 1).vertex_count(), 0);
        assert_eq!(generate_random_graph(1, 2.0, 5, 1).edge_count(), 0);
    }
}
