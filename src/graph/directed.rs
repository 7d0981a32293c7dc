use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph with `vertices` nodes from an ordered `(from, to, weight)` list.
    ///
    /// Edges keep their order inside each adjacency list, which decides the
    /// order relaxations are attempted in.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut graph = Self::with_capacity(vertices);
        for &(from, to, weight) in edges {
            if !graph.add_edge(from, to, weight) {
                log::warn!("rejecting edge {} -> {} in a graph of {} vertices", from, to, vertices);
                return Err(Error::InvalidEdge(from, to));
            }
        }
        Ok(graph)
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .iter()
            .flatten()
            .all(|(_, weight)| *weight >= W::zero())
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().cloned()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.outgoing_edges.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges
            .get(from)
            .map_or(false, |edges| edges.iter().any(|(target, _)| *target == to))
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges.get(from).and_then(|edges| {
            edges
                .iter()
                .filter(|(target, _)| *target == to)
                .map(|(_, weight)| *weight)
                .min()
        })
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.outgoing_edges.push(Vec::new());
        self.outgoing_edges.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }
        self.outgoing_edges[from].push((to, weight));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_keeps_parallel_edges() {
        let graph = DirectedGraph::from_edges(3, &[(0, 1, 5u32), (0, 1, 2), (1, 2, 1)]).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.outgoing_edges(0).collect::<Vec<_>>(), vec![(1, 5), (1, 2)]);
        assert_eq!(graph.get_edge_weight(0, 1), Some(2));
        assert_eq!(graph.get_edge_weight(1, 0), None);
    }

    #[test]
    fn from_edges_rejects_out_of_range_endpoints() {
        let err = DirectedGraph::from_edges(2, &[(0, 1, 1u32), (1, 2, 1)]).unwrap_err();
        assert_eq!(err, Error::InvalidEdge(1, 2));
    }

    #[test]
    fn add_vertex_and_edge() {
        let mut graph: DirectedGraph<u64> = DirectedGraph::new();
        assert!(!graph.add_edge(0, 0, 1));

        let a = graph.add_vertex();
        let b = graph.add_vertex();
        assert_eq!((a, b), (0, 1));
        assert!(graph.add_edge(a, b, 4));
        assert!(graph.has_edge(a, b));
        assert!(!graph.has_edge(b, a));
        assert_eq!(graph.outgoing_edges(7).count(), 0);
    }

    #[test]
    fn validate_non_negative_flags_negative_weights() {
        let ok = DirectedGraph::from_edges(2, &[(0, 1, 0i64)]).unwrap();
        let bad = DirectedGraph::from_edges(2, &[(0, 1, 3i64), (1, 0, -1)]).unwrap();

        assert!(ok.validate_non_negative());
        assert!(!bad.validate_non_negative());
    }
}
