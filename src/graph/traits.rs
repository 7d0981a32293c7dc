use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};

/// Numeric type usable as an edge weight.
///
/// Weights are expected to be non-negative. Signed types are accepted, but
/// shortest path results over negative weights are meaningless and nothing
/// checks for them during the computation.
pub trait Weight: Copy + Debug + Ord + Zero + CheckedAdd {}

impl<T> Weight for T where T: Copy + Debug + Ord + Zero + CheckedAdd {}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists.
    ///
    /// With parallel edges the smallest weight is returned.
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Appends a directed edge. Parallel edges are kept side by side.
    ///
    /// Returns false if either endpoint is not a vertex of the graph.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;
}
