use crate::algorithm::Path;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Number of vertices covered by the tables
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Shortest distance from the source to `target`, `None` if unreachable
    pub fn distance(&self, target: usize) -> Result<Option<W>> {
        self.distances
            .get(target)
            .copied()
            .ok_or(Error::InvalidTarget(target))
    }

    pub fn is_reachable(&self, target: usize) -> Result<bool> {
        Ok(self.distance(target)?.is_some())
    }

    /// Walks the predecessor chain back from `target`.
    ///
    /// The walk stops at the first vertex with no predecessor, so an
    /// unreachable target yields the singleton path `[target]`.
    pub fn path_to(&self, target: usize) -> Result<Path> {
        if target >= self.predecessors.len() {
            return Err(Error::InvalidTarget(target));
        }

        let mut nodes = vec![target];
        let mut current = target;
        while let Some(pred) = self.predecessors[current] {
            // A predecessor tree has at most V - 1 links.
            if nodes.len() > self.predecessors.len() {
                log::warn!("predecessor chain from {} does not terminate", target);
                break;
            }
            if pred >= self.predecessors.len() {
                log::warn!("predecessor {} of vertex {} is not a vertex", pred, current);
                break;
            }
            nodes.push(pred);
            current = pred;
        }
        nodes.reverse();

        Ok(Path::new(nodes))
    }

    /// Reconstructs the paths to several targets at once
    pub fn paths_to(&self, targets: &[usize]) -> Result<Vec<Path>> {
        targets.iter().map(|&target| self.path_to(target)).collect()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices.
    ///
    /// The returned path's length is the reference length for scoring.
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Result<Path> {
        result.path_to(target)
    }
}
