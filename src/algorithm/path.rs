use std::fmt;
use std::ops::Deref;

use crate::graph::{Graph, Weight};

/// A reconstructed path: node ids in source -> target order, never empty.
///
/// When the target was unreachable the path is the single node `[target]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    nodes: Vec<usize>,
}

impl Path {
    pub(crate) fn new(nodes: Vec<usize>) -> Self {
        debug_assert!(!nodes.is_empty());
        Path { nodes }
    }

    /// Node ids in traversal order
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// First node of the path
    pub fn source(&self) -> usize {
        self.nodes[0]
    }

    /// Last node of the path
    pub fn target(&self) -> usize {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of edges traversed
    pub fn edge_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Sum of the edge weights along the path in `graph`.
    ///
    /// Returns `None` if a step has no matching edge or the sum overflows.
    /// Parallel edges contribute their lightest weight.
    pub fn total_weight<W, G>(&self, graph: &G) -> Option<W>
    where
        W: Weight,
        G: Graph<W>,
    {
        self.nodes.windows(2).try_fold(W::zero(), |total, step| {
            graph
                .get_edge_weight(step[0], step[1])
                .and_then(|weight| total.checked_add(&weight))
        })
    }

    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }
}

impl Deref for Path {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.nodes
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    #[test]
    fn display_joins_with_arrows() {
        assert_eq!(Path::new(vec![0, 1, 4, 8, 9]).to_string(), "0 -> 1 -> 4 -> 8 -> 9");
        assert_eq!(Path::new(vec![6]).to_string(), "6");
    }

    #[test]
    fn endpoints_and_length() {
        let path = Path::new(vec![2, 5, 9]);
        assert_eq!(path.source(), 2);
        assert_eq!(path.target(), 9);
        assert_eq!(path.len(), 3);
        assert_eq!(path.edge_count(), 2);
    }

    #[test]
    fn total_weight_follows_edges() {
        let graph = DirectedGraph::from_edges(3, &[(0, 1, 4u32), (0, 1, 1), (1, 2, 2)]).unwrap();

        assert_eq!(Path::new(vec![0, 1, 2]).total_weight(&graph), Some(3));
        assert_eq!(Path::new(vec![1]).total_weight(&graph), Some(0));
        assert_eq!(Path::new(vec![0, 2]).total_weight(&graph), None);
    }
}
