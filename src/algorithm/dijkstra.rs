use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion.
///
/// Ties are resolved deterministically: queue entries with equal distance
/// pop in ascending vertex order, edges are relaxed in insertion order, and
/// an edge that only matches the recorded distance does not replace the
/// predecessor. The first relaxation reaching the minimum therefore wins.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidSource(source));
        }

        let n = graph.vertex_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        let mut settled = 0usize;
        let mut stale = 0usize;

        while let Some((u, dist_u)) = queue.pop() {
            // Superseded by a shorter entry that was already settled
            if distances[u].map_or(false, |best| dist_u > best) {
                stale += 1;
                continue;
            }
            settled += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                // Overflowing sums can never be an improvement
                let Some(new_dist) = dist_u.checked_add(&weight) else {
                    continue;
                };

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        log::debug!(
            "dijkstra from {}: {} pops settled, {} stale pops skipped, {} of {} vertices reached",
            source,
            settled,
            stale,
            distances.iter().filter(|d| d.is_some()).count(),
            n
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
