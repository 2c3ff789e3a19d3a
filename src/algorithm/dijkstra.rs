use log::debug;

use crate::algorithm::traits::ensure_node;
use crate::algorithm::{ShortestPath, ShortestPathFinder, ShortestPathTree};
use crate::data_structures::MinQueue;
use crate::graph::{Graph, NodeId, Weight};
use crate::Result;

/// Classic Dijkstra's algorithm implementation
///
/// Works on any graph with non-negative weights. The frontier is a binary
/// heap without decrease-key: improved nodes are pushed again and the stale
/// entries are skipped when popped.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Relaxation loop from `source`. Stops as soon as `target` is popped,
    /// or runs until the frontier is exhausted when there is no target.
    fn search<N, W, G>(&self, graph: &G, source: &N, target: Option<&N>) -> ShortestPathTree<N, W>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        let mut tree = ShortestPathTree::init(graph, source);
        let mut queue = MinQueue::new();
        queue.push(source.clone(), W::zero());

        let mut settled = 0usize;
        let mut relaxed = 0usize;

        while let Some((u, dist_u)) = queue.pop() {
            // If we've already found a shorter path to u, skip
            if let Some(current) = tree.distance(&u) {
                if current < dist_u {
                    continue;
                }
            }

            settled += 1;
            if target == Some(&u) {
                break;
            }

            for (v, weight) in graph.neighbors(&u) {
                // A distance past the weight type's range never improves anything
                let candidate = match dist_u.checked_add(weight) {
                    Some(candidate) => candidate,
                    None => continue,
                };

                let should_update = match tree.distance(v) {
                    None => true,
                    Some(current) => candidate < current,
                };

                if should_update {
                    relaxed += 1;
                    tree.distances.insert(v.clone(), Some(candidate));
                    tree.predecessors.insert(v.clone(), Some(u.clone()));
                    queue.push(v.clone(), candidate);
                }
            }
        }

        debug!(
            "Dijkstra from {}: {} nodes settled, {} edges relaxed",
            source, settled, relaxed
        );

        tree
    }
}

impl<N, W, G> ShortestPathFinder<N, W, G> for Dijkstra
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_path_tree(&self, graph: &G, source: &N) -> Result<ShortestPathTree<N, W>> {
        ensure_node::<N, W, G>(graph, source)?;
        Ok(self.search(graph, source, None))
    }

    fn find(&self, graph: &G, start: &N, end: &N) -> Result<ShortestPath<N, W>> {
        ensure_node::<N, W, G>(graph, start)?;
        ensure_node::<N, W, G>(graph, end)?;

        if start == end {
            return Ok(ShortestPath {
                nodes: vec![start.clone()],
                distance: W::zero(),
            });
        }

        let path = self.search(graph, start, Some(end)).path_to(end);
        match &path {
            Ok(path) => debug!("Path found: {}", path),
            Err(err) => debug!("{}", err),
        }
        path
    }
}
