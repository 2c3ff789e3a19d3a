use std::collections::BTreeMap;
use std::fmt;

use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// A start-to-end path together with its total weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<N, W> {
    /// Nodes from start to end, both inclusive
    pub nodes: Vec<N>,

    /// Sum of the edge weights along `nodes`
    pub distance: W,
}

impl<N, W> ShortestPath<N, W>
where
    N: NodeId,
    W: Weight,
{
    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn end(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Consecutive node pairs along the path
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.nodes.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Returns true if the path walks over the undirected edge `a`-`b`
    pub fn uses_edge(&self, a: &N, b: &N) -> bool {
        self.edges()
            .any(|(from, to)| (from == a && to == b) || (from == b && to == a))
    }
}

impl<N, W> fmt::Display for ShortestPath<N, W>
where
    N: fmt::Display,
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, " with distance {}", self.distance)
    }
}

/// Distance and predecessor tables of a single-source search
#[derive(Debug, Clone)]
pub struct ShortestPathTree<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Source node of the search
    pub source: N,

    /// Best-known distance of every node, `None` while unreached
    pub distances: BTreeMap<N, Option<W>>,

    /// Node each node was last reached from, `None` for the source and
    /// unreached nodes
    pub predecessors: BTreeMap<N, Option<N>>,
}

impl<N, W> ShortestPathTree<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Fresh tables for `graph`: every distance infinite except the source
    pub fn init<G: Graph<N, W>>(graph: &G, source: &N) -> Self {
        let mut distances: BTreeMap<N, Option<W>> =
            graph.nodes().map(|node| (node.clone(), None)).collect();
        let predecessors = graph.nodes().map(|node| (node.clone(), None)).collect();
        distances.insert(source.clone(), Some(W::zero()));

        ShortestPathTree {
            source: source.clone(),
            distances,
            predecessors,
        }
    }

    /// Distance to `node`, `None` if it is unreachable or unknown
    pub fn distance(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).is_some()
    }

    /// Walks the predecessor chain from `target` back to the source.
    ///
    /// An unreached target, or a chain that stops before the source, is
    /// reported as `Error::Unreachable`.
    pub fn path_to(&self, target: &N) -> Result<ShortestPath<N, W>> {
        let distance = match self.distances.get(target) {
            None => return Err(Error::InvalidNode(target.to_string())),
            Some(None) => return Err(self.unreachable(target)),
            Some(Some(distance)) => *distance,
        };

        let mut nodes = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            match self.predecessors.get(current).and_then(Option::as_ref) {
                Some(pred) => {
                    // A chain longer than the node count cannot reach the source
                    if nodes.len() > self.predecessors.len() {
                        return Err(self.unreachable(target));
                    }
                    nodes.push(pred.clone());
                    current = pred;
                }
                None => return Err(self.unreachable(target)),
            }
        }
        nodes.reverse();

        Ok(ShortestPath { nodes, distance })
    }

    fn unreachable(&self, target: &N) -> Error {
        Error::Unreachable {
            start: self.source.to_string(),
            end: target.to_string(),
        }
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathFinder<N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source node to all other nodes
    fn shortest_path_tree(&self, graph: &G, source: &N) -> Result<ShortestPathTree<N, W>>;

    /// Compute the shortest path from `start` to `end`
    fn find(&self, graph: &G, start: &N, end: &N) -> Result<ShortestPath<N, W>>;
}

/// Fails with `Error::InvalidNode` unless `node` belongs to `graph`
pub fn ensure_node<N, W, G>(graph: &G, node: &N) -> Result<()>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    if graph.has_node(node) {
        Ok(())
    } else {
        Err(Error::InvalidNode(node.to_string()))
    }
}
