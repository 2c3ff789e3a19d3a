use log::debug;
use rayon::prelude::*;

use crate::algorithm::ShortestPathFinder;
use crate::graph::{Graph, NodeId, Weight};
use crate::Result;

/// All-pairs distance table
///
/// Row `i` holds the distances from `nodes[i]` to every node, in the same
/// order as `nodes`. `None` marks an unreachable pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix<N, W> {
    nodes: Vec<N>,
    rows: Vec<Vec<Option<W>>>,
}

impl<N, W> DistanceMatrix<N, W>
where
    N: NodeId + Send + Sync,
    W: Weight + Send + Sync,
{
    /// Runs one single-source search per node, in parallel
    pub fn compute<F, G>(finder: &F, graph: &G) -> Result<Self>
    where
        F: ShortestPathFinder<N, W, G> + Sync,
        G: Graph<N, W> + Sync,
    {
        let mut nodes: Vec<N> = graph.nodes().cloned().collect();
        nodes.sort();

        let rows = nodes
            .par_iter()
            .map(|source| -> Result<Vec<Option<W>>> {
                let tree = finder.shortest_path_tree(graph, source)?;
                Ok(nodes.iter().map(|target| tree.distance(target)).collect())
            })
            .collect::<Result<Vec<Vec<Option<W>>>>>()?;

        debug!(
            "{} distance table computed for {} nodes",
            finder.name(),
            nodes.len()
        );

        Ok(DistanceMatrix { nodes, rows })
    }
}

impl<N, W> DistanceMatrix<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Nodes in row/column order
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Distance from `from` to `to`, `None` if unreachable or unknown
    pub fn distance(&self, from: &N, to: &N) -> Option<W> {
        let row = self.index_of(from)?;
        let col = self.index_of(to)?;
        self.rows[row][col]
    }

    /// Iterates rows together with their source node
    pub fn rows(&self) -> impl Iterator<Item = (&N, &[Option<W>])> + '_ {
        self.nodes
            .iter()
            .zip(self.rows.iter().map(Vec::as_slice))
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.nodes.len())
            .all(|i| (0..self.nodes.len()).all(|j| self.rows[i][j] == self.rows[j][i]))
    }

    fn index_of(&self, node: &N) -> Option<usize> {
        self.nodes.binary_search(node).ok()
    }
}
