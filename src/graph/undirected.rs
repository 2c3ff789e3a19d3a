use crate::graph::traits::{Graph, NodeId, Weight};
use crate::{Error, Result};
use std::collections::BTreeMap;

/// An immutable undirected graph implementation using adjacency maps
///
/// Every edge `(u, v, w)` is stored twice, as `u -> v` and `v -> u`, both with
/// weight `w`. Ordered maps keep node and neighbor iteration deterministic.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Adjacency for each node: node -> {neighbor -> weight}
    adjacency: BTreeMap<N, BTreeMap<N, W>>,

    /// Number of distinct undirected edges
    edge_count: usize,
}

impl<N, W> UndirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Starts a new graph builder
    pub fn builder() -> GraphBuilder<N, W> {
        GraphBuilder::new()
    }

    /// Builds a graph from a node list and an undirected edge list
    pub fn from_edges<I, E>(nodes: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N, W)>,
    {
        let mut builder = GraphBuilder::new().nodes(nodes);
        for (from, to, weight) in edges {
            builder = builder.edge(from, to, weight);
        }
        builder.build()
    }

    /// Returns every undirected edge once, as `(smaller, larger, weight)`
    pub fn edges(&self) -> Vec<(N, N, W)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (from, neighbors) in &self.adjacency {
            for (to, weight) in neighbors {
                if from <= to {
                    edges.push((from.clone(), to.clone(), *weight));
                }
            }
        }
        edges
    }
}

impl<N, W> Graph<N, W> for UndirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        match self.adjacency.get(node) {
            Some(neighbors) => Box::new(neighbors.iter().map(|(to, weight)| (to, *weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.adjacency
            .get(from)
            .and_then(|neighbors| neighbors.get(to))
            .copied()
    }
}

/// Collects nodes and edges, then validates them into an `UndirectedGraph`
#[derive(Debug, Clone)]
pub struct GraphBuilder<N, W> {
    nodes: Vec<N>,
    edges: Vec<(N, N, W)>,
}

impl<N, W> Default for GraphBuilder<N, W> {
    fn default() -> Self {
        GraphBuilder {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<N, W> GraphBuilder<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a node
    pub fn node(mut self, node: N) -> Self {
        self.nodes.push(node);
        self
    }

    /// Declares several nodes
    pub fn nodes<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        self.nodes.extend(nodes);
        self
    }

    /// Declares an undirected edge. A later declaration of the same pair
    /// replaces the weight.
    pub fn edge(mut self, from: N, to: N, weight: W) -> Self {
        self.edges.push((from, to, weight));
        self
    }

    /// Validates the collected edges and freezes the graph
    pub fn build(self) -> Result<UndirectedGraph<N, W>> {
        let mut adjacency: BTreeMap<N, BTreeMap<N, W>> = self
            .nodes
            .into_iter()
            .map(|node| (node, BTreeMap::new()))
            .collect();
        let mut edge_count = 0;

        for (from, to, weight) in self.edges {
            if !adjacency.contains_key(&from) || !adjacency.contains_key(&to) {
                return Err(Error::InvalidEdge(from.to_string(), to.to_string()));
            }
            if weight < W::zero() {
                return Err(Error::NegativeWeight(weight.to_string()));
            }

            let previous = adjacency
                .get_mut(&from)
                .and_then(|neighbors| neighbors.insert(to.clone(), weight));
            if previous.is_none() {
                edge_count += 1;
            }
            if let Some(neighbors) = adjacency.get_mut(&to) {
                neighbors.insert(from, weight);
            }
        }

        Ok(UndirectedGraph {
            adjacency,
            edge_count,
        })
    }
}
