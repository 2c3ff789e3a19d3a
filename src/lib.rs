//! Dijkstra Viz - shortest paths over a small weighted undirected graph
//!
//! The core of this library is a classic single-source Dijkstra search with
//! early exit on the target node. Around it sit an immutable undirected graph,
//! the fixed six-node reference graph with its drawing layout, an all-pairs
//! distance table and a small web layer that serves the interactive
//! visualization.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

/// Re-export main types for convenient use
pub use algorithm::{
    all_pairs::DistanceMatrix, dijkstra::Dijkstra, ShortestPath, ShortestPathFinder,
    ShortestPathTree,
};
pub use graph::{reference::reference_graph, GraphBuilder, UndirectedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    #[error("No path from {start} to {end}")]
    Unreachable { start: String, end: String },

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(String, String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
