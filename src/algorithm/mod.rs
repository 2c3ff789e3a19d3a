pub mod traits;
pub mod dijkstra;
pub mod all_pairs;

pub use all_pairs::DistanceMatrix;
pub use traits::{ShortestPath, ShortestPathFinder, ShortestPathTree};
