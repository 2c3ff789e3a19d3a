pub mod traits;
pub mod undirected;
pub mod generators;
pub mod reference;

pub use traits::{Graph, NodeId, Weight};
pub use undirected::{GraphBuilder, UndirectedGraph};
