//! The fixed six-node graph shown by the visualizer, with its drawing layout.

use crate::graph::UndirectedGraph;
use crate::{Error, Result};

/// Canvas width the layout positions are expressed in
pub const CANVAS_WIDTH: u32 = 800;

/// Canvas height the layout positions are expressed in
pub const CANVAS_HEIGHT: u32 = 600;

/// Node labels and their drawing positions
pub const REFERENCE_NODES: [(char, (i32, i32)); 6] = [
    ('A', (150, 150)),
    ('B', (350, 150)),
    ('C', (150, 350)),
    ('D', (550, 150)),
    ('E', (550, 350)),
    ('F', (750, 150)),
];

/// Undirected weighted edges of the reference graph
pub const REFERENCE_EDGES: [(char, char, u32); 8] = [
    ('A', 'B', 7),
    ('A', 'C', 12),
    ('B', 'C', 2),
    ('B', 'D', 9),
    ('C', 'E', 10),
    ('D', 'E', 4),
    ('D', 'F', 1),
    ('E', 'F', 5),
];

/// Builds the reference graph
pub fn reference_graph() -> Result<UndirectedGraph<char, u32>> {
    UndirectedGraph::from_edges(
        REFERENCE_NODES.iter().map(|(label, _)| *label),
        REFERENCE_EDGES.iter().copied(),
    )
}

/// Drawing position of a reference node
pub fn position(label: char) -> Option<(i32, i32)> {
    REFERENCE_NODES
        .iter()
        .find(|(node, _)| *node == label)
        .map(|(_, position)| *position)
}

/// Parses user input into a reference node label.
///
/// Input is trimmed and upper-cased; exactly one character naming a
/// reference node is accepted.
pub fn parse_label(text: &str) -> Result<char> {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            let label = c.to_ascii_uppercase();
            if position(label).is_some() {
                Ok(label)
            } else {
                Err(Error::InvalidNode(trimmed.to_string()))
            }
        }
        _ => Err(Error::InvalidNode(trimmed.to_string())),
    }
}
