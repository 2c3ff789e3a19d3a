use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a node in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: String,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub is_path: bool,
}

/// Represents an edge in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
    #[serde(default)]
    pub is_path: bool,
}

/// Represents a complete graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub width: u32,
    pub height: u32,
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

/// Parameters for a one-off path query
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub start: String,
    pub end: String,
}

/// Response containing a computed shortest path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResponse {
    pub query_id: Uuid,
    pub start: String,
    pub end: String,
    pub path: Vec<String>,
    pub distance: u32,
    pub summary: String,
    pub execution_time_ms: f64,
    pub computed_at: DateTime<Utc>,
}

/// Update of the two input boxes; a missing field leaves that box untouched
#[derive(Debug, Default, Deserialize)]
pub struct SelectionUpdate {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

/// Current input boxes and the last path computed from them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Selection {
    pub start: Option<String>,
    pub end: Option<String>,
    pub result: Option<PathResponse>,
}

/// All-pairs distance table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceTableResponse {
    pub nodes: Vec<String>,
    /// `rows[i][j]` is the distance from `nodes[i]` to `nodes[j]`
    pub rows: Vec<Vec<Option<u32>>>,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
