use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::{info, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{DistanceMatrix, ShortestPath, ShortestPathFinder};
use crate::graph::reference::{self, parse_label, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::graph::{Graph, UndirectedGraph};
use crate::web::models::*;
use crate::Error;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<UndirectedGraph<char, u32>>,
    pub finder: Dijkstra,
    pub selection: Arc<Mutex<Selection>>,
}

impl AppState {
    /// State over the reference graph with empty input boxes
    pub fn new() -> crate::Result<Self> {
        Ok(Self {
            graph: Arc::new(reference::reference_graph()?),
            finder: Dijkstra::new(),
            selection: Arc::new(Mutex::new(Selection::default())),
        })
    }

    fn selection(&self) -> MutexGuard<'_, Selection> {
        self.selection.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graph", get(get_graph))
        .route("/api/path", post(find_path))
        .route("/api/path/:start/:end", get(find_path_by_labels))
        .route("/api/selection", get(get_selection).post(update_selection))
        .route("/api/distances", get(get_distances))
        .route("/api/health", get(health_check))
}

/// Maps a library error onto an HTTP status and error body
pub fn error_response(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match &err {
        Error::InvalidNode(_) => (StatusCode::BAD_REQUEST, "invalid_node"),
        Error::Unreachable { .. } => (StatusCode::NOT_FOUND, "no_path"),
        _ => {
            warn!("Path query failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
        }
    };

    (status, Json(ErrorResponse {
        error: code.to_string(),
        message: err.to_string(),
        details: None,
    }))
}

/// Parses both labels and runs the finder over the shared graph
fn compute_path(state: &AppState, start: &str, end: &str) -> crate::Result<PathResponse> {
    let start = parse_label(start)?;
    let end = parse_label(end)?;

    let start_time = Instant::now();
    let path: ShortestPath<char, u32> = state.finder.find(state.graph.as_ref(), &start, &end)?;
    let execution_time = start_time.elapsed();

    info!("Shortest path: {}", path);

    Ok(PathResponse {
        query_id: Uuid::new_v4(),
        start: start.to_string(),
        end: end.to_string(),
        path: path.nodes.iter().map(char::to_string).collect(),
        distance: path.distance,
        summary: path.to_string(),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        computed_at: Utc::now(),
    })
}

/// Get the drawing data, with the last selected path highlighted
pub async fn get_graph(State(state): State<AppState>) -> ApiResult<WebGraph> {
    let path: Vec<String> = state
        .selection()
        .result
        .as_ref()
        .map(|result| result.path.clone())
        .unwrap_or_default();

    let on_path = |a: &str, b: &str| {
        path.windows(2)
            .any(|pair| (pair[0] == a && pair[1] == b) || (pair[0] == b && pair[1] == a))
    };

    let nodes = state
        .graph
        .nodes()
        .filter_map(|label| {
            reference::position(*label).map(|(x, y)| WebNode {
                id: label.to_string(),
                x,
                y,
                is_path: path.iter().any(|node| *node == label.to_string()),
            })
        })
        .collect();

    let links = state
        .graph
        .edges()
        .into_iter()
        .map(|(source, target, weight)| {
            let (source, target) = (source.to_string(), target.to_string());
            let is_path = on_path(&source, &target);
            WebEdge {
                source,
                target,
                weight,
                is_path,
            }
        })
        .collect();

    Ok(Json(WebGraph {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        nodes,
        links,
    }))
}

/// Compute a path for an explicit start/end pair
pub async fn find_path(
    State(state): State<AppState>,
    Json(request): Json<PathRequest>,
) -> ApiResult<PathResponse> {
    compute_path(&state, &request.start, &request.end)
        .map(Json)
        .map_err(error_response)
}

/// Same as `find_path`, with the labels taken from the URL
pub async fn find_path_by_labels(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> ApiResult<PathResponse> {
    compute_path(&state, &start, &end)
        .map(Json)
        .map_err(error_response)
}

/// Get the input boxes and the last computed path
pub async fn get_selection(State(state): State<AppState>) -> ApiResult<Selection> {
    Ok(Json(state.selection().clone()))
}

/// Update one or both input boxes.
///
/// An empty string clears a box. Once both boxes hold a label the path is
/// recomputed; the previous result is kept otherwise.
pub async fn update_selection(
    State(state): State<AppState>,
    Json(update): Json<SelectionUpdate>,
) -> ApiResult<Selection> {
    let box_value = |value: Option<String>, current: Option<String>| match value {
        None => Ok(current),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => parse_label(&text).map(|label| Some(label.to_string())),
    };

    // One guard for the whole update so concurrent box edits cannot interleave
    let mut selection = state.selection();
    let start = box_value(update.start, selection.start.clone()).map_err(error_response)?;
    let end = box_value(update.end, selection.end.clone()).map_err(error_response)?;

    if let (Some(start), Some(end)) = (&start, &end) {
        selection.result = Some(compute_path(&state, start, end).map_err(error_response)?);
    }
    selection.start = start;
    selection.end = end;

    Ok(Json(selection.clone()))
}

/// Get the all-pairs distance table
pub async fn get_distances(State(state): State<AppState>) -> ApiResult<DistanceTableResponse> {
    let matrix: DistanceMatrix<char, u32> =
        DistanceMatrix::compute(&state.finder, state.graph.as_ref()).map_err(error_response)?;

    Ok(Json(DistanceTableResponse {
        nodes: matrix.nodes().iter().map(char::to_string).collect(),
        rows: matrix.rows().map(|(_, row)| row.to_vec()).collect(),
    }))
}

/// Health check endpoint
pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}
