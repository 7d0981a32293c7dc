use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::generators::{DEMO_EDGES, DEMO_VERTEX_COUNT};
use crate::graph::{DirectedGraph, Graph};
use crate::scoring::PathScorer;
use crate::web::models::*;

/// Rejection returned by every handler
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Default cap on the vertex count of a submitted graph
pub const DEFAULT_MAX_VERTICES: usize = 1_000_000;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
    pub max_vertices: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_sessions(1000)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }

    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/demo", post(create_demo_graph))
        .route("/api/paths/:session_id", post(shortest_path))
        .route("/api/scores/:session_id", post(score_candidates))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session).delete(delete_session))
        .route("/api/health", get(health_check))
}

/// Create a session from an explicit edge list
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphRequest>,
) -> Result<Json<SessionInfo>, ApiError> {
    if request.vertex_count > state.max_vertices {
        log::warn!(
            "rejecting graph of {} vertices, limit is {}",
            request.vertex_count,
            state.max_vertices
        );
        return Err((StatusCode::BAD_REQUEST, Json(ErrorResponse {
            error: "graph_too_large".to_string(),
            message: format!("Graphs may have at most {} vertices", state.max_vertices),
            details: Some(serde_json::json!({ "vertex_count": request.vertex_count })),
        })));
    }

    let edges: Vec<(usize, usize, WebWeight)> = request
        .edges
        .iter()
        .map(|edge| (edge.from, edge.to, edge.weight))
        .collect();

    let graph = DirectedGraph::from_edges(request.vertex_count, &edges)
        .map_err(|err| (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(err))))?;

    insert_session(&state, Session::new(graph))
}

/// Create a session over the built-in ten-node demo graph
pub async fn create_demo_graph(State(state): State<AppState>) -> Result<Json<SessionInfo>, ApiError> {
    let edges: Vec<(usize, usize, WebWeight)> = DEMO_EDGES
        .iter()
        .map(|&(from, to, weight)| (from, to, WebWeight::from(weight)))
        .collect();
    let graph = DirectedGraph::from_edges(DEMO_VERTEX_COUNT, &edges)
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::from(err))))?;

    insert_session(&state, Session::new(graph))
}

/// Compute the shortest path and make it the session's reference path
pub async fn shortest_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, ApiError> {
    let graph = {
        let sessions = state.sessions.lock().unwrap();
        let session = sessions.get(&session_id).ok_or_else(session_not_found)?;
        Arc::clone(&session.graph)
    };

    let result = Dijkstra::new()
        .compute_shortest_paths(&*graph, request.source)
        .map_err(bad_request)?;
    let path = result.path_to(request.target).map_err(bad_request)?;
    let distance = result.distance(request.target).map_err(bad_request)?;

    let response = PathResponse {
        source: request.source,
        target: request.target,
        path: path.nodes().to_vec(),
        formatted: path.to_string(),
        distance,
        reachable: distance.is_some(),
    };

    // The session may have been deleted while the query ran
    let mut sessions = state.sessions.lock().unwrap();
    let session = sessions.get_mut(&session_id).ok_or_else(session_not_found)?;
    log::info!("session {}: reference path {}", session_id, response.formatted);
    session.reference = Some(path);

    Ok(Json(response))
}

/// Score candidate paths against the session's reference path
pub async fn score_candidates(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let scorer = {
        let sessions = state.sessions.lock().unwrap();
        let session = sessions.get(&session_id).ok_or_else(session_not_found)?;
        match &session.reference {
            Some(reference) => PathScorer::new(reference.clone(), session.graph.vertex_count()),
            None => {
                return Err((StatusCode::CONFLICT, Json(ErrorResponse {
                    error: "no_reference_path".to_string(),
                    message: "Compute a shortest path in this session before scoring".to_string(),
                    details: None,
                })));
            }
        }
    };

    let entries = scorer
        .rank_entries(&request.candidates)
        .map_err(bad_request)?
        .into_iter()
        .map(|(candidate, score)| ScoreEntry {
            candidate,
            score,
            optimal: scorer.is_optimal(&request.candidates[candidate]),
        })
        .collect();

    Ok(Json(ScoreResponse {
        reference_path: scorer.reference().nodes().to_vec(),
        reference_length: scorer.reference_len(),
        entries,
    }))
}

/// List all sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<SessionInfo>>, ApiError> {
    let sessions = state.sessions.lock().unwrap();
    let mut infos: Vec<SessionInfo> = sessions.values().map(Session::info).collect();
    infos.sort_by_key(|info| info.created_at);
    Ok(Json(infos))
}

/// Get a specific session
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionInfo>, ApiError> {
    let sessions = state.sessions.lock().unwrap();

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.info())),
        None => Err(session_not_found()),
    }
}

/// Delete a session, freeing its slot
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut sessions = state.sessions.lock().unwrap();

    match sessions.remove(&session_id) {
        Some(_) => {
            log::info!("deleted session {}", session_id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(session_not_found()),
    }
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn insert_session(state: &AppState, session: Session) -> Result<Json<SessionInfo>, ApiError> {
    let mut sessions = state.sessions.lock().unwrap();
    if sessions.len() >= state.max_sessions {
        log::warn!("session limit of {} reached", state.max_sessions);
        return Err((StatusCode::SERVICE_UNAVAILABLE, Json(ErrorResponse {
            error: "session_limit_reached".to_string(),
            message: format!("At most {} sessions may exist", state.max_sessions),
            details: None,
        })));
    }

    let info = session.info();
    log::info!(
        "created session {} ({} vertices, {} edges)",
        info.id,
        info.vertex_count,
        info.edge_count
    );
    sessions.insert(session.id, session);

    Ok(Json(info))
}

fn session_not_found() -> ApiError {
    (StatusCode::NOT_FOUND, Json(ErrorResponse {
        error: "session_not_found".to_string(),
        message: "Session not found".to_string(),
        details: None,
    }))
}

fn bad_request(err: crate::Error) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn demo_session(state: &AppState) -> Uuid {
        create_demo_graph(State(state.clone())).await.unwrap().0.id
    }

    #[tokio::test]
    async fn demo_shortest_path_becomes_reference() {
        let state = AppState::new();
        let id = demo_session(&state).await;

        let response = shortest_path(
            State(state.clone()),
            Path(id),
            Json(PathRequest { source: 0, target: 9 }),
        )
        .await
        .unwrap()
        .0;

        assert_eq!(response.path, vec![0, 1, 4, 8, 9]);
        assert_eq!(response.formatted, "0 -> 1 -> 4 -> 8 -> 9");
        assert_eq!(response.distance, Some(7));
        assert!(response.reachable);

        let info = get_session(State(state), Path(id)).await.unwrap().0;
        assert_eq!(info.reference_path, Some(vec![0, 1, 4, 8, 9]));
    }

    #[tokio::test]
    async fn scoring_requires_a_reference_path() {
        let state = AppState::new();
        let id = demo_session(&state).await;

        let err = score_candidates(
            State(state),
            Path(id),
            Json(ScoreRequest { candidates: vec![vec![0, 9]] }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn scores_are_ranked_per_session() {
        let state = AppState::new();
        let demo = demo_session(&state).await;
        let line = create_graph(
            State(state.clone()),
            Json(GraphRequest {
                vertex_count: 3,
                edges: vec![WebEdge { from: 0, to: 1, weight: 1 }, WebEdge { from: 1, to: 2, weight: 1 }],
            }),
        )
        .await
        .unwrap()
        .0
        .id;

        shortest_path(State(state.clone()), Path(demo), Json(PathRequest { source: 0, target: 9 }))
            .await
            .unwrap();
        shortest_path(State(state.clone()), Path(line), Json(PathRequest { source: 0, target: 2 }))
            .await
            .unwrap();

        let ranked = score_candidates(
            State(state.clone()),
            Path(demo),
            Json(ScoreRequest {
                candidates: vec![vec![0, 1, 3, 7, 8, 9, 9, 9, 9, 9], vec![0, 1, 4, 8, 9]],
            }),
        )
        .await
        .unwrap()
        .0;

        assert_eq!(ranked.reference_length, 5);
        assert_eq!(ranked.entries[0].candidate, 1);
        assert_eq!(ranked.entries[0].score, 100.0);
        assert!(ranked.entries[0].optimal);
        assert_eq!(ranked.entries[1].score, 50.0);

        let other = score_candidates(
            State(state),
            Path(line),
            Json(ScoreRequest { candidates: vec![vec![0, 1, 2]] }),
        )
        .await
        .unwrap()
        .0;
        assert_eq!(other.reference_length, 3);
        assert_eq!(other.entries[0].score, 100.0);
    }

    #[tokio::test]
    async fn invalid_requests_are_rejected() {
        let state = AppState::new();

        let err = create_graph(
            State(state.clone()),
            Json(GraphRequest { vertex_count: 2, edges: vec![WebEdge { from: 0, to: 5, weight: 1 }] }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert_eq!(err.1.error, "invalid_edge");

        let id = demo_session(&state).await;
        let err = shortest_path(State(state.clone()), Path(id), Json(PathRequest { source: 42, target: 9 }))
            .await
            .unwrap_err();
        assert_eq!(err.1.error, "invalid_source");

        let err = get_session(State(state), Path(Uuid::new_v4())).await.unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn session_limit_is_enforced() {
        let state = AppState::with_max_sessions(1);
        demo_session(&state).await;

        let err = create_demo_graph(State(state.clone())).await.unwrap_err();
        assert_eq!(err.0, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(list_sessions(State(state)).await.unwrap().0.len(), 1);
    }

    #[tokio::test]
    async fn deleting_a_session_frees_its_slot() {
        let state = AppState::with_max_sessions(2);
        let first = demo_session(&state).await;
        demo_session(&state).await;
        assert!(create_demo_graph(State(state.clone())).await.is_err());

        let status = delete_session(State(state.clone()), Path(first)).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(create_demo_graph(State(state.clone())).await.is_ok());

        let err = get_session(State(state.clone()), Path(first)).await.unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
        let err = delete_session(State(state), Path(first)).await.unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn oversized_graphs_are_rejected() {
        let state = AppState::new().with_max_vertices(100);

        let err = create_graph(
            State(state.clone()),
            Json(GraphRequest { vertex_count: usize::MAX / 2, edges: vec![] }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert_eq!(err.1.error, "graph_too_large");

        let info = create_graph(State(state.clone()), Json(GraphRequest { vertex_count: 100, edges: vec![] }))
            .await
            .unwrap()
            .0;
        assert_eq!(info.vertex_count, 100);
        assert_eq!(list_sessions(State(state)).await.unwrap().0.len(), 1);
    }

    #[tokio::test]
    async fn path_query_on_deleted_session_is_not_found() {
        let state = AppState::new();
        let id = demo_session(&state).await;
        delete_session(State(state.clone()), Path(id)).await.unwrap();

        let err = shortest_path(State(state), Path(id), Json(PathRequest { source: 0, target: 9 }))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }
}
