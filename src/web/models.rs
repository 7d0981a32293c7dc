use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::Path;
use crate::graph::{DirectedGraph, Graph};
use crate::Error;

/// Edge weight type used by the HTTP surface
pub type WebWeight = u64;

/// A single directed edge in a graph request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub from: usize,
    pub to: usize,
    pub weight: WebWeight,
}

/// Request body for creating a graph session
#[derive(Debug, Clone, Deserialize)]
pub struct GraphRequest {
    pub vertex_count: usize,
    #[serde(default)]
    pub edges: Vec<WebEdge>,
}

/// Request body for a shortest path query
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub source: usize,
    pub target: usize,
}

/// Shortest path query result
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub source: usize,
    pub target: usize,
    pub path: Vec<usize>,
    /// The path rendered as `a -> b -> c`
    pub formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<WebWeight>,
    pub reachable: bool,
}

/// Request body for scoring candidate paths
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub candidates: Vec<Vec<usize>>,
}

/// One leaderboard row
#[derive(Debug, Clone, Serialize)]
pub struct ScoreEntry {
    /// Index of the candidate in the request
    pub candidate: usize,
    pub score: f64,
    pub optimal: bool,
}

/// Leaderboard response, highest score first
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub reference_path: Vec<usize>,
    pub reference_length: usize,
    pub entries: Vec<ScoreEntry>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl From<Error> for ErrorResponse {
    fn from(err: Error) -> Self {
        let (code, details) = match &err {
            Error::InvalidSource(v) => ("invalid_source", Some(serde_json::json!({ "vertex": v }))),
            Error::InvalidTarget(v) => ("invalid_target", Some(serde_json::json!({ "vertex": v }))),
            Error::InvalidCandidate(_) => ("invalid_candidate", None),
            Error::InvalidEdge(from, to) => (
                "invalid_edge",
                Some(serde_json::json!({ "from": from, "to": to })),
            ),
        };
        ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            details,
        }
    }
}

/// A graph together with the reference path of its latest path query
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    /// Shared so queries can run on it without holding the session map lock
    pub graph: Arc<DirectedGraph<WebWeight>>,
    pub reference: Option<Path>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: DirectedGraph<WebWeight>) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: Arc::new(graph),
            reference: None,
            created_at: Utc::now(),
        }
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id,
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            reference_path: self.reference.as_ref().map(|path| path.nodes().to_vec()),
            created_at: self.created_at,
        }
    }
}

/// Public view of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_path: Option<Vec<usize>>,
    pub created_at: DateTime<Utc>,
}
