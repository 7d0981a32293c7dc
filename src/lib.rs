//! Path Score - shortest paths and candidate path leaderboards
//!
//! This library computes single-source shortest paths on weighted directed
//! graphs with a lazy-deletion binary-heap Dijkstra, reconstructs optimal
//! paths, and scores arbitrary candidate paths against the optimum.
//!
//! A candidate's score is `reference_len / candidate_len * 100`, so the
//! optimal path itself scores exactly 100 and longer detours score less.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod scoring;
pub mod web;

pub use algorithm::{dijkstra::Dijkstra, Path, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use scoring::{compare_paths, format_score, score_path, PathScorer};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid source vertex: {0}")]
    InvalidSource(usize),

    #[error("Invalid target vertex: {0}")]
    InvalidTarget(usize),

    #[error("Invalid candidate path: {0}")]
    InvalidCandidate(String),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
