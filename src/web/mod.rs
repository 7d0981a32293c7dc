//! JSON HTTP surface: graph sessions, path queries and leaderboard scoring.

pub mod api;
pub mod models;
pub mod server;

pub use server::{start_server_with_config, ServerConfig};
