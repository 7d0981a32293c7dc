use axum::{
    http::{header, Method},
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState, DEFAULT_MAX_VERTICES};

/// Environment variable overriding the listening port
pub const PORT_ENV: &str = "PATH_SCORE_PORT";

/// Configuration for the web server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
    pub max_sessions: usize,
    /// Largest vertex count accepted for a submitted graph
    pub max_vertices: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            enable_cors: true,
            max_sessions: 1000,
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl ServerConfig {
    /// Resolves the port from a command line argument, then `PATH_SCORE_PORT`.
    ///
    /// Values that do not parse as a port are ignored with a warning.
    pub fn resolve(arg: Option<&str>, env: Option<&str>) -> Self {
        let mut config = Self::default();
        for value in [arg, env].into_iter().flatten() {
            match value.parse() {
                Ok(port) => {
                    config.port = port;
                    break;
                }
                Err(_) => log::warn!("ignoring invalid port {:?}", value),
            }
        }
        config
    }
}

/// Build the application router for a configuration
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state = AppState::with_max_sessions(config.max_sessions).with_max_vertices(config.max_vertices);
    let app = Router::new().merge(create_router()).with_state(app_state);

    if !config.enable_cors {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    app.layer(ServiceBuilder::new().layer(cors).into_inner())
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    log::info!("path score server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_argument() {
        assert_eq!(ServerConfig::resolve(Some("8080"), Some("9090")).port, 8080);
        assert_eq!(ServerConfig::resolve(None, Some("9090")).port, 9090);
        assert_eq!(ServerConfig::resolve(None, None), ServerConfig::default());
    }

    #[test]
    fn resolve_skips_garbage() {
        assert_eq!(ServerConfig::resolve(Some("http"), Some("7000")).port, 7000);
        assert_eq!(ServerConfig::resolve(Some("99999"), None).port, 3005);
    }
}
