use path_score::web::server::{start_server_with_config, ServerConfig, PORT_ENV};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arg = env::args().nth(1);
    let env_port = env::var(PORT_ENV).ok();
    let config = ServerConfig::resolve(arg.as_deref(), env_port.as_deref());

    log::info!(
        "starting with port {}, cors {}, max sessions {}, max vertices {}",
        config.port,
        config.enable_cors,
        config.max_sessions,
        config.max_vertices
    );

    start_server_with_config(config).await?;

    Ok(())
}
