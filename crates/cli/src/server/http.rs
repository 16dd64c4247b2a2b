use axum::http::HeaderValue;
use ferrule_api::{create_api_routes, AppState};
use ferrule_domain::Config;
use std::net::SocketAddr;
use std::str::FromStr;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_http_server(
    config: &Config,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let socket_addr = SocketAddr::from_str(&bind_addr)?;

    let app = create_api_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config.server.cors_allowed_origins)?);

    info!(bind_address = %socket_addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(socket_addr).await?;
    info!("HTTP server ready to accept requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("HTTP server stopped");

    Ok(())
}

fn build_cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    if origins.iter().any(|origin| origin == "*") {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let mut allowed = Vec::with_capacity(origins.len());
    for origin in origins {
        allowed.push(HeaderValue::from_str(origin)?);
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any))
}
