use std::net::SocketAddr;

use axum::http::{header, HeaderValue, Method};
use configs::{AppConfig, CorsConfig, ServerConfig};
use service::AppServices;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Only the listed origins may send credentials. An empty list means the
/// local frontend origin; a request's origin is never echoed back.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    if cfg.allowed_origins.is_empty() {
        warn!(origin = configs::DEFAULT_CORS_ORIGIN, "no CORS origins configured; using default");
    }
    let origins = cfg
        .origins()
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|e| StartupError::InvalidConfig(format!("cors origin {o}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]))
}

pub fn bind_addr(cfg: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.host, cfg.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}:{}: {e}", cfg.host, cfg.port)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl_c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutting down");
}

/// Connect the store with an already validated configuration and serve
/// until a shutdown signal.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Runtime(format!("database connect: {e}")))?;
    models::db::ensure_schema(&db)
        .await
        .map_err(|e| StartupError::Runtime(format!("schema bootstrap: {e}")))?;

    let state = ServerState::new(AppServices::seaorm(db), &cfg.auth);
    let app = routes::build_router(state, build_cors(&cfg.cors)?);

    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Runtime(format!("bind {addr}: {e}")))?;
    info!(%addr, cookie_secure = cfg.auth.cookie_secure, "car doctor server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    info!("server stopped");
    Ok(())
}
