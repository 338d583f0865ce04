use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, middleware::from_fn, routing::get, Router};
use runtime::{AppConfig, DatabaseConfig, ServerConfig};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
};
use url::Url;
use usuarios::Usuarios;

use crate::{request_id, web};

const BODY_LIMIT_BYTES: usize = 16 * 1024 * 1024;
const DEFAULT_MAX_CONNS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT_MS: u64 = 5000;

/// Open the pool described by `cfg`.
pub async fn connect_db(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let url = cfg.url.trim();
    if url.is_empty() {
        anyhow::bail!("Database URL not configured");
    }

    // Every pooled connection to an in-memory SQLite URL would get its own database.
    let max_conns = if url.contains(":memory:") {
        1
    } else {
        cfg.max_conns.unwrap_or(DEFAULT_MAX_CONNS)
    };

    let mut opts = ConnectOptions::new(url.to_owned());
    opts.max_connections(max_conns)
        .min_connections(1)
        .acquire_timeout(Duration::from_millis(
            cfg.acquire_timeout_ms.unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_MS),
        ))
        .sqlx_logging(false);

    tracing::info!(max_conns, "Connecting to database");
    Database::connect(opts)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", redact(url)))
}

/// Hide the password part of a connection URL.
fn redact(url: &str) -> String {
    if !url.contains('@') {
        return url.to_owned();
    }
    match Url::parse(url) {
        Ok(mut parsed) => {
            if parsed.password().is_some() {
                let _ = parsed.set_password(Some("***"));
            }
            parsed.to_string()
        }
        Err(_) => "***".to_owned(),
    }
}

/// Routes of every module plus `/health`, wrapped in the HTTP middleware stack.
pub fn build_router(module: &Usuarios, cfg: &ServerConfig) -> Router {
    let mut router = Router::new().route("/health", get(web::health_check));
    router = module.register_rest(router);

    // Layers added later wrap the earlier ones. Effective order, outermost first:
    // SetRequestId -> PropagateRequestId -> Trace -> record_request_id -> CORS -> DefaultBodyLimit
    let x_request_id = request_id::header();

    // Enforced by the body extractors, so an oversized payload is a JSON rejection.
    router = router.layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES));

    if cfg.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router = router.layer(from_fn(request_id::record_request_id));
    router = router.layer(request_id::create_trace_layer());
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
    router.layer(SetRequestIdLayer::new(x_request_id, request_id::MakeReqId))
}

/// Connect, migrate and serve until Ctrl-C / SIGTERM.
pub async fn run(config: AppConfig) -> Result<()> {
    let addr: SocketAddr = config
        .bind_addr()
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.bind_addr()))?;

    let db = connect_db(&config.database).await?;
    let module = Usuarios::new(db);
    module.migrate().await?;

    let router = build_router(&module, &config.server);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("HTTP server bound on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
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
    tracing::info!("HTTP server shutting down gracefully");
}
