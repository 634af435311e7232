//! API server initialization

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use super::middleware;
use super::openapi::{openapi_json, swagger_ui_html};
use super::routes::{codes, health, incidents, neighborhoods};
use crate::core::CoreApp;
use crate::data::QueryExecutor;

/// Assemble every route with the shared middleware stack
pub fn build_router(executor: Arc<dyn QueryExecutor>, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/api/openapi.json", get(openapi_json))
        .route("/api/docs", get(swagger_ui_html))
        .route("/api/docs/", get(swagger_ui_html))
        .merge(health::routes(executor.clone()))
        .merge(codes::routes(executor.clone()))
        .merge(neighborhoods::routes(executor.clone()))
        .merge(incidents::routes(executor))
        .fallback(middleware::handle_404)
        .layer(CompressionLayer::new())
        .layer(middleware::cors(cors_origins))
        .layer(TraceLayer::new_for_http())
}

pub struct ApiServer {
    app: CoreApp,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        Self { app }
    }

    /// Returns CoreApp for graceful shutdown
    pub async fn start(self) -> Result<CoreApp> {
        let Self { app } = self;

        let shutdown = app.shutdown.clone();

        let host = app.config.server.host.clone();
        let port = app.config.server.port;
        let addr = SocketAddr::new(host.parse()?, port);

        let executor: Arc<dyn QueryExecutor> = app.database.clone();
        let router = build_router(executor, &app.config.server.cors_origins);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "Listening");
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        Ok(app)
    }
}
