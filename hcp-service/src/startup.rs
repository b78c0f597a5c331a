use crate::config::HcpConfig;
use crate::handlers;
use crate::ApiDoc;
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::{http_trace_layer, request_id_middleware};
use service_core::shutdown::shutdown_signal;
use service_core::store::{self, DocumentStore};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_PATH: &str = "/.well-known/openapi.json";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/fetch-data", get(handlers::fetch_hcp_data))
        .route("/fetch-referal-data", get(handlers::fetch_referal_data))
        .route("/test", get(handlers::api_test))
        .route("/health", get(handlers::health_check))
        .merge(SwaggerUi::new("/docs").url(OPENAPI_PATH, ApiDoc::openapi()))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        // Any origin, method and header.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Connects the store without waiting on the server, then binds the
    /// listener. Only configuration and bind errors are fatal.
    pub async fn build(config: HcpConfig) -> Result<Self, AppError> {
        let store = store::connect(&config.mongodb).await;
        Self::build_with_store(config, store).await
    }

    pub async fn build_with_store(
        config: HcpConfig,
        store: Arc<dyn DocumentStore>,
    ) -> Result<Self, AppError> {
        let app = build_router(AppState { store });

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("HCP service listening on port {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
