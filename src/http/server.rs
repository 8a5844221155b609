//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the analysis handlers
//! - Wire up middleware (tracing, body limit, request ID, CORS headers, panic capture)
//! - Bind server to listener and serve until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::post,
    Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::classifier::{AnalysisResult, Classifier, EmotionTables, RngEntropy};
use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::response::{panic_response, CORS_HEADERS};
use crate::lifecycle::signals::shutdown_signal;

/// Path of the single analysis endpoint.
pub const ANALYZE_PATH: &str = "/analyze";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Classifier,
    pub processing_delay: Duration,
    pub rng_seed: Option<u64>,
}

impl AppState {
    pub fn new(config: &ServiceConfig, tables: Arc<EmotionTables>) -> Self {
        Self {
            classifier: Classifier::new(tables),
            processing_delay: config.analysis.processing_delay(),
            rng_seed: config.analysis.rng_seed,
        }
    }

    /// Classify with a fresh entropy source owned by this request.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.classifier.classify(text, &mut RngEntropy(rng))
    }
}

/// HTTP server for the analysis API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server over the built-in tables.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_tables(config, Arc::new(EmotionTables::builtin()))
    }

    /// Create a new HTTP server over the given tables.
    pub fn with_tables(config: ServiceConfig, tables: Arc<EmotionTables>) -> Self {
        let state = AppState::new(&config, tables);
        let router = build_router(&config, state);
        Self { router, config }
    }

    /// Run the server until Ctrl+C or the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            processing_delay_ms = self.config.analysis.processing_delay_ms,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
    let mut router = Router::new()
        .route(
            ANALYZE_PATH,
            post(handlers::analyze).fallback(handlers::fallback),
        )
        .fallback(handlers::fallback)
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.security.max_body_size))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    for (name, value) in CORS_HEADERS {
        router = router.layer(SetResponseHeaderLayer::overriding(
            name,
            HeaderValue::from_static(value),
        ));
    }

    router
}
