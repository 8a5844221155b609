//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (one task per connection via axum::serve)
//!     → server.rs (layers: CORS headers, request ID, trace, panic capture, body limit)
//!     → handlers.rs (route: POST /analyze, OPTIONS preflight, 404 fallback)
//!     → request.rs (decode, trim, validate)
//!     → classifier (pure)
//!     → response.rs (pretty JSON, error taxonomy)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::AnalysisRequest;
pub use response::{ApiError, ErrorBody};
pub use server::{AppState, HttpServer, ANALYZE_PATH};
