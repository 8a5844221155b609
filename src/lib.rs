//! Mock emotion analysis service library.

pub mod classifier;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use classifier::{AnalysisResult, Classifier, EmotionCategory};
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
