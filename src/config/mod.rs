//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → copied into AppState at startup
//! ```
//!
//! # Design Decisions
//! - Every field has a default; running with no file reproduces the reference service
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AnalysisConfig, ListenerConfig, ObservabilityConfig, SecurityConfig, ServiceConfig};
pub use validation::{validate_config, ValidationError};
