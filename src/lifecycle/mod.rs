//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Shutdown::trigger() → every subscriber's receiver fires
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) or Shutdown::trigger() → axum graceful shutdown
//! ```
//!
//! # Design Decisions
//! - In-flight requests are allowed to finish, including their processing delay
//! - No forced-exit deadline

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::shutdown_signal;
