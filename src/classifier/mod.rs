//! Keyword-based emotion classification.
//!
//! # Data Flow
//! ```text
//! trimmed text
//!     → engine.rs (lowercase, keyword scan in declared order)
//!     → random fallback when nothing matched (Entropy)
//!     → confidence scoring + jitter (Entropy)
//!     → tables.rs (analysis sentence, suggestions)
//!     → AnalysisResult
//! ```
//!
//! # Design Decisions
//! - Tables are built once and shared via Arc; nothing here is mutable
//! - Classification is total: the HTTP layer owns all error generation
//! - Randomness is injected so results can be pinned in tests

pub mod engine;
pub mod tables;
pub mod types;

pub use engine::{Classifier, Entropy, RngEntropy};
pub use tables::{EmotionProfile, EmotionTables};
pub use types::{AnalysisResult, EmotionCategory};
