//! Classification and confidence scoring.

use std::sync::Arc;

use rand::Rng;

use crate::classifier::tables::EmotionTables;
use crate::classifier::types::{AnalysisResult, EmotionCategory};

/// Base confidence before length and keyword adjustments.
const BASE_CONFIDENCE: f64 = 0.6;
/// Added per 1000 characters of input.
const LENGTH_WEIGHT: f64 = 0.2;
/// Added per detected category.
const KEYWORD_BONUS: f64 = 0.1;
/// Half-width of the uniform jitter applied to every score.
const JITTER_SPREAD: f64 = 0.1;
/// Upper clamp; no lower clamp is applied.
const MAX_CONFIDENCE: f64 = 0.95;

/// Source of the two random decisions the classifier makes.
pub trait Entropy {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform value in `-spread..spread`.
    fn jitter(&mut self, spread: f64) -> f64;
}

/// [`Entropy`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngEntropy<R>(pub R);

impl<R: Rng> Entropy for RngEntropy<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    fn jitter(&mut self, spread: f64) -> f64 {
        self.0.gen_range(-spread..spread)
    }
}

/// Keyword-scan classifier over shared, read-only tables.
#[derive(Debug, Clone)]
pub struct Classifier {
    tables: Arc<EmotionTables>,
}

impl Classifier {
    /// Create a classifier over the given tables.
    pub fn new(tables: Arc<EmotionTables>) -> Self {
        Self { tables }
    }

    /// Classifier over the built-in vocabulary.
    pub fn builtin() -> Self {
        Self::new(Arc::new(EmotionTables::builtin()))
    }

    pub fn tables(&self) -> &EmotionTables {
        &self.tables
    }

    /// Categories whose keywords occur in `text`, in declaration order.
    pub fn detect(&self, text: &str) -> Vec<EmotionCategory> {
        let lowered = text.to_lowercase();
        self.tables
            .iter()
            .filter(|profile| profile.matches(&lowered))
            .map(|profile| profile.category)
            .collect()
    }

    /// Classify a reflection. Never fails.
    pub fn classify<E: Entropy + ?Sized>(&self, text: &str, entropy: &mut E) -> AnalysisResult {
        let mut detected = self.detect(text);
        if detected.is_empty() {
            let all = EmotionCategory::ALL;
            detected.push(all[entropy.pick_index(all.len())]);
        }

        let primary = detected[0];
        let confidence = score(text.chars().count(), detected.len(), entropy.jitter(JITTER_SPREAD));
        let profile = self.tables.profile(primary);

        AnalysisResult {
            emotion: primary,
            confidence,
            analysis: profile.analysis.to_string(),
            suggestions: profile.suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Synthetic confidence for a text of `chars` characters with `detected` categories.
fn score(chars: usize, detected: usize, jitter: f64) -> f64 {
    let base = BASE_CONFIDENCE + (chars as f64 / 1000.0) * LENGTH_WEIGHT;
    let bonus = detected as f64 * KEYWORD_BONUS;
    let confidence = (base + bonus + jitter).min(MAX_CONFIDENCE);
    (confidence * 100.0).round() / 100.0
}
