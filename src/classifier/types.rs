//! Classification result types.

use serde::Serialize;

/// The closed set of emotions the classifier can report.
///
/// Declaration order is significant: when several categories match, the
/// earliest one becomes the primary emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EmotionCategory {
    Anxious,
    Happy,
    Sad,
    Angry,
    Calm,
    Confident,
}

impl EmotionCategory {
    /// All categories in declaration order.
    pub const ALL: [EmotionCategory; 6] = [
        EmotionCategory::Anxious,
        EmotionCategory::Happy,
        EmotionCategory::Sad,
        EmotionCategory::Angry,
        EmotionCategory::Calm,
        EmotionCategory::Confident,
    ];

    /// Position of this category in [`EmotionCategory::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Title-cased display label.
    pub fn label(self) -> &'static str {
        match self {
            EmotionCategory::Anxious => "Anxious",
            EmotionCategory::Happy => "Happy",
            EmotionCategory::Sad => "Sad",
            EmotionCategory::Angry => "Angry",
            EmotionCategory::Calm => "Calm",
            EmotionCategory::Confident => "Confident",
        }
    }
}

impl std::fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of analysing one reflection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Primary emotion, serialized title-cased (e.g. "Happy").
    pub emotion: EmotionCategory,
    /// Synthetic display score, rounded to two decimals, never above 0.95.
    pub confidence: f64,
    /// Canned explanation for the primary emotion.
    pub analysis: String,
    /// Canned suggestions for the primary emotion, in display order.
    pub suggestions: Vec<String>,
}
