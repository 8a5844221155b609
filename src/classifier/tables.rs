//! Keyword, analysis and suggestion tables.

use crate::classifier::types::EmotionCategory;

/// Everything the classifier knows about a single emotion.
#[derive(Debug, Clone)]
pub struct EmotionProfile {
    pub category: EmotionCategory,
    /// Lowercase trigger substrings.
    pub keywords: &'static [&'static str],
    pub analysis: &'static str,
    pub suggestions: &'static [&'static str],
}

impl EmotionProfile {
    /// Whether any keyword occurs in already-lowercased text.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(*keyword))
    }
}

/// Immutable lookup tables, one profile per category.
///
/// Indexed by [`EmotionCategory::index`], so every lookup is total.
#[derive(Debug, Clone)]
pub struct EmotionTables {
    profiles: [EmotionProfile; 6],
}

impl EmotionTables {
    /// The built-in vocabulary.
    pub fn builtin() -> Self {
        Self {
            profiles: [
                EmotionProfile {
                    category: EmotionCategory::Anxious,
                    keywords: &["nervous", "worried", "anxious", "scared", "afraid", "stressed"],
                    analysis: "Your reflection shows signs of anxiety. This is a natural response to new or challenging situations.",
                    suggestions: &[
                        "Try deep breathing exercises",
                        "Break challenges into smaller steps",
                        "Talk to someone you trust",
                    ],
                },
                EmotionProfile {
                    category: EmotionCategory::Happy,
                    keywords: &["happy", "joy", "excited", "great", "wonderful", "amazing", "love"],
                    analysis: "Your reflection radiates positivity and joy. It's wonderful to see you in such a good emotional state.",
                    suggestions: &[
                        "Share your joy with others",
                        "Take time to appreciate this moment",
                        "Use this energy for something positive",
                    ],
                },
                EmotionProfile {
                    category: EmotionCategory::Sad,
                    keywords: &["sad", "depressed", "down", "upset", "disappointed", "hurt"],
                    analysis: "Your reflection indicates sadness. Remember that it's okay to feel this way, and these feelings are temporary.",
                    suggestions: &[
                        "Allow yourself to feel these emotions",
                        "Reach out to supportive friends",
                        "Consider what might help you feel better",
                    ],
                },
                EmotionProfile {
                    category: EmotionCategory::Angry,
                    keywords: &["angry", "mad", "frustrated", "annoyed", "furious", "hate"],
                    analysis: "Your reflection shows anger or frustration. These are valid emotions that signal something needs attention.",
                    suggestions: &[
                        "Take time to cool down",
                        "Identify the root cause",
                        "Express your feelings constructively",
                    ],
                },
                EmotionProfile {
                    category: EmotionCategory::Calm,
                    keywords: &["calm", "peaceful", "relaxed", "content", "serene", "balanced"],
                    analysis: "Your reflection demonstrates a peaceful state of mind. This inner calm is valuable for well-being.",
                    suggestions: &[
                        "Maintain this peaceful state",
                        "Share your calm energy with others",
                        "Use this clarity for decision-making",
                    ],
                },
                EmotionProfile {
                    category: EmotionCategory::Confident,
                    keywords: &["confident", "strong", "capable", "ready", "determined", "proud"],
                    analysis: "Your reflection shows confidence and self-assurance. This positive mindset will serve you well.",
                    suggestions: &[
                        "Channel this confidence into action",
                        "Help others feel empowered",
                        "Set ambitious but achievable goals",
                    ],
                },
            ],
        }
    }

    /// Profile for a category.
    pub fn profile(&self, category: EmotionCategory) -> &EmotionProfile {
        &self.profiles[category.index()]
    }

    /// Profiles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &EmotionProfile> {
        self.profiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_line_up_with_categories() {
        let tables = EmotionTables::builtin();
        for category in EmotionCategory::ALL {
            assert_eq!(tables.profile(category).category, category);
        }
    }

    #[test]
    fn test_every_profile_has_three_suggestions() {
        let tables = EmotionTables::builtin();
        for profile in tables.iter() {
            assert_eq!(profile.suggestions.len(), 3, "{}", profile.category);
            assert!(!profile.analysis.is_empty());
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        let tables = EmotionTables::builtin();
        for profile in tables.iter() {
            for keyword in profile.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_matches_substrings() {
        let tables = EmotionTables::builtin();
        let sad = tables.profile(EmotionCategory::Sad);
        assert!(sad.matches("i feel let down and hurt"));
        assert!(!sad.matches("all good here"));
    }
}
