//! Sentiment domain models.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// The four sentiment categories tracked per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
    Irrelevant,
}

impl SentimentCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Irrelevant => "Irrelevant",
        }
    }
}

/// Aggregate sentiment breakdown for one named group of social-media posts.
///
/// The four fractions are shares of the group's total posts and are expected
/// to sum to ~1.0; the model does not validate or normalize this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentGroupRecord {
    pub group: String,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub irrelevant: f64,
}

impl SentimentGroupRecord {
    /// The share for one category.
    pub fn share(&self, category: SentimentCategory) -> f64 {
        match category {
            SentimentCategory::Positive => self.positive,
            SentimentCategory::Negative => self.negative,
            SentimentCategory::Neutral => self.neutral,
            SentimentCategory::Irrelevant => self.irrelevant,
        }
    }
}

/// One chart-ready slice of a group's breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSlice {
    pub category: SentimentCategory,
    pub share: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_share_reads_matching_field() {
        let record = SentimentGroupRecord {
            group: "Test".to_string(),
            positive: 0.1,
            negative: 0.2,
            neutral: 0.3,
            irrelevant: 0.4,
        };
        assert_eq!(record.share(SentimentCategory::Positive), 0.1);
        assert_eq!(record.share(SentimentCategory::Irrelevant), 0.4);
    }

    #[test]
    fn test_category_serde_is_lowercase() {
        for category in SentimentCategory::iter() {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label().to_lowercase()));
        }
    }
}
