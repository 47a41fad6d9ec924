//! Determinant metadata registry.
//!
//! A fixed mapping from each social-determinant key to its display metadata
//! and the survey field it reads. This is configuration data enumerated
//! statically; the chart layer decides what to render per selected key.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::survey::SurveyRecord;

/// The seven social determinants tracked alongside the happiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum Determinant {
    Gdp,
    HealthLifeExpectancy,
    Education,
    SocialSupport,
    FreedomToMakeLifeChoices,
    Generosity,
    PerceptionsOfCorruption,
}

/// Display metadata for a determinant (or the happiness score itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeterminantInfo {
    /// Stable camelCase key, matching the serialized field name.
    pub key: &'static str,
    pub label: &'static str,
    /// Icon reference for the presentation layer.
    pub icon: &'static str,
    pub description: &'static str,
}

/// Metadata for the happiness score, used for chart axes.
pub const HAPPINESS_SCORE_INFO: DeterminantInfo = DeterminantInfo {
    key: "happinessScore",
    label: "Happiness Score",
    icon: "bar-chart-big",
    description: "Overall happiness score based on survey data.",
};

const GDP_INFO: DeterminantInfo = DeterminantInfo {
    key: "gdp",
    label: "GDP per Capita",
    icon: "dollar-sign",
    description: "Gross Domestic Product per capita, a measure of economic output.",
};

const HEALTH_LIFE_EXPECTANCY_INFO: DeterminantInfo = DeterminantInfo {
    key: "healthLifeExpectancy",
    label: "Health & Life Expectancy",
    icon: "heart-pulse",
    description: "Average number of years a person can expect to live in good health.",
};

const EDUCATION_INFO: DeterminantInfo = DeterminantInfo {
    key: "education",
    label: "Education Level",
    icon: "graduation-cap",
    description: "Education Index (score 0-1, higher is better). Records flagged as placeholder \
                  carry years of schooling instead, on a different scale.",
};

const SOCIAL_SUPPORT_INFO: DeterminantInfo = DeterminantInfo {
    key: "socialSupport",
    label: "Social Support",
    icon: "users",
    description: "Having friends or relatives to count on in times of trouble.",
};

const FREEDOM_INFO: DeterminantInfo = DeterminantInfo {
    key: "freedomToMakeLifeChoices",
    label: "Freedom of Choice",
    icon: "globe",
    description: "Freedom to make life choices.",
};

const GENEROSITY_INFO: DeterminantInfo = DeterminantInfo {
    key: "generosity",
    label: "Generosity",
    icon: "gift",
    description: "Generosity of people in the country.",
};

const CORRUPTION_INFO: DeterminantInfo = DeterminantInfo {
    key: "perceptionsOfCorruption",
    label: "Corruption Perception",
    icon: "search-slash",
    description: "Perceptions of corruption in government and business.",
};

impl Determinant {
    /// All determinants in registry order.
    pub fn all() -> Vec<Determinant> {
        Self::iter().collect()
    }

    /// Resolves a stable key back to its determinant.
    pub fn from_key(key: &str) -> Option<Determinant> {
        Self::iter().find(|d| d.info().key == key)
    }

    /// Static display metadata for this determinant.
    pub fn info(&self) -> &'static DeterminantInfo {
        match self {
            Self::Gdp => &GDP_INFO,
            Self::HealthLifeExpectancy => &HEALTH_LIFE_EXPECTANCY_INFO,
            Self::Education => &EDUCATION_INFO,
            Self::SocialSupport => &SOCIAL_SUPPORT_INFO,
            Self::FreedomToMakeLifeChoices => &FREEDOM_INFO,
            Self::Generosity => &GENEROSITY_INFO,
            Self::PerceptionsOfCorruption => &CORRUPTION_INFO,
        }
    }

    /// Reads this determinant's value from a survey record.
    pub fn value_of(&self, record: &SurveyRecord) -> f64 {
        match self {
            Self::Gdp => record.gdp,
            Self::HealthLifeExpectancy => record.health_life_expectancy,
            Self::Education => record.education,
            Self::SocialSupport => record.social_support,
            Self::FreedomToMakeLifeChoices => record.freedom_to_make_life_choices,
            Self::Generosity => record.generosity,
            Self::PerceptionsOfCorruption => record.perceptions_of_corruption,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::survey_store;

    #[test]
    fn test_registry_covers_seven_determinants() {
        assert_eq!(Determinant::all().len(), 7);
    }

    #[test]
    fn test_key_round_trip() {
        for determinant in Determinant::all() {
            assert_eq!(
                Determinant::from_key(determinant.info().key),
                Some(determinant)
            );
        }
        assert_eq!(Determinant::from_key("happinessScore"), None);
        assert_eq!(Determinant::from_key(""), None);
    }

    #[test]
    fn test_serde_keys_match_registry_keys() {
        for determinant in Determinant::all() {
            let serialized = serde_json::to_string(&determinant).unwrap();
            assert_eq!(serialized, format!("\"{}\"", determinant.info().key));
        }
    }

    #[test]
    fn test_value_of_reads_matching_field() {
        let finland = survey_store()
            .records()
            .iter()
            .find(|r| r.country == "Finland")
            .unwrap();
        assert_eq!(Determinant::Gdp.value_of(finland), finland.gdp);
        assert_eq!(
            Determinant::PerceptionsOfCorruption.value_of(finland),
            finland.perceptions_of_corruption
        );
        assert_eq!(Determinant::Education.value_of(finland), finland.education);
    }

    #[test]
    fn test_happiness_score_info() {
        assert_eq!(HAPPINESS_SCORE_INFO.key, "happinessScore");
        assert_eq!(HAPPINESS_SCORE_INFO.label, "Happiness Score");
    }
}
