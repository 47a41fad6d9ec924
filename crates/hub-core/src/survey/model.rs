//! Survey domain models.

use serde::{Deserialize, Serialize};

use crate::determinant::Determinant;

/// Which scale a record's `education` value is on.
///
/// The upstream data mixes a 0-1 education index with a years-of-schooling
/// placeholder for countries missing index data. The flag keeps the two
/// scales distinguishable instead of silently mixing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationSource {
    /// Education Index, 0-1, higher is better.
    Index,
    /// Average years of schooling, used where no index is available.
    PlaceholderYears,
}

/// One per-country survey data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRecord {
    /// Unique identifier for each data point.
    pub id: String,
    /// Primary filter/join key.
    pub country: String,
    /// Informational only; filtering is by country.
    pub region: String,
    pub year: i32,
    /// Overall happiness score, intended range 0-10.
    pub happiness_score: f64,
    pub gdp: f64,
    pub health_life_expectancy: f64,
    pub education: f64,
    pub education_source: EducationSource,
    pub social_support: f64,
    pub freedom_to_make_life_choices: f64,
    pub generosity: f64,
    pub perceptions_of_corruption: f64,
    /// Reserved for a future sentiment-derived index; absent from the
    /// shipped dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_happiness_index: Option<f64>,
}

/// Year filter: a concrete survey year or the "all" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearSelection {
    #[default]
    All,
    Year(i32),
}

impl YearSelection {
    /// Whether a record with the given year passes this selection.
    pub fn matches(&self, year: i32) -> bool {
        match self {
            Self::All => true,
            Self::Year(selected) => *selected == year,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl std::fmt::Display for YearSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Year(year) => write!(f, "{year}"),
        }
    }
}

// Serialized as the string "all" or a bare integer, matching the upstream
// JSON shape of the year filter.
impl Serialize for YearSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::All => serializer.serialize_str("all"),
            Self::Year(year) => serializer.serialize_i32(*year),
        }
    }
}

impl<'de> Deserialize<'de> for YearSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Year(i32),
            Sentinel(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Year(year) => Ok(Self::Year(year)),
            Raw::Sentinel(s) if s == "all" => Ok(Self::All),
            Raw::Sentinel(s) => Err(serde::de::Error::custom(format!(
                "invalid year selection: '{s}' (expected a year or \"all\")"
            ))),
        }
    }
}

/// The user's current country/year/determinant selection.
///
/// A value object owned by the presentation layer and passed by value into
/// the core on every change; each update replaces the whole state, nothing
/// is mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Selected countries; empty means all countries.
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub year: YearSelection,
    /// Determinant keys to display, in selection order.
    #[serde(default = "Determinant::all")]
    pub selected_determinants: Vec<Determinant>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            countries: Vec::new(),
            year: YearSelection::All,
            selected_determinants: Determinant::all(),
        }
    }
}

impl FilterState {
    /// The record inclusion rule: country matches (or no countries are
    /// selected) and the year matches (or the sentinel is selected).
    pub fn includes(&self, record: &SurveyRecord) -> bool {
        (self.countries.is_empty() || self.countries.iter().any(|c| c == &record.country))
            && self.year.matches(record.year)
    }

    /// Whether the selection is narrow enough to spotlight one record:
    /// exactly one country and a concrete year.
    pub fn is_spotlight(&self) -> bool {
        self.countries.len() == 1 && !self.year.is_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, year: i32) -> SurveyRecord {
        SurveyRecord {
            id: "t1".to_string(),
            country: country.to_string(),
            region: "World".to_string(),
            year,
            happiness_score: 7.0,
            gdp: 10.0,
            health_life_expectancy: 70.0,
            education: 0.9,
            education_source: EducationSource::Index,
            social_support: 0.9,
            freedom_to_make_life_choices: 0.9,
            generosity: 0.2,
            perceptions_of_corruption: 0.3,
            x_happiness_index: None,
        }
    }

    #[test]
    fn test_default_filter_includes_everything() {
        let filter = FilterState::default();
        assert!(filter.includes(&record("Finland", 2025)));
        assert!(filter.includes(&record("Chad", 1999)));
        assert_eq!(filter.selected_determinants.len(), 7);
    }

    #[test]
    fn test_includes_requires_both_country_and_year() {
        let filter = FilterState {
            countries: vec!["Finland".to_string()],
            year: YearSelection::Year(2025),
            ..FilterState::default()
        };
        assert!(filter.includes(&record("Finland", 2025)));
        assert!(!filter.includes(&record("Finland", 2024)));
        assert!(!filter.includes(&record("Denmark", 2025)));
    }

    #[test]
    fn test_is_spotlight() {
        let mut filter = FilterState {
            countries: vec!["Finland".to_string()],
            year: YearSelection::Year(2025),
            ..FilterState::default()
        };
        assert!(filter.is_spotlight());

        filter.year = YearSelection::All;
        assert!(!filter.is_spotlight());

        filter.year = YearSelection::Year(2025);
        filter.countries.push("Denmark".to_string());
        assert!(!filter.is_spotlight());

        filter.countries.clear();
        assert!(!filter.is_spotlight());
    }

    #[test]
    fn test_year_selection_serde_forms() {
        assert_eq!(
            serde_json::to_string(&YearSelection::All).unwrap(),
            "\"all\""
        );
        assert_eq!(
            serde_json::to_string(&YearSelection::Year(2025)).unwrap(),
            "2025"
        );

        let all: YearSelection = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, YearSelection::All);
        let year: YearSelection = serde_json::from_str("2025").unwrap();
        assert_eq!(year, YearSelection::Year(2025));
        assert!(serde_json::from_str::<YearSelection>("\"latest\"").is_err());
    }

    #[test]
    fn test_filter_state_json_round_trip() {
        let filter = FilterState {
            countries: vec!["Finland".to_string(), "Denmark".to_string()],
            year: YearSelection::Year(2025),
            selected_determinants: vec![
                crate::determinant::Determinant::Gdp,
                crate::determinant::Determinant::Education,
            ],
        };
        let json = serde_json::to_string(&filter).unwrap();
        assert!(json.contains("\"selectedDeterminants\":[\"gdp\",\"education\"]"));
        let back: FilterState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filter);
    }
}
