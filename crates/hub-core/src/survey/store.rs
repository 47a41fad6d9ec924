//! Immutable survey record store and its query surface.

use std::collections::BTreeSet;

use super::model::{FilterState, SurveyRecord, YearSelection};

/// The process-wide collection of survey records.
///
/// Constructed once at startup and read-only thereafter. Every query is a
/// pure function over the resident records; repeated calls with identical
/// arguments return identical results.
#[derive(Debug, Clone)]
pub struct SurveyStore {
    records: Vec<SurveyRecord>,
}

impl SurveyStore {
    pub fn new(records: Vec<SurveyRecord>) -> Self {
        Self { records }
    }

    /// All records in their original order.
    pub fn records(&self) -> &[SurveyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct, non-blank country names, sorted ascending.
    pub fn countries(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .map(|r| r.country.as_str())
            .filter(|c| !c.trim().is_empty())
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// Distinct years sorted descending, with the `All` sentinel prepended.
    pub fn year_options(&self) -> Vec<YearSelection> {
        let years: BTreeSet<i32> = self.records.iter().map(|r| r.year).collect();
        std::iter::once(YearSelection::All)
            .chain(years.into_iter().rev().map(YearSelection::Year))
            .collect()
    }

    /// Returns the subset of records matching the filter, preserving the
    /// store's original ordering. An empty result is a valid outcome.
    pub fn evaluate(&self, filter: &FilterState) -> Vec<SurveyRecord> {
        self.records
            .iter()
            .filter(|r| filter.includes(r))
            .cloned()
            .collect()
    }

    /// Resolves the spotlight record: the first record matching the sole
    /// selected country and the concrete selected year.
    ///
    /// Intentionally stricter than [`evaluate`](Self::evaluate) - any
    /// multi-country or all-years selection resolves to `None`.
    pub fn resolve_spotlight(&self, filter: &FilterState) -> Option<SurveyRecord> {
        if !filter.is_spotlight() {
            return None;
        }
        let country = &filter.countries[0];
        self.records
            .iter()
            .find(|r| &r.country == country && filter.year.matches(r.year))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::model::EducationSource;

    fn record(id: &str, country: &str, year: i32) -> SurveyRecord {
        SurveyRecord {
            id: id.to_string(),
            country: country.to_string(),
            region: "World".to_string(),
            year,
            happiness_score: 6.0,
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

    fn store() -> SurveyStore {
        SurveyStore::new(vec![
            record("1", "Finland", 2025),
            record("2", "Denmark", 2025),
            record("3", "Finland", 2024),
            record("4", "Iceland", 2025),
        ])
    }

    #[test]
    fn test_default_filter_returns_whole_store_in_order() {
        let store = store();
        let result = store.evaluate(&FilterState::default());
        assert_eq!(result.len(), store.len());
        assert_eq!(result, store.records());
    }

    #[test]
    fn test_evaluate_by_country_preserves_order() {
        let store = store();
        let filter = FilterState {
            countries: vec!["Finland".to_string()],
            ..FilterState::default()
        };
        let result = store.evaluate(&filter);
        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_evaluate_by_year() {
        let store = store();
        let filter = FilterState {
            year: YearSelection::Year(2025),
            ..FilterState::default()
        };
        let result = store.evaluate(&filter);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|r| r.year == 2025));
    }

    #[test]
    fn test_evaluate_result_satisfies_inclusion_rule() {
        let store = store();
        let filter = FilterState {
            countries: vec!["Finland".to_string(), "Denmark".to_string()],
            year: YearSelection::Year(2025),
            ..FilterState::default()
        };
        let result = store.evaluate(&filter);
        assert!(result.len() <= store.len());
        assert!(result.iter().all(|r| filter.includes(r)));
    }

    #[test]
    fn test_evaluate_empty_result_is_valid() {
        let store = store();
        let filter = FilterState {
            countries: vec!["Atlantis".to_string()],
            ..FilterState::default()
        };
        assert!(store.evaluate(&filter).is_empty());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let store = store();
        let filter = FilterState {
            countries: vec!["Finland".to_string()],
            year: YearSelection::Year(2025),
            ..FilterState::default()
        };
        assert_eq!(store.evaluate(&filter), store.evaluate(&filter));
        assert_eq!(
            store.resolve_spotlight(&filter),
            store.resolve_spotlight(&filter)
        );
    }

    #[test]
    fn test_countries_sorted_and_distinct() {
        let store = store();
        assert_eq!(store.countries(), vec!["Denmark", "Finland", "Iceland"]);
    }

    #[test]
    fn test_countries_skips_blank_names() {
        let store = SurveyStore::new(vec![
            record("1", "Finland", 2025),
            record("2", "  ", 2025),
            record("3", "", 2025),
        ]);
        assert_eq!(store.countries(), vec!["Finland"]);
    }

    #[test]
    fn test_year_options_descending_with_sentinel() {
        let store = store();
        assert_eq!(
            store.year_options(),
            vec![
                YearSelection::All,
                YearSelection::Year(2025),
                YearSelection::Year(2024),
            ]
        );
    }

    #[test]
    fn test_resolve_spotlight_requires_single_country_and_year() {
        let store = store();

        let two_countries = FilterState {
            countries: vec!["Finland".to_string(), "Denmark".to_string()],
            year: YearSelection::Year(2025),
            ..FilterState::default()
        };
        assert_eq!(store.resolve_spotlight(&two_countries), None);

        let all_years = FilterState {
            countries: vec!["Finland".to_string()],
            year: YearSelection::All,
            ..FilterState::default()
        };
        assert_eq!(store.resolve_spotlight(&all_years), None);

        let no_countries = FilterState::default();
        assert_eq!(store.resolve_spotlight(&no_countries), None);
    }

    #[test]
    fn test_resolve_spotlight_finds_exact_match() {
        let store = store();
        let filter = FilterState {
            countries: vec!["Finland".to_string()],
            year: YearSelection::Year(2024),
            ..FilterState::default()
        };
        let spotlight = store.resolve_spotlight(&filter).unwrap();
        assert_eq!(spotlight.id, "3");

        let missing = FilterState {
            countries: vec!["Finland".to_string()],
            year: YearSelection::Year(1990),
            ..FilterState::default()
        };
        assert_eq!(store.resolve_spotlight(&missing), None);
    }

    #[test]
    fn test_spotlight_agrees_with_evaluate_on_unique_match() {
        let store = store();
        let filter = FilterState {
            countries: vec!["Denmark".to_string()],
            year: YearSelection::Year(2025),
            ..FilterState::default()
        };
        let evaluated = store.evaluate(&filter);
        assert_eq!(evaluated.len(), 1);
        assert_eq!(store.resolve_spotlight(&filter), Some(evaluated[0].clone()));
    }
}
