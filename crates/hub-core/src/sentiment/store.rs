//! Immutable sentiment group store and its query surface.

use std::collections::BTreeSet;

use strum::IntoEnumIterator;

use super::model::{SentimentCategory, SentimentGroupRecord, SentimentSlice};

/// The process-wide collection of per-group sentiment breakdowns.
#[derive(Debug, Clone)]
pub struct SentimentStore {
    records: Vec<SentimentGroupRecord>,
}

impl SentimentStore {
    pub fn new(records: Vec<SentimentGroupRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SentimentGroupRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct group names, sorted ascending.
    pub fn groups(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.group.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }

    /// Exact, case-sensitive lookup. `None` for blank or unmatched names
    /// means "nothing to display", not an error.
    pub fn lookup(&self, group: &str) -> Option<&SentimentGroupRecord> {
        if group.trim().is_empty() {
            return None;
        }
        self.records.iter().find(|r| r.group == group)
    }

    /// The chart-ready four-way split for a group, in fixed category order,
    /// with zero-valued slices dropped. Empty when the group is unknown.
    pub fn breakdown(&self, group: &str) -> Vec<SentimentSlice> {
        let Some(record) = self.lookup(group) else {
            return Vec::new();
        };
        SentimentCategory::iter()
            .filter_map(|category| {
                let share = record.share(category);
                (share > 0.0).then_some(SentimentSlice { category, share })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SentimentStore {
        SentimentStore::new(vec![
            SentimentGroupRecord {
                group: "Beta".to_string(),
                positive: 0.25,
                negative: 0.25,
                neutral: 0.25,
                irrelevant: 0.25,
            },
            SentimentGroupRecord {
                group: "Alpha".to_string(),
                positive: 0.5,
                negative: 0.3,
                neutral: 0.0,
                irrelevant: 0.2,
            },
        ])
    }

    #[test]
    fn test_groups_sorted_ascending() {
        assert_eq!(store().groups(), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        let store = store();
        assert!(store.lookup("Alpha").is_some());
        assert!(store.lookup("alpha").is_none());
        assert!(store.lookup("Gamma").is_none());
        assert!(store.lookup("").is_none());
        assert!(store.lookup("   ").is_none());
    }

    #[test]
    fn test_breakdown_drops_zero_slices() {
        let slices = store().breakdown("Alpha");
        let categories: Vec<SentimentCategory> = slices.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                SentimentCategory::Positive,
                SentimentCategory::Negative,
                SentimentCategory::Irrelevant,
            ]
        );
        assert!(slices.iter().all(|s| s.share > 0.0));
    }

    #[test]
    fn test_breakdown_keeps_category_order() {
        let slices = store().breakdown("Beta");
        let categories: Vec<SentimentCategory> = slices.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                SentimentCategory::Positive,
                SentimentCategory::Negative,
                SentimentCategory::Neutral,
                SentimentCategory::Irrelevant,
            ]
        );
    }

    #[test]
    fn test_breakdown_unknown_group_is_empty() {
        assert!(store().breakdown("Gamma").is_empty());
        assert!(store().breakdown("").is_empty());
    }
}
