use serde::{Deserialize, Serialize};

use crate::model::field_data::{FieldDataRecord, RecordStatus};

/// Value of the `<select>` option that disables a criterion.
pub const ALL_KEY: &str = "all";

/// A single filter criterion: either everything passes, or only one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion<T> {
    All,
    Only(T),
}

impl<T> Default for Criterion<T> {
    fn default() -> Self {
        Criterion::All
    }
}

impl<T: PartialEq> Criterion<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Criterion::All => true,
            Criterion::Only(expected) => expected == value,
        }
    }
}

impl Criterion<String> {
    pub fn from_select(value: &str) -> Self {
        if value == ALL_KEY || value.is_empty() {
            Criterion::All
        } else {
            Criterion::Only(value.to_string())
        }
    }

    pub fn select_value(&self) -> String {
        match self {
            Criterion::All => ALL_KEY.to_string(),
            Criterion::Only(value) => value.clone(),
        }
    }
}

impl Criterion<RecordStatus> {
    /// Unknown keys fall back to `All`.
    pub fn from_select(value: &str) -> Self {
        RecordStatus::from_key(value).map_or(Criterion::All, Criterion::Only)
    }

    pub fn select_value(&self) -> String {
        match self {
            Criterion::All => ALL_KEY.to_string(),
            Criterion::Only(status) => status.key().to_string(),
        }
    }
}

/// Officer, status and date-range criteria for the validation table.
///
/// Date bounds are inclusive and compared as ISO `YYYY-MM-DD` strings; an
/// empty bound is unbounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub officer: Criterion<String>,
    pub status: Criterion<RecordStatus>,
    pub date_from: String,
    pub date_to: String,
}

impl RecordFilter {
    pub fn matches(&self, record: &FieldDataRecord) -> bool {
        self.officer.admits(&record.reported_by)
            && self.status.admits(&record.status)
            && (self.date_from.is_empty() || record.date.as_str() >= self.date_from.as_str())
            && (self.date_to.is_empty() || record.date.as_str() <= self.date_to.as_str())
    }

    pub fn apply<'a>(&self, records: &'a [FieldDataRecord]) -> Vec<&'a FieldDataRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Distinct reporting officers in first-seen order.
pub fn officers(records: &[FieldDataRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        if !names.contains(&record.reported_by) {
            names.push(record.reported_by.clone());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn ids(records: Vec<&FieldDataRecord>) -> Vec<&str> {
        records.into_iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_admits_everything() {
        let records = fixtures::field_data();
        assert_eq!(RecordFilter::default().apply(&records).len(), records.len());
    }

    #[test]
    fn officer_is_exact_match() {
        let records = fixtures::field_data();
        let filter = RecordFilter {
            officer: Criterion::Only("Ahmad Fauzi".into()),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&records)), ["FD-001", "FD-003", "FD-005"]);

        let filter = RecordFilter {
            officer: Criterion::Only("ahmad fauzi".into()),
            ..Default::default()
        };
        assert!(filter.apply(&records).is_empty());
    }

    #[test]
    fn criteria_combine_with_and() {
        let records = fixtures::field_data();
        let filter = RecordFilter {
            officer: Criterion::Only("Ahmad Fauzi".into()),
            status: Criterion::Only(RecordStatus::Pending),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&records)), ["FD-001", "FD-005"]);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let records = fixtures::field_data();
        let filter = RecordFilter {
            date_from: "2025-11-06".into(),
            date_to: "2025-11-06".into(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&records)), ["FD-002", "FD-003"]);

        let filter = RecordFilter {
            date_from: "2025-11-07".into(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&records)), ["FD-004", "FD-005"]);

        let filter = RecordFilter {
            date_to: "2025-11-05".into(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&records)), ["FD-001"]);
    }

    #[test]
    fn every_result_matches_every_criterion() {
        let records = fixtures::field_data();
        let officers = officers(&records);
        for officer in officers.iter().map(|o| Criterion::Only(o.clone())).chain([Criterion::All]) {
            for status in RecordStatus::ALL.map(Criterion::Only).into_iter().chain([Criterion::All]) {
                let filter = RecordFilter {
                    officer: officer.clone(),
                    status: status.clone(),
                    date_from: "2025-11-06".into(),
                    date_to: String::new(),
                };
                for record in &records {
                    let expected = officer.admits(&record.reported_by)
                        && status.admits(&record.status)
                        && record.date.as_str() >= "2025-11-06";
                    assert_eq!(filter.matches(record), expected, "{}", record.id);
                }
            }
        }
    }

    #[test]
    fn select_values() {
        assert_eq!(Criterion::<String>::from_select("all"), Criterion::All);
        assert_eq!(
            Criterion::<String>::from_select("Dewi Lestari"),
            Criterion::Only("Dewi Lestari".to_string())
        );
        assert_eq!(
            Criterion::<RecordStatus>::from_select("draft"),
            Criterion::Only(RecordStatus::Draft)
        );
        assert_eq!(Criterion::<RecordStatus>::from_select("bogus"), Criterion::All);
        assert_eq!(Criterion::Only(RecordStatus::Pending).select_value(), "pending");
    }

    #[test]
    fn officers_are_distinct_in_first_seen_order() {
        let records = fixtures::field_data();
        assert_eq!(officers(&records), ["Ahmad Fauzi", "Budi Santoso", "Dewi Lestari"]);
    }
}
