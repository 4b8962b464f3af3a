use serde::{Deserialize, Serialize};

use crate::model::field_data::FieldDataRecord;

/// The review sheet: closed, or open on one record with the verifier's notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum ReviewState {
    #[default]
    Closed,
    Open {
        record: FieldDataRecord,
        notes: String,
    },
}

impl ReviewState {
    pub fn is_open(&self) -> bool {
        matches!(self, ReviewState::Open { .. })
    }

    pub fn record(&self) -> Option<&FieldDataRecord> {
        match self {
            ReviewState::Open { record, .. } => Some(record),
            ReviewState::Closed => None,
        }
    }

    pub fn notes(&self) -> &str {
        match self {
            ReviewState::Open { notes, .. } => notes,
            ReviewState::Closed => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Approved,
    Rejected,
}

/// What an approve/reject applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// The record opened in the review sheet.
    Record(String),
    /// Every id in the selection set.
    Selection,
}

/// Outcome of a resolution, handed back to the screen for the toast and log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub decision: Decision,
    pub ids: Vec<String>,
    /// Verification notes, when a single opened record was resolved with notes.
    pub notes: Option<String>,
}

impl Resolution {
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn title(&self) -> &'static str {
        match self.decision {
            Decision::Approved => "Data disetujui",
            Decision::Rejected => "Data ditolak",
        }
    }

    pub fn description(&self) -> String {
        match self.decision {
            Decision::Approved => {
                format!("{} record telah divalidasi dan disetujui.", self.count())
            }
            Decision::Rejected => format!("{} record telah ditolak.", self.count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_messages() {
        let approved = Resolution {
            decision: Decision::Approved,
            ids: vec!["FD-001".into(), "FD-004".into()],
            notes: None,
        };
        assert_eq!(approved.title(), "Data disetujui");
        assert_eq!(approved.description(), "2 record telah divalidasi dan disetujui.");

        let rejected = Resolution {
            decision: Decision::Rejected,
            ids: vec!["FD-002".into()],
            notes: Some("Kuantitas tidak wajar".into()),
        };
        assert_eq!(rejected.title(), "Data ditolak");
        assert_eq!(rejected.description(), "1 record telah ditolak.");
    }

    #[test]
    fn closed_review_has_no_record_or_notes() {
        let review = ReviewState::default();
        assert!(!review.is_open());
        assert!(review.record().is_none());
        assert_eq!(review.notes(), "");
    }
}
