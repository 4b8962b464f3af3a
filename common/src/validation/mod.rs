//! Field-data validation queue.
//!
//! `ValidationQueue` is the whole view state of the validation screen:
//! the unresolved records, the active filter, the bulk selection and the
//! review sheet. The screen owns one value and drives it only through
//! [`ValidationQueue::dispatch`].
//!
//! Invariants
//! - A record is in `records` only while unresolved. Approve and reject remove it.
//! - The selection only ever holds ids visible under the current filter,
//!   and it is emptied by every resolution.

mod filter;
mod review;
mod selection;

use serde::{Deserialize, Serialize};

use crate::model::field_data::{
    highest_record_seq, record_id, record_seq, FieldDataRecord, RecordStatus,
};

pub use filter::{officers, Criterion, RecordFilter, ALL_KEY};
pub use review::{Decision, Resolution, ReviewState, Target};
pub use selection::SelectionSet;

/// Every transition the validation screen can request.
#[derive(Debug, Clone, PartialEq)]
pub enum QueueAction {
    SetOfficer(Criterion<String>),
    SetStatus(Criterion<RecordStatus>),
    SetDateFrom(String),
    SetDateTo(String),
    Toggle(String),
    ToggleAll,
    OpenReview(String),
    SetNotes(String),
    CloseReview,
    Approve(Target),
    Reject(Target),
    Enqueue(FieldDataRecord),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationQueue {
    records: Vec<FieldDataRecord>,
    filter: RecordFilter,
    selection: SelectionSet,
    review: ReviewState,
    /// Highest `FD-nnn` suffix ever held. Resolutions never lower it.
    #[serde(default)]
    last_seq: u32,
}

impl ValidationQueue {
    pub fn new(records: Vec<FieldDataRecord>) -> Self {
        let last_seq = highest_record_seq(records.iter().map(|r| r.id.as_str()));
        Self {
            records,
            last_seq,
            ..Default::default()
        }
    }

    pub fn records(&self) -> &[FieldDataRecord] {
        &self.records
    }

    pub fn filter(&self) -> &RecordFilter {
        &self.filter
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn review(&self) -> &ReviewState {
        &self.review
    }

    /// Records passing the current filter, in store order.
    pub fn visible(&self) -> Vec<&FieldDataRecord> {
        self.filter.apply(&self.records)
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible().into_iter().map(|r| r.id.as_str()).collect()
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(&self.visible_ids())
    }

    /// Officers for the filter drop-down. A currently selected officer stays
    /// listed even after all of their records were resolved.
    pub fn officer_options(&self) -> Vec<String> {
        let mut names = officers(&self.records);
        if let Criterion::Only(name) = &self.filter.officer {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }

    /// Next `FD-nnn` id for a record entering the queue. Ids of resolved
    /// records are not handed out again.
    pub fn next_id(&self) -> String {
        record_id(self.last_seq.saturating_add(1))
    }

    /// Applies `action`. Only approve and reject produce a [`Resolution`], and
    /// only when they actually removed something.
    pub fn dispatch(&mut self, action: QueueAction) -> Option<Resolution> {
        match action {
            QueueAction::SetOfficer(officer) => {
                self.filter.officer = officer;
                self.prune_selection();
            }
            QueueAction::SetStatus(status) => {
                self.filter.status = status;
                self.prune_selection();
            }
            QueueAction::SetDateFrom(date) => {
                self.filter.date_from = date;
                self.prune_selection();
            }
            QueueAction::SetDateTo(date) => {
                self.filter.date_to = date;
                self.prune_selection();
            }
            QueueAction::Toggle(id) => {
                if self.visible_ids().contains(&id.as_str()) {
                    self.selection.toggle(&id);
                }
            }
            QueueAction::ToggleAll => {
                let visible: Vec<&str> = self
                    .filter
                    .apply(&self.records)
                    .into_iter()
                    .map(|r| r.id.as_str())
                    .collect();
                self.selection.toggle_all(&visible);
            }
            QueueAction::OpenReview(id) => {
                if let Some(record) = self.records.iter().find(|r| r.id == id) {
                    self.review = ReviewState::Open {
                        record: record.clone(),
                        notes: String::new(),
                    };
                }
            }
            QueueAction::SetNotes(text) => {
                if let ReviewState::Open { notes, .. } = &mut self.review {
                    *notes = text;
                }
            }
            QueueAction::CloseReview => self.review = ReviewState::Closed,
            QueueAction::Approve(target) => return self.resolve(target, Decision::Approved),
            QueueAction::Reject(target) => return self.resolve(target, Decision::Rejected),
            QueueAction::Enqueue(record) => {
                if !self.records.iter().any(|r| r.id == record.id) {
                    if let Some(seq) = record_seq(&record.id) {
                        self.last_seq = self.last_seq.max(seq);
                    }
                    self.records.push(record);
                }
            }
        }
        None
    }

    fn resolve(&mut self, target: Target, decision: Decision) -> Option<Resolution> {
        let (requested, notes) = match target {
            Target::Record(id) => {
                let notes = match &self.review {
                    ReviewState::Open { record, notes } if record.id == id && !notes.trim().is_empty() => {
                        Some(notes.trim().to_string())
                    }
                    _ => None,
                };
                (vec![id], notes)
            }
            Target::Selection => (self.selection.ids().to_vec(), None),
        };

        let ids: Vec<String> = requested
            .into_iter()
            .filter(|id| self.records.iter().any(|r| &r.id == id))
            .collect();
        if ids.is_empty() {
            return None;
        }

        self.records.retain(|r| !ids.contains(&r.id));
        self.selection.clear();
        self.review = ReviewState::Closed;

        Some(Resolution {
            decision,
            ids,
            notes,
        })
    }

    fn prune_selection(&mut self) {
        let visible: Vec<&str> = self
            .records
            .iter()
            .filter(|r| self.filter.matches(r))
            .map(|r| r.id.as_str())
            .collect();
        self.selection.retain_visible(&visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::model::field_data::{Commodity, Unit};

    fn queue() -> ValidationQueue {
        ValidationQueue::new(fixtures::field_data())
    }

    fn store_ids(queue: &ValidationQueue) -> Vec<&str> {
        queue.records().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn filter_by_officer_then_approve_single() {
        let mut queue = ValidationQueue::new(fixtures::field_data().into_iter().take(2).collect());
        queue.dispatch(QueueAction::SetOfficer(Criterion::Only("Ahmad Fauzi".into())));
        assert_eq!(queue.visible_ids(), ["FD-001"]);

        let resolution = queue
            .dispatch(QueueAction::Approve(Target::Record("FD-001".into())))
            .unwrap();
        assert_eq!(resolution.decision, Decision::Approved);
        assert_eq!(resolution.ids, ["FD-001"]);
        assert_eq!(store_ids(&queue), ["FD-002"]);
    }

    #[test]
    fn bulk_reject_removes_selection_and_clears_it() {
        let mut queue = queue();
        queue.dispatch(QueueAction::Toggle("FD-001".into()));
        queue.dispatch(QueueAction::Toggle("FD-004".into()));
        assert_eq!(queue.selection().len(), 2);

        let resolution = queue.dispatch(QueueAction::Reject(Target::Selection)).unwrap();
        assert_eq!(resolution.decision, Decision::Rejected);
        assert_eq!(resolution.count(), 2);
        assert_eq!(store_ids(&queue), ["FD-002", "FD-003", "FD-005"]);
        assert!(queue.selection().is_empty());
    }

    #[test]
    fn resolution_shrinks_store_by_resolved_count() {
        let mut queue = queue();
        let before = queue.records().len();
        queue.dispatch(QueueAction::ToggleAll);
        queue.dispatch(QueueAction::Toggle("FD-003".into()));
        let resolution = queue.dispatch(QueueAction::Approve(Target::Selection)).unwrap();
        assert_eq!(queue.records().len(), before - resolution.count());
        assert_eq!(store_ids(&queue), ["FD-003"]);
    }

    #[test]
    fn empty_selection_resolves_nothing() {
        let mut queue = queue();
        assert!(queue.dispatch(QueueAction::Approve(Target::Selection)).is_none());
        assert!(queue.dispatch(QueueAction::Reject(Target::Record("FD-404".into()))).is_none());
        assert_eq!(queue.records().len(), 5);
    }

    #[test]
    fn toggle_all_twice_with_unchanged_filter_is_empty() {
        let mut queue = queue();
        queue.dispatch(QueueAction::SetStatus(Criterion::Only(RecordStatus::Pending)));
        queue.dispatch(QueueAction::ToggleAll);
        assert!(queue.is_all_selected());
        assert_eq!(queue.selection().ids(), ["FD-001", "FD-002", "FD-004", "FD-005"]);
        queue.dispatch(QueueAction::ToggleAll);
        assert!(queue.selection().is_empty());
    }

    #[test]
    fn narrowing_the_filter_prunes_hidden_selection() {
        let mut queue = queue();
        queue.dispatch(QueueAction::ToggleAll);
        queue.dispatch(QueueAction::SetOfficer(Criterion::Only("Budi Santoso".into())));
        assert_eq!(queue.selection().ids(), ["FD-002"]);

        // Widening again does not bring hidden ids back.
        queue.dispatch(QueueAction::SetOfficer(Criterion::All));
        assert_eq!(queue.selection().ids(), ["FD-002"]);
    }

    #[test]
    fn toggle_ignores_hidden_records() {
        let mut queue = queue();
        queue.dispatch(QueueAction::SetDateFrom("2025-11-07".into()));
        queue.dispatch(QueueAction::Toggle("FD-001".into()));
        assert!(queue.selection().is_empty());
    }

    #[test]
    fn review_resets_notes_and_carries_them_into_resolution() {
        let mut queue = queue();
        queue.dispatch(QueueAction::OpenReview("FD-002".into()));
        queue.dispatch(QueueAction::SetNotes("Sesuai timbangan TPI".into()));
        assert_eq!(queue.review().notes(), "Sesuai timbangan TPI");

        queue.dispatch(QueueAction::OpenReview("FD-003".into()));
        assert_eq!(queue.review().notes(), "");
        assert_eq!(queue.review().record().map(|r| r.id.as_str()), Some("FD-003"));

        queue.dispatch(QueueAction::SetNotes("  foto kurang jelas ".into()));
        let resolution = queue
            .dispatch(QueueAction::Reject(Target::Record("FD-003".into())))
            .unwrap();
        assert_eq!(resolution.notes.as_deref(), Some("foto kurang jelas"));
        assert!(!queue.review().is_open());
    }

    #[test]
    fn single_approve_also_clears_bulk_selection() {
        let mut queue = queue();
        queue.dispatch(QueueAction::Toggle("FD-004".into()));
        queue.dispatch(QueueAction::OpenReview("FD-001".into()));
        queue.dispatch(QueueAction::Approve(Target::Record("FD-001".into())));
        assert!(queue.selection().is_empty());
        assert_eq!(queue.records().len(), 4);
    }

    #[test]
    fn open_review_for_unknown_id_stays_closed() {
        let mut queue = queue();
        queue.dispatch(QueueAction::OpenReview("FD-404".into()));
        assert!(!queue.review().is_open());
        queue.dispatch(QueueAction::SetNotes("ignored".into()));
        assert_eq!(queue.review().notes(), "");
    }

    #[test]
    fn close_review_resolves_nothing() {
        let mut queue = queue();
        queue.dispatch(QueueAction::OpenReview("FD-001".into()));
        queue.dispatch(QueueAction::CloseReview);
        assert!(!queue.review().is_open());
        assert_eq!(queue.records().len(), 5);
    }

    #[test]
    fn enqueue_appends_and_skips_duplicate_ids() {
        let mut queue = queue();
        let record = FieldDataRecord {
            id: queue.next_id(),
            date: "2025-11-09".into(),
            sub_district: "Klirong".into(),
            village: "Soko".into(),
            commodity: Commodity::Rajungan,
            quantity: 12.5,
            unit: Unit::Keranjang,
            reported_by: "Ahmad Fauzi".into(),
            status: RecordStatus::Pending,
            notes: None,
        };
        assert_eq!(record.id, "FD-006");
        queue.dispatch(QueueAction::Enqueue(record.clone()));
        queue.dispatch(QueueAction::Enqueue(record));
        assert_eq!(queue.records().len(), 6);
        assert_eq!(queue.next_id(), "FD-007");
    }

    #[test]
    fn resolved_ids_are_not_handed_out_again() {
        let mut queue = queue();
        queue
            .dispatch(QueueAction::Approve(Target::Record("FD-005".into())))
            .unwrap();
        assert_eq!(queue.next_id(), "FD-006");

        let json = serde_json::to_string(&queue).unwrap();
        let restored: ValidationQueue = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.next_id(), "FD-006");
    }

    #[test]
    fn next_id_saturates_at_the_largest_suffix() {
        let mut record = fixtures::field_data().remove(0);
        record.id = "FD-4294967295".into();
        let queue = ValidationQueue::new(vec![record]);
        assert_eq!(queue.next_id(), "FD-4294967295");
    }

    #[test]
    fn officer_options_keep_selected_officer() {
        let mut queue = queue();
        queue.dispatch(QueueAction::SetOfficer(Criterion::Only("Dewi Lestari".into())));
        queue.dispatch(QueueAction::Approve(Target::Record("FD-004".into())));
        assert!(queue.visible().is_empty());
        assert_eq!(queue.officer_options(), ["Ahmad Fauzi", "Budi Santoso", "Dewi Lestari"]);
    }

    #[test]
    fn view_state_survives_a_json_snapshot() {
        let mut queue = queue();
        queue.dispatch(QueueAction::SetStatus(Criterion::Only(RecordStatus::Draft)));
        queue.dispatch(QueueAction::ToggleAll);
        queue.dispatch(QueueAction::OpenReview("FD-003".into()));

        let json = serde_json::to_string(&queue).unwrap();
        let restored: ValidationQueue = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, queue);
    }
}
