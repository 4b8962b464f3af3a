//! Claim tracker: search and the three-step progress stepper.

use crate::claims::board::matches_search;
use crate::model::claim::{TrackedClaim, TrackingStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Pending,
    Error,
}

impl StepState {
    pub fn class(self) -> &'static str {
        match self {
            StepState::Completed => "step step-completed",
            StepState::Active => "step step-active",
            StepState::Pending => "step step-pending",
            StepState::Error => "step step-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date: Option<String>,
    pub state: StepState,
}

pub fn search_tracked<'a>(claims: &'a [TrackedClaim], term: &str) -> Vec<&'a TrackedClaim> {
    claims
        .iter()
        .filter(|c| matches_search(&c.id, &c.patient_name, term))
        .collect()
}

/// Filed, Under Review and the decision step, derived from the tracking status.
pub fn stepper(claim: &TrackedClaim) -> [Step; 3] {
    use TrackingStatus::*;

    let reviewed = claim.status != Filed;
    let decided = claim.status.is_decided();

    let filed = Step {
        key: "filed",
        title: "Filed",
        description: "Claim submitted successfully",
        date: Some(claim.date_filed.clone()),
        state: StepState::Completed,
    };
    let review = Step {
        key: "under-review",
        title: "Under Review",
        description: "Medical team is reviewing your claim",
        date: reviewed.then(|| claim.last_updated.clone()),
        state: match claim.status {
            Filed => StepState::Pending,
            UnderReview => StepState::Active,
            Approved | Rejected => StepState::Completed,
        },
    };
    let (title, description, state) = match claim.status {
        Approved => ("Approved", "Claim approved, processing payment", StepState::Completed),
        Rejected => ("Rejected", "Claim rejected, review required", StepState::Error),
        Filed | UnderReview => ("Decision Pending", "Awaiting final decision", StepState::Pending),
    };
    let decision = Step {
        key: "decision",
        title,
        description,
        date: decided.then(|| claim.last_updated.clone()),
        state,
    };

    [filed, review, decision]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn states(claim: &TrackedClaim) -> Vec<StepState> {
        stepper(claim).iter().map(|s| s.state).collect()
    }

    fn with_status(status: TrackingStatus) -> TrackedClaim {
        let mut claim = fixtures::tracked_claims().remove(0);
        claim.status = status;
        claim
    }

    #[test]
    fn filed_claim_waits_for_review() {
        let claim = with_status(TrackingStatus::Filed);
        assert_eq!(
            states(&claim),
            [StepState::Completed, StepState::Pending, StepState::Pending]
        );
        assert!(stepper(&claim)[1].date.is_none());
    }

    #[test]
    fn under_review_is_active() {
        let claim = with_status(TrackingStatus::UnderReview);
        let steps = stepper(&claim);
        assert_eq!(steps[1].state, StepState::Active);
        assert_eq!(steps[1].date.as_deref(), Some("2024-01-16"));
        assert_eq!(steps[2].title, "Decision Pending");
        assert!(steps[2].date.is_none());
    }

    #[test]
    fn decisions_complete_or_fail_the_last_step() {
        let approved = stepper(&with_status(TrackingStatus::Approved));
        assert_eq!(approved[2].state, StepState::Completed);
        assert_eq!(approved[2].title, "Approved");

        let rejected = with_status(TrackingStatus::Rejected);
        assert_eq!(
            states(&rejected),
            [StepState::Completed, StepState::Completed, StepState::Error]
        );
    }

    #[test]
    fn search_matches_id_or_patient() {
        let claims = fixtures::tracked_claims();
        let hits: Vec<_> = search_tracked(&claims, "LISA").iter().map(|c| c.id.as_str()).collect();
        assert_eq!(hits, ["CLM-005"]);
        assert_eq!(search_tracked(&claims, "clm-00").len(), 3);
    }
}
