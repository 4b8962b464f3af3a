use crate::model::claim::{Claim, ClaimStatus};

/// Status tab of the claims board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaimTab {
    #[default]
    All,
    Status(ClaimStatus),
}

impl ClaimTab {
    pub const ALL: [ClaimTab; 4] = [
        ClaimTab::All,
        ClaimTab::Status(ClaimStatus::Pending),
        ClaimTab::Status(ClaimStatus::Approved),
        ClaimTab::Status(ClaimStatus::Rejected),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ClaimTab::All => "All Claims",
            ClaimTab::Status(status) => status.label(),
        }
    }

    fn admits(self, claim: &Claim) -> bool {
        match self {
            ClaimTab::All => true,
            ClaimTab::Status(status) => claim.status == status,
        }
    }
}

/// Case-insensitive substring search over patient name and claim id.
pub fn matches_search(id: &str, patient_name: &str, term: &str) -> bool {
    let term = term.to_lowercase();
    patient_name.to_lowercase().contains(&term) || id.to_lowercase().contains(&term)
}

pub fn filter_claims<'a>(claims: &'a [Claim], tab: ClaimTab, term: &str) -> Vec<&'a Claim> {
    claims
        .iter()
        .filter(|c| tab.admits(c) && matches_search(&c.id, &c.patient_name, term))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClaimCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn count_claims(claims: &[Claim]) -> ClaimCounts {
    claims.iter().fold(
        ClaimCounts {
            total: claims.len(),
            ..Default::default()
        },
        |mut counts, claim| {
            match claim.status {
                ClaimStatus::Pending => counts.pending += 1,
                ClaimStatus::Approved => counts.approved += 1,
                ClaimStatus::Rejected => counts.rejected += 1,
            }
            counts
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn ids(claims: Vec<&Claim>) -> Vec<&str> {
        claims.into_iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn tab_filters_by_status() {
        let claims = fixtures::claims();
        let pending = filter_claims(&claims, ClaimTab::Status(ClaimStatus::Pending), "");
        assert_eq!(ids(pending), ["CLM-001", "CLM-005"]);
        assert_eq!(filter_claims(&claims, ClaimTab::All, "").len(), 5);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_id() {
        let claims = fixtures::claims();
        assert_eq!(ids(filter_claims(&claims, ClaimTab::All, "CHEN")), ["CLM-002"]);
        assert_eq!(ids(filter_claims(&claims, ClaimTab::All, "clm-004")), ["CLM-004"]);
        assert!(filter_claims(&claims, ClaimTab::Status(ClaimStatus::Rejected), "lisa").is_empty());
    }

    #[test]
    fn counts_per_status() {
        let counts = count_claims(&fixtures::claims());
        assert_eq!(
            counts,
            ClaimCounts {
                total: 5,
                pending: 2,
                approved: 2,
                rejected: 1
            }
        );
    }
}
