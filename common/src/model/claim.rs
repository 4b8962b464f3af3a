//! Insurance-claim demo model: board rows, tracked claims and the static
//! claim detail.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClaimType {
    PreAuthorization,
    Reimbursement,
}

impl ClaimType {
    pub fn label(self) -> &'static str {
        match self {
            ClaimType::PreAuthorization => "Pre-Authorization",
            ClaimType::Reimbursement => "Reimbursement",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ClaimType::PreAuthorization => "pre-authorization",
            ClaimType::Reimbursement => "reimbursement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 3] = [
        ClaimStatus::Pending,
        ClaimStatus::Approved,
        ClaimStatus::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }
}

/// A row of the claims board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    pub patient_name: String,
    pub claim_type: ClaimType,
    pub status: ClaimStatus,
    pub date_filed: String,
    pub amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackingStatus {
    Filed,
    UnderReview,
    Approved,
    Rejected,
}

impl TrackingStatus {
    pub fn label(self) -> &'static str {
        match self {
            TrackingStatus::Filed => "Filed",
            TrackingStatus::UnderReview => "Under Review",
            TrackingStatus::Approved => "Approved",
            TrackingStatus::Rejected => "Rejected",
        }
    }

    /// A decision has been made on the claim.
    pub fn is_decided(self) -> bool {
        matches!(self, TrackingStatus::Approved | TrackingStatus::Rejected)
    }
}

/// A claim as shown in the tracker, with progress dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedClaim {
    pub id: String,
    pub patient_name: String,
    pub claim_type: ClaimType,
    pub status: TrackingStatus,
    pub date_filed: String,
    pub amount: u64,
    pub estimated_completion: Option<String>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimDocument {
    pub name: String,
    pub upload_date: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub status: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimDetail {
    pub id: String,
    pub status: TrackingStatus,
    pub patient_name: String,
    pub age: u32,
    pub gender: String,
    pub insurance_id: String,
    pub date_filed: String,
    pub date_approved: Option<String>,
    pub claim_type: ClaimType,
    pub treatment_date: String,
    pub diagnosis: String,
    pub hospital_name: String,
    pub hospital_address: String,
    pub doctor_name: String,
    pub doctor_registration: String,
    pub specialization: String,
    pub estimated_cost: u64,
    pub approved_amount: u64,
    pub diagnosis_notes: Vec<String>,
    pub documents: Vec<ClaimDocument>,
    pub status_history: Vec<StatusEvent>,
}
