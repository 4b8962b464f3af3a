//! In-memory mock data the portal starts from. Nothing here is persisted.

use crate::model::claim::{
    Claim, ClaimDetail, ClaimDocument, ClaimStatus, ClaimType, StatusEvent, TrackedClaim,
    TrackingStatus,
};
use crate::model::field_data::{Commodity, FieldDataRecord, RecordStatus, Unit};
use crate::model::user::{Role, User};

/// Officer signed in on this device. Filled into every new field record.
pub const CURRENT_OFFICER: &str = "Ahmad Fauzi";

fn record(
    id: &str,
    date: &str,
    sub_district: &str,
    village: &str,
    commodity: Commodity,
    quantity: f64,
    reported_by: &str,
    status: RecordStatus,
) -> FieldDataRecord {
    FieldDataRecord {
        id: id.to_string(),
        date: date.to_string(),
        sub_district: sub_district.to_string(),
        village: village.to_string(),
        commodity,
        quantity,
        unit: Unit::Kg,
        reported_by: reported_by.to_string(),
        status,
        notes: None,
    }
}

pub fn field_data() -> Vec<FieldDataRecord> {
    use Commodity::*;
    use RecordStatus::*;
    vec![
        record("FD-001", "2025-11-05", "Petanahan", "Jladri", IkanBandeng, 450.0, "Ahmad Fauzi", Pending),
        record("FD-002", "2025-11-06", "Ayah", "Karangbolong", UdangVaname, 280.0, "Budi Santoso", Pending),
        record("FD-003", "2025-11-06", "Puring", "Tanjungsari", IkanNila, 320.0, "Ahmad Fauzi", Draft),
        record("FD-004", "2025-11-07", "Buayan", "Sidoharjo", IkanLele, 520.0, "Dewi Lestari", Pending),
        record("FD-005", "2025-11-07", "Mirit", "Jati", IkanGurame, 180.0, "Ahmad Fauzi", Pending),
    ]
}

fn user(id: &str, name: &str, email: &str, role: Role, last_login: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        last_login: last_login.to_string(),
    }
}

pub fn users() -> Vec<User> {
    vec![
        user("U-001", "Dr. Siti Aminah", "siti.aminah@dinlutkan.kebumen.go.id", Role::ProjectManager, "2025-11-08 09:15"),
        user("U-002", "Ahmad Fauzi", "ahmad.fauzi@dinlutkan.kebumen.go.id", Role::FieldOfficer, "2025-11-08 08:30"),
        user("U-003", "Budi Santoso", "budi.santoso@dinlutkan.kebumen.go.id", Role::FieldOfficer, "2025-11-07 14:20"),
        user("U-004", "Dewi Lestari", "dewi.lestari@dinlutkan.kebumen.go.id", Role::DataAnalyst, "2025-11-08 10:45"),
        user("U-005", "Eko Prasetyo", "eko.prasetyo@dinlutkan.kebumen.go.id", Role::Programmer, "2025-11-08 07:00"),
        user("U-006", "Fitri Handayani", "fitri.handayani@dinlutkan.kebumen.go.id", Role::Validator, "2025-11-08 11:20"),
    ]
}

fn claim(id: &str, patient: &str, claim_type: ClaimType, status: ClaimStatus, date: &str, amount: u64) -> Claim {
    Claim {
        id: id.to_string(),
        patient_name: patient.to_string(),
        claim_type,
        status,
        date_filed: date.to_string(),
        amount,
    }
}

pub fn claims() -> Vec<Claim> {
    use ClaimStatus::*;
    use ClaimType::*;
    vec![
        claim("CLM-001", "Sarah Johnson", PreAuthorization, Pending, "2024-01-15", 2500),
        claim("CLM-002", "Michael Chen", Reimbursement, Approved, "2024-01-14", 1800),
        claim("CLM-003", "Emily Davis", PreAuthorization, Rejected, "2024-01-13", 3200),
        claim("CLM-004", "Robert Wilson", Reimbursement, Approved, "2024-01-12", 950),
        claim("CLM-005", "Lisa Anderson", PreAuthorization, Pending, "2024-01-11", 4100),
    ]
}

pub fn tracked_claims() -> Vec<TrackedClaim> {
    vec![
        TrackedClaim {
            id: "CLM-001".into(),
            patient_name: "Sarah Johnson".into(),
            claim_type: ClaimType::PreAuthorization,
            status: TrackingStatus::UnderReview,
            date_filed: "2024-01-15".into(),
            amount: 2500,
            estimated_completion: Some("2024-01-18".into()),
            last_updated: "2024-01-16".into(),
        },
        TrackedClaim {
            id: "CLM-002".into(),
            patient_name: "Michael Chen".into(),
            claim_type: ClaimType::Reimbursement,
            status: TrackingStatus::Approved,
            date_filed: "2024-01-14".into(),
            amount: 1800,
            estimated_completion: None,
            last_updated: "2024-01-16".into(),
        },
        TrackedClaim {
            id: "CLM-005".into(),
            patient_name: "Lisa Anderson".into(),
            claim_type: ClaimType::PreAuthorization,
            status: TrackingStatus::Filed,
            date_filed: "2024-01-11".into(),
            amount: 4100,
            estimated_completion: Some("2024-01-14".into()),
            last_updated: "2024-01-11".into(),
        },
    ]
}

/// Documents listed on the tracker's document card.
pub const TRACKER_DOCUMENTS: [&str; 4] = [
    "Medical Report.pdf",
    "Hospital Bill.pdf",
    "Prescription.jpg",
    "Lab Results.pdf",
];

/// Quick-pick codes offered under the pre-authorization diagnosis notes.
pub const COMMON_DIAGNOSIS_CODES: [&str; 6] = [
    "I10 - Essential Hypertension",
    "E11.9 - Type 2 Diabetes",
    "M25.511 - Pain in right shoulder",
    "Z51.11 - Chemotherapy",
    "S72.001A - Fracture of femur",
    "F32.9 - Depression",
];

fn document(name: &str, upload_date: &str, size: &str) -> ClaimDocument {
    ClaimDocument {
        name: name.to_string(),
        upload_date: upload_date.to_string(),
        size: size.to_string(),
    }
}

fn event(status: &str, date: &str, description: &str) -> StatusEvent {
    StatusEvent {
        status: status.to_string(),
        date: date.to_string(),
        description: description.to_string(),
    }
}

/// The claim detail screen always shows this claim.
pub fn claim_detail() -> ClaimDetail {
    ClaimDetail {
        id: "CLM-001".into(),
        status: TrackingStatus::Approved,
        patient_name: "Sarah Johnson".into(),
        age: 32,
        gender: "Female".into(),
        insurance_id: "INS-789456123".into(),
        date_filed: "2024-01-15".into(),
        date_approved: Some("2024-01-17".into()),
        claim_type: ClaimType::PreAuthorization,
        treatment_date: "2024-01-20".into(),
        diagnosis: "Arthroscopic knee surgery for meniscal tear".into(),
        hospital_name: "St. Mary's Medical Center".into(),
        hospital_address: "1234 Health St, Medical City, MC 12345".into(),
        doctor_name: "Dr. Michael Rodriguez".into(),
        doctor_registration: "MR987654321".into(),
        specialization: "Orthopedic Surgery".into(),
        estimated_cost: 2500,
        approved_amount: 2250,
        diagnosis_notes: vec![
            "ICD-10: M23.201 - Derangement of unspecified meniscus due to old tear".into(),
            "Patient experiencing pain and limited mobility".into(),
            "Conservative treatment unsuccessful".into(),
            "Surgical intervention recommended".into(),
        ],
        documents: vec![
            document("MRI Scan Results.pdf", "2024-01-15", "2.3 MB"),
            document("Doctor Consultation Report.pdf", "2024-01-15", "1.1 MB"),
            document("Treatment Plan.pdf", "2024-01-15", "856 KB"),
            document("Patient X-ray.jpg", "2024-01-14", "1.8 MB"),
        ],
        status_history: vec![
            event("Filed", "2024-01-15 10:30 AM", "Claim submitted successfully"),
            event("Under Review", "2024-01-16 02:15 PM", "Medical team review initiated"),
            event("Additional Info Requested", "2024-01-16 04:45 PM", "Requested additional MRI scan"),
            event("Under Review", "2024-01-17 09:00 AM", "Review resumed with additional documentation"),
            event("Approved", "2024-01-17 03:30 PM", "Pre-authorization approved for $2,250"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::region::village_belongs_to;

    #[test]
    fn fixture_records_use_known_villages() {
        for record in field_data() {
            assert!(
                village_belongs_to(&record.sub_district, &record.village),
                "{}",
                record.id
            );
        }
    }
}
