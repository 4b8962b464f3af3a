//! New insurance claim form (demo flow).

use crate::error::FormError;
use crate::model::claim::ClaimType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn key(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.key() == key)
    }
}

/// Metadata of a file attached to the claim. File contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub name: String,
    pub size: u64,
}

impl UploadedDocument {
    /// Human readable size, e.g. `856 KB` or `2.3 MB`.
    pub fn size_label(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        match self.size {
            s if s >= MB => format!("{:.1} MB", s as f64 / MB as f64),
            s if s >= KB => format!("{} KB", s / KB),
            s => format!("{} B", s),
        }
    }
}

/// What the flow does after the claim form is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimSubmission {
    SavedDraft,
    /// Pre-authorization claims continue on the pre-auth form.
    ProceedToPreAuth,
    Submitted,
}

impl ClaimSubmission {
    pub fn message(self) -> Option<&'static str> {
        match self {
            ClaimSubmission::SavedDraft => Some("Claim saved as draft!"),
            ClaimSubmission::Submitted => Some("Claim submitted successfully!"),
            ClaimSubmission::ProceedToPreAuth => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewClaimForm {
    pub patient_name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub insurance_id: String,
    pub treatment_date: String,
    pub hospital_name: String,
    pub diagnosis: String,
    pub claim_type: Option<ClaimType>,
    pub documents: Vec<UploadedDocument>,
}

impl NewClaimForm {
    pub fn add_documents(&mut self, documents: impl IntoIterator<Item = UploadedDocument>) {
        self.documents.extend(documents);
    }

    pub fn remove_document(&mut self, index: usize) {
        if index < self.documents.len() {
            self.documents.remove(index);
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            ("Full Name", &self.patient_name),
            ("Age", &self.age),
            ("Insurance ID", &self.insurance_id),
            ("Treatment Date", &self.treatment_date),
            ("Hospital/Clinic Name", &self.hospital_name),
            ("Diagnosis", &self.diagnosis),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(FormError::MissingField(*field));
        }
        match self.age.trim().parse::<u32>() {
            Ok(age) if age <= 150 => {}
            _ => return Err(FormError::InvalidAge),
        }
        if self.gender.is_none() {
            return Err(FormError::MissingField("Gender"));
        }
        if self.claim_type.is_none() {
            return Err(FormError::MissingField("Claim Type"));
        }
        Ok(())
    }

    /// Drafts are saved as they are; a full submission must validate first.
    pub fn submit(&self, draft: bool) -> Result<ClaimSubmission, FormError> {
        if draft {
            return Ok(ClaimSubmission::SavedDraft);
        }
        self.validate()?;
        Ok(match self.claim_type {
            Some(ClaimType::PreAuthorization) => ClaimSubmission::ProceedToPreAuth,
            _ => ClaimSubmission::Submitted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(claim_type: ClaimType) -> NewClaimForm {
        NewClaimForm {
            patient_name: "Sarah Johnson".into(),
            age: "32".into(),
            gender: Some(Gender::Female),
            insurance_id: "INS-789456123".into(),
            treatment_date: "2024-01-20".into(),
            hospital_name: "St. Mary's Medical Center".into(),
            diagnosis: "Meniscal tear".into(),
            claim_type: Some(claim_type),
            documents: Vec::new(),
        }
    }

    #[test]
    fn pre_authorization_proceeds_to_pre_auth_form() {
        let form = complete(ClaimType::PreAuthorization);
        assert_eq!(form.submit(false), Ok(ClaimSubmission::ProceedToPreAuth));
    }

    #[test]
    fn reimbursement_is_submitted() {
        let form = complete(ClaimType::Reimbursement);
        let outcome = form.submit(false).unwrap();
        assert_eq!(outcome, ClaimSubmission::Submitted);
        assert_eq!(outcome.message(), Some("Claim submitted successfully!"));
    }

    #[test]
    fn drafts_skip_validation() {
        let form = NewClaimForm::default();
        assert_eq!(form.submit(true), Ok(ClaimSubmission::SavedDraft));
    }

    #[test]
    fn missing_fields_block_submission() {
        let mut form = complete(ClaimType::Reimbursement);
        form.insurance_id.clear();
        assert_eq!(form.submit(false), Err(FormError::MissingField("Insurance ID")));

        let mut form = complete(ClaimType::Reimbursement);
        form.claim_type = None;
        assert_eq!(form.submit(false), Err(FormError::MissingField("Claim Type")));

        let mut form = complete(ClaimType::Reimbursement);
        form.age = "thirty".into();
        assert_eq!(form.submit(false), Err(FormError::InvalidAge));
    }

    #[test]
    fn documents_can_be_added_and_removed() {
        let mut form = NewClaimForm::default();
        form.add_documents([
            UploadedDocument { name: "a.pdf".into(), size: 876_544 },
            UploadedDocument { name: "b.jpg".into(), size: 2_411_724 },
        ]);
        form.remove_document(5);
        assert_eq!(form.documents.len(), 2);
        form.remove_document(0);
        assert_eq!(form.documents[0].name, "b.jpg");
        assert_eq!(form.documents[0].size_label(), "2.3 MB");
    }

    #[test]
    fn size_labels() {
        let doc = |size| UploadedDocument { name: String::new(), size };
        assert_eq!(doc(876_544).size_label(), "856 KB");
        assert_eq!(doc(512).size_label(), "512 B");
    }

    #[test]
    fn gender_keys() {
        assert_eq!(Gender::from_key("other"), Some(Gender::Other));
        assert_eq!(Gender::from_key(""), None);
    }
}
