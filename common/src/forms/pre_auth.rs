//! Pre-authorization request form (demo flow).

use crate::error::FormError;

pub const MISSING_FIELDS_ALERT: &str = "Please fill in all required fields";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreAuthForm {
    pub doctor_name: String,
    pub registration_id: String,
    pub specialization: String,
    /// Raw text of the cost input.
    pub estimated_cost: String,
    pub diagnosis_notes: Vec<String>,
    /// Text of the note being typed, not yet added.
    pub current_note: String,
    pub additional_info: String,
}

impl PreAuthForm {
    /// Moves `current_note` into the note list. Blank notes are ignored.
    pub fn add_current_note(&mut self) -> bool {
        let note = std::mem::take(&mut self.current_note);
        if self.push_note(&note) {
            true
        } else {
            self.current_note = note;
            false
        }
    }

    /// Adds one of the quick-pick diagnosis codes directly.
    pub fn add_quick_note(&mut self, code: &str) -> bool {
        self.push_note(code)
    }

    pub fn remove_note(&mut self, index: usize) {
        if index < self.diagnosis_notes.len() {
            self.diagnosis_notes.remove(index);
        }
    }

    fn push_note(&mut self, note: &str) -> bool {
        let note = note.trim();
        if note.is_empty() {
            return false;
        }
        self.diagnosis_notes.push(note.to_string());
        true
    }

    /// Parses the estimated cost once all starred fields are filled.
    pub fn validate(&self) -> Result<f64, FormError> {
        let required = [
            ("Doctor Name", &self.doctor_name),
            ("Medical Registration ID", &self.registration_id),
            ("Specialization", &self.specialization),
            ("Estimated Cost", &self.estimated_cost),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(FormError::MissingField(*field));
        }
        match self.estimated_cost.trim().parse::<f64>() {
            Ok(cost) if cost.is_finite() && cost > 0.0 => Ok(cost),
            _ => Err(FormError::InvalidAmount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> PreAuthForm {
        PreAuthForm {
            doctor_name: "Dr. Michael Rodriguez".into(),
            registration_id: "MR987654321".into(),
            specialization: "Orthopedic Surgery".into(),
            estimated_cost: "2500.00".into(),
            ..Default::default()
        }
    }

    #[test]
    fn notes_are_trimmed_and_blank_ones_ignored() {
        let mut form = PreAuthForm::default();
        form.current_note = "   ".into();
        assert!(!form.add_current_note());
        assert!(form.diagnosis_notes.is_empty());

        form.current_note = "  Patient experiencing pain ".into();
        assert!(form.add_current_note());
        assert_eq!(form.diagnosis_notes, ["Patient experiencing pain"]);
        assert!(form.current_note.is_empty());
    }

    #[test]
    fn quick_codes_are_added_without_touching_current_note() {
        let mut form = PreAuthForm::default();
        form.current_note = "draft".into();
        assert!(form.add_quick_note("F32.9 - Depression"));
        assert_eq!(form.diagnosis_notes, ["F32.9 - Depression"]);
        assert_eq!(form.current_note, "draft");
    }

    #[test]
    fn remove_note_by_index() {
        let mut form = PreAuthForm::default();
        form.add_quick_note("a");
        form.add_quick_note("b");
        form.remove_note(9);
        form.remove_note(0);
        assert_eq!(form.diagnosis_notes, ["b"]);
    }

    #[test]
    fn all_starred_fields_are_required() {
        assert_eq!(complete().validate(), Ok(2500.0));

        let mut form = complete();
        form.specialization.clear();
        assert_eq!(form.validate(), Err(FormError::MissingField("Specialization")));

        let mut form = complete();
        form.estimated_cost = "0".into();
        assert_eq!(form.validate(), Err(FormError::InvalidAmount));
    }
}
