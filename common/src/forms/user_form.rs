use regex::Regex;
use std::sync::LazyLock;

use crate::error::FormError;
use crate::model::user::{Role, User};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Whether the user dialog adds a new user or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    Edit(String),
}

impl DialogMode {
    pub fn title(&self) -> &'static str {
        match self {
            DialogMode::Add => "Tambah Pengguna Baru",
            DialogMode::Edit(_) => "Edit Pengguna",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DialogMode::Add => "Masukkan informasi pengguna baru dan tentukan role akses",
            DialogMode::Edit(_) => "Perbarui informasi pengguna dan role akses",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            DialogMode::Add => "Tambah Pengguna",
            DialogMode::Edit(_) => "Simpan Perubahan",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField("Nama Lengkap"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::MissingField("Email"));
        }
        if !EMAIL_RE.is_match(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_field_officer() {
        assert_eq!(UserForm::default().role, Role::FieldOfficer);
    }

    #[test]
    fn requires_name_and_wellformed_email() {
        let mut form = UserForm {
            name: "Gita Purnama".into(),
            email: "gita@dinlutkan.kebumen.go.id".into(),
            role: Role::Viewer,
        };
        assert_eq!(form.validate(), Ok(()));

        form.email = "gita@localhost".into();
        assert_eq!(
            form.validate(),
            Err(FormError::InvalidEmail("gita@localhost".into()))
        );

        form.email = " ".into();
        assert_eq!(form.validate(), Err(FormError::MissingField("Email")));

        form.name.clear();
        assert_eq!(form.validate(), Err(FormError::MissingField("Nama Lengkap")));
    }

    #[test]
    fn dialog_labels_follow_mode() {
        assert_eq!(DialogMode::Add.submit_label(), "Tambah Pengguna");
        assert_eq!(DialogMode::Edit("U-001".into()).title(), "Edit Pengguna");
    }
}
