use common::error::FormError;
use common::fixtures;
use common::forms::user_form::{DialogMode, UserForm};
use common::users::UserDirectory;

pub struct UserManagement {
    pub directory: UserDirectory,
    /// `None` while the add/edit dialog is closed.
    pub dialog: Option<DialogMode>,
    pub form: UserForm,
    /// Last validation failure of the dialog, cleared on every edit.
    pub error: Option<FormError>,
}

impl UserManagement {
    pub fn new() -> Self {
        Self {
            directory: UserDirectory::new(fixtures::users()),
            dialog: None,
            form: UserForm::default(),
            error: None,
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
        self.form = UserForm::default();
        self.error = None;
    }
}
