//! In-memory user directory behind the user-management screen.

use crate::forms::user_form::UserForm;
use crate::model::user::User;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDirectory {
    users: Vec<User>,
    /// Highest `U-nnn` suffix handed out so far. Removals never lower it.
    last_seq: u32,
}

fn user_seq(id: &str) -> Option<u32> {
    id.strip_prefix("U-")?.parse().ok()
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        let last_seq = users.iter().filter_map(|u| user_seq(&u.id)).max().unwrap_or(0);
        Self { users, last_seq }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// `U-nnn`, one past the highest suffix this directory has ever held.
    pub fn next_id(&self) -> String {
        format!("U-{:03}", self.last_seq.saturating_add(1))
    }

    /// Adds a user who has never logged in and returns its id.
    pub fn add(&mut self, form: &UserForm) -> String {
        let id = self.next_id();
        self.last_seq = self.last_seq.saturating_add(1);
        self.users.push(User {
            id: id.clone(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            role: form.role,
            last_login: "-".to_string(),
        });
        id
    }

    /// Overwrites name, email and role. Returns false for an unknown id.
    pub fn update(&mut self, id: &str, form: &UserForm) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.name = form.name.trim().to_string();
                user.email = form.email.trim().to_string();
                user.role = form.role;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<User> {
        let index = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::model::user::Role;

    fn form(name: &str, email: &str, role: Role) -> UserForm {
        UserForm {
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    #[test]
    fn add_assigns_next_id_and_no_login() {
        let mut directory = UserDirectory::new(fixtures::users());
        let id = directory.add(&form(" Gita ", "gita@dinlutkan.kebumen.go.id", Role::Viewer));
        assert_eq!(id, "U-007");
        let user = directory.get("U-007").unwrap();
        assert_eq!(user.name, "Gita");
        assert_eq!(user.last_login, "-");
        assert_eq!(directory.len(), 7);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut directory = UserDirectory::new(fixtures::users());
        directory.remove("U-003").unwrap();
        let id = directory.add(&form("Hadi", "hadi@dinlutkan.kebumen.go.id", Role::Admin));
        assert_eq!(id, "U-007");
        assert_eq!(directory.users().iter().filter(|u| u.id == "U-007").count(), 1);
    }

    #[test]
    fn highest_id_is_not_reused_after_delete() {
        let mut directory = UserDirectory::new(fixtures::users());
        directory.remove("U-006").unwrap();
        let id = directory.add(&form("Indra", "indra@dinlutkan.kebumen.go.id", Role::Viewer));
        assert_eq!(id, "U-007");
        assert!(directory.get("U-006").is_none());

        directory.remove("U-007").unwrap();
        assert_eq!(directory.next_id(), "U-008");
    }

    #[test]
    fn next_id_saturates_at_the_largest_suffix() {
        let mut user = fixtures::users().remove(0);
        user.id = format!("U-{}", u32::MAX);
        let directory = UserDirectory::new(vec![user]);
        assert_eq!(directory.next_id(), format!("U-{}", u32::MAX));
    }

    #[test]
    fn update_keeps_id_and_last_login() {
        let mut directory = UserDirectory::new(fixtures::users());
        assert!(directory.update("U-002", &form("Ahmad F.", "af@dinlutkan.kebumen.go.id", Role::Validator)));
        let user = directory.get("U-002").unwrap();
        assert_eq!(user.role, Role::Validator);
        assert_eq!(user.last_login, "2025-11-08 08:30");
        assert!(!directory.update("U-404", &UserForm::default()));
    }

    #[test]
    fn remove_unknown_is_none() {
        let mut directory = UserDirectory::new(fixtures::users());
        assert!(directory.remove("U-404").is_none());
        assert_eq!(directory.len(), 6);
    }
}
