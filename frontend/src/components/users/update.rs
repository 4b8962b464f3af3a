use common::forms::user_form::{DialogMode, UserForm};
use gloo_console::{info, warn};
use yew::prelude::*;

use crate::toast;

use super::messages::Msg;
use super::state::UserManagement;

const DELETE_PROMPT: &str = "Apakah Anda yakin ingin menghapus pengguna ini?";

pub fn update(component: &mut UserManagement, _ctx: &Context<UserManagement>, msg: Msg) -> bool {
    match msg {
        Msg::OpenAdd => {
            component.close_dialog();
            component.dialog = Some(DialogMode::Add);
        }
        Msg::OpenEdit(id) => {
            let Some(user) = component.directory.get(&id) else {
                return false;
            };
            component.form = UserForm::from_user(user);
            component.error = None;
            component.dialog = Some(DialogMode::Edit(id));
        }
        Msg::CloseDialog => component.close_dialog(),
        Msg::SetName(name) => {
            component.form.name = name;
            component.error = None;
        }
        Msg::SetEmail(email) => {
            component.form.email = email;
            component.error = None;
        }
        Msg::SetRole(role) => component.form.role = role,
        Msg::Save => {
            let Some(mode) = component.dialog.clone() else {
                return false;
            };
            if let Err(err) = component.form.validate() {
                warn!(err.to_string());
                component.error = Some(err);
                return true;
            }
            match mode {
                DialogMode::Add => {
                    let id = component.directory.add(&component.form);
                    info!(format!("pengguna {} ditambahkan", id));
                    toast::success("Pengguna baru berhasil ditambahkan", None);
                }
                DialogMode::Edit(id) => {
                    if component.directory.update(&id, &component.form) {
                        info!(format!("pengguna {} diperbarui", id));
                        toast::success("Data pengguna berhasil diperbarui", None);
                    }
                }
            }
            component.close_dialog();
        }
        Msg::Delete(id) => {
            if !toast::confirm(DELETE_PROMPT) {
                return false;
            }
            if let Some(user) = component.directory.remove(&id) {
                info!(format!("pengguna {} ({}) dihapus", user.id, user.name));
                toast::success("Pengguna berhasil dihapus", None);
            }
        }
    }
    true
}
