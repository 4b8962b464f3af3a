use common::model::user::Role;

pub enum Msg {
    OpenAdd,
    OpenEdit(String),
    CloseDialog,
    SetName(String),
    SetEmail(String),
    SetRole(Role),
    Save,
    Delete(String),
}
