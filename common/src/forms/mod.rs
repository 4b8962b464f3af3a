pub mod field_entry;
pub mod new_claim;
pub mod pre_auth;
pub mod user_form;
