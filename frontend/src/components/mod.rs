pub mod claims;
pub mod dashboard;
pub mod field_input;
pub mod users;
pub mod validation;
