pub mod claim;
pub mod field_data;
pub mod region;
pub mod user;
