//! Shared model and view-state logic for the SIAP LAPOR portal.
//!
//! Everything in here is plain data plus pure functions so that the Yew
//! screens in `frontend` stay thin and the behaviour can be tested natively.

pub mod claims;
pub mod dashboard;
pub mod error;
pub mod fixtures;
pub mod forms;
pub mod model;
pub mod users;
pub mod validation;
