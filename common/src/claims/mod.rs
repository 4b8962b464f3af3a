pub mod board;
pub mod tracking;

pub use board::{ClaimCounts, ClaimTab, count_claims, filter_claims};
pub use tracking::{Step, StepState, search_tracked, stepper};
