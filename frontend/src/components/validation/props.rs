use common::validation::{QueueAction, ValidationQueue};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ValidationProps {
    pub queue: ValidationQueue,
    pub on_action: Callback<QueueAction>,
}
