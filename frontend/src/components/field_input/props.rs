use common::model::field_data::FieldDataRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FieldInputProps {
    /// Id the next submitted record receives (`FD-nnn`).
    pub next_id: String,
    pub on_submit: Callback<FieldDataRecord>,
}
