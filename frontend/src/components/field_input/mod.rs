//! Field data entry screen.
//!
//! The form state lives in `common::forms::field_entry::FieldDataForm`; this
//! component only renders it and forwards edits. A successful submit hands
//! the new record to the parent, which enqueues it for validation.

use common::forms::field_entry::FieldDataForm;
use yew::prelude::*;

mod messages;
mod props;
mod update;
mod view;

pub use messages::Msg;
pub use props::FieldInputProps;

pub struct FieldInput {
    pub form: FieldDataForm,
}

impl Component for FieldInput {
    type Message = Msg;
    type Properties = FieldInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: FieldDataForm::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
