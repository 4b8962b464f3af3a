//! Validation & verification screen.
//!
//! Stateless over the queue: every interaction is turned into a
//! `QueueAction` and sent to the parent, which owns the `ValidationQueue`.

use yew::prelude::*;

mod props;
mod review;
mod view;

pub use props::ValidationProps;

pub struct ValidationScreen;

impl Component for ValidationScreen {
    type Message = ();
    type Properties = ValidationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(ctx.props())
    }
}
