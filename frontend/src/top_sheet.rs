use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, Properties};

/// Side sheet used for the review panel and the user dialog.
pub struct TopSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub title: String,
    #[prop_or_default]
    pub description: Option<String>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }
        let title_id = format!("{}-title", self.id);
        let close = props.on_close.reform(|_| ());

        html! {
            <>
                <div class="sheet-backdrop" onclick={close.clone()}></div>
                <div class="top-sheet show" id={self.id.clone()} role="dialog" aria-labelledby={title_id.clone()}>
                    <div class="sheet-header">
                        <h3 id={title_id}>{ &props.title }</h3>
                        {
                            for props.description.iter().map(|d| html! { <p class="muted">{ d }</p> })
                        }
                        <button class="sheet-close" onclick={close}>{"×"}</button>
                    </div>
                    <div class="sheet-body">
                        { props.children.clone() }
                    </div>
                </div>
            </>
        }
    }
}
