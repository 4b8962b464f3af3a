use common::fixtures;
use common::model::field_data::FieldDataRecord;
use common::validation::{Decision, QueueAction, Resolution, ValidationQueue};
use gloo_console::{debug, info, log};
use yew::{html, Component, Context, Html};

use crate::components::claims::ClaimsFlow;
use crate::components::dashboard::Dashboard;
use crate::components::field_input::FieldInput;
use crate::components::users::UserManagement;
use crate::components::validation::ValidationScreen;
use crate::layout::{layout, View};
use crate::toast;

/// Root component. Owns the validation queue so that records submitted on the
/// input screen show up in the review table.
pub struct App {
    view: View,
    queue: ValidationQueue,
}

pub enum Msg {
    Navigate(View),
    Queue(QueueAction),
    Submitted(FieldDataRecord),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            view: View::default(),
            queue: ValidationQueue::new(fixtures::field_data()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(view) => {
                if self.view == view {
                    return false;
                }
                self.view = view;
            }
            Msg::Queue(action) => {
                if let Some(resolution) = self.queue.dispatch(action) {
                    announce(&resolution);
                }
            }
            Msg::Submitted(record) => {
                info!(format!("{} masuk antrean validasi", record.id));
                self.queue.dispatch(QueueAction::Enqueue(record));
            }
        }
        if let Ok(snapshot) = serde_json::to_string(&self.queue) {
            debug!(snapshot);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = link.callback(Msg::Navigate);

        let content = match self.view {
            View::Dashboard => html! {
                <Dashboard
                    pending={self.queue.records().len()}
                    on_navigate_input={link.callback(|_| Msg::Navigate(View::Input))}
                />
            },
            View::Input => html! {
                <FieldInput
                    next_id={self.queue.next_id()}
                    on_submit={link.callback(Msg::Submitted)}
                />
            },
            View::Validation => html! {
                <ValidationScreen
                    queue={self.queue.clone()}
                    on_action={link.callback(Msg::Queue)}
                />
            },
            View::Users => html! { <UserManagement /> },
            View::Claims => html! { <ClaimsFlow /> },
        };

        layout(self.view, &on_navigate, content)
    }
}

fn announce(resolution: &Resolution) {
    log!(format!(
        "{}: {}{}",
        resolution.title(),
        resolution.ids.join(", "),
        resolution
            .notes
            .as_deref()
            .map(|n| format!(" (catatan: {})", n))
            .unwrap_or_default()
    ));
    let description = resolution.description();
    match resolution.decision {
        Decision::Approved => {
            toast::success(resolution.title(), Some(&description))
        }
        Decision::Rejected => {
            toast::error(resolution.title(), Some(&description))
        }
    }
}
