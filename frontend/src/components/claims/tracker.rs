use common::claims::{search_tracked, stepper, StepState};
use common::fixtures::{self, TRACKER_DOCUMENTS};
use common::model::claim::{TrackedClaim, TrackingStatus};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::format::usd;

pub struct Tracker {
    claims: Vec<TrackedClaim>,
    search: String,
    selected: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct TrackerProps {
    pub on_view: Callback<String>,
    pub on_back: Callback<()>,
}

pub enum Msg {
    Search(String),
    Select(String),
}

impl Component for Tracker {
    type Message = Msg;
    type Properties = TrackerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        let claims = fixtures::tracked_claims();
        let selected = claims.first().map(|c| c.id.clone());
        Self {
            claims,
            search: String::new(),
            selected,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Search(term) => self.search = term,
            Msg::Select(id) => self.selected = Some(id),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let hits = search_tracked(&self.claims, &self.search);
        let selected = self
            .selected
            .as_deref()
            .and_then(|id| self.claims.iter().find(|c| c.id == id));

        html! {
            <div class="page tracker">
                <div class="page-header row">
                    <div>
                        <h2>{"Claim Tracker"}</h2>
                        <p class="muted">{"Follow the progress of submitted claims"}</p>
                    </div>
                    <button class="btn btn-ghost" onclick={props.on_back.reform(|_| ())}>{"← Back"}</button>
                </div>

                <div class="grid-sidebar">
                    <section class="card">
                        <input type="search" placeholder="Search claims..." value={self.search.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let el: HtmlInputElement = e.target_unchecked_into();
                                Msg::Search(el.value())
                            })} />
                        <ul class="claim-list">
                            {
                                for hits.iter().map(|claim| {
                                    let active = Some(claim.id.as_str()) == self.selected.as_deref();
                                    let id = claim.id.clone();
                                    html! {
                                        <li class={classes!("claim-item", active.then_some("active"))}
                                            onclick={link.callback(move |_| Msg::Select(id.clone()))}>
                                            <div class="row">
                                                <strong>{ &claim.id }</strong>
                                                <span class={tracking_class(claim.status)}>{ claim.status.label() }</span>
                                            </div>
                                            <div>{ &claim.patient_name }</div>
                                            <div class="muted small">{ claim.claim_type.label() }</div>
                                        </li>
                                    }
                                })
                            }
                        </ul>
                    </section>

                    {
                        match selected {
                            Some(claim) => progress(claim, &props.on_view),
                            None => html! { <section class="card muted">{"Select a claim to see its progress"}</section> },
                        }
                    }
                </div>
            </div>
        }
    }
}

fn progress(claim: &TrackedClaim, on_view: &Callback<String>) -> Html {
    let id = claim.id.clone();
    let view_details = on_view.reform(move |_| id.clone());

    html! {
        <div class="stack">
            <section class="card">
                <div class="card-header-row">
                    <div>
                        <h3>{ &claim.id }</h3>
                        <p class="muted">{ format!("{} · {}", claim.patient_name, claim.claim_type.label()) }</p>
                    </div>
                    <button class="btn btn-outline" onclick={view_details}>{"View Details"}</button>
                </div>
                <dl class="details">
                    <dt>{"Date Filed"}</dt><dd>{ &claim.date_filed }</dd>
                    <dt>{"Claim Amount"}</dt><dd>{ usd(claim.amount) }</dd>
                    <dt>{"Last Updated"}</dt><dd>{ &claim.last_updated }</dd>
                    if let Some(eta) = &claim.estimated_completion {
                        <dt>{"Estimated Completion"}</dt><dd>{ eta }</dd>
                    }
                </dl>
            </section>

            <section class="card">
                <h3>{"Claim Progress"}</h3>
                <ol class="stepper">
                    {
                        for stepper(claim).into_iter().map(|step| html! {
                            <li key={step.key} class={step.state.class()}>
                                <span class="step-icon">{ step_icon(step.state) }</span>
                                <div>
                                    <strong>{ step.title }</strong>
                                    <p class="muted small">{ step.description }</p>
                                    if let Some(date) = step.date {
                                        <p class="small">{ date }</p>
                                    }
                                </div>
                            </li>
                        })
                    }
                </ol>
                if claim.status == TrackingStatus::Rejected {
                    <div class="banner banner-error">
                        {"This claim was rejected. Review the decision notes and resubmit with the missing documentation."}
                    </div>
                }
            </section>

            <section class="card">
                <h3>{"Documents"}</h3>
                <ul class="documents">
                    {
                        for TRACKER_DOCUMENTS.iter().map(|&name| html! {
                            <li><span>{ name }</span><button class="btn btn-ghost btn-sm">{"Download"}</button></li>
                        })
                    }
                </ul>
            </section>
        </div>
    }
}

fn step_icon(state: StepState) -> &'static str {
    match state {
        StepState::Completed => "✓",
        StepState::Active => "●",
        StepState::Error => "✕",
        StepState::Pending => "",
    }
}

fn tracking_class(status: TrackingStatus) -> &'static str {
    match status {
        TrackingStatus::Filed => "badge badge-secondary",
        TrackingStatus::UnderReview => "badge badge-pending",
        TrackingStatus::Approved => "badge badge-approved",
        TrackingStatus::Rejected => "badge badge-rejected",
    }
}
