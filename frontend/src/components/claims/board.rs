use common::claims::{count_claims, filter_claims, ClaimTab};
use common::fixtures;
use common::model::claim::{Claim, ClaimStatus};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::format::usd;

pub struct ClaimsBoard {
    claims: Vec<Claim>,
    tab: ClaimTab,
    search: String,
}

#[derive(Properties, PartialEq)]
pub struct BoardProps {
    pub on_view: Callback<String>,
    pub on_new: Callback<()>,
    pub on_track: Callback<()>,
}

pub enum Msg {
    Tab(ClaimTab),
    Search(String),
}

impl Component for ClaimsBoard {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            claims: fixtures::claims(),
            tab: ClaimTab::default(),
            search: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Tab(tab) => self.tab = tab,
            Msg::Search(term) => self.search = term,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let counts = count_claims(&self.claims);
        let rows = filter_claims(&self.claims, self.tab, &self.search);

        html! {
            <div class="page claims">
                <div class="page-header row">
                    <div>
                        <h2>{"Claims"}</h2>
                        <p class="muted">{"Manage and review insurance claims"}</p>
                    </div>
                    <div class="actions">
                        <button class="btn btn-outline" onclick={props.on_track.reform(|_| ())}>{"Track Claims"}</button>
                        <button class="btn btn-primary" onclick={props.on_new.reform(|_| ())}>{"+ New Claim"}</button>
                    </div>
                </div>

                <div class="grid-4">
                    { summary("Total Claims", counts.total, "") }
                    { summary("Pending", counts.pending, "text-amber") }
                    { summary("Approved", counts.approved, "text-emerald") }
                    { summary("Rejected", counts.rejected, "text-red") }
                </div>

                <section class="card">
                    <div class="card-header-row">
                        <div class="tabs">
                            {
                                for ClaimTab::ALL.iter().map(|&tab| {
                                    let class = if tab == self.tab { "tab active" } else { "tab" };
                                    html! {
                                        <button {class} onclick={link.callback(move |_| Msg::Tab(tab))}>{ tab.label() }</button>
                                    }
                                })
                            }
                        </div>
                        <input type="search" placeholder="Search by patient name or claim ID"
                            value={self.search.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let el: HtmlInputElement = e.target_unchecked_into();
                                Msg::Search(el.value())
                            })} />
                    </div>

                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Claim ID"}</th>
                                <th>{"Patient Name"}</th>
                                <th>{"Claim Type"}</th>
                                <th>{"Status"}</th>
                                <th>{"Date Filed"}</th>
                                <th>{"Amount"}</th>
                                <th>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                for rows.iter().map(|claim| {
                                    let id = claim.id.clone();
                                    let onclick = props.on_view.reform(move |_| id.clone());
                                    html! {
                                        <tr key={claim.id.clone()}>
                                            <td>{ &claim.id }</td>
                                            <td>{ &claim.patient_name }</td>
                                            <td>{ claim.claim_type.label() }</td>
                                            <td><span class={status_class(claim.status)}>{ claim.status.label() }</span></td>
                                            <td>{ &claim.date_filed }</td>
                                            <td>{ usd(claim.amount) }</td>
                                            <td><button class="btn btn-ghost btn-sm" {onclick}>{"View"}</button></td>
                                        </tr>
                                    }
                                })
                            }
                        </tbody>
                    </table>
                    if rows.is_empty() {
                        <p class="muted empty">{"No claims found"}</p>
                    }
                </section>
            </div>
        }
    }
}

fn summary(title: &'static str, value: usize, accent: &'static str) -> Html {
    html! {
        <div class="card kpi">
            <p class="muted">{ title }</p>
            <div class={classes!("kpi-value", accent)}>{ value }</div>
        </div>
    }
}

fn status_class(status: ClaimStatus) -> &'static str {
    match status {
        ClaimStatus::Pending => "badge badge-pending",
        ClaimStatus::Approved => "badge badge-approved",
        ClaimStatus::Rejected => "badge badge-rejected",
    }
}
