use common::model::field_data::{FieldDataRecord, RecordStatus};
use common::validation::{Criterion, QueueAction, Target, ALL_KEY};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::format::{date_id, quantity};
use crate::top_sheet::TopSheet;

use super::props::ValidationProps;
use super::review::review_panel;

pub fn view(props: &ValidationProps) -> Html {
    let queue = &props.queue;
    let on_action = &props.on_action;
    let visible = queue.visible();
    let selected = queue.selection().len();

    html! {
        <div class="page validation">
            <div class="page-header">
                <h2>{"Validasi & Verifikasi Data"}</h2>
                <p class="muted">{"Tinjau dan validasi data lapangan yang telah diinput"}</p>
            </div>

            { filters(props) }

            <section class="card">
                <div class="card-header-row">
                    <div>
                        <h3>{"Data Belum Terverifikasi"}</h3>
                        <p class="muted">{ format!("{} record menunggu validasi", visible.len()) }</p>
                    </div>
                    if selected > 0 {
                        <div class="actions">
                            <button class="btn btn-success"
                                onclick={on_action.reform(|_| QueueAction::Approve(Target::Selection))}>
                                { format!("Setujui ({})", selected) }
                            </button>
                            <button class="btn btn-danger"
                                onclick={on_action.reform(|_| QueueAction::Reject(Target::Selection))}>
                                { format!("Tolak ({})", selected) }
                            </button>
                        </div>
                    }
                </div>

                <table class="table">
                    <thead>
                        <tr>
                            <th>
                                <input type="checkbox" checked={queue.is_all_selected()}
                                    onchange={on_action.reform(|_| QueueAction::ToggleAll)} />
                            </th>
                            <th>{"ID"}</th>
                            <th>{"Tanggal"}</th>
                            <th>{"Lokasi"}</th>
                            <th>{"Komoditas"}</th>
                            <th>{"Kuantitas"}</th>
                            <th>{"Petugas"}</th>
                            <th>{"Status"}</th>
                            <th>{"Aksi"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.iter().map(|record| row(record, queue.selection().contains(&record.id), on_action)) }
                    </tbody>
                </table>
            </section>

            <TopSheet
                open={queue.review().is_open()}
                title="Review Detail Data"
                description={Some("Tinjau data lapangan dan berikan verifikasi".to_string())}
                on_close={on_action.reform(|_| QueueAction::CloseReview)}
            >
                { review_panel(queue.review(), on_action) }
            </TopSheet>
        </div>
    }
}

fn filters(props: &ValidationProps) -> Html {
    let filter = props.queue.filter();
    let on_action = &props.on_action;
    let officer = filter.officer.select_value();
    let status = filter.status.select_value();

    html! {
        <section class="card">
            <h3>{"Filter Data"}</h3>
            <p class="muted">{"Saring data berdasarkan kriteria tertentu"}</p>
            <div class="grid-4">
                <label>{"Petugas"}
                    <select onchange={on_action.reform(|e: Event| {
                        let el: HtmlSelectElement = e.target_unchecked_into();
                        QueueAction::SetOfficer(Criterion::<String>::from_select(&el.value()))
                    })}>
                        <option value={ALL_KEY} selected={officer == ALL_KEY}>{"Semua Petugas"}</option>
                        {
                            for props.queue.officer_options().into_iter().map(|name| {
                                let selected = officer == name;
                                html! { <option value={name.clone()} {selected}>{ name }</option> }
                            })
                        }
                    </select>
                </label>
                <label>{"Status"}
                    <select onchange={on_action.reform(|e: Event| {
                        let el: HtmlSelectElement = e.target_unchecked_into();
                        QueueAction::SetStatus(Criterion::<RecordStatus>::from_select(&el.value()))
                    })}>
                        <option value={ALL_KEY} selected={status == ALL_KEY}>{"Semua Status"}</option>
                        {
                            for RecordStatus::ALL.iter().map(|s| html! {
                                <option value={s.key()} selected={status == s.key()}>{ s.label() }</option>
                            })
                        }
                    </select>
                </label>
                <label>{"Tanggal Dari"}
                    <input type="date" value={filter.date_from.clone()}
                        onchange={on_action.reform(|e: Event| {
                            let el: HtmlInputElement = e.target_unchecked_into();
                            QueueAction::SetDateFrom(el.value())
                        })} />
                </label>
                <label>{"Tanggal Sampai"}
                    <input type="date" value={filter.date_to.clone()}
                        onchange={on_action.reform(|e: Event| {
                            let el: HtmlInputElement = e.target_unchecked_into();
                            QueueAction::SetDateTo(el.value())
                        })} />
                </label>
            </div>
        </section>
    }
}

fn row(record: &FieldDataRecord, checked: bool, on_action: &Callback<QueueAction>) -> Html {
    let toggle = {
        let id = record.id.clone();
        on_action.reform(move |_| QueueAction::Toggle(id.clone()))
    };
    let review = {
        let id = record.id.clone();
        on_action.reform(move |_| QueueAction::OpenReview(id.clone()))
    };

    html! {
        <tr key={record.id.clone()}>
            <td><input type="checkbox" {checked} onchange={toggle} /></td>
            <td>{ &record.id }</td>
            <td>{ date_id(&record.date) }</td>
            <td>
                <div>{ &record.sub_district }</div>
                <div class="muted small">{ &record.village }</div>
            </td>
            <td>{ record.commodity.label() }</td>
            <td>{ format!("{} {}", quantity(record.quantity), record.unit.label()) }</td>
            <td>{ &record.reported_by }</td>
            <td>{ status_badge(record.status) }</td>
            <td><button class="btn btn-outline btn-sm" onclick={review}>{"Review"}</button></td>
        </tr>
    }
}

pub(super) fn status_badge(status: RecordStatus) -> Html {
    let class = match status {
        RecordStatus::Pending => "badge badge-default",
        RecordStatus::Draft => "badge badge-secondary",
    };
    html! { <span {class}>{ status.label() }</span> }
}
