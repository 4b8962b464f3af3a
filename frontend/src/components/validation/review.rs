use common::validation::{QueueAction, ReviewState, Target};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::format::{date_id, quantity};

use super::view::status_badge;

/// Body of the review sheet for the opened record.
pub fn review_panel(review: &ReviewState, on_action: &Callback<QueueAction>) -> Html {
    let Some(record) = review.record() else {
        return html! {};
    };
    let approve = {
        let id = record.id.clone();
        on_action.reform(move |_| QueueAction::Approve(Target::Record(id.clone())))
    };
    let reject = {
        let id = record.id.clone();
        on_action.reform(move |_| QueueAction::Reject(Target::Record(id.clone())))
    };
    let notes = on_action.reform(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        QueueAction::SetNotes(area.value())
    });

    html! {
        <div class="review">
            <h4>{"Informasi Data"}</h4>
            <dl class="details">
                <dt>{"ID Record"}</dt><dd>{ &record.id }</dd>
                <dt>{"Tanggal"}</dt><dd>{ date_id(&record.date) }</dd>
                <dt>{"Kecamatan"}</dt><dd>{ &record.sub_district }</dd>
                <dt>{"Desa"}</dt><dd>{ &record.village }</dd>
                <dt>{"Komoditas"}</dt><dd>{ record.commodity.label() }</dd>
                <dt>{"Kuantitas"}</dt><dd>{ format!("{} {}", quantity(record.quantity), record.unit.label()) }</dd>
                <dt>{"Petugas"}</dt><dd>{ &record.reported_by }</dd>
                <dt>{"Status"}</dt><dd>{ status_badge(record.status) }</dd>
                if let Some(observation) = &record.notes {
                    <dt>{"Catatan Lapangan"}</dt><dd>{ observation }</dd>
                }
            </dl>

            <label for="verification-notes">{"Catatan Verifikasi"}
                <textarea id="verification-notes" rows="4"
                    placeholder="Tambahkan catatan verifikasi (opsional)..."
                    value={review.notes().to_string()}
                    oninput={notes} />
            </label>

            <div class="actions">
                <button class="btn btn-success" onclick={approve}>{"Setujui"}</button>
                <button class="btn btn-danger" onclick={reject}>{"Tolak"}</button>
            </div>
        </div>
    }
}
