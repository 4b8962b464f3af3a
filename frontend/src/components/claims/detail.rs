use common::fixtures;
use common::model::claim::ClaimDetail;
use yew::prelude::*;

use crate::format::usd;

/// Detail page. Every claim id opens the same demo claim.
pub fn claim_detail(requested_id: &str, on_back: Callback<()>) -> Html {
    let claim: ClaimDetail = fixtures::claim_detail();
    let back = on_back.reform(|_| ());

    html! {
        <div class="page detail">
            <div class="page-header row">
                <div>
                    <button class="btn btn-ghost" onclick={back}>{"← Back"}</button>
                    <h2>{ format!("Claim {}", claim.id) }</h2>
                    if requested_id != claim.id {
                        <p class="muted small">{ format!("Showing sample details for {}", requested_id) }</p>
                    }
                </div>
                <div class="actions">
                    <span class="badge badge-approved">{ claim.status.label() }</span>
                    <button class="btn btn-outline">{"Download PDF"}</button>
                </div>
            </div>

            <section class="card">
                <h3>{"Claim Overview"}</h3>
                <dl class="details grid-4">
                    <dt>{"Claim Type"}</dt><dd>{ claim.claim_type.label() }</dd>
                    <dt>{"Date Filed"}</dt><dd>{ &claim.date_filed }</dd>
                    <dt>{"Estimated Cost"}</dt><dd>{ usd(claim.estimated_cost) }</dd>
                    <dt>{"Approved Amount"}</dt><dd>{ usd(claim.approved_amount) }</dd>
                    if let Some(approved) = &claim.date_approved {
                        <dt>{"Date Approved"}</dt><dd>{ approved }</dd>
                    }
                </dl>
            </section>

            <div class="grid-2">
                <section class="card">
                    <h3>{"Patient Information"}</h3>
                    <dl class="details">
                        <dt>{"Full Name"}</dt><dd>{ &claim.patient_name }</dd>
                        <dt>{"Age"}</dt><dd>{ claim.age }</dd>
                        <dt>{"Gender"}</dt><dd>{ &claim.gender }</dd>
                        <dt>{"Insurance ID"}</dt><dd>{ &claim.insurance_id }</dd>
                    </dl>
                </section>
                <section class="card">
                    <h3>{"Treatment Details"}</h3>
                    <dl class="details">
                        <dt>{"Treatment Date"}</dt><dd>{ &claim.treatment_date }</dd>
                        <dt>{"Diagnosis"}</dt><dd>{ &claim.diagnosis }</dd>
                        <dt>{"Hospital/Clinic"}</dt>
                        <dd>{ &claim.hospital_name }<br />{ &claim.hospital_address }</dd>
                        <dt>{"Attending Doctor"}</dt>
                        <dd>{ format!("{} ({})", claim.doctor_name, claim.specialization) }<br />{ &claim.doctor_registration }</dd>
                    </dl>
                </section>
            </div>

            <section class="card">
                <h3>{"Diagnosis Notes"}</h3>
                <ul class="notes">
                    { for claim.diagnosis_notes.iter().map(|note| html! { <li>{ note }</li> }) }
                </ul>
            </section>

            <div class="grid-2">
                <section class="card">
                    <h3>{"Documents"}</h3>
                    <ul class="documents">
                        {
                            for claim.documents.iter().map(|doc| html! {
                                <li>
                                    <span>{ &doc.name }</span>
                                    <span class="muted small">{ format!("{} · {}", doc.upload_date, doc.size) }</span>
                                    <button class="btn btn-ghost btn-sm">{"Download"}</button>
                                </li>
                            })
                        }
                    </ul>
                </section>
                <section class="card">
                    <h3>{"Status History"}</h3>
                    <ol class="timeline">
                        {
                            for claim.status_history.iter().map(|event| html! {
                                <li>
                                    <strong>{ &event.status }</strong>
                                    <span class="muted small">{ &event.date }</span>
                                    <p>{ &event.description }</p>
                                </li>
                            })
                        }
                    </ol>
                </section>
            </div>
        </div>
    }
}
