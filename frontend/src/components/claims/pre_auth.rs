use common::fixtures::COMMON_DIAGNOSIS_CODES;
use common::forms::pre_auth::{PreAuthForm, MISSING_FIELDS_ALERT};
use gloo_console::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::format::usd;
use crate::toast;

pub struct PreAuth {
    form: PreAuthForm,
}

#[derive(Properties, PartialEq)]
pub struct PreAuthProps {
    pub on_back: Callback<()>,
    pub on_submitted: Callback<()>,
}

pub enum Msg {
    DoctorName(String),
    RegistrationId(String),
    Specialization(String),
    EstimatedCost(String),
    CurrentNote(String),
    AddNote,
    QuickNote(&'static str),
    RemoveNote(usize),
    AdditionalInfo(String),
    Submit,
}

impl Component for PreAuth {
    type Message = Msg;
    type Properties = PreAuthProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: PreAuthForm::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let form = &mut self.form;
        match msg {
            Msg::DoctorName(v) => form.doctor_name = v,
            Msg::RegistrationId(v) => form.registration_id = v,
            Msg::Specialization(v) => form.specialization = v,
            Msg::EstimatedCost(v) => form.estimated_cost = v,
            Msg::CurrentNote(v) => form.current_note = v,
            Msg::AddNote => return form.add_current_note(),
            Msg::QuickNote(code) => return form.add_quick_note(code),
            Msg::RemoveNote(index) => form.remove_note(index),
            Msg::AdditionalInfo(v) => form.additional_info = v,
            Msg::Submit => {
                match form.validate() {
                    Ok(cost) => {
                        info!(format!(
                            "pre-authorization by {} for {} with {} note(s)",
                            form.doctor_name,
                            usd(cost.round() as u64),
                            form.diagnosis_notes.len()
                        ));
                        toast::success("Pre-authorization request submitted!", None);
                        ctx.props().on_submitted.emit(());
                    }
                    Err(err) => {
                        warn!(err.to_string());
                        toast::alert(MISSING_FIELDS_ALERT);
                    }
                }
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = &self.form;
        let text = |msg: fn(String) -> Msg| {
            link.callback(move |e: InputEvent| {
                let el: HtmlInputElement = e.target_unchecked_into();
                msg(el.value())
            })
        };

        html! {
            <div class="page narrow">
                <div class="page-header row">
                    <div>
                        <h2>{"Pre-Authorization Request"}</h2>
                        <p class="muted">{"Provide doctor and treatment details for approval before treatment"}</p>
                    </div>
                    <button class="btn btn-ghost" onclick={ctx.props().on_back.reform(|_| ())}>{"Back to Claim Form"}</button>
                </div>

                <section class="card form">
                    <h3>{"Doctor Information"}</h3>
                    <div class="grid-2">
                        <label>{"Doctor Name *"}
                            <input type="text" placeholder="Dr. John Smith" value={form.doctor_name.clone()}
                                oninput={text(Msg::DoctorName)} />
                        </label>
                        <label>{"Medical Registration ID *"}
                            <input type="text" placeholder="MR123456789" value={form.registration_id.clone()}
                                oninput={text(Msg::RegistrationId)} />
                        </label>
                        <label>{"Specialization *"}
                            <input type="text" placeholder="e.g., Cardiology, Orthopedics, Neurology"
                                value={form.specialization.clone()} oninput={text(Msg::Specialization)} />
                        </label>
                        <label>{"Estimated Cost *"}
                            <input type="number" min="0" step="0.01" placeholder="0.00"
                                value={form.estimated_cost.clone()} oninput={text(Msg::EstimatedCost)} />
                        </label>
                    </div>
                </section>

                <section class="card form">
                    <h3>{"Diagnosis Notes"}</h3>
                    <div class="inline">
                        <input type="text" placeholder="Enter diagnosis note, ICD code, or symptom"
                            value={form.current_note.clone()}
                            oninput={text(Msg::CurrentNote)}
                            onkeydown={link.batch_callback(|e: KeyboardEvent| {
                                (e.key() == "Enter").then(|| {
                                    e.prevent_default();
                                    Msg::AddNote
                                })
                            })} />
                        <button class="btn btn-outline" onclick={link.callback(|_| Msg::AddNote)}>{"Add"}</button>
                    </div>
                    <ul class="notes">
                        {
                            for form.diagnosis_notes.iter().enumerate().map(|(index, note)| html! {
                                <li>
                                    <span>{ note }</span>
                                    <button class="btn btn-ghost btn-sm"
                                        onclick={link.callback(move |_| Msg::RemoveNote(index))}>{"×"}</button>
                                </li>
                            })
                        }
                    </ul>
                    <p class="muted small">{"Common Diagnosis Codes"}</p>
                    <div class="chips">
                        {
                            for COMMON_DIAGNOSIS_CODES.iter().map(|&code| html! {
                                <button class="chip" onclick={link.callback(move |_| Msg::QuickNote(code))}>{ code }</button>
                            })
                        }
                    </div>
                </section>

                <section class="card form">
                    <h3>{"Additional Information"}</h3>
                    <textarea rows="4"
                        placeholder="Any additional information that might help with the pre-authorization process"
                        value={form.additional_info.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let el: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::AdditionalInfo(el.value())
                        })} />
                </section>

                <div class="actions">
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::Submit)}>
                        {"Submit Pre-Authorization Request"}
                    </button>
                </div>
            </div>
        }
    }
}
