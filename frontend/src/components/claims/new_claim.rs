use common::forms::new_claim::{ClaimSubmission, Gender, NewClaimForm, UploadedDocument};
use common::model::claim::ClaimType;
use gloo_console::info;
use gloo_file::FileList;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::toast;

pub struct NewClaim {
    form: NewClaimForm,
}

#[derive(Properties, PartialEq)]
pub struct NewClaimProps {
    pub on_pre_auth: Callback<()>,
    pub on_done: Callback<()>,
    pub on_back: Callback<()>,
}

#[derive(Clone, Copy)]
pub enum Field {
    PatientName,
    Age,
    InsuranceId,
    TreatmentDate,
    HospitalName,
    Diagnosis,
}

pub enum Msg {
    Set(Field, String),
    Gender(Option<Gender>),
    ClaimType(ClaimType),
    AddDocuments(Vec<UploadedDocument>),
    RemoveDocument(usize),
    Submit { draft: bool },
}

impl Component for NewClaim {
    type Message = Msg;
    type Properties = NewClaimProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: NewClaimForm::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let form = &mut self.form;
        match msg {
            Msg::Set(field, value) => {
                let target = match field {
                    Field::PatientName => &mut form.patient_name,
                    Field::Age => &mut form.age,
                    Field::InsuranceId => &mut form.insurance_id,
                    Field::TreatmentDate => &mut form.treatment_date,
                    Field::HospitalName => &mut form.hospital_name,
                    Field::Diagnosis => &mut form.diagnosis,
                };
                *target = value;
            }
            Msg::Gender(gender) => form.gender = gender,
            Msg::ClaimType(claim_type) => form.claim_type = Some(claim_type),
            Msg::AddDocuments(documents) => form.add_documents(documents),
            Msg::RemoveDocument(index) => form.remove_document(index),
            Msg::Submit { draft } => match form.submit(draft) {
                Ok(outcome) => {
                    info!(format!("claim form for '{}': {:?}", form.patient_name, outcome));
                    if let Some(message) = outcome.message() {
                        toast::success(message, None);
                    }
                    match outcome {
                        ClaimSubmission::ProceedToPreAuth => ctx.props().on_pre_auth.emit(()),
                        ClaimSubmission::Submitted => ctx.props().on_done.emit(()),
                        ClaimSubmission::SavedDraft => {}
                    }
                    return false;
                }
                Err(err) => {
                    toast::alert(&err.to_string());
                    return false;
                }
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = &self.form;

        html! {
            <div class="page narrow">
                <div class="page-header row">
                    <div>
                        <h2>{"New Claim"}</h2>
                        <p class="muted">{"File a new insurance claim"}</p>
                    </div>
                    <button class="btn btn-ghost" onclick={ctx.props().on_back.reform(|_| ())}>{"← Back"}</button>
                </div>

                <section class="card form">
                    <h3>{"Patient Details"}</h3>
                    <div class="grid-2">
                        { text_input(link, "Full Name *", "Enter patient's full name", &form.patient_name, Field::PatientName) }
                        { text_input(link, "Age *", "Age", &form.age, Field::Age) }
                        <label>{"Gender *"}
                            <select onchange={link.callback(|e: Event| {
                                let el: HtmlSelectElement = e.target_unchecked_into();
                                Msg::Gender(Gender::from_key(&el.value()))
                            })}>
                                <option value="" selected={form.gender.is_none()}>{"Select gender"}</option>
                                {
                                    for Gender::ALL.iter().map(|&g| html! {
                                        <option value={g.key()} selected={form.gender == Some(g)}>{ g.label() }</option>
                                    })
                                }
                            </select>
                        </label>
                        { text_input(link, "Insurance ID *", "Enter insurance ID", &form.insurance_id, Field::InsuranceId) }
                    </div>
                </section>

                <section class="card form">
                    <h3>{"Treatment Details"}</h3>
                    <div class="grid-2">
                        <label>{"Treatment Date *"}
                            <input type="date" value={form.treatment_date.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    let el: HtmlInputElement = e.target_unchecked_into();
                                    Msg::Set(Field::TreatmentDate, el.value())
                                })} />
                        </label>
                        { text_input(link, "Hospital/Clinic Name *", "Enter hospital or clinic name", &form.hospital_name, Field::HospitalName) }
                    </div>
                    <label>{"Diagnosis *"}
                        <textarea rows="3" placeholder="Enter diagnosis details"
                            value={form.diagnosis.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let el: HtmlTextAreaElement = e.target_unchecked_into();
                                Msg::Set(Field::Diagnosis, el.value())
                            })} />
                    </label>
                </section>

                <section class="card form">
                    <h3>{"Claim Type"}</h3>
                    <div class="radio-group">
                        { claim_type_option(link, ClaimType::PreAuthorization, form.claim_type) }
                        { claim_type_option(link, ClaimType::Reimbursement, form.claim_type) }
                    </div>
                </section>

                <section class="card form">
                    <h3>{"Supporting Documents"}</h3>
                    <input type="file" multiple=true onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let documents = input
                            .files()
                            .map(|files| {
                                FileList::from(files)
                                    .iter()
                                    .map(|f| UploadedDocument { name: f.name(), size: f.size() })
                                    .collect()
                            })
                            .unwrap_or_default();
                        input.set_value("");
                        Msg::AddDocuments(documents)
                    })} />
                    <ul class="documents">
                        {
                            for form.documents.iter().enumerate().map(|(index, doc)| html! {
                                <li>
                                    <span>{ &doc.name }</span>
                                    <span class="muted small">{ doc.size_label() }</span>
                                    <button class="btn btn-ghost btn-sm"
                                        onclick={link.callback(move |_| Msg::RemoveDocument(index))}>{"Remove"}</button>
                                </li>
                            })
                        }
                    </ul>
                </section>

                <div class="actions">
                    <button class="btn btn-outline" onclick={link.callback(|_| Msg::Submit { draft: true })}>{"Save as Draft"}</button>
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::Submit { draft: false })}>{"Submit Claim"}</button>
                </div>
            </div>
        }
    }
}

fn text_input(
    link: &Scope<NewClaim>,
    label: &'static str,
    placeholder: &'static str,
    value: &str,
    field: Field,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let el: HtmlInputElement = e.target_unchecked_into();
        Msg::Set(field, el.value())
    });
    html! {
        <label>{ label }
            <input type="text" {placeholder} value={value.to_string()} {oninput} />
        </label>
    }
}

fn claim_type_option(link: &Scope<NewClaim>, claim_type: ClaimType, current: Option<ClaimType>) -> Html {
    html! {
        <label class="radio">
            <input type="radio" name="claim-type" value={claim_type.key()}
                checked={current == Some(claim_type)}
                onchange={link.callback(move |_| Msg::ClaimType(claim_type))} />
            { claim_type.label() }
        </label>
    }
}
