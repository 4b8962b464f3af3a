use common::forms::field_entry::{FieldEdit, FormStatus};
use common::model::field_data::{Commodity, Unit};
use common::model::region::SUB_DISTRICTS;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::FieldInput;

pub fn view(component: &FieldInput, ctx: &Context<FieldInput>) -> Html {
    let link = ctx.link();
    let form = &component.form;
    let status = form.status();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="page narrow">
            <div class="page-header">
                <h2>{"Input Data Lapangan"}</h2>
                <p class="muted">{"Formulir pencatatan data produksi perikanan di lapangan"}</p>
            </div>

            { status_banner(status) }

            <form class="card form" {onsubmit}>
                <h3>{"Formulir Data Produksi"}</h3>

                <div class="grid-2">
                    <label for="kecamatan">{"Kecamatan *"}
                        <select id="kecamatan" onchange={select(link, FieldEdit::SubDistrict)}>
                            <option value="" selected={form.sub_district.is_empty()}>{"Pilih Kecamatan"}</option>
                            {
                                for SUB_DISTRICTS.iter().map(|&name| html! {
                                    <option value={name} selected={form.sub_district == name}>{ name }</option>
                                })
                            }
                        </select>
                    </label>
                    <label for="desa">{"Desa *"}
                        <select id="desa" disabled={form.sub_district.is_empty()}
                            onchange={select(link, FieldEdit::Village)}>
                            <option value="" selected={form.village.is_empty()}>{"Pilih Desa"}</option>
                            {
                                for form.available_villages().iter().map(|&name| html! {
                                    <option value={name} selected={form.village == name}>{ name }</option>
                                })
                            }
                        </select>
                    </label>
                </div>

                <div class="grid-2">
                    <label for="tanggal">{"Tanggal Produksi *"}
                        <input id="tanggal" type="date" value={form.date.clone()}
                            oninput={input(link, FieldEdit::Date)} />
                    </label>
                    <label for="komoditas">{"Jenis Komoditas *"}
                        <select id="komoditas"
                            onchange={select(link, |v| FieldEdit::Commodity(Commodity::from_label(&v)))}>
                            <option value="" selected={form.commodity.is_none()}>{"Pilih Komoditas"}</option>
                            {
                                for Commodity::ALL.iter().map(|&c| html! {
                                    <option value={c.label()} selected={form.commodity == Some(c)}>{ c.label() }</option>
                                })
                            }
                        </select>
                    </label>
                </div>

                <div class="grid-2">
                    <label for="kuantitas">{"Kuantitas Produksi *"}
                        <input id="kuantitas" type="number" min="0" step="0.01"
                            placeholder="Masukkan jumlah produksi"
                            value={form.quantity.clone()}
                            oninput={input(link, FieldEdit::Quantity)} />
                    </label>
                    <label for="satuan">{"Satuan *"}
                        <select id="satuan"
                            onchange={select(link, |v| FieldEdit::Unit(Unit::from_label(&v).unwrap_or_default()))}>
                            {
                                for Unit::ALL.iter().map(|&u| html! {
                                    <option value={u.label()} selected={form.unit == u}>{ u.label() }</option>
                                })
                            }
                        </select>
                    </label>
                </div>

                <label for="petugas">{"Nama Petugas Lapangan"}
                    <input id="petugas" type="text" value={form.officer.clone()} disabled=true />
                </label>

                <label for="catatan">{"Catatan / Observasi"}
                    <textarea id="catatan" rows="4"
                        placeholder="Tambahkan catatan atau observasi lapangan..."
                        value={form.notes.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::Edit(FieldEdit::Notes(area.value()))
                        })} />
                </label>

                <div class="actions">
                    <button type="submit" class="btn btn-primary" disabled={status != FormStatus::Valid}>
                        {"Simpan Data"}
                    </button>
                </div>
            </form>
        </div>
    }
}

fn status_banner(status: FormStatus) -> Html {
    match status {
        FormStatus::Idle => html! {},
        FormStatus::Valid => html! {
            <div class="banner banner-ok">{"Validasi berhasil. Formulir siap untuk dikirim."}</div>
        },
        FormStatus::Invalid => html! {
            <div class="banner banner-warn">{"Mohon lengkapi semua field yang wajib diisi."}</div>
        },
    }
}

fn select(link: &Scope<FieldInput>, edit: impl Fn(String) -> FieldEdit + 'static) -> Callback<Event> {
    link.callback(move |e: Event| {
        let el: HtmlSelectElement = e.target_unchecked_into();
        Msg::Edit(edit(el.value()))
    })
}

fn input(link: &Scope<FieldInput>, edit: impl Fn(String) -> FieldEdit + 'static) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let el: HtmlInputElement = e.target_unchecked_into();
        Msg::Edit(edit(el.value()))
    })
}
