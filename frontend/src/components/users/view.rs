use common::model::user::{Role, User};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::top_sheet::TopSheet;

use super::messages::Msg;
use super::state::UserManagement;

pub fn view(component: &UserManagement, ctx: &Context<UserManagement>) -> Html {
    let link = ctx.link();
    let users = component.directory.users();

    html! {
        <div class="page users">
            <div class="page-header row">
                <div>
                    <h2>{"Manajemen Pengguna"}</h2>
                    <p class="muted">{"Kelola pengguna dan hak akses sistem"}</p>
                </div>
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenAdd)}>
                    {"+ Tambah Pengguna"}
                </button>
            </div>

            <section class="card">
                <h3>{"Daftar Pengguna"}</h3>
                <p class="muted">{ format!("Total {} pengguna terdaftar", users.len()) }</p>
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Nama"}</th>
                            <th>{"Email"}</th>
                            <th>{"Role"}</th>
                            <th>{"Login Terakhir"}</th>
                            <th>{"Aksi"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for users.iter().map(|user| user_row(user, link)) }
                    </tbody>
                </table>
            </section>

            { dialog(component, link) }
        </div>
    }
}

fn user_row(user: &User, link: &Scope<UserManagement>) -> Html {
    let edit = {
        let id = user.id.clone();
        link.callback(move |_| Msg::OpenEdit(id.clone()))
    };
    let delete = {
        let id = user.id.clone();
        link.callback(move |_| Msg::Delete(id.clone()))
    };

    html! {
        <tr key={user.id.clone()}>
            <td>{ &user.id }</td>
            <td>{ &user.name }</td>
            <td>{ &user.email }</td>
            <td><span class={user.role.badge().class()}>{ user.role.label() }</span></td>
            <td>{ &user.last_login }</td>
            <td class="actions">
                <button class="btn btn-ghost btn-sm" onclick={edit}>{"Edit"}</button>
                <button class="btn btn-ghost btn-sm danger" onclick={delete}>{"Hapus"}</button>
            </td>
        </tr>
    }
}

fn dialog(component: &UserManagement, link: &Scope<UserManagement>) -> Html {
    let Some(mode) = &component.dialog else {
        return html! {};
    };
    let form = &component.form;

    html! {
        <TopSheet
            open=true
            title={mode.title()}
            description={Some(mode.description().to_string())}
            on_close={link.callback(|_| Msg::CloseDialog)}
        >
            <div class="form">
                <label for="user-name">{"Nama Lengkap"}
                    <input id="user-name" type="text" placeholder="Masukkan nama lengkap"
                        value={form.name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let el: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetName(el.value())
                        })} />
                </label>
                <label for="user-email">{"Email"}
                    <input id="user-email" type="email" placeholder="nama@dinlutkan.kebumen.go.id"
                        value={form.email.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let el: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetEmail(el.value())
                        })} />
                </label>
                <label for="user-role">{"Role"}
                    <select id="user-role" onchange={link.callback(|e: Event| {
                        let el: HtmlSelectElement = e.target_unchecked_into();
                        Msg::SetRole(Role::from_label(&el.value()).unwrap_or_default())
                    })}>
                        {
                            for Role::ALL.iter().map(|&role| html! {
                                <option value={role.label()} selected={form.role == role}>{ role.label() }</option>
                            })
                        }
                    </select>
                </label>
                if let Some(err) = &component.error {
                    <p class="field-error">{ err.to_string() }</p>
                }
                <div class="actions">
                    <button class="btn btn-outline" onclick={link.callback(|_| Msg::CloseDialog)}>{"Batal"}</button>
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::Save)}>{ mode.submit_label() }</button>
                </div>
            </div>
        </TopSheet>
    }
}
