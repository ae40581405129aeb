//! Account settings tab
//!
//! Profile editing for the signed-in administrator plus management of the
//! other admin accounts.

use std::rc::Rc;

use absen_types::{
    delete_prompt, short_date, AccountList, AccountsAction, AdminUser, NewAccountForm, Notice,
    ProfileAction, ProfileForm, RequestSeq, SessionAction, ACCOUNT_CREATE_FAILED,
    ACCOUNT_DELETE_FAILED, PROFILE_UPDATE_FAILED,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::session::use_session;
use crate::utils::{clock, dom};

#[derive(Clone, Debug, Default, PartialEq)]
struct ProfileState(ProfileForm);

impl Reducible for ProfileState {
    type Action = ProfileAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        form.apply(action);
        Rc::new(ProfileState(form))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Accounts(AccountList);

impl Reducible for Accounts {
    type Action = AccountsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut list = self.0.clone();
        list.apply(action);
        Rc::new(Accounts(list))
    }
}

#[function_component(SettingsPanel)]
pub fn settings_panel() -> Html {
    html! {
        <div class="tab-settings">
            <div class="settings-header">
                <h3>{ "Pengaturan Akun" }</h3>
                <p class="muted">
                    { "Kelola informasi akun, ubah password, dan kelola akun administrator lainnya." }
                </p>
            </div>
            <ProfileCard />
            <AccountsCard />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PasswordInputProps {
    value: AttrValue,
    placeholder: AttrValue,
    oninput: Callback<String>,
    #[prop_or_default]
    autocomplete: Option<AttrValue>,
}

/// Password field with a show/hide toggle
#[function_component(PasswordInput)]
fn password_input(props: &PasswordInputProps) -> Html {
    let visible = use_state(|| false);

    let toggle = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(!*visible))
    };
    let oninput = {
        let emit = props.oninput.clone();
        Callback::from(move |e: InputEvent| emit.emit(dom::input_value(&e)))
    };

    html! {
        <div class="password-input">
            <input
                type={if *visible { "text" } else { "password" }}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                value={props.value.clone()}
                {oninput}
            />
            <button type="button" class="btn-icon" onclick={toggle}>
                { if *visible { "Sembunyikan" } else { "Tampilkan" } }
            </button>
        </div>
    }
}

fn render_notice(notice: &Option<Notice>) -> Html {
    match notice {
        Some(notice) => html! {
            <div class={classes!("notice", if notice.is_success() { "success" } else { "error" })}>
                { notice.text().to_string() }
            </div>
        },
        None => html! {},
    }
}

#[function_component(ProfileCard)]
fn profile_card() -> Html {
    let context = use_session();
    let user = context.user();
    let form = {
        let user = user.clone();
        use_reducer(move || ProfileState(ProfileForm::for_user(user.as_ref())))
    };
    let notice = use_state(|| None::<Notice>);
    let saving = use_state(|| false);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| form.dispatch(ProfileAction::Name(dom::input_value(&e))))
    };
    let on_current = {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(ProfileAction::CurrentPassword(value)))
    };
    let on_new = {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(ProfileAction::NewPassword(value)))
    };

    let on_submit = {
        let form = form.clone();
        let notice = notice.clone();
        let saving = saving.clone();
        let user = user.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let body = match form.0.changes(user.as_ref()) {
                Ok(body) => body,
                Err(e) => {
                    notice.set(Some(Notice::Error(e.to_string())));
                    return;
                }
            };

            saving.set(true);
            notice.set(None);
            let context = context.clone();
            let form = form.clone();
            let notice = notice.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match context.api.update_profile(&body).await {
                    Ok(resp) => {
                        let message = resp
                            .message
                            .unwrap_or_else(|| "Profil berhasil diperbarui.".to_string());
                        notice.set(Some(Notice::Success(message)));
                        if let Some(updated) = resp.user {
                            log::info!("Profile updated for {}", updated.username);
                            context.dispatch(SessionAction::ProfileUpdated(updated));
                        }
                        form.dispatch(ProfileAction::ClearPasswords);
                    }
                    Err(e) => {
                        log::warn!("Profile update failed: {}", e);
                        notice.set(Some(Notice::from_error(&e, PROFILE_UPDATE_FAILED)));
                    }
                }
                saving.set(false);
            });
        })
    };

    let username = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();

    html! {
        <section class="card">
            <div class="card-header">
                <div>
                    <h3>{ "Profil Saya" }</h3>
                    <p class="muted">{ "Perbarui nama tampilan dan password Anda." }</p>
                </div>
            </div>
            <form class="card-body settings-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label>{ "Username" }</label>
                    <input type="text" value={username} disabled={true} />
                    <p class="hint">{ "Username tidak dapat diubah." }</p>
                </div>
                <div class="form-group">
                    <label>{ "Nama Tampilan" }</label>
                    <input type="text" value={form.0.name.clone()} oninput={on_name} />
                </div>
                <div class="form-group">
                    <label>{ "Ubah Password" }</label>
                    <PasswordInput
                        value={form.0.current_password.clone()}
                        placeholder="Password saat ini"
                        autocomplete="current-password"
                        oninput={on_current}
                    />
                    <PasswordInput
                        value={form.0.new_password.clone()}
                        placeholder="Password baru (min. 6 karakter)"
                        autocomplete="new-password"
                        oninput={on_new}
                    />
                </div>

                { render_notice(&notice) }

                <button type="submit" class="btn-primary" disabled={*saving}>
                    { if *saving { "Menyimpan..." } else { "Simpan Perubahan" } }
                </button>
            </form>
        </section>
    }
}

#[function_component(AccountsCard)]
fn accounts_card() -> Html {
    let context = use_session();
    let accounts = use_reducer(Accounts::default);
    let seq = use_state(RequestSeq::new);
    let show_form = use_state(|| false);
    let form = use_state(NewAccountForm::default);
    let notice = use_state(|| None::<Notice>);
    let creating = use_state(|| false);

    {
        let accounts = accounts.clone();
        let context = context.clone();
        let seq = (*seq).clone();
        use_effect_with(accounts.0.revision, move |_| {
            let ticket = seq.begin();
            spawn_local(async move {
                let outcome = context.api.list_users().await;
                if !seq.is_current(ticket) {
                    log::debug!("Dropping stale admin account list");
                    return;
                }
                match outcome {
                    Ok(list) => accounts.dispatch(AccountsAction::Loaded(list)),
                    Err(e) => log::error!("Failed to load admin accounts: {}", e),
                }
            });
            || ()
        });
    }

    let on_toggle = {
        let show_form = show_form.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            show_form.set(!*show_form);
            notice.set(None);
        })
    };

    let field = |apply: fn(&mut NewAccountForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_name = field(|f, v| f.name = v).reform(|e: InputEvent| dom::input_value(&e));
    let on_username = field(|f, v| f.username = v).reform(|e: InputEvent| dom::input_value(&e));
    let on_password = field(|f, v| f.password = v);

    let on_create = {
        let context = context.clone();
        let form = form.clone();
        let show_form = show_form.clone();
        let notice = notice.clone();
        let creating = creating.clone();
        let accounts = accounts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *creating {
                return;
            }
            creating.set(true);
            notice.set(None);

            let request = form.to_request();
            let context = context.clone();
            let form = form.clone();
            let show_form = show_form.clone();
            let notice = notice.clone();
            let creating = creating.clone();
            let accounts = accounts.clone();
            spawn_local(async move {
                match context.api.create_user(&request).await {
                    Ok(resp) => {
                        log::info!("Created admin account {}", request.username);
                        let message = resp
                            .message
                            .unwrap_or_else(|| "Akun berhasil dibuat.".to_string());
                        notice.set(Some(Notice::Success(message)));
                        form.set(NewAccountForm::default());
                        show_form.set(false);
                        accounts.dispatch(AccountsAction::Changed);
                    }
                    Err(e) => {
                        log::warn!("Account creation failed: {}", e);
                        notice.set(Some(Notice::from_error(&e, ACCOUNT_CREATE_FAILED)));
                    }
                }
                creating.set(false);
            });
        })
    };

    let on_delete = {
        let context = context.clone();
        let accounts = accounts.clone();
        Callback::from(move |target: AdminUser| {
            if !dom::confirm(&delete_prompt(&target.username)) {
                return;
            }
            let context = context.clone();
            let accounts = accounts.clone();
            spawn_local(async move {
                match context.api.delete_user(&target.id).await {
                    Ok(_) => {
                        log::info!("Deleted admin account {}", target.username);
                        accounts.dispatch(AccountsAction::Changed);
                    }
                    Err(e) => {
                        log::warn!("Account deletion failed: {}", e);
                        dom::alert(Notice::from_error(&e, ACCOUNT_DELETE_FAILED).text());
                    }
                }
            });
        })
    };

    let offset = clock::local_offset();

    html! {
        <section class="card">
            <div class="card-header">
                <div>
                    <h3>{ "Kelola Akun Administrator" }</h3>
                    <p class="muted">{ "Tambah atau hapus akun admin yang dapat mengakses dashboard." }</p>
                </div>
                <button class="btn-secondary" onclick={on_toggle}>{ "Tambah Akun" }</button>
            </div>

            <div class="card-body">
                { render_notice(&notice) }

                if *show_form {
                    <form class="account-form" onsubmit={on_create}>
                        <h4>{ "Tambah Akun Baru" }</h4>
                        <div class="form-group">
                            <label>{ "Nama" }</label>
                            <input type="text" value={form.name.clone()} oninput={on_name} required={true} />
                        </div>
                        <div class="form-group">
                            <label>{ "Username" }</label>
                            <input type="text" value={form.username.clone()} oninput={on_username} required={true} />
                        </div>
                        <div class="form-group">
                            <label>{ "Password (min 6)" }</label>
                            <PasswordInput
                                value={form.password.clone()}
                                placeholder="Password"
                                autocomplete="new-password"
                                oninput={on_password}
                            />
                        </div>
                        <div class="form-actions">
                            <button type="submit" class="btn-primary" disabled={*creating}>
                                { if *creating { "Membuat..." } else { "Buat Akun" } }
                            </button>
                            <button type="button" class="btn-secondary" onclick={
                                let show_form = show_form.clone();
                                Callback::from(move |_: MouseEvent| show_form.set(false))
                            }>
                                { "Batal" }
                            </button>
                        </div>
                    </form>
                }

                <ul class="account-list">
                    { for accounts.0.users.iter().map(|u| {
                        let deletable = context.session.can_offer_delete(u);
                        let created = u
                            .created_at
                            .map(|at| short_date(at, offset))
                            .unwrap_or_else(|| "-".to_string());
                        let on_delete = {
                            let on_delete = on_delete.clone();
                            let target = u.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(target.clone()))
                        };
                        html! {
                            <li key={u.id.clone()} class="account-row">
                                <div class="avatar small">{ u.initial() }</div>
                                <div class="account-meta">
                                    <div class="account-name">
                                        <span>{ &u.name }</span>
                                        if u.is_superadmin() {
                                            <span class="role-badge">{ "Super Admin" }</span>
                                        }
                                    </div>
                                    <span class="muted">{ format!("@{} · Dibuat {}", u.username, created) }</span>
                                </div>
                                if deletable {
                                    <button class="btn-danger" onclick={on_delete}>{ "Hapus" }</button>
                                }
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </section>
    }
}
