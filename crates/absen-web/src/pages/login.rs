//! Admin Login Page
//!
//! Username/password form backed by the cookie session

use absen_types::{login_error, ApiError};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::SessionContext;
use crate::Route;

pub enum LoginMsg {
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,
    LoginSuccess,
    Error(ApiError),
    SessionChanged(SessionContext),
}

pub struct LoginPage {
    username: String,
    password: String,
    loading: bool,
    error: Option<String>,
    session: Option<SessionContext>,
    _session_listener: Option<ContextHandle<SessionContext>>,
}

impl Component for LoginPage {
    type Message = LoginMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, listener) = ctx
            .link()
            .context::<SessionContext>(ctx.link().callback(LoginMsg::SessionChanged))
            .map_or((None, None), |(session, listener)| (Some(session), Some(listener)));

        Self {
            username: String::new(),
            password: String::new(),
            loading: false,
            error: None,
            session,
            _session_listener: listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginMsg::UsernameChanged(username) => {
                self.username = username;
                true
            }
            LoginMsg::PasswordChanged(password) => {
                self.password = password;
                true
            }
            LoginMsg::SessionChanged(session) => {
                self.session = Some(session);
                false
            }
            LoginMsg::Submit => {
                if self.loading {
                    return false;
                }
                let Some(session) = self.session.clone() else {
                    log::error!("Login submitted without a session context");
                    return false;
                };

                self.loading = true;
                self.error = None;

                let username = self.username.clone();
                let password = self.password.clone();
                ctx.link().send_future(async move {
                    match session.api.login(&username, &password).await {
                        Ok(_) => LoginMsg::LoginSuccess,
                        Err(e) => LoginMsg::Error(e),
                    }
                });

                true
            }
            LoginMsg::LoginSuccess => {
                self.loading = false;
                log::info!("Login successful for {}", self.username);

                match ctx.link().navigator() {
                    Some(navigator) => navigator.push(&Route::Dashboard),
                    None => log::error!("No router available after login"),
                }

                true
            }
            LoginMsg::Error(e) => {
                log::warn!("Login failed: {}", e);
                self.loading = false;
                self.error = Some(login_error(&e));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_username_change = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            LoginMsg::UsernameChanged(input.value())
        });

        let on_password_change = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            LoginMsg::PasswordChanged(input.value())
        });

        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            LoginMsg::Submit
        });

        let button_text = if self.loading {
            "Memverifikasi..."
        } else {
            "Masuk ke Dashboard →"
        };

        html! {
            <div class="login-container">
                <div class="login-box">
                    <h1>{ "Admin Panel" }</h1>
                    <p class="muted">{ "Sistem Manajemen Absensi Mentee" }</p>
                    <h2>{ "Masuk ke Dashboard" }</h2>

                    if let Some(ref error) = self.error {
                        <div class="error-message">{ error }</div>
                    }

                    <form onsubmit={on_submit}>
                        <div class="form-group">
                            <label>{ "Username" }</label>
                            <input
                                type="text"
                                placeholder="Masukkan username"
                                autocomplete="username"
                                value={self.username.clone()}
                                oninput={on_username_change}
                                disabled={self.loading}
                                required={true}
                            />
                        </div>

                        <div class="form-group">
                            <label>{ "Password" }</label>
                            <input
                                type="password"
                                placeholder="Masukkan password Anda"
                                autocomplete="current-password"
                                value={self.password.clone()}
                                oninput={on_password_change}
                                disabled={self.loading}
                                required={true}
                            />
                        </div>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled={self.loading}
                        >
                            { button_text }
                        </button>
                    </form>

                    <div class="login-footer">
                        <span class="muted">{ "Area Khusus Personel Berwenang" }</span>
                        <Link<Route> to={Route::Home} classes="btn-link">
                            { "← Kembali ke Portal Absensi" }
                        </Link<Route>>
                    </div>
                </div>
            </div>
        }
    }
}
