//! Session Guard Component
//!
//! Confirms the admin session with `/auth/me` before rendering its children

use absen_types::SessionAction;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::use_session;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SessionGuardProps {
    pub children: Html,
}

/// Redirects to the login page when the session check fails. Nothing but a
/// spinner renders until the check succeeds.
#[function_component(SessionGuard)]
pub fn session_guard(props: &SessionGuardProps) -> Html {
    let context = use_session();
    let navigator = use_navigator();
    let verified = use_state(|| false);

    {
        let verified = verified.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match context.api.me().await {
                    Ok(user) => {
                        log::info!("Session confirmed for {}", user.username);
                        context.dispatch(SessionAction::Authenticated(user));
                        verified.set(true);
                    }
                    Err(e) => {
                        log::warn!("Session check failed ({}), redirecting to login", e);
                        context.dispatch(SessionAction::SignedOut);
                        if let Some(navigator) = navigator {
                            navigator.replace(&Route::Login);
                        }
                    }
                }
            });
            || ()
        });
    }

    if *verified {
        props.children.clone()
    } else {
        html! {
            <div class="page-loading">
                <div class="spinner"></div>
            </div>
        }
    }
}
