//! Session context
//!
//! Holds the signed-in administrator and the shared API client. Admin views
//! read the user from here for authorization hints and issue every request
//! through `api`.

use std::ops::Deref;
use std::rc::Rc;

use absen_types::{AdminUser, SessionAction, SessionState};
use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session(SessionState);

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(Session(state))
    }
}

impl Deref for Session {
    type Target = SessionState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub session: UseReducerHandle<Session>,
    pub api: ApiClient,
}

impl SessionContext {
    pub fn user(&self) -> Option<AdminUser> {
        self.session.user().cloned()
    }

    pub fn dispatch(&self, action: SessionAction) {
        self.session.dispatch(action);
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub api: ApiClient,
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(Session::default);
    let context = SessionContext {
        session,
        api: props.api.clone(),
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}

/// The surrounding [`SessionProvider`]'s context.
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider is mounted at the root")
}
