//! Absen Types - Pure types and presentation logic for the attendance portal
//!
//! This crate contains the transfer objects exchanged with the backend API and
//! every piece of view arithmetic the frontend performs on them. It has no async
//! runtime and no browser bindings, so it compiles for `wasm32` and runs its
//! tests natively.

pub mod attendance;
pub mod cache;
pub mod detail;
pub mod endpoints;
pub mod error;
pub mod history;
pub mod http;
pub mod mentee;
pub mod month;
pub mod pager;
pub mod profile;
pub mod seq;
pub mod session;
pub mod stats;
pub mod sync;
pub mod tab;
pub mod user;

pub use attendance::*;
pub use cache::{CacheKey, ResponseCache, DEFAULT_TTL_MS};
pub use detail::{DetailState, DetailView};
pub use endpoints::{Endpoints, HISTORY_PATH, STATS_PATH};
pub use error::{ApiError, Envelope, Result, CONNECTION_ERROR};
pub use history::*;
pub use http::{response_status, Method, RequestOptions};
pub use mentee::*;
pub use month::{Month, DEFAULT_MONTH, MONTHS, PORTAL_YEAR};
pub use pager::{PageCursor, ProgramFilter, PAGE_SIZE};
pub use profile::{
    delete_prompt, login_error, AccountList, AccountsAction, NewAccountForm, Notice,
    ProfileAction, ProfileError, ProfileForm, ACCOUNT_CREATE_FAILED, ACCOUNT_DELETE_FAILED,
    LOGIN_FAILED, PROFILE_UPDATE_FAILED,
};
pub use seq::{RequestSeq, Ticket};
pub use session::{SessionAction, SessionState};
pub use stats::*;
pub use sync::*;
pub use tab::Tab;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Generic `{success, message}` reply used by login, logout, create and delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for MessageResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
