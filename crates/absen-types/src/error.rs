//! Error types for the attendance portal

use thiserror::Error;

/// Shown for every transport failure on admin views.
pub const CONNECTION_ERROR: &str = "Terjadi kesalahan koneksi ke server.";

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a single backend call.
///
/// Transport and decode failures carry the underlying detail for logging only;
/// views never show it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Rejected by server: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),

    #[error("No records returned")]
    Empty,
}

impl ApiError {
    /// Text a view renders for this error.
    ///
    /// `transport` replaces any transport/decode detail, `fallback` stands in
    /// when the server rejected the call without a message or returned nothing.
    pub fn user_message(&self, transport: &str, fallback: &str) -> String {
        match self {
            ApiError::Transport(_) | ApiError::Decode(_) => transport.to_string(),
            ApiError::Rejected(Some(msg)) if !msg.is_empty() => msg.clone(),
            ApiError::Rejected(_) | ApiError::Empty => fallback.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Decode(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Response bodies that carry the backend's `success` flag.
pub trait Envelope: Sized {
    fn success(&self) -> bool;

    fn message(&self) -> Option<&str> {
        None
    }

    /// Turn a `success:false` body into [`ApiError::Rejected`].
    fn into_result(self) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(ApiError::Rejected(self.message().map(str::to_string)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MessageResponse;

    #[test]
    fn test_transport_detail_is_never_shown() {
        let err = ApiError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message(CONNECTION_ERROR, "Login gagal."), CONNECTION_ERROR);

        let err = ApiError::Decode("expected value at line 1".into());
        assert_eq!(err.user_message("Gagal.", "Login gagal."), "Gagal.");
    }

    #[test]
    fn test_server_message_shown_verbatim() {
        let err = ApiError::Rejected(Some("Password salah".into()));
        assert_eq!(err.user_message(CONNECTION_ERROR, "Login gagal."), "Password salah");
    }

    #[test]
    fn test_fallback_when_message_missing_or_empty() {
        assert_eq!(
            ApiError::Rejected(None).user_message(CONNECTION_ERROR, "Login gagal."),
            "Login gagal."
        );
        assert_eq!(
            ApiError::Rejected(Some(String::new())).user_message(CONNECTION_ERROR, "Login gagal."),
            "Login gagal."
        );
        assert_eq!(
            ApiError::Empty.user_message(CONNECTION_ERROR, "Data tidak ditemukan."),
            "Data tidak ditemukan."
        );
    }

    #[test]
    fn test_envelope_into_result() {
        let ok = MessageResponse {
            success: true,
            message: Some("ok".into()),
        };
        assert!(ok.into_result().is_ok());

        let rejected = MessageResponse {
            success: false,
            message: Some("Tidak diizinkan".into()),
        };
        assert_eq!(
            rejected.into_result(),
            Err(ApiError::Rejected(Some("Tidak diizinkan".into())))
        );
    }
}
