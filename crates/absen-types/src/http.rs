//! Request description shared by every API call

use serde::Serialize;

use crate::error::{ApiError, Result};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Status of a finished request. The browser reports 0 when no response
/// arrived at all (network error, CORS rejection, abort).
pub fn response_status(status: u16) -> Result<u16> {
    if status == 0 {
        Err(ApiError::Transport("network error".to_string()))
    } else {
        Ok(status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Method, optional JSON body and caller header overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
    overrides: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            overrides: Vec::new(),
        }
    }

    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn post() -> Self {
        Self::new(Method::Post)
    }

    pub fn put() -> Self {
        Self::new(Method::Put)
    }

    pub fn delete() -> Self {
        Self::new(Method::Delete)
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((name.into(), value.into()));
        self
    }

    /// Default JSON content type merged with the caller's overrides. Header
    /// names compare case-insensitively and the last value wins.
    pub fn headers(&self) -> Vec<(String, String)> {
        let mut merged: Vec<(String, String)> =
            vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())];
        for (name, value) in &self.overrides {
            match merged
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            {
                Some(slot) => slot.1 = value.clone(),
                None => merged.push((name.clone(), value.clone())),
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_content_type_by_default() {
        let headers = RequestOptions::get().headers();
        assert_eq!(
            headers,
            vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())]
        );
    }

    #[test]
    fn test_overrides_replace_and_extend() {
        let opts = RequestOptions::post()
            .header("content-type", "text/plain")
            .header("X-Request-Id", "7");
        let headers = opts.headers();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].1, "text/plain");
        assert_eq!(headers[1], ("X-Request-Id".to_string(), "7".to_string()));
    }

    #[test]
    fn test_status_zero_is_transport_failure() {
        let err = response_status(0).unwrap_err();
        assert!(err.is_transport());
        assert_eq!(response_status(200), Ok(200));
        // Server errors still carry a JSON envelope to decode.
        assert_eq!(response_status(401), Ok(401));
    }

    #[test]
    fn test_json_body() {
        #[derive(Serialize)]
        struct Body<'a> {
            whatsapp: &'a str,
        }
        let opts = RequestOptions::post()
            .json(&Body {
                whatsapp: "0812",
            })
            .unwrap();
        assert_eq!(opts.method.as_str(), "POST");
        assert_eq!(opts.body.as_deref(), Some(r#"{"whatsapp":"0812"}"#));
    }
}
