//! Backend endpoint URLs

use crate::pager::PAGE_SIZE;

pub const STATS_PATH: &str = "/admin/stats";
pub const HISTORY_PATH: &str = "/admin/history";

/// Builds absolute URLs from the configured base URL
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    // Public

    pub fn check_attendance(&self) -> String {
        self.url("/attendance/check")
    }

    // Auth

    pub fn login(&self) -> String {
        self.url("/auth/login")
    }

    pub fn logout(&self) -> String {
        self.url("/auth/logout")
    }

    pub fn me(&self) -> String {
        self.url("/auth/me")
    }

    pub fn update_profile(&self) -> String {
        self.url("/auth/update-profile")
    }

    /// List (GET) and create (POST) share this URL
    pub fn users(&self) -> String {
        self.url("/auth/users")
    }

    pub fn user(&self, id: &str) -> String {
        self.url(&format!("/auth/users/{}", urlencoding::encode(id)))
    }

    // Admin

    pub fn fetch_attendance(&self, month: &str) -> String {
        self.url(&format!("/admin/fetch/{}", urlencoding::encode(month)))
    }

    pub fn data(&self, program: &str, page: u32) -> String {
        self.url(&format!(
            "/admin/data?program={}&page={}&limit={}",
            urlencoding::encode(program),
            page,
            PAGE_SIZE
        ))
    }

    /// `?program=` is left out for a missing or blank keyword.
    pub fn stats(&self, program: Option<&str>) -> String {
        match program.filter(|p| !p.is_empty()) {
            Some(p) => self.url(&format!("{}?program={}", STATS_PATH, urlencoding::encode(p))),
            None => self.url(STATS_PATH),
        }
    }

    /// Each parameter is sent only when present and non-blank.
    pub fn history(&self, month: Option<&str>, program: Option<&str>) -> String {
        let params: Vec<String> = [("month", month), ("program", program)]
            .into_iter()
            .filter_map(|(name, value)| {
                value
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{}={}", name, urlencoding::encode(v)))
            })
            .collect();
        if params.is_empty() {
            self.url(HISTORY_PATH)
        } else {
            self.url(&format!("{}?{}", HISTORY_PATH, params.join("&")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> Endpoints {
        Endpoints::new("https://absen.example.com/api")
    }

    #[test]
    fn test_fixed_paths() {
        let api = api();
        assert_eq!(api.check_attendance(), "https://absen.example.com/api/attendance/check");
        assert_eq!(api.login(), "https://absen.example.com/api/auth/login");
        assert_eq!(api.logout(), "https://absen.example.com/api/auth/logout");
        assert_eq!(api.me(), "https://absen.example.com/api/auth/me");
        assert_eq!(api.update_profile(), "https://absen.example.com/api/auth/update-profile");
        assert_eq!(api.users(), "https://absen.example.com/api/auth/users");
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let api = api();
        assert_eq!(api.user("65f0c0ffee"), "https://absen.example.com/api/auth/users/65f0c0ffee");
        assert_eq!(api.user("a/b c"), "https://absen.example.com/api/auth/users/a%2Fb%20c");
        assert_eq!(api.fetch_attendance("Feb"), "https://absen.example.com/api/admin/fetch/Feb");
        assert_eq!(api.fetch_attendance("Feb 2026"), "https://absen.example.com/api/admin/fetch/Feb%202026");
    }

    #[test]
    fn test_data_page_carries_fixed_limit() {
        let api = api();
        assert_eq!(
            api.data("All", 1),
            "https://absen.example.com/api/admin/data?program=All&page=1&limit=10"
        );
        assert_eq!(
            api.data("Web & Mobile", 3),
            "https://absen.example.com/api/admin/data?program=Web%20%26%20Mobile&page=3&limit=10"
        );
    }

    #[test]
    fn test_stats_omits_blank_program() {
        let api = api();
        assert_eq!(api.stats(None), "https://absen.example.com/api/admin/stats");
        assert_eq!(api.stats(Some("")), "https://absen.example.com/api/admin/stats");
        assert_eq!(
            api.stats(Some("Website")),
            "https://absen.example.com/api/admin/stats?program=Website"
        );
    }

    #[test]
    fn test_history_params_are_independent() {
        let api = api();
        assert_eq!(api.history(None, None), "https://absen.example.com/api/admin/history");
        assert_eq!(api.history(Some(""), Some("")), "https://absen.example.com/api/admin/history");
        assert_eq!(
            api.history(Some("Mar"), None),
            "https://absen.example.com/api/admin/history?month=Mar"
        );
        assert_eq!(
            api.history(None, Some("AI")),
            "https://absen.example.com/api/admin/history?program=AI"
        );
        assert_eq!(
            api.history(Some("Mar"), Some("AI")),
            "https://absen.example.com/api/admin/history?month=Mar&program=AI"
        );
    }
}
