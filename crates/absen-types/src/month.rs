//! Month catalogue

/// Year every enumerated month belongs to.
pub const PORTAL_YEAR: i32 = 2026;

/// Month selected by default in the sync control and history view.
pub const DEFAULT_MONTH: &str = "Feb";

/// Short code understood by the backend plus its Indonesian label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub code: &'static str,
    pub label: &'static str,
}

pub const MONTHS: [Month; 5] = [
    Month { code: "Feb", label: "Februari" },
    Month { code: "Mar", label: "Maret" },
    Month { code: "Apr", label: "April" },
    Month { code: "May", label: "Mei" },
    Month { code: "Jun", label: "Juni" },
];

impl Month {
    pub fn find(code: &str) -> Option<Month> {
        MONTHS.iter().copied().find(|m| m.code == code)
    }

    /// e.g. "Februari 2026"
    pub fn display(&self) -> String {
        format!("{} {}", self.label, PORTAL_YEAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_month_is_first() {
        assert_eq!(MONTHS[0].code, DEFAULT_MONTH);
    }

    #[test]
    fn test_find_and_display() {
        let may = Month::find("May").unwrap();
        assert_eq!(may.display(), "Mei 2026");
        assert!(Month::find("Jan").is_none());
    }
}
