//! State machine of the attendance detail view

use crate::attendance::{AttendanceRecord, CheckAttendanceResponse, DayStatus};
use crate::error::{ApiError, Envelope};

pub const MISSING_PHONE: &str = "Nomor WhatsApp tidak ditemukan.";
pub const NOT_FOUND: &str = "Data tidak ditemukan.";
pub const FETCH_FAILED: &str = "Terjadi kesalahan saat mengambil data.";

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// No phone number in the query string
    NoIdentifier,
    Loading,
    Failed(String),
    Loaded(DetailView),
}

impl DetailState {
    /// Initial state for the given query parameter.
    pub fn start(phone: Option<&str>) -> Self {
        match phone.map(str::trim) {
            Some(p) if !p.is_empty() => DetailState::Loading,
            _ => DetailState::NoIdentifier,
        }
    }

    /// State after the check call resolved. A successful reply with zero
    /// records is reported like a rejection.
    pub fn resolve(outcome: Result<CheckAttendanceResponse, ApiError>) -> Self {
        let outcome = outcome.and_then(Envelope::into_result).and_then(|resp| {
            DetailView::new(resp.data).ok_or(ApiError::Rejected(resp.message))
        });
        match outcome {
            Ok(view) => DetailState::Loaded(view),
            Err(e) => DetailState::Failed(e.user_message(FETCH_FAILED, NOT_FOUND)),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            DetailState::NoIdentifier => Some(MISSING_PHONE),
            DetailState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Fetched records plus the month on screen
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    records: Vec<AttendanceRecord>,
    selected: String,
}

impl DetailView {
    /// Starts on the month of the last record in server order. The backend is
    /// expected to send months chronologically; no reordering happens here.
    pub fn new(records: Vec<AttendanceRecord>) -> Option<Self> {
        let selected = records.last()?.month.clone();
        Some(Self { records, selected })
    }

    /// Month codes for the selector, in server order.
    pub fn months(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.month.as_str()).collect()
    }

    pub fn selected_month(&self) -> &str {
        &self.selected
    }

    /// Switch months from already-fetched data. Unknown months are ignored.
    pub fn select(&mut self, month: &str) -> bool {
        if month != self.selected && self.records.iter().any(|r| r.month == month) {
            self.selected = month.to_string();
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> &AttendanceRecord {
        self.records
            .iter()
            .find(|r| r.month == self.selected)
            .unwrap_or(&self.records[self.records.len() - 1])
    }

    /// Day key, raw status and classification of the month on screen.
    pub fn rows(&self) -> Vec<(&str, &str, DayStatus)> {
        self.current()
            .days()
            .into_iter()
            .map(|(day, raw)| (day, raw, DayStatus::classify(raw)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::tests::record;
    use crate::attendance::AttendanceSummary;

    fn feb() -> AttendanceRecord {
        let mut rec = record(
            "Feb",
            &[("1", "Hadir"), ("2", "Izin"), ("3", "Alpha"), ("4", "null")],
            1,
        );
        rec.summary = AttendanceSummary {
            present: 1,
            excused: 1,
            absent: 1,
            percent: 33.33,
        };
        rec
    }

    fn ok(data: Vec<AttendanceRecord>) -> Result<CheckAttendanceResponse, ApiError> {
        Ok(CheckAttendanceResponse {
            success: true,
            data,
            message: None,
        })
    }

    #[test]
    fn test_start_without_phone() {
        assert_eq!(DetailState::start(None), DetailState::NoIdentifier);
        assert_eq!(DetailState::start(Some("  ")), DetailState::NoIdentifier);
        assert_eq!(DetailState::start(Some("0812")), DetailState::Loading);
        assert_eq!(DetailState::NoIdentifier.error_message(), Some(MISSING_PHONE));
    }

    #[test]
    fn test_single_february_record() {
        let state = DetailState::resolve(ok(vec![feb()]));
        let DetailState::Loaded(view) = state else {
            panic!("expected loaded state");
        };
        assert_eq!(view.months(), vec!["Feb"]);
        let current = view.current();
        assert_eq!(
            (current.summary.present, current.summary.excused, current.summary.absent),
            (1, 1, 1)
        );
        assert_eq!(current.display_percent(), 25.0);

        let rows = view.rows();
        assert_eq!(rows[3].0, "4");
        assert_eq!(rows[3].2, DayStatus::NotStarted);
        assert_eq!(rows[3].2.label(), "Kelas belum dimulai");
    }

    #[test]
    fn test_last_record_in_array_order_is_selected() {
        let recs = vec![record("Mar", &[], 0), record("Feb", &[], 0)];
        let DetailState::Loaded(view) = DetailState::resolve(ok(recs)) else {
            panic!("expected loaded state");
        };
        assert_eq!(view.selected_month(), "Feb");
        assert_eq!(view.months(), vec!["Mar", "Feb"]);
    }

    #[test]
    fn test_switch_month_without_refetch() {
        let mut view = DetailView::new(vec![
            record("Feb", &[("1", "Hadir")], 1),
            record("Mar", &[("1", "Alpha"), ("2", "Hadir")], 1),
        ])
        .unwrap();
        assert_eq!(view.selected_month(), "Mar");
        assert_eq!(view.current().display_percent(), 50.0);
        assert!(view.select("Feb"));
        assert_eq!(view.current().display_percent(), 100.0);
        assert!(!view.select("Jun"));
        assert_eq!(view.selected_month(), "Feb");
    }

    #[test]
    fn test_empty_data_is_an_error() {
        let state = DetailState::resolve(ok(vec![]));
        assert_eq!(state, DetailState::Failed(NOT_FOUND.to_string()));

        let state = DetailState::resolve(Ok(CheckAttendanceResponse {
            success: true,
            data: vec![],
            message: Some("Nomor tidak terdaftar".into()),
        }));
        assert_eq!(state.error_message(), Some("Nomor tidak terdaftar"));
    }

    #[test]
    fn test_rejection_and_transport_failure() {
        let state = DetailState::resolve(Ok(CheckAttendanceResponse {
            success: false,
            data: vec![],
            message: Some("Nomor tidak valid".into()),
        }));
        assert_eq!(state.error_message(), Some("Nomor tidak valid"));

        let state = DetailState::resolve(Err(ApiError::Transport("offline".into())));
        assert_eq!(state.error_message(), Some(FETCH_FAILED));
    }
}
