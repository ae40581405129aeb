//! Attendance records and per-day status classification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Envelope;

/// Label used when a record carries no cohort.
pub const DEFAULT_BATCH: &str = "Batch 10";

/// Precomputed counts delivered by the backend.
///
/// `percent` may be stale; views that show a percentage for a single record
/// use [`AttendanceRecord::display_percent`] instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    #[serde(rename = "hadir", default)]
    pub present: u32,
    #[serde(rename = "izin", default)]
    pub excused: u32,
    #[serde(rename = "alpha", default)]
    pub absent: u32,
    #[serde(rename = "persen", default)]
    pub percent: f64,
}

/// One mentee's attendance for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub whatsapp: String,
    pub name: String,
    #[serde(default)]
    pub mentor: String,
    #[serde(rename = "institusi", default)]
    pub institution: String,
    #[serde(rename = "programIL", default)]
    pub program: String,
    #[serde(default)]
    pub batch: String,
    #[serde(rename = "jenjang", default)]
    pub level: String,
    pub month: String,
    /// Day-of-month (as a string) to raw status text
    #[serde(default)]
    pub attendance: BTreeMap<String, String>,
    #[serde(default)]
    pub summary: AttendanceSummary,
    #[serde(rename = "lastFetchedAt", default)]
    pub last_fetched_at: Option<DateTime<Utc>>,
}

impl AttendanceRecord {
    /// Day entries ordered by numeric day, not by string key.
    pub fn days(&self) -> Vec<(&str, &str)> {
        let mut days: Vec<_> = self
            .attendance
            .iter()
            .map(|(day, status)| (day.as_str(), status.as_str()))
            .collect();
        days.sort_by_key(|(day, _)| day.trim().parse::<u32>().unwrap_or(u32::MAX));
        days
    }

    /// Present days over every listed day, unmarked ones included, rounded to
    /// two decimals. A record with no days reports 0.
    pub fn display_percent(&self) -> f64 {
        let total = self.attendance.len();
        if total == 0 {
            return 0.0;
        }
        round2(self.summary.present as f64 / total as f64 * 100.0)
    }

    pub fn batch_label(&self) -> &str {
        if self.batch.trim().is_empty() {
            DEFAULT_BATCH
        } else {
            &self.batch
        }
    }

    /// Uppercased first character of the name, for the avatar tile.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Classified status of a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayStatus {
    NotStarted,
    Present,
    /// Leave or sick; keeps the raw text as its label
    Excused(String),
    Absent,
    /// Anything unrecognised, shown as-is without styling
    Other(String),
}

impl DayStatus {
    /// Classify a raw status. Matching is case-insensitive on the trimmed text,
    /// and the literal `null` is checked before any substring rule.
    pub fn classify(raw: &str) -> Self {
        let s = raw.trim().to_lowercase();
        if s == "null" {
            DayStatus::NotStarted
        } else if s.contains("hadir") {
            DayStatus::Present
        } else if s == "izin" || s.contains("sakit") {
            DayStatus::Excused(raw.to_string())
        } else if s == "alpha" {
            DayStatus::Absent
        } else {
            DayStatus::Other(raw.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DayStatus::NotStarted => "Kelas belum dimulai",
            DayStatus::Present => "Hadir",
            DayStatus::Excused(raw) | DayStatus::Other(raw) => raw.as_str(),
            DayStatus::Absent => "Alpha",
        }
    }

    /// CSS class of the badge, `None` for unstyled text.
    pub fn badge_class(&self) -> Option<&'static str> {
        match self {
            DayStatus::NotStarted => Some("badge badge-muted"),
            DayStatus::Present => Some("badge badge-present"),
            DayStatus::Excused(_) => Some("badge badge-excused"),
            DayStatus::Absent => Some("badge badge-absent"),
            DayStatus::Other(_) => None,
        }
    }
}

/// Query string of the detail view: `?whatsapp=<number>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub whatsapp: Option<String>,
}

impl LookupQuery {
    /// Build the query for a submitted lookup form, `None` when the input is blank.
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                whatsapp: Some(trimmed.to_string()),
            })
        }
    }

    /// The phone number, if present and non-blank.
    pub fn phone(&self) -> Option<&str> {
        self.whatsapp
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Body of `POST /attendance/check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckAttendanceRequest {
    pub whatsapp: String,
}

/// Reply of `POST /attendance/check`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckAttendanceResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<AttendanceRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for CheckAttendanceResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(month: &str, days: &[(&str, &str)], present: u32) -> AttendanceRecord {
        AttendanceRecord {
            id: format!("rec-{month}"),
            whatsapp: "08123456789".into(),
            name: "siti rahma".into(),
            mentor: "Budi".into(),
            institution: "Universitas Indonesia".into(),
            program: "Web Development & UI/UX Design".into(),
            batch: String::new(),
            level: "S1".into(),
            month: month.into(),
            attendance: days
                .iter()
                .map(|(d, s)| (d.to_string(), s.to_string()))
                .collect(),
            summary: AttendanceSummary {
                present,
                excused: 0,
                absent: 0,
                percent: 0.0,
            },
            last_fetched_at: None,
        }
    }

    #[test]
    fn test_classify_null_any_case_and_whitespace() {
        for raw in ["null", "NULL", " Null ", "\tnULl\n"] {
            assert_eq!(DayStatus::classify(raw), DayStatus::NotStarted, "{raw:?}");
        }
    }

    #[test]
    fn test_classify_present_by_substring() {
        assert_eq!(DayStatus::classify("Hadir"), DayStatus::Present);
        assert_eq!(DayStatus::classify("HADIR (telat)"), DayStatus::Present);
        assert_eq!(DayStatus::classify("Tidak Hadir"), DayStatus::Present);
    }

    #[test]
    fn test_classify_excused_keeps_raw_label() {
        assert_eq!(DayStatus::classify("Izin"), DayStatus::Excused("Izin".into()));
        assert_eq!(
            DayStatus::classify("Sakit demam"),
            DayStatus::Excused("Sakit demam".into())
        );
        assert_eq!(DayStatus::classify("Sakit demam").label(), "Sakit demam");
        // "izin" is an exact match, unlike "sakit"
        assert_eq!(
            DayStatus::classify("izin keluarga"),
            DayStatus::Other("izin keluarga".into())
        );
    }

    #[test]
    fn test_classify_absent_and_other() {
        assert_eq!(DayStatus::classify("ALPHA"), DayStatus::Absent);
        assert_eq!(DayStatus::classify("Alpha").label(), "Alpha");
        let other = DayStatus::classify("Libur");
        assert_eq!(other, DayStatus::Other("Libur".into()));
        assert_eq!(other.badge_class(), None);
        assert_eq!(other.label(), "Libur");
    }

    #[test]
    fn test_display_percent_counts_unmarked_days() {
        let rec = record(
            "Feb",
            &[("1", "Hadir"), ("2", "Izin"), ("3", "Alpha"), ("4", "null")],
            1,
        );
        assert_eq!(rec.display_percent(), 25.0);
        assert_eq!(format!("{}%", rec.display_percent()), "25%");
    }

    #[test]
    fn test_display_percent_rounds_to_two_decimals() {
        let rec = record("Feb", &[("1", "Hadir"), ("2", "Alpha"), ("3", "Alpha")], 1);
        assert_eq!(rec.display_percent(), 33.33);

        let rec = record("Feb", &[("1", "Hadir"), ("2", "Hadir"), ("3", "Alpha")], 2);
        assert_eq!(rec.display_percent(), 66.67);
    }

    #[test]
    fn test_display_percent_empty_is_zero() {
        let rec = record("Feb", &[], 0);
        assert_eq!(rec.display_percent(), 0.0);
    }

    #[test]
    fn test_days_sorted_numerically() {
        let rec = record("Mar", &[("10", "Hadir"), ("2", "Alpha"), ("1", "null")], 1);
        let days: Vec<_> = rec.days().into_iter().map(|(d, _)| d).collect();
        assert_eq!(days, vec!["1", "2", "10"]);
    }

    #[test]
    fn test_batch_and_initial() {
        let mut rec = record("Feb", &[], 0);
        assert_eq!(rec.batch_label(), DEFAULT_BATCH);
        rec.batch = "Batch 11".into();
        assert_eq!(rec.batch_label(), "Batch 11");
        assert_eq!(rec.initial(), "S");
    }

    #[test]
    fn test_lookup_query() {
        assert_eq!(LookupQuery::from_input("   "), None);
        let q = LookupQuery::from_input(" 08123456789 ").unwrap();
        assert_eq!(q.phone(), Some("08123456789"));
        assert_eq!(LookupQuery::default().phone(), None);
        let blank = LookupQuery {
            whatsapp: Some(" ".into()),
        };
        assert_eq!(blank.phone(), None);
    }

    #[test]
    fn test_decode_backend_record() {
        let json = r#"{
            "success": true,
            "data": [{
                "_id": "65f0c0ffee",
                "whatsapp": "08123456789",
                "month": "Feb",
                "batch": "",
                "institusi": "Politeknik Negeri Batam",
                "jenjang": "D4",
                "lastFetchedAt": "2026-02-10T08:30:00.000Z",
                "mentor": "Andi",
                "name": "Rina",
                "programIL": "AI Development",
                "attendance": {"1": "Hadir", "2": "Izin", "3": "Alpha", "4": "null"},
                "summary": {"hadir": 1, "izin": 1, "alpha": 1, "persen": 33.33},
                "__v": 0
            }]
        }"#;
        let resp: CheckAttendanceResponse = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        let rec = &resp.data[0];
        assert_eq!(rec.program, "AI Development");
        assert_eq!(rec.summary.present, 1);
        assert_eq!(rec.summary.percent, 33.33);
        assert_eq!(rec.display_percent(), 25.0);
        assert!(rec.last_fetched_at.is_some());
    }
}
