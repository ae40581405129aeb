//! Dashboard statistics and date formatting

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::Envelope;

const DAY_NAMES: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];

const MONTH_NAMES: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// Western Indonesia Time, UTC+7. Sync times are always shown in it.
const WIB_OFFSET_SECS: i32 = 7 * 3600;

/// Shown in place of the last-sync date when no sync ever ran.
pub const NEVER_SYNCED: &str = "Belum pernah sync";

/// Day reference as the backend sends it, either a number or a label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayRef {
    Number(u32),
    Text(String),
}

impl fmt::Display for DayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayRef::Number(n) => write!(f, "{}", n),
            DayRef::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Today's counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStats {
    pub date: DayRef,
    #[serde(default)]
    pub month: String,
    #[serde(rename = "totalMenteeBulanIni", default)]
    pub total_mentee_this_month: u32,
    #[serde(rename = "hadir", default)]
    pub present: u32,
    #[serde(rename = "izin", default)]
    pub excused: u32,
    #[serde(rename = "alpha", default)]
    pub absent: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    #[serde(default)]
    pub total_mentee: u32,
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde(default)]
    pub program_counts: HashMap<String, u32>,
    #[serde(default)]
    pub last_sync: Option<DateTime<Utc>>,
    #[serde(default)]
    pub today: Option<TodayStats>,
}

/// Reply of `GET /admin/stats`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(default)]
    pub stats: StatsData,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for StatsResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Last sync split for the overview card: long date and `HH.MM` time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastSync {
    pub date: String,
    pub time: Option<String>,
}

impl LastSync {
    pub fn from_timestamp(at: Option<DateTime<Utc>>, offset: FixedOffset) -> Self {
        match at {
            Some(at) => {
                let local = at.with_timezone(&offset);
                Self {
                    date: long_date(&local),
                    time: Some(format!("{:02}.{:02}", local.hour(), local.minute())),
                }
            }
            None => Self {
                date: NEVER_SYNCED.to_string(),
                time: None,
            },
        }
    }

    /// Date and time in WIB, independent of the browser's time zone.
    pub fn in_wib(at: Option<DateTime<Utc>>) -> Self {
        Self::from_timestamp(at, wib_offset())
    }
}

/// The fixed WIB offset used for every "Pukul HH.MM WIB" label
pub fn wib_offset() -> FixedOffset {
    FixedOffset::east_opt(WIB_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// e.g. "Selasa, 10 Februari 2026"
pub fn long_date(at: &DateTime<FixedOffset>) -> String {
    format!(
        "{}, {} {} {}",
        DAY_NAMES[at.weekday().num_days_from_monday() as usize],
        at.day(),
        MONTH_NAMES[at.month0() as usize],
        at.year()
    )
}

/// e.g. "10/2/2026"
pub fn short_date(at: DateTime<Utc>, offset: FixedOffset) -> String {
    let local = at.with_timezone(&offset);
    format!("{}/{}/{}", local.day(), local.month(), local.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_last_sync_in_local_time() {
        // 2026-02-10 01:05 UTC is Tuesday 08.05 WIB
        let at = Utc.with_ymd_and_hms(2026, 2, 10, 1, 5, 0).unwrap();
        let ls = LastSync::from_timestamp(Some(at), wib_offset());
        assert_eq!(ls.date, "Selasa, 10 Februari 2026");
        assert_eq!(ls.time.as_deref(), Some("08.05"));
    }

    #[test]
    fn test_last_sync_crosses_midnight() {
        let at = Utc.with_ymd_and_hms(2026, 2, 28, 20, 30, 0).unwrap();
        let ls = LastSync::from_timestamp(Some(at), wib_offset());
        assert_eq!(ls.date, "Minggu, 1 Maret 2026");
        assert_eq!(ls.time.as_deref(), Some("03.30"));
    }

    #[test]
    fn test_wib_label_ignores_viewer_zone() {
        let at = Utc.with_ymd_and_hms(2026, 2, 10, 1, 5, 0).unwrap();
        let ls = LastSync::in_wib(Some(at));
        assert_eq!(ls.time.as_deref(), Some("08.05"));
        assert_eq!(wib_offset().local_minus_utc(), 7 * 3600);

        let jakarta = LastSync::from_timestamp(Some(at), wib_offset());
        let utc_viewer = LastSync::from_timestamp(Some(at), Utc.fix());
        assert_eq!(ls, jakarta);
        assert_ne!(ls.time, utc_viewer.time);
    }

    #[test]
    fn test_never_synced() {
        let ls = LastSync::from_timestamp(None, wib_offset());
        assert_eq!(ls.date, NEVER_SYNCED);
        assert_eq!(ls.time, None);
    }

    #[test]
    fn test_short_date() {
        let at = Utc.with_ymd_and_hms(2026, 2, 10, 1, 5, 0).unwrap();
        assert_eq!(short_date(at, wib_offset()), "10/2/2026");
    }

    #[test]
    fn test_decode_stats() {
        let json = r#"{
            "success": true,
            "stats": {
                "totalMentee": 300,
                "programs": ["AI Development", "Web Development & UI/UX Design"],
                "programCounts": {"AI Development": 120, "Web Development & UI/UX Design": 180},
                "lastSync": null,
                "today": {"date": 12, "month": "Feb", "totalMenteeBulanIni": 290, "hadir": 250, "izin": 20, "alpha": 20}
            }
        }"#;
        let resp: StatsResponse = serde_json::from_str(json).unwrap();
        let today = resp.stats.today.as_ref().unwrap();
        assert_eq!(today.date.to_string(), "12");
        assert_eq!(today.total_mentee_this_month, 290);
        assert_eq!(resp.stats.program_counts["AI Development"], 120);
        assert_eq!(resp.stats.last_sync, None);
    }

    #[test]
    fn test_day_ref_accepts_text() {
        let today: TodayStats =
            serde_json::from_str(r#"{"date": "12", "month": "Feb", "hadir": 1}"#).unwrap();
        assert_eq!(today.date, DayRef::Text("12".into()));
        assert_eq!(today.absent, 0);
    }
}
