//! Daily attendance aggregates

use serde::{Deserialize, Serialize};

use crate::error::Envelope;
use crate::mentee::PerformanceTier;

/// One calendar day aggregated across mentees
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHistoryRow {
    pub day: u32,
    #[serde(default)]
    pub day_label: String,
    #[serde(rename = "hadir", default)]
    pub present: u32,
    #[serde(rename = "izin", default)]
    pub excused: u32,
    #[serde(rename = "alpha", default)]
    pub absent: u32,
    #[serde(rename = "belumDiisi", default)]
    pub unfilled: u32,
    #[serde(default)]
    pub total_mentee: u32,
}

impl DailyHistoryRow {
    pub fn total(&self) -> u32 {
        self.present + self.excused + self.absent + self.unfilled
    }

    /// No mentee has been marked for this day yet.
    pub fn is_empty(&self) -> bool {
        self.present + self.excused + self.absent == 0
    }

    /// Whole-number attendance percentage, `None` for rows without data.
    pub fn percent(&self) -> Option<u32> {
        if self.is_empty() {
            return None;
        }
        let total = self.total();
        Some((self.present as f64 / total as f64 * 100.0).round() as u32)
    }

    pub fn tier(&self) -> Option<PerformanceTier> {
        self.percent()
            .map(|pct| PerformanceTier::from_percent(pct as f64))
    }

    pub fn label(&self) -> String {
        if self.day_label.is_empty() {
            self.day.to_string()
        } else {
            self.day_label.clone()
        }
    }
}

/// Reply of `GET /admin/history`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub success: bool,
    #[serde(default)]
    pub history: Vec<DailyHistoryRow>,
    #[serde(default)]
    pub total_mentee: u32,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for HistoryResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
