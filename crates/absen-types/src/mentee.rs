//! Mentee summaries shown in the paginated table

use serde::{Deserialize, Serialize};

use crate::attendance::AttendanceSummary;
use crate::error::Envelope;

/// A table row: identity, program, month and summary without the day map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenteeSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "programIL", default)]
    pub program: String,
    #[serde(rename = "institusi", default)]
    pub institution: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub summary: AttendanceSummary,
    #[serde(default)]
    pub month: String,
}

impl MenteeSummary {
    pub fn tier(&self) -> PerformanceTier {
        PerformanceTier::from_percent(self.summary.percent)
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// First letters of the first two words, uppercased
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Attendance performance band; lower bounds are inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    Good,
    Fair,
    Poor,
}

impl PerformanceTier {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            PerformanceTier::Good
        } else if percent >= 60.0 {
            PerformanceTier::Fair
        } else {
            PerformanceTier::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceTier::Good => "Baik",
            PerformanceTier::Fair => "Cukup",
            PerformanceTier::Poor => "Kurang",
        }
    }

    /// Progress bar fill class
    pub fn bar_class(&self) -> &'static str {
        match self {
            PerformanceTier::Good => "bar-good",
            PerformanceTier::Fair => "bar-fair",
            PerformanceTier::Poor => "bar-poor",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            PerformanceTier::Good => "text-good",
            PerformanceTier::Fair => "text-fair",
            PerformanceTier::Poor => "text-poor",
        }
    }
}

/// Pagination metadata of `GET /admin/data`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total: Option<u64>,
    /// Distinct program names, only sent on unfiltered responses
    #[serde(default)]
    pub programs: Option<Vec<String>>,
}

/// Reply of `GET /admin/data`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPage {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<MenteeSummary>,
    #[serde(default)]
    pub meta: PageMeta,
    #[serde(default)]
    pub message: Option<String>,
}

impl DataPage {
    /// `meta.total`, or the row count when the server leaves it out or sends 0.
    pub fn total_records(&self) -> u64 {
        match self.meta.total {
            Some(total) if total > 0 => total,
            _ => self.data.len() as u64,
        }
    }

    /// Program names for the filter dropdown, when this page carried any.
    pub fn program_options(&self) -> Option<&[String]> {
        self.meta
            .programs
            .as_deref()
            .filter(|programs| !programs.is_empty())
    }
}

impl Envelope for DataPage {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
