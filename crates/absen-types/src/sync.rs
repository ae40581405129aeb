//! Sync job results and the sync control state

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Envelope, CONNECTION_ERROR};
use crate::month::DEFAULT_MONTH;

/// Shown when a sync is rejected without a server message.
pub const SYNC_FAILED: &str = "Gagal melakukan sinkronisasi.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStats {
    #[serde(default)]
    pub total_fetched: u32,
    #[serde(default)]
    pub inserted: u32,
    #[serde(default)]
    pub updated: u32,
}

/// Record the sync left out, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub name: String,
    pub reason: String,
}

/// Record sharing its phone number with another one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateRecord {
    pub name: String,
    pub whatsapp: String,
}

/// Reply of `POST /admin/fetch/{month}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stats: SyncStats,
    #[serde(default)]
    pub skipped_records: Vec<SkippedRecord>,
    #[serde(default)]
    pub duplicate_records: Vec<DuplicateRecord>,
}

impl SyncResult {
    /// Whether the problem report section is rendered at all.
    pub fn has_problems(&self) -> bool {
        !self.skipped_records.is_empty() || !self.duplicate_records.is_empty()
    }
}

impl Envelope for SyncResult {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// State of the sync control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncControl {
    pub month: String,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<SyncResult>,
}

impl Default for SyncControl {
    fn default() -> Self {
        Self {
            month: DEFAULT_MONTH.to_string(),
            loading: false,
            error: None,
            result: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncAction {
    SelectMonth(String),
    Start,
    Finished(Result<SyncResult, ApiError>),
}

impl SyncControl {
    /// The trigger is disabled while a sync is in flight.
    pub fn can_start(&self) -> bool {
        !self.loading
    }

    pub fn apply(&mut self, action: SyncAction) {
        match action {
            SyncAction::SelectMonth(month) => self.month = month,
            SyncAction::Start => {
                if self.loading {
                    return;
                }
                self.loading = true;
                self.error = None;
                self.result = None;
            }
            SyncAction::Finished(outcome) => {
                self.loading = false;
                match outcome {
                    Ok(result) => self.result = Some(result),
                    Err(e) => self.error = Some(e.user_message(CONNECTION_ERROR, SYNC_FAILED)),
                }
            }
        }
    }
}
