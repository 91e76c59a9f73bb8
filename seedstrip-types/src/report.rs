use crate::outcome::RewriteOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Machine-readable record of one strip run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripReport {
    pub schema: String,
    pub tool: ToolInfo,

    #[serde(default)]
    pub run: RunInfo,

    /// Directory target paths were resolved against.
    pub root: String,

    /// True when outcomes were computed without writing any file.
    #[serde(default)]
    pub dry_run: bool,

    #[serde(default)]
    pub files: Vec<FileReport>,

    pub summary: StripSummary,
}

impl StripReport {
    pub fn new(tool: ToolInfo, root: impl Into<String>, dry_run: bool) -> Self {
        Self {
            schema: crate::schema::SEEDSTRIP_REPORT_V1.to_string(),
            tool,
            run: RunInfo::default(),
            root: root.into(),
            dry_run,
            files: vec![],
            summary: StripSummary::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

/// Per-file entry of a [`StripReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,

    #[serde(flatten)]
    pub outcome: RewriteOutcome,

    /// Declarations whose element lists were emptied, as `name: Type`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stripped: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_before: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_after: Option<String>,
}

impl FileReport {
    pub fn unchanged(path: impl Into<String>) -> Self {
        Self::with_outcome(path, RewriteOutcome::Unchanged)
    }

    pub fn failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::with_outcome(path, RewriteOutcome::failed(reason))
    }

    fn with_outcome(path: impl Into<String>, outcome: RewriteOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
            stripped: vec![],
            sha256_before: None,
            sha256_after: None,
        }
    }
}

/// Aggregate counts over all file outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripSummary {
    pub total: u64,
    pub changed: u64,
    pub unchanged: u64,
    pub failed: u64,
}

impl StripSummary {
    pub fn record(&mut self, outcome: &RewriteOutcome) {
        self.total += 1;
        match outcome {
            RewriteOutcome::Changed => self.changed += 1,
            RewriteOutcome::Unchanged => self.unchanged += 1,
            RewriteOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn from_files<'a>(files: impl IntoIterator<Item = &'a FileReport>) -> Self {
        let mut summary = Self::default();
        for file in files {
            summary.record(&file.outcome);
        }
        summary
    }
}
