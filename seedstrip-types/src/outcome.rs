use serde::{Deserialize, Serialize};

/// Result of processing one target file.
///
/// A file where no signature matched and a file whose lists were already
/// empty both come out as `Unchanged`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RewriteOutcome {
    Changed,
    Unchanged,
    Failed { reason: String },
}

impl RewriteOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        RewriteOutcome::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, RewriteOutcome::Changed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RewriteOutcome::Failed { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            RewriteOutcome::Changed => "changed",
            RewriteOutcome::Unchanged => "unchanged",
            RewriteOutcome::Failed { .. } => "failed",
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            RewriteOutcome::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}
