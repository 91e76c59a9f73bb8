//! Shared DTOs for the seedstrip workspace.
//!
//! # Design constraints
//! - Target configuration is plain data; nothing here touches the file system.
//! - Report types are serialized to disk, so prefer adding optional fields
//!   over changing semantics.

pub mod config;
pub mod outcome;
pub mod report;
pub mod signature;

pub use config::{ConfigError, StripConfig, TargetFile};
pub use outcome::RewriteOutcome;
pub use signature::DeclarationSignature;

/// Schema identifiers.
pub mod schema {
    pub const SEEDSTRIP_REPORT_V1: &str = "seedstrip.report.v1";
}
