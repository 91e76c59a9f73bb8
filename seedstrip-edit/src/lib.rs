//! Edit engine for seedstrip.
//!
//! Responsibilities:
//! - Locate typed array declarations and the span of their element lists.
//! - Empty those lists in place, one target file at a time.
//! - Report a per-file outcome and render a unified diff preview.
//!
//! All file access goes through [`FileStore`], so the engine can run against
//! [`MemoryStore`] as easily as against the disk.

pub mod error;
pub mod matcher;
pub mod patch;
pub mod rewrite;
pub mod store;

pub use error::{StripError, StripResult};
pub use matcher::{Span, find_span, strip_declaration};
pub use patch::{FileChange, render_patch};
pub use rewrite::{RewriteOptions, StripRun, rewrite_all, rewrite_target, strip_all};
pub use store::{FileStore, FsStore, MemoryStore};
