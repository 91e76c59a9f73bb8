//! Per-file rewrite and batch driver.

use crate::error::{StripError, StripResult};
use crate::matcher::strip_declaration;
use crate::patch::{FileChange, render_patch};
use crate::store::FileStore;
use seedstrip_hash::sha256_hex;
use seedstrip_types::report::{FileReport, StripSummary};
use seedstrip_types::{DeclarationSignature, RewriteOutcome, StripConfig, TargetFile};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    /// Compute outcomes without writing anything back.
    pub dry_run: bool,
}

/// Everything produced by one batch run.
#[derive(Debug, Clone)]
pub struct StripRun {
    pub files: Vec<FileReport>,
    pub summary: StripSummary,
    /// Unified diff of every file that changed (or would change).
    pub patch: String,
}

/// Apply every signature to `text` in order.
///
/// Each signature sees the text produced by the ones before it. Returns the
/// final text and the signatures whose replacement altered it.
pub fn strip_all<'a>(
    text: &str,
    signatures: &'a [DeclarationSignature],
) -> (String, Vec<&'a DeclarationSignature>) {
    let mut current = text.to_string();
    let mut stripped = Vec::new();

    for sig in signatures {
        match strip_declaration(&current, sig) {
            Some(next) if next != current => {
                debug!(signature = %sig, "stripped element list");
                current = next;
                stripped.push(sig);
            }
            Some(_) => debug!(signature = %sig, "element list already empty"),
            None => debug!(signature = %sig, "declaration not found"),
        }
    }

    (current, stripped)
}

/// Rewrite one target file. Never fails; I/O problems become a `Failed`
/// outcome in the returned report.
pub fn rewrite_target<S: FileStore + ?Sized>(
    store: &S,
    target: &TargetFile,
    opts: &RewriteOptions,
) -> FileReport {
    execute_target(store, target, opts).0
}

/// Rewrite every configured target in order, continuing past failures.
pub fn rewrite_all<S: FileStore + ?Sized>(
    store: &S,
    config: &StripConfig,
    opts: &RewriteOptions,
) -> StripRun {
    let mut files = Vec::with_capacity(config.targets.len());
    let mut changes = Vec::new();
    let mut summary = StripSummary::default();

    for target in &config.targets {
        let (report, change) = execute_target(store, target, opts);
        summary.record(&report.outcome);
        files.push(report);
        changes.extend(change);
    }

    info!(
        total = summary.total,
        changed = summary.changed,
        failed = summary.failed,
        dry_run = opts.dry_run,
        "strip run finished"
    );

    StripRun {
        files,
        summary,
        patch: render_patch(&changes),
    }
}

fn execute_target<S: FileStore + ?Sized>(
    store: &S,
    target: &TargetFile,
    opts: &RewriteOptions,
) -> (FileReport, Option<FileChange>) {
    match try_rewrite(store, target, opts) {
        Ok(done) => done,
        Err(err) => {
            warn!(path = %target.path, error = %err, "failed to rewrite target");
            (FileReport::failed(target.path.as_str(), err.reason()), None)
        }
    }
}

fn try_rewrite<S: FileStore + ?Sized>(
    store: &S,
    target: &TargetFile,
    opts: &RewriteOptions,
) -> StripResult<(FileReport, Option<FileChange>)> {
    let path = &target.path;
    let before = store
        .read_to_string(path)
        .map_err(|source| StripError::Read {
            path: path.clone(),
            source,
        })?;

    let (after, stripped) = strip_all(&before, &target.declarations);
    if after == before {
        debug!(%path, "no changes");
        return Ok((FileReport::unchanged(path.as_str()), None));
    }

    if !opts.dry_run {
        store
            .write(path, &after)
            .map_err(|source| StripError::Write {
                path: path.clone(),
                source,
            })?;
        info!(%path, stripped = stripped.len(), "rewrote target");
    }

    let report = FileReport {
        path: path.to_string(),
        outcome: RewriteOutcome::Changed,
        stripped: stripped.iter().map(|s| s.to_string()).collect(),
        sha256_before: Some(sha256_hex(before.as_bytes())),
        sha256_after: Some(sha256_hex(after.as_bytes())),
    };
    let change = FileChange {
        path: path.clone(),
        before,
        after,
    };

    Ok((report, Some(change)))
}
