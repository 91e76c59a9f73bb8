//! Rendering helpers for human-readable run output.

use seedstrip_types::RewriteOutcome;
use seedstrip_types::report::{FileReport, StripReport};

/// One line per target followed by the aggregate count.
pub fn render_text(report: &StripReport) -> String {
    let mut out = String::new();

    for file in &report.files {
        out.push_str(&text_line(file));
        out.push('\n');
    }

    if !report.files.is_empty() {
        out.push('\n');
    }

    let s = &report.summary;
    let verb = if report.dry_run {
        "would clean"
    } else {
        "cleaned"
    };
    out.push_str(&format!(
        "{} {} of {} {} ({} unchanged, {} failed)\n",
        verb,
        s.changed,
        s.total,
        plural(s.total, "file", "files"),
        s.unchanged,
        s.failed
    ));

    out
}

fn text_line(file: &FileReport) -> String {
    let mut line = format!("{:<10} {}", file.outcome.label(), file.path);
    match &file.outcome {
        RewriteOutcome::Failed { reason } => {
            line.push_str(&format!(": {}", reason));
        }
        RewriteOutcome::Changed if !file.stripped.is_empty() => {
            let names: Vec<&str> = file
                .stripped
                .iter()
                .map(|s| s.split(':').next().unwrap_or(s).trim())
                .collect();
            line.push_str(&format!(" ({})", names.join(", ")));
        }
        _ => {}
    }
    line
}

pub fn render_report_md(report: &StripReport) -> String {
    let mut out = String::new();
    out.push_str("# seedstrip run\n\n");
    if report.dry_run {
        out.push_str("_Dry run: no files were written._\n\n");
    }
    out.push_str(&format!("- Root: `{}`\n", report.root));
    out.push_str(&format!(
        "- Files: {}\n- Changed: {}\n- Unchanged: {}\n- Failed: {}\n\n",
        report.summary.total,
        report.summary.changed,
        report.summary.unchanged,
        report.summary.failed
    ));

    out.push_str("## Files\n\n");
    if report.files.is_empty() {
        out.push_str("_No targets._\n");
        return out;
    }

    for (i, f) in report.files.iter().enumerate() {
        out.push_str(&format!("### {}. `{}`\n\n", i + 1, f.path));
        out.push_str(&format!("- Status: `{}`\n", f.outcome.label()));
        if let Some(reason) = f.outcome.reason() {
            out.push_str(&format!("- Reason: {}\n", reason));
        }
        if !f.stripped.is_empty() {
            out.push_str("\n**Stripped**\n\n");
            for s in &f.stripped {
                out.push_str(&format!("- `{}`\n", s));
            }
        }
        if let (Some(before), Some(after)) = (&f.sha256_before, &f.sha256_after) {
            out.push_str(&format!("\n- sha256: {} → {}\n", before, after));
        }
        out.push('\n');
    }

    out
}

fn plural<'a>(n: u64, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
