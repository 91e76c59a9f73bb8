use camino::Utf8PathBuf;
use diffy::PatchFormatter;

/// Before/after text of one rewritten file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: Utf8PathBuf,
    pub before: String,
    pub after: String,
}

/// Render a git-style unified diff covering every changed file, in order.
pub fn render_patch(changes: &[FileChange]) -> String {
    let mut out = String::new();
    let formatter = PatchFormatter::new();

    for change in changes {
        if change.before == change.after {
            continue;
        }

        out.push_str(&format!("diff --git a/{0} b/{0}\n", change.path));
        out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", change.path));

        let patch = diffy::create_patch(&change.before, &change.after);
        let rendered = formatter.fmt_patch(&patch).to_string();
        // diffy emits its own ---/+++ header; keep only the hunks.
        let hunks = rendered
            .find("@@")
            .map_or(rendered.as_str(), |at| &rendered[at..]);
        out.push_str(hunks);
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}
