//! End-to-end rewrite scenarios against real files.

use camino::Utf8PathBuf;
use pretty_assertions::assert_eq;
use seedstrip_edit::{FsStore, RewriteOptions, rewrite_all, rewrite_target};
use seedstrip_types::{DeclarationSignature, RewriteOutcome, StripConfig, TargetFile};
use std::fs;
use tempfile::TempDir;

fn temp_root() -> (TempDir, Utf8PathBuf) {
    let td = tempfile::tempdir().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(td.path().to_path_buf()).expect("utf8");
    (td, root)
}

fn write(root: &Utf8PathBuf, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn read(root: &Utf8PathBuf, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn multiline_list_is_emptied() {
    let (_td, root) = temp_root();
    write(
        &root,
        "src/items.ts",
        "const demoItems: Item[] = [\n  { id: 1 },\n  { id: 2 }\n];",
    );
    let target = TargetFile::single("src/items.ts", "demoItems", "Item");

    let report = rewrite_target(&FsStore::new(root.clone()), &target, &RewriteOptions::default());

    assert_eq!(report.outcome, RewriteOutcome::Changed);
    assert_eq!(read(&root, "src/items.ts"), "const demoItems: Item[] = [];");
}

#[test]
fn already_empty_list_is_unchanged() {
    let (_td, root) = temp_root();
    write(&root, "items.ts", "const demoItems: Item[] = [];");
    let target = TargetFile::single("items.ts", "demoItems", "Item");

    let report = rewrite_target(&FsStore::new(root.clone()), &target, &RewriteOptions::default());

    assert_eq!(report.outcome, RewriteOutcome::Unchanged);
    assert_eq!(read(&root, "items.ts"), "const demoItems: Item[] = [];");
}

#[test]
fn sibling_declaration_is_untouched() {
    let (_td, root) = temp_root();
    let original = "\
import { A, B } from './types';

const demoA: A[] = [
  { id: 1, name: 'first' },
];

const demoB: B[] = [
  { id: 2, name: 'second' },
];

export default function Page() {
  return null;
}
";
    write(&root, "page.tsx", original);
    let target = TargetFile::single("page.tsx", "demoA", "A");

    let report = rewrite_target(&FsStore::new(root.clone()), &target, &RewriteOptions::default());

    assert_eq!(report.outcome, RewriteOutcome::Changed);
    assert_eq!(
        read(&root, "page.tsx"),
        original.replace("[\n  { id: 1, name: 'first' },\n];", "[];")
    );
    assert!(read(&root, "page.tsx").contains("{ id: 2, name: 'second' },"));
}

#[test]
fn nested_array_values_are_consumed() {
    let (_td, root) = temp_root();
    write(
        &root,
        "items.ts",
        "const demoItems: Item[] = [\n  { tags: ['x','y'] }\n];\nconst keep = ['z'];\n",
    );
    let target = TargetFile::single("items.ts", "demoItems", "Item");

    rewrite_target(&FsStore::new(root.clone()), &target, &RewriteOptions::default());

    assert_eq!(
        read(&root, "items.ts"),
        "const demoItems: Item[] = [];\nconst keep = ['z'];\n"
    );
}

#[test]
fn missing_file_fails_and_batch_continues() {
    let (_td, root) = temp_root();
    write(&root, "src/pages/Products.tsx", "const demoProducts: Product[] = [{ id: 1 }];\n");
    write(&root, "src/pages/Deals.tsx", "const demoDeals: Deal[] = [{ id: 2 }];\n");

    let config = StripConfig::new(vec![
        TargetFile::single("src/pages/Products.tsx", "demoProducts", "Product"),
        TargetFile::single("src/pages/Missing.tsx", "demoThings", "Thing"),
        TargetFile::single("src/pages/Deals.tsx", "demoDeals", "Deal"),
    ]);

    let run = rewrite_all(&FsStore::new(root.clone()), &config, &RewriteOptions::default());

    assert_eq!(run.files[0].outcome, RewriteOutcome::Changed);
    assert_eq!(run.files[1].outcome, RewriteOutcome::failed("file not found"));
    assert_eq!(run.files[2].outcome, RewriteOutcome::Changed);
    assert_eq!(run.summary.changed, 2);
    assert_eq!(run.summary.failed, 1);
    assert_eq!(
        read(&root, "src/pages/Deals.tsx"),
        "const demoDeals: Deal[] = [];\n"
    );
}

#[test]
fn shared_context_with_many_declarations() {
    let (_td, root) = temp_root();
    let original = "\
const demoCustomers: Customer[] = [
  { id: '1', contacts: [{ email: 'a@example.com' }] },
];

const demoDeals: Deal[] = [
  { id: 'd1', stages: ['lead', 'won'] },
];

const demoCompetitorDeals: CompetitorDeal[] = [
  { id: 'c1', notes: \"lost on price [q3]\" },
];

export const SharedDataContext = createContext(null);
";
    write(&root, "src/context/SharedDataContext.tsx", original);
    let target = TargetFile::new(
        "src/context/SharedDataContext.tsx",
        [
            DeclarationSignature::new("demoCustomers", "Customer"),
            DeclarationSignature::new("demoDeals", "Deal"),
            DeclarationSignature::new("demoInvoices", "Invoice"),
            DeclarationSignature::new("demoCompetitorDeals", "CompetitorDeal"),
        ],
    );
    let store = FsStore::new(root.clone());

    let first = rewrite_target(&store, &target, &RewriteOptions::default());
    assert_eq!(first.outcome, RewriteOutcome::Changed);
    assert_eq!(
        first.stripped,
        vec![
            "demoCustomers: Customer",
            "demoDeals: Deal",
            "demoCompetitorDeals: CompetitorDeal",
        ]
    );
    assert_eq!(
        read(&root, "src/context/SharedDataContext.tsx"),
        "\
const demoCustomers: Customer[] = [];

const demoDeals: Deal[] = [];

const demoCompetitorDeals: CompetitorDeal[] = [];

export const SharedDataContext = createContext(null);
"
    );

    let second = rewrite_target(&store, &target, &RewriteOptions::default());
    assert_eq!(second.outcome, RewriteOutcome::Unchanged);
}

#[test]
fn dry_run_leaves_disk_untouched_but_produces_patch() {
    let (_td, root) = temp_root();
    write(&root, "items.ts", "const demoItems: Item[] = [\n  { id: 1 },\n];\n");
    let config = StripConfig::new(vec![TargetFile::single("items.ts", "demoItems", "Item")]);

    let run = rewrite_all(
        &FsStore::new(root.clone()),
        &config,
        &RewriteOptions { dry_run: true },
    );

    assert_eq!(run.summary.changed, 1);
    assert_eq!(
        read(&root, "items.ts"),
        "const demoItems: Item[] = [\n  { id: 1 },\n];\n"
    );
    assert!(run.patch.contains("-  { id: 1 },"));
}
