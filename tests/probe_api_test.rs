//! Integration tests for the probe and package checker through the public API.

use envprobe::mongo::DocumentSource;
use envprobe::packages::{check_packages, ModuleResolver, INSTALL_HINT};
use envprobe::probe;
use envprobe::ui::MockUI;
use mongodb::bson::{doc, Document};

struct StaticSource(Vec<(&'static str, Option<Document>, u64)>);

impl DocumentSource for StaticSource {
    fn database_name(&self) -> &str {
        "skills_db"
    }

    fn collection_names(&self) -> envprobe::Result<Vec<String>> {
        Ok(self.0.iter().map(|(n, _, _)| n.to_string()).collect())
    }

    fn count_documents(&self, collection: &str) -> envprobe::Result<u64> {
        Ok(self
            .0
            .iter()
            .find(|(n, _, _)| *n == collection)
            .map(|(_, _, c)| *c)
            .unwrap_or(0))
    }

    fn sample(&self, collection: &str) -> envprobe::Result<Option<Document>> {
        Ok(self
            .0
            .iter()
            .find(|(n, _, _)| *n == collection)
            .and_then(|(_, d, _)| d.clone()))
    }
}

#[test]
fn probe_reports_every_collection() {
    let source = StaticSource(vec![
        (
            "skills",
            Some(doc! { "_id": 1, "name": "Rust", "level": 3, "tags": ["systems"], "extra": 0 }),
            12,
        ),
        ("users", None, 0),
    ]);
    let mut ui = MockUI::new();

    assert!(probe::run(&mut ui, move || Ok(source)));

    let out = ui.output();
    assert!(out.contains("Connected to database: skills_db"));
    assert!(out.contains("- skills: 12 documents"));
    assert!(out.contains("- users: 0 documents"));
    assert!(out.contains("skills sample:"));
    assert!(out.contains(r#"{"name": "Rust", "level": 3, "tags": ["systems"]}..."#));
    assert!(!out.contains("extra"));
    assert!(out.contains("users is empty"));
    assert!(out.contains("Connection test successful!"));
}

#[test]
fn empty_database_still_succeeds() {
    let mut ui = MockUI::new();

    assert!(probe::run(&mut ui, || Ok(StaticSource(vec![]))));

    assert!(!ui.output().contains(" documents"));
    assert!(ui.has_success("Connection test successful!"));
}

struct OnlyPymongo;

impl ModuleResolver for OnlyPymongo {
    fn runtime_version(&self) -> Option<String> {
        Some("3.12.0".into())
    }

    fn resolve(&self, name: &str) -> bool {
        name == "pymongo"
    }
}

#[test]
fn checker_summary_reflects_failures() {
    let mut ui = MockUI::new();

    let report = check_packages(&OnlyPymongo, &mut ui);

    assert_eq!(report.missing(), ["google.generativeai", "dotenv"]);
    assert_eq!(ui.successes(), ["pymongo is installed"]);
    assert!(ui.has_message(INSTALL_HINT));
}
