//! Connectivity probe.
//!
//! Opens a [`DocumentSource`], reports the database name, the document count
//! of every collection, and a short preview of one document per collection.
//! Any failure along the way is reported once and turns the result into
//! `false`; the probe never distinguishes where it failed.

pub mod preview;

use serde::Serialize;

use crate::error::Result;
use crate::mongo::DocumentSource;
use crate::ui::UserInterface;

pub use preview::{sample_preview, IDENTITY_FIELD, PREVIEW_FIELDS};

/// Document count observed for one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionReport {
    /// Collection name.
    pub name: String,
    /// Documents counted at observation time.
    pub count: u64,
}

/// Run the probe against the source produced by `connect`.
///
/// Returns `true` when every step succeeded.
pub fn run<S, F>(ui: &mut dyn UserInterface, connect: F) -> bool
where
    S: DocumentSource,
    F: FnOnce() -> Result<S>,
{
    ui.message("Connecting to MongoDB...");

    match connect().and_then(|source| report(&source, &mut *ui)) {
        Ok(collections) => {
            tracing::debug!(
                "Probe finished: {}",
                serde_json::to_string(&collections).unwrap_or_default()
            );
            ui.message("");
            ui.success("Connection test successful!");
            true
        }
        Err(e) => {
            tracing::debug!("Connection test failed: {}", e);
            ui.error(&format!("Error connecting to MongoDB: {}", e));
            false
        }
    }
}

/// Print the database report for an open source.
///
/// Counts are taken in one pass and samples in a second pass, both in the
/// order the server enumerated the collections.
pub fn report(
    source: &dyn DocumentSource,
    ui: &mut dyn UserInterface,
) -> Result<Vec<CollectionReport>> {
    ui.message(&format!("Connected to database: {}", source.database_name()));

    let names = source.collection_names()?;

    ui.message("");
    ui.show_header("Available collections:");
    let mut reports = Vec::with_capacity(names.len());
    for name in &names {
        let count = source.count_documents(name)?;
        ui.message(&format!("- {}: {} documents", name, count));
        reports.push(CollectionReport {
            name: name.clone(),
            count,
        });
    }

    ui.message("");
    ui.show_header("Sample data from collections:");
    for name in &names {
        ui.message("");
        match source.sample(name)? {
            Some(document) => {
                ui.message(&format!("{} sample:", name));
                ui.message(&format!("{}...", sample_preview(&document)));
            }
            None => ui.message(&format!("{} is empty", name)),
        }
    }

    Ok(reports)
}
