//! Compact rendering of a sample document.

use mongodb::bson::{Bson, Document};

/// Per-document unique key, left out of previews.
pub const IDENTITY_FIELD: &str = "_id";

/// Maximum number of fields shown in a preview.
pub const PREVIEW_FIELDS: usize = 3;

/// Render the first [`PREVIEW_FIELDS`] non-identity fields of `document`.
///
/// Fields keep document order; values are rendered as relaxed extended JSON.
///
/// # Example
///
/// ```
/// use envprobe::probe::sample_preview;
/// use mongodb::bson::doc;
///
/// let document = doc! { "_id": 1, "name": "ada", "tags": ["x"], "age": 36, "city": "London" };
/// assert_eq!(sample_preview(&document), r#"{"name": "ada", "tags": ["x"], "age": 36}"#);
/// ```
pub fn sample_preview(document: &Document) -> String {
    let fields: Vec<String> = document
        .iter()
        .filter(|(key, _)| key.as_str() != IDENTITY_FIELD)
        .take(PREVIEW_FIELDS)
        .map(|(key, value)| format!("{}: {}", quote(key), render_value(value)))
        .collect();

    format!("{{{}}}", fields.join(", "))
}

fn quote(key: &str) -> String {
    serde_json::Value::String(key.to_string()).to_string()
}

fn render_value(value: &Bson) -> String {
    value.clone().into_relaxed_extjson().to_string()
}
