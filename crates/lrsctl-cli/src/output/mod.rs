//! Plain-text rendering for command results: pretty JSON, bar charts, and
//! the flat CSV shape used by export.

use anyhow::Result;
use bson::{Bson, Document};

/// Render documents the way `query`/`aggregate` print them: one pretty JSON
/// array, 2-space indented.
pub fn documents_json(docs: &[Document]) -> Result<String> {
    Ok(serde_json::to_string_pretty(docs)?)
}

pub fn print_documents(docs: &[Document]) -> Result<()> {
    println!("{}", documents_json(docs)?);
    Ok(())
}

/// Distinct values print one per line; strings lose their JSON quotes.
pub fn bson_scalar(value: &Bson) -> String {
    match value {
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Fixed-width text bar chart, widest bar 40 columns.
pub fn bar_chart(rows: &[(String, i64)]) -> String {
    const MAX_BAR: i64 = 40;

    let max = rows.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1);
    let label_width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, count) in rows {
        let bar_len = (count * MAX_BAR / max).max(if *count > 0 { 1 } else { 0 });
        out.push_str(&format!(
            "{:<width$}  {} {}\n",
            label,
            "#".repeat(bar_len as usize),
            count,
            width = label_width
        ));
    }
    out
}

/// Column order of exported_statements.csv.
pub const CSV_HEADER: [&str; 9] = [
    "actor_name",
    "actor_mbox",
    "verb_id",
    "verb_display",
    "object_type",
    "object_name",
    "timestamp",
    "score_scaled",
    "duration",
];

/// Flatten one statement document into the export CSV row shape.
/// Absent fields become empty cells; `verb_display` takes the first entry of
/// the display map.
pub fn csv_row(doc: &Document) -> [String; 9] {
    [
        path_string(doc, &["actor", "name"]),
        path_string(doc, &["actor", "mbox"]),
        path_string(doc, &["verb", "id"]),
        first_display(doc),
        path_string(doc, &["object", "objectType"]),
        path_string(doc, &["object", "name"]),
        path_string(doc, &["timestamp"]),
        path_string(doc, &["result", "score", "scaled"]),
        path_string(doc, &["duration"]),
    ]
}

fn first_display(doc: &Document) -> String {
    path(doc, &["verb", "display"])
        .and_then(|b| b.as_document())
        .and_then(|d| d.iter().next())
        .map(|(_, v)| bson_scalar(v))
        .unwrap_or_default()
}

fn path<'a>(doc: &'a Document, segments: &[&str]) -> Option<&'a Bson> {
    let (first, rest) = segments.split_first()?;
    let mut current = doc.get(first)?;
    for segment in rest {
        current = current.as_document()?.get(segment)?;
    }
    Some(current)
}

fn path_string(doc: &Document, segments: &[&str]) -> String {
    path(doc, segments).map(bson_scalar).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    fn sample() -> Document {
        doc! {
            "actor": { "name": "John", "mbox": "mailto:john@x.com" },
            "verb": {
                "id": "http://adlnet.gov/expapi/verbs/completed",
                "display": { "en-US": "completed" }
            },
            "object": { "objectType": "Activity", "name": "Course" },
            "timestamp": "2024-03-01T10:00:00Z",
            "result": { "score": { "scaled": 0.85 } },
            "duration": "PT1H"
        }
    }

    #[test]
    fn csv_row_flattens_all_columns() {
        let row = csv_row(&sample());
        assert_eq!(
            row,
            [
                "John",
                "mailto:john@x.com",
                "http://adlnet.gov/expapi/verbs/completed",
                "completed",
                "Activity",
                "Course",
                "2024-03-01T10:00:00Z",
                "0.85",
                "PT1H",
            ]
        );
    }

    #[test]
    fn csv_row_leaves_absent_fields_empty() {
        let doc = doc! {
            "actor": { "name": "A", "mbox": "mailto:a@x.com" },
            "verb": { "id": "http://v", "display": {} },
            "object": {}
        };
        let row = csv_row(&doc);
        assert_eq!(row[3], ""); // empty display map
        assert_eq!(row[6], ""); // no timestamp
        assert_eq!(row[7], ""); // no score
    }

    #[test]
    fn bar_chart_scales_to_widest_bar() {
        let chart = bar_chart(&[
            ("completed".to_string(), 40),
            ("attempted".to_string(), 10),
            ("failed".to_string(), 0),
        ]);

        let lines: Vec<&str> = chart.lines().collect();
        assert!(lines[0].contains(&"#".repeat(40)));
        assert!(lines[1].contains(&"#".repeat(10)));
        assert!(!lines[1].contains(&"#".repeat(11)));
        assert!(!lines[2].contains('#'));
        assert!(lines[2].trim_end().ends_with('0'));
    }

    #[test]
    fn documents_json_uses_two_space_indent() {
        let json = documents_json(&[doc! { "a": 1 }]).unwrap();
        assert!(json.contains("\n  {"));
    }

    #[test]
    fn bson_scalar_unquotes_strings() {
        assert_eq!(bson_scalar(&Bson::String("x".into())), "x");
        assert_eq!(bson_scalar(&Bson::Int32(7)), "7");
    }
}
