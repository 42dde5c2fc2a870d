//! Markdown renderer for extracted record types.
//!
//! Output layout is fixed and deterministic: downstream tooling parses the
//! wrapping `<available_record_types>` / `<record_name>` tags and relies on
//! every table keeping its full column count, so empty values render an
//! explicit `-` marker instead of a skipped cell.

use crate::model::RecordType;

/// Lowercased snake_case slug of a record type name, used as its wrapping
/// tag and in batch output filenames.
pub fn to_snake_case(s: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() {
            current.push(ch.to_ascii_lowercase());
        } else if !current.is_empty() {
            parts.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    if parts.is_empty() {
        "record_type".to_string()
    } else {
        parts.join("_")
    }
}

/// Escape a value for use inside a markdown table cell. Pipes would break
/// the column layout and newlines would break the row.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\n', '\r'], " ")
}

/// Table cell content: escaped value, or the `-` empty marker.
fn cell(s: &str) -> String {
    if s.trim().is_empty() {
        "-".to_string()
    } else {
        escape_cell(s.trim())
    }
}

/// Render one markdown document covering the given record types, in order.
///
/// `title_override` replaces the derived H1 title. Rendering is total over
/// well-formed models and never fails; calling it twice on equal input
/// yields byte-identical output.
pub fn render(record_types: &[RecordType], title_override: Option<&str>) -> String {
    let title = match title_override {
        Some(t) => t.to_string(),
        None => match record_types {
            [single] => format!("{} Record Type Context Reference", single.name),
            _ => "Record Type Context Reference".to_string(),
        },
    };

    let mut out: Vec<String> = Vec::new();
    out.push(format!("# {}", title));
    out.push(String::new());
    out.push(
        "This document provides the specific record type definitions for use when creating SAIL expressions."
            .to_string(),
    );
    out.push(String::new());
    out.push("<available_record_types>".to_string());
    out.push("## Available Record Types".to_string());
    out.push(String::new());
    for rt in record_types {
        out.push(format!("- {}", rt.name));
    }
    out.push(String::new());

    for rt in record_types {
        render_record_type(rt, &mut out);
    }

    out.push("</available_record_types>".to_string());
    out.join("\n") + "\n"
}

fn render_record_type(rt: &RecordType, out: &mut Vec<String>) {
    let tag = to_snake_case(&rt.name);
    let uuid = rt.uuid.as_deref().unwrap_or("");

    out.push(format!("<{}>", tag));
    out.push(format!("### {}", rt.name));
    out.push(format!(
        "**Record Type**: `'recordType!{{{}}}{}'`",
        uuid, rt.name
    ));
    out.push(String::new());
    out.push(format!(
        "**Description**: {}",
        rt.description.as_deref().unwrap_or("Not provided.")
    ));
    out.push(String::new());

    out.push("**Fields**:".to_string());
    out.push(String::new());
    out.push("| **Field Name** | **Data Type** | **Required** | **Description** |".to_string());
    out.push("|----------------|---------------|--------------|-----------------|".to_string());
    for f in &rt.fields {
        out.push(format!(
            "| {} | {} | {} | {} |",
            cell(&f.name),
            cell(&f.data_type),
            if f.required { "Yes" } else { "No" },
            cell(f.description.as_deref().unwrap_or("")),
        ));
    }
    out.push(String::new());

    out.push("**Relationships**:".to_string());
    out.push(String::new());
    if rt.relationships.is_empty() {
        out.push("Not available".to_string());
    } else {
        out.push(
            "| **Relationship Name** | **Target Record Type** | **Cardinality** | **Field Mappings** |"
                .to_string(),
        );
        out.push(
            "|----------------------|------------------------|-----------------|--------------------|"
                .to_string(),
        );
        for r in &rt.relationships {
            let mappings = r
                .field_mappings
                .iter()
                .map(|m| format!("{} -> {}", m.source_field, m.target_field))
                .collect::<Vec<_>>()
                .join(", ");
            out.push(format!(
                "| {} | {} | {} | {} |",
                cell(&r.name),
                cell(r.target_record_type.as_deref().unwrap_or("")),
                cell(&r.cardinality.to_string()),
                cell(&mappings),
            ));
        }
    }
    out.push(String::new());

    out.push("**Record Actions**:".to_string());
    out.push(String::new());
    if rt.actions.is_empty() {
        out.push("Not available".to_string());
    } else {
        out.push("| **Action Name** | **Type** | **Description** |".to_string());
        out.push("|----------------|----------|-----------------|".to_string());
        for a in &rt.actions {
            let kind = a.kind.as_ref().map(|k| k.to_string()).unwrap_or_default();
            out.push(format!(
                "| {} | {} | {} |",
                cell(&a.name),
                cell(&kind),
                cell(a.description.as_deref().unwrap_or("")),
            ));
        }
    }
    out.push(String::new());

    out.push(format!("</{}>", tag));
    out.push(String::new());
}
