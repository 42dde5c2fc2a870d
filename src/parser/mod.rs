//! Appian recordTypeHaul XML extractor.
//!
//! Provides [`RecordTypeParser`] to load record type descriptions from an
//! [`InputSource`] and the pure extraction functions [`extract_record_type`]
//! and [`extract_from_doc`]. Sub-modules:
//!
//! - [`source`] – Input I/O abstraction (directory vs. ZIP)
//! - [`normalize`] – Type / cardinality / flag normalization tables

pub mod normalize;
pub mod source;

pub use normalize::{friendly_type, normalize_cardinality, parse_required_flag};
pub use source::*;

use crate::model::*;
use anyhow::Result;
use camino::Utf8Path;
use roxmltree::{Document, Node};
use thiserror::Error;

/// Extraction failure for one input document. The `path` is the logical
/// source path supplied by the driver, used only for diagnostics.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No <recordType> found in {path}. Expected an Appian recordTypeHaul XML.")]
    MissingRecordType { path: String },
    #[error("Record type in {path} has no name attribute")]
    MissingName { path: String },
    #[error("Failed to parse XML {path}: {source}")]
    MalformedXml {
        path: String,
        #[source]
        source: roxmltree::Error,
    },
}

/// Extract one [`RecordType`] from XML text.
///
/// `origin` is the source path carried into error messages; extraction
/// itself performs no I/O.
pub fn extract_record_type(text: &str, origin: &str) -> Result<RecordType, ExtractError> {
    let doc = Document::parse(text).map_err(|e| ExtractError::MalformedXml {
        path: origin.to_string(),
        source: e,
    })?;
    extract_from_doc(&doc, origin)
}

/// Extract one [`RecordType`] from an already parsed document.
///
/// The export namespaces part of its vocabulary under the Appian types
/// namespace, so all element and attribute lookups match by local name.
pub fn extract_from_doc(doc: &Document, origin: &str) -> Result<RecordType, ExtractError> {
    let rt = doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "recordType")
        .ok_or_else(|| ExtractError::MissingRecordType {
            path: origin.to_string(),
        })?;

    let name = attr_local(rt, "name")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ExtractError::MissingName {
            path: origin.to_string(),
        })?
        .to_string();
    let uuid = attr_local(rt, "uuid").map(|s| s.trim().to_string());
    let description = child_text(rt, "description");

    Ok(RecordType {
        uuid,
        name,
        description,
        fields: extract_fields(rt),
        relationships: extract_relationships(rt),
        actions: extract_actions(rt),
    })
}

fn extract_fields(rt: Node) -> Vec<Field> {
    let mut fields = Vec::new();
    for f in elements_named(rt, "field") {
        fields.push(Field {
            name: child_text(f, "fieldName").unwrap_or_default(),
            data_type: friendly_type(&child_text(f, "type").unwrap_or_default()),
            required: parse_required_flag(child_text(f, "required").as_deref()),
            description: child_text(f, "description"),
        });
    }
    fields
}

fn extract_relationships(rt: Node) -> Vec<Relationship> {
    let mut rels = Vec::new();
    for r in elements_named(rt, "recordRelationshipCfg") {
        let raw_cardinality = child_text(r, "relationshipType").unwrap_or_default();
        rels.push(Relationship {
            name: child_text(r, "relationshipName").unwrap_or_default(),
            target_record_type: child_text(r, "targetRecordTypeUuid"),
            cardinality: normalize_cardinality(&raw_cardinality),
            field_mappings: extract_field_mappings(r),
        });
    }
    rels
}

fn extract_field_mappings(rel: Node) -> Vec<FieldMapping> {
    let mut mappings = Vec::new();
    for m in rel
        .children()
        .filter(|c| c.is_element() && c.tag_name().name() == "fieldMapping")
    {
        // A mapping needs both sides; half-specified entries are dropped.
        if let (Some(source_field), Some(target_field)) =
            (child_text(m, "sourceField"), child_text(m, "targetField"))
        {
            mappings.push(FieldMapping {
                source_field,
                target_field,
            });
        }
    }
    mappings
}

fn extract_actions(rt: Node) -> Vec<Action> {
    let mut actions = Vec::new();
    for (tag, kind) in [
        ("recordListActionCfg", ActionKind::ListAction),
        ("relatedActionCfg", ActionKind::RelatedAction),
    ] {
        for a in elements_named(rt, tag) {
            let title = child_text(a, "staticTitle")
                .or_else(|| child_text(a, "staticTitleString"))
                .or_else(|| child_text(a, "referenceKey"));
            actions.push(Action {
                name: title.unwrap_or_default(),
                kind: Some(kind),
                description: child_text(a, "description"),
            });
        }
    }
    actions
}

// ────────────────────────────────────────────────────────────────────────────
// Local-name node access helpers
// ────────────────────────────────────────────────────────────────────────────

fn elements_named<'a, 'i>(
    scope: Node<'a, 'i>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'i>> {
    scope
        .descendants()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

fn attr_local<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|a| a.name() == name)
        .map(|a| a.value())
}

/// Trimmed text of the first direct child element with the given local name.
/// Empty text counts as absent.
fn child_text(node: Node, name: &str) -> Option<String> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == name)
        .and_then(|c| c.text())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ────────────────────────────────────────────────────────────────────────────
// RecordTypeParser
// ────────────────────────────────────────────────────────────────────────────

/// Record type extractor over an [`InputSource`], so batch runs can read from
/// a directory ([`DirSource`]) or a ZIP archive ([`ZipSource`]) uniformly.
pub struct RecordTypeParser<S: InputSource> {
    source: S,
}

impl<S: InputSource> RecordTypeParser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// List the `.xml` entries of the underlying source, sorted by path.
    pub fn list_xml_entries(&mut self) -> Result<Vec<camino::Utf8PathBuf>> {
        self.source.list_xml_entries()
    }

    /// Read and extract a single entry.
    pub fn extract_entry(&mut self, path: &Utf8Path) -> Result<RecordType> {
        let text = self.source.read_to_string(path)?;
        Ok(extract_record_type(&text, path.as_str())?)
    }
}
