use serde::{Deserialize, Serialize};
use std::fmt;

// ────────────────────────────────────────────────────────────────────────────
// RecordType
// ────────────────────────────────────────────────────────────────────────────

/// A record type extracted from an Appian recordTypeHaul XML export.
///
/// `fields`, `relationships` and `actions` preserve document order; the
/// renderer emits them in exactly this order, duplicates included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordType {
    /// Opaque identifier from the export, used for cross-references.
    pub uuid: Option<String>,
    /// Display name. Always non-empty for a successfully extracted record type.
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    pub relationships: Vec<Relationship>,
    pub actions: Vec<Action>,
}

/// A single record type field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Normalized friendly type name (e.g. `Integer` for raw `Int`/`Long`).
    /// Unknown raw tokens are carried through unchanged.
    pub data_type: String,
    pub required: bool,
    pub description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Relationships
// ────────────────────────────────────────────────────────────────────────────

/// A relationship from this record type to another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub name: String,
    /// Name or UUID of the related record type. May be unresolved when the
    /// target is not part of the same extraction pass.
    pub target_record_type: Option<String>,
    pub cardinality: Cardinality,
    pub field_mappings: Vec<FieldMapping>,
}

/// Source/target field pair joining two record types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMapping {
    pub source_field: String,
    pub target_field: String,
}

/// Relationship multiplicity. Raw export tokens that do not match one of the
/// four canonical forms are preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    OneToMany,
    ManyToOne,
    OneToOne,
    ManyToMany,
    Other(String),
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::OneToMany => write!(f, "one-to-many"),
            Cardinality::ManyToOne => write!(f, "many-to-one"),
            Cardinality::OneToOne => write!(f, "one-to-one"),
            Cardinality::ManyToMany => write!(f, "many-to-many"),
            Cardinality::Other(raw) => write!(f, "{}", raw),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Actions
// ────────────────────────────────────────────────────────────────────────────

/// A user-invokable record action (e.g. create, update, related action).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub kind: Option<ActionKind>,
    pub description: Option<String>,
}

/// How the action is attached to the record type in the export. The export
/// encodes this structurally (which config element carries the action), so
/// the kind is always one of the two known forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// `<recordListActionCfg>`: record-list level action.
    ListAction,
    /// `<relatedActionCfg>`: action on a single record.
    RelatedAction,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::ListAction => write!(f, "list-action"),
            ActionKind::RelatedAction => write!(f, "related-action"),
        }
    }
}
