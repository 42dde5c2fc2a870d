//! Normalization tables for raw export tokens (field types, relationship
//! cardinality, required flags).
//!
//! All lookups are pure and total: tokens outside a table pass through
//! unchanged rather than failing, so new platform vocabulary degrades
//! gracefully instead of breaking extraction.

use crate::model::Cardinality;

/// Raw platform type token → friendly type name.
const TYPE_MAP: &[(&str, &str)] = &[
    ("Int", "Integer"),
    ("Integer", "Integer"),
    ("Long", "Integer"),
    ("Text", "Text"),
    ("Boolean", "Boolean"),
    ("Date", "Date"),
    ("Datetime", "Datetime"),
    ("User", "User"),
    ("CollaborationDocument", "CollaborationDocument"),
    ("Document", "Document"),
    ("Guid", "Text"),
];

/// Canonical raw cardinality token (underscore-delimited, uppercase) →
/// canonical form. Lookup keys are produced by [`cardinality_key`].
const CARDINALITY_MAP: &[(&str, Cardinality)] = &[
    ("ONE_TO_MANY", Cardinality::OneToMany),
    ("MANY_TO_ONE", Cardinality::ManyToOne),
    ("ONE_TO_ONE", Cardinality::OneToOne),
    ("MANY_TO_MANY", Cardinality::ManyToMany),
];

/// Map a raw type token to its friendly name.
///
/// The export sometimes qualifies type tokens with an XML namespace in
/// Clark notation (`{http://...}Text`); the prefix is stripped before the
/// table lookup. Unknown tokens are returned unchanged.
pub fn friendly_type(raw: &str) -> String {
    let mut t = raw.trim();
    if t.starts_with('{') {
        if let Some((_, local)) = t.split_once('}') {
            t = local;
        }
    }
    TYPE_MAP
        .iter()
        .find(|(token, _)| *token == t)
        .map(|(_, friendly)| friendly.to_string())
        .unwrap_or_else(|| t.to_string())
}

/// Uppercase and unify `-`/`_` delimiters so case and delimiter variants of
/// the canonical tokens all hit the table.
fn cardinality_key(raw: &str) -> String {
    raw.trim().to_ascii_uppercase().replace('-', "_")
}

/// Map a raw cardinality token to a [`Cardinality`]. Unrecognized tokens are
/// preserved verbatim, never rewritten into a fabricated canonical form.
pub fn normalize_cardinality(raw: &str) -> Cardinality {
    let key = cardinality_key(raw);
    CARDINALITY_MAP
        .iter()
        .find(|(token, _)| *token == key)
        .map(|(_, c)| c.clone())
        .unwrap_or_else(|| Cardinality::Other(raw.trim().to_string()))
}

/// Parse a required flag in its string/boolean export forms.
/// Absent or unrecognized values mean "not required".
pub fn parse_required_flag(raw: Option<&str>) -> bool {
    match raw {
        Some(v) => {
            let v = v.trim();
            v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes") || v == "1"
        }
        None => false,
    }
}
