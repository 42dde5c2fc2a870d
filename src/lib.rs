//! Appian recordTypeHaul XML → markdown context reference converter.
//!
//! This crate extracts record type schemas (identity, fields, relationships,
//! actions) from Appian recordTypeHaul XML exports into strongly-typed Rust
//! structures and renders them as deterministic markdown documents with
//! machine-parseable tags.
//!
//! The binaries `xml_to_appian_recordtype_md` (single file) and
//! `map_xml_to_appian_recordtype_md` (directory or zip batch) wrap this
//! library.

pub mod batch;
pub mod model;
pub mod parser;
pub mod render;

pub use batch::{BatchSummary, process_source};
pub use model::{Action, ActionKind, Cardinality, Field, FieldMapping, RecordType, Relationship};
pub use parser::{ExtractError, extract_record_type};
pub use render::render;
