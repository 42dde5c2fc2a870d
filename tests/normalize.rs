use recordtype_md::model::Cardinality;
use recordtype_md::parser::{friendly_type, normalize_cardinality, parse_required_flag};

#[test]
fn type_map_covers_known_platform_tokens() {
    let expected = [
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
    for (raw, friendly) in expected {
        assert_eq!(friendly_type(raw), friendly, "token {}", raw);
    }
}

#[test]
fn type_normalization_is_idempotent() {
    for raw in [
        "Int", "Integer", "Long", "Text", "Boolean", "Date", "Datetime", "User",
        "CollaborationDocument", "Document", "Guid", "SomethingNew",
    ] {
        let once = friendly_type(raw);
        assert_eq!(friendly_type(&once), once, "token {}", raw);
    }
}

#[test]
fn unknown_type_tokens_pass_through() {
    assert_eq!(friendly_type("RecordMap"), "RecordMap");
    assert_eq!(friendly_type(""), "");
}

#[test]
fn clark_notation_namespace_prefix_is_stripped() {
    assert_eq!(
        friendly_type("{http://www.appian.com/ae/types/2009}Long"),
        "Integer"
    );
    assert_eq!(friendly_type("{urn:whatever}CustomThing"), "CustomThing");
}

#[test]
fn canonical_cardinality_tokens_normalize() {
    assert_eq!(normalize_cardinality("ONE_TO_MANY"), Cardinality::OneToMany);
    assert_eq!(normalize_cardinality("MANY_TO_ONE"), Cardinality::ManyToOne);
    assert_eq!(normalize_cardinality("ONE_TO_ONE"), Cardinality::OneToOne);
    assert_eq!(normalize_cardinality("MANY_TO_MANY"), Cardinality::ManyToMany);
}

#[test]
fn cardinality_case_and_delimiter_variants_normalize() {
    assert_eq!(normalize_cardinality("one_to_many"), Cardinality::OneToMany);
    assert_eq!(normalize_cardinality("many-to-one"), Cardinality::ManyToOne);
    assert_eq!(normalize_cardinality("One-To-One"), Cardinality::OneToOne);
    assert_eq!(
        normalize_cardinality("  many_to_many "),
        Cardinality::ManyToMany
    );
}

#[test]
fn unrecognized_cardinality_is_preserved_verbatim() {
    let c = normalize_cardinality("SELF_REFERENCING");
    assert_eq!(c, Cardinality::Other("SELF_REFERENCING".to_string()));
    assert_eq!(c.to_string(), "SELF_REFERENCING");
}

#[test]
fn cardinality_display_is_hyphenated() {
    assert_eq!(Cardinality::OneToMany.to_string(), "one-to-many");
    assert_eq!(Cardinality::ManyToOne.to_string(), "many-to-one");
    assert_eq!(Cardinality::OneToOne.to_string(), "one-to-one");
    assert_eq!(Cardinality::ManyToMany.to_string(), "many-to-many");
}

#[test]
fn required_flag_accepts_string_and_boolean_forms() {
    assert!(parse_required_flag(Some("true")));
    assert!(parse_required_flag(Some("TRUE")));
    assert!(parse_required_flag(Some("yes")));
    assert!(parse_required_flag(Some("1")));
    assert!(!parse_required_flag(Some("false")));
    assert!(!parse_required_flag(Some("0")));
    assert!(!parse_required_flag(Some("maybe")));
    assert!(!parse_required_flag(None));
}
