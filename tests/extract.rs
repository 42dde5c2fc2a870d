use recordtype_md::model::{ActionKind, Cardinality};
use recordtype_md::parser::{ExtractError, extract_record_type};

const EMPLOYEE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<recordTypeHaul xmlns:a="http://www.appian.com/ae/types/2009">
  <recordType a:uuid="0007ffc1-aaaa-bbbb-cccc-000000000001" name="Employee">
    <a:description>Company employees with department assignment.</a:description>
    <fields>
      <field>
        <fieldName>id</fieldName>
        <type>Int</type>
        <required>true</required>
        <description>Primary key</description>
      </field>
      <field>
        <fieldName>name</fieldName>
        <type>Text</type>
      </field>
      <field>
        <fieldName>startDate</fieldName>
        <type>{http://www.appian.com/ae/types/2009}Date</type>
        <required>1</required>
      </field>
    </fields>
    <a:recordRelationshipCfg>
      <relationshipName>department</relationshipName>
      <relationshipType>MANY_TO_ONE</relationshipType>
      <targetRecordTypeUuid>0007ffc1-aaaa-bbbb-cccc-000000000002</targetRecordTypeUuid>
      <fieldMapping>
        <sourceField>departmentId</sourceField>
        <targetField>id</targetField>
      </fieldMapping>
    </a:recordRelationshipCfg>
    <a:recordListActionCfg a:uuid="act-1">
      <a:referenceKey>newEmployee</a:referenceKey>
      <a:staticTitle>New Employee</a:staticTitle>
      <a:description>Create an employee record</a:description>
    </a:recordListActionCfg>
    <a:relatedActionCfg a:uuid="act-2">
      <a:referenceKey>updateEmployee</a:referenceKey>
    </a:relatedActionCfg>
  </recordType>
</recordTypeHaul>
"#;

#[test]
fn extract_identity_and_description() {
    let rt = extract_record_type(EMPLOYEE_XML, "employee.xml").expect("extract Employee");
    assert_eq!(rt.name, "Employee");
    assert_eq!(
        rt.uuid.as_deref(),
        Some("0007ffc1-aaaa-bbbb-cccc-000000000001")
    );
    assert_eq!(
        rt.description.as_deref(),
        Some("Company employees with department assignment.")
    );
}

#[test]
fn extract_fields_with_defaults_and_normalization() {
    let rt = extract_record_type(EMPLOYEE_XML, "employee.xml").expect("extract Employee");
    assert_eq!(rt.fields.len(), 3);

    let id = &rt.fields[0];
    assert_eq!(id.name, "id");
    assert_eq!(id.data_type, "Integer");
    assert!(id.required);
    assert_eq!(id.description.as_deref(), Some("Primary key"));

    // Absent <required> and <description> default, never fail.
    let name = &rt.fields[1];
    assert_eq!(name.name, "name");
    assert_eq!(name.data_type, "Text");
    assert!(!name.required);
    assert_eq!(name.description, None);

    // Clark-notation namespace prefix is stripped before type normalization,
    // and "1" is accepted as a required flag.
    let start = &rt.fields[2];
    assert_eq!(start.data_type, "Date");
    assert!(start.required);
}

#[test]
fn extract_relationships_with_mappings() {
    let rt = extract_record_type(EMPLOYEE_XML, "employee.xml").expect("extract Employee");
    assert_eq!(rt.relationships.len(), 1);
    let rel = &rt.relationships[0];
    assert_eq!(rel.name, "department");
    assert_eq!(rel.cardinality, Cardinality::ManyToOne);
    assert_eq!(
        rel.target_record_type.as_deref(),
        Some("0007ffc1-aaaa-bbbb-cccc-000000000002")
    );
    assert_eq!(rel.field_mappings.len(), 1);
    assert_eq!(rel.field_mappings[0].source_field, "departmentId");
    assert_eq!(rel.field_mappings[0].target_field, "id");
}

#[test]
fn extract_actions_with_title_fallback() {
    let rt = extract_record_type(EMPLOYEE_XML, "employee.xml").expect("extract Employee");
    assert_eq!(rt.actions.len(), 2);

    let create = &rt.actions[0];
    assert_eq!(create.name, "New Employee");
    assert_eq!(create.kind, Some(ActionKind::ListAction));
    assert_eq!(
        create.description.as_deref(),
        Some("Create an employee record")
    );

    // No static title: the reference key stands in as the display name.
    let update = &rt.actions[1];
    assert_eq!(update.name, "updateEmployee");
    assert_eq!(update.kind, Some(ActionKind::RelatedAction));
    assert_eq!(update.description, None);
}

#[test]
fn absent_collections_yield_empty_sequences() {
    let xml = r#"<recordTypeHaul><recordType name="Bare"/></recordTypeHaul>"#;
    let rt = extract_record_type(xml, "bare.xml").expect("extract Bare");
    assert_eq!(rt.name, "Bare");
    assert_eq!(rt.uuid, None);
    assert_eq!(rt.description, None);
    assert!(rt.fields.is_empty());
    assert!(rt.relationships.is_empty());
    assert!(rt.actions.is_empty());
}

#[test]
fn duplicate_fields_are_preserved_in_document_order() {
    let xml = r#"<recordTypeHaul><recordType name="Dup">
      <field><fieldName>code</fieldName><type>Text</type></field>
      <field><fieldName>other</fieldName><type>Int</type></field>
      <field><fieldName>code</fieldName><type>Text</type></field>
    </recordType></recordTypeHaul>"#;
    let rt = extract_record_type(xml, "dup.xml").expect("extract Dup");
    let names: Vec<&str> = rt.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["code", "other", "code"]);
}

#[test]
fn missing_record_type_root_fails() {
    let xml = r#"<somethingElse><data/></somethingElse>"#;
    let err = extract_record_type(xml, "not-a-haul.xml").unwrap_err();
    match err {
        ExtractError::MissingRecordType { path } => assert_eq!(path, "not-a-haul.xml"),
        other => panic!("expected MissingRecordType, got {:?}", other),
    }
}

#[test]
fn missing_name_attribute_fails() {
    let xml = r#"<recordTypeHaul><recordType uuid="u-1"/></recordTypeHaul>"#;
    let err = extract_record_type(xml, "nameless.xml").unwrap_err();
    assert!(matches!(err, ExtractError::MissingName { .. }), "{:?}", err);
}

#[test]
fn malformed_xml_fails() {
    let err = extract_record_type("<recordType name=", "broken.xml").unwrap_err();
    assert!(matches!(err, ExtractError::MalformedXml { .. }), "{:?}", err);
}

#[test]
fn model_serializes_to_json() {
    let rt = extract_record_type(EMPLOYEE_XML, "employee.xml").expect("extract Employee");
    let v = serde_json::to_value(&rt).expect("serialize model");
    assert_eq!(v["name"], "Employee");
    assert_eq!(v["fields"][0]["data_type"], "Integer");
}
