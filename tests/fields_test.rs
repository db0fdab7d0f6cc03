use serde_json::json;
use shanoir_ui_tester::fields::*;

// --- Wire shape ---

#[test]
fn test_field_deserializes_from_original_shape() {
    let json = json!({
        "name": "serialNumber",
        "value": "12345",
        "valueEdited": "54321",
        "type": "text",
        "label": "Serial number"
    });

    let field: FieldDescriptor = serde_json::from_value(json).unwrap();
    assert_eq!(field.name, "serialNumber");
    assert_eq!(field.value, "12345");
    assert_eq!(field.value_edited, "54321");
    assert_eq!(field.kind, FieldKind::Text);
    assert_eq!(field.label, "Serial number");
}

#[test]
fn test_field_serializes_with_camel_case_keys() {
    let field = FieldDescriptor::select("center", "CH Colmar", "CHGR", "Center");
    let json = serde_json::to_value(&field).unwrap();

    let obj = json.as_object().unwrap();
    assert!(obj.contains_key("valueEdited"));
    assert!(obj.contains_key("type"));
    assert!(!obj.contains_key("value_edited"));
    assert_eq!(json["type"], "select");
}

#[test]
fn test_unknown_widget_kind_is_rejected() {
    let json = json!({
        "name": "x",
        "value": "a",
        "valueEdited": "b",
        "type": "slider",
        "label": "X"
    });

    assert!(serde_json::from_value::<FieldDescriptor>(json).is_err());
}

#[test]
fn test_field_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&FieldKind::Text).unwrap(), "\"text\"");
    assert_eq!(
        serde_json::to_string(&FieldKind::Select).unwrap(),
        "\"select\""
    );
    assert_eq!(
        serde_json::to_string(&FieldKind::Checkbox).unwrap(),
        "\"checkbox\""
    );
}

// --- Validation ---

fn valid_case() -> TestCase {
    TestCase::new(
        "widget",
        &["Configuration", "Widgets"],
        vec![FieldDescriptor::text("name", "W1", "W2", "Name")],
    )
}

#[test]
fn test_valid_case_passes_validation() {
    assert!(valid_case().validate().is_ok());
}

#[test]
fn test_empty_menu_is_rejected() {
    let mut case = valid_case();
    case.menu.clear();
    assert!(case.validate().is_err());
}

#[test]
fn test_empty_menu_label_is_rejected() {
    let mut case = valid_case();
    case.menu.push(String::new());
    assert!(case.validate().is_err());
}

#[test]
fn test_empty_field_list_is_rejected() {
    let mut case = valid_case();
    case.fields.clear();
    assert!(case.validate().is_err());
}

#[test]
fn test_empty_field_part_is_rejected() {
    let mut case = valid_case();
    case.fields[0].value_edited = String::new();
    assert!(case.validate().is_err());
}

#[test]
fn test_checkbox_values_must_be_booleans() {
    let mut case = valid_case();
    case.fields.push(FieldDescriptor::new(
        "active",
        "yes",
        "no",
        FieldKind::Checkbox,
        "Active",
    ));
    assert!(case.validate().is_err());

    case.fields[1].value = "true".to_string();
    case.fields[1].value_edited = "false".to_string();
    assert!(case.validate().is_ok());
}

// --- Value projections ---

#[test]
fn test_value_projections_preserve_field_order() {
    let case = TestCase::new(
        "widget",
        &["Menu"],
        vec![
            FieldDescriptor::text("a", "1", "10", "A"),
            FieldDescriptor::text("b", "2", "20", "B"),
        ],
    );

    assert_eq!(case.initial_values(), vec!["1", "2"]);
    assert_eq!(case.edited_values(), vec!["10", "20"]);
}
