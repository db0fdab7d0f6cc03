use shanoir_ui_tester::cases::*;
use shanoir_ui_tester::fields::FieldKind;

#[test]
fn test_acquisition_equipment_table() {
    let case = acquisition_equipment();

    assert_eq!(
        case.menu,
        vec!["Medical configuration", "Acquisition equipments"]
    );
    assert_eq!(case.fields.len(), 3);

    let serial = &case.fields[0];
    assert_eq!(serial.name, "serialNumber");
    assert_eq!(serial.value, "12345");
    assert_eq!(serial.value_edited, "54321");
    assert_eq!(serial.kind, FieldKind::Text);
    assert_eq!(serial.label, "Serial number");

    let model = &case.fields[1];
    assert_eq!(model.name, "manufacturerModel");
    assert_eq!(model.value, "Achieva 3T");
    assert_eq!(model.value_edited, "Artis Q");
    assert_eq!(model.kind, FieldKind::Select);
    assert_eq!(model.label, "Manufacturer model");

    let center = &case.fields[2];
    assert_eq!(center.name, "center");
    assert_eq!(center.value, "CH Colmar");
    assert_eq!(center.value_edited, "CHGR");
    assert_eq!(center.kind, FieldKind::Select);
    assert_eq!(center.label, "Center");
}

#[test]
fn test_all_builtin_cases_are_well_formed() {
    let cases = builtin_cases();
    assert!(!cases.is_empty());
    for case in &cases {
        case.validate()
            .unwrap_or_else(|e| panic!("case '{}' is malformed: {}", case.entity, e));
    }
}

#[test]
fn test_builtin_entity_names_are_unique() {
    let cases = builtin_cases();
    let mut names: Vec<&str> = cases.iter().map(|c| c.entity.as_str()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), cases.len());
}

#[test]
fn test_load_cases_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.json");
    std::fs::write(
        &path,
        r#"[{
            "entity": "coil",
            "menu": ["Medical configuration", "Coils"],
            "fields": [{
                "name": "name",
                "value": "Head coil",
                "valueEdited": "Body coil",
                "type": "text",
                "label": "Name"
            }]
        }]"#,
    )
    .unwrap();

    let cases = load_cases(&path).unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].entity, "coil");
    assert!(cases[0].validate().is_ok());
}

#[test]
fn test_load_cases_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_cases(&dir.path().join("nope.json")).is_err());
}

#[test]
fn test_load_cases_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(load_cases(&path).is_err());
}
