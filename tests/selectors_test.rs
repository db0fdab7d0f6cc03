use shanoir_ui_tester::fields::FieldKind;
use shanoir_ui_tester::forms::control_selector;
use shanoir_ui_tester::nav::{menu_item_xpath, xpath_literal};
use shanoir_ui_tester::table::row_matches;

// --- XPath literals ---

#[test]
fn test_xpath_literal_plain() {
    assert_eq!(xpath_literal("Achieva 3T"), "'Achieva 3T'");
}

#[test]
fn test_xpath_literal_with_single_quote() {
    assert_eq!(xpath_literal("St. Luke's"), "\"St. Luke's\"");
}

#[test]
fn test_xpath_literal_with_both_quotes() {
    let lit = xpath_literal("a'b\"c");
    assert!(lit.starts_with("concat("));
    assert!(lit.contains("'a'"));
    assert!(lit.contains("\"'\""));
}

#[test]
fn test_menu_item_xpath_embeds_label() {
    let xpath = menu_item_xpath("Medical configuration");
    assert!(xpath.contains("'Medical configuration'"));
    assert!(xpath.contains("normalize-space"));
}

// --- Control selectors ---

#[test]
fn test_control_selector_per_kind() {
    assert_eq!(
        control_selector(FieldKind::Text, "serialNumber"),
        "input[formcontrolname='serialNumber']"
    );
    assert_eq!(
        control_selector(FieldKind::Select, "center"),
        "select[formcontrolname='center']"
    );
    assert_eq!(
        control_selector(FieldKind::Textarea, "comment"),
        "textarea[formcontrolname='comment']"
    );
    assert_eq!(
        control_selector(FieldKind::Checkbox, "active"),
        "input[formcontrolname='active']"
    );
}

// --- Row matching ---

#[test]
fn test_row_matches_all_values() {
    let row = "12345  Achieva 3T  CH Colmar";
    let values = vec![
        "12345".to_string(),
        "Achieva 3T".to_string(),
        "CH Colmar".to_string(),
    ];
    assert!(row_matches(row, &values));
}

#[test]
fn test_row_does_not_match_missing_value() {
    let row = "54321  Achieva 3T  CH Colmar";
    let values = vec!["12345".to_string(), "Achieva 3T".to_string()];
    assert!(!row_matches(row, &values));
}

#[test]
fn test_row_matches_empty_expectation() {
    // Degenerate but defined: no expected values means any row matches.
    assert!(row_matches("anything", &[]));
}
