use std::path::Path;
use tracing::warn;

use crate::error::TesterError;
use crate::fields::{FieldDescriptor, TestCase};

/// Acquisition equipment admin screen.
pub fn acquisition_equipment() -> TestCase {
    TestCase::new(
        "acquisition-equipment",
        &["Medical configuration", "Acquisition equipments"],
        vec![
            FieldDescriptor::text("serialNumber", "12345", "54321", "Serial number"),
            FieldDescriptor::select(
                "manufacturerModel",
                "Achieva 3T",
                "Artis Q",
                "Manufacturer model",
            ),
            FieldDescriptor::select("center", "CH Colmar", "CHGR", "Center"),
        ],
    )
}

/// Center admin screen. The acquisition equipment form picks its center from
/// this list, so both screens share reference data.
pub fn center() -> TestCase {
    TestCase::new(
        "center",
        &["Medical configuration", "Centers"],
        vec![
            FieldDescriptor::text("name", "CHU Rennes", "CHU Brest", "Name"),
            FieldDescriptor::text("street", "2 rue Henri Le Guilloux", "Bd Tanguy Prigent", "Street"),
            FieldDescriptor::text("postalCode", "35033", "29609", "Postal code"),
            FieldDescriptor::text("city", "Rennes", "Brest", "City"),
            FieldDescriptor::text("country", "France", "Belgium", "Country"),
            FieldDescriptor::text("phoneNumber", "0299284321", "0298334455", "Phone number"),
        ],
    )
}

/// Manufacturer model admin screen.
pub fn manufacturer_model() -> TestCase {
    TestCase::new(
        "manufacturer-model",
        &["Medical configuration", "Manufacturer models"],
        vec![
            FieldDescriptor::text("name", "Ingenia 3T", "Ingenia 1.5T", "Name"),
            FieldDescriptor::select("manufacturer", "Philips", "Siemens", "Manufacturer"),
            FieldDescriptor::text("magneticField", "3", "1.5", "Magnetic field"),
        ],
    )
}

pub fn builtin_cases() -> Vec<TestCase> {
    vec![acquisition_equipment(), center(), manufacturer_model()]
}

/// Load additional cases from a JSON file (an array in the same shape as the
/// built-in tables).
pub fn load_cases(path: &Path) -> Result<Vec<TestCase>, TesterError> {
    let content = std::fs::read_to_string(path)?;
    let cases: Vec<TestCase> = serde_json::from_str(&content)?;
    if cases.is_empty() {
        warn!("Case file {:?} contains no cases", path);
    }
    Ok(cases)
}
