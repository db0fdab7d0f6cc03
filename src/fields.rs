use serde::{Deserialize, Serialize};

use crate::error::TesterError;

/// Widget kind of a form control. Determines how the runner interacts with
/// it: type into it, pick an option, or toggle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Select,
    Textarea,
    Checkbox,
    Date,
}

/// One form input and its test values. `name` must match the
/// `formcontrolname` of a control on the target page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub value: String,
    #[serde(rename = "valueEdited")]
    pub value_edited: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
}

impl FieldDescriptor {
    pub fn text(name: &str, value: &str, value_edited: &str, label: &str) -> Self {
        Self::new(name, value, value_edited, FieldKind::Text, label)
    }

    pub fn select(name: &str, value: &str, value_edited: &str, label: &str) -> Self {
        Self::new(name, value, value_edited, FieldKind::Select, label)
    }

    pub fn new(name: &str, value: &str, value_edited: &str, kind: FieldKind, label: &str) -> Self {
        FieldDescriptor {
            name: name.to_string(),
            value: value.to_string(),
            value_edited: value_edited.to_string(),
            kind,
            label: label.to_string(),
        }
    }
}

/// A declarative CRUD test case: the menu path to an entity list screen and
/// the ordered fields of its create/edit form. Immutable for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub entity: String,
    pub menu: Vec<String>,
    pub fields: Vec<FieldDescriptor>,
}

impl TestCase {
    pub fn new(entity: &str, menu: &[&str], fields: Vec<FieldDescriptor>) -> Self {
        TestCase {
            entity: entity.to_string(),
            menu: menu.iter().map(|s| s.to_string()).collect(),
            fields,
        }
    }

    /// Well-formedness check, run before any browser interaction: non-empty
    /// entity, menu labels, and field parts; checkbox values must be booleans.
    pub fn validate(&self) -> Result<(), TesterError> {
        if self.entity.is_empty() {
            return self.invalid("empty entity name");
        }
        if self.menu.is_empty() {
            return self.invalid("empty menu path");
        }
        if self.menu.iter().any(|label| label.is_empty()) {
            return self.invalid("empty menu label");
        }
        if self.fields.is_empty() {
            return self.invalid("no fields");
        }
        for field in &self.fields {
            if field.name.is_empty()
                || field.value.is_empty()
                || field.value_edited.is_empty()
                || field.label.is_empty()
            {
                return self.invalid(&format!("field '{}' has an empty part", field.name));
            }
            if field.kind == FieldKind::Checkbox {
                for v in [&field.value, &field.value_edited] {
                    if v.parse::<bool>().is_err() {
                        return self.invalid(&format!(
                            "checkbox field '{}' has non-boolean value '{}'",
                            field.name, v
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// The display values a freshly created entity should show in its list
    /// row, in field order.
    pub fn initial_values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value.clone()).collect()
    }

    /// Same, after the edit pass.
    pub fn edited_values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value_edited.clone()).collect()
    }

    fn invalid(&self, reason: &str) -> Result<(), TesterError> {
        Err(TesterError::InvalidCase {
            entity: self.entity.clone(),
            reason: reason.to_string(),
        })
    }
}
