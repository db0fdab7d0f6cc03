#[derive(Debug, thiserror::Error)]
pub enum TesterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Login failed: {0}")]
    Login(String),

    #[error("Menu entry not found: '{0}'")]
    MenuEntryNotFound(String),

    #[error("Form control not found for field '{0}'")]
    ControlNotFound(String),

    #[error("Option '{option}' not found in select '{field}'")]
    OptionNotFound { field: String, option: String },

    #[error("Field '{field}': expected a boolean value, got '{value}'")]
    NotABoolean { field: String, value: String },

    #[error("No row found for '{entity}' matching {values:?}")]
    RowNotFound { entity: String, values: Vec<String> },

    #[error("Row for '{entity}' still present after delete")]
    RowStillPresent { entity: String },

    #[error("No delete control in the row for '{0}'")]
    DeleteControlNotFound(String),

    #[error("Invalid test case '{entity}': {reason}")]
    InvalidCase { entity: String, reason: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
