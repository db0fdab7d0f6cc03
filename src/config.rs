use clap::Parser;
use std::path::PathBuf;
use url::Url;

use crate::error::TesterError;

/// Shanoir UI Tester — drives the admin UI through declarative CRUD workflows.
#[derive(Parser, Debug, Clone)]
#[command(name = "shanoir-ui-tester")]
pub struct CliArgs {
    /// WebDriver endpoint (chromedriver / selenium standalone)
    #[arg(long = "webdriver-url", default_value = DEFAULT_WEBDRIVER_URL)]
    pub webdriver_url: String,

    /// Base URL of the application under test
    #[arg(long = "app-url", default_value = DEFAULT_APP_URL)]
    pub app_url: String,

    /// Login username (falls back to SHANOIR_USER)
    #[arg(short = 'u', long = "username")]
    pub username: Option<String>,

    /// Login password (falls back to SHANOIR_PASSWORD)
    #[arg(short = 'p', long = "password")]
    pub password: Option<String>,

    /// Run the browser headless
    #[arg(long = "headless")]
    pub headless: bool,

    /// Run only the case with this entity name
    #[arg(short = 'c', long = "case")]
    pub case: Option<String>,

    /// JSON file with additional test cases
    #[arg(long = "cases-file")]
    pub cases_file: Option<PathBuf>,

    /// Write a JSON suite report to this path
    #[arg(short = 'r', long = "report-file")]
    pub report_file: Option<PathBuf>,

    /// Mirror logs to this file
    #[arg(short = 'l', long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Leave the browser session open on exit (for debugging failures)
    #[arg(long = "keep-browser")]
    pub keep_browser: bool,
}

pub struct TesterConfig {
    pub webdriver_url: String,
    pub app_url: Url,
    pub username: String,
    pub password: String,
    pub headless: bool,
    pub case_filter: Option<String>,
    pub cases_file: Option<PathBuf>,
    pub report_file: Option<PathBuf>,
    pub keep_browser: bool,
}

// Endpoint constants
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
pub const DEFAULT_APP_URL: &str = "http://localhost:4200";

// Credential env fallbacks
pub const USERNAME_ENV: &str = "SHANOIR_USER";
pub const PASSWORD_ENV: &str = "SHANOIR_PASSWORD";

// Wait policy: every UI expectation polls until this timeout.
pub const WAIT_TIMEOUT_SECS: u64 = 10;
pub const WAIT_POLL_INTERVAL_MS: u64 = 250;

// App startup and login are slower than in-page waits.
pub const APP_WAIT_TIMEOUT_SECS: u64 = 60;
pub const APP_CHECK_INTERVAL_MS: u64 = 500;
pub const LOGIN_TIMEOUT_SECS: u64 = 30;

// Keycloak login form controls.
pub const LOGIN_USERNAME_CSS: &str = "input#username";
pub const LOGIN_PASSWORD_CSS: &str = "input#password";
pub const LOGIN_SUBMIT_CSS: &str = "#kc-login";

// App shell and entity list selectors.
pub const NAV_BAR_CSS: &str = "nav, .navbar, .menu-bar";
pub const LIST_TABLE_CSS: &str = "table tbody";
pub const LIST_ROW_CSS: &str = "table tbody tr";

// Form controls are addressed by Angular's formcontrolname attribute; the
// surrounding buttons by visible text or title.
pub const NEW_BUTTON_XPATH: &str =
    "//button[normalize-space(.)='New' or @title='New'] | //a[normalize-space(.)='New']";
pub const SAVE_BUTTON_XPATH: &str = "//button[normalize-space(.)='Save' or @type='submit']";
pub const EDIT_BUTTON_XPATH: &str = "//button[normalize-space(.)='Edit' or @title='Edit']";
pub const ROW_EDIT_XPATH: &str = ".//*[@title='Edit' or contains(@class,'edit')]";
pub const ROW_DELETE_XPATH: &str = ".//*[@title='Delete' or contains(@class,'delete')]";
pub const CONFIRM_DELETE_XPATH: &str =
    "//*[contains(@class,'modal') or contains(@class,'confirm')]\
     //button[normalize-space(.)='OK' or normalize-space(.)='Yes' or normalize-space(.)='Delete']";

impl TesterConfig {
    pub fn from_args(args: CliArgs) -> Result<Self, TesterError> {
        let app_url = Url::parse(&args.app_url).map_err(|e| {
            TesterError::Config(format!("Invalid app URL '{}': {}", args.app_url, e))
        })?;

        let username = resolve_credential(args.username, USERNAME_ENV).ok_or_else(|| {
            TesterError::Config(format!("No username given (use --username or {})", USERNAME_ENV))
        })?;
        let password = resolve_credential(args.password, PASSWORD_ENV).ok_or_else(|| {
            TesterError::Config(format!("No password given (use --password or {})", PASSWORD_ENV))
        })?;

        Ok(TesterConfig {
            webdriver_url: args.webdriver_url,
            app_url,
            username,
            password,
            headless: args.headless,
            case_filter: args.case,
            cases_file: args.cases_file,
            report_file: args.report_file,
            keep_browser: args.keep_browser,
        })
    }
}

/// CLI argument wins over the environment; empty strings count as absent.
pub fn resolve_credential(arg: Option<String>, env_var: &str) -> Option<String> {
    arg.filter(|s| !s.is_empty())
        .or_else(|| std::env::var(env_var).ok().filter(|s| !s.is_empty()))
}
