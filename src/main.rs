mod cases;
mod config;
mod error;
mod fields;
mod forms;
mod nav;
mod report;
mod runner;
mod session;
mod table;

use clap::Parser;
use std::path::Path;
use thirtyfour::WebDriver;
use tracing::{error, info, warn};

use config::{CliArgs, TesterConfig};
use error::TesterError;
use fields::TestCase;
use runner::CaseReport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let _log_guard = init_tracing(&args);

    info!("Starting shanoir-ui-tester v{}", env!("CARGO_PKG_VERSION"));
    info!("App URL: {}", args.app_url);
    info!("WebDriver: {}", args.webdriver_url);

    let config = match TesterConfig::from_args(args) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut cases = cases::builtin_cases();
    if let Some(path) = &config.cases_file {
        cases.extend(cases::load_cases(path)?);
    }
    if let Some(filter) = &config.case_filter {
        cases.retain(|c| &c.entity == filter);
        if cases.is_empty() {
            error!("No case named '{}'", filter);
            std::process::exit(1);
        }
    }
    for case in &cases {
        case.validate()?;
    }
    info!("Running {} case(s)", cases.len());

    if !session::wait_for_app(&config.app_url).await {
        error!(
            "Application at {} did not respond within {}s",
            config.app_url,
            config::APP_WAIT_TIMEOUT_SECS
        );
        std::process::exit(1);
    }

    let driver = session::connect(&config).await?;
    let started_at = chrono::Utc::now();

    let outcome = run_suite(&driver, &config, &cases).await;

    if config.keep_browser {
        info!("Leaving browser session open (--keep-browser)");
    } else if let Err(e) = driver.quit().await {
        warn!("Failed to quit browser session: {}", e);
    }

    let results = outcome?;
    let suite = report::SuiteReport::from_results(started_at, results);
    info!("Suite finished: {}/{} passed", suite.passed, suite.total);
    for result in &suite.results {
        if !result.passed {
            warn!(
                "  FAILED {} during {:?}: {}",
                result.entity,
                result.phase,
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    if let Some(path) = &config.report_file {
        report::save_report(path, &suite);
        info!("Report written to {:?}", path);
    }

    if !suite.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}

/// Log in once, then run every case; a failed case is recorded and the suite
/// moves on to the next one.
async fn run_suite(
    driver: &WebDriver,
    config: &TesterConfig,
    cases: &[TestCase],
) -> Result<Vec<CaseReport>, TesterError> {
    session::login(driver, config).await?;

    let mut results = Vec::new();
    for case in cases {
        // Each case starts from the app home so menu navigation is deterministic.
        driver.goto(config.app_url.as_str()).await?;
        results.push(runner::run_case(driver, case).await);
    }
    Ok(results)
}

fn init_tracing(args: &CliArgs) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shanoir_ui_tester=info".into());

    match &args.log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            let file = path
                .file_name()
                .map(|f| f.to_os_string())
                .unwrap_or_else(|| "shanoir-ui-tester.log".into());
            let appender = tracing_appender::rolling::never(dir, file);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
    }
}
