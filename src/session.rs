use std::time::Duration;
use thirtyfour::prelude::*;
use tokio::time::{sleep, timeout};
use tracing::{debug, info};
use url::Url;

use crate::config::{
    TesterConfig, APP_CHECK_INTERVAL_MS, APP_WAIT_TIMEOUT_SECS, LOGIN_PASSWORD_CSS,
    LOGIN_SUBMIT_CSS, LOGIN_TIMEOUT_SECS, LOGIN_USERNAME_CSS, NAV_BAR_CSS, WAIT_POLL_INTERVAL_MS,
};
use crate::error::TesterError;

/// Open a WebDriver session against the configured endpoint.
pub async fn connect(config: &TesterConfig) -> Result<WebDriver, TesterError> {
    let mut caps = DesiredCapabilities::chrome();
    if config.headless {
        caps.set_headless()?;
    }
    let driver = WebDriver::new(&config.webdriver_url, caps).await?;
    // Narrow windows collapse the nav menu into a burger; keep it expanded.
    driver.maximize_window().await.ok();
    Ok(driver)
}

/// Check if the application answers plain HTTP at its base URL.
pub async fn is_app_responding(url: &Url) -> bool {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(3))
        .build();

    let client = match client {
        Ok(c) => c,
        Err(_) => return false,
    };

    match client.get(url.clone()).send().await {
        Ok(resp) => resp.status().is_success(),
        Err(_) => false,
    }
}

/// Wait for the application to respond before opening any browser session.
/// Returns true if it came up within the timeout.
pub async fn wait_for_app(url: &Url) -> bool {
    let deadline = Duration::from_secs(APP_WAIT_TIMEOUT_SECS);
    let interval = Duration::from_millis(APP_CHECK_INTERVAL_MS);

    let result = timeout(deadline, async {
        loop {
            if is_app_responding(url).await {
                debug!("Application at {} is responding", url);
                return true;
            }
            sleep(interval).await;
        }
    })
    .await;

    result.unwrap_or(false)
}

/// Log into the application. Unauthenticated sessions get redirected to the
/// Keycloak form; an already-authenticated session goes straight to the shell.
pub async fn login(driver: &WebDriver, config: &TesterConfig) -> Result<(), TesterError> {
    driver.goto(config.app_url.as_str()).await?;

    let deadline = Duration::from_secs(LOGIN_TIMEOUT_SECS);
    let interval = Duration::from_millis(WAIT_POLL_INTERVAL_MS);

    let needs_login = timeout(deadline, async {
        loop {
            if driver.find(By::Css(LOGIN_USERNAME_CSS)).await.is_ok() {
                return true;
            }
            if driver.find(By::Css(NAV_BAR_CSS)).await.is_ok() {
                return false;
            }
            sleep(interval).await;
        }
    })
    .await
    .map_err(|_| TesterError::Login("neither login form nor app shell appeared".to_string()))?;

    if needs_login {
        let username = driver.find(By::Css(LOGIN_USERNAME_CSS)).await?;
        username.clear().await?;
        username.send_keys(config.username.as_str()).await?;

        let password = driver.find(By::Css(LOGIN_PASSWORD_CSS)).await?;
        password.clear().await?;
        password.send_keys(config.password.as_str()).await?;

        driver.find(By::Css(LOGIN_SUBMIT_CSS)).await?.click().await?;
        debug!("Submitted login form");
    }

    let shell = timeout(deadline, async {
        loop {
            if driver.find(By::Css(NAV_BAR_CSS)).await.is_ok() {
                return;
            }
            sleep(interval).await;
        }
    })
    .await;

    if shell.is_err() {
        return Err(TesterError::Login(format!(
            "app shell did not render for user '{}'",
            config.username
        )));
    }

    info!("Logged in as {}", config.username);
    Ok(())
}
