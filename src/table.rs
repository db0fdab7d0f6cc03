use std::time::Duration;
use thirtyfour::prelude::*;
use tokio::time::{sleep, timeout};
use tracing::debug;

use crate::config::{
    CONFIRM_DELETE_XPATH, EDIT_BUTTON_XPATH, LIST_ROW_CSS, ROW_DELETE_XPATH, ROW_EDIT_XPATH,
    WAIT_POLL_INTERVAL_MS, WAIT_TIMEOUT_SECS,
};
use crate::error::TesterError;

/// True when a row's text contains every expected display value.
pub fn row_matches(row_text: &str, values: &[String]) -> bool {
    values.iter().all(|v| row_text.contains(v.as_str()))
}

async fn find_matching_row(driver: &WebDriver, values: &[String]) -> Option<WebElement> {
    let rows = driver.find_all(By::Css(LIST_ROW_CSS)).await.ok()?;
    for row in rows {
        if let Ok(text) = row.text().await {
            if row_matches(&text, values) {
                return Some(row);
            }
        }
    }
    None
}

/// Wait for a list row showing all of the expected values.
pub async fn wait_for_row(
    driver: &WebDriver,
    entity: &str,
    values: &[String],
) -> Result<WebElement, TesterError> {
    let deadline = Duration::from_secs(WAIT_TIMEOUT_SECS);
    let interval = Duration::from_millis(WAIT_POLL_INTERVAL_MS);

    let row = timeout(deadline, async {
        loop {
            if let Some(row) = find_matching_row(driver, values).await {
                return row;
            }
            sleep(interval).await;
        }
    })
    .await;

    row.map_err(|_| TesterError::RowNotFound {
        entity: entity.to_string(),
        values: values.to_vec(),
    })
}

/// Open the matching entity for edit. Screens with a per-row edit control use
/// it; the others open the detail view on row click and expose an Edit button
/// there.
pub async fn open_row_for_edit(
    driver: &WebDriver,
    entity: &str,
    values: &[String],
) -> Result<(), TesterError> {
    let row = wait_for_row(driver, entity, values).await?;

    if let Ok(control) = row.find(By::XPath(ROW_EDIT_XPATH)).await {
        control.click().await?;
        return Ok(());
    }

    row.click().await?;
    let deadline = Duration::from_secs(WAIT_TIMEOUT_SECS);
    let interval = Duration::from_millis(WAIT_POLL_INTERVAL_MS);

    let button = timeout(deadline, async {
        loop {
            if let Ok(el) = driver.find(By::XPath(EDIT_BUTTON_XPATH)).await {
                return el;
            }
            sleep(interval).await;
        }
    })
    .await
    .map_err(|_| TesterError::Timeout(format!("'Edit' button did not appear for '{}'", entity)))?;

    button.click().await?;
    Ok(())
}

/// Delete the matching entity and confirm the modal dialog.
pub async fn delete_row(
    driver: &WebDriver,
    entity: &str,
    values: &[String],
) -> Result<(), TesterError> {
    let row = wait_for_row(driver, entity, values).await?;

    let control = row
        .find(By::XPath(ROW_DELETE_XPATH))
        .await
        .map_err(|_| TesterError::DeleteControlNotFound(entity.to_string()))?;
    control.click().await?;

    let deadline = Duration::from_secs(WAIT_TIMEOUT_SECS);
    let interval = Duration::from_millis(WAIT_POLL_INTERVAL_MS);

    let confirm = timeout(deadline, async {
        loop {
            if let Ok(el) = driver.find(By::XPath(CONFIRM_DELETE_XPATH)).await {
                return el;
            }
            sleep(interval).await;
        }
    })
    .await
    .map_err(|_| TesterError::Timeout(format!("delete confirmation did not appear for '{}'", entity)))?;

    confirm.click().await?;
    debug!("Confirmed deletion of '{}'", entity);
    Ok(())
}

/// Wait until no row matches anymore. The row can vanish asynchronously after
/// the confirmation, so this polls rather than reading once.
pub async fn wait_for_row_absent(
    driver: &WebDriver,
    entity: &str,
    values: &[String],
) -> Result<(), TesterError> {
    let deadline = Duration::from_secs(WAIT_TIMEOUT_SECS);
    let interval = Duration::from_millis(WAIT_POLL_INTERVAL_MS);

    let gone = timeout(deadline, async {
        loop {
            if find_matching_row(driver, values).await.is_none() {
                return;
            }
            sleep(interval).await;
        }
    })
    .await;

    gone.map_err(|_| TesterError::RowStillPresent {
        entity: entity.to_string(),
    })
}
