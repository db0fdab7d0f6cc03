use std::time::Duration;
use thirtyfour::prelude::*;
use tokio::time::{sleep, timeout};
use tracing::debug;

use crate::config::{LIST_TABLE_CSS, WAIT_POLL_INTERVAL_MS, WAIT_TIMEOUT_SECS};
use crate::error::TesterError;

/// Quote a string as an XPath 1.0 literal. XPath has no escape syntax, so a
/// value containing both quote kinds needs concat().
pub fn xpath_literal(text: &str) -> String {
    if !text.contains('\'') {
        format!("'{}'", text)
    } else if !text.contains('"') {
        format!("\"{}\"", text)
    } else {
        let parts: Vec<String> = text.split('\'').map(|p| format!("'{}'", p)).collect();
        format!("concat({})", parts.join(", \"'\", "))
    }
}

/// XPath matching a navigation entry by its visible label.
pub fn menu_item_xpath(label: &str) -> String {
    let lit = xpath_literal(label);
    format!(
        "//nav//*[normalize-space(text())={lit}] \
         | //*[contains(@class,'menu') or contains(@class,'navbar')]//*[normalize-space(text())={lit}]"
    )
}

/// Walk the nested menu labels in order, then wait for the entity list table.
pub async fn open_entity_list(driver: &WebDriver, menu: &[String]) -> Result<(), TesterError> {
    let deadline = Duration::from_secs(WAIT_TIMEOUT_SECS);
    let interval = Duration::from_millis(WAIT_POLL_INTERVAL_MS);

    for label in menu {
        let xpath = menu_item_xpath(label);
        let item = timeout(deadline, async {
            loop {
                if let Ok(el) = driver.find(By::XPath(xpath.as_str())).await {
                    return el;
                }
                sleep(interval).await;
            }
        })
        .await
        .map_err(|_| TesterError::MenuEntryNotFound(label.clone()))?;

        item.click().await?;
        debug!("Clicked menu entry '{}'", label);
    }

    let table = timeout(deadline, async {
        loop {
            if driver.find(By::Css(LIST_TABLE_CSS)).await.is_ok() {
                return;
            }
            sleep(interval).await;
        }
    })
    .await;

    table.map_err(|_| {
        TesterError::Timeout(format!("entity list did not render after menu {:?}", menu))
    })
}
