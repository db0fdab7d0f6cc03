use std::time::Duration;
use thirtyfour::prelude::*;
use tokio::time::{sleep, timeout};
use tracing::debug;

use crate::config::{
    LIST_TABLE_CSS, NEW_BUTTON_XPATH, SAVE_BUTTON_XPATH, WAIT_POLL_INTERVAL_MS, WAIT_TIMEOUT_SECS,
};
use crate::error::TesterError;
use crate::fields::{FieldDescriptor, FieldKind};
use crate::nav::xpath_literal;

/// CSS selector for a form control, per widget kind. Controls are addressed
/// by their Angular formcontrolname.
pub fn control_selector(kind: FieldKind, name: &str) -> String {
    match kind {
        FieldKind::Select => format!("select[formcontrolname='{}']", name),
        FieldKind::Textarea => format!("textarea[formcontrolname='{}']", name),
        FieldKind::Text | FieldKind::Checkbox | FieldKind::Date => {
            format!("input[formcontrolname='{}']", name)
        }
    }
}

async fn find_control(
    driver: &WebDriver,
    field: &FieldDescriptor,
) -> Result<WebElement, TesterError> {
    let css = control_selector(field.kind, &field.name);
    let deadline = Duration::from_secs(WAIT_TIMEOUT_SECS);
    let interval = Duration::from_millis(WAIT_POLL_INTERVAL_MS);

    timeout(deadline, async {
        loop {
            if let Ok(el) = driver.find(By::Css(css.as_str())).await {
                return el;
            }
            sleep(interval).await;
        }
    })
    .await
    .map_err(|_| TesterError::ControlNotFound(field.name.clone()))
}

/// Fill one field with the given value, honoring its widget kind.
pub async fn fill_field(
    driver: &WebDriver,
    field: &FieldDescriptor,
    value: &str,
) -> Result<(), TesterError> {
    let control = find_control(driver, field).await?;

    match field.kind {
        FieldKind::Text | FieldKind::Textarea | FieldKind::Date => {
            control.clear().await?;
            control.send_keys(value).await?;
        }
        FieldKind::Select => {
            // Options are matched by visible text, not value attribute: the
            // case tables carry display strings.
            control.click().await?;
            let xpath = format!(".//option[normalize-space(.)={}]", xpath_literal(value));
            let option = control.find(By::XPath(xpath.as_str())).await.map_err(|_| {
                TesterError::OptionNotFound {
                    field: field.name.clone(),
                    option: value.to_string(),
                }
            })?;
            option.click().await?;
        }
        FieldKind::Checkbox => {
            let want = value.parse::<bool>().map_err(|_| TesterError::NotABoolean {
                field: field.name.clone(),
                value: value.to_string(),
            })?;
            if control.is_selected().await? != want {
                control.click().await?;
            }
        }
    }

    debug!("Filled '{}' ({:?}) with '{}'", field.name, field.kind, value);
    Ok(())
}

/// Open the create form from the entity list.
pub async fn open_create_form(driver: &WebDriver) -> Result<(), TesterError> {
    let deadline = Duration::from_secs(WAIT_TIMEOUT_SECS);
    let interval = Duration::from_millis(WAIT_POLL_INTERVAL_MS);

    let button = timeout(deadline, async {
        loop {
            if let Ok(el) = driver.find(By::XPath(NEW_BUTTON_XPATH)).await {
                return el;
            }
            sleep(interval).await;
        }
    })
    .await
    .map_err(|_| TesterError::Timeout("'New' button did not appear".to_string()))?;

    button.click().await?;
    Ok(())
}

/// Save the open form and wait until the list view is back.
pub async fn save_entity(driver: &WebDriver) -> Result<(), TesterError> {
    let save = driver
        .find(By::XPath(SAVE_BUTTON_XPATH))
        .await
        .map_err(|_| TesterError::Timeout("'Save' button not found".to_string()))?;
    save.click().await?;

    let deadline = Duration::from_secs(WAIT_TIMEOUT_SECS);
    let interval = Duration::from_millis(WAIT_POLL_INTERVAL_MS);

    let back = timeout(deadline, async {
        loop {
            if driver.find(By::Css(LIST_TABLE_CSS)).await.is_ok() {
                return;
            }
            sleep(interval).await;
        }
    })
    .await;

    back.map_err(|_| TesterError::Timeout("list view did not return after save".to_string()))
}
