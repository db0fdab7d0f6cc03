use chrono::{DateTime, Utc};
use serde::Serialize;
use thirtyfour::WebDriver;
use tracing::{error, info};

use crate::error::TesterError;
use crate::fields::TestCase;
use crate::{forms, nav, table};

/// Steps of the CRUD workflow, in execution order. A failing phase aborts the
/// remaining ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrudPhase {
    Navigate,
    Create,
    VerifyCreated,
    Edit,
    VerifyEdited,
    Delete,
    VerifyDeleted,
    Done,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub entity: String,
    pub passed: bool,
    /// Phase reached: `done` on success, otherwise the phase that failed.
    pub phase: CrudPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

/// Run one declarative CRUD case end to end:
/// navigate → create → verify → edit → verify → delete → verify-deleted.
pub async fn run_case(driver: &WebDriver, case: &TestCase) -> CaseReport {
    let started_at = Utc::now();
    info!("=== Case '{}' ===", case.entity);

    let outcome = drive(driver, case).await;
    let completed_at = Utc::now();

    match outcome {
        Ok(()) => {
            info!("Case '{}' passed", case.entity);
            CaseReport {
                entity: case.entity.clone(),
                passed: true,
                phase: CrudPhase::Done,
                error: None,
                started_at,
                completed_at,
            }
        }
        Err((phase, e)) => {
            error!("Case '{}' failed during {:?}: {}", case.entity, phase, e);
            CaseReport {
                entity: case.entity.clone(),
                passed: false,
                phase,
                error: Some(e.to_string()),
                started_at,
                completed_at,
            }
        }
    }
}

async fn drive(driver: &WebDriver, case: &TestCase) -> Result<(), (CrudPhase, TesterError)> {
    case.validate().map_err(|e| (CrudPhase::Navigate, e))?;

    let initial = case.initial_values();
    let edited = case.edited_values();

    // Navigate
    info!("[{}] navigate: {:?}", case.entity, case.menu);
    nav::open_entity_list(driver, &case.menu)
        .await
        .map_err(|e| (CrudPhase::Navigate, e))?;

    // Create
    info!("[{}] create", case.entity);
    let create = async {
        forms::open_create_form(driver).await?;
        for field in &case.fields {
            forms::fill_field(driver, field, &field.value).await?;
        }
        forms::save_entity(driver).await
    };
    create.await.map_err(|e| (CrudPhase::Create, e))?;

    // Verify created
    info!("[{}] verify created", case.entity);
    table::wait_for_row(driver, &case.entity, &initial)
        .await
        .map_err(|e| (CrudPhase::VerifyCreated, e))?;

    // Edit
    info!("[{}] edit", case.entity);
    let edit = async {
        table::open_row_for_edit(driver, &case.entity, &initial).await?;
        for field in &case.fields {
            forms::fill_field(driver, field, &field.value_edited).await?;
        }
        forms::save_entity(driver).await
    };
    edit.await.map_err(|e| (CrudPhase::Edit, e))?;

    // Verify edited
    info!("[{}] verify edited", case.entity);
    table::wait_for_row(driver, &case.entity, &edited)
        .await
        .map_err(|e| (CrudPhase::VerifyEdited, e))?;

    // Delete
    info!("[{}] delete", case.entity);
    table::delete_row(driver, &case.entity, &edited)
        .await
        .map_err(|e| (CrudPhase::Delete, e))?;

    // Verify deleted
    info!("[{}] verify deleted", case.entity);
    table::wait_for_row_absent(driver, &case.entity, &edited)
        .await
        .map_err(|e| (CrudPhase::VerifyDeleted, e))?;

    Ok(())
}
