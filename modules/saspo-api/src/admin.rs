//! Dashboard mutations. Every handler answers with a 303 back to the
//! dashboard and reports its outcome as a flash message.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::warn;

use saspo_common::{CmsError, Flash};
use saspo_store::AddLinkOutcome;

use crate::auth::AdminSession;
use crate::flash::redirect_with_flash;
use crate::AppState;

const DASHBOARD: &str = "/dashboard";

fn back(flash: Flash) -> Response {
    redirect_with_flash(DASHBOARD, flash)
}

fn back_silently() -> Response {
    Redirect::to(DASHBOARD).into_response()
}

#[derive(serde::Deserialize)]
pub struct UpdateDataForm {
    #[serde(default)]
    pub json_data: String,
}

pub async fn update_data(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<UpdateDataForm>,
) -> Response {
    match state.store.update_content(&form.json_data) {
        Ok(()) => back(Flash::success("Database updated successfully.")),
        Err(CmsError::Json(e)) => {
            warn!(error = %e, "Rejected content update");
            back(Flash::error(format!("Error: {e}")))
        }
        Err(e) => {
            warn!(error = %e, "Failed to write content document");
            back(Flash::error("Error writing to file."))
        }
    }
}

pub async fn upload_file(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Response {
    let mut upload = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }
                let filename = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => upload = Some((filename, bytes)),
                    Err(e) => {
                        warn!(error = %e, "Upload body could not be read");
                        return back(Flash::error(format!("System Error: {e}")));
                    }
                }
                break;
            }
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Malformed upload");
                return back(Flash::error(format!("System Error: {e}")));
            }
        }
    }

    let Some((filename, bytes)) = upload else {
        return back_silently();
    };
    if filename.is_empty() {
        return back_silently();
    }

    match state.store.upload_asset(&filename, &bytes) {
        Ok(name) => back(Flash::success(format!("Uploaded: {name}"))),
        Err(CmsError::Validation(message)) => {
            warn!(file = %filename, "Rejected upload");
            back(Flash::error(message))
        }
        Err(e) => {
            warn!(file = %filename, error = %e, "Failed to store upload");
            back(Flash::error(format!("System Error: {e}")))
        }
    }
}

pub async fn delete_file(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Response {
    match state.store.delete_asset(&filename) {
        Ok(name) => back(Flash::success(format!("Deleted: {name}"))),
        Err(CmsError::Protected(name)) => back(Flash::error(format!("System Protected: {name}"))),
        Err(CmsError::InUse(name)) => back(Flash::error(format!("Cannot delete {name}: In use."))),
        Err(CmsError::NotFound(name)) => back(Flash::error(format!("File Not Found: {name}"))),
        Err(e) => {
            warn!(file = %filename, error = %e, "Asset deletion failed");
            back(Flash::error(format!("System Error: {e}")))
        }
    }
}

#[derive(serde::Deserialize)]
pub struct AddLinkForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

pub async fn add_link(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<AddLinkForm>,
) -> Response {
    match state.store.add_link(&form.title, &form.url) {
        Ok(AddLinkOutcome::Added) => back(Flash::success("Link added.")),
        Ok(AddLinkOutcome::Duplicate | AddLinkOutcome::MissingField) => back_silently(),
        Err(e) => {
            warn!(error = %e, "Failed to save links");
            back(Flash::error("Error writing to file."))
        }
    }
}

#[derive(serde::Deserialize)]
pub struct DeleteLinkForm {
    #[serde(default)]
    pub url: String,
}

pub async fn delete_link(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<DeleteLinkForm>,
) -> Response {
    if form.url.trim().is_empty() {
        return back_silently();
    }
    match state.store.delete_link(&form.url) {
        Ok(_) => back(Flash::success("Link removed.")),
        Err(CmsError::InUse(_)) => back(Flash::error("Cannot delete link: In use.")),
        Err(e) => {
            warn!(error = %e, "Failed to save links");
            back(Flash::error("Error writing to file."))
        }
    }
}
