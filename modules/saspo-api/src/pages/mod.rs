use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{info, warn};

use saspo_manual::{generate_manual, MANUAL_FILENAME};

use crate::auth::{self, AdminSession};
use crate::components::{
    dashboard_to_view, flash_to_view, home_to_view, render_dashboard, render_home, render_login,
};
use crate::flash::PendingFlash;
use crate::seo::generate_seo;
use crate::AppState;

// --- Public ---

pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let content = state.store.content();
    let links = state.store.links();
    let seo = generate_seo(&content);
    Html(render_home(home_to_view(&content, &links, seo)))
}

// --- Auth pages (no AdminSession required) ---

#[derive(serde::Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

pub async fn login_page(Query(query): Query<LoginQuery>, flash: PendingFlash) -> Response {
    let next = auth::safe_next(query.next.as_deref()).to_string();
    let page = Html(render_login(None, flash.0.as_ref().map(flash_to_view), next));
    flash.respond(page)
}

#[derive(serde::Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub next: Option<String>,
}

pub async fn login_submit(
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<LoginForm>,
) -> Response {
    let next = auth::safe_next(form.next.as_deref()).to_string();

    if !auth::credentials_match(&state.config, &form.username, &form.password) {
        warn!(username = form.username.as_str(), "Rejected admin login");
        return Html(render_login(
            Some("Access Denied: Invalid Credentials".to_string()),
            None,
            next,
        ))
        .into_response();
    }

    info!("Admin logged in");
    let cookie = auth::session_cookie(auth::session_secret(&state.config));
    ([(header::SET_COOKIE, cookie)], Redirect::to(&next)).into_response()
}

pub async fn logout() -> Response {
    (
        [(header::SET_COOKIE, auth::clear_session_cookie())],
        Redirect::to("/"),
    )
        .into_response()
}

// --- Protected admin pages (AdminSession required) ---

pub async fn dashboard(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    flash: PendingFlash,
) -> Response {
    let snapshot = match state.store.dashboard() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(error = %e, "Failed to build dashboard");
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("System Error: {e}")).into_response();
        }
    };
    let view = dashboard_to_view(
        snapshot,
        flash.0.as_ref(),
        state.config.reference_mode.to_string(),
    );
    flash.respond(Html(render_dashboard(view)))
}

pub async fn download_manual(_session: AdminSession) -> Response {
    let today = chrono::Local::now().date_naive();
    match tokio::task::spawn_blocking(move || generate_manual(today)).await {
        Ok(Ok(pdf)) => {
            info!(bytes = pdf.len(), "Operations manual generated");
            let disposition = format!("attachment;filename={MANUAL_FILENAME}");
            (
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                pdf,
            )
                .into_response()
        }
        Ok(Err(e)) => {
            warn!(error = %e, "Manual generation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Manual generation failed").into_response()
        }
        Err(e) => {
            warn!(error = %e, "Manual generation task panicked");
            (StatusCode::INTERNAL_SERVER_ERROR, "Manual generation failed").into_response()
        }
    }
}
