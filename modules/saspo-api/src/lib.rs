use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use saspo_common::Config;
use saspo_store::SiteStore;

pub mod admin;
pub mod auth;
pub mod flash;
pub mod pages;
pub mod seo;

mod components;
mod templates;

/// Largest accepted upload (images and short clips).
const UPLOAD_LIMIT_BYTES: usize = 64 * 1024 * 1024;

pub struct AppState {
    pub config: Config,
    pub store: SiteStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = SiteStore::from_config(&config);
        Self { config, store }
    }
}

/// The full site: public page, SEO endpoints, login and the admin dashboard.
pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    // Login and dashboard pages carry edited content and flash messages
    let admin = Router::new()
        .route("/login", get(pages::login_page).post(pages::login_submit))
        .route("/logout", get(pages::logout))
        // AdminSession required
        .route("/dashboard", get(pages::dashboard))
        .route("/download_manual", get(pages::download_manual))
        .route("/update_data", post(admin::update_data))
        .route(
            "/upload_file",
            post(admin::upload_file).layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        .route("/delete_file/{filename}", post(admin::delete_file))
        .route("/add_link", post(admin::add_link))
        .route("/delete_link", post(admin::delete_link))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    Router::new()
        .route("/", get(pages::index))
        .route("/sitemap.xml", get(seo::sitemap))
        .route("/robots.txt", get(seo::robots))
        .merge(admin)
        .with_state(state)
        .nest_service("/static", static_dir)
        .layer(CompressionLayer::new())
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
