use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
};
use serde_json::Value;

use crate::AppState;

/// Brand and location terms that lead every keyword list.
const CORE_KEYWORDS: &[&str] = &[
    "Saspo",
    "Saspo World",
    "Saspo Tech",
    "Saspotech",
    "AI",
    "Generative AI",
    "VFX",
    "Visual Effects",
    "Game Development",
    "Unreal Engine",
    "Unity",
    "Designing",
    "Creatives",
    "Immersive Tech",
    "Kochi",
    "Kerala",
    "India",
    "Startup",
];

const DESCRIPTION_LEAD: &str =
    "Saspo World Technologies: A Premier AI & Immersive Tech Studio in Kochi. ";

#[derive(Debug, Clone, PartialEq)]
pub struct SeoMeta {
    pub keywords: String,
    pub description: String,
}

fn titles<'a>(entries: impl Iterator<Item = &'a Value>) -> Vec<String> {
    entries
        .filter_map(|entry| entry.get("title").and_then(Value::as_str))
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .collect()
}

fn list_titles(content: &Value, key: &str) -> Vec<String> {
    match content.get(key) {
        Some(Value::Array(items)) => titles(items.iter()),
        _ => Vec::new(),
    }
}

/// Keyword and description meta tags derived from the content document.
pub fn generate_seo(content: &Value) -> SeoMeta {
    let game_titles = match content.get("games") {
        Some(Value::Object(games)) => titles(games.values()),
        _ => Vec::new(),
    };
    let course_titles = list_titles(content, "courses");
    let tool_titles = list_titles(content, "ai_tools");

    let mut keywords: Vec<&str> = Vec::new();
    let all = CORE_KEYWORDS
        .iter()
        .copied()
        .chain(game_titles.iter().map(String::as_str))
        .chain(course_titles.iter().map(String::as_str))
        .chain(tool_titles.iter().map(String::as_str));
    for keyword in all {
        if !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }

    let mut description = DESCRIPTION_LEAD.to_string();
    if !game_titles.is_empty() {
        let first: Vec<&str> = game_titles.iter().take(3).map(String::as_str).collect();
        description.push_str(&format!("Creators of {}. ", first.join(", ")));
    }
    if !course_titles.is_empty() {
        let first: Vec<&str> = course_titles.iter().take(3).map(String::as_str).collect();
        description.push_str(&format!("Specialized training in {}.", first.join(", ")));
    }

    SeoMeta {
        keywords: keywords.join(", "),
        description,
    }
}

/// Absolute site root without a trailing slash: the configured SITE_URL,
/// else `http://<Host>`.
pub fn base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(url) = &state.config.site_url {
        return url.clone();
    }
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or("localhost");
    format!("http://{host}")
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn sitemap_xml(base: &str, date: chrono::NaiveDate) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"><url><loc>{}/</loc><lastmod>{}</lastmod><priority>1.0</priority></url></urlset>"#,
        xml_escape(base),
        date.format("%Y-%m-%d")
    )
}

pub fn robots_txt(base: &str) -> String {
    format!("User-agent: *\nAllow: /\nSitemap: {base}/sitemap.xml")
}

pub async fn sitemap(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
    let base = base_url(&state, &headers);
    let today = chrono::Local::now().date_naive();
    (
        [(header::CONTENT_TYPE, "application/xml")],
        sitemap_xml(&base, today),
    )
}

pub async fn robots(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
    let base = base_url(&state, &headers);
    ([(header::CONTENT_TYPE, "text/plain")], robots_txt(&base))
}
