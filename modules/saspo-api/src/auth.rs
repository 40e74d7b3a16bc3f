use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use saspo_common::{Config, Flash};

use crate::flash::redirect_with_flash;
use crate::AppState;

type HmacSha256 = Hmac<Sha256>;

const COOKIE_NAME: &str = "saspo_session";
const SESSION_DURATION_SECS: i64 = 7 * 24 * 3600; // 7 days
const SESSION_SUBJECT: &str = "admin";

pub fn session_secret(config: &Config) -> &str {
    &config.session_secret
}

/// Authenticated admin session. Extract this in handlers that require auth.
/// If the session cookie is missing or invalid, redirects to /login with the
/// requested URL kept as the `next` target.
pub struct AdminSession;

impl FromRequestParts<Arc<AppState>> for AdminSession {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let cookie_header = parts
            .headers
            .get(axum::http::header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if let Some(value) = parse_cookie(cookie_header, COOKIE_NAME) {
            if verify_session(value, session_secret(&state.config)) {
                return Ok(AdminSession);
            }
        }

        let requested = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/dashboard");
        let location = login_location(requested);
        Err(redirect_with_flash(&location, Flash::error("Restricted Area: Please log in.")).into_response())
    }
}

/// `/login?next=<requested>`, with the target form-encoded.
pub fn login_location(requested: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("next", requested)
        .finish();
    format!("/login?{query}")
}

/// Only same-site paths are honoured as post-login targets.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\") => {
            path
        }
        _ => "/dashboard",
    }
}

pub fn credentials_match(config: &Config, username: &str, password: &str) -> bool {
    // Evaluate both so timing doesn't reveal which one failed.
    let user_ok = constant_time_eq(username.as_bytes(), config.admin_username.as_bytes());
    let pass_ok = constant_time_eq(password.as_bytes(), config.admin_password.as_bytes());
    user_ok & pass_ok
}

/// Create a signed session cookie value: `admin|expiry|signature`
pub fn create_session(secret: &str) -> String {
    let expiry = chrono::Utc::now().timestamp() + SESSION_DURATION_SECS;
    let payload = format!("{SESSION_SUBJECT}|{expiry}");
    let sig = sign(&payload, secret);
    format!("{payload}|{sig}")
}

/// Build the Set-Cookie header value.
/// In release builds, adds `Secure` flag to prevent transmission over HTTP.
pub fn session_cookie(secret: &str) -> String {
    let value = create_session(secret);
    let secure = if cfg!(debug_assertions) { "" } else { "; Secure" };
    format!(
        "{COOKIE_NAME}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_DURATION_SECS}{secure}"
    )
}

/// Build a Set-Cookie header that clears the session.
pub fn clear_session_cookie() -> String {
    format!("{COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

fn verify_session(value: &str, secret: &str) -> bool {
    let parts: Vec<&str> = value.splitn(3, '|').collect();
    if parts.len() != 3 {
        return false;
    }

    let subject = parts[0];
    let expiry_str = parts[1];
    let sig = parts[2];

    if subject != SESSION_SUBJECT {
        return false;
    }

    // Verify signature
    let payload = format!("{subject}|{expiry_str}");
    let Some(expected_sig) = try_sign(&payload, secret) else {
        return false;
    };
    if !constant_time_eq(sig.as_bytes(), expected_sig.as_bytes()) {
        return false;
    }

    // Check expiry
    match expiry_str.parse::<i64>() {
        Ok(expiry) => chrono::Utc::now().timestamp() <= expiry,
        Err(_) => false,
    }
}

fn try_sign(payload: &str, secret: &str) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(payload.as_bytes());
    Some(hex::encode(mac.finalize().into_bytes()))
}

fn sign(payload: &str, secret: &str) -> String {
    try_sign(payload, secret).unwrap_or_default()
}

/// Constant-time comparison to prevent timing attacks.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Parse a specific cookie from the Cookie header string.
pub(crate) fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    for part in header.split(';') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix(name) {
            if let Some(value) = value.strip_prefix('=') {
                return Some(value);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_session() {
        let secret = "test-secret-key";
        let cookie_value = create_session(secret);
        assert!(verify_session(&cookie_value, secret));
    }

    #[test]
    fn rejects_tampered_session() {
        let secret = "test-secret-key";
        let cookie_value = create_session(secret);
        // Push the expiry out without re-signing
        let tampered = cookie_value.replacen("admin|", "admin|9", 1);
        assert!(!verify_session(&tampered, secret));
    }

    #[test]
    fn rejects_wrong_secret() {
        let cookie_value = create_session("secret-a");
        assert!(!verify_session(&cookie_value, "secret-b"));
    }

    #[test]
    fn rejects_expired_session() {
        let secret = "test-secret";
        let expiry = chrono::Utc::now().timestamp() - 100;
        let payload = format!("admin|{expiry}");
        let sig = sign(&payload, secret);
        let value = format!("{payload}|{sig}");
        assert!(!verify_session(&value, secret));
    }

    #[test]
    fn rejects_garbage() {
        assert!(!verify_session("", "s"));
        assert!(!verify_session("admin|notanumber", "s"));
        assert!(!verify_session("admin|1|2|3", "s"));
    }

    #[test]
    fn parse_cookie_works() {
        assert_eq!(
            parse_cookie("saspo_session=abc123; other=xyz", "saspo_session"),
            Some("abc123")
        );
        assert_eq!(
            parse_cookie("other=xyz; saspo_session=abc123", "saspo_session"),
            Some("abc123")
        );
        assert_eq!(parse_cookie("other=xyz", "saspo_session"), None);
    }

    #[test]
    fn next_target_must_be_local() {
        assert_eq!(safe_next(Some("/dashboard?tab=links")), "/dashboard?tab=links");
        assert_eq!(safe_next(Some("https://evil.example")), "/dashboard");
        assert_eq!(safe_next(Some("//evil.example")), "/dashboard");
        assert_eq!(safe_next(Some("/\\evil.example")), "/dashboard");
        assert_eq!(safe_next(None), "/dashboard");
    }

    #[test]
    fn login_location_encodes_target() {
        assert_eq!(
            login_location("/delete_file/a b.png"),
            "/login?next=%2Fdelete_file%2Fa+b.png"
        );
    }
}
