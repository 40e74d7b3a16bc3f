//! One-shot status messages carried across a redirect in a short-lived cookie.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
    response::{IntoResponse, Redirect, Response},
};

use saspo_common::{Flash, FlashLevel};

use crate::auth::parse_cookie;

const COOKIE_NAME: &str = "saspo_flash";
const FLASH_MAX_AGE_SECS: u32 = 60;

fn encode(flash: &Flash) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("level", &flash.level.to_string())
        .append_pair("message", &flash.message)
        .finish()
}

fn decode(value: &str) -> Option<Flash> {
    let mut level = None;
    let mut message = None;
    for (key, val) in url::form_urlencoded::parse(value.as_bytes()) {
        match key.as_ref() {
            "level" => level = val.parse::<FlashLevel>().ok(),
            "message" => message = Some(val.into_owned()),
            _ => {}
        }
    }
    Some(Flash {
        level: level?,
        message: message?,
    })
}

pub fn flash_cookie(flash: &Flash) -> String {
    format!(
        "{COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={FLASH_MAX_AGE_SECS}",
        encode(flash)
    )
}

pub fn clear_flash_cookie() -> String {
    format!("{COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// 303 to `location`, leaving `flash` for the next page render.
pub fn redirect_with_flash(location: &str, flash: Flash) -> Response {
    (
        [(header::SET_COOKIE, flash_cookie(&flash))],
        Redirect::to(location),
    )
        .into_response()
}

/// The pending flash message, if any. Pages that display it should also
/// send [`clear_flash_cookie`] so it shows once.
pub struct PendingFlash(pub Option<Flash>);

impl<S: Send + Sync> FromRequestParts<S> for PendingFlash {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let flash = parts
            .headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|cookies| parse_cookie(cookies, COOKIE_NAME))
            .filter(|value| !value.is_empty())
            .and_then(decode);
        Ok(PendingFlash(flash))
    }
}

impl PendingFlash {
    /// Wrap a rendered page, clearing the cookie if a message was consumed.
    pub fn respond(&self, page: impl IntoResponse) -> Response {
        if self.0.is_some() {
            ([(header::SET_COOKIE, clear_flash_cookie())], page).into_response()
        } else {
            page.into_response()
        }
    }
}
