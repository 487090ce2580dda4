//! Session cookie and flash hand-off across redirects.
//!
//! A write handler stores the flash under the browser's session id and
//! redirects to the page; the next page render takes it, which deletes it.

use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use petstore_core::flash::{generate_session_id, Flash, SessionId};

use crate::{handlers::AppError, state::AppState};

/// Session id carried by the request, if any.
pub fn session_id(jar: &CookieJar, cookie_name: &str) -> Option<SessionId> {
    jar.get(cookie_name)
        .map(|cookie| cookie.value().trim())
        .filter(|value| !value.is_empty())
        .map(|value| SessionId::new(value.to_string()))
}

/// Build the session cookie.
///
/// Cookie properties:
/// - Path: / (sent with every page)
/// - HttpOnly (never read by scripts)
/// - SameSite: Lax (sent on top-level navigation)
pub fn session_cookie(cookie_name: &str, session: &SessionId) -> Cookie<'static> {
    Cookie::build((cookie_name.to_string(), session.as_str().to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Store `flash` for this browser and redirect to the page with `303 See Other`.
///
/// A session cookie is issued when the request carried none.
pub async fn redirect_with_flash(
    state: &AppState,
    jar: CookieJar,
    flash: Flash,
) -> Result<(CookieJar, Redirect), AppError> {
    let cookie_name = &state.config.session_cookie_name;

    let (jar, session) = match session_id(&jar, cookie_name) {
        Some(session) => (jar, session),
        None => {
            let session = generate_session_id();
            (jar.add(session_cookie(cookie_name, &session)), session)
        }
    };

    state.flashes.put(&session, flash).await?;

    Ok((jar, Redirect::to("/")))
}

/// Take the pending flash for this browser, or an empty one.
pub async fn take_flash(state: &AppState, jar: &CookieJar) -> Result<Flash, AppError> {
    let Some(session) = session_id(jar, &state.config.session_cookie_name) else {
        return Ok(Flash::default());
    };

    Ok(state.flashes.take(&session).await?.unwrap_or_default())
}
