//! Building and clearing the showroom's credential cookies.
//!
//! Both cookies are httpOnly, `SameSite=Lax` and scoped to `/`.

use axum_extra::extract::cookie::{Cookie, SameSite};

use showroom_auth::admin::ADMIN_COOKIE;
use showroom_auth::session::{IssuedCredential, SESSION_COOKIE};

/// The `share-session` cookie carrying `issued`.
pub fn session_cookie(issued: &IssuedCredential, secure: bool) -> Cookie<'static> {
    credential_cookie(SESSION_COOKIE, issued, secure)
}

/// The `admin-session` cookie carrying `issued`.
pub fn admin_cookie(issued: &IssuedCredential, secure: bool) -> Cookie<'static> {
    credential_cookie(ADMIN_COOKIE, issued, secure)
}

/// A cookie that, once removed from a jar, tells the browser to drop `name`.
pub fn removal(name: &'static str) -> Cookie<'static> {
    Cookie::build(name).path("/").build()
}

fn credential_cookie(name: &'static str, issued: &IssuedCredential, secure: bool) -> Cookie<'static> {
    Cookie::build((name, issued.token.clone()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(secure)
        .max_age(time::Duration::seconds(issued.max_age_seconds))
        .build()
}
