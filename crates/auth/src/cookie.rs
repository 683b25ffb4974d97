//! The `auth_token` cookie that carries a credential between requests.
use actix_web::HttpRequest;
use actix_web::cookie::Cookie;
use actix_web::cookie::SameSite;
use actix_web::cookie::time::Duration;
use ath_core::AUTH_COOKIE;
use ath_core::TOKEN_DURATION;

/// Cookie holding `token` for the full credential lifetime.
pub fn bake(token: &str, secure: bool) -> Cookie<'static> {
    Cookie::build(AUTH_COOKIE, token.to_owned())
        .path("/")
        .max_age(Duration::seconds(TOKEN_DURATION.as_secs() as i64))
        .same_site(SameSite::Strict)
        .secure(secure)
        .finish()
}

/// Removal cookie: same name and path, empty value, already expired.
pub fn crumble() -> Cookie<'static> {
    let mut cookie = Cookie::build(AUTH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// Credential presented with the request, if any.
pub fn read(req: &HttpRequest) -> Option<String> {
    req.cookie(AUTH_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}
