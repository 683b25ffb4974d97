use super::*;
use actix_web::HttpResponse;
use actix_web::web;
use ath_core::Config;

/// `POST /api/auth/token-generate`
pub async fn token_generate(
    crypto: web::Data<Crypto>,
    req: web::Json<TokenRequest>,
) -> Result<HttpResponse, AuthError> {
    let identity = Identity::try_from(req.into_inner())?;
    let token = crypto.issue(identity)?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// `POST /api/auth/token-verify`
pub async fn token_verify(
    crypto: web::Data<Crypto>,
    req: web::Json<TokenQuery>,
) -> Result<HttpResponse, AuthError> {
    Ok(match crypto.validate(req.token.as_deref())? {
        Validity::Valid(claims) => HttpResponse::Ok().json(VerifyResponse {
            valid: true,
            payload: Some(claims),
            error: None,
        }),
        Validity::Missing => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": "Token is required" }))
        }
        rejected => HttpResponse::Unauthorized().json(VerifyResponse {
            valid: false,
            payload: None,
            error: rejected.reason().map(String::from),
        }),
    })
}

/// `GET /api/auth/token-get-data?token=...`
pub async fn token_get_data(
    crypto: web::Data<Crypto>,
    query: web::Query<TokenQuery>,
) -> Result<HttpResponse, AuthError> {
    Ok(match crypto.validate(query.token.as_deref())? {
        Validity::Valid(claims) => HttpResponse::Ok().json(PayloadResponse {
            success: true,
            message: Some(String::from("Token is valid")),
            payload: Some(claims),
            error: None,
        }),
        Validity::Missing => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": "Token is required" }))
        }
        rejected => HttpResponse::Unauthorized().json(PayloadResponse {
            success: false,
            message: None,
            payload: None,
            error: rejected.reason().map(String::from),
        }),
    })
}

/// `POST /api/auth/register`
pub async fn register(
    db: web::Data<Memory>,
    crypto: web::Data<Crypto>,
    config: web::Data<Config>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AuthError> {
    let member = req.validate()?;
    crypto.ready()?;
    if db.exists(&member.email).await? {
        return Err(AuthError::Conflict(String::from(
            "an account with this email already exists",
        )));
    }
    let secret = req.password.as_deref().unwrap_or_default();
    let hashword = password::hash(secret)
        .map_err(|e| AuthError::Internal(format!("password hashing failed: {}", e)))?;
    db.create(&member, &hashword).await?;
    log::info!("registered {} account {}", member.role, member.uid);
    signed(&crypto, &config, member.identity())
}

/// `POST /api/auth/login`
pub async fn login(
    db: web::Data<Memory>,
    crypto: web::Data<Crypto>,
    config: web::Data<Config>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, AuthError> {
    let (email, secret) = match (
        req.email.as_deref().map(str::trim).filter(|s| !s.is_empty()),
        req.password.as_deref().filter(|s| !s.trim().is_empty()),
    ) {
        (Some(email), Some(secret)) => (email, secret),
        _ => return Err(AuthError::Incomplete("Please enter both email and password.")),
    };
    crypto.ready()?;
    let (member, hashword) = db.lookup(email).await?.ok_or(AuthError::Credentials)?;
    if !password::verify(secret, &hashword) {
        return Err(AuthError::Credentials);
    }
    log::info!("signed in {} account {}", member.role, member.uid);
    signed(&crypto, &config, member.identity())
}

/// `POST /api/auth/logout`
///
/// Credentials are stateless, so signing out only clears the cookie.
pub async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(cookie::crumble())
        .json(serde_json::json!({ "status": "logged_out" }))
}

/// `GET /api/auth/me`
pub async fn me(auth: Auth) -> HttpResponse {
    HttpResponse::Ok().json(UserInfo::from(&auth.claims().identity()))
}

fn signed(crypto: &Crypto, config: &Config, identity: Identity) -> Result<HttpResponse, AuthError> {
    let token = crypto.issue(identity.clone())?;
    Ok(HttpResponse::Ok()
        .cookie(cookie::bake(&token, config.secure()))
        .json(AuthResponse {
            token,
            user: UserInfo::from(&identity),
        }))
}
