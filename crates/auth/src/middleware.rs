use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::web;
use std::future::Ready;
use std::future::ready;

/// Extractor for authenticated requests.
/// Takes the credential from the `auth_token` cookie, falling back to an
/// `Authorization: Bearer` header, and requires it to be valid.
pub struct Auth(pub Claims);

impl Auth {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
    pub fn role(&self) -> Role {
        self.0.role()
    }
    /// Raw credential presented with the request.
    pub fn token(req: &HttpRequest) -> Option<String> {
        cookie::read(req).or_else(|| {
            req.headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
                .map(|s| s.trim().to_owned())
        })
    }
}

impl FromRequest for Auth {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let crypto = match req.app_data::<web::Data<Crypto>>() {
            Some(crypto) => crypto,
            None => {
                return ready(Err(actix_web::error::ErrorInternalServerError(
                    "token service not configured",
                )));
            }
        };
        ready(match crypto.validate(Self::token(req).as_deref()) {
            Ok(Validity::Valid(claims)) => Ok(Auth(claims)),
            Ok(rejected) => Err(actix_web::error::ErrorUnauthorized(
                rejected.reason().unwrap_or("Invalid token"),
            )),
            Err(e) => Err(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn crypto() -> web::Data<Crypto> {
        web::Data::new(Crypto::new(b"extractor-secret"))
    }
    fn token(crypto: &Crypto) -> String {
        crypto
            .issue(Identity::new("u1".into(), "a@x.com".into(), Role::Athlete, "A".into()))
            .unwrap()
    }

    #[actix_web::test]
    async fn extracts_from_cookie() {
        let crypto = crypto();
        let (req, mut payload) = TestRequest::default()
            .app_data(crypto.clone())
            .cookie(cookie::bake(&token(&crypto), false))
            .to_http_parts();
        let auth = Auth::from_request(&req, &mut payload).await.unwrap();
        assert_eq!(auth.role(), Role::Athlete);
    }
    #[actix_web::test]
    async fn extracts_from_bearer_header() {
        let crypto = crypto();
        let (req, mut payload) = TestRequest::default()
            .app_data(crypto.clone())
            .insert_header(("Authorization", format!("Bearer {}", token(&crypto))))
            .to_http_parts();
        let auth = Auth::from_request(&req, &mut payload).await.unwrap();
        assert_eq!(auth.claims().uid, "u1");
    }
    #[actix_web::test]
    async fn rejects_anonymous_request() {
        let (req, mut payload) = TestRequest::default().app_data(crypto()).to_http_parts();
        assert!(Auth::from_request(&req, &mut payload).await.is_err());
    }
    #[actix_web::test]
    async fn rejects_without_token_service() {
        let (req, mut payload) = TestRequest::default().to_http_parts();
        let err = Auth::from_request(&req, &mut payload).await.err().unwrap();
        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
