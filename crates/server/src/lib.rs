//! Unified Backend Server
//!
//! Wraps every request in the authorization [`Guard`](ath_gate::Guard) and
//! serves the credential, account, and location endpoints from a single
//! actix-web server.
//!
//! ## Submodules
//!
//! - [`locations`] — State and city lookups for the registration form
pub mod locations;

pub use locations::Locations;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use ath_auth::Crypto;
use ath_auth::Memory;
use ath_core::Config;
use ath_gate::Gate;
use ath_gate::Guard;
use ath_gate::Table;
use std::sync::Arc;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Unreadable JSON bodies and query strings get a JSON `{error}` body.
fn rejected<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    log::debug!("rejected request payload: {}", err);
    let body = HttpResponse::BadRequest().json(serde_json::json!({ "error": err.to_string() }));
    actix_web::error::InternalError::from_response(err, body).into()
}

/// Registers every route on an app. Shared by [`run`] and the tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| rejected(err)))
        .app_data(web::QueryConfig::default().error_handler(|err, _| rejected(err)))
        .route("/health", web::get().to(health))
        .service(
            web::scope("/api/auth")
                .route("/token-generate", web::post().to(ath_auth::token_generate))
                .route("/token-verify", web::post().to(ath_auth::token_verify))
                .route("/token-get-data", web::get().to(ath_auth::token_get_data))
                .route("/register", web::post().to(ath_auth::register))
                .route("/login", web::post().to(ath_auth::login))
                .route("/logout", web::post().to(ath_auth::logout))
                .route("/me", web::get().to(ath_auth::me)),
        )
        .service(
            web::scope("/api/other")
                .route("/get-state", web::get().to(locations::get_state))
                .route("/get-city", web::get().to(locations::get_city)),
        );
}

#[rustfmt::skip]
pub async fn run(config: Config) -> anyhow::Result<()> {
    if config.secret().is_none() {
        log::warn!("JWT_KEY is not set; every credential will be rejected");
    }
    let crypto = Crypto::from_config(&config);
    let gate = Arc::new(Gate::new(Table::standard()?, Arc::new(crypto.clone()), &config));
    let places = web::Data::new(Locations::load(config.locations())?);
    let accounts = web::Data::new(Memory::new());
    let crypto = web::Data::new(crypto);
    let settings = web::Data::new(config.clone());
    log::info!("starting athlon server on {}", config.bind());
    HttpServer::new(move || {
        App::new()
            .wrap(Guard::new(gate.clone()))
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(crypto.clone())
            .app_data(settings.clone())
            .app_data(accounts.clone())
            .app_data(places.clone())
            .configure(routes)
    })
    .bind(config.bind())?
    .run()
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::http::header;
    use actix_web::test;
    use std::collections::HashMap;

    const SECRET: &str = "server-secret";

    fn config() -> Config {
        Config::new(Some(String::from(SECRET)), "http://localhost:3000").unwrap()
    }

    macro_rules! app {
        () => {{
            let config = config();
            let crypto = Crypto::from_config(&config);
            let gate = Gate::new(Table::standard().unwrap(), Arc::new(crypto.clone()), &config);
            test::init_service(
                App::new()
                    .wrap(Guard::new(Arc::new(gate)))
                    .app_data(web::Data::new(crypto))
                    .app_data(web::Data::new(config))
                    .app_data(web::Data::new(Memory::new()))
                    .app_data(web::Data::new(Locations::new(
                        vec![String::from("Kerala")],
                        HashMap::new(),
                    )))
                    .configure(routes)
                    .default_service(web::to(|| async { HttpResponse::Ok().body("page") })),
            )
            .await
        }};
    }

    fn signup() -> serde_json::Value {
        serde_json::json!({
            "fullName": "Asha Nair",
            "email": "asha@example.com",
            "phone": "9876543210",
            "accountType": "athlete",
            "password": "Sprint#2024",
            "confirmPassword": "Sprint#2024",
            "gender": "female",
            "selectedSports": ["athletics"],
        })
    }

    #[actix_web::test]
    async fn health_is_public() {
        let app = app!();
        let req = test::TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
    #[actix_web::test]
    async fn location_api_is_public() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/other/get-state").to_request();
        let states: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(states, vec![String::from("Kerala")]);
    }
    #[actix_web::test]
    async fn registration_cookie_opens_protected_pages() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(signup())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let cookie = res
            .response()
            .cookies()
            .find(|c| c.name() == ath_core::AUTH_COOKIE)
            .map(|c| c.into_owned())
            .unwrap();
        let req = test::TestRequest::get().uri("/profile").cookie(cookie.clone()).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            res.headers().get(header::LOCATION).unwrap(),
            "http://localhost:3000/profile/athlete"
        );
        let req = test::TestRequest::get().uri("/tools").cookie(cookie).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
    #[actix_web::test]
    async fn malformed_body_gets_json_error() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/auth/token-generate")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert!(body["error"].is_string());
    }
    #[actix_web::test]
    async fn anonymous_visitors_are_sent_to_login() {
        let app = app!();
        let req = test::TestRequest::get().uri("/fitmate").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            res.headers().get(header::LOCATION).unwrap(),
            "http://localhost:3000/login"
        );
    }
}
