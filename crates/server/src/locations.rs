use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::collections::HashMap;
use std::path::Path;

/// State and city lists offered by the registration form.
/// Loaded once at startup from `states.json` and `cities.json`.
#[derive(Debug, Default, Clone)]
pub struct Locations {
    states: Vec<String>,
    cities: HashMap<String, Vec<String>>,
}

#[derive(Debug, serde::Deserialize)]
pub struct CityQuery {
    pub state: Option<String>,
}

impl Locations {
    pub fn new(states: Vec<String>, cities: HashMap<String, Vec<String>>) -> Self {
        Self { states, cities }
    }

    /// Missing files leave the corresponding list empty; malformed ones fail.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            states: Self::read(&dir.join("states.json"))?.unwrap_or_default(),
            cities: Self::read(&dir.join("cities.json"))?.unwrap_or_default(),
        })
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }
    /// Cities of `state`; empty for an unknown state.
    pub fn cities(&self, state: &str) -> &[String] {
        self.cities.get(state).map(Vec::as_slice).unwrap_or_default()
    }

    fn read<T>(path: &Path) -> anyhow::Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        use anyhow::Context;
        match std::fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("parse {}", path.display()))
                .map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("location data not found at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e).with_context(|| format!("read {}", path.display())),
        }
    }
}

/// `GET /api/other/get-state`
pub async fn get_state(locations: web::Data<Locations>) -> impl Responder {
    HttpResponse::Ok().json(locations.states())
}

/// `GET /api/other/get-city?state=...`
pub async fn get_city(
    locations: web::Data<Locations>,
    query: web::Query<CityQuery>,
) -> impl Responder {
    match query.state.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(state) => HttpResponse::Ok().json(locations.cities(state)),
        None => HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "State parameter is required" })),
    }
}
