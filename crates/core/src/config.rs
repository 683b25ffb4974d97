use super::*;
use anyhow::Context;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Process-wide configuration, read once at startup.
///
/// The signing secret may be absent. The process still serves, but every
/// issue or verify path reports a configuration fault and the gate fails
/// closed.
#[derive(Debug, Clone)]
pub struct Config {
    secret: Option<String>,
    base: String,
    bind: String,
    secure: bool,
    timeout: std::time::Duration,
    locations: std::path::PathBuf,
}

impl Config {
    pub fn new(secret: Option<String>, base: &str) -> anyhow::Result<Self> {
        Ok(Self {
            secret: secret.filter(|s| !s.is_empty()),
            base: Self::origin(base)?,
            bind: String::from("127.0.0.1:3000"),
            secure: false,
            timeout: VERIFY_TIMEOUT,
            locations: std::path::PathBuf::from("public"),
        })
    }

    /// Reads `JWT_KEY`, `BASE_URL`, `BIND_ADDR`, `NODE_ENV`/`PRODUCTION`,
    /// `VERIFY_TIMEOUT_MS` and `LOCATIONS_DIR`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = var("BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let bind = var("BIND_ADDR").context("BIND_ADDR must be set")?;
        let secure = var("NODE_ENV").is_some_and(|env| env == "production")
            || var("PRODUCTION").is_some_and(|flag| flag == "1" || flag == "true");
        let timeout = match var("VERIFY_TIMEOUT_MS") {
            Some(ms) => std::time::Duration::from_millis(
                ms.parse::<u64>()
                    .with_context(|| format!("VERIFY_TIMEOUT_MS is not a number: {}", ms))?,
            ),
            None => VERIFY_TIMEOUT,
        };
        let locations = var("LOCATIONS_DIR")
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| std::path::PathBuf::from("public"));
        let config = Self::new(var("JWT_KEY"), &base)?
            .with_bind(bind)
            .with_secure(secure)
            .with_timeout(timeout)
            .with_locations(locations);
        if config.secret.is_none() {
            log::warn!("JWT_KEY is not set; token issuance and verification will fail");
        }
        Ok(config)
    }

    pub fn with_bind(mut self, bind: String) -> Self {
        self.bind = bind;
        self
    }
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = timeout;
        self
    }
    pub fn with_locations(mut self, locations: std::path::PathBuf) -> Self {
        self.locations = locations;
        self
    }

    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }
    /// Scheme and authority that every redirect target is built on.
    pub fn base(&self) -> &str {
        &self.base
    }
    pub fn bind(&self) -> &str {
        &self.bind
    }
    /// Whether cookies carry the `Secure` attribute.
    pub fn secure(&self) -> bool {
        self.secure
    }
    pub fn timeout(&self) -> std::time::Duration {
        self.timeout
    }
    pub fn locations(&self) -> &std::path::Path {
        &self.locations
    }

    /// Absolute URL for a path on this deployment.
    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn origin(base: &str) -> anyhow::Result<String> {
        let base = base.trim().trim_end_matches('/');
        let rest = base
            .strip_prefix("https://")
            .or_else(|| base.strip_prefix("http://"))
            .with_context(|| format!("BASE_URL must be an absolute http(s) URL: {}", base))?;
        anyhow::ensure!(!rest.is_empty(), "BASE_URL has no host: {}", base);
        Ok(base.to_string())
    }
}
