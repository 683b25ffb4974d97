//! Core configuration, constants, and runtime utilities for athlon.
//!
//! Everything here is established once at process start and read-only
//! afterwards. The [`Config`] value is constructed in the binary and handed
//! to the crates that need it.
mod config;

pub use config::*;

// ============================================================================
// CREDENTIAL PARAMETERS
// ============================================================================
/// Lifetime of an issued credential (30 days).
pub const TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(30 * 24 * 60 * 60);
/// Name of the browser cookie carrying the credential.
pub const AUTH_COOKIE: &str = "auth_token";
/// Upper bound on a single credential verification during routing.
pub const VERIFY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(3);

// ============================================================================
// ROUTE TABLE
// ============================================================================
/// Surfaces that require a valid credential (and their subpaths).
pub const PROTECTED_ROUTES: &[&str] = &[
    "/profile",
    "/fitmate",
    "/create-post",
    "/tools",
    "/updates",
    "/edit-profile",
];
/// Surfaces only meaningful to unauthenticated visitors.
pub const AUTH_ROUTES: &[&str] = &["/login", "/register", "/forgot-password"];
/// Protected surfaces whose `/{role}` subpaths are reserved per account role.
pub const ROLE_SCOPED_ROUTES: &[&str] = &["/profile"];
/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";
/// Where authenticated visitors are sent away from auth-only surfaces.
pub const HOME_PATH: &str = "/";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}

/// Seconds since the Unix epoch for the given instant.
pub fn unix(at: std::time::SystemTime) -> i64 {
    at.duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// Seconds since the Unix epoch, now.
pub fn now() -> i64 {
    unix(std::time::SystemTime::now())
}
