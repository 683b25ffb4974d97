//! Unified Backend Binary
//!
//! Serves the gated site and the credential API.
//! Runs on BIND_ADDR (e.g. 0.0.0.0:8888), signing with JWT_KEY.

#[tokio::main]
async fn main() {
    ath_core::log();
    ath_core::kys();
    let result = match ath_core::Config::from_env() {
        Ok(config) => ath_server::run(config).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        log::error!("backend exited: {:#}", e);
        std::process::exit(1);
    }
}
