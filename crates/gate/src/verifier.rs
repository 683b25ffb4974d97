use super::*;
use ath_auth::Crypto;
use ath_auth::Validity;

/// Checks a presented credential.
///
/// The gate awaits one call per request and bounds it with a timeout;
/// any `Err` is handled fail-closed.
#[async_trait::async_trait]
pub trait Verifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Validity, Fault>;
}

/// In-process verification against the signing secret.
#[async_trait::async_trait]
impl Verifier for Crypto {
    async fn verify(&self, token: &str) -> Result<Validity, Fault> {
        self.validate(Some(token)).map_err(Fault::from)
    }
}
