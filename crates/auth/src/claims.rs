use super::*;
use ath_core::TOKEN_DURATION;

/// JWT payload. Field names match the wire format the web client reads.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub uid: String,
    pub email: String,
    pub account_type: Role,
    pub full_name: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(identity: Identity) -> Self {
        Self::issued(identity, std::time::SystemTime::now())
    }
    /// Claims as if issued at `at`, expiring one token lifetime later.
    pub fn issued(identity: Identity, at: std::time::SystemTime) -> Self {
        let iat = ath_core::unix(at);
        Self {
            uid: identity.uid().to_string(),
            email: identity.email().to_string(),
            account_type: identity.role(),
            full_name: identity.name().to_string(),
            iat,
            exp: iat + TOKEN_DURATION.as_secs() as i64,
        }
    }
    /// Valid only while now < exp.
    pub fn expired(&self) -> bool {
        self.exp <= ath_core::now()
    }
    pub fn role(&self) -> Role {
        self.account_type
    }
    pub fn identity(&self) -> Identity {
        Identity::new(
            self.uid.clone(),
            self.email.clone(),
            self.account_type,
            self.full_name.clone(),
        )
    }
}
