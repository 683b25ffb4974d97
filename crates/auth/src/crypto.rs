use super::*;
use jsonwebtoken::errors::ErrorKind;

#[derive(Clone)]
struct Keys {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
}

/// Issues and validates HS256 credentials with the process-wide secret.
///
/// A `Crypto` without a secret is constructible so the server can start;
/// every operation on it reports [`AuthError::Configuration`].
#[derive(Clone)]
pub struct Crypto {
    keys: Option<Keys>,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            keys: (!secret.is_empty()).then(|| Keys {
                encoding: jsonwebtoken::EncodingKey::from_secret(secret),
                decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            }),
        }
    }
    pub fn unset() -> Self {
        Self { keys: None }
    }
    pub fn from_config(config: &ath_core::Config) -> Self {
        config
            .secret()
            .map(|secret| Self::new(secret.as_bytes()))
            .unwrap_or_else(Self::unset)
    }

    /// Fails if there is no secret to sign or verify with.
    pub fn ready(&self) -> Result<(), AuthError> {
        self.keys.as_ref().map(|_| ()).ok_or_else(AuthError::unconfigured)
    }

    /// Signs a fresh credential for `identity`, valid for 30 days.
    pub fn issue(&self, identity: Identity) -> Result<String, AuthError> {
        self.sign(&Claims::new(identity))
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        let keys = self.keys.as_ref().ok_or_else(AuthError::unconfigured)?;
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &keys.encoding)
            .map_err(|e| AuthError::Internal(format!("token signing failed: {}", e)))
    }

    /// Checks signature, claim shape, and expiry of a presented credential.
    ///
    /// An absent or blank token is [`Validity::Missing`] even without a
    /// secret; otherwise a missing secret is a configuration fault.
    pub fn validate(&self, token: Option<&str>) -> Result<Validity, AuthError> {
        let token = match token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => token,
            None => return Ok(Validity::Missing),
        };
        let keys = self.keys.as_ref().ok_or_else(AuthError::unconfigured)?;
        match jsonwebtoken::decode::<Claims>(token, &keys.decoding, &Self::rules()) {
            Ok(data) if data.claims.expired() => Ok(Validity::Expired),
            Ok(data) => Ok(Validity::Valid(data.claims)),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Ok(Validity::Expired),
                _ => {
                    log::debug!("rejected credential: {}", e);
                    Ok(Validity::Invalid)
                }
            },
        }
    }

    fn rules() -> jsonwebtoken::Validation {
        let mut rules = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
        rules.leeway = 0;
        rules.validate_exp = true;
        rules
    }
}
