use ath_auth::AuthError;

/// Operational failure while checking a credential.
/// The gate treats every fault as a failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    Configuration(String),
    Unreachable(String),
    Timeout(std::time::Duration),
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(s) => write!(f, "verifier misconfigured: {}", s),
            Self::Unreachable(s) => write!(f, "verifier unreachable: {}", s),
            Self::Timeout(d) => write!(f, "verifier timed out after {:?}", d),
        }
    }
}

impl std::error::Error for Fault {}

impl From<AuthError> for Fault {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Configuration(s) => Self::Configuration(s),
            other => Self::Unreachable(other.to_string()),
        }
    }
}

/// Invalid route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    Malformed(String),
    Overlap { protected: String, auth: String },
    Unscoped(String),
}

impl std::fmt::Display for GateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(p) => write!(f, "route prefix must start with '/' and not end with one: {:?}", p),
            Self::Overlap { protected, auth } => write!(
                f,
                "protected route {} and auth-only route {} can match the same path",
                protected, auth
            ),
            Self::Unscoped(p) => write!(f, "role-scoped route {} is not protected", p),
        }
    }
}

impl std::error::Error for GateError {}
