use super::*;

/// Outcome of validating a presented credential.
///
/// Ordinary bad input is a value here, never an error. Only a missing
/// signing secret surfaces as `Err` from [`Crypto::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid(Claims),
    Expired,
    Invalid,
    Missing,
}

impl Validity {
    pub fn claims(&self) -> Option<&Claims> {
        match self {
            Self::Valid(claims) => Some(claims),
            _ => None,
        }
    }
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
    /// Caller-facing explanation for every non-valid outcome.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Self::Valid(_) => None,
            Self::Expired => Some("Token has expired"),
            Self::Invalid => Some("Invalid token"),
            Self::Missing => Some("Token is required"),
        }
    }
}

impl std::fmt::Display for Validity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid(claims) => write!(f, "valid ({} as {})", claims.uid, claims.account_type),
            Self::Expired => write!(f, "expired"),
            Self::Invalid => write!(f, "invalid"),
            Self::Missing => write!(f, "missing"),
        }
    }
}
