use super::*;

/// Account type carried in every credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Athlete,
    Promoter,
}

impl Role {
    pub const fn all() -> [Self; 2] {
        [Self::Athlete, Self::Promoter]
    }
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Athlete => "athlete",
            Self::Promoter => "promoter",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = AuthError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| {
                AuthError::invalid("accountType", "accountType must be athlete or promoter")
            })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
