use super::*;

/// The identity a credential is issued for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    uid: String,
    email: String,
    role: Role,
    name: String,
}

impl Identity {
    pub fn new(uid: String, email: String, role: Role, name: String) -> Self {
        Self {
            uid,
            email,
            role,
            name,
        }
    }
    pub fn uid(&self) -> &str {
        &self.uid
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// All four fields are required; an empty string counts as absent.
impl TryFrom<TokenRequest> for Identity {
    type Error = AuthError;
    fn try_from(req: TokenRequest) -> Result<Self, Self::Error> {
        let present = |field: Option<String>| field.filter(|s| !s.trim().is_empty());
        match (
            present(req.uid),
            present(req.email),
            present(req.account_type),
            present(req.full_name),
        ) {
            (Some(uid), Some(email), Some(role), Some(name)) => {
                Ok(Self::new(uid, email, Role::try_from(role.as_str())?, name))
            }
            _ => Err(AuthError::Incomplete("Missing required user information")),
        }
    }
}
