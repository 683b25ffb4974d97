use super::*;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Account store used by registration and login.
/// Keeps persistence out of the handlers; [`Memory`] is the bundled backend.
#[allow(async_fn_in_trait)]
pub trait Directory {
    async fn exists(&self, email: &str) -> Result<bool, AuthError>;
    async fn create(&self, member: &Member, hashword: &str) -> Result<(), AuthError>;
    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, AuthError>;
}

/// In-process account table keyed by normalized email.
#[derive(Debug, Default)]
pub struct Memory {
    accounts: RwLock<HashMap<String, (Member, String)>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
    #[cfg(test)]
    async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}

impl Directory for Memory {
    async fn exists(&self, email: &str) -> Result<bool, AuthError> {
        Ok(self.accounts.read().await.contains_key(&Member::key(email)))
    }

    async fn create(&self, member: &Member, hashword: &str) -> Result<(), AuthError> {
        use std::collections::hash_map::Entry;
        match self.accounts.write().await.entry(Member::key(&member.email)) {
            Entry::Occupied(_) => Err(AuthError::Conflict(String::from(
                "an account with this email already exists",
            ))),
            Entry::Vacant(slot) => {
                slot.insert((member.clone(), hashword.to_string()));
                Ok(())
            }
        }
    }

    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, AuthError> {
        Ok(self.accounts.read().await.get(&Member::key(email)).cloned())
    }
}
