use super::*;

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub uid: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub weight: u32,
    pub role: Role,
    pub state: String,
    pub city: String,
    pub sports: Vec<String>,
    pub gender: String,
}

impl Member {
    /// Directory key: emails compare case-insensitively.
    pub fn key(email: &str) -> String {
        email.trim().to_ascii_lowercase()
    }
    pub fn identity(&self) -> Identity {
        Identity::new(
            self.uid.clone(),
            self.email.clone(),
            self.role,
            self.full_name.clone(),
        )
    }
}
