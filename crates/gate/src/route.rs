/// Category of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Requires a valid credential.
    Protected,
    /// Only meaningful to visitors without one (login, register, ...).
    AuthOnly,
    Public,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Protected => write!(f, "protected"),
            Self::AuthOnly => write!(f, "auth-only"),
            Self::Public => write!(f, "public"),
        }
    }
}
