/// What the gate does with a request.
/// Redirect targets are absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Continue,
    ContinueStrip,
    Redirect(String),
    RedirectStrip(String),
}

impl Decision {
    /// Whether the credential cookie is cleared on the response.
    pub fn strips(&self) -> bool {
        matches!(self, Self::ContinueStrip | Self::RedirectStrip(_))
    }
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Redirect(target) | Self::RedirectStrip(target) => Some(target),
            Self::Continue | Self::ContinueStrip => None,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::ContinueStrip => write!(f, "continue, strip credential"),
            Self::Redirect(target) => write!(f, "redirect to {}", target),
            Self::RedirectStrip(target) => write!(f, "redirect to {}, strip credential", target),
        }
    }
}
