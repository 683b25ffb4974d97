/// Failures of the credential and account operations.
///
/// `Incomplete` and `Invalid` are caller mistakes; `Configuration` and
/// `Internal` are operational faults whose detail is logged, never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    Incomplete(&'static str),
    Invalid {
        field: &'static str,
        message: String,
    },
    Conflict(String),
    Credentials,
    Configuration(String),
    Internal(String),
}

impl AuthError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
    pub fn required(field: &'static str) -> Self {
        Self::invalid(field, format!("{} is required", field))
    }
    pub fn unconfigured() -> Self {
        Self::Configuration(String::from("JWT secret key is not defined"))
    }
    /// The field a validation error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { field, .. } => Some(field),
            _ => None,
        }
    }
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Internal(_))
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Incomplete(s) => write!(f, "{}", s),
            Self::Invalid { message, .. } => write!(f, "{}", message),
            Self::Conflict(s) => write!(f, "{}", s),
            Self::Credentials => write!(f, "invalid credentials"),
            Self::Configuration(s) => write!(f, "configuration error: {}", s),
            Self::Internal(s) => write!(f, "internal error: {}", s),
        }
    }
}

impl std::error::Error for AuthError {}

#[cfg(feature = "server")]
mod response {
    use super::*;
    use actix_web::HttpResponse;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    impl ResponseError for AuthError {
        fn status_code(&self) -> StatusCode {
            match self {
                Self::Incomplete(_) | Self::Invalid { .. } => StatusCode::BAD_REQUEST,
                Self::Conflict(_) => StatusCode::CONFLICT,
                Self::Credentials => StatusCode::UNAUTHORIZED,
                Self::Configuration(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
        fn error_response(&self) -> HttpResponse {
            if self.is_fault() {
                log::error!("{}", self);
                return HttpResponse::build(self.status_code())
                    .json(serde_json::json!({ "error": "Internal server error" }));
            }
            match self.field() {
                Some(field) => HttpResponse::build(self.status_code())
                    .json(serde_json::json!({ "error": self.to_string(), "field": field })),
                None => HttpResponse::build(self.status_code())
                    .json(serde_json::json!({ "error": self.to_string() })),
            }
        }
    }
}
