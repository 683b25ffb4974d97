use super::*;

/// Prefix sets the classifier works from, fixed at startup.
///
/// Protected and auth-only prefixes never share a matching path. Role-scoped
/// prefixes are a subset of the protected ones whose `/{role}` subpaths are
/// reserved per account role.
#[derive(Debug, Clone)]
pub struct Table {
    protected: Vec<String>,
    auth: Vec<String>,
    scoped: Vec<String>,
}

impl Table {
    pub fn new<P, A>(protected: P, auth: A) -> Result<Self, GateError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let protected = Self::prefixes(protected)?;
        let auth = Self::prefixes(auth)?;
        for p in protected.iter() {
            for a in auth.iter() {
                if Self::matches(p, a) || Self::matches(a, p) {
                    return Err(GateError::Overlap {
                        protected: p.clone(),
                        auth: a.clone(),
                    });
                }
            }
        }
        Ok(Self {
            protected,
            auth,
            scoped: Vec::new(),
        })
    }

    /// Marks protected prefixes as role-scoped.
    pub fn scoped<S>(mut self, scoped: S) -> Result<Self, GateError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let scoped = Self::prefixes(scoped)?;
        if let Some(stray) = scoped.iter().find(|s| !self.protected.contains(s)) {
            return Err(GateError::Unscoped(stray.clone()));
        }
        self.scoped = scoped;
        Ok(self)
    }

    /// The deployment's route table.
    pub fn standard() -> Result<Self, GateError> {
        Self::new(
            ath_core::PROTECTED_ROUTES.iter().copied(),
            ath_core::AUTH_ROUTES.iter().copied(),
        )?
        .scoped(ath_core::ROLE_SCOPED_ROUTES.iter().copied())
    }

    pub fn classify(&self, path: &str) -> Route {
        if self.protected.iter().any(|p| Self::matches(path, p)) {
            Route::Protected
        } else if self.auth.iter().any(|a| Self::matches(path, a)) {
            Route::AuthOnly
        } else {
            Route::Public
        }
    }

    /// Role-scoped prefix covering `path`, if any.
    pub fn scope(&self, path: &str) -> Option<&str> {
        self.scoped
            .iter()
            .find(|s| Self::matches(path, s))
            .map(String::as_str)
    }

    /// Exact match or a subpath of `prefix`.
    pub fn matches(path: &str, prefix: &str) -> bool {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }

    fn prefixes<I>(routes: I) -> Result<Vec<String>, GateError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        routes
            .into_iter()
            .map(|route| {
                let route: String = route.into();
                match route.len() > 1 && route.starts_with('/') && !route.ends_with('/') {
                    true => Ok(route),
                    false => Err(GateError::Malformed(route)),
                }
            })
            .collect()
    }
}
