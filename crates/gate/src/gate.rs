use super::*;
use ath_auth::Role;
use ath_auth::Validity;
use ath_core::Config;
use std::sync::Arc;

/// Per-request access decision procedure.
///
/// Holds only immutable configuration, so one instance is shared by every
/// worker and requests never coordinate.
pub struct Gate {
    table: Table,
    verifier: Arc<dyn Verifier>,
    config: Config,
}

impl Gate {
    pub fn new(table: Table, verifier: Arc<dyn Verifier>, config: &Config) -> Self {
        Self {
            table,
            verifier,
            config: config.clone(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Classifies `path`, validates `token` if the route calls for it, and
    /// decides. Public paths are never validated.
    pub async fn judge(&self, path: &str, token: Option<&str>) -> Decision {
        let route = self.table.classify(path);
        if route == Route::Public {
            return Decision::Continue;
        }
        let outcome = match token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => self.check(token).await,
            None => Ok(Validity::Missing),
        };
        let decision = self.decide(route, path, outcome);
        log::debug!("{} {} -> {}", route, path, decision);
        decision
    }

    /// Pure decision over an already obtained validation outcome.
    pub fn decide(&self, route: Route, path: &str, outcome: Result<Validity, Fault>) -> Decision {
        let validity = outcome.unwrap_or_else(|fault| {
            log::error!("credential check failed for {}: {}", path, fault);
            Validity::Invalid
        });
        match (route, validity) {
            (Route::Public, _) => Decision::Continue,
            (Route::AuthOnly, Validity::Missing) => Decision::Continue,
            (Route::AuthOnly, Validity::Valid(_)) => Decision::Redirect(self.config.absolute(ath_core::HOME_PATH)),
            (Route::AuthOnly, rejected) => {
                log::warn!("dropping {} credential on {}", rejected, path);
                Decision::ContinueStrip
            }
            (Route::Protected, Validity::Missing) => Decision::Redirect(self.config.absolute(ath_core::LOGIN_PATH)),
            (Route::Protected, Validity::Valid(claims)) => self
                .steer(path, claims.role())
                .map(Decision::Redirect)
                .unwrap_or(Decision::Continue),
            (Route::Protected, rejected) => {
                log::warn!("dropping {} credential on {}", rejected, path);
                Decision::RedirectStrip(self.config.absolute(ath_core::LOGIN_PATH))
            }
        }
    }

    async fn check(&self, token: &str) -> Result<Validity, Fault> {
        let limit = self.config.timeout();
        tokio::time::timeout(limit, self.verifier.verify(token))
            .await
            .unwrap_or(Err(Fault::Timeout(limit)))
    }

    /// Role redirect within a role-scoped family: the bare prefix and the
    /// other role's subtree both lead to `{prefix}/{role}`.
    fn steer(&self, path: &str, role: Role) -> Option<String> {
        let prefix = self.table.scope(path)?;
        let home = format!("{}/{}", prefix, role);
        let segment = path[prefix.len()..]
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default();
        match segment {
            "" if path == prefix => Some(self.config.absolute(&home)),
            segment => match Role::try_from(segment) {
                Ok(claimed) if claimed != role => Some(self.config.absolute(&home)),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ath_auth::Claims;
    use ath_auth::Crypto;
    use ath_auth::Identity;

    const BASE: &str = "https://athlon.app";
    const DAY: u64 = 24 * 60 * 60;

    struct Broken;
    #[async_trait::async_trait]
    impl Verifier for Broken {
        async fn verify(&self, _: &str) -> Result<Validity, Fault> {
            Err(Fault::Unreachable(String::from("connection refused")))
        }
    }

    struct Slow;
    #[async_trait::async_trait]
    impl Verifier for Slow {
        async fn verify(&self, _: &str) -> Result<Validity, Fault> {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            Ok(Validity::Missing)
        }
    }

    fn config() -> Config {
        Config::new(Some(String::from("gate-secret")), BASE)
            .unwrap()
            .with_timeout(std::time::Duration::from_millis(50))
    }
    fn crypto() -> Crypto {
        Crypto::from_config(&config())
    }
    fn gate(verifier: Arc<dyn Verifier>) -> Gate {
        Gate::new(Table::standard().unwrap(), verifier, &config())
    }
    fn identity(role: Role) -> Identity {
        Identity::new("u1".into(), "a@x.com".into(), role, "A".into())
    }
    fn token(role: Role) -> String {
        crypto().issue(identity(role)).unwrap()
    }
    fn stale() -> String {
        let at = std::time::SystemTime::now() - std::time::Duration::from_secs(31 * DAY);
        crypto().sign(&Claims::issued(identity(Role::Athlete), at)).unwrap()
    }
    fn url(path: &str) -> String {
        format!("{}{}", BASE, path)
    }

    #[tokio::test]
    async fn athlete_profile_redirects_to_role_path() {
        let gate = gate(Arc::new(crypto()));
        let token = token(Role::Athlete);
        assert!(crypto().validate(Some(&token)).unwrap().is_valid());
        assert_eq!(
            gate.judge("/profile", Some(&token)).await,
            Decision::Redirect(url("/profile/athlete"))
        );
        assert_eq!(gate.judge("/profile/athlete", Some(&token)).await, Decision::Continue);
    }
    #[tokio::test]
    async fn mismatched_role_path_is_corrected() {
        let gate = gate(Arc::new(crypto()));
        let token = token(Role::Promoter);
        assert_eq!(
            gate.judge("/profile/athlete", Some(&token)).await,
            Decision::Redirect(url("/profile/promoter"))
        );
        assert_eq!(
            gate.judge("/profile/athlete/posts", Some(&token)).await,
            Decision::Redirect(url("/profile/promoter"))
        );
        assert_eq!(gate.judge("/profile/settings", Some(&token)).await, Decision::Continue);
    }
    #[tokio::test]
    async fn other_protected_surfaces_ignore_role() {
        let gate = gate(Arc::new(crypto()));
        for path in ["/tools", "/tools/athlete", "/updates/promoter", "/fitmate"] {
            assert_eq!(gate.judge(path, Some(&token(Role::Promoter))).await, Decision::Continue);
        }
    }
    #[tokio::test]
    async fn anonymous_create_post_redirects_to_login() {
        let gate = gate(Arc::new(crypto()));
        assert_eq!(gate.judge("/create-post", None).await, Decision::Redirect(url("/login")));
    }
    #[tokio::test]
    async fn protected_paths_never_continue_without_credential() {
        let gate = gate(Arc::new(crypto()));
        for prefix in ath_core::PROTECTED_ROUTES {
            for path in [prefix.to_string(), format!("{}/x", prefix)] {
                assert_eq!(gate.judge(&path, None).await, Decision::Redirect(url("/login")));
                assert_eq!(gate.judge(&path, Some("")).await, Decision::Redirect(url("/login")));
            }
        }
    }
    #[tokio::test]
    async fn signed_in_visitors_leave_auth_pages() {
        let gate = gate(Arc::new(crypto()));
        for prefix in ath_core::AUTH_ROUTES {
            for role in Role::all() {
                assert_eq!(gate.judge(prefix, Some(&token(role))).await, Decision::Redirect(url("/")));
            }
        }
    }
    #[tokio::test]
    async fn anonymous_visitors_reach_auth_pages() {
        let gate = gate(Arc::new(crypto()));
        assert_eq!(gate.judge("/register/athlete", None).await, Decision::Continue);
    }
    #[tokio::test]
    async fn expired_credential_on_tools_is_stripped() {
        let gate = gate(Arc::new(crypto()));
        assert_eq!(crypto().validate(Some(&stale())).unwrap(), Validity::Expired);
        assert_eq!(
            gate.judge("/tools", Some(&stale())).await,
            Decision::RedirectStrip(url("/login"))
        );
    }
    #[tokio::test]
    async fn bad_credential_on_auth_page_is_stripped() {
        let gate = gate(Arc::new(crypto()));
        assert_eq!(gate.judge("/login", Some("forged")).await, Decision::ContinueStrip);
        assert_eq!(gate.judge("/login", Some(&stale())).await, Decision::ContinueStrip);
    }
    #[tokio::test]
    async fn public_paths_pass_untouched() {
        let gate = gate(Arc::new(Broken));
        assert_eq!(gate.judge("/", Some("forged")).await, Decision::Continue);
        assert_eq!(gate.judge("/api/other/get-state", None).await, Decision::Continue);
    }
    #[tokio::test]
    async fn verifier_fault_fails_closed() {
        let gate = gate(Arc::new(Broken));
        assert_eq!(
            gate.judge("/edit-profile", Some("anything")).await,
            Decision::RedirectStrip(url("/login"))
        );
        assert_eq!(gate.judge("/forgot-password", Some("anything")).await, Decision::ContinueStrip);
    }
    #[tokio::test]
    async fn verifier_timeout_fails_closed() {
        let gate = gate(Arc::new(Slow));
        assert_eq!(
            gate.judge("/updates", Some("anything")).await,
            Decision::RedirectStrip(url("/login"))
        );
    }
    #[tokio::test]
    async fn missing_secret_fails_closed() {
        let gate = gate(Arc::new(Crypto::unset()));
        assert_eq!(
            gate.judge("/tools", Some(&token(Role::Athlete))).await,
            Decision::RedirectStrip(url("/login"))
        );
    }
    #[tokio::test]
    async fn redirects_use_normalized_base() {
        let config = Config::new(Some(String::from("gate-secret")), "https://athlon.app/").unwrap();
        let gate = Gate::new(Table::standard().unwrap(), Arc::new(crypto()), &config);
        assert_eq!(gate.judge("/tools", None).await, Decision::Redirect(config.absolute("/login")));
        assert_eq!(gate.judge("/tools", None).await, Decision::Redirect(url("/login")));
    }
    #[test]
    fn decide_is_pure_over_outcomes() {
        let gate = gate(Arc::new(Broken));
        let fault = || Err(Fault::Timeout(std::time::Duration::from_secs(1)));
        assert_eq!(gate.decide(Route::Public, "/", fault()), Decision::Continue);
        assert_eq!(gate.decide(Route::AuthOnly, "/login", fault()), Decision::ContinueStrip);
        assert_eq!(
            gate.decide(Route::Protected, "/tools", Ok(Validity::Expired)),
            Decision::RedirectStrip(url("/login"))
        );
        assert!(gate.decide(Route::Protected, "/tools", Ok(Validity::Invalid)).strips());
    }
}
