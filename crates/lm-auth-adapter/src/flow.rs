use crate::{AuthBackend, AuthError, validate_signup};
use lm_api_types::{LoginRequest, SessionRecord};
use lm_session::SessionCache;
use lm_storefront_core::StorefrontConfig;
use lm_storefront_core::drawer::AuthForm;
use lm_storefront_core::routes::Route;
use lm_storefront_core::toast::Toast;
use tracing::{debug, error, info, warn};

/// A page change requested by an auth flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Toast(Toast),
    ShowForm(AuthForm),
    ResetForm(AuthForm),
    RefreshProfile,
    CloseDrawer,
    Navigate(Route),
    /// Navigate without leaving a history entry.
    Replace(Route),
    Reload,
    After { delay_ms: u32, effects: Vec<Effect> },
}

impl Effect {
    /// Flattens nested `After` blocks into batches keyed by total delay from
    /// now. Batches keep the original order; consecutive effects with the same
    /// delay share a batch. The first batch has delay 0 when anything runs
    /// immediately.
    pub fn schedule(effects: Vec<Effect>) -> Vec<(u32, Vec<Effect>)> {
        fn walk(base: u32, effects: Vec<Effect>, out: &mut Vec<(u32, Vec<Effect>)>) {
            for effect in effects {
                match effect {
                    Effect::After { delay_ms, effects } => {
                        walk(base.saturating_add(delay_ms), effects, out)
                    }
                    other => match out.last_mut() {
                        Some((delay, batch)) if *delay == base => batch.push(other),
                        _ => out.push((base, vec![other])),
                    },
                }
            }
        }
        let mut out = Vec::new();
        walk(0, effects, &mut out);
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowSettings {
    pub min_password_len: usize,
    pub signup_redirect_delay_ms: u32,
    pub login_redirect_delay_ms: u32,
    pub logout_delay_ms: u32,
}

impl From<&StorefrontConfig> for FlowSettings {
    fn from(config: &StorefrontConfig) -> Self {
        Self {
            min_password_len: config.min_password_len,
            signup_redirect_delay_ms: config.signup_redirect_delay_ms,
            login_redirect_delay_ms: config.login_redirect_delay_ms,
            logout_delay_ms: config.logout_delay_ms,
        }
    }
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self::from(&StorefrontConfig::default())
    }
}

pub struct AuthFlow<B> {
    backend: B,
    session: SessionCache,
    settings: FlowSettings,
}

impl<B: AuthBackend> AuthFlow<B> {
    pub fn new(backend: B, session: SessionCache, settings: FlowSettings) -> Self {
        Self {
            backend,
            session,
            settings,
        }
    }

    pub fn session(&self) -> &SessionCache {
        &self.session
    }

    /// `page` is the route the shopper is on; `/signup` redirects to `/login`
    /// after success, any other page flips the drawer to the login form.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
        page: Option<Route>,
    ) -> Vec<Effect> {
        match self.try_signup(username, email, password).await {
            Ok(()) => {
                let follow_up = if page == Some(Route::Signup) {
                    Effect::After {
                        delay_ms: self.settings.signup_redirect_delay_ms,
                        effects: vec![Effect::Navigate(Route::Login)],
                    }
                } else {
                    Effect::ShowForm(AuthForm::Login)
                };
                vec![
                    Effect::Toast(Toast::success("Signup successful! Please login.")),
                    Effect::ResetForm(AuthForm::Signup),
                    follow_up,
                ]
            }
            Err(err) => {
                if err.is_validation() {
                    debug!("signup form rejected: {err}");
                }
                vec![Effect::Toast(err.toast())]
            }
        }
    }

    async fn try_signup(&self, username: &str, email: &str, password: &str) -> Result<(), AuthError> {
        let request = validate_signup(username, email, password, self.settings.min_password_len)?;
        let response = self.backend.signup(&request).await.map_err(|err| {
            error!("Signup error: {err:#}");
            AuthError::Transport(err.to_string())
        })?;
        if !response.success {
            return Err(AuthError::Rejected(
                response.message.unwrap_or_else(|| "Signup failed".to_owned()),
            ));
        }
        info!(username = %request.username, "signup accepted");
        Ok(())
    }

    pub async fn login(&self, username: &str, password: &str, page: Option<Route>) -> Vec<Effect> {
        match self.try_login(username, password).await {
            Ok(message) => {
                let mut later = vec![Effect::ResetForm(AuthForm::Login)];
                if page == Some(Route::Login) {
                    later.push(Effect::Navigate(Route::Home));
                } else {
                    later.push(Effect::CloseDrawer);
                    later.push(Effect::Reload);
                }
                vec![
                    Effect::Toast(Toast::success(message)),
                    Effect::RefreshProfile,
                    Effect::After {
                        delay_ms: self.settings.login_redirect_delay_ms,
                        effects: later,
                    },
                ]
            }
            Err(err) => vec![Effect::Toast(err.toast())],
        }
    }

    /// Succeeds only once the session is stored; a storage failure is
    /// reported like a transport failure.
    async fn try_login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let request = LoginRequest {
            username: username.trim().to_owned(),
            password: password.to_owned(),
        };
        let response = self.backend.login(&request).await.map_err(|err| {
            error!("Login error: {err:#}");
            AuthError::Transport(err.to_string())
        })?;
        if !response.success {
            return Err(AuthError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Invalid username or password".to_owned()),
            ));
        }

        let username = response
            .username
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| request.username.clone());
        let record = SessionRecord::new(username, response.email.unwrap_or_default())
            .ok_or_else(|| AuthError::Rejected("Invalid username or password".to_owned()))?;
        let message = response
            .message
            .unwrap_or_else(|| format!("Welcome back, {}!", record.username));
        self.session.save(&record).map_err(|err| {
            error!("Login error: could not persist session: {err:#}");
            AuthError::Transport(err.to_string())
        })?;
        info!(username = %record.username, "login accepted");
        Ok(message)
    }

    pub fn logout(&self) -> Vec<Effect> {
        info!("Logging out...");
        if let Err(err) = self.session.clear() {
            warn!("could not clear session: {err:#}");
        }
        vec![
            Effect::RefreshProfile,
            Effect::Toast(Toast::success("Logged out successfully")),
            Effect::After {
                delay_ms: self.settings.logout_delay_ms,
                effects: vec![Effect::CloseDrawer, Effect::Replace(Route::Home)],
            },
        ]
    }
}
