use anyhow::{Result, anyhow};
use async_trait::async_trait;
use lm_api_types::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use lm_auth_adapter::{AuthBackend, AuthFlow, Effect, FlowSettings, GENERIC_FAILURE};
use lm_session::{InMemoryStore, KeyValueStore, SESSION_KEY, SessionCache};
use lm_storefront_core::drawer::AuthForm;
use lm_storefront_core::profile::ProfileView;
use lm_storefront_core::routes::Route;
use lm_storefront_core::toast::{Toast, ToastKind};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct FakeBackend {
    signup_calls: Cell<u32>,
    login_calls: Cell<u32>,
    signup_reply: RefCell<Option<SignupResponse>>,
    login_reply: RefCell<Option<LoginResponse>>,
    last_login: RefCell<Option<LoginRequest>>,
}

#[async_trait(?Send)]
impl<'a> AuthBackend for &'a FakeBackend {
    async fn signup(&self, _req: &SignupRequest) -> Result<SignupResponse> {
        self.signup_calls.set(self.signup_calls.get() + 1);
        self.signup_reply
            .borrow()
            .clone()
            .ok_or_else(|| anyhow!("connection refused"))
    }

    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse> {
        self.login_calls.set(self.login_calls.get() + 1);
        *self.last_login.borrow_mut() = Some(req.clone());
        self.login_reply
            .borrow()
            .clone()
            .ok_or_else(|| anyhow!("connection refused"))
    }
}

fn flow(backend: &FakeBackend, store: Rc<InMemoryStore>) -> AuthFlow<&FakeBackend> {
    AuthFlow::new(backend, SessionCache::new(store), FlowSettings::default())
}

/// A store whose writes always fail, like a full or disabled localStorage.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(anyhow!("QuotaExceededError"))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}

fn first_toast(effects: &[Effect]) -> Option<&Toast> {
    effects.iter().find_map(|e| match e {
        Effect::Toast(t) => Some(t),
        _ => None,
    })
}

#[tokio::test]
async fn login_persists_session_and_shows_avatar_letter() {
    let backend = FakeBackend::default();
    *backend.login_reply.borrow_mut() = Some(LoginResponse {
        success: true,
        message: Some("Welcome back, ana!".to_owned()),
        username: Some("ana".to_owned()),
        email: Some("ana@x.com".to_owned()),
        ..LoginResponse::default()
    });
    let store = Rc::new(InMemoryStore::default());
    let flow = flow(&backend, store.clone());

    let effects = flow.login("ana", "x", Some(Route::Home)).await;

    assert_eq!(
        store.raw(SESSION_KEY).as_deref(),
        Some(r#"{"username":"ana","email":"ana@x.com"}"#)
    );
    let view = ProfileView::from_session(flow.session().load().as_ref());
    assert_eq!(view.icon_html(), r#"<span class="user-avatar">A</span>"#);

    assert_eq!(
        effects,
        vec![
            Effect::Toast(Toast::success("Welcome back, ana!")),
            Effect::RefreshProfile,
            Effect::After {
                delay_ms: 1_000,
                effects: vec![
                    Effect::ResetForm(AuthForm::Login),
                    Effect::CloseDrawer,
                    Effect::Reload,
                ],
            },
        ]
    );
}

#[tokio::test]
async fn login_on_dedicated_page_redirects_home() {
    let backend = FakeBackend::default();
    *backend.login_reply.borrow_mut() = Some(LoginResponse {
        success: true,
        username: Some("ana".to_owned()),
        ..LoginResponse::default()
    });
    let flow = flow(&backend, Rc::new(InMemoryStore::default()));

    let effects = flow.login(" ana ", "x", Some(Route::Login)).await;

    assert_eq!(
        backend.last_login.borrow().as_ref().map(|r| r.username.as_str()),
        Some("ana")
    );
    assert_eq!(
        first_toast(&effects).map(|t| t.message.as_str()),
        Some("Welcome back, ana!")
    );
    assert!(matches!(
        effects.last(),
        Some(Effect::After { effects, .. }) if effects.contains(&Effect::Navigate(Route::Home))
    ));
}

#[tokio::test]
async fn login_without_returned_username_keeps_submitted_one() {
    let backend = FakeBackend::default();
    *backend.login_reply.borrow_mut() = Some(LoginResponse {
        success: true,
        ..LoginResponse::default()
    });
    let store = Rc::new(InMemoryStore::default());
    let flow = flow(&backend, store);

    flow.login("bo", "pw", None).await;
    let session = flow.session().load().expect("session stored");
    assert_eq!(session.username, "bo");
    assert_eq!(session.email, "");
}

#[tokio::test]
async fn rejected_login_shows_server_message_and_stores_nothing() {
    let backend = FakeBackend::default();
    *backend.login_reply.borrow_mut() = Some(LoginResponse {
        success: false,
        message: Some("Invalid username or password".to_owned()),
        ..LoginResponse::default()
    });
    let store = Rc::new(InMemoryStore::default());
    let flow = flow(&backend, store.clone());

    let effects = flow.login("ana", "wrong", None).await;
    assert_eq!(
        effects,
        vec![Effect::Toast(Toast::error("Invalid username or password"))]
    );
    assert_eq!(store.raw(SESSION_KEY), None);
}

#[tokio::test]
async fn login_transport_failure_is_generic() {
    let backend = FakeBackend::default();
    let flow = flow(&backend, Rc::new(InMemoryStore::default()));

    let effects = flow.login("ana", "x", None).await;
    assert_eq!(effects, vec![Effect::Toast(Toast::error(GENERIC_FAILURE))]);
    assert_eq!(backend.login_calls.get(), 1);
}

#[tokio::test]
async fn short_password_signup_never_calls_backend() {
    let backend = FakeBackend::default();
    *backend.signup_reply.borrow_mut() = Some(SignupResponse {
        success: true,
        message: None,
    });
    let flow = flow(&backend, Rc::new(InMemoryStore::default()));

    let effects = flow.signup("ana", "ana@x.com", "abc", None).await;

    assert_eq!(backend.signup_calls.get(), 0);
    let toast = first_toast(&effects).expect("validation toast");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Password must be at least 6 characters");
}

#[tokio::test]
async fn signup_in_drawer_switches_to_login() {
    let backend = FakeBackend::default();
    *backend.signup_reply.borrow_mut() = Some(SignupResponse {
        success: true,
        message: Some("Signup successful!".to_owned()),
    });
    let flow = flow(&backend, Rc::new(InMemoryStore::default()));

    let effects = flow.signup("ana", "ana@x.com", "secret", Some(Route::Home)).await;
    assert_eq!(
        effects,
        vec![
            Effect::Toast(Toast::success("Signup successful! Please login.")),
            Effect::ResetForm(AuthForm::Signup),
            Effect::ShowForm(AuthForm::Login),
        ]
    );
}

#[tokio::test]
async fn signup_on_dedicated_page_redirects_to_login() {
    let backend = FakeBackend::default();
    *backend.signup_reply.borrow_mut() = Some(SignupResponse {
        success: true,
        message: None,
    });
    let flow = flow(&backend, Rc::new(InMemoryStore::default()));

    let effects = flow.signup("ana", "ana@x.com", "secret", Some(Route::Signup)).await;
    assert_eq!(
        effects.last(),
        Some(&Effect::After {
            delay_ms: 1_500,
            effects: vec![Effect::Navigate(Route::Login)],
        })
    );
}

#[tokio::test]
async fn rejected_signup_keeps_form() {
    let backend = FakeBackend::default();
    *backend.signup_reply.borrow_mut() = Some(SignupResponse {
        success: false,
        message: None,
    });
    let flow = flow(&backend, Rc::new(InMemoryStore::default()));

    let effects = flow.signup("ana", "ana@x.com", "secret", None).await;
    assert_eq!(effects, vec![Effect::Toast(Toast::error("Signup failed"))]);
    assert!(!effects.contains(&Effect::ResetForm(AuthForm::Signup)));
}

#[tokio::test]
async fn logout_clears_session_then_goes_home() {
    let backend = FakeBackend::default();
    *backend.login_reply.borrow_mut() = Some(LoginResponse {
        success: true,
        username: Some("ana".to_owned()),
        email: Some("ana@x.com".to_owned()),
        ..LoginResponse::default()
    });
    let store = Rc::new(InMemoryStore::default());
    let flow = flow(&backend, store.clone());
    flow.login("ana", "x", None).await;
    assert!(flow.session().is_signed_in());

    let effects = flow.logout();

    assert_eq!(store.raw(SESSION_KEY), None);
    assert_eq!(
        ProfileView::from_session(flow.session().load().as_ref()),
        ProfileView::Guest
    );
    assert_eq!(
        effects,
        vec![
            Effect::RefreshProfile,
            Effect::Toast(Toast::success("Logged out successfully")),
            Effect::After {
                delay_ms: 500,
                effects: vec![Effect::CloseDrawer, Effect::Replace(Route::Home)],
            },
        ]
    );
}

#[tokio::test]
async fn login_fails_when_session_cannot_be_stored() {
    let backend = FakeBackend::default();
    *backend.login_reply.borrow_mut() = Some(LoginResponse {
        success: true,
        message: Some("Welcome back, ana!".to_owned()),
        username: Some("ana".to_owned()),
        email: Some("ana@x.com".to_owned()),
        ..LoginResponse::default()
    });
    let flow = AuthFlow::new(
        &backend,
        SessionCache::new(Rc::new(ReadOnlyStore)),
        FlowSettings::default(),
    );

    let effects = flow.login("ana", "x", None).await;

    assert!(!flow.session().is_signed_in());
    assert_eq!(effects, vec![Effect::Toast(Toast::error(GENERIC_FAILURE))]);
}
