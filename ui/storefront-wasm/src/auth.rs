//! Auth drawer and login/signup forms.
//!
//! Form submissions run an [`AuthFlow`] and replay the returned effects on
//! the page. Delayed effects are scheduled with a one-shot timer.

use crate::api::FetchBackend;
use crate::dom::{self, Elements};
use crate::{profile, state, toast};
use gloo_timers::callback::Timeout;
use lm_auth_adapter::{AuthFlow, Effect, FlowSettings};
use lm_storefront_core::drawer::{AuthForm, DrawerState, OpenOutcome};
use lm_storefront_core::routes::Route;
use web_sys::Event;

fn flow() -> AuthFlow<FetchBackend> {
    let config = state::config();
    let settings = FlowSettings::from(&config);
    AuthFlow::new(FetchBackend::new(config), state::session(), settings)
}

pub fn current_route() -> Option<Route> {
    dom::window()
        .location()
        .pathname()
        .ok()
        .and_then(|p| Route::from_path(&p))
}

// ── Drawer ──

fn render_drawer(els: &Elements) {
    let Some(auth) = &els.auth else {
        return;
    };
    let (drawer_state, form, overflow) =
        state::with(|s| (s.drawer.state(), s.drawer.form(), s.drawer.body_overflow()));

    let open = matches!(drawer_state, DrawerState::Open(_));
    dom::toggle_class(&auth.overlay, "active", open);
    dom::toggle_class(&auth.drawer, "active", open);

    dom::toggle_class(&auth.login_container, "active", form == AuthForm::Login);
    dom::toggle_class(&auth.signup_container, "active", form == AuthForm::Signup);
    if let Some(container) = &auth.profile_container {
        dom::toggle_class(container, "active", form == AuthForm::Profile);
    }

    dom::set_style(&els.body, "overflow", overflow);
}

pub fn open_drawer(els: &Elements) {
    let signed_in = state::session().is_signed_in();
    let has_drawer = els.auth.is_some();
    let outcome = state::with_mut(|s| s.drawer.open(signed_in, has_drawer));
    match outcome {
        OpenOutcome::Redirect(route) => navigate(route),
        OpenOutcome::Opened => render_drawer(els),
        OpenOutcome::Unavailable => tracing::debug!("no drawer on this page"),
    }
}

pub fn close_drawer(els: &Elements) {
    state::with_mut(|s| s.drawer.close());
    render_drawer(els);
}

pub fn switch_mode(els: &Elements, form: AuthForm) {
    state::with_mut(|s| s.drawer.switch_mode(form));
    render_drawer(els);
}

// ── Navigation ──

fn navigate(route: Route) {
    if let Err(e) = dom::window().location().set_href(route.path()) {
        tracing::error!("navigation to {} failed: {e:?}", route.path());
    }
}

fn replace(route: Route) {
    if let Err(e) = dom::window().location().replace(route.path()) {
        tracing::error!("navigation to {} failed: {e:?}", route.path());
    }
}

fn reload() {
    if let Err(e) = dom::window().location().reload() {
        tracing::error!("reload failed: {e:?}");
    }
}

// ── Effects ──

fn reset_form(els: &Elements, form: AuthForm) {
    match form {
        AuthForm::Login => {
            if let Some(f) = &els.forms.login {
                f.form.reset();
            }
        }
        AuthForm::Signup => {
            if let Some(f) = &els.forms.signup {
                f.form.reset();
            }
        }
        AuthForm::Profile => {}
    }
}

fn run(els: &Elements, effect: Effect) {
    match effect {
        Effect::Toast(t) => toast::show(&t),
        Effect::ShowForm(form) => switch_mode(els, form),
        Effect::ResetForm(form) => reset_form(els, form),
        Effect::RefreshProfile => profile::refresh(els),
        Effect::CloseDrawer => close_drawer(els),
        Effect::Navigate(route) => navigate(route),
        Effect::Replace(route) => replace(route),
        Effect::Reload => reload(),
        after @ Effect::After { .. } => apply(els, vec![after]),
    }
}

pub fn apply(els: &Elements, effects: Vec<Effect>) {
    for (delay_ms, batch) in Effect::schedule(effects) {
        if delay_ms == 0 {
            batch.into_iter().for_each(|effect| run(els, effect));
        } else {
            let els = els.clone();
            Timeout::new(delay_ms, move || {
                batch.into_iter().for_each(|effect| run(&els, effect));
            })
            .forget();
        }
    }
}

// ── Handlers ──

pub fn logout(els: &Elements) {
    let effects = flow().logout();
    apply(els, effects);
}

fn bind_login(els: &Elements) {
    let Some(login) = els.forms.login.clone() else {
        return;
    };
    let els2 = els.clone();
    dom::listen(&login.form, "submit", move |e: Event| {
        e.prevent_default();
        let username = dom::get_input_value(&login.username);
        let password = dom::get_input_raw(&login.password);
        let els3 = els2.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let effects = flow().login(&username, &password, current_route()).await;
            apply(&els3, effects);
        });
    });
}

fn bind_signup(els: &Elements) {
    let Some(signup) = els.forms.signup.clone() else {
        return;
    };
    let els2 = els.clone();
    dom::listen(&signup.form, "submit", move |e: Event| {
        e.prevent_default();
        let username = dom::get_input_value(&signup.username);
        let email = dom::get_input_value(&signup.email);
        let password = dom::get_input_raw(&signup.password);
        let els3 = els2.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let effects = flow()
                .signup(&username, &email, &password, current_route())
                .await;
            apply(&els3, effects);
        });
    });
}

fn bind_drawer(els: &Elements) {
    let Some(auth) = &els.auth else {
        return;
    };
    let els2 = els.clone();
    dom::listen(&auth.overlay, "click", move |_: Event| close_drawer(&els2));

    let els2 = els.clone();
    dom::listen(&dom::document(), "keydown", move |e: web_sys::KeyboardEvent| {
        let open = state::with(|s| s.drawer.state() != DrawerState::Hidden);
        if open && e.key() == "Escape" {
            close_drawer(&els2);
        }
    });
}

pub fn init(els: &Elements) {
    bind_login(els);
    bind_signup(els);
    bind_drawer(els);
}
