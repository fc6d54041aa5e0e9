//! DOM element bindings.
//!
//! All handles are resolved once at startup. Each page capability (carousel,
//! brand strip, product grid, countdown, auth drawer) is optional: when its
//! anchor element is absent the whole group is `None`. When the anchor is
//! present, the rest of the group is required and a missing piece fails
//! `Elements::bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

fn collect(nl: web_sys::NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

/// Raw value, untrimmed (passwords).
pub fn get_input_raw(el: &HtmlInputElement) -> String {
    el.value()
}

/// Nearest ancestor-or-self carrying `attr`, as `(element, value)`.
pub fn closest_with_attr(target: &web_sys::EventTarget, attr: &str) -> Option<(Element, String)> {
    let el = target.dyn_ref::<Element>()?;
    let found = el.closest(&format!("[{attr}]")).ok()??;
    let value = found.get_attribute(attr)?;
    Some((found, value))
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E>(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        tracing::warn!(event, "listener not attached: {e:?}");
    }
    cb.forget();
}

fn missing(what: &str) -> JsValue {
    JsValue::from_str(&format!("missing {what}"))
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| missing(&format!("element #{}", $id)))?
    };
}

// ── Capability groups ──

#[derive(Clone)]
pub struct CarouselElements {
    pub container: Element,
    pub wrapper: Element,
    pub slide_count: usize,
    pub dots_container: Element,
    /// Optional prev/next buttons (`data-carousel-step="-1"|"1"`).
    pub step_buttons: Vec<Element>,
}

#[derive(Clone)]
pub struct BrandElements {
    pub track: Element,
    /// Hover target; falls back to the track itself.
    pub container: Element,
}

#[derive(Clone)]
pub struct AuthElements {
    pub overlay: Element,
    pub drawer: Element,
    pub login_container: Element,
    pub signup_container: Element,
    pub profile_container: Option<Element>,
}

#[derive(Clone)]
pub struct LoginForm {
    pub form: HtmlFormElement,
    pub username: HtmlInputElement,
    pub password: HtmlInputElement,
}

#[derive(Clone)]
pub struct SignupForm {
    pub form: HtmlFormElement,
    pub username: HtmlInputElement,
    pub email: HtmlInputElement,
    pub password: HtmlInputElement,
}

/// Auth forms, either inside the drawer or on a dedicated `/login` or
/// `/signup` page.
#[derive(Clone)]
pub struct AuthForms {
    pub login: Option<LoginForm>,
    pub signup: Option<SignupForm>,
}

#[derive(Clone)]
pub struct ProfileCard {
    pub large_avatar: Option<Element>,
    pub username: Option<Element>,
    pub email: Option<Element>,
}

/// All DOM element references used by the storefront.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub body: HtmlElement,
    pub carousel: Option<CarouselElements>,
    pub brands: Option<BrandElements>,
    pub products_grid: Option<Element>,
    pub timer_slots: Vec<Element>,
    pub search_input: Option<HtmlInputElement>,
    pub wishlist_badge: Option<Element>,
    pub cart_badge: Option<Element>,
    pub profile_link: Option<Element>,
    pub auth: Option<AuthElements>,
    pub forms: AuthForms,
    pub profile_card: ProfileCard,
}

impl Elements {
    /// Resolve all DOM references. Call once after the document has loaded.
    pub fn bind() -> Result<Elements, JsValue> {
        let body = document().body().ok_or_else(|| missing("<body>"))?;
        let forms = bind_forms();

        Ok(Elements {
            body,
            carousel: bind_carousel()?,
            brands: by_id("brandsTrack").map(|track| BrandElements {
                container: query(".brands-carousel-container").unwrap_or_else(|| track.clone()),
                track,
            }),
            products_grid: by_id("productsGrid"),
            timer_slots: query_all(".timer-number"),
            search_input: query(".search-container input").and_then(|e| e.dyn_into().ok()),
            wishlist_badge: by_id("wishlist-badge"),
            cart_badge: by_id("cart-badge"),
            profile_link: by_id("profile-icon"),
            auth: bind_auth(&forms)?,
            forms,
            profile_card: ProfileCard {
                large_avatar: by_id("profileLargeAvatar"),
                username: by_id("profileUsernameDisplay"),
                email: by_id("profileEmailDisplay"),
            },
        })
    }
}

fn bind_carousel() -> Result<Option<CarouselElements>, JsValue> {
    let Some(wrapper) = by_id("carouselWrapper") else {
        return Ok(None);
    };
    let slide_count = query_all_within(&wrapper, ".carousel-slide").len();
    if slide_count == 0 {
        return Ok(None);
    }
    Ok(Some(CarouselElements {
        container: query(".carousel-container").unwrap_or_else(|| wrapper.clone()),
        dots_container: get_el!("dotsContainer"),
        step_buttons: query_all("[data-carousel-step]"),
        wrapper,
        slide_count,
    }))
}

fn bind_auth(forms: &AuthForms) -> Result<Option<AuthElements>, JsValue> {
    let Some(drawer) = by_id("authDrawer") else {
        return Ok(None);
    };
    if forms.login.is_none() {
        return Err(missing("#loginForm with #login-username and #login-password"));
    }
    if forms.signup.is_none() {
        return Err(missing(
            "#signupForm with #signup-username, #signup-email and #signup-password",
        ));
    }
    Ok(Some(AuthElements {
        overlay: get_el!("authOverlay"),
        drawer,
        login_container: get_el!("loginFormContainer"),
        signup_container: get_el!("signupFormContainer"),
        profile_container: by_id("userProfileContainer"),
    }))
}

fn bind_forms() -> AuthForms {
    let login = by_id_typed::<HtmlFormElement>("loginForm").and_then(|form| {
        Some(LoginForm {
            form,
            username: by_id_typed("login-username")?,
            password: by_id_typed("login-password")?,
        })
    });
    let signup = by_id_typed::<HtmlFormElement>("signupForm").and_then(|form| {
        Some(SignupForm {
            form,
            username: by_id_typed("signup-username")?,
            email: by_id_typed("signup-email")?,
            password: by_id_typed("signup-password")?,
        })
    });
    AuthForms { login, signup }
}
