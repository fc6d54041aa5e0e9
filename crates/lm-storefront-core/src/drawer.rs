//! Authentication drawer state machine.
//!
//! States: `Hidden` → `Login` ⇄ `Signup`, plus `Profile` for signed-in
//! visitors on pages that host a profile card. Page scroll is locked exactly
//! while the drawer is open.

use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthForm {
    Login,
    Signup,
    Profile,
}

impl AuthForm {
    pub fn from_name(name: &str) -> Self {
        match name {
            "signup" => AuthForm::Signup,
            "profile" => AuthForm::Profile,
            _ => AuthForm::Login,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerState {
    Hidden,
    Open(AuthForm),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    /// Signed-in visitors go to their profile page instead of the drawer.
    Redirect(Route),
    /// The page has no drawer; nothing opens and scroll stays free.
    Unavailable,
}

#[derive(Clone, Debug)]
pub struct AuthDrawer {
    open: bool,
    form: AuthForm,
}

impl Default for AuthDrawer {
    fn default() -> Self {
        Self {
            open: false,
            form: AuthForm::Login,
        }
    }
}

impl AuthDrawer {
    pub fn open(&mut self, signed_in: bool, has_drawer: bool) -> OpenOutcome {
        if signed_in {
            return OpenOutcome::Redirect(Route::Profile);
        }
        if !has_drawer {
            return OpenOutcome::Unavailable;
        }
        self.form = AuthForm::Login;
        self.open = true;
        OpenOutcome::Opened
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Swaps the visible form. Does not open a hidden drawer or touch scroll lock.
    pub fn switch_mode(&mut self, form: AuthForm) {
        self.form = form;
    }

    pub fn form(&self) -> AuthForm {
        self.form
    }

    pub fn state(&self) -> DrawerState {
        if self.open {
            DrawerState::Open(self.form)
        } else {
            DrawerState::Hidden
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    /// Value for `body.style.overflow`.
    pub fn body_overflow(&self) -> &'static str {
        if self.scroll_locked() { "hidden" } else { "" }
    }
}
