#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Profile,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Profile => "/profile",
        }
    }

    /// Matches the current `location.pathname`; a trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "/profile" => Some(Route::Profile),
            _ => None,
        }
    }
}
