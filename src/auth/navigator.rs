//! Routes the flows hand back to the caller. Flows never redirect on their own;
//! a successful submit yields the next [`Route`] and the view layer decides how
//! to get there.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard { user_id: String },
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard { user_id } => format!("/dashboard/{user_id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.path())
    }
}

/// Per-user dashboard reached after signing in.
#[must_use]
pub fn after_login(user_id: &str) -> Route {
    Route::Dashboard {
        user_id: user_id.to_string(),
    }
}

/// New accounts sign in explicitly after registering.
#[must_use]
pub fn after_registration() -> Route {
    Route::Login
}
