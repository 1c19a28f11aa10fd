//! Route guard: which screen a path maps to and whether it may render.
//!
//! SYSTEM CONTEXT
//! ==============
//! The decision is synchronous and depends only on the current session.
//! There is no "checking" state: a tab either holds a token (unlocked) or it
//! does not (locked). Redirects forget the requested path.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Every routable screen of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Dashboard,
    Accounts,
    Orders,
    Errors,
    Users,
}

impl Screen {
    /// Protected screens in sidebar order.
    pub const PROTECTED: [Screen; 5] =
        [Screen::Dashboard, Screen::Accounts, Screen::Orders, Screen::Errors, Screen::Users];

    /// Map a location path to a screen. Unknown paths land on the dashboard.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/login" => Self::Login,
            "/accounts" => Self::Accounts,
            "/orders" => Self::Orders,
            "/errors" => Self::Errors,
            "/users" => Self::Users,
            _ => Self::Dashboard,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Dashboard => HOME_PATH,
            Self::Accounts => "/accounts",
            Self::Orders => "/orders",
            Self::Errors => "/errors",
            Self::Users => "/users",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Dashboard => "Dashboard",
            Self::Accounts => "Accounts",
            Self::Orders => "Orders",
            Self::Errors => "Errors",
            Self::Users => "Users",
        }
    }

    pub fn is_protected(self) -> bool {
        self != Self::Login
    }
}

/// Outcome of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Screen),
    Redirect(&'static str),
}

/// Decide what a navigation to `screen` yields given token presence.
pub fn guard(screen: Screen, authenticated: bool) -> RouteDecision {
    if screen.is_protected() && !authenticated {
        RouteDecision::Redirect(LOGIN_PATH)
    } else {
        RouteDecision::Render(screen)
    }
}

/// Decide what a navigation to `path` yields for the given session.
pub fn route_decision(path: &str, state: &AuthState) -> RouteDecision {
    guard(Screen::from_path(path), state.is_authenticated())
}
