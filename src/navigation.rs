//! Screen routes and the login gate in front of user-only tabs.

use crate::models::ProductSummary;
use crate::session::SessionProvider;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Splash,
    Auth,
    EmailAuth,
    Home,
    Liked,
    Profile,
    SneakerDetails(Box<ProductSummary>),
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Splash => "Splash",
            Route::Auth => "Auth",
            Route::EmailAuth => "EmailAuth",
            Route::Home => "Home",
            Route::Liked => "Liked",
            Route::Profile => "Profile",
            Route::SneakerDetails(_) => "SneakerDetails",
        }
    }

    /// Tabs only a signed-in user may open.
    pub fn requires_login(&self) -> bool {
        matches!(self, Route::Liked | Route::Profile)
    }

    pub fn details(product: ProductSummary) -> Self {
        Route::SneakerDetails(Box::new(product))
    }
}

/// Receives navigation requests from screen logic.
pub trait Navigator {
    /// Navigate to `route`; returns the route actually shown.
    fn navigate(&mut self, route: Route) -> &Route;

    /// Pop the current route; `false` when already at the root.
    fn go_back(&mut self) -> bool;
}

/// A navigation stack that sends guests to the auth screen when they try
/// to open a login-only route.
pub struct RouteStack<S: SessionProvider> {
    session: S,
    root: Route,
    stack: Vec<Route>,
}

impl<S: SessionProvider> RouteStack<S> {
    pub fn new(session: S) -> Self {
        Self {
            session,
            root: Route::Splash,
            stack: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&self.root)
    }

    /// Number of routes shown, counting the root.
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }
}

impl<S: SessionProvider> Navigator for RouteStack<S> {
    fn navigate(&mut self, route: Route) -> &Route {
        let target = if route.requires_login() && self.session.current_user().is_none() {
            tracing::info!(route = route.name(), "login required; redirecting to Auth");
            Route::Auth
        } else {
            route
        };
        self.stack.push(target);
        self.current()
    }

    fn go_back(&mut self) -> bool {
        self.stack.pop().is_some()
    }
}
