//! Route guard and navigation seam

use crate::session::SessionStore;

/// Form entry mode carried inside a form route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIntent {
    Create,
    Edit(i64),
    View(i64),
}

/// Admin screens reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    CustomerList,
    CustomerForm(FormIntent),
    EmployeeList,
    EmployeeForm(FormIntent),
    ProductList,
    ProductForm(FormIntent),
    NotFound,
}

impl Route {
    /// Everything but the login screen and the 404 page requires a
    /// session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }
}

/// Navigation sink. Controllers emit route changes through this seam
/// so they stay renderer-agnostic.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view
    Allow,
    /// Skip the view (and its data fetch) and go here instead
    Redirect(Route),
}

/// Gates protected views on the session's authenticated flag.
///
/// Pure predicate plus redirect target: no network, no store writes.
/// A denied view must not run its data fetch; callers check first and
/// only then load.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    store: SessionStore,
}

impl RouteGuard {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    pub fn check(&self, route: &Route) -> GuardDecision {
        if !route.is_protected() || self.store.is_authenticated() {
            GuardDecision::Allow
        } else {
            tracing::debug!(?route, "unauthenticated access refused");
            GuardDecision::Redirect(Route::Login)
        }
    }
}
