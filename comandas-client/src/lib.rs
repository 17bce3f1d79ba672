//! Comandas Client - session-aware HTTP client for the Comandas BFF
//!
//! Provides the renderer-agnostic core shared by every admin screen:
//! the session store, the auth session controller, the route guard and
//! the per-resource CRUD clients and screen flows. Rendering lives
//! elsewhere; everything here returns values a view layer can show.

pub mod auth;
pub mod config;
pub mod error;
pub mod flow;
pub mod guard;
pub mod http;
pub mod resource;
pub mod session;

pub use auth::{uses_local_path, AuthController, AuthState, LOCAL_ACCOUNT_MARKER};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use flow::{DuplicateCheck, FormFlow, ListFlow, SubmitOutcome};
pub use guard::{FormIntent, GuardDecision, Navigator, Route, RouteGuard};
pub use http::HttpClient;
pub use resource::{normalize_collection, Resource, ResourceClient};
pub use session::{Session, SessionStore};

// Re-export shared types for convenience
pub use shared::models::{
    Customer, CustomerPayload, Employee, EmployeePayload, Product, ProductPayload,
};
