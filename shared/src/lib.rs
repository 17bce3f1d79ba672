//! Shared types for the Comandas admin client
//!
//! Wire models and auth DTOs used by the client crate and the test
//! fixtures. Field names follow the BFF wire format (Portuguese), so
//! these types serialize straight onto the API.

pub mod auth;
pub mod group;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use auth::{LocalLoginRequest, LoginReply, RemoteLoginRequest};
pub use group::{group_label, LOCAL_FALLBACK_LABEL, UNKNOWN_GROUP_LABEL};
pub use models::{
    Customer, CustomerPayload, Employee, EmployeePayload, Product, ProductPayload,
};
