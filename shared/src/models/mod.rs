//! Data models
//!
//! One module per resource kind managed by the admin screens. All ids
//! are server-assigned `i64`s; the client never generates them.

pub mod customer;
pub mod employee;
pub mod product;

// Re-exports
pub use customer::*;
pub use employee::*;
pub use product::*;
