//! Resource repositories
//!
//! One repository per resource kind, each holding a reference to a shared
//! [`Session`](crate::session::Session) and translating typed operations into
//! HTTP requests.
//!
//! # Module Structure
//!
//! - [`example`] - Example CRUD, bulk/state mutations, and paginated listing
//! - [`metrics`] - Read-only progress and label-distribution metrics
//! - [`role`] - Read-only role listing

pub mod example;
pub mod metrics;
pub mod role;
