//! Typed async client for the doccano annotation service REST API
//!
//! This crate provides a thin, typed access layer over a doccano instance:
//! an authenticated [`Session`] owning the base URL and HTTP state, and one
//! repository per resource kind translating operations into requests and
//! decoding JSON responses into records.
//!
//! # Module Structure
//!
//! - [`session`] - Authenticated HTTP session and cursor normalization
//! - [`models`] - Typed records and the page envelope
//! - [`repositories`] - Per-resource operations (examples, roles, metrics)
//! - [`error`] - The crate's failure kinds
//!
//! # Example
//!
//! ```ignore
//! use doccano_client::{ExampleRepository, Session};
//! use futures::TryStreamExt;
//!
//! async fn example() -> doccano_client::Result<()> {
//!     let mut session = Session::new("http://localhost:8000")?;
//!     session.login("admin", "password").await?;
//!
//!     let examples = ExampleRepository::new(&session);
//!     let confirmed: Vec<_> = examples.list(1, Some(true)).try_collect().await?;
//!     println!("{} confirmed examples", confirmed.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use error::{Error, Result};
pub use models::example::{Example, ExampleRef};
pub use models::metrics::{LabelDistribution, MemberProgress, Progress};
pub use models::role::Role;
pub use models::Page;
pub use repositories::example::ExampleRepository;
pub use repositories::metrics::MetricsRepository;
pub use repositories::role::RoleRepository;
pub use session::{Session, SessionBuilder};
