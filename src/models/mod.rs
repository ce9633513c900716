//! Typed records exchanged with the doccano API
//!
//! # Module Structure
//!
//! - [`example`] - Annotation examples (documents) and the record-or-id union
//! - [`metrics`] - Progress and label-distribution aggregates
//! - [`role`] - Project member roles

pub mod example;
pub mod metrics;
pub mod role;

use serde::Deserialize;

/// One page of a listing response
///
/// `next` is an opaque URL locating the following page; `None` marks the
/// terminal page. An empty `results` with a populated `next` is a valid
/// intermediate page.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Total number of matching records across all pages
    pub count: i64,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// Records of this page, in server-defined order
    pub results: Vec<T>,
}
