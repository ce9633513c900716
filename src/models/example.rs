//! Example (document) records

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An annotation example as stored by the service
///
/// `id` is assigned by the server on creation; a locally constructed record
/// has `id: None` until persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Example {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Free-form metadata attached to the example
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub meta: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_approver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_confirmed: Option<bool>,
}

impl Example {
    /// A minimal record ready for creation
    pub fn from_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }
}

/// A reference to an example: either a bare id or a full record
///
/// Operations that act on an existing example accept `impl Into<ExampleRef>`,
/// so callers can pass an `i64`, an `Example`, or `&Example` interchangeably.
/// Both forms resolve to the same canonical id before any request is built.
#[derive(Debug, Clone)]
pub enum ExampleRef {
    Id(i64),
    Record(Example),
}

impl ExampleRef {
    /// Resolve to the canonical id
    ///
    /// Fails with [`Error::MissingId`] for a record that has not been
    /// persisted yet.
    pub fn id(&self) -> Result<i64> {
        match self {
            Self::Id(id) => Ok(*id),
            Self::Record(example) => example.id.ok_or(Error::MissingId),
        }
    }
}

impl From<i64> for ExampleRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<Example> for ExampleRef {
    fn from(example: Example) -> Self {
        Self::Record(example)
    }
}

impl From<&Example> for ExampleRef {
    fn from(example: &Example) -> Self {
        Self::Record(example.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ref_resolves_bare_id_and_record_identically() {
        let record = Example {
            id: Some(42),
            ..Example::default()
        };

        assert_eq!(ExampleRef::from(42).id().unwrap(), 42);
        assert_eq!(ExampleRef::from(&record).id().unwrap(), 42);
        assert_eq!(ExampleRef::from(record).id().unwrap(), 42);
    }

    #[test]
    fn ref_to_unpersisted_record_is_an_error() {
        let err = ExampleRef::from(Example::from_text("draft")).id().unwrap_err();
        assert!(matches!(err, Error::MissingId));
    }

    #[test]
    fn unset_fields_are_omitted_from_payloads() {
        let payload = serde_json::to_value(Example::from_text("hello")).unwrap();
        assert_eq!(payload, json!({ "text": "hello" }));
    }

    #[test]
    fn decodes_a_full_server_record() {
        let example: Example = serde_json::from_value(json!({
            "id": 7,
            "text": "some text",
            "meta": { "source": "upload" },
            "annotation_approver": "admin",
            "comment_count": 2,
            "filename": "batch.jsonl",
            "is_confirmed": true
        }))
        .unwrap();

        assert_eq!(example.id, Some(7));
        assert_eq!(example.meta["source"], "upload");
        assert_eq!(example.is_confirmed, Some(true));
    }
}
