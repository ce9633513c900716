//! Project metrics aggregates

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Overall annotation progress for a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub total: i64,
    pub remaining: i64,
    pub complete: i64,
}

/// Per-member annotation progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProgress {
    pub user: String,
    pub done: i64,
}

/// Label counts for one member
///
/// The wire format is a JSON object keyed by username mapping label names to
/// counts; the repository flattens it into one record per member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDistribution {
    pub username: String,
    pub counts: BTreeMap<String, i64>,
}
