//! Project member roles

use serde::{Deserialize, Serialize};

/// A role the service can assign to a project member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}
