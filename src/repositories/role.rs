//! Repository for the doccano role API

use crate::error::Result;
use crate::models::role::Role;
use crate::session::{decode_json, Session};

/// Repository for interacting with the doccano role API
pub struct RoleRepository<'a> {
    session: &'a Session,
}

impl<'a> RoleRepository<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Return all roles the service defines
    ///
    /// The endpoint answers a bare JSON array, no pagination envelope.
    pub async fn list(&self) -> Result<Vec<Role>> {
        let response = self.session.get("roles", &[]).await?;
        decode_json(response).await
    }
}
