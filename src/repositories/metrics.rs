//! Repository for the doccano metrics API
//!
//! Read-only aggregates: overall progress, per-member progress, and label
//! distributions per label kind.

use crate::error::Result;
use crate::models::metrics::{LabelDistribution, MemberProgress, Progress};
use crate::session::{decode_json, Session};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Deserialize)]
struct MemberProgressEnvelope {
    progress: Vec<MemberProgress>,
}

/// Repository for interacting with the doccano metrics API
pub struct MetricsRepository<'a> {
    session: &'a Session,
}

impl<'a> MetricsRepository<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Overall annotation progress of a project
    pub async fn get_progress(&self, project_id: i64) -> Result<Progress> {
        let path = format!("projects/{project_id}/metrics/progress");
        let response = self.session.get(&path, &[]).await?;
        decode_json(response).await
    }

    /// Per-member annotation progress
    pub async fn get_members_progress(&self, project_id: i64) -> Result<Vec<MemberProgress>> {
        let path = format!("projects/{project_id}/metrics/member-progress");
        let response = self.session.get(&path, &[]).await?;
        let envelope: MemberProgressEnvelope = decode_json(response).await?;
        Ok(envelope.progress)
    }

    /// Category label counts per member
    pub async fn get_category_distribution(
        &self,
        project_id: i64,
    ) -> Result<Vec<LabelDistribution>> {
        self.get_distribution(project_id, "category").await
    }

    /// Span label counts per member
    pub async fn get_span_distribution(&self, project_id: i64) -> Result<Vec<LabelDistribution>> {
        self.get_distribution(project_id, "span").await
    }

    /// Relation label counts per member
    pub async fn get_relation_distribution(
        &self,
        project_id: i64,
    ) -> Result<Vec<LabelDistribution>> {
        self.get_distribution(project_id, "relation").await
    }

    /// The distribution endpoints answer an object keyed by username mapping
    /// label names to counts; flatten it into one record per member
    async fn get_distribution(
        &self,
        project_id: i64,
        kind: &str,
    ) -> Result<Vec<LabelDistribution>> {
        let path = format!("projects/{project_id}/metrics/{kind}-distribution");
        let response = self.session.get(&path, &[]).await?;
        let raw: BTreeMap<String, BTreeMap<String, i64>> = decode_json(response).await?;

        Ok(raw
            .into_iter()
            .map(|(username, counts)| LabelDistribution { username, counts })
            .collect())
    }
}
