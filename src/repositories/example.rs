//! Repository for the doccano example API
//!
//! Covers single-record CRUD, bulk deletion, confirmation-state updates, and
//! the paginated listing with cursor-URL normalization.

use crate::error::{Error, Result};
use crate::models::example::{Example, ExampleRef};
use crate::models::Page;
use crate::session::{decode_json, is_json, rebase_cursor, Session};
use futures::stream::{self, Stream, TryStreamExt};
use serde_json::Value;

/// Serialize a record for submission
///
/// Creation payloads must not carry a client-side id; the server assigns one.
fn payload(example: &Example, include_id: bool) -> Result<Value> {
    let mut value = serde_json::to_value(example)?;
    if !include_id {
        if let Value::Object(map) = &mut value {
            map.remove("id");
        }
    }
    Ok(value)
}

/// State machine driving the lazy page sequence
enum ListState {
    /// Initial request to the plural path with filter params
    FirstPage {
        path: String,
        query: Vec<(&'static str, String)>,
    },
    /// Follow the `next` cursor of the previous page
    NextPage { cursor: String },
    /// The previous page had `next == null`
    Exhausted,
}

/// Repository for interacting with the doccano example API
pub struct ExampleRepository<'a> {
    session: &'a Session,
}

impl<'a> ExampleRepository<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Find an example by id
    ///
    /// Fails with [`Error::NotFound`] if the service answers 404.
    pub async fn find_by_id(&self, project_id: i64, example_id: i64) -> Result<Example> {
        let path = format!("projects/{project_id}/examples/{example_id}");
        let response = self.session.get(&path, &[]).await?;
        decode_json(response).await
    }

    /// Count the examples of a project
    ///
    /// Reads the first page of the listing and returns its total count.
    pub async fn count(&self, project_id: i64) -> Result<i64> {
        let path = format!("projects/{project_id}/examples");
        let response = self.session.get(&path, &[]).await?;
        let page: Page<Example> = decode_json(response).await?;
        Ok(page.count)
    }

    /// List the examples of a project as a lazy stream
    ///
    /// Records are yielded in server order. No page is fetched until the
    /// previous page's records have been consumed; dropping the stream stops
    /// further fetches. `is_confirmed` filters server-side by confirmation
    /// state; `None` omits the parameter entirely, which the service
    /// distinguishes from an explicit `false`.
    pub fn list(
        &self,
        project_id: i64,
        is_confirmed: Option<bool>,
    ) -> impl Stream<Item = Result<Example>> + '_ {
        let path = format!("projects/{project_id}/examples");
        let query = match is_confirmed {
            Some(confirmed) => vec![("confirmed", confirmed.to_string())],
            None => Vec::new(),
        };

        stream::try_unfold(ListState::FirstPage { path, query }, move |state| async move {
            let page = match state {
                ListState::Exhausted => return Ok::<_, Error>(None),
                ListState::FirstPage { path, query } => {
                    let response = self.session.get(&path, &query).await?;
                    decode_json::<Page<Example>>(response).await?
                }
                ListState::NextPage { cursor } => self.fetch_cursor(&cursor).await?,
            };

            // Only a null `next` terminates; an empty page is traversed
            let state = match page.next {
                Some(cursor) => ListState::NextPage { cursor },
                None => ListState::Exhausted,
            };
            Ok(Some((page.results, state)))
        })
        .map_ok(|batch| stream::iter(batch.into_iter().map(Ok::<Example, Error>)))
        .try_flatten()
    }

    /// Fetch the page behind a cursor URL
    ///
    /// If doccano is hosted behind a reverse proxy, the cursors it emits can
    /// carry the internal scheme/host instead of the one clients reach it
    /// through; a non-JSON reply is the tell. Only the cursor's path and
    /// query are trustworthy, so the request is retried once with the
    /// session's own authority substituted in. A non-JSON body on the
    /// corrected URL propagates as a decode failure.
    async fn fetch_cursor(&self, cursor: &str) -> Result<Page<Example>> {
        let response = self.session.get_url(cursor).await?;
        let response = if is_json(&response) {
            response
        } else {
            let corrected = rebase_cursor(self.session.base_url(), cursor)?;
            tracing::warn!(
                "cursor {} answered non-JSON; retrying via {}",
                cursor,
                corrected
            );
            self.session.get_url(corrected.as_str()).await?
        };
        decode_json(response).await
    }

    /// Create a new example; the server assigns the id
    pub async fn create(&self, project_id: i64, example: &Example) -> Result<Example> {
        let path = format!("projects/{project_id}/examples");
        let body = payload(example, false)?;
        let response = self.session.post(&path, Some(&body)).await?;
        decode_json(response).await
    }

    /// Update an example, returning the server's representation
    pub async fn update(&self, project_id: i64, example: &Example) -> Result<Example> {
        let example_id = example.id.ok_or(Error::MissingId)?;
        let path = format!("projects/{project_id}/examples/{example_id}");
        let body = payload(example, true)?;
        let response = self.session.put(&path, &body).await?;
        decode_json(response).await
    }

    /// Delete one example
    pub async fn delete(&self, project_id: i64, example: impl Into<ExampleRef>) -> Result<()> {
        let example_id = example.into().id()?;
        let path = format!("projects/{project_id}/examples/{example_id}");
        self.session.delete(&path, None).await?;
        Ok(())
    }

    /// Delete several examples in one request
    ///
    /// Issues a single DELETE to the plural path carrying every resolved id,
    /// never one request per record.
    pub async fn bulk_delete<R>(
        &self,
        project_id: i64,
        examples: impl IntoIterator<Item = R>,
    ) -> Result<()>
    where
        R: Into<ExampleRef>,
    {
        let ids = examples
            .into_iter()
            .map(|example| example.into().id())
            .collect::<Result<Vec<i64>>>()?;

        let path = format!("projects/{project_id}/examples");
        let body = serde_json::json!({ "ids": ids });
        self.session.delete(&path, Some(&body)).await?;
        Ok(())
    }

    /// Delete every example of a project
    ///
    /// The service treats a bulk delete with an empty id list as "delete
    /// everything under this project"; the client sends the literal empty
    /// set rather than enumerating ids.
    pub async fn delete_all(&self, project_id: i64) -> Result<()> {
        self.bulk_delete(project_id, std::iter::empty::<ExampleRef>())
            .await
    }

    /// Advance the confirmation state of an example
    pub async fn update_state(
        &self,
        project_id: i64,
        example: impl Into<ExampleRef>,
    ) -> Result<()> {
        let example_id = example.into().id()?;
        let path = format!("projects/{project_id}/examples/{example_id}/states");
        self.session.post(&path, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn creation_payload_strips_the_id() {
        let example = Example {
            id: Some(99),
            text: Some("hello".to_string()),
            ..Example::default()
        };

        assert_eq!(
            payload(&example, false).unwrap(),
            json!({ "text": "hello" })
        );
    }

    #[test]
    fn update_payload_keeps_the_id() {
        let example = Example {
            id: Some(99),
            text: Some("hello".to_string()),
            ..Example::default()
        };

        assert_eq!(
            payload(&example, true).unwrap(),
            json!({ "id": 99, "text": "hello" })
        );
    }
}
