//! HTTP session for doccano REST API calls
//!
//! Owns the base URL, the underlying HTTP client, and the authentication
//! token. Repositories hold a reference to a [`Session`] and go through it
//! for every request.

use crate::error::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        // Back off to a char boundary so multi-byte bodies can't panic
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}... [truncated, {} bytes total]",
            &body[..end],
            body.len()
        )
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Replace the authority of a pagination cursor with the authority of the
/// configured base URL, keeping the cursor's path and query untouched.
///
/// When doccano runs behind a reverse proxy, the `next` links it emits carry
/// the internal scheme/host the service sees, not the one clients reach it
/// through. Only the path and query of such a cursor are trustworthy.
pub fn rebase_cursor(base: &Url, cursor: &str) -> Result<Url> {
    let cursor = Url::parse(cursor)?;
    let mut corrected = base.clone();
    corrected.set_path(cursor.path());
    corrected.set_query(cursor.query());
    Ok(corrected)
}

/// True when the response declares a JSON body
pub(crate) fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false)
}

/// Read the body as text and parse it, so malformed bodies surface as a
/// decode failure rather than a transport one
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// Builder for [`Session`], covering the knobs the service itself does not
/// negotiate: request timeout and user agent
pub struct SessionBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl SessionBuilder {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout: None,
            user_agent: format!("doccano-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Per-request timeout; unset defers to reqwest's default (none)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn build(self) -> Result<Session> {
        let base_url = Url::parse(self.base_url.trim_end_matches('/'))?;

        let mut builder = Client::builder().user_agent(&self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Session {
            client,
            base_url,
            token: None,
        })
    }
}

/// Authenticated HTTP session against one doccano instance
#[derive(Debug, Clone)]
pub struct Session {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl Session {
    /// Create a session with default settings
    pub fn new(base_url: &str) -> Result<Self> {
        SessionBuilder::new(base_url).build()
    }

    /// The configured base URL (scheme + host), used for cursor normalization
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the full API URL for a path relative to `<base>/v1/`
    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/v1/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("Token {token}")),
            None => request,
        }
    }

    /// Log in with username/password and keep the returned token for all
    /// subsequent requests
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let body = serde_json::json!({ "username": username, "password": password });
        let response = self.post("auth/login/", Some(&body)).await?;
        let login: LoginResponse = decode_json(response).await?;
        self.token = Some(login.token);
        Ok(())
    }

    /// Make a GET request to an API path relative to the base URL
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = self.api_url(path);
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.apply_auth(request).send().await?;
        self.check_status(response, &url).await
    }

    /// Make a GET request to an absolute URL, e.g. a pagination cursor
    pub async fn get_url(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self.apply_auth(self.client.get(url)).send().await?;
        self.check_status(response, url).await
    }

    /// Make a POST request to an API path
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Response> {
        let url = self.api_url(path);
        tracing::debug!("POST {}", url);

        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.apply_auth(request).send().await?;
        self.check_status(response, &url).await
    }

    /// Make a PUT request to an API path
    pub async fn put(&self, path: &str, body: &Value) -> Result<Response> {
        let url = self.api_url(path);
        tracing::debug!("PUT {}", url);

        let request = self.client.put(&url).json(body);
        let response = self.apply_auth(request).send().await?;
        self.check_status(response, &url).await
    }

    /// Make a DELETE request to an API path, optionally carrying a JSON body
    pub async fn delete(&self, path: &str, body: Option<&Value>) -> Result<Response> {
        let url = self.api_url(path);
        tracing::debug!("DELETE {}", url);

        let mut request = self.client.delete(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.apply_auth(request).send().await?;
        self.check_status(response, &url).await
    }

    /// Map HTTP error statuses to the crate's failure kinds
    async fn check_status(&self, response: Response, url: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                url: url.to_string(),
            });
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
        Err(Error::Api { status, body })
    }
}
