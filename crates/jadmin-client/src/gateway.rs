//! The HTTP choke point for the management API.
//!
//! Every authenticated call funnels through [`ApiGateway::request`], which
//! attaches the session's Basic-auth header, dispatches the call, and
//! normalizes the reply. Normalization is deliberately a single layer:
//! status codes become typed errors here, and nothing downstream inspects
//! raw responses again.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{Error, LoginError};
use crate::session::{Credentials, SessionStore, derive_auth_header};

/// Gateway binding a base URL, an HTTP client, and a [`SessionStore`].
///
/// Cloning is cheap; clones share the underlying connection pool and the
/// same session.
#[derive(Debug, Clone)]
pub struct ApiGateway {
    http: Client,
    base_url: Url,
    session: SessionStore,
}

impl ApiGateway {
    /// Build a gateway with a default HTTP client.
    ///
    /// The base URL carries the API mount prefix (for example
    /// `http://gateway:8000/api`); paths are appended to it verbatim.
    #[must_use]
    pub fn new(base_url: Url, session: SessionStore) -> Self {
        Self::with_client(Client::new(), base_url, session)
    }

    /// Build a gateway over a caller-configured HTTP client, for timeouts
    /// or proxy settings.
    #[must_use]
    pub const fn with_client(http: Client, base_url: Url, session: SessionStore) -> Self {
        Self {
            http,
            base_url,
            session,
        }
    }

    /// The session backing this gateway.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Full URL for a resource path.
    ///
    /// Plain concatenation, not URL-join: the base URL's mount prefix
    /// (`/api`) must survive, and joining an absolute path would discard it.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Issue an authenticated call and normalize the reply.
    ///
    /// Every call carries `Content-Type: application/json`, body or not.
    ///
    /// Contract, in priority order:
    /// - no session: the stale state is cleared, the login redirect fires,
    ///   and [`Error::Unauthenticated`] returns without any network contact;
    /// - HTTP 401: forced logout, then [`Error::SessionExpired`];
    /// - HTTP 204: the synthetic document `{"success": true}`;
    /// - other non-2xx: [`Error::Api`] carrying the body's `message` field
    ///   when present, else `HTTP <status>`;
    /// - network failure or an undecodable 2xx body: [`Error::Transport`].
    ///
    /// # Errors
    ///
    /// Returns the normalized [`Error`] described by the contract above.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        self.request_with_headers(method, path, body, HeaderMap::new())
            .await
    }

    /// [`Self::request`] with extra headers. The auth header is inserted
    /// after the merge and wins any collision.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::request`].
    pub async fn request_with_headers(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        mut headers: HeaderMap,
    ) -> Result<Value, Error> {
        let Some(auth) = self.session.auth_header() else {
            self.session.logout();
            return Err(Error::Unauthenticated);
        };
        let auth = HeaderValue::from_str(&auth)
            .map_err(|err| Error::Transport(format!("invalid credential bytes: {err}")))?;

        headers
            .entry(CONTENT_TYPE)
            .or_insert_with(|| HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);

        let mut builder = self
            .http
            .request(method, self.endpoint(path))
            .headers(headers);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| Error::Transport(err.to_string()))?;
        self.normalize(response).await
    }

    async fn normalize(&self, response: reqwest::Response) -> Result<Value, Error> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.session.logout();
            return Err(Error::SessionExpired);
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(serde_json::json!({ "success": true }));
        }

        let ok = status.is_success();
        let text = response
            .text()
            .await
            .map_err(|err| Error::Transport(err.to_string()))?;
        let parsed: Result<Value, _> = serde_json::from_str(&text);

        if ok {
            return parsed
                .map_err(|err| Error::Transport(format!("failed to decode response body: {err}")));
        }
        let message = parsed
            .ok()
            .as_ref()
            .and_then(|doc| doc.get("message"))
            .and_then(Value::as_str)
            .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string);
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Authenticated GET decoded into a typed document.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::request`] failures; a body that does not match
    /// `T` maps to [`Error::Transport`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let value = self.request(Method::GET, path, None).await?;
        decode(value)
    }

    /// Authenticated call carrying a typed JSON body.
    pub(crate) async fn send<B: serde::Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value, Error> {
        let body = serde_json::to_value(body)
            .map_err(|err| Error::Transport(format!("failed to encode request body: {err}")))?;
        self.request(method, path, Some(&body)).await
    }

    /// Authenticated call with the empty-object body the PUT actions expect.
    pub(crate) async fn send_empty(&self, method: Method, path: &str) -> Result<Value, Error> {
        self.request(method, path, Some(&Value::Object(serde_json::Map::new())))
            .await
    }

    /// Probe the candidate credentials and open a session on success.
    ///
    /// The probe lists users with the candidate auth header attached
    /// directly, without touching the stored session; an existing session
    /// survives a failed probe. None of the failure arms trigger the
    /// forced-logout path.
    ///
    /// # Errors
    ///
    /// [`LoginError::InvalidCredentials`] on a 401 probe reply,
    /// [`LoginError::Server`] for any other non-2xx status, and
    /// [`LoginError::Connection`] when the probe never reached the server.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), LoginError> {
        let candidate = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .get(self.endpoint("/users"))
            .header(AUTHORIZATION, derive_auth_header(&candidate))
            .send()
            .await
            .map_err(|err| LoginError::Connection(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            self.session.set_credentials(username, password);
            tracing::info!(username, "session opened");
            return Ok(());
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(LoginError::InvalidCredentials);
        }
        Err(LoginError::Server(status.as_u16()))
    }
}

/// Decode a normalized JSON document into a typed model.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value)
        .map_err(|err| Error::Transport(format!("failed to decode response body: {err}")))
}
