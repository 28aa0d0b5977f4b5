//! Directory service client.

use crate::error::{DirectoryClientError, Result};
use crate::types::{ClientConfig, CreateUserRequest, ErrorBody, HealthResponse};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;
use userhub_core::{UpdateUser, User, UserId};

/// Client for the directory service's user API.
///
/// Cloning is cheap: the underlying connection pool is shared.
///
/// # Example
///
/// ```ignore
/// use userhub_directory_client::{ClientConfig, DirectoryClient};
///
/// let client = DirectoryClient::new(ClientConfig::new("http://localhost:5000"))?;
/// let created = client.create_user("Ahmed Aly", "Ahmed@gmail.com").await?;
/// let fetched = client.get_user(&created.id).await?;
/// assert_eq!(created, fetched);
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: Client,
    base_url: Url,
}

impl DirectoryClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(DirectoryClientError::InvalidUrl(
                "URL cannot be empty".into(),
            ));
        }

        let trimmed = config.url.trim().trim_end_matches('/');
        let base_url =
            Url::parse(trimmed).map_err(|e| DirectoryClientError::InvalidUrl(e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(DirectoryClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(format!(
                "userhub-directory-client/{}",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| DirectoryClientError::InvalidUrl(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Base URL, without a trailing slash.
    pub fn url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// GET /users/{id}
    pub async fn get_user(&self, id: &UserId) -> Result<User> {
        let url = self.endpoint(&["users", id.as_str()])?;
        debug!(url = %url, user_id = %id, "Fetching user");

        let response = self.send(self.http.get(url)).await?;
        read_json(response).await
    }

    /// GET /users
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = self.endpoint(&["users"])?;
        debug!(url = %url, "Listing users");

        let response = self.send(self.http.get(url)).await?;
        read_json(response).await
    }

    /// POST /users
    pub async fn create_user(&self, name: &str, email: &str) -> Result<User> {
        let url = self.endpoint(&["users"])?;
        debug!(url = %url, "Creating user");

        let request = CreateUserRequest { name, email };
        let response = self.send(self.http.post(url).json(&request)).await?;
        let user: User = read_json(response).await?;

        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// PUT /users/{id}
    pub async fn update_user(&self, id: &UserId, update: &UpdateUser) -> Result<User> {
        let url = self.endpoint(&["users", id.as_str()])?;
        debug!(url = %url, user_id = %id, "Updating user");

        let response = self.send(self.http.put(url).json(update)).await?;
        read_json(response).await
    }

    /// DELETE /users/{id}
    pub async fn delete_user(&self, id: &UserId) -> Result<()> {
        let url = self.endpoint(&["users", id.as_str()])?;
        debug!(url = %url, user_id = %id, "Deleting user");

        let response = self.send(self.http.delete(url)).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DirectoryClientError::Unreachable(e.to_string()))?;
        Err(status_error(status, &body))
    }

    /// GET /health
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = self.endpoint(&["health"])?;
        let response = self.send(self.http.get(url)).await?;
        read_json(response).await
    }

    /// Build an endpoint URL, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DirectoryClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|e| {
            warn!(
                error = %e,
                timeout = e.is_timeout(),
                connect = e.is_connect(),
                "Directory request failed"
            );
            DirectoryClientError::Unreachable(e.to_string())
        })
    }
}

/// Decode a success body, or turn the status into an error.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| DirectoryClientError::Unreachable(e.to_string()))?;

    if status.is_success() {
        serde_json::from_slice(&body)
            .map_err(|e| DirectoryClientError::InvalidResponse(e.to_string()))
    } else {
        Err(status_error(status, &body))
    }
}

fn status_error(status: StatusCode, body: &[u8]) -> DirectoryClientError {
    if status == StatusCode::NOT_FOUND {
        return DirectoryClientError::NotFound;
    }

    let message = serde_json::from_slice::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned());

    if status.is_client_error() {
        DirectoryClientError::Rejected {
            status: status.as_u16(),
            message,
        }
    } else {
        DirectoryClientError::ServerError {
            status: status.as_u16(),
            message,
        }
    }
}
