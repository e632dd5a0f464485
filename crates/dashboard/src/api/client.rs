//! HTTP client for the remote booking API.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use marquee_core::{Booking, DeploymentInfo, Movie, NewBooking, NewMovie, NewUser, User};

use super::ApiError;

/// Client for the remote booking API gateway.
///
/// Cheaply cloneable via `Arc`; one instance is shared across all handlers.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client for the given gateway base URL.
    #[must_use]
    pub fn new(base_url: &Url) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.clone(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.inner.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    /// Fetch a collection resource and parse the body as a JSON array.
    ///
    /// Transport and parse failures propagate unchanged; there is no retry.
    async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = self.endpoint(path);
        debug!(url = %url, "Fetching collection");

        let response = self.inner.client.get(&url).send().await?;
        let body = response.text().await?;
        let items: Vec<T> = serde_json::from_str(&body)?;

        debug!(url = %url, count = items.len(), "Fetched collection");
        Ok(items)
    }

    /// Create an entity under a collection resource.
    ///
    /// Success is signalled by an HTTP success status; the response body is
    /// the created entity, including its server-assigned id. A non-success
    /// status surfaces as [`ApiError::Rejected`] carrying `operation`.
    async fn create<P: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        operation: &'static str,
        payload: &P,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        debug!(url = %url, operation, "Creating entity");

        let response = self
            .inner
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(operation, status = %status, "Gateway rejected create");
            return Err(ApiError::Rejected {
                operation,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let created: T = serde_json::from_str(&body)?;
        Ok(created)
    }

    /// List all users.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.list("users/").await
    }

    /// List all movies.
    #[instrument(skip(self))]
    pub async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.list("movies/").await
    }

    /// List all bookings.
    #[instrument(skip(self))]
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.list("bookings/").await
    }

    /// Fetch per-service deployment status for the dashboard panel.
    #[instrument(skip(self))]
    pub async fn deployment_status(&self) -> Result<Vec<DeploymentInfo>, ApiError> {
        self.list("deployment-status").await
    }

    /// Create a user; the returned entity carries the server-assigned id.
    #[instrument(skip_all, fields(name = %payload.name))]
    pub async fn create_user(&self, payload: &NewUser) -> Result<User, ApiError> {
        self.create("users/", "create_user", payload).await
    }

    /// Create a movie (seeding only).
    #[instrument(skip_all, fields(title = %payload.title))]
    pub async fn create_movie(&self, payload: &NewMovie) -> Result<Movie, ApiError> {
        self.create("movies/", "create_movie", payload).await
    }

    /// Create a booking; the returned entity carries the server-assigned id.
    #[instrument(skip_all, fields(movie_id = %payload.movie_id))]
    pub async fn create_booking(&self, payload: &NewBooking) -> Result<Booking, ApiError> {
        self.create("bookings/", "create_booking", payload).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let base = Url::parse("http://localhost:8080").unwrap();
        let client = ApiClient::new(&base);
        assert_eq!(client.endpoint("users/"), "http://localhost:8080/users/");
        assert_eq!(
            client.endpoint("deployment-status"),
            "http://localhost:8080/deployment-status"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash_in_base() {
        let base = Url::parse("http://localhost:8080/").unwrap();
        let client = ApiClient::new(&base);
        assert_eq!(client.endpoint("movies/"), "http://localhost:8080/movies/");
    }
}
