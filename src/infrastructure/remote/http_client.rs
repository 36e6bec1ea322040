//! Shared HTTP plumbing for the sibling-service clients.

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::AppError;

/// JSON-over-HTTP client bound to one sibling service.
///
/// Wraps a pooled [`reqwest::Client`] with a per-request timeout. Paths are
/// resolved relative to the base URL, so a base of
/// `http://gateway/department` and a path of `organization/1` produce
/// `http://gateway/department/organization/1`.
#[derive(Debug, Clone)]
pub struct RemoteServiceClient {
    http: HttpClient,
    base_url: Url,
    service: &'static str,
}

impl RemoteServiceClient {
    /// Creates a client for `service` rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the HTTP client cannot be built.
    pub fn new(service: &'static str, base_url: Url, timeout: Duration) -> Result<Self, AppError> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::internal(
                    "Failed to build HTTP client",
                    json!({ "service": service, "reason": e.to_string() }),
                )
            })?;

        Ok(Self {
            http,
            base_url: with_trailing_slash(base_url),
            service,
        })
    }

    /// Resolves `path` against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the path does not form a valid URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| {
                AppError::internal(
                    "Invalid remote endpoint",
                    json!({ "service": self.service, "path": path, "reason": e.to_string() }),
                )
            })
    }

    /// Issues a GET and decodes the JSON body.
    ///
    /// Any non-2xx status is reported as [`AppError::RemoteUnavailable`];
    /// the remote's own status code is kept in the error details.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RemoteUnavailable`] when the service is unreachable,
    /// answers with an error status, or sends an undecodable body.
    /// Returns [`AppError::RemoteTimeout`] when the request times out.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.endpoint(path)?;
        debug!(service = self.service, %url, "Calling remote service");

        let response = self.http.get(url.clone()).send().await.inspect_err(|e| {
            warn!(service = self.service, %url, error = %e, "Remote call failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(service = self.service, %url, %status, "Remote service returned error status");
            return Err(AppError::remote_unavailable(
                format!("{} service returned an error", self.service),
                json!({
                    "service": self.service,
                    "status": status.as_u16(),
                    "url": url.as_str(),
                }),
            ));
        }

        Ok(response.json::<T>().await?)
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> RemoteServiceClient {
        RemoteServiceClient::new("department", Url::parse(base).unwrap(), Duration::from_secs(1))
            .unwrap()
    }

    #[test]
    fn test_endpoint_on_bare_host() {
        let url = client("http://localhost:8081").endpoint("organization/1").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8081/organization/1");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = client("http://gateway/department")
            .endpoint("/organization/1/with-employees")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://gateway/department/organization/1/with-employees"
        );
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let url = client("http://gateway/employee/").endpoint("organization/7").unwrap();
        assert_eq!(url.as_str(), "http://gateway/employee/organization/7");
    }
}
