//! Persistent HTTP identity shared by every request of one client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client as HttpClient, RequestBuilder};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Header carrying the Media Cloud account email.
pub const MEDIACLOUD_EMAIL: HeaderName = HeaderName::from_static("mediacloud-email");

/// Base URL plus a pooled HTTP client preloaded with the identity headers.
#[derive(Debug, Clone)]
pub struct Session {
    base_url: Url,
    http: HttpClient,
}

impl Session {
    /// Build the session. Performs no network I/O.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::config_error(format!(
                "Base URL cannot have paths joined onto it: {}",
                config.base_url
            )));
        }

        let http = HttpClient::builder()
            .default_headers(identity_headers(config)?)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` against the base URL with standard URL-join rules.
    ///
    /// A base without a trailing slash loses its last segment:
    /// `https://host/api` + `runs/all` is `https://host/runs/all`.
    pub fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.http.get(url)
    }

    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.http.post(url)
    }
}

/// Headers sent with every request.
///
/// `mediacloud-email` and `Authorization` are left out entirely when the
/// matching credential is missing or empty.
pub fn identity_headers(config: &ClientConfig) -> ClientResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, header_value("User-Agent", &config.user_agent)?);

    if let Some(email) = config.email() {
        headers.insert(MEDIACLOUD_EMAIL, header_value("mediacloud-email", email)?);
    }

    if let Some(key) = config.key() {
        let mut value = header_value("Authorization", &format!("Bearer {key}"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

fn header_value(name: &str, value: &str) -> ClientResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ClientError::config_error(format!("Invalid {name} header value: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(base_url: &str) -> Session {
        Session::new(&ClientConfig::default().with_base_url(base_url)).unwrap()
    }

    #[test]
    fn test_headers_without_credentials() {
        let headers = identity_headers(&ClientConfig::default()).unwrap();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(USER_AGENT).unwrap(), "Sous Chef Buffet");
        assert!(headers.get(MEDIACLOUD_EMAIL).is_none());
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_headers_with_credentials() {
        let config = ClientConfig::default().with_credentials("chef@example.org", "k3y");
        let headers = identity_headers(&config).unwrap();
        assert_eq!(headers.get(MEDIACLOUD_EMAIL).unwrap(), "chef@example.org");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer k3y");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn test_headers_skip_empty_credentials() {
        let config = ClientConfig::default().with_credentials("", "");
        let headers = identity_headers(&config).unwrap();
        assert!(!headers.contains_key(MEDIACLOUD_EMAIL));
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_headers_email_without_key() {
        let mut config = ClientConfig::default();
        config.auth_email = Some("chef@example.org".to_string());
        let headers = identity_headers(&config).unwrap();
        assert!(headers.contains_key(MEDIACLOUD_EMAIL));
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_invalid_header_value_is_config_error() {
        let config = ClientConfig::default().with_credentials("chef@example.org", "bad\nkey");
        assert!(matches!(
            identity_headers(&config),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn test_endpoint_with_trailing_slash() {
        let url = session("https://host/api/").endpoint("runs/all").unwrap();
        assert_eq!(url.as_str(), "https://host/api/runs/all");
    }

    #[test]
    fn test_endpoint_without_trailing_slash_drops_last_segment() {
        let url = session("https://host/api").endpoint("runs/all").unwrap();
        assert_eq!(url.as_str(), "https://host/runs/all");
    }

    #[test]
    fn test_endpoint_with_run_id() {
        let url = session("https://host/api/")
            .endpoint("run/8f14e45f-ceea-467f-a0e6-1c3f5d2a9b11")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://host/api/run/8f14e45f-ceea-467f-a0e6-1c3f5d2a9b11"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = Session::new(&ClientConfig::default().with_base_url("not a url"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_cannot_be_a_base_url() {
        let result = Session::new(&ClientConfig::default().with_base_url("mailto:chef@example.org"));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }
}
