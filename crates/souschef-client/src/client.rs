//! Core Kitchen API client.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::response::{interpret, ApiOutcome};
use crate::session::Session;

/// A client for the Sous Chef Kitchen API.
///
/// Each operation is exactly one HTTP round trip. The client holds no state
/// beyond its [`Session`] and can be reused for any number of calls.
///
/// # Example
///
/// ```no_run
/// use souschef_client::{ClientConfig, KitchenClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = KitchenClient::new(ClientConfig::from_env())?;
/// let status = client.fetch_system_status().await?;
/// for (title, ready) in status.rows() {
///     println!("{title}: {ready}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct KitchenClient {
    config: ClientConfig,
    session: Session,
}

impl KitchenClient {
    /// Create a client from explicit settings. No request is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or a credential cannot
    /// be encoded as a header value.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let session = Session::new(&config)?;
        debug!(
            base_url = %session.base_url(),
            authenticated = config.has_credentials(),
            "Created Kitchen API client"
        );
        Ok(Self { config, session })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Resolve an endpoint path against the configured base URL.
    pub fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.session.endpoint(path)
    }

    /// Issue a GET and interpret the response.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        expected: &[StatusCode],
        model: &'static str,
    ) -> ClientResult<ApiOutcome<T>> {
        let url = self.endpoint(path)?;
        debug!(method = "GET", %url, "Sending request");
        let response = self.session.get(url).send().await?;
        interpret(response, expected, model).await
    }

    /// Issue a POST with `params` in the query string and interpret the
    /// response.
    pub(crate) async fn post<P, T>(
        &self,
        path: &str,
        params: &P,
        expected: &[StatusCode],
        model: &'static str,
    ) -> ClientResult<ApiOutcome<T>>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(method = "POST", %url, "Sending request");
        let response = self.session.post(url).query(params).send().await?;
        interpret(response, expected, model).await
    }
}
