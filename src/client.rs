//! Blocking client for the Cloud Vision `images:annotate` endpoint.
//!
//! One request per call, no retries.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::vision::{BatchAnnotateImagesRequest, BatchAnnotateImagesResponse};

/// Default annotate endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

/// How requests are authorised.
#[derive(Clone)]
pub enum Auth {
    /// API key sent as `key` query parameter
    ApiKey(String),
    /// OAuth2 access token sent as bearer token
    BearerToken(String),
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Auth::ApiKey(_) => f.write_str("ApiKey(***)"),
            Auth::BearerToken(_) => f.write_str("BearerToken(***)"),
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Annotate endpoint URL
    pub endpoint: String,

    /// Credentials
    pub auth: Option<Auth>,

    /// Request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config with defaults and no credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Authorise with an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.auth = Some(Auth::ApiKey(key.into()));
        self
    }

    /// Authorise with an OAuth2 access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(Auth::BearerToken(token.into()));
        self
    }

    /// Override the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            auth: None,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Blocking annotate client.
pub struct VisionClient {
    config: ClientConfig,
    http: reqwest::blocking::Client,
}

impl VisionClient {
    /// Create a client. Fails without credentials.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.auth.is_none() {
            return Err(Error::Credentials(
                "no API key or access token configured".to_string(),
            ));
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    /// Send a batch request and decode the response.
    pub fn annotate(
        &self,
        request: &BatchAnnotateImagesRequest,
    ) -> Result<BatchAnnotateImagesResponse> {
        let mut builder = self.http.post(&self.config.endpoint).json(request);
        builder = match self.config.auth {
            Some(Auth::ApiKey(ref key)) => builder.query(&[("key", key.as_str())]),
            Some(Auth::BearerToken(ref token)) => builder.bearer_auth(token),
            None => builder,
        };

        log::debug!(
            "POST {} with {} image(s)",
            self.config.endpoint,
            request.requests.len()
        );
        let response = builder.send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Http(format!("{}: {}", status, body.trim())));
        }

        Ok(response.json::<BatchAnnotateImagesResponse>()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new()
            .with_api_key("k")
            .with_endpoint("http://localhost:9/annotate")
            .with_timeout(Duration::from_secs(5));

        assert!(matches!(config.auth, Some(Auth::ApiKey(_))));
        assert_eq!(config.endpoint, "http://localhost:9/annotate");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(ClientConfig::default().endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_missing_credentials() {
        let result = VisionClient::new(ClientConfig::new());
        assert!(matches!(result, Err(Error::Credentials(_))));
    }

    #[test]
    fn test_auth_debug_hides_secret() {
        let auth = Auth::BearerToken("secret".into());
        assert_eq!(format!("{:?}", auth), "BearerToken(***)");
    }
}
