// # HTTP Contact API
//
// This crate provides the HTTP/JSON implementation of `ContactApi`.
//
// ## Endpoints
//
// All three calls target a single configured collection URL:
//
// ```http
// GET    {base}          -> [Contact]
// POST   {base}          <- {"name": ..., "number": ...}  -> Contact
// DELETE {base}/{id}     -> empty 2xx
// ```
//
// The id is appended as a single percent-encoded path segment, so `/`,
// `?` and `#` inside an id never change the target. `.` and `..` are
// refused before any request.
//
// ## Behavior
//
// - One HTTP request per call
// - No retry, no backoff, no timeout override (reqwest defaults)
// - Every failure (transport, non-2xx status, bad body) is `Error::Remote`

use phonebook_core::config::ApiConfig;
use phonebook_core::model::{Contact, ContactId, NewContact};
use phonebook_core::traits::ContactApi;
use phonebook_core::{Error, Result};
use reqwest::Url;

/// Contacts API client over HTTP
#[derive(Debug, Clone)]
pub struct HttpContactApi {
    /// Collection URL, without trailing slash
    base_url: Url,

    /// HTTP client for API requests
    client: reqwest::Client,
}

impl HttpContactApi {
    /// Create a client for the given collection URL
    ///
    /// # Parameters
    ///
    /// - `base_url`: e.g. `http://localhost:3001/api/contacts`
    ///
    /// # Returns
    ///
    /// - `Err(Error::Config)`: if the URL is empty or not http(s)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&ApiConfig::new(base_url))
    }

    /// Create a client from API configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create a client that sends requests through `client`
    pub fn with_client(config: &ApiConfig, client: reqwest::Client) -> Result<Self> {
        config.validate()?;

        let base_url = Url::parse(config.normalized_base_url())
            .map_err(|e| Error::config(format!("Invalid API URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "API URL cannot hold a contact id: {}",
                base_url
            )));
        }

        Ok(Self { base_url, client })
    }

    /// The collection URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// URL of a single contact
    fn contact_url(&self, id: &ContactId) -> Result<Url> {
        let segment = id.as_str();
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(Error::remote(format!("Invalid contact id: {:?}", segment)));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::remote(format!("Cannot extend API URL {}", self.base_url)))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// Turn a non-2xx response into a remote error
    async fn check_status(response: reqwest::Response, operation: &str) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());

        Err(Error::remote(format!(
            "{} failed: {} - {}",
            operation, status, error_text
        )))
    }
}

#[async_trait::async_trait]
impl ContactApi for HttpContactApi {
    async fn list_all(&self) -> Result<Vec<Contact>> {
        tracing::debug!("GET {}", self.base_url);

        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(|e| Error::remote(format!("HTTP request failed: {}", e)))?;

        let response = Self::check_status(response, "List contacts").await?;

        response
            .json::<Vec<Contact>>()
            .await
            .map_err(|e| Error::remote(format!("Failed to parse response: {}", e)))
    }

    async fn create(&self, contact: &NewContact) -> Result<Contact> {
        tracing::debug!("POST {} ({})", self.base_url, contact.name);

        let response = self
            .client
            .post(self.base_url.clone())
            .json(contact)
            .send()
            .await
            .map_err(|e| Error::remote(format!("HTTP request failed: {}", e)))?;

        let response = Self::check_status(response, "Create contact").await?;

        response
            .json::<Contact>()
            .await
            .map_err(|e| Error::remote(format!("Failed to parse response: {}", e)))
    }

    async fn delete_by_id(&self, id: &ContactId) -> Result<()> {
        let url = self.contact_url(id)?;
        tracing::debug!("DELETE {}", url);

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| Error::remote(format!("HTTP request failed: {}", e)))?;

        Self::check_status(response, "Delete contact").await?;
        Ok(())
    }

    fn api_name(&self) -> &'static str {
        "http"
    }
}
