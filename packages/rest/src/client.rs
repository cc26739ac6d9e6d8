//! The REST client backing a named endpoint.
//!
//! A `RestClient` wraps a blocking `reqwest` client, an optional base URL,
//! and the endpoint's mutable request defaults. Resource helpers (`find`,
//! `create`, `update_one`, ...) are thin wrappers over [`RestClient::request`].

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::types::{ApiResponse, RequestDefaults};

/// A named HTTP client with a base URL and mutable request defaults.
///
/// Requests with a relative path are resolved against the base URL; paths
/// starting with `http://` or `https://` bypass it. A client without a base
/// URL only accepts absolute paths.
///
/// # Example
///
/// ```ignore
/// use resthub_rest::{ClientConfig, RestClient};
///
/// let client = RestClient::from_config(
///     "api",
///     ClientConfig::new().with_base_url("https://api.example.com"),
/// )?;
///
/// // GET https://api.example.com/users/123
/// let user: Option<User> = client.find_one("users", "123")?;
///
/// // POST https://api.example.com/users
/// let created: User = client.create("users", &new_user)?;
/// ```
pub struct RestClient {
    name: String,
    client: Client,
    base_url: Option<Url>,

    /// Default request options, merged into every request this client sends.
    pub defaults: RequestDefaults,
}

impl RestClient {
    /// Create an unconfigured client: no base URL, no defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            client: Client::new(),
            base_url: None,
            defaults: RequestDefaults::new(),
        }
    }

    /// Create a client from a configuration.
    pub fn from_config(name: impl Into<String>, config: ClientConfig) -> Result<Self, Error> {
        let base_url = match config.base_url() {
            Some(base_url) => Some(Url::parse(base_url)?),
            None => None,
        };

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            name: name.into(),
            client,
            base_url,
            defaults: config.defaults().clone(),
        })
    }

    /// The endpoint name this client was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configured base URL, if any.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Resolve a request path against the base URL.
    fn build_url(&self, path: &str) -> Result<Url, Error> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Url::parse(path).map_err(Error::from);
        }

        match &self.base_url {
            Some(base_url) => base_url.join(path).map_err(Error::from),
            None => Err(Error::NoBaseUrl {
                endpoint: self.name.clone(),
                path: path.to_string(),
            }),
        }
    }

    /// Send a request and return the response.
    ///
    /// The endpoint defaults are applied first, then `options` on top
    /// (per-key, options win). The response is returned whatever its
    /// status; the typed helpers below turn non-success into errors.
    pub fn request(
        &self,
        method: http::Method,
        path: &str,
        body: Option<&serde_json::Value>,
        options: Option<&RequestDefaults>,
    ) -> Result<ApiResponse, Error> {
        let url = self.build_url(path)?;

        let merged = match options {
            Some(options) => self.defaults.merge(options),
            None => self.defaults.clone(),
        };

        let mut headers = HeaderMap::new();
        for (name, value) in &merged.headers {
            let header_name = HeaderName::try_from(name.as_str())?;
            let header_value = HeaderValue::try_from(value.as_str())?;
            headers.insert(header_name, header_value);
        }

        let mut req_builder = self.client.request(method, url);
        req_builder = req_builder.headers(headers);

        if !merged.query.is_empty() {
            req_builder = req_builder.query(&merged.query);
        }

        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder.send()?;

        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();

        let mut headers = std::collections::HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.to_string(), v.to_string());
            }
        }

        let body_text = response.text()?;
        let body = serde_json::from_str(&body_text).unwrap_or(serde_json::Value::Null);

        Ok(ApiResponse {
            status,
            status_text,
            headers,
            body,
            body_text: Some(body_text),
        })
    }

    /// GET a resource. Returns `None` on 404.
    pub fn find<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, Error> {
        let response = self.request(http::Method::GET, path, None, None)?;

        if response.status == 404 {
            return Ok(None);
        }
        if !response.is_success() {
            return Err(status_error(&response));
        }

        Ok(Some(response.json()?))
    }

    /// GET `{resource}/{id}`. Returns `None` on 404.
    pub fn find_one<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
    ) -> Result<Option<T>, Error> {
        self.find(&format!("{}/{}", resource, id))
    }

    /// POST a body to a path and deserialize the response.
    pub fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        let response = self.request(http::Method::POST, path, Some(&body), None)?;

        if !response.is_success() {
            return Err(status_error(&response));
        }

        Ok(response.json()?)
    }

    /// POST a new entity under a resource.
    pub fn create<T, B>(&self, resource: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.post(resource, body)
    }

    /// PUT `{resource}/{id}` with a body and deserialize the response.
    pub fn update_one<T, B>(&self, resource: &str, id: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        let response = self.request(
            http::Method::PUT,
            &format!("{}/{}", resource, id),
            Some(&body),
            None,
        )?;

        if !response.is_success() {
            return Err(status_error(&response));
        }

        Ok(response.json()?)
    }

    /// PATCH `{resource}/{id}` with a body and deserialize the response.
    pub fn patch_one<T, B>(&self, resource: &str, id: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        let response = self.request(
            http::Method::PATCH,
            &format!("{}/{}", resource, id),
            Some(&body),
            None,
        )?;

        if !response.is_success() {
            return Err(status_error(&response));
        }

        Ok(response.json()?)
    }

    /// DELETE `{resource}/{id}`. Returns the raw response on success
    /// (delete bodies are commonly empty).
    pub fn destroy_one(&self, resource: &str, id: &str) -> Result<ApiResponse, Error> {
        let response = self.request(
            http::Method::DELETE,
            &format!("{}/{}", resource, id),
            None,
            None,
        )?;

        if !response.is_success() {
            return Err(status_error(&response));
        }

        Ok(response)
    }
}

fn status_error(response: &ApiResponse) -> Error {
    Error::Status {
        status: response.status,
        status_text: response.status_text.clone(),
        message: response.body_text.clone().unwrap_or_default(),
    }
}
