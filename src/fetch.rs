//! HTTP request core shared by every resource client

use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Method, RequestBuilder,
};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use url::Url;

use crate::config::ClientOptions;
use crate::error::{message_from_body, Error, Result};

/// Shared HTTP client plus the options every request is built from
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    options: Arc<ClientOptions>,
}

impl Transport {
    /// Create a new transport, validating the configured base URL
    pub fn new(client: Client, options: ClientOptions) -> Result<Self> {
        Url::parse(&options.base_url)?;
        Ok(Self {
            client,
            options: Arc::new(options),
        })
    }

    /// The options this transport was built with
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Start a request against `path`, relative to the base URL
    pub fn request(&self, method: Method, path: &str) -> FetchBuilder<'_> {
        FetchBuilder::new(self, path, method)
    }
}

/// Insert a header, skipping names or values that are not valid HTTP
fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) {
    match (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        (Ok(name), Ok(value)) => {
            headers.insert(name, value);
        }
        _ => warn!("Ignoring invalid header {:?}", name),
    }
}

/// Helper for building and executing HTTP requests
pub struct FetchBuilder<'a> {
    transport: &'a Transport,
    path: String,
    method: Method,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder
    pub fn new(transport: &'a Transport, path: &str, method: Method) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in &transport.options.headers {
            insert_header(&mut headers, name, value);
        }

        Self {
            transport,
            path: path.to_string(),
            method,
            headers,
            body: None,
        }
    }

    /// Add or override a header on this request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        insert_header(&mut self.headers, name, value);
        self
    }

    /// Add bearer token authentication to the request
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {}", token))
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let json = serde_json::to_vec(body)?;
        self.body = Some(json);
        Ok(self)
    }

    /// The absolute URL this request targets
    pub fn url(&self) -> Result<Url> {
        if !self.path.starts_with('/') {
            return Err(Error::InvalidPath(self.path.clone()));
        }
        let url = Url::parse(&format!("{}{}", self.transport.options.base_url, self.path))?;
        Ok(url)
    }

    fn build(&self) -> Result<RequestBuilder> {
        let url = self.url()?;
        debug!("{} {}", self.method, url);

        let mut req = self
            .transport
            .client
            .request(self.method.clone(), url)
            .headers(self.headers.clone());

        if let Some(timeout) = self.transport.options.request_timeout {
            req = req.timeout(timeout);
        }

        if let Some(body) = &self.body {
            req = req.body(body.clone());
        }

        Ok(req)
    }

    /// Send the request and turn any non-2xx status into [`Error::Api`]
    async fn send(&self) -> Result<reqwest::Response> {
        let response = self.build()?.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let message = message_from_body(&text);
            warn!("{} {} failed with {}: {}", self.method, self.path, status, message);
            return Err(Error::api(status.as_u16(), message));
        }

        Ok(response)
    }

    /// Execute the request and parse the response as JSON.
    ///
    /// An empty body is parsed as JSON `null`, so `()` and `Option<T>` targets
    /// accept it.
    pub async fn execute<T: DeserializeOwned>(&self) -> Result<T> {
        let response = self.send().await?;
        let bytes = response.bytes().await?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_str("null")?);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Execute the request, discarding whatever body comes back
    pub async fn execute_empty(&self) -> Result<()> {
        self.send().await?;
        Ok(())
    }
}

/// Helper for creating HTTP requests
pub struct Fetch;

impl Fetch {
    /// Create a GET request
    pub fn get<'a>(transport: &'a Transport, path: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(transport, path, Method::GET)
    }

    /// Create a POST request
    pub fn post<'a>(transport: &'a Transport, path: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(transport, path, Method::POST)
    }

    /// Create a PUT request
    pub fn put<'a>(transport: &'a Transport, path: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(transport, path, Method::PUT)
    }

    /// Create a DELETE request
    pub fn delete<'a>(transport: &'a Transport, path: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(transport, path, Method::DELETE)
    }
}
