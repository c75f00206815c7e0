/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! HTTP transport layer for Amplify API requests

use amplify_core::{Config, Error, Result, LOGIN_PATH, TOKEN_HEADER};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Authenticated HTTP transport for the Amplify API
///
/// Holds the session token obtained at login. The token never changes for the
/// lifetime of a transport; a fresh login produces a new transport.
pub struct Transport {
  client: Client,
  base_url: String,
  token: String,
}

impl Transport {
  /// Log in with the configured credentials and return an authenticated transport
  ///
  /// # Errors
  ///
  /// Returns [`Error::Authentication`] when the login call does not yield a
  /// token, [`Error::Config`] for an unusable base URL and [`Error::Http`] when
  /// the login request cannot be sent.
  #[instrument(skip(config), fields(user = %config.user))]
  pub async fn login(config: &Config) -> Result<Self> {
    let base_url = config.normalized_base_url()?;
    let client = Self::build_http_client(config.verify)?;
    let token = Self::fetch_token(&client, &base_url, &config.user, &config.password).await?;

    info!("Authenticated against {}", base_url);
    Ok(Self { client, base_url, token })
  }

  fn build_http_client(verify: bool) -> Result<Client> {
    let mut builder = Client::builder().user_agent(concat!("amplify-client/", env!("CARGO_PKG_VERSION")));

    if !verify {
      warn!("TLS certificate verification is disabled");
      builder = builder.danger_accept_invalid_certs(true);
    }

    builder.build().map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))
  }

  async fn fetch_token(client: &Client, base_url: &str, user: &str, password: &str) -> Result<String> {
    let url = format!("{}{}", base_url, LOGIN_PATH);
    debug!("Requesting session token from {}", url);

    let response = client
      .get(&url)
      .basic_auth(user, Some(password))
      .send()
      .await
      .map_err(|e| Error::Http(format!("Login request failed: {}", e)))?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read login response: {}", e)))?;

    if !status.is_success() {
      return Err(Error::Authentication(format!("login returned HTTP {}", status)));
    }

    let body: Value = serde_json::from_str(&text)
      .map_err(|e| Error::MalformedResponse(format!("login response is not JSON: {}", e)))?;

    body
      .get(TOKEN_HEADER)
      .and_then(Value::as_str)
      .map(str::to_string)
      .ok_or_else(|| Error::Authentication(format!("login response has no {} field", TOKEN_HEADER)))
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: "https://mock.outbrain.test/amplify/v0.1/".to_string(),
      token: "test_token".to_string(),
    }
  }

  /// Send one request and decode its JSON body
  ///
  /// A 404 is reported as `Ok(None)`. Any other non-success status becomes
  /// [`Error::Request`] carrying the status and the raw body. A success with an
  /// empty body decodes to `Value::Null`.
  #[instrument(skip(self, method, query, body), fields(method = %method))]
  pub async fn execute(
    &self,
    method: Method,
    path: &str,
    query: &[(String, String)],
    body: Option<&Value>,
  ) -> Result<Option<Value>> {
    let url = self.url(path);
    debug!("{} {} {:?}", method, url, query);

    let mut request = self.client.request(method, &url).header(TOKEN_HEADER, &self.token);
    if !query.is_empty() {
      request = request.query(query);
    }
    if let Some(body) = body {
      request = request.json(body);
    }

    let response = request.send().await.map_err(|e| Error::Http(format!("Request failed: {}", e)))?;
    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response status {} ({} bytes)", status, text.len());

    if status == StatusCode::NOT_FOUND {
      return Ok(None);
    }
    if !status.is_success() {
      return Err(Error::Request { status: status.as_u16(), body: text });
    }
    if text.trim().is_empty() {
      return Ok(Some(Value::Null));
    }

    serde_json::from_str(&text).map(Some).map_err(|e| {
      Error::MalformedResponse(format!(
        "{} is not JSON: {}. Response: {}",
        path,
        e,
        text.chars().take(200).collect::<String>()
      ))
    })
  }

  /// GET `path` with query parameters
  pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Option<Value>> {
    self.execute(Method::GET, path, query, None).await
  }

  /// POST a JSON body to `path`
  pub async fn post(&self, path: &str, body: &Value) -> Result<Option<Value>> {
    self.execute(Method::POST, path, &[], Some(body)).await
  }

  /// PUT a JSON body to `path`
  pub async fn put(&self, path: &str, body: &Value) -> Result<Option<Value>> {
    self.execute(Method::PUT, path, &[], Some(body)).await
  }

  /// DELETE `path`
  pub async fn delete(&self, path: &str, query: &[(String, String)]) -> Result<Option<Value>> {
    self.execute(Method::DELETE, path, query, None).await
  }

  /// Full URL of a resource path
  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path.trim_start_matches('/'))
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Session token sent with every request
  pub fn token(&self) -> &str {
    &self.token
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport").field("base_url", &self.base_url).field("token", &"********").finish()
  }
}
