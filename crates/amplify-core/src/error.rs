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

use thiserror::Error;

/// The main error type for amplify-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Failed to read a configuration file
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  /// Configuration file is not valid YAML for [`crate::Config`]
  #[error("YAML error: {0}")]
  Yaml(#[from] serde_yaml::Error),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Login did not yield a session token
  #[error("Authentication failed: {0}")]
  Authentication(String),

  /// Non-success status other than 404
  #[error("Request failed with HTTP {status}: {body}")]
  Request { status: u16, body: String },

  /// Body was not JSON, or a record/array field had the wrong shape
  #[error("Malformed response: {0}")]
  MalformedResponse(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// A paged resource never returned an empty page
  #[error("Gave up paging after {pages} non-empty pages")]
  PageLimitExceeded { pages: usize },
}

impl Error {
  /// HTTP status carried by the error, if any
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Request { status, .. } => Some(*status),
      _ => None,
    }
  }
}

/// Result type alias for amplify-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_request_error_display() {
    let err = Error::Request { status: 500, body: "{\"message\":\"boom\"}".to_string() };
    assert_eq!(err.to_string(), "Request failed with HTTP 500: {\"message\":\"boom\"}");
    assert_eq!(err.status(), Some(500));
  }

  #[test]
  fn test_status_absent_for_other_errors() {
    assert_eq!(Error::Authentication("no token".to_string()).status(), None);
    assert_eq!(Error::PageLimitExceeded { pages: 3 }.status(), None);
  }
}
