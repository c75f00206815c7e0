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

//! Configuration management for the Amplify client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;
use url::Url;

/// Main configuration struct for the Amplify client
///
/// Usually read from a YAML file:
///
/// ```yaml
/// user: reporting@example.com
/// password: hunter2
/// base_url: https://api.outbrain.com/amplify/v0.1
/// verify: true
/// ```
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// Account user name for the basic-auth login
  pub user: String,

  /// Account password for the basic-auth login
  pub password: String,

  /// Base URL for the Amplify API
  #[serde(default = "default_base_url")]
  pub base_url: String,

  /// Verify TLS certificates
  #[serde(default = "default_verify")]
  pub verify: bool,

  /// API rate limit (requests per minute)
  #[serde(default = "default_rate_limit")]
  pub rate_limit: u32,
}

fn default_base_url() -> String {
  crate::AMPLIFY_BASE_URL.to_string()
}

fn default_verify() -> bool {
  true
}

fn default_rate_limit() -> u32 {
  crate::DEFAULT_RATE_LIMIT
}

impl Config {
  /// Create a config with default values for everything but the credentials
  pub fn new(user: impl Into<String>, password: impl Into<String>, base_url: impl Into<String>) -> Self {
    Config {
      user: user.into(),
      password: password.into(),
      base_url: base_url.into(),
      verify: default_verify(),
      rate_limit: default_rate_limit(),
    }
  }

  /// Parse configuration from YAML text
  pub fn from_yaml_str(yaml: &str) -> Result<Self> {
    let config: Config = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
  }

  /// Load configuration from a YAML file
  pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
    let text = std::fs::read_to_string(path.as_ref())?;
    Self::from_yaml_str(&text)
  }

  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let user = env::var("AMPLIFY_USER")
      .map_err(|_| Error::Config("AMPLIFY_USER not set".to_string()))?;

    let password = env::var("AMPLIFY_PASSWORD")
      .map_err(|_| Error::Config("AMPLIFY_PASSWORD not set".to_string()))?;

    let base_url = env::var("AMPLIFY_BASE_URL").unwrap_or_else(|_| default_base_url());

    let verify = match env::var("AMPLIFY_VERIFY") {
      Ok(raw) => parse_flag(&raw)
        .ok_or_else(|| Error::Config(format!("Invalid AMPLIFY_VERIFY: {}", raw)))?,
      Err(_) => default_verify(),
    };

    let rate_limit = env::var("AMPLIFY_RATE_LIMIT")
      .unwrap_or_else(|_| default_rate_limit().to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid AMPLIFY_RATE_LIMIT".to_string()))?;

    let config = Config { user, password, base_url, verify, rate_limit };
    config.validate()?;
    Ok(config)
  }

  /// Base URL guaranteed to end with `/`, so that resource paths can be appended
  pub fn normalized_base_url(&self) -> Result<String> {
    let mut base = self.base_url.trim().to_string();
    if !base.ends_with('/') {
      base.push('/');
    }
    Url::parse(&base).map_err(|e| Error::Config(format!("Invalid base URL {}: {}", base, e)))?;
    Ok(base)
  }

  fn validate(&self) -> Result<()> {
    if self.user.is_empty() {
      return Err(Error::Config("user must not be empty".to_string()));
    }
    self.normalized_base_url()?;
    Ok(())
  }
}

fn parse_flag(raw: &str) -> Option<bool> {
  match raw.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Some(true),
    "0" | "false" | "no" | "off" => Some(false),
    _ => None,
  }
}

impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("user", &self.user)
      .field("password", &"********")
      .field("base_url", &self.base_url)
      .field("verify", &self.verify)
      .field("rate_limit", &self.rate_limit)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn test_from_yaml_defaults() {
    let config = Config::from_yaml_str("user: alice\npassword: secret\n").unwrap();
    assert_eq!(config.user, "alice");
    assert_eq!(config.base_url, crate::AMPLIFY_BASE_URL);
    assert!(config.verify);
    assert_eq!(config.rate_limit, crate::DEFAULT_RATE_LIMIT);
  }

  #[test]
  fn test_from_yaml_explicit_values() {
    let yaml = "user: bob\npassword: pw\nbase_url: https://example.test/api\nverify: false\n";
    let config = Config::from_yaml_str(yaml).unwrap();
    assert!(!config.verify);
    assert_eq!(config.normalized_base_url().unwrap(), "https://example.test/api/");
  }

  #[test]
  fn test_from_yaml_missing_password() {
    let result = Config::from_yaml_str("user: alice\n");
    assert!(matches!(result, Err(Error::Yaml(_))));
  }

  #[test]
  fn test_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "user: carol").unwrap();
    writeln!(file, "password: pw").unwrap();
    writeln!(file, "base_url: http://localhost:8080/").unwrap();

    let config = Config::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.user, "carol");
    assert_eq!(config.normalized_base_url().unwrap(), "http://localhost:8080/");
  }

  #[test]
  fn test_invalid_base_url() {
    let config = Config::new("u", "p", "not a url");
    assert!(matches!(config.normalized_base_url(), Err(Error::Config(_))));
  }

  #[test]
  fn test_debug_hides_password() {
    let config = Config::new("u", "super-secret", crate::AMPLIFY_BASE_URL);
    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("super-secret"));
  }

  #[test]
  fn test_config_from_env() {
    env::set_var("AMPLIFY_USER", "env_user");
    env::set_var("AMPLIFY_PASSWORD", "env_pw");
    env::set_var("AMPLIFY_VERIFY", "no");
    let config = Config::from_env().unwrap();
    assert_eq!(config.user, "env_user");
    assert!(!config.verify);
    env::remove_var("AMPLIFY_VERIFY");
  }

  #[test]
  fn test_parse_flag() {
    assert_eq!(parse_flag("TRUE"), Some(true));
    assert_eq!(parse_flag("0"), Some(false));
    assert_eq!(parse_flag("maybe"), None);
  }
}
