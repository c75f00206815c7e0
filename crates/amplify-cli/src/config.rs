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

use amplify_client::Config;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Credentials file looked for in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "amplify.yml";

/// Read credentials from `path`, else `./amplify.yml`, else the environment
pub fn load(path: Option<&Path>) -> Result<Config> {
  resolve(path, Path::new(DEFAULT_CONFIG_FILE))
}

fn resolve(path: Option<&Path>, default_file: &Path) -> Result<Config> {
  match path {
    Some(path) => from_file(path),
    None if default_file.is_file() => {
      debug!("Using {}", default_file.display());
      from_file(default_file)
    }
    None => Config::from_env().context("Failed to load configuration from environment"),
  }
}

fn from_file(path: &Path) -> Result<Config> {
  Config::from_yaml_file(path).with_context(|| format!("Failed to load configuration from {}", path.display()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;
  use tempfile::NamedTempFile;

  #[test]
  fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "user: ops@example.com\npassword: pw\nverify: false").unwrap();

    let config = load(Some(file.path())).unwrap();
    assert_eq!(config.user, "ops@example.com");
    assert!(!config.verify);
  }

  #[test]
  fn test_default_file_is_used_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let default_file = dir.path().join(DEFAULT_CONFIG_FILE);
    std::fs::write(&default_file, "user: local@example.com\npassword: pw\n").unwrap();

    let config = resolve(None, &default_file).unwrap();
    assert_eq!(config.user, "local@example.com");
  }

  #[test]
  fn test_explicit_path_wins_over_default_file() {
    let dir = tempfile::tempdir().unwrap();
    let default_file = dir.path().join(DEFAULT_CONFIG_FILE);
    std::fs::write(&default_file, "user: local@example.com\npassword: pw\n").unwrap();
    let explicit = dir.path().join("other.yml");
    std::fs::write(&explicit, "user: other@example.com\npassword: pw\n").unwrap();

    let config = resolve(Some(&explicit), &default_file).unwrap();
    assert_eq!(config.user, "other@example.com");
  }

  #[test]
  fn test_missing_file_names_the_path() {
    let err = load(Some(Path::new("/nonexistent/amplify.yml"))).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/amplify.yml"));
  }
}
