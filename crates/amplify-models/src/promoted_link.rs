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

//! Promoted link (creative) records

use crate::common::{deserialize_id, impl_identified, ExtraFields};
use serde::{Deserialize, Serialize};

/// A single creative within a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotedLink {
  /// Promoted link id
  #[serde(deserialize_with = "deserialize_id")]
  pub id: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub campaign_id: Option<String>,

  /// Headline
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,

  /// Landing page
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub enabled: Option<bool>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,

  /// Review status, e.g. `APPROVED`, `PENDING`, `REJECTED`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status: Option<String>,

  /// Remaining fields, verbatim
  #[serde(flatten)]
  pub extra: ExtraFields,
}

impl_identified!(PromotedLink);

/// Server-side filter applied while listing a campaign's promoted links
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotedLinkFilter {
  /// Only enabled (`Some(true)`) or disabled (`Some(false)`) links
  pub enabled: Option<bool>,
  /// Only links in one of these review statuses; empty means any
  pub statuses: Vec<String>,
}

impl PromotedLinkFilter {
  /// Query parameters for this filter
  pub fn query_params(&self) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if let Some(enabled) = self.enabled {
      params.push(("enabled".to_string(), enabled.to_string()));
    }
    if !self.statuses.is_empty() {
      params.push(("statuses".to_string(), self.statuses.join(",")));
    }
    params
  }
}

/// Body of a promoted link creation request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPromotedLink {
  pub text: String,
  pub url: String,
  pub enabled: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,
}

impl NewPromotedLink {
  /// An enabled link with the given headline and landing page
  pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
    Self { text: text.into(), url: url.into(), enabled: true, image_url: None }
  }
}

/// Partial update of a promoted link
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotedLinkUpdate {
  pub id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub enabled: Option<bool>,
}

impl PromotedLinkUpdate {
  /// Enable or disable link `id`
  pub fn enabled(id: impl Into<String>, enabled: bool) -> Self {
    Self { id: id.into(), enabled: Some(enabled) }
  }
}
