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

//! Campaign records and the bodies used to create and change them

use crate::common::{deserialize_id, impl_identified, ExtraFields};
use serde::{Deserialize, Serialize};

/// Ad campaign drawing from one budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
  /// Campaign id
  #[serde(deserialize_with = "deserialize_id")]
  pub id: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  /// Cost per click
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cpc: Option<f64>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub enabled: Option<bool>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub budget_id: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub marketer_id: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub targeting: Option<Targeting>,

  /// Query string appended to every promoted link URL
  #[serde(skip_serializing_if = "Option::is_none")]
  pub suffix_tracking_code: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub feeds: Option<Vec<String>>,

  /// Remaining fields, verbatim
  #[serde(flatten)]
  pub extra: ExtraFields,
}

impl_identified!(Campaign);

/// Audience targeting of a campaign
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Targeting {
  /// Device platforms, e.g. `DESKTOP`, `MOBILE`, `TABLET`
  #[serde(default)]
  pub platform: Vec<String>,

  /// Remaining fields, verbatim
  #[serde(flatten)]
  pub extra: ExtraFields,
}

impl Targeting {
  /// Targeting limited to the given platforms
  pub fn platforms<I, S>(platforms: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self { platform: platforms.into_iter().map(Into::into).collect(), extra: ExtraFields::new() }
  }
}

/// Body of a campaign creation request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
  pub name: String,
  pub cpc: f64,
  pub enabled: bool,
  pub budget_id: String,
  pub targeting: Targeting,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub suffix_tracking_code: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub feeds: Option<Vec<String>>,
}

impl NewCampaign {
  /// An enabled campaign on `budget_id` with the given platforms
  pub fn new<I, S>(name: impl Into<String>, cpc: f64, budget_id: impl Into<String>, platforms: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      name: name.into(),
      cpc,
      enabled: true,
      budget_id: budget_id.into(),
      targeting: Targeting::platforms(platforms),
      suffix_tracking_code: None,
      feeds: None,
    }
  }
}

/// Partial update of a campaign; unset fields are left untouched by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignUpdate {
  pub id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cpc: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub enabled: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub targeting: Option<Targeting>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub suffix_tracking_code: Option<String>,
}

impl CampaignUpdate {
  /// An update of campaign `id` that changes nothing yet
  pub fn new(id: impl Into<String>) -> Self {
    Self { id: id.into(), ..Default::default() }
  }
}
