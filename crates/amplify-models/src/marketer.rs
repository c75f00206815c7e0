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

//! Marketer (advertiser account) records

use crate::common::{deserialize_id, impl_identified, ExtraFields};
use serde::{Deserialize, Serialize};

/// Advertiser account, the root of budgets and campaigns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marketer {
  /// Marketer id
  #[serde(deserialize_with = "deserialize_id")]
  pub id: String,

  /// Display name
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  /// Whether the account is active
  #[serde(skip_serializing_if = "Option::is_none")]
  pub enabled: Option<bool>,

  /// Account currency code (e.g. "USD")
  #[serde(skip_serializing_if = "Option::is_none")]
  pub currency: Option<String>,

  /// Remaining fields, verbatim
  #[serde(flatten)]
  pub extra: ExtraFields,
}

impl_identified!(Marketer);
