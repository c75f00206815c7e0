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

//! Request-shaping enums shared by the client and the CLI

use serde::{Deserialize, Serialize};

/// Array fields the Amplify API wraps its collections in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
  Marketers,
  Budgets,
  Campaigns,
  PromotedLinks,
  Currencies,
  /// Performance rows
  Details,
}

impl ListField {
  /// JSON field name in the response body
  pub fn as_str(&self) -> &'static str {
    match self {
      ListField::Marketers => "marketers",
      ListField::Budgets => "budgets",
      ListField::Campaigns => "campaigns",
      ListField::PromotedLinks => "promotedLinks",
      ListField::Currencies => "currencies",
      ListField::Details => "details",
    }
  }
}

impl std::fmt::Display for ListField {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Entity a performance report is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportScope {
  Marketer,
  Campaign,
}

impl std::fmt::Display for ReportScope {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ReportScope::Marketer => write!(f, "marketers"),
      ReportScope::Campaign => write!(f, "campaigns"),
    }
  }
}

/// Breakdown of a performance report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceDimension {
  Day,
  Publisher,
  Section,
  PromotedLink,
}

impl std::fmt::Display for PerformanceDimension {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      PerformanceDimension::Day => write!(f, "performanceByDay"),
      PerformanceDimension::Publisher => write!(f, "performanceByPublisher"),
      PerformanceDimension::Section => write!(f, "performanceBySection"),
      PerformanceDimension::PromotedLink => write!(f, "performanceByPromotedLink"),
    }
  }
}

impl PerformanceDimension {
  /// Resource path of this report for one marketer or campaign
  ///
  /// The trailing slash matches what the reporting resources are served under.
  pub fn path(&self, scope: ReportScope, id: &str) -> String {
    format!("{}/{}/{}/", scope, id, self)
  }

  /// Parse a dimension from its CLI spelling
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "day" => Some(PerformanceDimension::Day),
      "publisher" => Some(PerformanceDimension::Publisher),
      "section" => Some(PerformanceDimension::Section),
      "promoted-link" | "link" => Some(PerformanceDimension::PromotedLink),
      _ => None,
    }
  }
}
