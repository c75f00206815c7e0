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

//! Performance report rows

use crate::common::{deserialize_id, impl_identified, ExtraFields};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of a performance report
///
/// The `id` names whatever the report is broken down by: a day, a publisher,
/// a section or a promoted link. Metrics are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
  #[serde(deserialize_with = "deserialize_id")]
  pub id: String,

  #[serde(flatten)]
  pub fields: ExtraFields,
}

impl_identified!(PerformanceRecord);

impl PerformanceRecord {
  /// Numeric metric by name, looked up at the top level and then under `metrics`
  pub fn metric(&self, name: &str) -> Option<f64> {
    self
      .fields
      .get(name)
      .and_then(|v| v.as_f64())
      .or_else(|| self.fields.get("metrics").and_then(|m| m.get(name)).and_then(|v| v.as_f64()))
  }
}

/// Report rows of one parent, keyed by row id
pub type PerformanceById = BTreeMap<String, PerformanceRecord>;

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_metric_lookup() {
    let record: PerformanceRecord = serde_json::from_value(json!({
      "id": "2024-05-01",
      "impressions": 1200,
      "metrics": {"clicks": 31, "spend": 12.4}
    }))
    .unwrap();

    assert_eq!(record.metric("impressions"), Some(1200.0));
    assert_eq!(record.metric("spend"), Some(12.4));
    assert_eq!(record.metric("conversions"), None);
  }
}
