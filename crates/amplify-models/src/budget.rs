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

//! Budget records and the bodies used to create and change them

use crate::common::{deserialize_id, impl_identified, ExtraFields};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Spending envelope attached to a marketer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
  /// Budget id
  #[serde(deserialize_with = "deserialize_id")]
  pub id: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  /// Total amount in the marketer's currency
  #[serde(skip_serializing_if = "Option::is_none")]
  pub amount: Option<f64>,

  /// First day of the budget, `YYYY-MM-DD`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start_date: Option<String>,

  /// Last day of the budget, `YYYY-MM-DD`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub end_date: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub run_forever: Option<bool>,

  /// `DAILY`, `MONTHLY` or `CAMPAIGN`
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub budget_type: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub pacing: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub daily_target: Option<f64>,

  /// Remaining fields, verbatim
  #[serde(flatten)]
  pub extra: ExtraFields,
}

impl_identified!(Budget);

/// How often a budget's amount is replenished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetType {
  Daily,
  Monthly,
  Campaign,
}

/// How spend is spread over the budget's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetPacing {
  Automatic,
  SpendAsap,
  DailyTarget,
}

/// Body of a budget creation request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
  pub name: String,
  pub amount: f64,
  pub start_date: NaiveDate,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub end_date: Option<NaiveDate>,
  pub run_forever: bool,
  #[serde(rename = "type")]
  pub budget_type: BudgetType,
  pub pacing: BudgetPacing,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub daily_target: Option<f64>,
}

/// Partial update of a budget; unset fields are left untouched by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
  pub id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub amount: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start_date: Option<NaiveDate>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub end_date: Option<NaiveDate>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub run_forever: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub daily_target: Option<f64>,
}

impl BudgetUpdate {
  /// An update of budget `id` that changes nothing yet
  pub fn new(id: impl Into<String>) -> Self {
    Self { id: id.into(), ..Default::default() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_budget_from_api() {
    let budget: Budget = serde_json::from_value(json!({
      "id": "b1",
      "name": "Q3 push",
      "amount": 1500,
      "currency": "USD",
      "startDate": "2024-07-01",
      "endDate": "2024-09-30",
      "runForever": false,
      "type": "MONTHLY",
      "pacing": "AUTOMATIC",
      "dailyTarget": 25.5
    }))
    .unwrap();

    assert_eq!(budget.amount, Some(1500.0));
    assert_eq!(budget.budget_type.as_deref(), Some("MONTHLY"));
    assert_eq!(budget.daily_target, Some(25.5));
    assert_eq!(budget.extra["currency"], json!("USD"));
  }

  #[test]
  fn test_new_budget_body() {
    let body = NewBudget {
      name: "Spring \"launch\"".to_string(),
      amount: 1000.0,
      start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
      end_date: None,
      run_forever: true,
      budget_type: BudgetType::Campaign,
      pacing: BudgetPacing::SpendAsap,
      daily_target: None,
    };

    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(
      value,
      json!({
        "name": "Spring \"launch\"",
        "amount": 1000.0,
        "startDate": "2024-03-01",
        "runForever": true,
        "type": "CAMPAIGN",
        "pacing": "SPEND_ASAP"
      })
    );
  }

  #[test]
  fn test_budget_update_only_sends_supplied_fields() {
    let update = BudgetUpdate { amount: Some(200.0), ..BudgetUpdate::new("b7") };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value, json!({"id": "b7", "amount": 200.0}));
  }
}
