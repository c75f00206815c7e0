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

//! Budget endpoints
//!
//! Budgets hang off a marketer. Listing is per marketer; creation and updates
//! send serialized [`NewBudget`] / [`BudgetUpdate`] bodies and hand back the
//! API's answer verbatim, so callers should inspect it for the provider's own
//! validation errors.

use super::{fan_out, impl_endpoint_base, EndpointBase};
use crate::client::AmplifyRateLimiter;
use crate::transport::Transport;
use amplify_core::{ListField, Result};
use amplify_models::{Budget, BudgetUpdate, NewBudget};
use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::instrument;

/// Budget endpoints
pub struct BudgetEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<AmplifyRateLimiter>,
}

impl_endpoint_base!(BudgetEndpoints);

impl BudgetEndpoints {
  /// Create a new budget endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<AmplifyRateLimiter>) -> Self {
    Self { transport, rate_limiter }
  }

  /// Get one budget, or `None` if it does not exist
  #[instrument(skip(self))]
  pub async fn get_budget(&self, budget_id: &str) -> Result<Option<Budget>> {
    self.fetch_record(&format!("budgets/{}", budget_id)).await
  }

  /// Budgets of each marketer, keyed by marketer id
  ///
  /// Every requested marketer appears in the result, with an empty list when
  /// it has no budgets.
  #[instrument(skip(self, marketer_ids), fields(marketers = marketer_ids.len()))]
  pub async fn get_budgets_per_marketer<S: AsRef<str>>(
    &self,
    marketer_ids: &[S],
  ) -> Result<BTreeMap<String, Vec<Budget>>> {
    fan_out(marketer_ids, |marketer_id| async move {
      self
        .fetch_list(&format!("marketers/{}/budgets", marketer_id), &[], ListField::Budgets)
        .await
    })
    .await
  }

  /// Create a budget under a marketer
  #[instrument(skip(self, budget), fields(name = %budget.name))]
  pub async fn create_budget(&self, marketer_id: &str, budget: &NewBudget) -> Result<Option<Value>> {
    self.send_body(Method::POST, &format!("marketers/{}/budgets", marketer_id), budget).await
  }

  /// Change the fields set in `update`
  #[instrument(skip(self, update), fields(budget_id = %update.id))]
  pub async fn change_budget(&self, update: &BudgetUpdate) -> Result<Option<Value>> {
    self.send_body(Method::PUT, &format!("budgets/{}", update.id), update).await
  }
}
