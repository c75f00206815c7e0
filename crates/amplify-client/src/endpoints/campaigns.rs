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

//! Campaign endpoints
//!
//! The API only lists campaigns per marketer or per budget. Account-wide
//! listings enumerate the marketers first, fan out one request per marketer
//! and flatten the result.

use super::{fan_out, ids_of, impl_endpoint_base, EndpointBase};
use super::marketers::MarketerEndpoints;
use crate::client::AmplifyRateLimiter;
use crate::transport::Transport;
use amplify_core::{ListField, Result};
use amplify_models::{Campaign, CampaignUpdate, NewCampaign};
use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Campaign endpoints
pub struct CampaignEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<AmplifyRateLimiter>,
}

impl_endpoint_base!(CampaignEndpoints);

impl CampaignEndpoints {
  /// Create a new campaign endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<AmplifyRateLimiter>) -> Self {
    Self { transport, rate_limiter }
  }

  /// Get one campaign, or `None` if it does not exist
  #[instrument(skip(self))]
  pub async fn get_campaign(&self, campaign_id: &str) -> Result<Option<Campaign>> {
    self.fetch_record(&format!("campaigns/{}", campaign_id)).await
  }

  /// Campaigns of each marketer, keyed by marketer id
  ///
  /// # Arguments
  ///
  /// * `marketer_ids` - Marketers to list; each one appears in the result
  /// * `include_archived` - Also list archived campaigns
  #[instrument(skip(self, marketer_ids), fields(marketers = marketer_ids.len()))]
  pub async fn get_campaigns_per_marketer<S: AsRef<str>>(
    &self,
    marketer_ids: &[S],
    include_archived: bool,
  ) -> Result<BTreeMap<String, Vec<Campaign>>> {
    let query = vec![("include_archived".to_string(), include_archived.to_string())];
    let query = &query;

    fan_out(marketer_ids, |marketer_id| async move {
      self
        .fetch_list(&format!("marketers/{}/campaigns", marketer_id), query, ListField::Campaigns)
        .await
    })
    .await
  }

  /// Campaigns drawing from each budget, keyed by budget id
  #[instrument(skip(self, budget_ids), fields(budgets = budget_ids.len()))]
  pub async fn get_campaigns_per_budget<S: AsRef<str>>(
    &self,
    budget_ids: &[S],
  ) -> Result<BTreeMap<String, Vec<Campaign>>> {
    fan_out(budget_ids, |budget_id| async move {
      self
        .fetch_list(&format!("budgets/{}/campaigns", budget_id), &[], ListField::Campaigns)
        .await
    })
    .await
  }

  /// Every campaign across every accessible marketer
  ///
  /// Ordered the way the API lists the marketers, then the way it lists each
  /// marketer's campaigns.
  #[instrument(skip(self))]
  pub async fn get_campaigns(&self, include_archived: bool) -> Result<Vec<Campaign>> {
    let marketer_ids = MarketerEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
      .get_marketer_ids()
      .await?;
    debug!("Listing campaigns of {} marketers", marketer_ids.len());

    let mut per_marketer = self.get_campaigns_per_marketer(&marketer_ids, include_archived).await?;
    Ok(marketer_ids.iter().filter_map(|marketer_id| per_marketer.remove(marketer_id)).flatten().collect())
  }

  /// Ids of every campaign across every accessible marketer
  pub async fn get_campaign_ids(&self, include_archived: bool) -> Result<Vec<String>> {
    Ok(ids_of(&self.get_campaigns(include_archived).await?))
  }

  /// Create a campaign
  #[instrument(skip(self, campaign), fields(name = %campaign.name, budget_id = %campaign.budget_id))]
  pub async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Option<Value>> {
    self.send_body(Method::POST, "campaigns", campaign).await
  }

  /// Change the fields set in `update`
  #[instrument(skip(self, update), fields(campaign_id = %update.id))]
  pub async fn change_campaign(&self, update: &CampaignUpdate) -> Result<Option<Value>> {
    self.send_body(Method::PUT, &format!("campaigns/{}", update.id), update).await
  }
}
