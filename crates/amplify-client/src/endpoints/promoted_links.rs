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

//! Promoted link endpoints

use super::{fan_out, impl_endpoint_base, EndpointBase};
use super::campaigns::CampaignEndpoints;
use crate::client::AmplifyRateLimiter;
use crate::pagination::Paginator;
use crate::transport::Transport;
use amplify_core::{ListField, Result};
use amplify_models::{NewPromotedLink, PromotedLink, PromotedLinkFilter, PromotedLinkUpdate};
use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::instrument;

/// Promoted link endpoints
pub struct PromotedLinkEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<AmplifyRateLimiter>,
  paginator: Paginator,
}

impl_endpoint_base!(PromotedLinkEndpoints);

impl PromotedLinkEndpoints {
  /// Create a new promoted link endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<AmplifyRateLimiter>, paginator: Paginator) -> Self {
    Self { transport, rate_limiter, paginator }
  }

  /// Get one promoted link, or `None` if it does not exist
  #[instrument(skip(self))]
  pub async fn get_promoted_link(&self, promoted_link_id: &str) -> Result<Option<PromotedLink>> {
    self.fetch_record(&format!("promotedLinks/{}", promoted_link_id)).await
  }

  /// Every promoted link of one campaign matching `filter`, paging through the list
  #[instrument(skip(self))]
  pub async fn get_promoted_links_for_campaign(
    &self,
    campaign_id: &str,
    filter: &PromotedLinkFilter,
  ) -> Result<Vec<PromotedLink>> {
    self
      .fetch_all_pages(
        &self.paginator,
        &format!("campaigns/{}/promotedLinks", campaign_id),
        &filter.query_params(),
        ListField::PromotedLinks,
      )
      .await
  }

  /// Promoted links of each campaign, keyed by campaign id
  ///
  /// An empty `campaign_ids` slice yields an empty map; use
  /// [`PromotedLinkEndpoints::get_all_promoted_links`] for every campaign.
  #[instrument(skip(self, campaign_ids), fields(campaigns = campaign_ids.len()))]
  pub async fn get_promoted_links_per_campaign<S: AsRef<str>>(
    &self,
    campaign_ids: &[S],
    filter: &PromotedLinkFilter,
  ) -> Result<BTreeMap<String, Vec<PromotedLink>>> {
    fan_out(campaign_ids, |campaign_id| async move {
      self.get_promoted_links_for_campaign(&campaign_id, filter).await
    })
    .await
  }

  /// Promoted links of every campaign (archived included) of every accessible marketer
  pub async fn get_all_promoted_links(
    &self,
    filter: &PromotedLinkFilter,
  ) -> Result<BTreeMap<String, Vec<PromotedLink>>> {
    let campaign_ids = CampaignEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
      .get_campaign_ids(true)
      .await?;
    self.get_promoted_links_per_campaign(&campaign_ids, filter).await
  }

  /// Create a promoted link in a campaign
  #[instrument(skip(self, link), fields(url = %link.url))]
  pub async fn create_promoted_link(&self, campaign_id: &str, link: &NewPromotedLink) -> Result<Option<Value>> {
    self.send_body(Method::POST, &format!("campaigns/{}/promotedLinks", campaign_id), link).await
  }

  /// Change the fields set in `update`
  #[instrument(skip(self, update), fields(promoted_link_id = %update.id))]
  pub async fn change_promoted_link(&self, update: &PromotedLinkUpdate) -> Result<Option<Value>> {
    self.send_body(Method::PUT, &format!("promotedLinks/{}", update.id), update).await
  }
}
