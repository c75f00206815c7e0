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

//! Performance reporting endpoints
//!
//! Reports are scoped to a marketer or a campaign, broken down by one
//! dimension and limited to a [`ReportingWindow`] whose dates are already in
//! the provider's reporting zone. Rows are paged in through the `details`
//! field.
//!
//! Every per-parent report is keyed by row id: the date (`YYYY-MM-DD`) for
//! daily reports, otherwise the publisher, section or promoted link id. Date
//! keys sort chronologically, so a daily map iterates in day order.

use super::{fan_out, impl_endpoint_base, key_by_id, EndpointBase};
use crate::client::AmplifyRateLimiter;
use crate::pagination::Paginator;
use crate::transport::Transport;
use amplify_core::{ListField, PerformanceDimension, ReportScope, ReportingWindow, Result};
use amplify_models::{PerformanceById, PerformanceRecord};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Performance reporting endpoints
pub struct PerformanceEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<AmplifyRateLimiter>,
  paginator: Paginator,
}

impl_endpoint_base!(PerformanceEndpoints);

impl PerformanceEndpoints {
  /// Create a new performance endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<AmplifyRateLimiter>, paginator: Paginator) -> Self {
    Self { transport, rate_limiter, paginator }
  }

  /// Every row of one report for one marketer or campaign
  ///
  /// # Examples
  ///
  /// ```ignore
  /// use amplify_client::{PerformanceDimension, ReportScope, ReportingWindow};
  ///
  /// let window = ReportingWindow::new(start, end);
  /// let rows = client
  ///     .performance()
  ///     .performance(ReportScope::Campaign, PerformanceDimension::Section, "c1", &window)
  ///     .await?;
  /// ```
  #[instrument(skip(self))]
  pub async fn performance(
    &self,
    scope: ReportScope,
    dimension: PerformanceDimension,
    id: &str,
    window: &ReportingWindow,
  ) -> Result<Vec<PerformanceRecord>> {
    let path = dimension.path(scope, id);
    let rows: Vec<PerformanceRecord> = self
      .fetch_all_pages(&self.paginator, &path, &window.query_params(), ListField::Details)
      .await?;
    debug!("{} rows from {}", rows.len(), path);
    Ok(rows)
  }

  async fn performance_by_id<S: AsRef<str>>(
    &self,
    scope: ReportScope,
    dimension: PerformanceDimension,
    ids: &[S],
    window: &ReportingWindow,
  ) -> Result<BTreeMap<String, PerformanceById>> {
    fan_out(ids, |id| async move {
      let rows = self.performance(scope, dimension, &id, window).await?;
      Ok::<_, amplify_core::Error>(key_by_id(rows))
    })
    .await
  }

  /// Campaign performance per promoted link: `{campaign_id: {promoted_link_id: row}}`
  #[instrument(skip(self, campaign_ids), fields(campaigns = campaign_ids.len()))]
  pub async fn campaign_performance_per_promoted_link<S: AsRef<str>>(
    &self,
    campaign_ids: &[S],
    window: &ReportingWindow,
  ) -> Result<BTreeMap<String, PerformanceById>> {
    self
      .performance_by_id(ReportScope::Campaign, PerformanceDimension::PromotedLink, campaign_ids, window)
      .await
  }

  /// Campaign performance per publisher: `{campaign_id: {publisher_id: row}}`
  #[instrument(skip(self, campaign_ids), fields(campaigns = campaign_ids.len()))]
  pub async fn campaign_performance_per_publisher<S: AsRef<str>>(
    &self,
    campaign_ids: &[S],
    window: &ReportingWindow,
  ) -> Result<BTreeMap<String, PerformanceById>> {
    self
      .performance_by_id(ReportScope::Campaign, PerformanceDimension::Publisher, campaign_ids, window)
      .await
  }

  /// Campaign performance per section: `{campaign_id: {section_id: row}}`
  #[instrument(skip(self, campaign_ids), fields(campaigns = campaign_ids.len()))]
  pub async fn campaign_performance_per_section<S: AsRef<str>>(
    &self,
    campaign_ids: &[S],
    window: &ReportingWindow,
  ) -> Result<BTreeMap<String, PerformanceById>> {
    self
      .performance_by_id(ReportScope::Campaign, PerformanceDimension::Section, campaign_ids, window)
      .await
  }

  /// Daily campaign performance: `{campaign_id: {date: row}}`
  #[instrument(skip(self, campaign_ids), fields(campaigns = campaign_ids.len()))]
  pub async fn campaign_performance_per_day<S: AsRef<str>>(
    &self,
    campaign_ids: &[S],
    window: &ReportingWindow,
  ) -> Result<BTreeMap<String, PerformanceById>> {
    self.performance_by_id(ReportScope::Campaign, PerformanceDimension::Day, campaign_ids, window).await
  }

  /// Marketer performance per section: `{marketer_id: {section_id: row}}`
  #[instrument(skip(self, marketer_ids), fields(marketers = marketer_ids.len()))]
  pub async fn marketer_performance_per_section<S: AsRef<str>>(
    &self,
    marketer_ids: &[S],
    window: &ReportingWindow,
  ) -> Result<BTreeMap<String, PerformanceById>> {
    self
      .performance_by_id(ReportScope::Marketer, PerformanceDimension::Section, marketer_ids, window)
      .await
  }

  /// Marketer performance per publisher: `{marketer_id: {publisher_id: row}}`
  #[instrument(skip(self, marketer_ids), fields(marketers = marketer_ids.len()))]
  pub async fn marketer_performance_per_publisher<S: AsRef<str>>(
    &self,
    marketer_ids: &[S],
    window: &ReportingWindow,
  ) -> Result<BTreeMap<String, PerformanceById>> {
    self
      .performance_by_id(ReportScope::Marketer, PerformanceDimension::Publisher, marketer_ids, window)
      .await
  }

  /// Daily marketer performance: `{marketer_id: {date: row}}`
  #[instrument(skip(self, marketer_ids), fields(marketers = marketer_ids.len()))]
  pub async fn marketer_performance_per_day<S: AsRef<str>>(
    &self,
    marketer_ids: &[S],
    window: &ReportingWindow,
  ) -> Result<BTreeMap<String, PerformanceById>> {
    self.performance_by_id(ReportScope::Marketer, PerformanceDimension::Day, marketer_ids, window).await
  }
}
