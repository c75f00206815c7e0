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

//! Authenticated client and its endpoint groups

use crate::endpoints::{
  budgets::BudgetEndpoints, campaigns::CampaignEndpoints, currencies::CurrencyEndpoints,
  marketers::MarketerEndpoints, performance::PerformanceEndpoints,
  promoted_links::PromotedLinkEndpoints,
};
use crate::pagination::Paginator;
use crate::transport::Transport;
use amplify_core::{Config, Result, REPORTING_TIMEZONE};
use chrono_tz::Tz;
use governor::{
  Quota, RateLimiter,
  clock::DefaultClock,
  middleware::NoOpMiddleware,
  state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Rate limiter shared by every endpoint group of a client
pub type AmplifyRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Main Amplify API client
///
/// Logs in once on construction and exposes the API's resource families
/// through endpoint groups. The session token is fixed for the client's
/// lifetime; call [`AmplifyClient::reauthenticate`] for a client with a fresh
/// token.
///
/// # Examples
///
/// ```ignore
/// use amplify_client::{AmplifyClient, Config, ReportingWindow};
/// use chrono::{Duration, Utc};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_yaml_file("amplify.yml")?;
///     let client = AmplifyClient::new(config).await?;
///
///     let campaign_ids = client.campaigns().get_campaign_ids(false).await?;
///     let window = ReportingWindow::new(Utc::now() - Duration::days(7), Utc::now());
///     let by_publisher = client
///         .performance()
///         .campaign_performance_per_publisher(&campaign_ids, &window)
///         .await?;
///     println!("{} campaigns reported", by_publisher.len());
///
///     Ok(())
/// }
/// ```
pub struct AmplifyClient {
  config: Arc<Config>,
  transport: Arc<Transport>,
  rate_limiter: Arc<AmplifyRateLimiter>,
  paginator: Paginator,
}

impl AmplifyClient {
  /// Create a new client and log in
  ///
  /// # Errors
  ///
  /// Returns an error if the base URL is unusable, the HTTP client cannot be
  /// created, or the login does not yield a session token.
  pub async fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::login(&config).await?);
    let rate_limiter = Arc::new(Self::build_rate_limiter(config.rate_limit));

    Ok(Self { config: Arc::new(config), transport, rate_limiter, paginator: Paginator::default() })
  }

  /// Log in again and return a new client carrying the fresh token
  ///
  /// The current client is left untouched and keeps its old token.
  pub async fn reauthenticate(&self) -> Result<Self> {
    let transport = Arc::new(Transport::login(&self.config).await?);

    Ok(Self {
      config: self.config.clone(),
      transport,
      rate_limiter: self.rate_limiter.clone(),
      paginator: self.paginator,
    })
  }

  /// Use a custom paginator for paged resources
  pub fn with_paginator(mut self, paginator: Paginator) -> Self {
    self.paginator = paginator;
    self
  }

  fn build_rate_limiter(rate_limit: u32) -> AmplifyRateLimiter {
    // Ensure rate_limit is non-zero, fallback to default if invalid
    let per_minute = NonZeroU32::new(rate_limit)
      .or_else(|| NonZeroU32::new(amplify_core::DEFAULT_RATE_LIMIT))
      .unwrap_or(NonZeroU32::MIN);
    RateLimiter::direct(Quota::per_minute(per_minute))
  }

  /// Get access to marketer endpoints
  pub fn marketers(&self) -> MarketerEndpoints {
    MarketerEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Get access to budget endpoints
  pub fn budgets(&self) -> BudgetEndpoints {
    BudgetEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Get access to campaign endpoints
  pub fn campaigns(&self) -> CampaignEndpoints {
    CampaignEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Get access to promoted link endpoints
  pub fn promoted_links(&self) -> PromotedLinkEndpoints {
    PromotedLinkEndpoints::new(self.transport.clone(), self.rate_limiter.clone(), self.paginator)
  }

  /// Get access to performance reporting endpoints
  pub fn performance(&self) -> PerformanceEndpoints {
    PerformanceEndpoints::new(self.transport.clone(), self.rate_limiter.clone(), self.paginator)
  }

  /// Get access to currency endpoints
  pub fn currencies(&self) -> CurrencyEndpoints {
    CurrencyEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Authenticated transport, for resources without a typed endpoint
  pub fn transport(&self) -> &Arc<Transport> {
    &self.transport
  }

  /// Configuration the client was built from
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Zone performance reports are bucketed in
  pub fn reporting_timezone(&self) -> Tz {
    REPORTING_TIMEZONE
  }
}

impl std::fmt::Debug for AmplifyClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AmplifyClient")
      .field("transport", &self.transport)
      .field("rate_limiter", &"RateLimiter")
      .field("paginator", &self.paginator)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_zero_rate_limit_falls_back() {
    let limiter = AmplifyClient::build_rate_limiter(0);
    assert!(limiter.check().is_ok());
  }

  #[test]
  fn test_rate_limit_burst() {
    let limiter = AmplifyClient::build_rate_limiter(2);
    assert!(limiter.check().is_ok());
    assert!(limiter.check().is_ok());
    assert!(limiter.check().is_err());
  }
}
