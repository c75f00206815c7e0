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

//! # amplify-client
//!
//! An async client for the Outbrain Amplify advertising API.
//!
//! ## Features
//!
//! - **Session login**: Basic-auth login once per client, token sent on every call
//! - **Typed resources**: Marketers, budgets, campaigns, promoted links and currencies
//! - **Paging**: Offset-based paging for promoted links and performance reports
//! - **Reporting windows**: Date ranges normalized to the provider's US/Eastern calendar
//! - **Rate Limiting**: Client-side request pacing shared by every endpoint group
//!
//! ## Usage
//!
//! ```rust,no_run
//! use amplify_client::{AmplifyClient, Config, PromotedLinkFilter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = AmplifyClient::new(config).await?;
//!
//!     let marketers = client.marketers().get_marketers().await?;
//!     println!("{} marketers", marketers.len());
//!
//!     let campaign_ids = client.campaigns().get_campaign_ids(false).await?;
//!     let links = client
//!         .promoted_links()
//!         .get_promoted_links_per_campaign(&campaign_ids, &PromotedLinkFilter::default())
//!         .await?;
//!     println!("{} campaigns with links", links.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, amplify_core::Error>`. A single resource that
//! does not exist comes back as `Ok(None)` rather than an error; collections
//! that do not exist come back empty.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod pagination;
pub mod transport;

// Re-export the main client and common types
pub use amplify_core::{
  Config, Error, ListField, PerformanceDimension, ReportInstant, ReportScope, ReportingWindow, Result,
};
pub use amplify_models::*;
pub use client::{AmplifyClient, AmplifyRateLimiter};
pub use pagination::Paginator;
pub use transport::Transport;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  budgets::BudgetEndpoints, campaigns::CampaignEndpoints, currencies::CurrencyEndpoints,
  marketers::MarketerEndpoints, performance::PerformanceEndpoints,
  promoted_links::PromotedLinkEndpoints,
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_defaults() {
    let config = Config::new("user", "secret", amplify_core::AMPLIFY_BASE_URL);
    assert!(config.verify);
    assert_eq!(config.rate_limit, amplify_core::DEFAULT_RATE_LIMIT);
    assert_eq!(config.normalized_base_url().unwrap(), amplify_core::AMPLIFY_BASE_URL);
  }
}
