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

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use amplify_client::{AmplifyClient, PromotedLinkFilter};

use super::print_json;

#[derive(Args, Debug)]
pub struct CampaignsArgs {
  /// Only campaigns of these marketers (comma-separated)
  #[arg(short, long, value_delimiter = ',', conflicts_with = "budget")]
  marketer: Vec<String>,

  /// Only campaigns drawing from these budgets (comma-separated)
  #[arg(short, long, value_delimiter = ',')]
  budget: Vec<String>,

  /// Leave archived campaigns out
  #[arg(long)]
  exclude_archived: bool,
}

#[derive(Args, Debug)]
pub struct LinksArgs {
  /// Campaign ids
  #[arg(required = true)]
  campaign_ids: Vec<String>,

  /// Only enabled (true) or disabled (false) links
  #[arg(long)]
  enabled: Option<bool>,

  /// Only links in these review statuses, e.g. APPROVED,PENDING
  #[arg(short, long = "status", value_delimiter = ',')]
  statuses: Vec<String>,
}

impl LinksArgs {
  fn filter(&self) -> PromotedLinkFilter {
    PromotedLinkFilter { enabled: self.enabled, statuses: self.statuses.clone() }
  }
}

pub async fn marketers(client: &AmplifyClient) -> Result<()> {
  let marketers = client.marketers().get_marketers().await.context("Failed to list marketers")?;
  info!("{} marketers", marketers.len());
  print_json(&marketers)
}

pub async fn currencies(client: &AmplifyClient) -> Result<()> {
  let currencies = client.currencies().get_currencies().await.context("Failed to list currencies")?;
  print_json(&currencies)
}

pub async fn budgets(client: &AmplifyClient, marketer_ids: &[String]) -> Result<()> {
  let budgets = client
    .budgets()
    .get_budgets_per_marketer(marketer_ids)
    .await
    .context("Failed to list budgets")?;
  print_json(&budgets)
}

pub async fn campaigns(client: &AmplifyClient, args: CampaignsArgs) -> Result<()> {
  let include_archived = !args.exclude_archived;
  let campaigns = client.campaigns();

  if !args.marketer.is_empty() {
    let per_marketer = campaigns
      .get_campaigns_per_marketer(&args.marketer, include_archived)
      .await
      .context("Failed to list campaigns per marketer")?;
    print_json(&per_marketer)
  } else if !args.budget.is_empty() {
    let per_budget =
      campaigns.get_campaigns_per_budget(&args.budget).await.context("Failed to list campaigns per budget")?;
    print_json(&per_budget)
  } else {
    let all = campaigns.get_campaigns(include_archived).await.context("Failed to list campaigns")?;
    info!("{} campaigns", all.len());
    print_json(&all)
  }
}

pub async fn links(client: &AmplifyClient, args: LinksArgs) -> Result<()> {
  let per_campaign = client
    .promoted_links()
    .get_promoted_links_per_campaign(&args.campaign_ids, &args.filter())
    .await
    .context("Failed to list promoted links")?;
  print_json(&per_campaign)
}
