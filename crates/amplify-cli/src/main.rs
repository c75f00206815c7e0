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
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing::info;

use amplify_client::AmplifyClient;

mod commands;
use commands::{
  entities::{CampaignsArgs, LinksArgs},
  performance::PerformanceArgs,
};

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "amplify")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// YAML file with credentials; falls back to ./amplify.yml, then AMPLIFY_* environment variables
  #[arg(short, long, global = true, env = "AMPLIFY_CONFIG")]
  config: Option<PathBuf>,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// List every accessible marketer
  Marketers,

  /// List supported currencies
  Currencies,

  /// List budgets of the given marketers
  Budgets {
    /// Marketer ids
    #[arg(required = true)]
    marketer_ids: Vec<String>,
  },

  /// List campaigns per marketer, per budget, or across every marketer
  Campaigns(CampaignsArgs),

  /// List promoted links of the given campaigns
  Links(LinksArgs),

  /// Fetch a performance report
  Performance(PerformanceArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  let cli = Cli::parse();

  // Logs go to stderr so stdout stays valid JSON
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  let config = config::load(cli.config.as_deref())?;
  info!("Logging in as {}", config.user);
  let client = AmplifyClient::new(config).await.context("Failed to log in to Amplify")?;

  match cli.command {
    Commands::Marketers => commands::entities::marketers(&client).await?,
    Commands::Currencies => commands::entities::currencies(&client).await?,
    Commands::Budgets { marketer_ids } => commands::entities::budgets(&client, &marketer_ids).await?,
    Commands::Campaigns(args) => commands::entities::campaigns(&client, args).await?,
    Commands::Links(args) => commands::entities::links(&client, args).await?,
    Commands::Performance(args) => commands::performance::execute(&client, args).await?,
  }

  Ok(())
}
