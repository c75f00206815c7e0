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
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use clap::{Args, ValueEnum};
use std::collections::BTreeMap;
use tracing::info;

use amplify_client::{AmplifyClient, PerformanceDimension, ReportInstant, ReportScope, ReportingWindow};

use super::print_json;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeArg {
  Campaign,
  Marketer,
}

impl From<ScopeArg> for ReportScope {
  fn from(scope: ScopeArg) -> Self {
    match scope {
      ScopeArg::Campaign => ReportScope::Campaign,
      ScopeArg::Marketer => ReportScope::Marketer,
    }
  }
}

#[derive(Args, Debug)]
pub struct PerformanceArgs {
  /// Whether the ids are campaigns or marketers
  #[arg(value_enum)]
  scope: ScopeArg,

  /// Breakdown: day, publisher, section or promoted-link
  #[arg(value_parser = parse_dimension)]
  dimension: PerformanceDimension,

  /// Campaign or marketer ids
  #[arg(required = true)]
  ids: Vec<String>,

  /// Start of the window: YYYY-MM-DD, RFC 3339, or a naive datetime read as UTC
  #[arg(long, value_parser = parse_instant)]
  from: ReportInstant,

  /// End of the window, same formats as --from
  #[arg(long, value_parser = parse_instant)]
  to: ReportInstant,
}

fn parse_dimension(s: &str) -> std::result::Result<PerformanceDimension, String> {
  PerformanceDimension::from_str(s)
    .ok_or_else(|| format!("unknown dimension '{}', expected day, publisher, section or promoted-link", s))
}

/// A bare date is taken as that day in the reporting calendar
fn parse_instant(s: &str) -> std::result::Result<ReportInstant, String> {
  if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
    return Ok(ReportInstant::from_reporting_date(date));
  }
  if let Ok(aware) = DateTime::parse_from_rfc3339(s) {
    return Ok(aware.into());
  }
  NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
    .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
    .map(ReportInstant::from)
    .map_err(|_| format!("invalid date or datetime '{}'", s))
}

pub async fn execute(client: &AmplifyClient, args: PerformanceArgs) -> Result<()> {
  let scope = ReportScope::from(args.scope);
  let window = ReportingWindow::new(args.from, args.to);
  info!("{} {} report from {} to {}", scope, args.dimension, window.from_date(), window.to_date());

  let performance = client.performance();
  let mut report = BTreeMap::new();
  for id in &args.ids {
    let rows = performance
      .performance(scope, args.dimension, id, &window)
      .await
      .with_context(|| format!("Failed to fetch {} for {}", args.dimension, id))?;
    report.insert(id.clone(), rows);
  }

  print_json(&report)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bare_date_keeps_its_day() {
    let instant = parse_instant("2024-03-10").unwrap();
    let window = ReportingWindow::new(instant, instant);
    assert_eq!(window.from_date(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
  }

  #[test]
  fn test_utc_datetimes_shift_to_reporting_day() {
    let aware = parse_instant("2024-03-10T00:00:00Z").unwrap();
    let naive = parse_instant("2024-03-10T00:00:00").unwrap();
    let window = ReportingWindow::new(aware, naive);

    assert_eq!(window.from_date(), NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    assert_eq!(window.from_date(), window.to_date());
  }

  #[test]
  fn test_rejects_garbage() {
    assert!(parse_instant("last tuesday").is_err());
    assert!(parse_dimension("hourly").is_err());
    assert_eq!(parse_dimension("promoted-link"), Ok(PerformanceDimension::PromotedLink));
  }
}
