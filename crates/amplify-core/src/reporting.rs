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

//! Reporting windows expressed in the provider's calendar
//!
//! Performance data is bucketed by calendar day in US/Eastern. Callers hand in
//! instants, possibly without an offset; naive values are read as UTC, every
//! instant is then moved into the reporting zone and only its date is kept.
//! A UTC midnight boundary therefore lands on the previous day in the report.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Wire format of the `from`/`to` query parameters
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// An instant handed in by the caller, with or without an offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportInstant {
  /// No offset attached; read as UTC
  Naive(NaiveDateTime),
  /// Offset-aware instant, held in UTC
  Aware(DateTime<Utc>),
}

impl ReportInstant {
  /// Midnight at the start of `date` in the reporting zone
  pub fn from_reporting_date(date: NaiveDate) -> Self {
    let local = date.and_time(NaiveTime::MIN);
    match crate::REPORTING_TIMEZONE.from_local_datetime(&local).earliest() {
      Some(dt) => ReportInstant::Aware(dt.with_timezone(&Utc)),
      None => ReportInstant::Naive(local),
    }
  }

  /// The instant in UTC
  pub fn to_utc(&self) -> DateTime<Utc> {
    match self {
      ReportInstant::Naive(naive) => Utc.from_utc_datetime(naive),
      ReportInstant::Aware(aware) => *aware,
    }
  }

  /// Calendar date of the instant as seen from `tz`
  pub fn date_in(&self, tz: Tz) -> NaiveDate {
    self.to_utc().with_timezone(&tz).date_naive()
  }
}

impl From<NaiveDateTime> for ReportInstant {
  fn from(naive: NaiveDateTime) -> Self {
    ReportInstant::Naive(naive)
  }
}

impl<T: TimeZone> From<DateTime<T>> for ReportInstant {
  fn from(aware: DateTime<T>) -> Self {
    ReportInstant::Aware(aware.with_timezone(&Utc))
  }
}

/// Inclusive date range sent as `from`/`to` on performance requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
  from: NaiveDate,
  to: NaiveDate,
}

impl ReportingWindow {
  /// Window between two instants, in the provider's reporting zone
  pub fn new(start: impl Into<ReportInstant>, end: impl Into<ReportInstant>) -> Self {
    Self::in_timezone(start, end, crate::REPORTING_TIMEZONE)
  }

  /// Window between two instants, as calendar dates in `tz`
  pub fn in_timezone(start: impl Into<ReportInstant>, end: impl Into<ReportInstant>, tz: Tz) -> Self {
    Self { from: start.into().date_in(tz), to: end.into().date_in(tz) }
  }

  /// Window from dates already expressed in the reporting calendar
  pub fn from_dates(from: NaiveDate, to: NaiveDate) -> Self {
    Self { from, to }
  }

  /// First reported day
  pub fn from_date(&self) -> NaiveDate {
    self.from
  }

  /// Last reported day
  pub fn to_date(&self) -> NaiveDate {
    self.to
  }

  /// `from` and `to` query parameters
  pub fn query_params(&self) -> Vec<(String, String)> {
    vec![
      ("from".to_string(), self.from.format(REPORT_DATE_FORMAT).to_string()),
      ("to".to_string(), self.to.format(REPORT_DATE_FORMAT).to_string()),
    ]
  }
}
