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

mod common;

use amplify_client::{Paginator, PerformanceDimension, ReportScope, ReportingWindow};
use chrono::{NaiveDate, TimeZone, Utc};
use common::logged_in_client;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn march(day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

/// One page of `rows` at offset 0, then the empty page that ends the walk
async fn mount_report(server: &MockServer, report_path: &str, rows: serde_json::Value) {
  let count = rows.as_array().map_or(0, Vec::len);
  Mock::given(method("GET"))
    .and(path(report_path))
    .and(query_param("offset", "0"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "details": rows })))
    .expect(1)
    .mount(server)
    .await;
  if count == 0 {
    return;
  }
  Mock::given(method("GET"))
    .and(path(report_path))
    .and(query_param("offset", count.to_string()))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "details": [] })))
    .expect(1)
    .mount(server)
    .await;
}

#[tokio::test]
async fn test_campaign_performance_per_publisher() {
  let server = MockServer::start().await;
  let client = logged_in_client(&server).await.with_paginator(Paginator::new(2));

  Mock::given(method("GET"))
    .and(path("/campaigns/c1/performanceByPublisher/"))
    .and(query_param("from", "2024-03-01"))
    .and(query_param("to", "2024-03-07"))
    .and(query_param("offset", "0"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "details": [
        { "id": "pub-a", "name": "Daily News", "metrics": { "clicks": 10, "spend": 3.5 } },
        { "id": "pub-b", "name": "Sports Hub", "metrics": { "clicks": 4, "spend": 1.2 } }
      ],
      "totalDetails": 2
    })))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/campaigns/c1/performanceByPublisher/"))
    .and(query_param("offset", "2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "details": [] })))
    .expect(1)
    .mount(&server)
    .await;

  let window = ReportingWindow::from_dates(march(1), march(7));
  let report = client.performance().campaign_performance_per_publisher(&["c1"], &window).await.unwrap();

  let by_publisher = &report["c1"];
  assert_eq!(by_publisher.keys().collect::<Vec<_>>(), vec!["pub-a", "pub-b"]);
  assert_eq!(by_publisher["pub-a"].metric("clicks"), Some(10.0));
  assert_eq!(by_publisher["pub-b"].metric("spend"), Some(1.2));
  assert_eq!(by_publisher["pub-a"].fields["name"], json!("Daily News"));
}

#[tokio::test]
async fn test_utc_midnight_window_lands_on_previous_eastern_day() {
  let server = MockServer::start().await;
  let client = logged_in_client(&server).await;

  Mock::given(method("GET"))
    .and(path("/marketers/m1/performanceByDay/"))
    .and(query_param("from", "2024-03-09"))
    .and(query_param("to", "2024-03-10"))
    .and(query_param("offset", "0"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "details": [
        { "id": "2024-03-09", "metrics": { "impressions": 1200 } },
        { "id": "2024-03-10", "metrics": { "impressions": 900 } }
      ]
    })))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/marketers/m1/performanceByDay/"))
    .and(query_param("offset", "2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "details": [] })))
    .mount(&server)
    .await;

  let start = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
  let end = Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap();
  let window = ReportingWindow::new(start, end);

  let report = client.performance().marketer_performance_per_day(&["m1"], &window).await.unwrap();

  assert_eq!(report["m1"].keys().collect::<Vec<_>>(), vec!["2024-03-09", "2024-03-10"]);
  assert_eq!(report["m1"]["2024-03-10"].metric("impressions"), Some(900.0));
}

#[tokio::test]
async fn test_generic_report_and_empty_results() {
  let server = MockServer::start().await;
  let client = logged_in_client(&server).await;

  Mock::given(method("GET"))
    .and(path("/campaigns/c1/performanceByPromotedLink/"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "details": [] })))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/marketers/m1/performanceBySection/"))
    .respond_with(ResponseTemplate::new(404))
    .expect(1)
    .mount(&server)
    .await;

  let window = ReportingWindow::from_dates(march(1), march(2));
  let rows = client
    .performance()
    .performance(ReportScope::Campaign, PerformanceDimension::PromotedLink, "c1", &window)
    .await
    .unwrap();
  assert!(rows.is_empty());

  let by_section = client.performance().marketer_performance_per_section(&["m1"], &window).await.unwrap();
  assert!(by_section["m1"].is_empty());
}

#[tokio::test]
async fn test_campaign_performance_per_day_is_keyed_by_date() {
  let server = MockServer::start().await;
  let client = logged_in_client(&server).await;

  mount_report(
    &server,
    "/campaigns/c1/performanceByDay/",
    json!([
      { "id": "2024-03-02", "metrics": { "clicks": 7 } },
      { "id": "2024-03-01", "metrics": { "clicks": 5 } }
    ]),
  )
  .await;
  mount_report(&server, "/campaigns/c2/performanceByDay/", json!([{ "id": "2024-03-01", "metrics": { "clicks": 1 } }]))
    .await;

  let window = ReportingWindow::from_dates(march(1), march(2));
  let report = client.performance().campaign_performance_per_day(&["c1", "c2"], &window).await.unwrap();

  assert_eq!(report.keys().collect::<Vec<_>>(), vec!["c1", "c2"]);
  assert_eq!(report["c1"].keys().collect::<Vec<_>>(), vec!["2024-03-01", "2024-03-02"]);
  assert_eq!(report["c1"]["2024-03-02"].metric("clicks"), Some(7.0));
  assert_eq!(report["c2"]["2024-03-01"].metric("clicks"), Some(1.0));
}

#[tokio::test]
async fn test_campaign_performance_per_section() {
  let server = MockServer::start().await;
  let client = logged_in_client(&server).await;

  mount_report(
    &server,
    "/campaigns/c1/performanceBySection/",
    json!([
      { "id": "sec-1", "name": "Front Page", "metrics": { "impressions": 300 } },
      { "id": 42, "name": "Sidebar", "metrics": { "impressions": 80 } }
    ]),
  )
  .await;

  let window = ReportingWindow::from_dates(march(1), march(7));
  let report = client.performance().campaign_performance_per_section(&["c1"], &window).await.unwrap();

  let by_section = &report["c1"];
  assert_eq!(by_section.keys().collect::<Vec<_>>(), vec!["42", "sec-1"]);
  assert_eq!(by_section["sec-1"].metric("impressions"), Some(300.0));
  assert_eq!(by_section["42"].fields["name"], json!("Sidebar"));
}

#[tokio::test]
async fn test_campaign_performance_per_promoted_link() {
  let server = MockServer::start().await;
  let client = logged_in_client(&server).await;

  mount_report(
    &server,
    "/campaigns/c1/performanceByPromotedLink/",
    json!([
      { "id": "p1", "metrics": { "clicks": 12, "spend": 4.0 } },
      { "id": "p2", "metrics": { "clicks": 0, "spend": 0.0 } }
    ]),
  )
  .await;

  let window = ReportingWindow::from_dates(march(1), march(7));
  let report = client.performance().campaign_performance_per_promoted_link(&["c1"], &window).await.unwrap();

  assert_eq!(report["c1"].keys().collect::<Vec<_>>(), vec!["p1", "p2"]);
  assert_eq!(report["c1"]["p1"].metric("spend"), Some(4.0));
  assert_eq!(report["c1"]["p2"].metric("clicks"), Some(0.0));
}

#[tokio::test]
async fn test_marketer_performance_per_publisher() {
  let server = MockServer::start().await;
  let client = logged_in_client(&server).await;

  mount_report(
    &server,
    "/marketers/m1/performanceByPublisher/",
    json!([{ "id": "pub-a", "name": "Daily News", "metrics": { "spend": 9.75 } }]),
  )
  .await;
  mount_report(&server, "/marketers/m2/performanceByPublisher/", json!([])).await;

  let window = ReportingWindow::from_dates(march(1), march(7));
  let report = client.performance().marketer_performance_per_publisher(&["m1", "m2"], &window).await.unwrap();

  assert_eq!(report.keys().collect::<Vec<_>>(), vec!["m1", "m2"]);
  assert_eq!(report["m1"]["pub-a"].metric("spend"), Some(9.75));
  assert!(report["m2"].is_empty());
}
