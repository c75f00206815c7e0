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

use amplify_client::{AmplifyClient, Error};
use common::{config_for, logged_in_client, PASSWORD, TOKEN, USER};
use serde_json::json;
use wiremock::matchers::{basic_auth, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_token_is_sent_on_every_request() {
  let server = MockServer::start().await;
  let client = logged_in_client(&server).await;

  Mock::given(method("GET"))
    .and(path("/marketers"))
    .and(header("OB-TOKEN-V1", TOKEN))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "marketers": [{ "id": "m1", "name": "Acme", "enabled": true }]
    })))
    .expect(2)
    .mount(&server)
    .await;

  let marketers = client.marketers().get_marketers().await.unwrap();
  assert_eq!(marketers.len(), 1);
  assert_eq!(marketers[0].name.as_deref(), Some("Acme"));

  let ids = client.marketers().get_marketer_ids().await.unwrap();
  assert_eq!(ids, vec!["m1"]);
  assert_eq!(client.transport().token(), TOKEN);
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
  let server = MockServer::start().await;
  common::mount_login(&server).await;

  let mut config = config_for(&server);
  config.base_url = format!("{}/", server.uri());
  let client = AmplifyClient::new(config).await.unwrap();

  assert_eq!(client.transport().base_url(), format!("{}/", server.uri()));
}

#[tokio::test]
async fn test_rejected_credentials() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/login"))
    .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
    .mount(&server)
    .await;

  let result = AmplifyClient::new(config_for(&server)).await;
  assert!(matches!(result, Err(Error::Authentication(_))));
}

#[tokio::test]
async fn test_login_without_token_field() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/login"))
    .and(basic_auth(USER, PASSWORD))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
    .mount(&server)
    .await;

  let err = AmplifyClient::new(config_for(&server)).await.unwrap_err();
  assert!(matches!(err, Error::Authentication(ref msg) if msg.contains("OB-TOKEN-V1")));
}

#[tokio::test]
async fn test_login_with_non_json_body() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/login"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
    .mount(&server)
    .await;

  let result = AmplifyClient::new(config_for(&server)).await;
  assert!(matches!(result, Err(Error::MalformedResponse(_))));
}

#[tokio::test]
async fn test_reauthenticate_returns_client_with_fresh_token() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/login"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "OB-TOKEN-V1": "first" })))
    .up_to_n_times(1)
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/login"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "OB-TOKEN-V1": "second" })))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/currencies"))
    .and(header("OB-TOKEN-V1", "second"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "currencies": [{ "id": "USD", "name": "US Dollar", "symbol": "$" }]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let client = AmplifyClient::new(config_for(&server)).await.unwrap();
  let fresh = client.reauthenticate().await.unwrap();

  assert_eq!(client.transport().token(), "first");
  assert_eq!(fresh.transport().token(), "second");

  let currencies = fresh.currencies().get_currencies().await.unwrap();
  assert_eq!(currencies[0].symbol.as_deref(), Some("$"));
}
