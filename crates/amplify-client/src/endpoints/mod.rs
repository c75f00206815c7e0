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

//! Endpoint groups, one per resource family
//!
//! Every group shares the client's transport and rate limiter. The request
//! helpers below are provided by [`EndpointBase`] so that each group only
//! builds paths and query parameters.

pub mod budgets;
pub mod campaigns;
pub mod currencies;
pub mod marketers;
pub mod performance;
pub mod promoted_links;

use crate::pagination::Paginator;
use crate::transport::Transport;
use amplify_core::{Error, ListField, Result};
use amplify_models::Identified;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub(crate) trait EndpointBase {
  /// Wait for rate limit before making a request
  async fn wait_for_rate_limit(&self) -> Result<()>;

  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;

  /// Fetch and decode a single record; `None` when the API answers 404
  async fn fetch_record<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
    self.wait_for_rate_limit().await?;
    match self.transport().get(path, &[]).await? {
      Some(body) => decode_record(body, path).map(Some),
      None => Ok(None),
    }
  }

  /// Fetch one response and unwrap the array held in `field`
  async fn fetch_list<T: DeserializeOwned>(
    &self,
    path: &str,
    query: &[(String, String)],
    field: ListField,
  ) -> Result<Vec<T>> {
    self.wait_for_rate_limit().await?;
    let body = self.transport().get(path, query).await?;
    extract_list(body, field)
  }

  /// Page through `path` with `limit`/`offset` and gather every item of `field`
  async fn fetch_all_pages<T: DeserializeOwned>(
    &self,
    paginator: &Paginator,
    path: &str,
    query: &[(String, String)],
    field: ListField,
  ) -> Result<Vec<T>> {
    paginator
      .collect(|limit, offset| async move {
        let mut page_query = query.to_vec();
        page_query.push(("limit".to_string(), limit.to_string()));
        page_query.push(("offset".to_string(), offset.to_string()));
        self.fetch_list(path, &page_query, field).await
      })
      .await
  }

  /// Serialize `body` and send it with `method`, returning the decoded response verbatim
  async fn send_body<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<Option<Value>> {
    self.wait_for_rate_limit().await?;
    let body = serde_json::to_value(body)?;
    self.transport().execute(method, path, &[], Some(&body)).await
  }
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl $crate::endpoints::EndpointBase for $struct_name {
      async fn wait_for_rate_limit(&self) -> amplify_core::Result<()> {
        self.rate_limiter.until_ready().await;
        Ok(())
      }

      fn transport(&self) -> &std::sync::Arc<$crate::transport::Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Decode a record body, reporting shape mismatches as malformed responses
pub(crate) fn decode_record<T: DeserializeOwned>(body: Value, path: &str) -> Result<T> {
  serde_json::from_value(body)
    .map_err(|e| Error::MalformedResponse(format!("Unexpected record at {}: {}", path, e)))
}

/// Unwrap the array held in `field` of a response body
///
/// A missing body (404), a null body or an absent field yield an empty list.
pub(crate) fn extract_list<T: DeserializeOwned>(body: Option<Value>, field: ListField) -> Result<Vec<T>> {
  let mut body = match body {
    None | Some(Value::Null) => return Ok(Vec::new()),
    Some(body) => body,
  };

  let Some(object) = body.as_object_mut() else {
    return Err(Error::MalformedResponse(format!("Expected an object holding `{}`", field)));
  };

  match object.remove(field.as_str()) {
    None | Some(Value::Null) => Ok(Vec::new()),
    Some(Value::Array(items)) => items
      .into_iter()
      .map(|item| {
        serde_json::from_value(item)
          .map_err(|e| Error::MalformedResponse(format!("Unexpected item in `{}`: {}", field, e)))
      })
      .collect(),
    Some(other) => Err(Error::MalformedResponse(format!(
      "`{}` is not an array: {}",
      field,
      other.to_string().chars().take(200).collect::<String>()
    ))),
  }
}

/// Ids of `records`, in order
pub(crate) fn ids_of<T: Identified>(records: &[T]) -> Vec<String> {
  records.iter().map(|record| record.id().to_string()).collect()
}

/// Key records by their own id; a later record replaces an earlier one with the same id
pub(crate) fn key_by_id<T: Identified>(records: Vec<T>) -> BTreeMap<String, T> {
  records.into_iter().map(|record| (record.id().to_string(), record)).collect()
}

/// Issue one fetch per parent id, in order, and key the results by that id
///
/// The mapping is all-or-nothing: the first failing parent aborts the whole
/// call and nothing collected so far is returned.
pub(crate) async fn fan_out<S, T, F, Fut>(parent_ids: &[S], mut fetch: F) -> Result<BTreeMap<String, T>>
where
  S: AsRef<str>,
  F: FnMut(String) -> Fut,
  Fut: Future<Output = Result<T>>,
{
  let mut by_parent = BTreeMap::new();
  for parent_id in parent_ids {
    let parent_id = parent_id.as_ref().to_string();
    let children = fetch(parent_id.clone()).await?;
    by_parent.insert(parent_id, children);
  }
  Ok(by_parent)
}
