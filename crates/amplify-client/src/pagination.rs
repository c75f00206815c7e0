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

//! Offset-based paging over list resources

use amplify_core::{Error, Result, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
use std::future::Future;
use tracing::{debug, warn};

/// Walks a list resource page by page until it comes back empty
///
/// Each request asks for `page_size` items starting at `offset`; the offset
/// then advances by the number of items actually received. Paging stops at
/// the first empty page. A resource that never returns an empty page fails
/// with [`Error::PageLimitExceeded`] once `max_pages` pages were consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
  page_size: usize,
  max_pages: usize,
}

impl Paginator {
  /// Paginator with the given page size and the default page ceiling
  ///
  /// A page size of zero is treated as one.
  pub fn new(page_size: usize) -> Self {
    Self { page_size: page_size.max(1), max_pages: DEFAULT_MAX_PAGES }
  }

  /// Override the maximum number of non-empty pages fetched
  pub fn with_max_pages(mut self, max_pages: usize) -> Self {
    self.max_pages = max_pages;
    self
  }

  /// Items requested per page
  pub fn page_size(&self) -> usize {
    self.page_size
  }

  /// Maximum number of non-empty pages fetched
  pub fn max_pages(&self) -> usize {
    self.max_pages
  }

  /// Collect every item, in order, by calling `fetch_page(limit, offset)`
  pub async fn collect<T, F, Fut>(&self, mut fetch_page: F) -> Result<Vec<T>>
  where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
  {
    let mut items = Vec::new();
    let mut offset = 0;

    for _ in 0..self.max_pages {
      let page = fetch_page(self.page_size, offset).await?;
      if page.is_empty() {
        debug!("Paging finished with {} items", items.len());
        return Ok(items);
      }
      offset += page.len();
      items.extend(page);
    }

    warn!("No empty page after {} pages ({} items)", self.max_pages, items.len());
    Err(Error::PageLimitExceeded { pages: self.max_pages })
  }
}

impl Default for Paginator {
  fn default() -> Self {
    Self::new(DEFAULT_PAGE_SIZE)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  async fn run(paginator: Paginator, pages: Vec<Vec<u32>>) -> (Result<Vec<u32>>, Vec<(usize, usize)>) {
    let mut calls = Vec::new();
    let result = paginator
      .collect(|limit, offset| {
        calls.push((limit, offset));
        let page = pages.get(calls.len() - 1).cloned().unwrap_or_default();
        async move { Ok(page) }
      })
      .await;
    (result, calls)
  }

  #[tokio::test]
  async fn test_concatenates_pages_in_order() {
    let (result, calls) = run(Paginator::new(2), vec![vec![1, 2], vec![3], vec![]]).await;
    assert_eq!(result.unwrap(), vec![1, 2, 3]);
    assert_eq!(calls, vec![(2, 0), (2, 2), (2, 3)]);
  }

  #[tokio::test]
  async fn test_empty_first_page() {
    let (result, calls) = run(Paginator::new(50), vec![vec![]]).await;
    assert!(result.unwrap().is_empty());
    assert_eq!(calls, vec![(50, 0)]);
  }

  #[tokio::test]
  async fn test_offset_follows_items_received() {
    // a server may hand back fewer items than asked for without being done
    let (result, calls) = run(Paginator::new(3), vec![vec![1], vec![2, 3, 4], vec![5, 6], vec![]]).await;
    assert_eq!(result.unwrap(), vec![1, 2, 3, 4, 5, 6]);
    let offsets: Vec<usize> = calls.iter().map(|(_, offset)| *offset).collect();
    assert_eq!(offsets, vec![0, 1, 4, 6]);
  }

  #[tokio::test]
  async fn test_page_ceiling() {
    let mut calls = 0;
    let result: Result<Vec<u32>> = Paginator::new(2)
      .with_max_pages(5)
      .collect(|_, _| {
        calls += 1;
        async { Ok(vec![7, 7]) }
      })
      .await;

    assert!(matches!(result, Err(Error::PageLimitExceeded { pages: 5 })));
    assert_eq!(calls, 5);
  }

  #[tokio::test]
  async fn test_error_stops_paging() {
    let mut calls = 0;
    let result: Result<Vec<u32>> = Paginator::new(2)
      .collect(|_, offset| {
        calls += 1;
        async move {
          if offset == 0 {
            Ok(vec![1, 2])
          } else {
            Err(Error::Request { status: 500, body: String::new() })
          }
        }
      })
      .await;

    assert!(matches!(result, Err(Error::Request { status: 500, .. })));
    assert_eq!(calls, 2);
  }

  #[test]
  fn test_zero_page_size() {
    assert_eq!(Paginator::new(0).page_size(), 1);
    assert_eq!(Paginator::default().page_size(), DEFAULT_PAGE_SIZE);
  }
}
