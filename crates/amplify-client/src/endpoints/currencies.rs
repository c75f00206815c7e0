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

//! Currency endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::client::AmplifyRateLimiter;
use crate::transport::Transport;
use amplify_core::{ListField, Result};
use amplify_models::Currency;
use std::sync::Arc;

/// Currency endpoints
pub struct CurrencyEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<AmplifyRateLimiter>,
}

impl_endpoint_base!(CurrencyEndpoints);

impl CurrencyEndpoints {
  /// Create a new currency endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<AmplifyRateLimiter>) -> Self {
    Self { transport, rate_limiter }
  }

  /// Currencies supported by the platform
  pub async fn get_currencies(&self) -> Result<Vec<Currency>> {
    self.fetch_list("currencies", &[], ListField::Currencies).await
  }
}
