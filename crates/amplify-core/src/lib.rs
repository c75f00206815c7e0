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

pub mod config;
pub mod error;
pub mod reporting;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use reporting::{ReportInstant, ReportingWindow};
pub use types::{ListField, PerformanceDimension, ReportScope};

use chrono_tz::Tz;

/// Base URL for the Amplify API
pub const AMPLIFY_BASE_URL: &str = "https://api.outbrain.com/amplify/v0.1/";

/// Header carrying the session token on every authenticated request
pub const TOKEN_HEADER: &str = "OB-TOKEN-V1";

/// Path of the basic-auth login resource, relative to the base URL
pub const LOGIN_PATH: &str = "login";

/// Calendar zone the provider buckets performance data by
pub const REPORTING_TIMEZONE: Tz = chrono_tz::US::Eastern;

/// Page size used when walking paged resources
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Upper bound on pages fetched for a single paged resource
pub const DEFAULT_MAX_PAGES: usize = 10_000;

/// API rate limits
pub const DEFAULT_RATE_LIMIT: u32 = 600; // requests per minute
