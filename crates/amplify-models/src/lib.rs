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

//! # amplify-models
//!
//! Data models for Outbrain Amplify API responses and request bodies.
//!
//! Response records type the fields callers commonly read and keep every other
//! field in a flattened `extra` map, so nothing the API sends is dropped and a
//! new field never breaks decoding. Only `id` is required.
//!
//! Request bodies are plain structs whose optional fields are skipped when
//! unset, so an update only carries what the caller supplied.
//!
//! ## Usage
//!
//! ```ignore
//! use amplify_models::{Campaign, CampaignUpdate};
//!
//! let campaign: Campaign = serde_json::from_str(&response_json)?;
//! let pause = CampaignUpdate { enabled: Some(false), ..CampaignUpdate::new(&campaign.id) };
//! ```

#![warn(clippy::all)]

pub mod budget;
pub mod campaign;
pub mod common;
pub mod currency;
pub mod marketer;
pub mod performance;
pub mod promoted_link;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use budget::*;
pub use campaign::*;
pub use currency::*;
pub use marketer::*;
pub use performance::*;
pub use promoted_link::*;
