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

//! Helpers shared by the record types

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Fields of a record that have no typed counterpart
pub type ExtraFields = Map<String, Value>;

/// Records that carry an entity id
pub trait Identified {
  /// The entity id
  fn id(&self) -> &str;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
  Text(String),
  Number(serde_json::Number),
}

impl From<RawId> for String {
  fn from(raw: RawId) -> Self {
    match raw {
      RawId::Text(text) => text,
      RawId::Number(number) => number.to_string(),
    }
  }
}

/// Accept an id sent either as a JSON string or a JSON number
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  RawId::deserialize(deserializer).map(String::from)
}

/// Like [`deserialize_id`] for ids that may be missing or null
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

macro_rules! impl_identified {
  ($($record:ty),+ $(,)?) => {
    $(
      impl $crate::common::Identified for $record {
        fn id(&self) -> &str {
          &self.id
        }
      }
    )+
  };
}

pub(crate) use impl_identified;

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Deserialize)]
  struct WithId {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
  }

  #[test]
  fn test_string_and_numeric_ids() {
    let text: WithId = serde_json::from_str(r#"{"id": "00f4b02153ee75f3c9dc4fc128ab0419ab"}"#).unwrap();
    let number: WithId = serde_json::from_str(r#"{"id": 12}"#).unwrap();
    assert_eq!(text.id, "00f4b02153ee75f3c9dc4fc128ab0419ab");
    assert_eq!(number.id, "12");
  }

  #[test]
  fn test_rejects_non_scalar_id() {
    let result = serde_json::from_str::<WithId>(r#"{"id": {"nested": true}}"#);
    assert!(result.is_err());
  }
}
