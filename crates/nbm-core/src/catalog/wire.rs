//! Wire format of the discovery endpoint.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Raw catalog entry as served by `/endpoints`. Bounds arrive as zero-padded
/// strings (e.g. `"0001"`) or bare integers depending on the category, so both
/// are kept as the exact token: its character count doubles as the pad width.
#[derive(Debug, Deserialize)]
pub(super) struct RawEndpoint {
    #[serde(deserialize_with = "string_or_number")]
    pub min: String,
    #[serde(deserialize_with = "string_or_number")]
    pub max: String,
    pub format: String,
}

pub(super) type RawCatalog = BTreeMap<String, RawEndpoint>;

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrNumber;

    impl<'de> Visitor<'de> for StringOrNumber {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or an integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}
