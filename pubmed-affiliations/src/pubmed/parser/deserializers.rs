//! Custom serde deserializers for PubMed XML fields

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::result;

/// Text content of an element, with attributes and unknown child elements dropped
///
/// Titles and affiliations can carry attributes or stray markup that a plain
/// `String` field rejects, so every text node is collected and joined.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct MixedText(pub String);

impl MixedText {
    /// Trimmed text, `None` when blank
    pub fn into_non_empty(self) -> Option<String> {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for MixedText {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        struct MixedTextVisitor;

        impl<'de> Visitor<'de> for MixedTextVisitor {
            type Value = MixedText;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("element text content")
            }

            fn visit_str<E>(self, value: &str) -> result::Result<MixedText, E>
            where
                E: de::Error,
            {
                Ok(MixedText(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> result::Result<MixedText, E>
            where
                E: de::Error,
            {
                Ok(MixedText(value))
            }

            fn visit_unit<E>(self) -> result::Result<MixedText, E>
            where
                E: de::Error,
            {
                Ok(MixedText::default())
            }

            fn visit_map<M>(self, mut map: M) -> result::Result<MixedText, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut text_parts = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    if key == "$text" || key == "$value" {
                        let value: String = map.next_value()?;
                        text_parts.push(value);
                    } else {
                        // Attributes (@Version, @Label, ...) and nested elements
                        let _: de::IgnoredAny = map.next_value()?;
                    }
                }
                Ok(MixedText(text_parts.join(" ")))
            }
        }

        deserializer.deserialize_any(MixedTextVisitor)
    }
}

/// Deserialize a boolean from PubMed's "Y"/"N" attribute values
///
/// Anything other than "Y" is `false`. Pair with `#[serde(default = ...)]`
/// to choose the value used when the attribute is absent.
pub(super) fn deserialize_bool_yn<'de, D>(deserializer: D) -> result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.is_some_and(|s| s == "Y"))
}
