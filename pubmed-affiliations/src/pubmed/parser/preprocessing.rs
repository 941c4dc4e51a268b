//! XML cleanup applied before deserialization

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Strip inline formatting tags (`<i>`, `<sup>`, `<sub>`, `<b>`, ...) from EFetch XML
///
/// Titles and affiliations use these tags for mixed content, which the serde
/// deserializer cannot map onto a plain text field.
pub(crate) fn strip_inline_html_tags(xml: &str) -> String {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("inline tag regex is valid")
    });

    let cleaned = re.replace_all(xml, "");

    if cleaned.len() != xml.len() {
        debug!(
            original_bytes = xml.len(),
            cleaned_bytes = cleaned.len(),
            "Stripped inline HTML tags"
        );
    }

    cleaned.into_owned()
}
