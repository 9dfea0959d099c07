//! Bio Resolver: picks the biographical summary out of generated text.
//!
//! Generated prose sometimes opens with an explicit `Bio:` label and
//! sometimes just starts narrating, so the bio comes from the first strategy
//! in [`STRATEGIES`] that yields a non-empty result.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::persona::extractor::{extract_block, extract_value, leading_span, paragraphs};

/// Headings that explicitly introduce a bio, highest priority first.
pub const BIO_HEADINGS: &[&str] = &["Bio", "Background", "Summary"];

/// A colon followed by whitespace marks a `key: value` line rather than prose.
#[allow(clippy::expect_used)]
static KEY_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":\s").expect("valid regex"));

type BioStrategy = fn(&str) -> Option<String>;

/// Ordered fallback chain, evaluated until one strategy produces a bio.
const STRATEGIES: &[(&str, BioStrategy)] = &[
    ("explicit_heading", from_explicit_heading),
    ("leading_span", from_leading_span),
    ("first_paragraph", from_first_paragraph),
];

/// Resolves the bio for `text`; empty when every strategy comes up short.
pub fn resolve_bio(text: &str) -> String {
    STRATEGIES
        .iter()
        .find_map(|(name, strategy)| {
            let bio = strategy(text).filter(|bio| !bio.is_empty())?;
            trace!(strategy = name, "Bio resolved");
            Some(bio)
        })
        .unwrap_or_default()
}

/// `Bio: ...` style value, or the block under a `**Bio**` heading.
fn from_explicit_heading(text: &str) -> Option<String> {
    BIO_HEADINGS.iter().find_map(|heading| {
        let value = extract_value(text, heading);
        if !value.is_empty() {
            return Some(value);
        }
        let block = extract_block(text, heading);
        (!block.is_empty()).then_some(block)
    })
}

/// Text before the first heading or blank line, unless it reads like a label.
fn from_leading_span(text: &str) -> Option<String> {
    let span = leading_span(text);
    if span.is_empty() || KEY_VALUE_RE.is_match(span) {
        return None;
    }
    Some(span.to_string())
}

/// Last resort: the first non-empty paragraph, accepted as-is.
fn from_first_paragraph(text: &str) -> Option<String> {
    paragraphs(text).next().map(str::to_string)
}
