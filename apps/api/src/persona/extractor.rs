//! Section Extractor: locates headed sections and key/value lines inside
//! model-authored persona text.
//!
//! The generated text has no fixed markup, so headings are recognised in
//! several dialects (see [`HeadingDialect`]). Every primitive here is total:
//! a missing section yields an empty value, never an error.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use regex::Regex;
use tracing::error;

/// One accepted spelling of a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingDialect {
    /// `**Goals**`, optionally followed by a colon.
    Bold,
    /// `**Goals:**`
    BoldInnerColon,
    /// `Goals:` as a bare label at the start of a line, optionally bulleted.
    Label,
    /// `## Goals` on a line of its own.
    Markdown,
}

use HeadingDialect::{Bold, BoldInnerColon, Label, Markdown};

/// Dialects that may open a section block. The earliest occurrence in the
/// text wins, whichever dialect it is written in.
pub const SECTION_DIALECTS: &[HeadingDialect] = &[Bold, BoldInnerColon, Label, Markdown];

/// Dialects that may prefix a single-line value.
pub const VALUE_DIALECTS: &[HeadingDialect] = &[Bold, BoldInnerColon, Label];

/// Everything that ends a section: a blank line, a line opening with bold
/// markup, or a Markdown heading line.
const SECTION_END: &str = r"\n[ \t\r]*\n|\n\*\*|\n#{1,6}[ \t]";

#[allow(clippy::expect_used)]
static SECTION_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SECTION_END).expect("valid regex"));

#[allow(clippy::expect_used)]
static BLANK_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").expect("valid regex"));

/// `-` or `*` bullet marker followed by whitespace (or nothing at all).
#[allow(clippy::expect_used)]
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*](?:\s+|$)").expect("valid regex"));

/// Text that opens with a heading has no leading prose.
#[allow(clippy::expect_used)]
static LEADING_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A(?:\*\*|#{1,6}[ \t])").expect("valid regex"));

/// Compiled patterns per trimmed header. Callers use a small fixed set of
/// headers, so this holds a handful of entries.
static HEADER_PATTERNS: LazyLock<RwLock<HashMap<String, Arc<HeaderPatterns>>>> =
    LazyLock::new(Default::default);

/// A bare `label:` only counts at the start of a line, so prose such as
/// "two goals: ..." never opens a section.
fn label_prefix(label: &str) -> String {
    format!(r"(?m:^)[ \t]*(?:[-*][ \t]+)?{label}:")
}

impl HeadingDialect {
    /// Pattern for a heading that opens a section block. `label` must already
    /// be regex-escaped.
    fn section_opener(self, label: &str) -> String {
        match self {
            Bold => format!(r"\*\*{label}\*\*:?"),
            BoldInnerColon => format!(r"\*\*{label}:\*\*"),
            Label => label_prefix(label),
            Markdown => format!(r"(?m:^)#{{1,6}}[ \t]+{label}[ \t]*:?[ \t\r]*(?m:$)"),
        }
    }

    /// Pattern for the key part of a `key: value` line, if this dialect has one.
    fn value_prefix(self, label: &str) -> Option<String> {
        match self {
            Bold => Some(format!(r"\*\*{label}\*\*:")),
            BoldInnerColon => Some(format!(r"\*\*{label}:\*\*")),
            Label => Some(label_prefix(label)),
            Markdown => None,
        }
    }
}

fn alternation(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join("|")
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            error!("Failed to compile extraction pattern: {e}");
            None
        }
    }
}

#[derive(Debug)]
struct HeaderPatterns {
    section: Option<Regex>,
    value: Option<Regex>,
}

impl HeaderPatterns {
    fn compile(header: &str) -> Self {
        let label = regex::escape(header);
        let openers = alternation(SECTION_DIALECTS.iter().map(|d| d.section_opener(&label)));
        let prefixes = alternation(VALUE_DIALECTS.iter().filter_map(|d| d.value_prefix(&label)));
        Self {
            section: compile(&format!(r"(?is)(?:{openers})(.*?)(?:{SECTION_END}|\z)")),
            value: compile(&format!(r"(?i)(?:{prefixes})[ \t]*(\S[^\n]*)")),
        }
    }
}

fn patterns_for(header: &str) -> Arc<HeaderPatterns> {
    let key = header.trim();
    if let Some(cached) = HEADER_PATTERNS
        .read()
        .ok()
        .and_then(|cache| cache.get(key).cloned())
    {
        return cached;
    }

    let compiled = Arc::new(HeaderPatterns::compile(key));
    match HEADER_PATTERNS.write() {
        Ok(mut cache) => cache.entry(key.to_string()).or_insert(compiled).clone(),
        Err(_) => compiled,
    }
}

fn first_capture(re: Option<&Regex>, text: &str) -> String {
    re.and_then(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Returns the raw, trimmed body of the section introduced by `header`, or an
/// empty string when the header does not occur.
pub fn extract_block(text: &str, header: &str) -> String {
    if header.trim().is_empty() {
        return String::new();
    }

    first_capture(patterns_for(header).section.as_ref(), text)
}

/// Returns the lines of the section introduced by `header`, with bullet
/// markers stripped and empty lines dropped. Order and duplicates are kept.
pub fn extract_list(text: &str, header: &str) -> Vec<String> {
    extract_block(text, header)
        .lines()
        .map(|line| BULLET_RE.replace(line.trim(), "").trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Returns the trimmed value of a single-line `field: value` pair, or an
/// empty string when there is none. A heading that introduces a block on the
/// following lines is not a value.
pub fn extract_value(text: &str, field: &str) -> String {
    if field.trim().is_empty() {
        return String::new();
    }

    first_capture(patterns_for(field).value.as_ref(), text)
}

/// The text before the first section boundary, trimmed. The whole text when
/// there is no boundary, and empty when the text opens with a heading.
pub fn leading_span(text: &str) -> &str {
    let text = text.trim_start();
    if LEADING_HEADING_RE.is_match(text) {
        return "";
    }
    let end = SECTION_END_RE
        .find(text)
        .map(|m| m.start())
        .unwrap_or(text.len());
    text[..end].trim()
}

/// Splits the text into blank-line separated paragraphs, trimmed, skipping
/// empty ones.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    BLANK_LINE_RE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
}
