//! Export adapters: JSON and Markdown renderings of a persona.
//!
//! The Markdown layout uses `## <Title>` headings and `- ` bullets, which the
//! section extractor reads back, so an exported persona can be re-parsed.

use serde::Deserialize;

use crate::persona::models::{ListSection, Persona};

/// Order of list sections in the Markdown export.
const MARKDOWN_SECTION_ORDER: [ListSection; 6] = [
    ListSection::PersonalityTraits,
    ListSection::Goals,
    ListSection::Motivations,
    ListSection::PainPoints,
    ListSection::Emotions,
    ListSection::Demographics,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    #[serde(alias = "md")]
    Markdown,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

/// Field-for-field JSON, pretty printed.
pub fn to_json(persona: &Persona) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(persona)
}

/// Markdown document: name as title, age and profession as bold key lines,
/// the bio, then one bulleted section per non-empty list.
pub fn to_markdown(persona: &Persona) -> String {
    let mut md = format!("# {}\n\n", persona.name);
    md.push_str(&format!("**Age:** {}\n", persona.age));
    md.push_str(&format!("**Profession:** {}\n\n", persona.profession));
    md.push_str(&format!("## Bio\n{}\n\n", persona.bio));

    for section in MARKDOWN_SECTION_ORDER {
        let items = section.items(persona);
        if items.is_empty() {
            continue;
        }
        md.push_str(&format!("## {}\n", section.header()));
        for item in items {
            md.push_str(&format!("- {item}\n"));
        }
        md.push('\n');
    }

    md
}

/// Download filename: the lowercased name with whitespace runs turned into
/// `-` and anything unsafe for a header dropped.
pub fn export_filename(name: &str, format: ExportFormat) -> String {
    let slug = name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    let slug = if slug.is_empty() { "persona".to_string() } else { slug };
    format!("{slug}.{}", format.extension())
}
