// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Output format every persona prompt asks for. The headings here are the ones
/// the section extractor looks for, so keep the two in step.
pub const PERSONA_FORMAT_INSTRUCTION: &str = "\
Write the persona as plain text using bold headings, in this order:
**Profession**: <single line>
**Bio**: <one short paragraph on a single line>
**Demographics**
- <one item per line>
**Personality Traits**
- <one item per line>
**Motivations**
- <one item per line>
**Pain Points**
- <one item per line>
**Goals**
- <one item per line>
**Emotions**
- <one item per line>
Leave a blank line between sections and never inside one. \
Do NOT wrap the answer in code fences. Do NOT add commentary before or after the persona.";
