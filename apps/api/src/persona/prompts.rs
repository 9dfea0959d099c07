// Persona generation and enrichment prompt templates.

use crate::llm_client::prompts::PERSONA_FORMAT_INSTRUCTION;

pub const GENERATE_PERSONA_SYSTEM: &str = "\
You are a persona generation expert. \
You write vivid, specific and internally consistent user personas.";

/// Replace `{name}`, `{age}`, `{prompt}` and `{format}` before sending.
const GENERATE_PERSONA_PROMPT_TEMPLATE: &str = "\
Please generate a detailed user persona based on the following information.

Name: {name}
Age: {age}
Description: {prompt}

Include details such as a bio, demographics, motivations, pain points, and goals. \
Ensure you use the provided Name and Age in your response.

{format}";

pub const ENRICH_PERSONA_SYSTEM: &str = "\
You are a persona enrichment expert. \
You update existing personas without losing any of their established details.";

/// Replace `{existing_persona}`, `{additional_details}` and `{format}` before sending.
const ENRICH_PERSONA_PROMPT_TEMPLATE: &str = "\
Given an existing persona and additional details, enrich the persona with the provided details. \
Make sure to include ALL existing details about the persona: restate the complete persona, \
not only what changed.

Existing Persona:
{existing_persona}

Additional Details:
{additional_details}

{format}";

pub fn build_generation_prompt(name: &str, age: u32, prompt: &str) -> String {
    GENERATE_PERSONA_PROMPT_TEMPLATE
        .replace("{format}", PERSONA_FORMAT_INSTRUCTION)
        .replace("{name}", name)
        .replace("{age}", &age.to_string())
        .replace("{prompt}", prompt)
}

pub fn build_enrichment_prompt(existing_persona: &str, additional_details: &str) -> String {
    ENRICH_PERSONA_PROMPT_TEMPLATE
        .replace("{format}", PERSONA_FORMAT_INSTRUCTION)
        .replace("{existing_persona}", existing_persona)
        .replace("{additional_details}", additional_details)
}
