//! Persona Structuring Pipeline: turns one block of generated text into a
//! complete set of persona fields, and mints new personas from it.

use uuid::Uuid;

use crate::persona::bio::resolve_bio;
use crate::persona::error::PersonaError;
use crate::persona::extractor::{extract_list, extract_value};
use crate::persona::models::{
    avatar_url_for, ListSection, Persona, PersonaFields, UNSPECIFIED_PROFESSION,
};

pub const PROFESSION_FIELD: &str = "Profession";

/// Extracts every text-derived field from `text`.
///
/// Pure and total: any input, including the empty string, produces a fully
/// populated field set with defaults for whatever is missing.
pub fn structure(text: &str) -> PersonaFields {
    let profession = extract_value(text, PROFESSION_FIELD);
    let list = |section: ListSection| extract_list(text, section.header());

    PersonaFields {
        profession: if profession.is_empty() {
            UNSPECIFIED_PROFESSION.to_string()
        } else {
            profession
        },
        bio: resolve_bio(text),
        demographics: list(ListSection::Demographics),
        personality_traits: list(ListSection::PersonalityTraits),
        motivations: list(ListSection::Motivations),
        pain_points: list(ListSection::PainPoints),
        goals: list(ListSection::Goals),
        emotions: list(ListSection::Emotions),
        raw_text: text.to_string(),
    }
}

/// Creates a new persona from generation output, with a fresh id and avatar.
pub fn generate(name: &str, age: u32, free_text: &str) -> Result<Persona, PersonaError> {
    if free_text.trim().is_empty() {
        return Err(PersonaError::GenerationEmptyOutput);
    }

    Ok(Persona::from_fields(
        Uuid::new_v4(),
        name.to_string(),
        age,
        avatar_url_for(Uuid::new_v4()),
        structure(free_text),
    ))
}

/// Parses a caller-supplied age. Anything that is not a plain non-negative
/// integer is rejected rather than coerced.
pub fn parse_age(raw: &str) -> Result<u32, PersonaError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| PersonaError::InvalidAge(raw.to_string()))
}
