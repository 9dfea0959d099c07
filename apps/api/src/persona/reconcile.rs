//! Reconciliation Policy: applies a re-generated persona text to an existing
//! persona.
//!
//! The enrichment prompt asks the model to restate the whole persona, so the
//! new text replaces every extracted field wholesale. There is no per-field
//! merge: a fact the model leaves out of the restatement is gone.
//! [`dropped_sections`] reports list sections that emptied out so the loss is
//! at least visible.

use crate::persona::error::PersonaError;
use crate::persona::models::{ListSection, Persona};
use crate::persona::structure::structure;

/// Returns `existing` with all extracted fields and `raw_text` replaced by
/// those structured from `new_free_text`. `id`, `name`, `age` and
/// `avatar_url` are carried over.
pub fn enrich(existing: &Persona, new_free_text: &str) -> Result<Persona, PersonaError> {
    if new_free_text.trim().is_empty() {
        return Err(PersonaError::EnrichmentEmptyOutput);
    }

    let mut enriched = existing.clone();
    enriched.apply_fields(structure(new_free_text));
    Ok(enriched)
}

/// List sections that had items before enrichment and have none after.
pub fn dropped_sections(before: &Persona, after: &Persona) -> Vec<ListSection> {
    ListSection::ALL
        .into_iter()
        .filter(|section| !section.items(before).is_empty() && section.items(after).is_empty())
        .collect()
}
