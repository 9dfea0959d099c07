use thiserror::Error;

/// Failures of persona creation and enrichment.
///
/// Extraction itself never fails; only an empty upstream result or an
/// unusable caller-supplied age is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonaError {
    #[error("Generation returned no usable text")]
    GenerationEmptyOutput,

    #[error("Enrichment returned no usable text")]
    EnrichmentEmptyOutput,

    #[error("Age must be a non-negative whole number, got '{0}'")]
    InvalidAge(String),
}
