use crate::persona::service::PersonaService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persona orchestration. Holds the generation backend as
    /// `Arc<dyn PersonaBackend>` so tests can swap in a scripted one.
    pub personas: PersonaService,
}
