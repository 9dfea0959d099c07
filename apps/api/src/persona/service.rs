//! Persona orchestration: validate the request, ask the backend for prose,
//! structure it and keep the store in step.
//!
//! Flow (generate): validate → backend.request_generation → structure::generate → store.insert
//! Flow (enrich):   validate → store.get → backend.request_enrichment → reconcile::enrich → store.replace
//!
//! The store lock is never held across a backend call.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::persona::backend::PersonaBackend;
use crate::persona::filter::PersonaFilter;
use crate::persona::models::{ListSection, Persona};
use crate::persona::reconcile::{dropped_sections, enrich};
use crate::persona::store::PersonaStore;
use crate::persona::structure::{generate, parse_age};

/// Shortest description worth sending to the model.
pub const MIN_PROMPT_CHARS: usize = 10;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePersonaRequest {
    pub name: String,
    pub age: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichPersonaRequest {
    pub change_description: String,
}

/// Result of an enrichment. `dropped_sections` is advisory: list sections the
/// new text no longer mentions, which enrichment has therefore emptied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichOutcome {
    pub persona: Persona,
    pub dropped_sections: Vec<ListSection>,
}

#[derive(Clone)]
pub struct PersonaService {
    backend: Arc<dyn PersonaBackend>,
    store: PersonaStore,
}

impl PersonaService {
    pub fn new(backend: Arc<dyn PersonaBackend>, store: PersonaStore) -> Self {
        Self { backend, store }
    }

    pub async fn generate(&self, request: GeneratePersonaRequest) -> Result<Persona, AppError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("name cannot be empty".to_string()));
        }
        if request.prompt.trim().chars().count() < MIN_PROMPT_CHARS {
            return Err(AppError::Validation(format!(
                "prompt must be at least {MIN_PROMPT_CHARS} characters long"
            )));
        }
        let age = parse_age(&request.age)?;

        info!("Generating persona '{name}' (age {age})");
        let free_text = self
            .backend
            .request_generation(name, age, request.prompt.trim())
            .await
            .unwrap_or_else(|e| {
                warn!("Persona generation backend failed: {e}");
                String::new()
            });

        let persona = generate(name, age, &free_text)?;
        info!(
            "Persona {} generated: profession='{}', {} goals, {} traits",
            persona.id,
            persona.profession,
            persona.goals.len(),
            persona.personality_traits.len()
        );

        self.store.insert(persona.clone()).await;
        Ok(persona)
    }

    pub async fn enrich(
        &self,
        id: Uuid,
        request: EnrichPersonaRequest,
    ) -> Result<EnrichOutcome, AppError> {
        let change = request.change_description.trim();
        if change.is_empty() {
            return Err(AppError::Validation(
                "changeDescription cannot be empty".to_string(),
            ));
        }

        let existing = self.get(id).await?;

        info!("Enriching persona {id}");
        let free_text = self
            .backend
            .request_enrichment(&existing.raw_text, change)
            .await
            .unwrap_or_else(|e| {
                warn!("Persona enrichment backend failed for {id}: {e}");
                String::new()
            });

        let enriched = enrich(&existing, &free_text)?;
        let dropped = dropped_sections(&existing, &enriched);
        if !dropped.is_empty() {
            warn!("Enrichment of persona {id} emptied sections: {dropped:?}");
        }

        if !self.store.replace(enriched.clone()).await {
            return Err(not_found(id));
        }

        Ok(EnrichOutcome {
            persona: enriched,
            dropped_sections: dropped,
        })
    }

    pub async fn get(&self, id: Uuid) -> Result<Persona, AppError> {
        self.store.get(id).await.ok_or_else(|| not_found(id))
    }

    pub async fn list(&self, filter: &PersonaFilter) -> Vec<Persona> {
        self.store.list(filter).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.store.remove(id).await.ok_or_else(|| not_found(id))?;
        info!("Persona {id} deleted");
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Persona {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::backend::testing::ScriptedBackend;
    use crate::persona::error::PersonaError;

    const GENERATED: &str = "**Profession**: Ferry Captain\n\n\
        **Bio**: Runs the night crossing between two islands.\n\n\
        **Goals**\n- Retire by the sea\n\n\
        **Emotions**\n- Calm\n";

    const ENRICHED: &str = "**Profession**: Ferry Captain\n\n\
        **Bio**: Runs the night crossing and plays the accordion.\n\n\
        **Goals**\n- Retire by the sea\n- Record an album\n";

    fn request(name: &str, age: &str) -> GeneratePersonaRequest {
        GeneratePersonaRequest {
            name: name.to_string(),
            age: age.to_string(),
            prompt: "A ferry captain who loves music".to_string(),
        }
    }

    fn service(backend: ScriptedBackend) -> (PersonaService, Arc<ScriptedBackend>) {
        let backend = Arc::new(backend);
        let service = PersonaService::new(backend.clone(), PersonaStore::new());
        (service, backend)
    }

    #[tokio::test]
    async fn test_generate_stores_persona() {
        let (service, _) = service(ScriptedBackend::new(Some(GENERATED), None));
        let persona = service.generate(request("Mirela", "58")).await.unwrap();

        assert_eq!(persona.name, "Mirela");
        assert_eq!(persona.age, 58);
        assert_eq!(persona.profession, "Ferry Captain");
        assert_eq!(service.get(persona.id).await.unwrap(), persona);
    }

    #[tokio::test]
    async fn test_generate_backend_failure_is_empty_output() {
        let (service, _) = service(ScriptedBackend::new(None, None));
        let err = service.generate(request("Mirela", "58")).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Persona(PersonaError::GenerationEmptyOutput)
        ));
        assert!(service.list(&PersonaFilter::default()).await.is_empty());
    }

    #[tokio::test]
    async fn test_generate_blank_output_is_empty_output() {
        let (service, _) = service(ScriptedBackend::new(Some("  \n"), None));
        let err = service.generate(request("Mirela", "58")).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Persona(PersonaError::GenerationEmptyOutput)
        ));
    }

    #[tokio::test]
    async fn test_generate_validates_before_calling_backend() {
        let (service, backend) = service(ScriptedBackend::new(Some(GENERATED), None));

        let err = service.generate(request("Mirela", "fifty")).await.unwrap_err();
        assert!(matches!(err, AppError::Persona(PersonaError::InvalidAge(_))));

        let err = service.generate(request("  ", "58")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let mut short = request("Mirela", "58");
        short.prompt = "too short".to_string();
        let err = service.generate(short).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_enrich_replaces_fields_and_reports_drops() {
        let (service, backend) = service(ScriptedBackend::new(Some(GENERATED), Some(ENRICHED)));
        let original = service.generate(request("Mirela", "58")).await.unwrap();

        let outcome = service
            .enrich(
                original.id,
                EnrichPersonaRequest {
                    change_description: "She plays the accordion".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(outcome.persona.id, original.id);
        assert_eq!(outcome.persona.avatar_url, original.avatar_url);
        assert_eq!(outcome.persona.raw_text, ENRICHED);
        assert_eq!(outcome.persona.goals, vec!["Retire by the sea", "Record an album"]);
        assert_eq!(outcome.dropped_sections, vec![ListSection::Emotions]);
        assert_eq!(service.get(original.id).await.unwrap(), outcome.persona);

        let (existing_raw, change) = backend.last_enrichment_input.lock().unwrap().clone().unwrap();
        assert_eq!(existing_raw, GENERATED);
        assert_eq!(change, "She plays the accordion");
    }

    #[tokio::test]
    async fn test_enrich_failure_leaves_stored_persona_untouched() {
        let (service, _) = service(ScriptedBackend::new(Some(GENERATED), None));
        let original = service.generate(request("Mirela", "58")).await.unwrap();

        let err = service
            .enrich(
                original.id,
                EnrichPersonaRequest {
                    change_description: "Make her a painter".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Persona(PersonaError::EnrichmentEmptyOutput)
        ));
        assert_eq!(service.get(original.id).await.unwrap(), original);
    }

    #[tokio::test]
    async fn test_enrich_unknown_or_blank_request() {
        let (service, backend) = service(ScriptedBackend::new(Some(GENERATED), Some(ENRICHED)));

        let err = service
            .enrich(
                Uuid::new_v4(),
                EnrichPersonaRequest {
                    change_description: "anything".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service
            .enrich(
                Uuid::new_v4(),
                EnrichPersonaRequest {
                    change_description: "   ".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let (service, _) = service(ScriptedBackend::new(Some(GENERATED), None));
        let persona = service.generate(request("Mirela", "58")).await.unwrap();

        service.delete(persona.id).await.unwrap();
        assert!(matches!(service.get(persona.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete(persona.id).await, Err(AppError::NotFound(_))));
    }
}
