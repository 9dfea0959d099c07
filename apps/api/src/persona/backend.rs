//! Generation backend boundary: the model that writes persona prose.
//!
//! `AppState` holds an `Arc<dyn PersonaBackend>`; the Anthropic-backed
//! `LlmClient` is the production implementation.

use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError};
use crate::persona::prompts::{
    build_enrichment_prompt, build_generation_prompt, ENRICH_PERSONA_SYSTEM,
    GENERATE_PERSONA_SYSTEM,
};

/// Produces free-text persona descriptions. Implementations may return an
/// empty string; callers treat that the same as a failure.
#[async_trait]
pub trait PersonaBackend: Send + Sync {
    async fn request_generation(
        &self,
        name: &str,
        age: u32,
        prompt: &str,
    ) -> Result<String, LlmError>;

    async fn request_enrichment(
        &self,
        existing_raw_text: &str,
        change_instructions: &str,
    ) -> Result<String, LlmError>;
}

#[async_trait]
impl PersonaBackend for LlmClient {
    async fn request_generation(
        &self,
        name: &str,
        age: u32,
        prompt: &str,
    ) -> Result<String, LlmError> {
        let prompt = build_generation_prompt(name, age, prompt);
        self.call_text(&prompt, GENERATE_PERSONA_SYSTEM).await
    }

    async fn request_enrichment(
        &self,
        existing_raw_text: &str,
        change_instructions: &str,
    ) -> Result<String, LlmError> {
        let prompt = build_enrichment_prompt(existing_raw_text, change_instructions);
        self.call_text(&prompt, ENRICH_PERSONA_SYSTEM).await
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// Backend that replays canned answers. `None` simulates an upstream failure.
    #[derive(Default)]
    pub struct ScriptedBackend {
        generation: Option<String>,
        enrichment: Option<String>,
        pub calls: AtomicUsize,
        pub last_enrichment_input: Mutex<Option<(String, String)>>,
    }

    impl ScriptedBackend {
        pub fn new(generation: Option<&str>, enrichment: Option<&str>) -> Self {
            Self {
                generation: generation.map(str::to_string),
                enrichment: enrichment.map(str::to_string),
                ..Default::default()
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    fn scripted(answer: &Option<String>) -> Result<String, LlmError> {
        answer.clone().ok_or_else(|| LlmError::Api {
            status: 503,
            message: "scripted outage".to_string(),
        })
    }

    #[async_trait]
    impl PersonaBackend for ScriptedBackend {
        async fn request_generation(
            &self,
            _name: &str,
            _age: u32,
            _prompt: &str,
        ) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            scripted(&self.generation)
        }

        async fn request_enrichment(
            &self,
            existing_raw_text: &str,
            change_instructions: &str,
        ) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_enrichment_input.lock().unwrap() = Some((
                existing_raw_text.to_string(),
                change_instructions.to_string(),
            ));
            scripted(&self.enrichment)
        }
    }
}
