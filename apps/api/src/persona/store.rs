use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::persona::filter::PersonaFilter;
use crate::persona::models::Persona;

/// In-memory persona collection, newest first.
#[derive(Clone, Default)]
pub struct PersonaStore {
    personas: Arc<RwLock<Vec<Persona>>>,
}

impl PersonaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, persona: Persona) {
        self.personas.write().await.insert(0, persona);
    }

    pub async fn get(&self, id: Uuid) -> Option<Persona> {
        self.personas
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub async fn list(&self, filter: &PersonaFilter) -> Vec<Persona> {
        self.personas
            .read()
            .await
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }

    /// Swaps in `persona` at the position of the stored persona with the same
    /// id. Returns `false` when no such persona exists.
    pub async fn replace(&self, persona: Persona) -> bool {
        let mut personas = self.personas.write().await;
        match personas.iter_mut().find(|p| p.id == persona.id) {
            Some(slot) => {
                *slot = persona;
                true
            }
            None => false,
        }
    }

    pub async fn remove(&self, id: Uuid) -> Option<Persona> {
        let mut personas = self.personas.write().await;
        let index = personas.iter().position(|p| p.id == id)?;
        Some(personas.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::structure::generate;

    fn persona(name: &str, age: u32) -> Persona {
        generate(name, age, "Profession: Tester").unwrap()
    }

    #[tokio::test]
    async fn test_insert_keeps_newest_first() {
        let store = PersonaStore::new();
        store.insert(persona("First", 30)).await;
        store.insert(persona("Second", 40)).await;

        let names: Vec<_> = store
            .list(&PersonaFilter::default())
            .await
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn test_replace_keeps_position() {
        let store = PersonaStore::new();
        let first = persona("First", 30);
        store.insert(first.clone()).await;
        store.insert(persona("Second", 40)).await;

        let mut updated = first.clone();
        updated.profession = "Lead Tester".to_string();
        assert!(store.replace(updated).await);

        let all = store.list(&PersonaFilter::default()).await;
        assert_eq!(all[1].id, first.id);
        assert_eq!(all[1].profession, "Lead Tester");
    }

    #[tokio::test]
    async fn test_replace_unknown_is_rejected() {
        let store = PersonaStore::new();
        assert!(!store.replace(persona("Ghost", 1)).await);
        assert!(store.list(&PersonaFilter::default()).await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_and_get() {
        let store = PersonaStore::new();
        let p = persona("Gone", 50);
        store.insert(p.clone()).await;

        assert_eq!(store.get(p.id).await, Some(p.clone()));
        assert_eq!(store.remove(p.id).await, Some(p.clone()));
        assert_eq!(store.get(p.id).await, None);
        assert_eq!(store.remove(p.id).await, None);
    }

    #[tokio::test]
    async fn test_list_applies_filter() {
        let store = PersonaStore::new();
        store.insert(persona("Young", 20)).await;
        store.insert(persona("Old", 80)).await;

        let filter = PersonaFilter {
            max_age: Some(50),
            ..Default::default()
        };
        let found = store.list(&filter).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Young");
    }
}
