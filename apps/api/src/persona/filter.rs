use serde::Deserialize;

use crate::persona::models::Persona;

/// Search and age-range predicate over stored personas.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaFilter {
    /// Case-insensitive match against name, profession and personality traits.
    pub search: Option<String>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
}

impl PersonaFilter {
    pub fn matches(&self, persona: &Persona) -> bool {
        self.matches_search(persona) && self.matches_age(persona.age)
    }

    fn matches_search(&self, persona: &Persona) -> bool {
        let term = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => term.to_lowercase(),
            _ => return true,
        };

        persona.name.to_lowercase().contains(&term)
            || persona.profession.to_lowercase().contains(&term)
            || persona
                .personality_traits
                .iter()
                .any(|trait_| trait_.to_lowercase().contains(&term))
    }

    fn matches_age(&self, age: u32) -> bool {
        self.min_age.map_or(true, |min| age >= min) && self.max_age.map_or(true, |max| age <= max)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::persona::structure::structure;

    fn persona(name: &str, age: u32, text: &str) -> Persona {
        Persona::from_fields(Uuid::new_v4(), name.to_string(), age, String::new(), structure(text))
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let p = persona("Ines", 120, "");
        assert!(PersonaFilter::default().matches(&p));
    }

    #[test]
    fn test_search_by_name_profession_and_trait() {
        let p = persona(
            "Ines Duarte",
            33,
            "Profession: Marine Biologist\n\n**Personality Traits**\n- Adventurous\n",
        );
        let search = |term: &str| PersonaFilter {
            search: Some(term.to_string()),
            ..Default::default()
        };

        assert!(search("duarte").matches(&p));
        assert!(search("MARINE").matches(&p));
        assert!(search("venturous").matches(&p));
        assert!(search("   ").matches(&p));
        assert!(!search("accountant").matches(&p));
    }

    #[test]
    fn test_search_ignores_bio() {
        let p = persona("Ines", 33, "Bio: An avid climber.");
        let filter = PersonaFilter {
            search: Some("climber".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&p));
    }

    #[test]
    fn test_age_range_is_inclusive() {
        let p = persona("Ines", 33, "");
        let range = |min, max| PersonaFilter {
            search: None,
            min_age: Some(min),
            max_age: Some(max),
        };

        assert!(range(33, 33).matches(&p));
        assert!(range(0, 100).matches(&p));
        assert!(!range(34, 100).matches(&p));
        assert!(!range(0, 32).matches(&p));
    }
}
