use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profession recorded when the generated text names none.
pub const UNSPECIFIED_PROFESSION: &str = "Unspecified";

const AVATAR_BASE_URL: &str = "https://picsum.photos/seed";

/// A structured persona as rendered, filtered and exported by the UI.
///
/// `id`, `name`, `age` and `avatar_url` are assigned by the caller and never
/// come from the generated text. Every other field is extracted from
/// `raw_text`, which always holds the text that produced the current values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub profession: String,
    pub avatar_url: String,
    pub bio: String,
    pub demographics: Vec<String>,
    pub personality_traits: Vec<String>,
    pub motivations: Vec<String>,
    pub pain_points: Vec<String>,
    pub goals: Vec<String>,
    pub emotions: Vec<String>,
    pub raw_text: String,
}

/// The text-derived part of a persona: everything except the identity fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaFields {
    pub profession: String,
    pub bio: String,
    pub demographics: Vec<String>,
    pub personality_traits: Vec<String>,
    pub motivations: Vec<String>,
    pub pain_points: Vec<String>,
    pub goals: Vec<String>,
    pub emotions: Vec<String>,
    pub raw_text: String,
}

impl Persona {
    /// Assembles a persona from caller-supplied identity and extracted fields.
    pub fn from_fields(
        id: Uuid,
        name: String,
        age: u32,
        avatar_url: String,
        fields: PersonaFields,
    ) -> Self {
        let mut persona = Persona {
            id,
            name,
            age,
            avatar_url,
            profession: String::new(),
            bio: String::new(),
            demographics: Vec::new(),
            personality_traits: Vec::new(),
            motivations: Vec::new(),
            pain_points: Vec::new(),
            goals: Vec::new(),
            emotions: Vec::new(),
            raw_text: String::new(),
        };
        persona.apply_fields(fields);
        persona
    }

    /// Overwrites every extracted field, leaving identity fields untouched.
    pub fn apply_fields(&mut self, fields: PersonaFields) {
        let PersonaFields {
            profession,
            bio,
            demographics,
            personality_traits,
            motivations,
            pain_points,
            goals,
            emotions,
            raw_text,
        } = fields;

        self.profession = profession;
        self.bio = bio;
        self.demographics = demographics;
        self.personality_traits = personality_traits;
        self.motivations = motivations;
        self.pain_points = pain_points;
        self.goals = goals;
        self.emotions = emotions;
        self.raw_text = raw_text;
    }
}

/// The six list-valued sections of a persona, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListSection {
    Demographics,
    PersonalityTraits,
    Motivations,
    PainPoints,
    Goals,
    Emotions,
}

impl ListSection {
    pub const ALL: [ListSection; 6] = [
        ListSection::Demographics,
        ListSection::PersonalityTraits,
        ListSection::Motivations,
        ListSection::PainPoints,
        ListSection::Goals,
        ListSection::Emotions,
    ];

    /// Heading used both to find the section in generated text and to title
    /// it in exports.
    pub fn header(self) -> &'static str {
        match self {
            ListSection::Demographics => "Demographics",
            ListSection::PersonalityTraits => "Personality Traits",
            ListSection::Motivations => "Motivations",
            ListSection::PainPoints => "Pain Points",
            ListSection::Goals => "Goals",
            ListSection::Emotions => "Emotions",
        }
    }

    pub fn items(self, persona: &Persona) -> &[String] {
        match self {
            ListSection::Demographics => &persona.demographics,
            ListSection::PersonalityTraits => &persona.personality_traits,
            ListSection::Motivations => &persona.motivations,
            ListSection::PainPoints => &persona.pain_points,
            ListSection::Goals => &persona.goals,
            ListSection::Emotions => &persona.emotions,
        }
    }
}

/// Builds the avatar reference for a persona. Seeded by a fresh UUID so two
/// personas never share a picture by accident.
pub fn avatar_url_for(seed: Uuid) -> String {
    format!("{AVATAR_BASE_URL}/{seed}/400")
}
