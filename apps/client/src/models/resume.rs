//! Resume data model — the aggregate record the wizard edits, persisted to
//! the remote system of record one section at a time.

use serde::{Deserialize, Serialize};

/// Self-assessed proficiency for a skill. `Beginner` is the zero value a
/// newly added skill row starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// Spoken-language proficiency. `Basic` is the zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageProficiency {
    #[default]
    Basic,
    Conversational,
    Fluent,
    Native,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_year: String,
    pub end_year: String,
    pub grade: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub issued_on: String,
    pub credential_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    pub proficiency: LanguageProficiency,
}

/// The aggregate resume record. Exclusively owned by a `Wizard` for the
/// duration of an editing session; the remote backend owns the durable copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub about_me: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub portfolio_url: String,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub aspiring_roles: Vec<String>,
    #[serde(default)]
    pub aspiring_companies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_skill_entry_defaults_to_beginner() {
        let skill = SkillEntry::default();
        assert_eq!(skill.level, SkillLevel::Beginner);
    }

    #[test]
    fn test_new_language_entry_defaults_to_basic() {
        let lang = LanguageEntry::default();
        assert_eq!(lang.proficiency, LanguageProficiency::Basic);
    }

    #[test]
    fn test_skill_level_serializes_snake_case() {
        let json = serde_json::to_string(&SkillLevel::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");
    }

    #[test]
    fn test_record_deserializes_with_missing_collections() {
        // A backend record created before some sections existed must still load.
        let record: ResumeRecord = serde_json::from_str(
            r#"{"name":"Alice","email":"a@example.com","about_me":"",
                "linkedin_url":"","github_url":"","portfolio_url":""}"#,
        )
        .unwrap();
        assert_eq!(record.name, "Alice");
        assert!(record.education.is_empty());
        assert!(record.aspiring_companies.is_empty());
    }
}
