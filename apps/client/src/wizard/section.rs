//! The ordered form sections of the resume-building flow.
//!
//! Ordinals are contiguous (0..=9) and totally ordered; navigation only
//! moves ±1 or jumps to a known ordinal. Each section knows its remote
//! endpoint name and how to slice its fields out of a `ResumeRecord`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::models::resume::ResumeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Personal,
    Education,
    Experience,
    Certifications,
    Projects,
    Skills,
    Languages,
    Hobbies,
    AspiringRoles,
    AspiringCompanies,
}

impl Section {
    pub const COUNT: usize = 10;

    /// All sections in flow order.
    pub const ALL: [Section; Self::COUNT] = [
        Section::Personal,
        Section::Education,
        Section::Experience,
        Section::Certifications,
        Section::Projects,
        Section::Skills,
        Section::Languages,
        Section::Hobbies,
        Section::AspiringRoles,
        Section::AspiringCompanies,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Section> {
        Self::ALL.get(ordinal).copied()
    }

    pub fn first() -> Section {
        Section::Personal
    }

    pub fn last() -> Section {
        Section::AspiringCompanies
    }

    /// The next section, clamped at the last ordinal.
    pub fn next(self) -> Section {
        Self::from_ordinal(self.ordinal() + 1).unwrap_or(self)
    }

    /// The previous section, clamped at 0.
    pub fn prev(self) -> Section {
        match self.ordinal().checked_sub(1) {
            Some(ord) => Self::from_ordinal(ord).unwrap_or(self),
            None => self,
        }
    }

    /// Remote endpoint name for the per-section persist call.
    pub fn endpoint(self) -> &'static str {
        match self {
            Section::Personal => "personal",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Certifications => "certifications",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Languages => "languages",
            Section::Hobbies => "hobbies",
            Section::AspiringRoles => "aspiring-roles",
            Section::AspiringCompanies => "aspiring-companies",
        }
    }

    /// Display title used in progress UI and log lines.
    pub fn title(self) -> &'static str {
        match self {
            Section::Personal => "Personal",
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Certifications => "Certifications",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Languages => "Languages",
            Section::Hobbies => "Hobbies",
            Section::AspiringRoles => "Aspiring Roles",
            Section::AspiringCompanies => "Aspiring Companies",
        }
    }

    /// Whether the section is backed by a repeatable entry list.
    pub fn is_repeatable(self) -> bool {
        !matches!(self, Section::Personal)
    }

    /// Pure mapping from the aggregate record to the JSON object holding
    /// only this section's fields — the exact body of the persist call.
    pub fn slice(self, record: &ResumeRecord) -> Value {
        match self {
            Section::Personal => json!({
                "name": record.name,
                "email": record.email,
                "about_me": record.about_me,
                "linkedin_url": record.linkedin_url,
                "github_url": record.github_url,
                "portfolio_url": record.portfolio_url,
            }),
            Section::Education => json!({ "education": record.education }),
            Section::Experience => json!({ "experience": record.experience }),
            Section::Certifications => json!({ "certifications": record.certifications }),
            Section::Projects => json!({ "projects": record.projects }),
            Section::Skills => json!({ "skills": record.skills }),
            Section::Languages => json!({ "languages": record.languages }),
            Section::Hobbies => json!({ "hobbies": record.hobbies }),
            Section::AspiringRoles => json!({ "aspiring_roles": record.aspiring_roles }),
            Section::AspiringCompanies => {
                json!({ "aspiring_companies": record.aspiring_companies })
            }
        }
    }
}
