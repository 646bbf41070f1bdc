//! Tagged-variant field addressing for wizard edits.
//!
//! One variant per section, each carrying a strongly-typed payload, so an
//! invalid field/section combination cannot be expressed at all. Repeatable
//! sections address an entry by index; an out-of-range index is a silent
//! no-op (the uniform leniency policy, see DESIGN.md).

use crate::models::resume::{LanguageProficiency, ResumeRecord, SkillLevel};
use crate::wizard::section::Section;

#[derive(Debug, Clone, PartialEq)]
pub enum PersonalField {
    Name(String),
    Email(String),
    AboutMe(String),
    LinkedinUrl(String),
    GithubUrl(String),
    PortfolioUrl(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EducationField {
    Institution(String),
    Degree(String),
    FieldOfStudy(String),
    StartYear(String),
    EndYear(String),
    Grade(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExperienceField {
    Company(String),
    Role(String),
    StartDate(String),
    EndDate(String),
    Location(String),
    Description(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CertificationField {
    Name(String),
    Issuer(String),
    IssuedOn(String),
    CredentialUrl(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectField {
    Name(String),
    Description(String),
    TechStack(Vec<String>),
    Url(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkillField {
    Name(String),
    Level(SkillLevel),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LanguageField {
    Name(String),
    Proficiency(LanguageProficiency),
}

/// One edit to the resume record, addressed by section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    Personal(PersonalField),
    Education { index: usize, field: EducationField },
    Experience { index: usize, field: ExperienceField },
    Certifications { index: usize, field: CertificationField },
    Projects { index: usize, field: ProjectField },
    Skills { index: usize, field: SkillField },
    Languages { index: usize, field: LanguageField },
    Hobbies { index: usize, value: String },
    AspiringRoles { index: usize, value: String },
    AspiringCompanies { index: usize, value: String },
}

impl SectionUpdate {
    /// The section this update addresses.
    pub fn section(&self) -> Section {
        match self {
            SectionUpdate::Personal(_) => Section::Personal,
            SectionUpdate::Education { .. } => Section::Education,
            SectionUpdate::Experience { .. } => Section::Experience,
            SectionUpdate::Certifications { .. } => Section::Certifications,
            SectionUpdate::Projects { .. } => Section::Projects,
            SectionUpdate::Skills { .. } => Section::Skills,
            SectionUpdate::Languages { .. } => Section::Languages,
            SectionUpdate::Hobbies { .. } => Section::Hobbies,
            SectionUpdate::AspiringRoles { .. } => Section::AspiringRoles,
            SectionUpdate::AspiringCompanies { .. } => Section::AspiringCompanies,
        }
    }

    /// Applies the update in place. Returns whether a mutation happened;
    /// an out-of-range index leaves the record untouched.
    pub fn apply_to(self, record: &mut ResumeRecord) -> bool {
        match self {
            SectionUpdate::Personal(field) => {
                match field {
                    PersonalField::Name(v) => record.name = v,
                    PersonalField::Email(v) => record.email = v,
                    PersonalField::AboutMe(v) => record.about_me = v,
                    PersonalField::LinkedinUrl(v) => record.linkedin_url = v,
                    PersonalField::GithubUrl(v) => record.github_url = v,
                    PersonalField::PortfolioUrl(v) => record.portfolio_url = v,
                }
                true
            }
            SectionUpdate::Education { index, field } => {
                let Some(entry) = record.education.get_mut(index) else {
                    return false;
                };
                match field {
                    EducationField::Institution(v) => entry.institution = v,
                    EducationField::Degree(v) => entry.degree = v,
                    EducationField::FieldOfStudy(v) => entry.field_of_study = v,
                    EducationField::StartYear(v) => entry.start_year = v,
                    EducationField::EndYear(v) => entry.end_year = v,
                    EducationField::Grade(v) => entry.grade = v,
                }
                true
            }
            SectionUpdate::Experience { index, field } => {
                let Some(entry) = record.experience.get_mut(index) else {
                    return false;
                };
                match field {
                    ExperienceField::Company(v) => entry.company = v,
                    ExperienceField::Role(v) => entry.role = v,
                    ExperienceField::StartDate(v) => entry.start_date = v,
                    ExperienceField::EndDate(v) => entry.end_date = v,
                    ExperienceField::Location(v) => entry.location = v,
                    ExperienceField::Description(v) => entry.description = v,
                }
                true
            }
            SectionUpdate::Certifications { index, field } => {
                let Some(entry) = record.certifications.get_mut(index) else {
                    return false;
                };
                match field {
                    CertificationField::Name(v) => entry.name = v,
                    CertificationField::Issuer(v) => entry.issuer = v,
                    CertificationField::IssuedOn(v) => entry.issued_on = v,
                    CertificationField::CredentialUrl(v) => entry.credential_url = v,
                }
                true
            }
            SectionUpdate::Projects { index, field } => {
                let Some(entry) = record.projects.get_mut(index) else {
                    return false;
                };
                match field {
                    ProjectField::Name(v) => entry.name = v,
                    ProjectField::Description(v) => entry.description = v,
                    ProjectField::TechStack(v) => entry.tech_stack = v,
                    ProjectField::Url(v) => entry.url = v,
                }
                true
            }
            SectionUpdate::Skills { index, field } => {
                let Some(entry) = record.skills.get_mut(index) else {
                    return false;
                };
                match field {
                    SkillField::Name(v) => entry.name = v,
                    SkillField::Level(v) => entry.level = v,
                }
                true
            }
            SectionUpdate::Languages { index, field } => {
                let Some(entry) = record.languages.get_mut(index) else {
                    return false;
                };
                match field {
                    LanguageField::Name(v) => entry.name = v,
                    LanguageField::Proficiency(v) => entry.proficiency = v,
                }
                true
            }
            SectionUpdate::Hobbies { index, value } => {
                write_string_list(&mut record.hobbies, index, value)
            }
            SectionUpdate::AspiringRoles { index, value } => {
                write_string_list(&mut record.aspiring_roles, index, value)
            }
            SectionUpdate::AspiringCompanies { index, value } => {
                write_string_list(&mut record.aspiring_companies, index, value)
            }
        }
    }
}

fn write_string_list(list: &mut [String], index: usize, value: String) -> bool {
    match list.get_mut(index) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillEntry;

    #[test]
    fn test_personal_update_always_applies() {
        let mut record = ResumeRecord::default();
        let applied =
            SectionUpdate::Personal(PersonalField::Name("Alice".to_string())).apply_to(&mut record);
        assert!(applied);
        assert_eq!(record.name, "Alice");
    }

    #[test]
    fn test_update_addresses_its_own_section() {
        let update = SectionUpdate::Skills {
            index: 0,
            field: SkillField::Name("Rust".to_string()),
        };
        assert_eq!(update.section(), Section::Skills);
    }

    #[test]
    fn test_out_of_range_index_is_silent_noop() {
        let mut record = ResumeRecord::default();
        let applied = SectionUpdate::Skills {
            index: 3,
            field: SkillField::Level(SkillLevel::Expert),
        }
        .apply_to(&mut record);
        assert!(!applied);
        assert_eq!(record, ResumeRecord::default());
    }

    #[test]
    fn test_in_range_skill_update_applies() {
        let mut record = ResumeRecord::default();
        record.skills.push(SkillEntry::default());
        let applied = SectionUpdate::Skills {
            index: 0,
            field: SkillField::Level(SkillLevel::Advanced),
        }
        .apply_to(&mut record);
        assert!(applied);
        assert_eq!(record.skills[0].level, SkillLevel::Advanced);
    }

    #[test]
    fn test_string_list_update() {
        let mut record = ResumeRecord::default();
        record.hobbies.push(String::new());
        let applied = SectionUpdate::Hobbies {
            index: 0,
            value: "Chess".to_string(),
        }
        .apply_to(&mut record);
        assert!(applied);
        assert_eq!(record.hobbies[0], "Chess");
    }
}
