//! Section Wizard — the linear state machine driving the multi-section
//! resume form.
//!
//! Holds the aggregate `ResumeRecord`, the per-section saved flags, and the
//! active section pointer. Edits mark a section dirty; navigation forward
//! persists the current section's slice to the backend before the pointer
//! moves. Every remote failure is recoverable: the in-memory record and the
//! section pointer are never touched by a failed call.

pub mod section;
pub mod update;

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::backend::{BackendError, ResumeBackend};
use crate::models::resume::ResumeRecord;
use crate::wizard::section::Section;
use crate::wizard::update::SectionUpdate;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Could not load the stored resume: {0}")]
    Load(BackendError),

    #[error("Could not save the {section} section: {source}")]
    Persist {
        section: &'static str,
        source: BackendError,
    },

    #[error("A save is already in progress for the {0} section")]
    PersistInFlight(&'static str),

    #[error("Could not finalize the resume: {0}")]
    Finalize(BackendError),
}

impl WizardError {
    /// Retryable message for the user; re-invoking the failed operation is
    /// always the recovery path.
    pub fn user_message(&self) -> String {
        match self {
            WizardError::Load(e) => e.user_message(),
            WizardError::Persist { section, source } => {
                format!("{} section not saved: {}", section, source.user_message())
            }
            WizardError::PersistInFlight(section) => {
                format!("{section} section is still being saved, please wait")
            }
            WizardError::Finalize(e) => e.user_message(),
        }
    }
}

/// One editing session over one user's resume. An explicit context object:
/// construct as many concurrent sessions as needed, no shared state.
pub struct Wizard {
    backend: Arc<dyn ResumeBackend>,
    user_id: Uuid,
    resume: ResumeRecord,
    current: Section,
    saved: [bool; Section::COUNT],
    persisting: bool,
}

impl Wizard {
    /// Starts a fresh session with a blank record; every section unsaved.
    pub fn new(backend: Arc<dyn ResumeBackend>, user_id: Uuid) -> Self {
        Self {
            backend,
            user_id,
            resume: ResumeRecord::default(),
            current: Section::first(),
            saved: [false; Section::COUNT],
            persisting: false,
        }
    }

    /// Resumes a session from the stored record; every section starts saved.
    pub async fn load(backend: Arc<dyn ResumeBackend>, user_id: Uuid) -> Result<Self, WizardError> {
        let resume = backend
            .fetch_resume(user_id)
            .await
            .map_err(WizardError::Load)?;
        info!("Loaded stored resume for user {user_id}");
        Ok(Self {
            backend,
            user_id,
            resume,
            current: Section::first(),
            saved: [true; Section::COUNT],
            persisting: false,
        })
    }

    pub fn current_section(&self) -> Section {
        self.current
    }

    pub fn resume(&self) -> &ResumeRecord {
        &self.resume
    }

    pub fn is_saved(&self, section: Section) -> bool {
        self.saved[section.ordinal()]
    }

    /// Whether a persist call is in flight; the UI disables input while true.
    pub fn is_persisting(&self) -> bool {
        self.persisting
    }

    /// Progress percentage, computed from the ordinal position alone.
    pub fn progress(&self) -> u8 {
        (((self.current.ordinal() + 1) * 100) / Section::COUNT) as u8
    }

    /// Applies one typed field edit. A mutation that actually lands clears
    /// the addressed section's saved flag; an out-of-range index is a
    /// silent no-op and leaves the flags alone.
    pub fn apply(&mut self, update: SectionUpdate) -> bool {
        let section = update.section();
        let applied = update.apply_to(&mut self.resume);
        if applied {
            self.saved[section.ordinal()] = false;
        }
        applied
    }

    /// Appends the zero-value entry template to a repeatable section.
    /// No-op for Personal, which has no backing list.
    pub fn add_entry(&mut self, section: Section) -> bool {
        let added = match section {
            Section::Personal => false,
            Section::Education => {
                self.resume.education.push(Default::default());
                true
            }
            Section::Experience => {
                self.resume.experience.push(Default::default());
                true
            }
            Section::Certifications => {
                self.resume.certifications.push(Default::default());
                true
            }
            Section::Projects => {
                self.resume.projects.push(Default::default());
                true
            }
            Section::Skills => {
                self.resume.skills.push(Default::default());
                true
            }
            Section::Languages => {
                self.resume.languages.push(Default::default());
                true
            }
            Section::Hobbies => {
                self.resume.hobbies.push(String::new());
                true
            }
            Section::AspiringRoles => {
                self.resume.aspiring_roles.push(String::new());
                true
            }
            Section::AspiringCompanies => {
                self.resume.aspiring_companies.push(String::new());
                true
            }
        };
        if added {
            self.saved[section.ordinal()] = false;
        }
        added
    }

    /// Removes the entry at `index`; silent no-op when out of bounds.
    pub fn remove_entry(&mut self, section: Section, index: usize) -> bool {
        let removed = match section {
            Section::Personal => false,
            Section::Education => remove_at(&mut self.resume.education, index),
            Section::Experience => remove_at(&mut self.resume.experience, index),
            Section::Certifications => remove_at(&mut self.resume.certifications, index),
            Section::Projects => remove_at(&mut self.resume.projects, index),
            Section::Skills => remove_at(&mut self.resume.skills, index),
            Section::Languages => remove_at(&mut self.resume.languages, index),
            Section::Hobbies => remove_at(&mut self.resume.hobbies, index),
            Section::AspiringRoles => remove_at(&mut self.resume.aspiring_roles, index),
            Section::AspiringCompanies => remove_at(&mut self.resume.aspiring_companies, index),
        };
        if removed {
            self.saved[section.ordinal()] = false;
        }
        removed
    }

    /// Persists the current section's slice to its endpoint. Idempotent;
    /// at most one call is in flight at a time — re-entry reports
    /// `PersistInFlight` rather than claiming the section was saved.
    pub async fn persist_current(&mut self) -> Result<(), WizardError> {
        if self.persisting {
            debug!("Persist already in flight for {}", self.current.title());
            return Err(WizardError::PersistInFlight(self.current.title()));
        }
        self.persisting = true;
        let body = self.current.slice(&self.resume);
        let result = self
            .backend
            .persist_section(self.user_id, self.current, body)
            .await;
        self.persisting = false;

        match result {
            Ok(()) => {
                self.saved[self.current.ordinal()] = true;
                debug!("Section {} saved", self.current.title());
                Ok(())
            }
            Err(source) => Err(WizardError::Persist {
                section: self.current.title(),
                source,
            }),
        }
    }

    /// Moves forward one section, persisting first when the current section
    /// is unsaved. On failure the pointer does not move.
    pub async fn advance(&mut self) -> Result<Section, WizardError> {
        if !self.is_saved(self.current) {
            self.persist_current().await?;
        }
        self.current = self.current.next();
        Ok(self.current)
    }

    /// Moves back one section. Never persists, always succeeds.
    pub fn retreat(&mut self) -> Section {
        self.current = self.current.prev();
        self.current
    }

    /// Jumps straight to a section. Never persists.
    pub fn jump_to(&mut self, section: Section) -> Section {
        self.current = section;
        self.current
    }

    /// Persists the current section if needed, then marks the whole resume
    /// complete on the system of record. Does not lock further edits.
    pub async fn finalize(&mut self) -> Result<(), WizardError> {
        if !self.is_saved(self.current) {
            self.persist_current().await?;
        }
        self.backend
            .finalize_resume(self.user_id)
            .await
            .map_err(WizardError::Finalize)?;
        info!("Resume finalized for user {}", self.user_id);
        Ok(())
    }
}

fn remove_at<T>(list: &mut Vec<T>, index: usize) -> bool {
    if index < list.len() {
        list.remove(index);
        true
    } else {
        false
    }
}
