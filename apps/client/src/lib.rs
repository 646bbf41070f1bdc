//! Client core of the resume-building application: the multi-section form
//! wizard and the day-scoped recommendation caches, speaking to the remote
//! backend through the `ResumeBackend` trait.

pub mod backend;
pub mod cache;
pub mod config;
pub mod models;
pub mod wizard;

pub use backend::{BackendError, HttpBackend, ResumeBackend};
pub use cache::clock::{Clock, SystemClock};
pub use cache::store::{FileStore, KvStore, MemoryStore};
pub use cache::{CacheError, DailyCache};
pub use config::Config;
pub use models::resume::ResumeRecord;
pub use wizard::section::Section;
pub use wizard::update::SectionUpdate;
pub use wizard::{Wizard, WizardError};
