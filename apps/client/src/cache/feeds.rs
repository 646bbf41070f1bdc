//! The three concrete recommendation feeds, each its own day-scoped cache
//! instance over the shared store: job listings, networking resources, and
//! skill suggestions.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::backend::{BackendError, ResumeBackend};
use crate::cache::clock::Clock;
use crate::cache::store::KvStore;
use crate::cache::{DailyCache, Fetcher};
use crate::models::feeds::{JobPosting, NetworkingResources};

struct JobsFetcher(Arc<dyn ResumeBackend>);

#[async_trait]
impl Fetcher<Vec<JobPosting>> for JobsFetcher {
    async fn fetch(&self, user_id: Uuid) -> Result<Vec<JobPosting>, BackendError> {
        self.0.fetch_job_matches(user_id).await
    }
}

struct NetworkingFetcher(Arc<dyn ResumeBackend>);

#[async_trait]
impl Fetcher<NetworkingResources> for NetworkingFetcher {
    async fn fetch(&self, user_id: Uuid) -> Result<NetworkingResources, BackendError> {
        self.0.fetch_networking(user_id).await
    }
}

struct SkillsFetcher(Arc<dyn ResumeBackend>);

#[async_trait]
impl Fetcher<Vec<String>> for SkillsFetcher {
    async fn fetch(&self, user_id: Uuid) -> Result<Vec<String>, BackendError> {
        self.0.fetch_skill_suggestions(user_id).await
    }
}

pub fn jobs_cache(
    backend: Arc<dyn ResumeBackend>,
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
) -> DailyCache<Vec<JobPosting>> {
    DailyCache::new("jobs", store, clock, Arc::new(JobsFetcher(backend)))
}

pub fn networking_cache(
    backend: Arc<dyn ResumeBackend>,
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
) -> DailyCache<NetworkingResources> {
    DailyCache::new(
        "networking",
        store,
        clock,
        Arc::new(NetworkingFetcher(backend)),
    )
}

pub fn skills_cache(
    backend: Arc<dyn ResumeBackend>,
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
) -> DailyCache<Vec<String>> {
    DailyCache::new("skills", store, clock, Arc::new(SkillsFetcher(backend)))
}
