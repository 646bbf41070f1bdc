//! Day-Scoped Cache — fetch-once-per-day semantics over durable key/value
//! storage, with stale-while-revalidate refresh.
//!
//! Each cache instance is generic over its payload type and fetch source.
//! A stored entry from today's local calendar date is served with no
//! network call; an entry from an earlier day is served immediately while
//! exactly one background refresh is scheduled; a missing or unparsable
//! entry blocks on a foreground fetch.

pub mod clock;
pub mod feeds;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::backend::BackendError;
use crate::cache::clock::{day_string, Clock};
use crate::cache::store::{KvStore, StoreError};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Fetch(#[from] BackendError),

    #[error("Could not encode cache payload: {0}")]
    Encode(serde_json::Error),
}

/// Source of fresh payloads for one cache instance.
#[async_trait]
pub trait Fetcher<T>: Send + Sync {
    async fn fetch(&self, user_id: Uuid) -> Result<T, BackendError>;
}

/// One day-scoped cache. Cheap to clone; clones share the same store,
/// clock, and fetcher.
pub struct DailyCache<T> {
    name: &'static str,
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
    fetcher: Arc<dyn Fetcher<T>>,
}

impl<T> Clone for DailyCache<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}

impl<T> DailyCache<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    pub fn new(
        name: &'static str,
        store: Arc<dyn KvStore>,
        clock: Arc<dyn Clock>,
        fetcher: Arc<dyn Fetcher<T>>,
    ) -> Self {
        Self {
            name,
            store,
            clock,
            fetcher,
        }
    }

    fn data_key(&self, user_id: Uuid) -> String {
        format!("{}_data_{}", self.name, user_id)
    }

    fn date_key(&self, user_id: Uuid) -> String {
        format!("{}_date_{}", self.name, user_id)
    }

    /// Returns the payload for `user_id`, deciding between the stored
    /// snapshot, a background refresh, and a blocking foreground fetch.
    pub async fn load(&self, user_id: Uuid) -> Result<T, CacheError> {
        // One batched read: the (payload, day) pair must come from the same
        // snapshot, or a concurrent refresh could tear it.
        let keys = [self.data_key(user_id), self.date_key(user_id)];
        let mut values = self.store.get_all(&keys).await?.into_iter();
        let stored_raw = values.next().flatten();
        let stored_day = values.next().flatten();

        // An unparsable payload is identical to a miss.
        let payload: Option<T> = stored_raw
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok());

        match (payload, stored_day) {
            (Some(payload), Some(day)) => {
                let today = day_string(self.clock.today());
                if day == today {
                    debug!("Cache '{}' fresh for user {user_id}, serving stored", self.name);
                } else {
                    debug!(
                        "Cache '{}' stale for user {user_id} (stored {day}), refreshing in background",
                        self.name
                    );
                    self.spawn_background_refresh(user_id);
                }
                Ok(payload)
            }
            _ => {
                debug!("Cache '{}' miss for user {user_id}, fetching", self.name);
                self.refresh(user_id).await
            }
        }
    }

    /// Fetches a fresh payload and overwrites the stored `(payload, day)`
    /// pair as one atomic batch. Foreground callers see the error.
    pub async fn refresh(&self, user_id: Uuid) -> Result<T, CacheError> {
        let payload = self.fetcher.fetch(user_id).await?;
        let encoded = serde_json::to_string(&payload).map_err(CacheError::Encode)?;
        let today = day_string(self.clock.today());
        self.store
            .put_all(&[
                (self.data_key(user_id), encoded),
                (self.date_key(user_id), today),
            ])
            .await?;
        Ok(payload)
    }

    /// Bypasses the daily check entirely; always a foreground refresh.
    pub async fn force_refresh(&self, user_id: Uuid) -> Result<T, CacheError> {
        self.refresh(user_id).await
    }

    /// Fire-and-forget refresh. Failures are logged and suppressed: the
    /// caller already has a stale answer on screen, and a refresh that
    /// outlives the page simply writes an idempotent entry keyed by user.
    fn spawn_background_refresh(&self, user_id: Uuid) {
        let cache = self.clone();
        tokio::spawn(async move {
            if let Err(e) = cache.refresh(user_id).await {
                warn!("Background refresh of '{}' for user {user_id} failed: {e}", cache.name);
            }
        });
    }
}
