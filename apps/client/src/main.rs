//! Smoke binary: exercises the HTTP backend and the three daily caches end
//! to end against a configured server. Useful while developing the backend.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use client::backend::HttpBackend;
use client::cache::clock::SystemClock;
use client::cache::feeds::{jobs_cache, networking_cache, skills_cache};
use client::cache::store::FileStore;
use client::config::Config;
use client::wizard::Wizard;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume client v{}", env!("CARGO_PKG_VERSION"));

    let user_id = match std::env::var("USER_ID") {
        Ok(raw) => raw.parse::<Uuid>()?,
        Err(_) => {
            let fresh = Uuid::new_v4();
            info!("USER_ID not set, using fresh user {fresh}");
            fresh
        }
    };

    let backend = Arc::new(HttpBackend::new(
        config.backend_base_url.clone(),
        Some(config.http_timeout_secs),
    ));
    info!("Backend client initialized ({})", config.backend_base_url);

    let store = Arc::new(FileStore::open(&config.store_path).await?);
    let clock = Arc::new(SystemClock);
    info!("Cache store opened at {}", config.store_path);

    // Wizard session: resume the stored record, or start blank for a new user.
    let wizard = match Wizard::load(backend.clone(), user_id).await {
        Ok(wizard) => wizard,
        Err(e) => {
            info!("No stored resume ({}), starting a fresh session", e.user_message());
            Wizard::new(backend.clone(), user_id)
        }
    };
    info!(
        "Wizard at section '{}' ({}%)",
        wizard.current_section().title(),
        wizard.progress()
    );

    // Recommendation feeds through the day-scoped caches.
    let jobs = jobs_cache(backend.clone(), store.clone(), clock.clone());
    let networking = networking_cache(backend.clone(), store.clone(), clock.clone());
    let skills = skills_cache(backend, store, clock);

    let listings = jobs.load(user_id).await?;
    info!("{} job matches", listings.len());

    let resources = networking.load(user_id).await?;
    info!(
        "{} communities, {} conferences, {} mentorship resources",
        resources.online_communities.len(),
        resources.conferences.len(),
        resources.mentorship.len()
    );

    let suggestions = skills.load(user_id).await?;
    info!("{} skill suggestions", suggestions.len());

    Ok(())
}
