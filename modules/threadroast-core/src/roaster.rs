//! Orchestrator: cache check, fetch, classification, generation, persist.

use std::sync::Arc;

use threadroast_common::RoastError;
use tracing::{debug, info};

use crate::fetcher::ProfileFetcher;
use crate::generator::{build_prompt, TextGenerator};
use crate::store::{RoastRecord, RoastStore};

/// Marker for a profile Threads refuses to serve at all.
const UNAVAILABLE_MARKER: &str = "page isn't available";

/// Marker for a profile behind the private-account wall.
const PRIVATE_MARKER: &str = "profile is private";

pub struct Roaster {
    fetcher: Arc<dyn ProfileFetcher>,
    generator: Arc<dyn TextGenerator>,
    store: Arc<dyn RoastStore>,
}

impl Roaster {
    pub fn new(
        fetcher: Arc<dyn ProfileFetcher>,
        generator: Arc<dyn TextGenerator>,
        store: Arc<dyn RoastStore>,
    ) -> Self {
        Self {
            fetcher,
            generator,
            store,
        }
    }

    /// Generate (or return the cached) roast for a profile.
    ///
    /// A cached record with a non-empty result is authoritative; nothing
    /// else runs. On a miss the pipeline is fetch → classify → generate →
    /// persist, and only a fully successful generation is persisted.
    pub async fn roast(&self, username: &str, lang: &str) -> Result<String, RoastError> {
        let username = username.to_lowercase();

        if let Some(cached) = self.store.get(&username, lang).await? {
            if !cached.result.is_empty() {
                debug!(%username, lang, "returning cached roast");
                return Ok(cached.result);
            }
        }

        let content = match self.fetcher.fetch(&username).await? {
            Some(content) if !content.is_empty() => content,
            _ => return Err(RoastError::RetrievalFailed),
        };

        classify(&content)?;

        let prompt = build_prompt(&username, lang, &content);
        let result = self.generator.generate(&prompt).await?;

        self.store
            .set(RoastRecord {
                username: username.clone(),
                lang: lang.to_string(),
                result: result.clone(),
            })
            .await?;

        info!(%username, lang, "roast generated and cached");
        Ok(result)
    }
}

/// Ordered substring checks over the fetched content, case-insensitive.
fn classify(content: &str) -> Result<(), RoastError> {
    let lowered = content.to_lowercase();
    if lowered.contains(UNAVAILABLE_MARKER) {
        return Err(RoastError::AccountNotFound);
    }
    if lowered.contains(PRIVATE_MARKER) {
        return Err(RoastError::AccountPrivate);
    }
    Ok(())
}
