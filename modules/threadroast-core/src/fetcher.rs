//! Headless-browser fetch of a public Threads profile page.
//!
//! Each fetch owns its own Chromium session: launch, navigate, wait for
//! network idle, pull the layout container's text, close. The session is
//! released on every exit path, including navigation failures.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tracing::{debug, warn};

use crate::clean::Cleaner;

const THREADS_BASE_URL: &str = "https://www.threads.net";

/// The profile layout container in the rendered DOM. Absent when Threads
/// serves an interstitial instead of the profile.
const LAYOUT_EXTRACT_JS: &str =
    "document.querySelector('div#barcelona-page-layout')?.textContent ?? null";

/// Poll resource timing entries until the count is stable for a second,
/// bounded by a 10s timeout. CDP has no first-class network-idle signal.
const NETWORK_IDLE_JS: &str = r#"(async () => {
    const timeoutMs = 10000;
    const idleMs = 1000;
    const interval = 250;
    const start = Date.now();
    let last = performance.getEntriesByType('resource').length;
    let stable = 0;
    while (Date.now() - start < timeoutMs) {
        await new Promise(r => setTimeout(r, interval));
        const cur = performance.getEntriesByType('resource').length;
        if (document.readyState === 'complete' && cur === last) {
            stable += interval;
            if (stable >= idleMs) return true;
        } else {
            stable = 0;
        }
        last = cur;
    }
    return false;
})()"#;

// --- ProfileFetcher trait ---

#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    /// Cleaned text of the user's public profile page, or `None` if the
    /// layout container could not be found.
    async fn fetch(&self, username: &str) -> Result<Option<String>>;
}

// --- Chromium implementation ---

pub struct ChromiumFetcher {
    executable: String,
    cleaner: Cleaner,
}

impl ChromiumFetcher {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            cleaner: Cleaner::new(),
        }
    }
}

/// `foo` and `@foo` address the same profile.
pub fn normalize_handle(username: &str) -> String {
    if username.starts_with('@') {
        username.to_string()
    } else {
        format!("@{username}")
    }
}

pub fn profile_url(username: &str) -> String {
    format!("{THREADS_BASE_URL}/{}", normalize_handle(username))
}

#[async_trait]
impl ProfileFetcher for ChromiumFetcher {
    async fn fetch(&self, username: &str) -> Result<Option<String>> {
        let handle = normalize_handle(username);
        let bare = handle[1..].to_lowercase();
        let url = profile_url(username);

        let config = BrowserConfig::builder()
            .chrome_executable(&self.executable)
            .no_sandbox()
            .window_size(1280, 800)
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .build()
            .map_err(|e| anyhow!("Failed to build browser config: {e}"))?;

        let (mut browser, mut handler) = Browser::launch(config).await?;
        let handler_task = tokio::spawn(async move { while handler.next().await.is_some() {} });

        let rendered = render_profile(&browser, &url).await;

        // Session release happens on every exit path, success or not.
        let _ = browser.close().await;
        let _ = browser.wait().await;
        handler_task.abort();

        let raw = rendered?;
        debug!(url, found = raw.is_some(), "profile page rendered");

        Ok(raw.map(|text| self.cleaner.clean(&text, &bare)))
    }
}

async fn render_profile(browser: &Browser, url: &str) -> Result<Option<String>> {
    let page = browser.new_page(url).await?;
    page.wait_for_navigation().await?;
    wait_for_network_idle(&page, url).await;

    let content: Option<String> = page.evaluate(LAYOUT_EXTRACT_JS).await?.into_value()?;
    Ok(content)
}

async fn wait_for_network_idle(page: &Page, url: &str) {
    match page.evaluate(NETWORK_IDLE_JS).await {
        Ok(val) => {
            if !val.into_value::<bool>().unwrap_or(false) {
                warn!(url, "network idle not reached before timeout");
            }
        }
        Err(e) => warn!(url, error = %e, "network idle wait failed"),
    }
}
