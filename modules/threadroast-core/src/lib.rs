//! Roast pipeline: scrape a Threads profile, generate a roast, cache it.
//!
//! The orchestrator in [`roaster`] is the single public entry point; the
//! browser, the generation API, and the cache sit behind the
//! [`fetcher::ProfileFetcher`], [`generator::TextGenerator`], and
//! [`store::RoastStore`] traits.

pub mod clean;
pub mod fetcher;
pub mod generator;
pub mod roaster;
pub mod store;

pub use fetcher::{ChromiumFetcher, ProfileFetcher};
pub use generator::TextGenerator;
pub use roaster::Roaster;
pub use store::{PgRoastStore, RoastRecord, RoastStore};
