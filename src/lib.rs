//! Client for a URL-shortening service.
//!
//! The user submits a long URL (plus an optional expiration date), the
//! service mints a short link, and the resulting list of links lives in a
//! locally persisted slot — one JSON file — together with per-link click
//! counts and expiration metadata.
//!
//! The heart of the crate is [`LinkCache`], which keeps the in-memory link
//! collection and the persisted slot in step: it loads and prunes the slot
//! at startup, refreshes each surviving record's stats from the service,
//! keeps the collection sorted newest-first, and persists every mutation.
//! Both of its collaborators are injected as traits ([`ShortenerApi`] for
//! the two remote endpoints, [`LinkStore`] for the slot), so the whole
//! thing runs against in-memory fakes in tests.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{HttpShortenerApi, ShortenerApi};
pub use cache::LinkCache;
pub use config::AppConfig;
pub use error::Error;
pub use models::{CreatedLink, LinkRecord, LinkStats};
pub use store::{FileStore, LinkStore, MemoryStore};
