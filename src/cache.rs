use crate::api::ShortenerApi;
use crate::error::Error;
use crate::models::LinkRecord;
use crate::store::LinkStore;
use chrono::{DateTime, Utc};

/// The link cache synchronizer: an ordered collection of [`LinkRecord`]
/// mirrored to a single persisted slot.
///
/// The cache exclusively owns both the in-memory collection and the slot's
/// serialization; nothing else writes to that slot. All mutation goes
/// through `&mut self`, so within one cache instance operations cannot
/// interleave — run [`LinkCache::load`] to completion before the first
/// `create`/`remove` and the lost-update hazard on the slot never arises.
pub struct LinkCache<A, S> {
    api: A,
    store: S,
    links: Vec<LinkRecord>,
}

impl<A: ShortenerApi, S: LinkStore> LinkCache<A, S> {
    /// An empty cache over the given API client and persisted slot. Call
    /// [`load`](Self::load) to populate it.
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            links: Vec::new(),
        }
    }

    /// The current collection, sorted by `created_at` descending.
    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    /// Rebuild the in-memory collection from the persisted slot.
    ///
    /// Records whose expiration has passed are dropped silently. Each
    /// surviving record gets a fresh stats lookup; a record whose lookup
    /// fails is skipped so one dead key never blanks the whole list. The
    /// refreshed result is sorted newest-first.
    ///
    /// The slot itself is not rewritten here — pruning is a view-level
    /// filter, and expired entries leave persisted storage on the next
    /// explicit mutation.
    pub async fn load(&mut self) -> Result<(), Error> {
        let stored: Vec<LinkRecord> = match self.store.read().await? {
            Some(payload) => serde_json::from_str(&payload)
                .map_err(|e| Error::PersistenceFailed(format!("decoding slot: {e}")))?,
            None => Vec::new(),
        };

        let now = Utc::now();
        let mut refreshed = Vec::with_capacity(stored.len());
        for mut record in stored {
            if record.is_expired(now) {
                tracing::debug!("dropping expired link '{}'", record.key);
                continue;
            }
            match self.api.stats(&record.key).await {
                Ok(stats) => {
                    record.apply_stats(&stats);
                    refreshed.push(record);
                }
                Err(e) => tracing::warn!("skipping link '{}': {}", record.key, e),
            }
        }

        sort_newest_first(&mut refreshed);
        self.links = refreshed;
        Ok(())
    }

    /// Create a short link for `long_url` and add it to the collection.
    ///
    /// Calls the remote create endpoint, fetches the new key's stats, and
    /// merges both responses into one record at its sorted position. The
    /// full collection is written to the slot before memory is updated, so
    /// any failure leaves both memory and the slot exactly as they were.
    pub async fn create(
        &mut self,
        long_url: &str,
        expire_at: Option<DateTime<Utc>>,
    ) -> Result<LinkRecord, Error> {
        if long_url.is_empty() {
            return Err(Error::EmptyUrl);
        }

        let created = self.api.create(long_url, expire_at).await?;
        let stats = self.api.stats(&created.key).await?;

        let record = LinkRecord {
            key: created.key,
            short_url: created.short_url,
            long_url: created.long_url,
            created_at: stats.created_at,
            expire_at: stats.expire_at,
            clicks: stats.clicks,
        };

        // Key uniqueness: a re-issued key replaces the old record.
        let mut next: Vec<LinkRecord> = self
            .links
            .iter()
            .filter(|l| l.key != record.key)
            .cloned()
            .collect();
        next.push(record.clone());
        sort_newest_first(&mut next);

        self.persist(&next).await?;
        self.links = next;
        Ok(record)
    }

    /// Drop the record with `key`, if present, and re-persist.
    ///
    /// Idempotent: removing an absent key is a no-op that still rewrites
    /// the slot. A failed write surfaces as [`Error::PersistenceFailed`]
    /// with the in-memory collection already filtered.
    pub async fn remove(&mut self, key: &str) -> Result<(), Error> {
        self.links.retain(|l| l.key != key);
        self.persist(&self.links).await
    }

    async fn persist(&self, links: &[LinkRecord]) -> Result<(), Error> {
        let payload = serde_json::to_string(links)
            .map_err(|e| Error::PersistenceFailed(format!("encoding slot: {e}")))?;
        self.store.write(&payload).await
    }
}

/// Most recently created first; stable, so equal timestamps keep their
/// relative order.
fn sort_newest_first(links: &mut [LinkRecord]) {
    links.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
