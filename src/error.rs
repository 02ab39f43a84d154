use thiserror::Error;

/// Failures surfaced by the link cache and its collaborators.
///
/// Every remote-call failure is caught at the call site and converted into
/// one of these; nothing propagates as an uncaught fault. Retrying is always
/// explicit (the caller re-invokes the operation) — never automatic.
#[derive(Debug, Error)]
pub enum Error {
    /// The client-side pre-check rejected an empty URL before any remote
    /// call was issued. The server does all further validation.
    #[error("url must not be empty")]
    EmptyUrl,

    /// The remote create call failed (network error or non-2xx response).
    /// No state was mutated; the same inputs can simply be submitted again.
    #[error("failed to create short link: {0}")]
    CreateFailed(String),

    /// The stats lookup for one key failed. Scoped to that single key —
    /// during a reload the affected record is skipped, not the whole list.
    #[error("failed to fetch stats for '{key}': {reason}")]
    StatsFetchFailed { key: String, reason: String },

    /// Reading or writing the persisted slot failed. After a failed write
    /// the in-memory collection may diverge from what is on disk.
    #[error("persisted link slot error: {0}")]
    PersistenceFailed(String),
}
