use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One short link with its metadata and click count.
///
/// Records serialize with RFC 3339 date strings, which is the one format
/// shared by the persisted slot and the remote stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Unique identifier assigned by the remote service; primary key for
    /// dedup and removal.
    pub key: String,
    /// Fully qualified short link, as returned by the create call.
    pub short_url: String,
    /// Original URL supplied by the user.
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
    pub clicks: u64,
}

impl LinkRecord {
    /// `true` once `expire_at` is strictly in the past relative to `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expire_at < now
    }

    /// Overwrite the mutable fields with freshly fetched stats.
    pub fn apply_stats(&mut self, stats: &LinkStats) {
        self.clicks = stats.clicks;
        self.created_at = stats.created_at;
        self.expire_at = stats.expire_at;
    }
}

// ── Wire types ─────────────────────────────────────────────────────────────

/// Success body of `POST {base}/short`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedLink {
    pub key: String,
    pub short_url: String,
    pub long_url: String,
}

/// Success body of `GET {base}/short/{key}/stats`.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkStats {
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
}

/// Request body of the create call. `expirationDate` is omitted entirely
/// when the user did not pick a date.
#[derive(Debug, Serialize)]
pub struct CreateRequest<'a> {
    pub url: &'a str,
    #[serde(rename = "expirationDate", skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn stats_body_parses_rfc3339_dates() {
        let body = r#"{
            "clicks": 7,
            "created_at": "2024-03-01T10:00:00Z",
            "expire_at": "2024-04-01T10:00:00Z"
        }"#;
        let stats: LinkStats = serde_json::from_str(body).unwrap();
        assert_eq!(stats.clicks, 7);
        assert!(stats.expire_at > stats.created_at);
    }

    #[test]
    fn expiry_is_strictly_past() {
        let now = Utc::now();
        let mut record = LinkRecord {
            key: "abc".into(),
            short_url: "https://sho.rt/abc".into(),
            long_url: "https://example.com".into(),
            created_at: now - Duration::days(1),
            expire_at: now,
            clicks: 0,
        };
        // expire_at == now is still alive; only strictly-past expires
        assert!(!record.is_expired(now));
        record.expire_at = now - Duration::seconds(1);
        assert!(record.is_expired(now));
    }

    #[test]
    fn create_request_omits_absent_expiration() {
        let without = CreateRequest {
            url: "https://example.com",
            expiration_date: None,
        };
        let json = serde_json::to_string(&without).unwrap();
        assert!(!json.contains("expirationDate"));

        let with = CreateRequest {
            url: "https://example.com",
            expiration_date: Some(Utc::now()),
        };
        let json = serde_json::to_string(&with).unwrap();
        assert!(json.contains("expirationDate"));
    }
}
