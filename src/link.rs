//! Link admission gate
//!
//! The app is opened through a deep link printed as a QR code on the table:
//! `https://host/{tableNumber}/{tableId}?ts=<epoch-seconds>`. The gate
//! parses the link once at startup, decides whether it is still inside its
//! validity window, and extracts the table seeding for the form.

use chrono::{DateTime, Utc};
use url::Url;

/// Validity window of an issued link, in seconds
pub const ADMISSION_WINDOW_SECS: i64 = 600;

/// Parsed deep link, evaluated once at startup
#[derive(Debug, Clone, Default)]
pub struct TableLink {
    /// Origin host of the link, for branding lookup
    pub host: Option<String>,
    /// Table number from the first path segment, when it parses as a number
    pub table_number: Option<String>,
    /// Opaque table identifier from the second path segment
    pub table_id: Option<String>,
    /// Link issuance timestamp from the `ts` query parameter
    pub issued_at: Option<DateTime<Utc>>,
}

impl TableLink {
    /// Parse a deep link. A missing or unparseable URL behaves like a link
    /// with no timestamp and no table seeding.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let Ok(url) = Url::parse(raw) else {
            tracing::warn!("Unparseable link, treating as untimestamped: {raw}");
            return Self::default();
        };

        let host = url.host_str().map(|h| h.to_string());

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        // Table seeding only applies when the first segment is numeric;
        // other paths carry no table binding.
        let (table_number, table_id) = match segments.first() {
            Some(first) if first.parse::<u64>().is_ok() => (
                Some((*first).to_string()),
                segments.get(1).map(|s| (*s).to_string()),
            ),
            _ => (None, None),
        };

        let issued_at = url
            .query_pairs()
            .find(|(k, _)| k == "ts")
            .and_then(|(_, v)| v.parse::<i64>().ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0));

        Self {
            host,
            table_number,
            table_id,
            issued_at,
        }
    }

    /// Whether the link is still inside its admission window at `now`.
    /// Links without a timestamp are valid indefinitely.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        match self.issued_at {
            Some(issued_at) => (now - issued_at).num_seconds() <= ADMISSION_WINDOW_SECS,
            None => true,
        }
    }

    /// Whether the table-number field is seeded from the link and therefore
    /// read-only in the form
    pub fn locks_table_number(&self) -> bool {
        self.table_number.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn link_with_ts(offset_secs: i64, now: DateTime<Utc>) -> TableLink {
        let ts = (now - Duration::seconds(offset_secs)).timestamp();
        TableLink::parse(Some(&format!("https://factura.example.com/12/abc?ts={ts}")))
    }

    #[test]
    fn test_link_older_than_window_is_expired() {
        let now = Utc::now();
        assert!(!link_with_ts(601, now).is_valid_at(now));
    }

    #[test]
    fn test_link_inside_window_is_valid() {
        let now = Utc::now();
        assert!(link_with_ts(599, now).is_valid_at(now));
    }

    #[test]
    fn test_link_without_timestamp_is_valid_indefinitely() {
        let now = Utc::now();
        let link = TableLink::parse(Some("https://factura.example.com/12/abc"));
        assert!(link.is_valid_at(now));
        assert!(link.is_valid_at(now + Duration::days(365)));
    }

    #[test]
    fn test_missing_link_is_valid_and_unseeded() {
        let link = TableLink::parse(None);
        assert!(link.is_valid_at(Utc::now()));
        assert_eq!(link.table_number, None);
        assert_eq!(link.table_id, None);
        assert!(!link.locks_table_number());
    }

    #[test]
    fn test_table_seeding_from_path_segments() {
        let link = TableLink::parse(Some("https://factura.example.com/7/mesa-07?ts=0"));
        assert_eq!(link.table_number.as_deref(), Some("7"));
        assert_eq!(link.table_id.as_deref(), Some("mesa-07"));
        assert!(link.locks_table_number());
    }

    #[test]
    fn test_non_numeric_first_segment_seeds_nothing() {
        let link = TableLink::parse(Some("https://factura.example.com/menu/abc"));
        assert_eq!(link.table_number, None);
        assert_eq!(link.table_id, None);
    }

    #[test]
    fn test_table_number_without_id() {
        let link = TableLink::parse(Some("https://factura.example.com/3"));
        assert_eq!(link.table_number.as_deref(), Some("3"));
        assert_eq!(link.table_id, None);
    }

    #[test]
    fn test_unparseable_url_behaves_like_untimestamped() {
        let link = TableLink::parse(Some("not a url"));
        assert!(link.is_valid_at(Utc::now()));
        assert_eq!(link.table_number, None);
    }

    #[test]
    fn test_garbage_ts_is_ignored() {
        let link = TableLink::parse(Some("https://factura.example.com/12/abc?ts=soon"));
        assert_eq!(link.issued_at, None);
        assert!(link.is_valid_at(Utc::now()));
    }

    #[test]
    fn test_host_is_extracted() {
        let link = TableLink::parse(Some("https://factura.example.com/12/abc"));
        assert_eq!(link.host.as_deref(), Some("factura.example.com"));
    }
}
