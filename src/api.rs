//! Backend REST client.
//!
//! Thin typed wrappers over the five gallery endpoints. Each call is a
//! single stateless round trip; errors come back as the user-facing
//! message the caller should surface, with transport detail logged here.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Maximum number of rows a list request will ask for. The backend caps
/// at the same value; there is no pagination beyond it.
pub const LIST_LIMIT: u32 = 100;

/// Backend base URL baked in at compile time; empty means same-origin.
pub fn base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("")
}

// ============================================================================
// Wire types
// ============================================================================

/// One commercial real-estate listing as the backend emits it.
///
/// Most attributes are pre-formatted display strings scraped from alert
/// emails, so nearly everything beyond the address is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    pub costar_id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub price_per_sf: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub cap_rate: Option<String>,
    #[serde(default)]
    pub square_feet: Option<String>,
    #[serde(default)]
    pub year_built: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub search_name: Option<String>,
}

/// Client-side listing predicates. Empty string means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFilter {
    /// Case-insensitive substring match on the city name.
    pub city: String,
    /// Exact state code, e.g. "TX".
    pub state: String,
    /// Exact property type as reported by the stats endpoint.
    pub property_type: String,
}

impl PropertyFilter {
    /// Whether any predicate is set.
    pub fn is_active(&self) -> bool {
        !self.city.is_empty() || !self.state.is_empty() || !self.property_type.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Query pairs for a list request: only non-empty predicates are
    /// included, the limit always is.
    pub fn to_query_pairs(&self, limit: u32) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if !self.city.is_empty() {
            pairs.push(("city", self.city.clone()));
        }
        if !self.state.is_empty() {
            pairs.push(("state", self.state.clone()));
        }
        if !self.property_type.is_empty() {
            pairs.push(("property_type", self.property_type.clone()));
        }
        pairs.push(("limit", limit.to_string()));
        pairs
    }
}

/// Aggregate counts over the whole collection, recomputed wholesale by
/// the backend. The map keys double as the filter option lists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_properties: u64,
    #[serde(default)]
    pub by_state: BTreeMap<String, u64>,
    #[serde(default)]
    pub by_type: BTreeMap<String, u64>,
}

/// Whether the backend holds a Gmail credential, plus a message to show
/// when it does not.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SyncStatus {
    pub configured: bool,
    #[serde(default)]
    pub message: String,
}

/// Outcome of a sync run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SyncReport {
    pub total_found: u64,
    pub new_added: u64,
}

/// Outcome of seeding demonstration rows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedReport {
    pub properties_added: u64,
}

#[derive(Deserialize)]
struct ListResponse {
    properties: Vec<Property>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

// ============================================================================
// Calls
// ============================================================================

/// Fetch listings matching `filter`, at most `limit` rows.
pub async fn list_properties(
    filter: &PropertyFilter,
    limit: u32,
) -> Result<Vec<Property>, String> {
    let request =
        Request::get(&format!("{}/api/properties", base_url())).query(filter.to_query_pairs(limit));
    match send_and_parse::<ListResponse>(request).await {
        Ok(body) => Ok(body.properties),
        Err(detail) => {
            log::error!("property list request failed: {detail}");
            Err("Failed to load properties. Please try again.".to_string())
        }
    }
}

/// Fetch aggregate counts. The error string is transport detail, not a
/// user-facing message; callers degrade silently.
pub async fn get_stats() -> Result<Stats, String> {
    send_and_parse(Request::get(&format!("{}/api/properties/stats", base_url()))).await
}

/// Fetch the Gmail credential status. Silent-degrade semantics as with
/// [`get_stats`].
pub async fn get_sync_status() -> Result<SyncStatus, String> {
    send_and_parse(Request::get(&format!("{}/api/sync-status", base_url()))).await
}

/// Kick off an email sync on the backend. On a non-2xx response the
/// backend's `detail` message is surfaced when the body carries one.
pub async fn trigger_sync(days_back: u32, max_emails: u32) -> Result<SyncReport, String> {
    const HINT: &str = "Sync failed. Please check Gmail credentials.";

    let request = Request::post(&format!("{}/api/sync-emails", base_url())).query([
        ("days_back", days_back.to_string()),
        ("max_emails", max_emails.to_string()),
    ]);
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            log::error!("sync request failed: {e}");
            return Err(HINT.to_string());
        }
    };
    if !response.ok() {
        log::error!("sync request failed: HTTP {}", response.status());
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        return Err(detail.unwrap_or_else(|| HINT.to_string()));
    }
    response.json::<SyncReport>().await.map_err(|e| {
        log::error!("sync response was not valid JSON: {e}");
        HINT.to_string()
    })
}

/// Insert demonstration listings on the backend.
pub async fn seed_sample() -> Result<SeedReport, String> {
    let request = Request::post(&format!("{}/api/seed-sample", base_url()));
    match send_and_parse::<SeedReport>(request).await {
        Ok(report) => Ok(report),
        Err(detail) => {
            log::error!("seed request failed: {detail}");
            Err("Failed to seed sample data.".to_string())
        }
    }
}

async fn send_and_parse<T: for<'de> Deserialize<'de>>(
    builder: RequestBuilder,
) -> Result<T, String> {
    let response: Response = builder.send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_all_empty() {
        let filter = PropertyFilter::default();
        assert_eq!(
            filter.to_query_pairs(LIST_LIMIT),
            vec![("limit", "100".to_string())]
        );
    }

    #[test]
    fn test_query_pairs_skip_empty_predicates() {
        let filter = PropertyFilter {
            city: String::new(),
            state: "TX".to_string(),
            property_type: String::new(),
        };
        assert_eq!(
            filter.to_query_pairs(LIST_LIMIT),
            vec![
                ("state", "TX".to_string()),
                ("limit", "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_all_set() {
        let filter = PropertyFilter {
            city: "Austin".to_string(),
            state: "TX".to_string(),
            property_type: "Office".to_string(),
        };
        assert_eq!(
            filter.to_query_pairs(LIST_LIMIT),
            vec![
                ("city", "Austin".to_string()),
                ("state", "TX".to_string()),
                ("property_type", "Office".to_string()),
                ("limit", "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_clear_resets_every_field() {
        let mut filter = PropertyFilter {
            city: "Dallas".to_string(),
            state: "TX".to_string(),
            property_type: "Retail".to_string(),
        };
        filter.clear();
        assert_eq!(filter, PropertyFilter::default());
        assert!(!filter.is_active());
    }

    #[test]
    fn test_is_active() {
        assert!(!PropertyFilter::default().is_active());
        let filter = PropertyFilter {
            city: "a".to_string(),
            ..Default::default()
        };
        assert!(filter.is_active());
    }

    #[test]
    fn test_property_optional_fields_deserialize() {
        let json = r#"{
            "costar_id": "12345",
            "address": "100 Congress Ave",
            "city": "Austin",
            "state": "TX"
        }"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.costar_id, "12345");
        assert!(property.price.is_none());
        assert!(property.image_url.is_none());
    }

    #[test]
    fn test_stats_default_when_maps_absent() {
        let stats: Stats = serde_json::from_str(r#"{"total_properties": 3}"#).unwrap();
        assert_eq!(stats.total_properties, 3);
        assert!(stats.by_state.is_empty());
        assert!(stats.by_type.is_empty());
    }
}
