use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::models::{CatalogResponse, DetailResponse};
use crate::config::ApiConfig;
use crate::domain::{AttributeVector, CatalogEntry, StatAxis};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected payload from {url}: {reason}")]
    Payload { url: String, reason: String },
}

/// HTTP client for the catalog and detail endpoints. Cheap to clone; clones
/// share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DexClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DexClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the full catalog in one request and assigns sequential ids
    /// starting at 1 in response order.
    pub async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, ApiError> {
        let url = self.config.catalog_url();
        let payload: CatalogResponse = self.get_json(&url).await?;

        let entries = payload
            .results
            .into_iter()
            .enumerate()
            .map(|(index, resource)| {
                let id = u32::try_from(index + 1).unwrap_or(u32::MAX);
                CatalogEntry::new(id, resource.name, resource.url)
            })
            .collect();

        Ok(entries)
    }

    /// Fetches one creature's base stats via its detail URL.
    pub async fn fetch_attributes(&self, entry: &CatalogEntry) -> Result<AttributeVector, ApiError> {
        let detail: DetailResponse = self.get_json(&entry.detail_url).await?;
        attributes_from_detail(&detail, &entry.detail_url)
    }

    /// Fetches base stats for every entry concurrently, preserving input
    /// order. Fails as a whole if any single fetch fails.
    pub async fn fetch_all_attributes(
        &self,
        entries: &[CatalogEntry],
    ) -> Result<Vec<AttributeVector>, ApiError> {
        try_join_all(entries.iter().map(|entry| self.fetch_attributes(entry))).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

/// Maps a detail payload into the canonical axis order. Every axis must be
/// present in the payload; anything else is a malformed response.
pub fn attributes_from_detail(
    detail: &DetailResponse,
    url: &str,
) -> Result<AttributeVector, ApiError> {
    let mut stats = Vec::with_capacity(StatAxis::ALL.len());

    for axis in StatAxis::ALL {
        let value = detail
            .stats
            .iter()
            .find(|slot| StatAxis::parse(&slot.stat.name) == Some(axis))
            .map(|slot| slot.base_stat)
            .ok_or_else(|| ApiError::Payload {
                url: url.to_string(),
                reason: format!("missing stat {}", axis.as_str()),
            })?;
        stats.push((axis, value));
    }

    Ok(AttributeVector {
        entity_name: detail.name.clone(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{StatRef, StatSlot};

    fn slot(name: &str, value: u32) -> StatSlot {
        StatSlot {
            base_stat: value,
            stat: StatRef {
                name: name.to_string(),
            },
        }
    }

    #[test]
    fn detail_maps_into_canonical_order() {
        // Payload order deliberately scrambled.
        let detail = DetailResponse {
            name: "charmander".to_string(),
            stats: vec![
                slot("speed", 65),
                slot("hp", 39),
                slot("special-defense", 50),
                slot("attack", 52),
                slot("special-attack", 60),
                slot("defense", 43),
            ],
        };

        let vector = attributes_from_detail(&detail, "http://x/4/").unwrap();
        let values: Vec<u32> = vector.stats.iter().map(|(_, value)| *value).collect();
        assert_eq!(values, [39, 52, 43, 60, 50, 65]);
        assert_eq!(vector.entity_name, "charmander");
    }

    #[test]
    fn missing_axis_is_a_payload_error() {
        let detail = DetailResponse {
            name: "missingno".to_string(),
            stats: vec![slot("hp", 33)],
        };

        let error = attributes_from_detail(&detail, "http://x/0/").unwrap_err();
        assert!(matches!(error, ApiError::Payload { .. }));
        assert!(error.to_string().contains("missing stat attack"));
    }
}
