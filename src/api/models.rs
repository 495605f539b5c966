use serde::Deserialize;

/// Catalog listing payload: `{ "count": .., "results": [{ "name", "url" }] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub count: u64,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Detail payload. Only the name and the stats block are consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailResponse {
    pub name: String,
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: StatRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatRef {
    pub name: String,
}
