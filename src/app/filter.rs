use crate::domain::CatalogEntry;

/// Case-insensitive substring filter over the catalog. Pure; recomputed
/// after every keystroke. An empty term returns the full catalog in order.
pub fn filter_catalog(catalog: &[CatalogEntry], term: &str) -> Vec<CatalogEntry> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.to_vec();
    }

    catalog
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
