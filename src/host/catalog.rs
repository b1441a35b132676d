/// Read-only registry of known cosmetic item names.
///
/// Only the name set is consumed; `item_names` order defines the order
/// matched cosmetics appear in reports.
pub trait CosmeticCatalog: Send + Sync {
    fn item_names(&self) -> Vec<String>;
}

/// Vec-backed catalog for hosts with a static item list, and for testing.
pub struct InMemoryCosmeticCatalog {
    items: Vec<String>,
}

impl InMemoryCosmeticCatalog {
    pub fn new(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl CosmeticCatalog for InMemoryCosmeticCatalog {
    fn item_names(&self) -> Vec<String> {
        self.items.clone()
    }
}
