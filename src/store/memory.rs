use tracing::debug;

use super::{MerchantStore, bundled_examples};
use crate::model::{Example, Merchant};

/// Keeps the active menu in memory for the lifetime of the app.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMerchantStore {
    merchant: Option<Merchant>,
    examples: Vec<Example>,
}

impl InMemoryMerchantStore {
    /// Creates a store offering the given examples.
    pub fn new(examples: Vec<Example>) -> Self {
        Self {
            merchant: None,
            examples,
        }
    }

    /// Creates a store offering the examples shipped with the binary.
    pub fn with_bundled_examples() -> Self {
        Self::new(bundled_examples().to_vec())
    }
}

impl MerchantStore for InMemoryMerchantStore {
    fn set_merchant(&mut self, merchant: Merchant) {
        debug!(name = merchant.display_name(), "storing active menu");
        self.merchant = Some(merchant);
    }

    fn merchant(&self) -> Option<&Merchant> {
        self.merchant.as_ref()
    }

    fn examples(&self) -> &[Example] {
        &self.examples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merchant(name: &str) -> Merchant {
        Merchant {
            name: Some(name.into()),
            ..Merchant::default()
        }
    }

    #[test]
    fn starts_without_merchant() {
        let store = InMemoryMerchantStore::default();
        assert!(store.merchant().is_none());
        assert!(store.examples().is_empty());
    }

    #[test]
    fn set_merchant_replaces_previous() {
        let mut store = InMemoryMerchantStore::default();
        store.set_merchant(merchant("First"));
        store.set_merchant(merchant("Second"));
        assert_eq!(store.merchant().unwrap().display_name(), "Second");
    }

    #[test]
    fn bundled_store_offers_examples() {
        let store = InMemoryMerchantStore::with_bundled_examples();
        assert_eq!(store.examples().len(), 2);
    }
}
