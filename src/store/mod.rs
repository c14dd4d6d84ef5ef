//! Holds the menu record handed from the input form to the display screen,
//! plus the example menus the form can offer.

mod examples;
mod memory;

use crate::model::{Example, Merchant};

pub use examples::bundled_examples;
pub use memory::InMemoryMerchantStore;

/// Receives the menu a successful submit produces.
pub trait MerchantStore {
    /// Stores `merchant` as the active menu, replacing any previous one.
    fn set_merchant(&mut self, merchant: Merchant);

    /// Returns the active menu, if one has been submitted.
    fn merchant(&self) -> Option<&Merchant>;

    /// Returns the example menus offered in example mode.
    fn examples(&self) -> &[Example];
}
