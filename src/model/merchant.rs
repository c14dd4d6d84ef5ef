use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A normalized restaurant menu, ready for the display screen.
///
/// Only the fields the display screen reads are typed. Everything else the
/// conversion service or the user puts in the JSON is carried in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Merchant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<MenuCategory>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A section of the menu (pizzas, drinks, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MenuItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single dish or drink.
///
/// `price` stays untyped: services return numbers as well as formatted
/// strings such as `"R$ 42,00"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Merchant {
    /// Returns the merchant name, or a placeholder when the menu has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled menu")
    }

    /// Returns the total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Pretty-printed JSON for display.
    pub fn to_pretty_json(&self) -> String {
        // Serializing a tree of strings, maps and JSON values cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl MenuItem {
    /// Returns the price as display text.
    pub fn price_text(&self) -> Option<String> {
        match self.price.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
