use std::fmt;

/// Identifies a bundled example menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExampleId {
    PizzaEn,
    PizzaPt,
}

impl ExampleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExampleId::PizzaEn => "pizza_en",
            ExampleId::PizzaPt => "pizza_pt",
        }
    }
}

#[mutants::skip]
impl fmt::Display for ExampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, ready-to-submit menu payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// Name shown in the example picker.
    pub name: String,
    pub id: ExampleId,
    /// Compact menu JSON.
    pub text: String,
}

impl Example {
    pub fn new(name: impl Into<String>, id: ExampleId, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id,
            text: text.into(),
        }
    }
}
