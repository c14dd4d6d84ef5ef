use std::sync::LazyLock;

use crate::model::{Example, ExampleId, minify_json};

static PIZZA_EN: &str = include_str!("../../resources/examples/pizza_en.json");
static PIZZA_PT: &str = include_str!("../../resources/examples/pizza_pt.json");

static BUNDLED: LazyLock<Vec<Example>> = LazyLock::new(|| {
    vec![
        Example::new(
            "Pizza Sample (English)",
            ExampleId::PizzaEn,
            minify_json(PIZZA_EN).expect("valid bundled example"),
        ),
        Example::new(
            "Pizza Sample (Português)",
            ExampleId::PizzaPt,
            minify_json(PIZZA_PT).expect("valid bundled example"),
        ),
    ]
});

/// Returns the example menus shipped with the binary, as compact JSON.
pub fn bundled_examples() -> &'static [Example] {
    &BUNDLED
}
