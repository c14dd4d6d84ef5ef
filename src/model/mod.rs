mod example;
mod image;
mod input_mode;
mod merchant;
mod validation;

pub use example::{Example, ExampleId};
pub use image::ImageFile;
pub use input_mode::{ImageSubMode, InputMode, ModeSet};
pub use merchant::{MenuCategory, MenuItem, Merchant};
pub use validation::{ValidationError, minify_json, parse_merchant};
