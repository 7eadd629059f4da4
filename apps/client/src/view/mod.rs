//! # View Models
//!
//! Renderer-agnostic view models. The visual layer (layout, styling) is out
//! of scope; a renderer binds to these structs instead of touching domain
//! types, so every formatting rule (truncation, price grouping, image
//! resolution, button enablement) is applied in exactly one place.

mod home;
mod results;

pub use home::{render_home, HomeView, ProductCard, ADD_TO_CART_LABEL, OUT_OF_STOCK_LABEL};
pub use results::{mount_results, ResultCard, ResultsMount};
