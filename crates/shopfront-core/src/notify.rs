//! # Toast Notification State
//!
//! Pure state for the add-to-cart confirmation toast. Three-state lifecycle:
//!
//! ```text
//!            add_to_cart                3000ms timeout / dismiss
//!  Hidden ───────────────► Shown ───────────────────────────────► Hidden
//! ```
//!
//! The core holds the states and transitions; the app layer drives the
//! single-shot timer (see [`TOAST_DISMISS_MS`](crate::TOAST_DISMISS_MS)).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::image;
use crate::types::Product;

/// What the toast displays: the added product's name and thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastContent {
    /// Name of the product that was added.
    pub product_name: String,

    /// Resolved, always-renderable image source for the thumbnail.
    pub image_src: String,
}

impl ToastContent {
    /// Builds toast content from the added product.
    pub fn from_product(product: &Product) -> Self {
        ToastContent {
            product_name: product.name.clone(),
            image_src: image::resolve_image_source(product.image_data.as_deref()),
        }
    }
}

/// Toast visibility state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Toast {
    /// Nothing showing.
    #[default]
    Hidden,

    /// Confirmation visible since `shown_at`.
    Shown {
        content: ToastContent,
        shown_at: DateTime<Utc>,
    },
}

impl Toast {
    /// Transitions to Shown for the given product.
    ///
    /// A toast already showing is replaced; the pending auto-dismiss of the
    /// replaced toast must not hide the new one (the app layer enforces this
    /// via timer generations).
    pub fn show(&mut self, product: &Product) {
        *self = Toast::Shown {
            content: ToastContent::from_product(product),
            shown_at: Utc::now(),
        };
    }

    /// Transitions to Hidden (timeout or explicit dismissal).
    pub fn dismiss(&mut self) {
        *self = Toast::Hidden;
    }

    /// Whether the toast is currently visible.
    pub fn is_shown(&self) -> bool {
        matches!(self, Toast::Shown { .. })
    }

    /// The displayed content, if visible.
    pub fn content(&self) -> Option<&ToastContent> {
        match self {
            Toast::Hidden => None,
            Toast::Shown { content, .. } => Some(content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use crate::PLACEHOLDER_IMAGE;

    fn product(name: &str, image_data: Option<&str>) -> Product {
        Product {
            id: "p-1".to_string(),
            name: name.to_string(),
            brand: "Acme".to_string(),
            description: None,
            price_cents: 1000,
            category: Category::Toys,
            stock_quantity: 5,
            product_available: true,
            image_data: image_data.map(str::to_string),
        }
    }

    #[test]
    fn test_lifecycle_hidden_shown_hidden() {
        let mut toast = Toast::default();
        assert!(!toast.is_shown());

        toast.show(&product("Lego Set", None));
        assert!(toast.is_shown());
        assert_eq!(toast.content().unwrap().product_name, "Lego Set");

        toast.dismiss();
        assert!(!toast.is_shown());
        assert!(toast.content().is_none());
    }

    #[test]
    fn test_new_show_replaces_previous_content() {
        let mut toast = Toast::default();
        toast.show(&product("First", None));
        toast.show(&product("Second", None));

        assert_eq!(toast.content().unwrap().product_name, "Second");
    }

    #[test]
    fn test_content_resolves_image() {
        let content = ToastContent::from_product(&product("X", None));
        assert_eq!(content.image_src, PLACEHOLDER_IMAGE);

        let content = ToastContent::from_product(&product("X", Some("AAAA")));
        assert_eq!(content.image_src, "data:image/jpeg;base64,AAAA");
    }
}
