//! # State Module
//!
//! Application state for the Shopfront client.
//!
//! ## Why Multiple State Types?
//! Instead of a single struct containing everything, the client uses separate
//! state types:
//!
//! 1. **Better Separation of Concerns**: each type has a single responsibility
//! 2. **Easier Testing**: every state runs against a fake provider in tests
//! 3. **Clearer Signatures**: views declare exactly what state they read
//! 4. **Reduced Contention**: independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌────────────────┐ ┌───────────────┐ ┌────────────┐ ┌─────────────┐  │
//! │  │SearchController│ │ CatalogState  │ │ CartState  │ │NotifierState│  │
//! │  │                │ │               │ │            │ │             │  │
//! │  │ • query/results│ │ • product list│ │ Arc<Mutex< │ │ • Toast     │  │
//! │  │ • sequencing   │ │ • error flag  │ │   Cart >>  │ │ • 3s timer  │  │
//! │  │ • dropdown     │ │ • filter proj.│ │            │ │             │  │
//! │  └────────────────┘ └───────────────┘ └────────────┘ └─────────────┘  │
//! │                                                        ┌────────────┐  │
//! │  THREAD SAFETY:                                        │ ThemeState │  │
//! │  • All mutable state behind Mutex                      │ • persisted│  │
//! │  • Locks are never held across an await                └────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod notifier;
mod search;
mod theme;

pub use cart::{CartState, CartSummary};
pub use catalog::CatalogState;
pub use notifier::NotifierState;
pub use search::SearchController;
pub use theme::{ThemeState, ThemeStore};
