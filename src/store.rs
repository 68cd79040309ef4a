//! Session State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The state lives
//! for one page session and is never persisted.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::debug;

use crate::models::ALL_CATEGORIES;

/// Mutable UI state of one storefront session
#[derive(Clone, Debug, PartialEq, Store)]
pub struct SessionState {
    /// `"All"` or a category label
    pub selected_category: String,
    /// Add-to-cart clicks so far
    pub cart_count: u32,
    /// Whether the mobile navigation list is shown
    pub menu_open: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_string(),
            cart_count: 0,
            menu_open: false,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}

// Saturates instead of wrapping
fn increment(count: &mut u32) {
    *count = count.saturating_add(1);
}

fn toggle(flag: &mut bool) {
    *flag = !*flag;
}

/// Type alias for the store
pub type SessionStore = Store<SessionState>;

/// Get the session store from context
pub fn use_session_store() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record one add-to-cart event
pub fn store_add_to_cart(store: &SessionStore) {
    store.cart_count().update(increment);
    debug!(count = store.cart_count().get_untracked(), "added to cart");
}

/// Flip the mobile menu flag
pub fn store_toggle_menu(store: &SessionStore) {
    store.menu_open().update(toggle);
    debug!(open = store.menu_open().get_untracked(), "menu toggled");
}

/// Change the category filter
pub fn store_select_category(store: &SessionStore, category: &str) {
    *store.selected_category().write() = category.to_string();
    debug!(category, "category selected");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn new_store() -> SessionStore {
        Store::new(SessionState::new())
    }

    #[test]
    fn test_initial_state() {
        let store = new_store();
        assert_eq!(store.selected_category().get_untracked(), ALL_CATEGORIES);
        assert_eq!(store.cart_count().get_untracked(), 0);
        assert!(!store.menu_open().get_untracked());
    }

    #[test]
    fn test_cart_counts_every_event() {
        for n in [0u32, 1, 3, 17] {
            let store = new_store();
            for _ in 0..n {
                store_add_to_cart(&store);
            }
            assert_eq!(store.cart_count().get_untracked(), n);
        }
    }

    #[test]
    fn test_cart_saturates() {
        let store = Store::new(SessionState { cart_count: u32::MAX - 1, ..SessionState::new() });
        store_add_to_cart(&store);
        store_add_to_cart(&store);
        assert_eq!(store.cart_count().get_untracked(), u32::MAX);
    }

    #[test]
    fn test_menu_toggle_parity() {
        let store = new_store();
        for toggles in 1..=6 {
            store_toggle_menu(&store);
            assert_eq!(store.menu_open().get_untracked(), toggles % 2 == 1);
        }
    }

    #[test]
    fn test_helpers_touch_only_their_field() {
        let store = new_store();
        store_add_to_cart(&store);
        store_add_to_cart(&store);
        store_add_to_cart(&store);
        store_toggle_menu(&store);
        store_select_category(&store, "Casual");

        assert_eq!(store.cart_count().get_untracked(), 3);
        assert!(store.menu_open().get_untracked());
        assert_eq!(store.selected_category().get_untracked(), "Casual");

        store_toggle_menu(&store);
        assert_eq!(store.cart_count().get_untracked(), 3);
        assert_eq!(store.selected_category().get_untracked(), "Casual");
    }

    #[test]
    fn test_selection_drives_visible_products() {
        let products = catalog::seed();
        let store = new_store();
        let visible = || {
            store
                .selected_category()
                .with_untracked(|selected| catalog::filter_by_category(&products, selected))
        };

        store_select_category(&store, "Casual");
        let casual: Vec<u32> = visible().iter().map(|p| p.id).collect();
        assert_eq!(casual, vec![3, 5]);

        store_select_category(&store, ALL_CATEGORIES);
        assert_eq!(visible(), products);
    }
}
