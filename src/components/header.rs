//! Header Component
//!
//! Sticky header with brand, desktop nav, cart badge and the mobile menu.

use leptos::prelude::*;

use crate::config::{NavLink, SITE};
use crate::store::{store_toggle_menu, use_session_store, SessionStateStoreFields};

const NAV_HOVER: &[&str] = &["hover:text-blue-600", "hover:text-pink-500", "hover:text-orange-500", "hover:text-green-500"];

fn hover_class(index: usize) -> &'static str {
    NAV_HOVER[index % NAV_HOVER.len()]
}

#[component]
fn NavLinks(item_class: &'static str) -> impl IntoView {
    SITE.nav
        .iter()
        .enumerate()
        .map(|(i, NavLink { label, href })| {
            view! {
                <a href=*href class=format!("{item_class} {}", hover_class(i))>{*label}</a>
            }
        })
        .collect_view()
}

/// Cart glyph with a count badge, hidden while the cart is empty
#[component]
fn CartBadge() -> impl IntoView {
    let store = use_session_store();
    let count = move || store.cart_count().get();

    view! {
        <div class="relative" title="Cart">
            <span class="text-2xl text-gray-700 hover:text-blue-600 cursor-pointer">"🛒"</span>
            <Show when=move || { count() > 0 }>
                <span class="absolute -top-2 -right-2 bg-pink-500 text-white text-xs rounded-full h-5 w-5 flex items-center justify-center animate-pulse">
                    {count}
                </span>
            </Show>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let store = use_session_store();
    let menu_open = move || store.menu_open().get();

    view! {
        <header class="bg-white shadow-lg sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <h1 class="text-3xl font-bold bg-gradient-to-r from-blue-600 via-pink-500 to-orange-500 bg-clip-text text-transparent">
                        {SITE.brand}
                    </h1>

                    <nav class="hidden md:flex space-x-8">
                        <NavLinks item_class="text-gray-700 transition-colors duration-200 font-medium" />
                    </nav>

                    <div class="flex items-center space-x-4">
                        <CartBadge />
                        <button
                            class="md:hidden text-2xl"
                            aria-label="Toggle menu"
                            on:click=move |_| store_toggle_menu(&store)
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=menu_open>
                <div class="md:hidden bg-white border-t animate-fade-in">
                    <div class="px-4 pt-2 pb-4 space-y-2">
                        <NavLinks item_class="block py-2 text-gray-700 transition-colors" />
                    </div>
                </div>
            </Show>
        </header>
    }
}
