//! Category Filter Component
//!
//! One pill button per category; the active one is highlighted.

use leptos::prelude::*;

use crate::models::CATEGORIES;
use crate::store::{store_select_category, use_session_store, SessionStateStoreFields};

#[component]
pub fn CategoryFilter() -> impl IntoView {
    let store = use_session_store();

    view! {
        <div class="flex flex-wrap justify-center gap-4 mb-12">
            {CATEGORIES.iter().map(|&category| {
                let is_selected = move || store.selected_category().with(|selected| selected.as_str() == category);
                view! {
                    <button
                        class=move || if is_selected() {
                            "px-6 py-3 rounded-full font-medium transition-all duration-300 transform hover:scale-105 bg-gradient-to-r from-blue-500 to-purple-500 text-white shadow-lg"
                        } else {
                            "px-6 py-3 rounded-full font-medium transition-all duration-300 transform hover:scale-105 bg-white text-gray-700 hover:bg-gray-100 shadow-md"
                        }
                        on:click=move |_| store_select_category(&store, category)
                    >
                        {category}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
