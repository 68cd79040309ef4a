//! Products Section
//!
//! Heading, category filter and the grid of visible products.

use leptos::prelude::*;

use super::{CategoryFilter, ProductCard};
use crate::context::use_shop_context;
use crate::store::{use_session_store, SessionStateStoreFields};

#[component]
pub fn ProductGrid() -> impl IntoView {
    let shop = use_shop_context();
    let store = use_session_store();

    // Recomputed only when the selection changes
    let visible = Memo::new(move |_| store.selected_category().with(|selected| shop.visible(selected)));

    view! {
        <section id="products" class="py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h3 class="text-4xl font-bold text-gray-900 mb-4">"Featured Products"</h3>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Discover our latest collection of premium shoes designed for comfort, style, and performance"
                    </p>
                </div>

                <CategoryFilter />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || visible.get()
                        key=|product| product.id
                        children=move |product| view! { <ProductCard product=product /> }
                    />
                </div>
            </div>
        </section>
    }
}
