//! Product Card Component
//!
//! Image with badges, star rating, prices and the add-to-cart button.

use leptos::prelude::*;

use crate::models::Product;
use crate::pricing::{filled_stars, format_price, MAX_STARS};
use crate::store::{store_add_to_cart, use_session_store};

#[component]
fn StarRating(rating: f32) -> impl IntoView {
    let filled = filled_stars(rating);

    view! {
        <div class="flex items-center mb-3">
            {(0..MAX_STARS).map(|i| {
                let class = if i < filled { "text-yellow-400" } else { "text-gray-300" };
                view! { <span class=format!("text-base {class}")>"★"</span> }
            }).collect_view()}
            <span class="ml-2 text-gray-600 text-sm">{format!("({rating})")}</span>
        </div>
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let store = use_session_store();
    let Product { name, price, original_price, image, rating, is_new, is_sale, .. } = product;

    view! {
        <div class="bg-white rounded-2xl shadow-lg overflow-hidden transform hover:scale-105 transition-all duration-300 hover:shadow-2xl group">
            <div class="relative">
                <img
                    src=image
                    alt=name.clone()
                    class="w-full h-64 object-cover group-hover:scale-110 transition-transform duration-300"
                />
                <Show when=move || is_new>
                    <span class="absolute top-4 left-4 bg-gradient-to-r from-green-400 to-blue-500 text-white px-3 py-1 rounded-full text-sm font-bold">
                        "NEW"
                    </span>
                </Show>
                <Show when=move || is_sale>
                    <span class="absolute top-4 right-4 bg-gradient-to-r from-orange-400 to-red-500 text-white px-3 py-1 rounded-full text-sm font-bold">
                        "SALE"
                    </span>
                </Show>
                <button class="absolute top-4 left-1/2 transform -translate-x-1/2 opacity-0 group-hover:opacity-100 transition-opacity duration-300 text-2xl text-white hover:text-red-500">
                    "♡"
                </button>
            </div>
            <div class="p-6">
                <h4 class="text-xl font-bold text-gray-900 mb-2">{name}</h4>
                <StarRating rating=rating />
                <div class="flex items-center justify-between mb-4">
                    <div>
                        <span class="text-2xl font-bold text-gray-900">{format_price(price)}</span>
                        {original_price.map(|original| view! {
                            <span class="ml-2 text-lg text-gray-500 line-through">{format_price(original)}</span>
                        })}
                    </div>
                </div>
                <button
                    class="w-full bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 text-white py-3 px-6 rounded-full font-semibold transition-all duration-300 transform hover:scale-105 shadow-lg"
                    on:click=move |_| store_add_to_cart(&store)
                >
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
