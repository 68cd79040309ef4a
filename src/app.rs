//! Solezza Storefront App
//!
//! Root component: owns the session store and stacks the page sections.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::info;

use crate::components::{About, Contact, Footer, Header, Hero, NewsletterForm, ProductGrid};
use crate::context::ShopContext;
use crate::store::SessionState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let shop = ShopContext::new();
    let store = Store::new(SessionState::new());

    // Provide context to all children
    provide_context(shop);
    provide_context(store);

    info!(products = shop.product_count(), "storefront mounted");

    view! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <Hero />
            <ProductGrid />
            <About />
            <NewsletterForm />
            <Contact />
            <Footer />
        </div>
    }
}
