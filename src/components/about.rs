use leptos::prelude::*;

use crate::catalog;

/// Headline numbers shown under the brand copy
const STATS: &[(&str, &str, &str)] = &[
    ("50K+", "Happy Customers", "text-orange-400"),
    ("200+", "Shoe Models", "text-pink-400"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-16 bg-gradient-to-br from-gray-900 via-purple-900 to-blue-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <h3 class="text-4xl font-bold mb-6">"About Solezza"</h3>
                        <p class="text-xl text-gray-300 mb-6 leading-relaxed">
                            "Born from a passion for innovation and style, Solezza represents the perfect fusion of comfort, "
                            "performance, and vibrant design. We believe every step should be a statement."
                        </p>
                        <p class="text-lg text-gray-400 mb-8 leading-relaxed">
                            "Our commitment to quality craftsmanship and cutting-edge technology ensures that every pair "
                            "of Solezza shoes delivers an unmatched experience for the modern lifestyle."
                        </p>
                        <div class="grid grid-cols-2 gap-6">
                            {STATS.iter().map(|(value, label, color)| view! {
                                <div class="text-center">
                                    <h4 class=format!("text-3xl font-bold mb-2 {color}")>{*value}</h4>
                                    <p class="text-gray-300">{*label}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                    <div class="relative">
                        <div class="bg-gradient-to-br from-blue-500 to-purple-600 rounded-2xl p-8 transform rotate-3 hover:rotate-0 transition-transform duration-300">
                            <img
                                src=catalog::about_image()
                                alt="Solezza Shoes"
                                class="w-full h-64 object-cover rounded-lg"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
