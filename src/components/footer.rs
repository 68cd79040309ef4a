use leptos::prelude::*;

use crate::config::{LinkGroup, NavLink, SITE};

const SOCIAL: &[(&str, &str, &str)] = &[
    ("Instagram", "IG", "hover:text-pink-400"),
    ("Facebook", "FB", "hover:text-blue-400"),
    ("Twitter", "X", "hover:text-blue-300"),
];

#[component]
fn FooterLinks(title: &'static str, links: &'static [NavLink]) -> impl IntoView {
    view! {
        <div>
            <h5 class="font-bold text-lg mb-4">{title}</h5>
            <ul class="space-y-2">
                {links.iter().map(|link| view! {
                    <li>
                        <a href=link.href class="text-gray-400 hover:text-white transition-colors duration-200">
                            {link.label}
                        </a>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div>
                        <h4 class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent mb-4">
                            {SITE.brand}
                        </h4>
                        <p class="text-gray-400 mb-4">{SITE.tagline}</p>
                        <div class="flex space-x-4">
                            {SOCIAL.iter().map(|(name, glyph, hover)| view! {
                                <span
                                    title=*name
                                    class=format!("font-bold text-gray-400 cursor-pointer transition-colors duration-200 {hover}")
                                >
                                    {*glyph}
                                </span>
                            }).collect_view()}
                        </div>
                    </div>
                    <FooterLinks title="Quick Links" links=SITE.nav />
                    {SITE.footer_groups.iter().map(|LinkGroup { title, links }| view! {
                        <FooterLinks title=*title links=*links />
                    }).collect_view()}
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-center">
                    <p class="text-gray-400">
                        {format!(
                            "© {} Solezza. All rights reserved. | Prices in {} ({})",
                            SITE.copyright_year, SITE.currency_name, SITE.currency_code
                        )}
                    </p>
                </div>
            </div>
        </footer>
    }
}
