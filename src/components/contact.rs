//! Contact Section
//!
//! Address, phone/email and opening hours cards.

use leptos::prelude::*;

use crate::config::{mailto_href, tel_href, SITE};

#[component]
fn ContactCard(
    icon: &'static str,
    title: &'static str,
    card_class: &'static str,
    icon_class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("text-center p-6 rounded-2xl {card_class}")>
            <div class=format!("w-16 h-16 rounded-full flex items-center justify-center mx-auto mb-4 {icon_class}")>
                <span class="text-white text-2xl font-bold">{icon}</span>
            </div>
            <h4 class="text-xl font-bold text-gray-900 mb-2">{title}</h4>
            <p class="text-gray-600">{children()}</p>
        </div>
    }
}

fn lines(items: &'static [&'static str]) -> impl IntoView {
    items
        .iter()
        .enumerate()
        .map(|(i, line)| view! {
            {(i > 0).then(|| view! { <br /> })}
            {*line}
        })
        .collect_view()
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-16 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h3 class="text-4xl font-bold text-gray-900 mb-4">"Get in Touch"</h3>
                    <p class="text-xl text-gray-600">"We'd love to hear from you"</p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <ContactCard
                        icon="📍"
                        title="Visit Us"
                        card_class="bg-gradient-to-br from-blue-50 to-purple-50"
                        icon_class="bg-gradient-to-r from-blue-500 to-purple-600"
                    >
                        {lines(SITE.address)}
                    </ContactCard>
                    <ContactCard
                        icon="📞"
                        title="Call Us"
                        card_class="bg-gradient-to-br from-pink-50 to-orange-50"
                        icon_class="bg-gradient-to-r from-pink-500 to-orange-500"
                    >
                        <a href=tel_href(SITE.phone) class="hover:text-pink-500">{SITE.phone}</a>
                        <br />
                        <a href=mailto_href(SITE.email, SITE.email_subject) class="hover:text-pink-500">{SITE.email}</a>
                    </ContactCard>
                    <ContactCard
                        icon="⏰"
                        title="Hours"
                        card_class="bg-gradient-to-br from-green-50 to-blue-50"
                        icon_class="bg-gradient-to-r from-green-500 to-blue-500"
                    >
                        {lines(SITE.hours)}
                    </ContactCard>
                </div>
            </div>
        </section>
    }
}
