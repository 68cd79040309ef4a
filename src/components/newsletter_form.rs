//! Newsletter Component
//!
//! Email signup with local validation. Addresses are not stored.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use tracing::{info, warn};

use crate::newsletter::{validate_email, SignupStatus};

/// How long the confirmation stays visible
const ACK_MILLIS: u32 = 3_000;

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (status, set_status) = signal(SignupStatus::Idle);
    // Dropping a Timeout cancels it
    let ack_timer = StoredValue::new_local(None::<Timeout>);
    let ack_ticket = StoredValue::new(0u32);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match validate_email(&email.get_untracked()) {
            Ok(_) => {
                info!("newsletter signup acknowledged");
                set_email.set(String::new());
                ack_ticket.update_value(|n| *n = n.wrapping_add(1));
                let ticket = ack_ticket.get_value();
                set_status.set(SignupStatus::Subscribed(ticket));
                let timer = Timeout::new(ACK_MILLIS, move || {
                    set_status.update(|s| s.expire(ticket));
                });
                ack_timer.set_value(Some(timer));
            }
            Err(err) => {
                warn!(%err, "newsletter signup rejected");
                ack_timer.set_value(None);
                set_status.set(SignupStatus::Rejected(err));
            }
        }
    };

    view! {
        <section class="py-16 bg-gradient-to-r from-pink-500 via-purple-500 to-blue-500">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h3 class="text-4xl font-bold text-white mb-4">"Stay in Style"</h3>
                <p class="text-xl text-white/90 mb-8">
                    "Subscribe to get updates on new releases, exclusive offers, and style tips"
                </p>
                <form class="flex flex-col sm:flex-row gap-4 max-w-md mx-auto" on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="Enter your email"
                        class="flex-1 px-6 py-4 rounded-full text-gray-900 placeholder-gray-500 focus:outline-none focus:ring-4 focus:ring-white/30"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="bg-white text-purple-600 px-8 py-4 rounded-full font-semibold hover:bg-gray-100 transition-all duration-300 transform hover:scale-105 shadow-lg"
                    >
                        "Subscribe"
                    </button>
                </form>
                {move || status.get().message().map(|(class, text)| view! {
                    <p class=format!("mt-4 {class}")>{text}</p>
                })}
            </div>
        </section>
    }
}
