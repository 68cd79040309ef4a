//! Site Configuration
//!
//! Compile-time brand, currency and contact settings.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// In-page anchor link
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Titled list of footer links
#[derive(Debug, Clone, Copy)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub tagline: &'static str,
    /// Three-letter code prefixed to every price
    pub currency_code: &'static str,
    pub currency_name: &'static str,
    pub group_separator: char,
    pub address: &'static [&'static str],
    pub phone: &'static str,
    pub email: &'static str,
    pub email_subject: &'static str,
    pub hours: &'static [&'static str],
    pub nav: &'static [NavLink],
    pub footer_groups: &'static [LinkGroup],
    pub copyright_year: u16,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

pub const SITE: SiteConfig = SiteConfig {
    brand: "SOLEZZA",
    tagline: "Step into style with Pakistan's most vibrant shoe collection.",
    currency_code: "PKR",
    currency_name: "Pakistani Rupees",
    group_separator: ',',
    address: &["123 Fashion Street", "Lahore, Punjab, Pakistan"],
    phone: "+92 300 1234567",
    email: "support@solezza.pk",
    email_subject: "Hello Solezza",
    hours: &["Mon - Sat: 9AM - 9PM", "Sunday: 11AM - 7PM"],
    nav: &[
        link("Home", "#home"),
        link("Products", "#products"),
        link("About", "#about"),
        link("Contact", "#contact"),
    ],
    footer_groups: &[
        LinkGroup {
            title: "Categories",
            links: &[
                link("Sneakers", "#products"),
                link("Running Shoes", "#products"),
                link("Casual Wear", "#products"),
                link("Sports Collection", "#products"),
            ],
        },
        LinkGroup {
            title: "Customer Service",
            links: &[
                link("Size Guide", "#contact"),
                link("Returns", "#contact"),
                link("Shipping Info", "#contact"),
                link("FAQ", "#contact"),
            ],
        },
    ],
    copyright_year: 2025,
};

/// `mailto:` link with an encoded subject line
pub fn mailto_href(address: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", address, utf8_percent_encode(subject, NON_ALPHANUMERIC))
}

/// `tel:` link with whitespace stripped
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}
