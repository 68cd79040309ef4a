//! UI Components
//!
//! One Leptos component per page section.

mod header;
mod hero;
mod category_filter;
mod product_card;
mod product_grid;
mod about;
mod newsletter_form;
mod contact;
mod footer;

pub use header::Header;
pub use hero::Hero;
pub use category_filter::CategoryFilter;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use about::About;
pub use newsletter_form::NewsletterForm;
pub use contact::Contact;
pub use footer::Footer;
