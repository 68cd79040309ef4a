//! Product Catalog
//!
//! The compiled-in product list and category filtering.

use crate::models::{Product, ALL_CATEGORIES};

fn pexels(photo: u32, width: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w={width}"
    )
}

/// Image shown next to the about copy
pub fn about_image() -> String {
    pexels(1598505, 600)
}

/// Build the fixed catalog, in display order
pub fn seed() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Solezza Aurora Sneakers".to_string(),
            price: 12500,
            original_price: Some(15000),
            image: pexels(2529148, 400),
            category: "Sneakers".to_string(),
            rating: 4.8,
            is_new: true,
            is_sale: true,
        },
        Product {
            id: 2,
            name: "Solezza Prism Running".to_string(),
            price: 18900,
            original_price: None,
            image: pexels(1598505, 400),
            category: "Running".to_string(),
            rating: 4.9,
            is_new: true,
            is_sale: false,
        },
        Product {
            id: 3,
            name: "Solezza Elite Casual".to_string(),
            price: 9800,
            original_price: Some(12000),
            image: pexels(1240892, 400),
            category: "Casual".to_string(),
            rating: 4.7,
            is_new: false,
            is_sale: true,
        },
        Product {
            id: 4,
            name: "Solezza Neon Boost".to_string(),
            price: 22000,
            original_price: None,
            image: pexels(2529157, 400),
            category: "Sports".to_string(),
            rating: 4.9,
            is_new: true,
            is_sale: false,
        },
        Product {
            id: 5,
            name: "Solezza Classic White".to_string(),
            price: 8500,
            original_price: None,
            image: pexels(1456706, 400),
            category: "Casual".to_string(),
            rating: 4.6,
            is_new: false,
            is_sale: false,
        },
        Product {
            id: 6,
            name: "Solezza Thunder High".to_string(),
            price: 16800,
            original_price: Some(20000),
            image: pexels(1598508, 400),
            category: "High-top".to_string(),
            rating: 4.8,
            is_new: false,
            is_sale: true,
        },
    ]
}

/// Products matching `selection`, borrowed, in catalog order
pub fn visible_products<'a>(
    catalog: &'a [Product],
    selection: &'a str,
) -> impl Iterator<Item = &'a Product> + 'a {
    catalog
        .iter()
        .filter(move |product| selection == ALL_CATEGORIES || product.category == selection)
}

/// Owned copy of the products matching `selection`
///
/// `"All"` yields the whole catalog; a label no product carries yields an
/// empty list.
pub fn filter_by_category(catalog: &[Product], selection: &str) -> Vec<Product> {
    visible_products(catalog, selection).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CATEGORIES;

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_returns_whole_catalog() {
        let catalog = seed();
        let visible = filter_by_category(&catalog, ALL_CATEGORIES);
        assert_eq!(visible, catalog);
    }

    #[test]
    fn test_known_category_is_ordered_subsequence() {
        let catalog = seed();
        for category in CATEGORIES.iter().skip(1) {
            let visible = filter_by_category(&catalog, category);
            assert!(!visible.is_empty(), "{category} should have products");
            assert!(visible.iter().all(|p| p.category == *category));

            let expected: Vec<u32> = catalog
                .iter()
                .filter(|p| p.category == *category)
                .map(|p| p.id)
                .collect();
            assert_eq!(ids(&visible), expected);
        }
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = seed();
        assert!(filter_by_category(&catalog, "Sandals").is_empty());
        assert!(filter_by_category(&catalog, "").is_empty());
        // Labels are case-sensitive
        assert!(filter_by_category(&catalog, "casual").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = seed();
        let first = filter_by_category(&catalog, "Running");
        let second = filter_by_category(&catalog, "Running");
        assert_eq!(first, second);
    }

    #[test]
    fn test_casual_then_all() {
        let catalog = seed();
        assert_eq!(catalog.len(), 6);

        let casual = filter_by_category(&catalog, "Casual");
        assert_eq!(ids(&casual), vec![3, 5]);

        let all = filter_by_category(&catalog, ALL_CATEGORIES);
        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(filter_by_category(&[], ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn test_seed_ids_unique() {
        let catalog = seed();
        let mut seen = ids(&catalog);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), catalog.len());
    }
}
