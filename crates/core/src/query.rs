//! The pure product filter/sort pipeline used by catalog browsing.
//!
//! No stored state: the same criteria over the same slice always produce
//! the same output. Filters are order-independent; the sort is applied
//! last and is stable, so products with equal keys keep their filtered
//! (insertion) order.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::{Category, Product, ValidationError};

/// Display order for filtered products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Insertion order; no reordering is applied.
    #[default]
    Newest,
    /// Cheapest first.
    PriceAscending,
    /// Most expensive first.
    PriceDescending,
    /// Case-insensitive lexicographic by name.
    NameAscending,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "price-ascending" => Ok(Self::PriceAscending),
            "price-descending" => Ok(Self::PriceDescending),
            "name-ascending" => Ok(Self::NameAscending),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

/// Browse criteria for the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// Case-insensitive substring matched against name or description.
    /// Empty means no text restriction.
    pub search: String,
    /// Selected categories; empty means all categories.
    pub categories: Vec<Category>,
    /// Inclusive lower price bound.
    pub min_price: u32,
    /// Inclusive upper price bound. A range with `min_price > max_price`
    /// is accepted as given and simply matches nothing.
    pub max_price: u32,
    /// Keep only products with stock remaining.
    pub in_stock_only: bool,
    /// Display order, applied after all filters.
    pub sort: SortKey,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            categories: Vec::new(),
            min_price: 0,
            max_price: u32::MAX,
            in_stock_only: false,
            sort: SortKey::default(),
        }
    }
}

impl ProductQuery {
    /// Parse a comma-separated list of category slugs.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownCategory` for any slug outside the
    /// fixed enumeration; unknown values never reach the pipeline.
    pub fn parse_categories(list: &str) -> Result<Vec<Category>, ValidationError> {
        list.split(',')
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .map(Category::from_str)
            .collect()
    }

    /// Whether a single product satisfies every active filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            let in_description = product.description.to_lowercase().contains(&needle);
            if !in_name && !in_description {
                return false;
            }
        }
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if product.price < self.min_price || product.price > self.max_price {
            return false;
        }
        if self.in_stock_only && product.stock == 0 {
            return false;
        }
        true
    }

    /// Run the full pipeline: filter, then stable-sort for display.
    ///
    /// An empty result is a valid, displayable outcome, not an error.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut result: Vec<Product> = products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect();

        match self.sort {
            SortKey::Newest => {}
            SortKey::PriceAscending => result.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceDescending => result.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::NameAscending => {
                result.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
        }

        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{NewProduct, ProductId};

    fn product(name: &str, price: u32, category: Category, stock: u32) -> Product {
        NewProduct {
            name: name.to_string(),
            description: format!("{name} for everyday wear"),
            price,
            category,
            stock,
            images: vec!["https://example.com/img.jpg".to_string()],
            featured: false,
        }
        .into_product(ProductId::new(name))
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("Ankara Shirt", 18_000, Category::Clothing, 22),
            product("Power Bank", 12_000, Category::Electronics, 35),
            product("Beaded Necklace", 8_000, Category::Accessories, 0),
            product("Shea Butter", 5_000, Category::Beauty, 50),
            product("Canvas Sneakers", 22_000, Category::Shoes, 28),
        ]
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_default_query_keeps_insertion_order() {
        let result = ProductQuery::default().apply(&catalog());
        assert_eq!(
            names(&result),
            [
                "Ankara Shirt",
                "Power Bank",
                "Beaded Necklace",
                "Shea Butter",
                "Canvas Sneakers"
            ]
        );
    }

    #[test]
    fn test_search_matches_name_or_description_case_insensitive() {
        let query = ProductQuery {
            search: "ANKARA".to_string(),
            ..ProductQuery::default()
        };
        assert_eq!(names(&query.apply(&catalog())), ["Ankara Shirt"]);

        // "wear" only appears in descriptions.
        let query = ProductQuery {
            search: "wear".to_string(),
            ..ProductQuery::default()
        };
        assert_eq!(query.apply(&catalog()).len(), 5);
    }

    #[test]
    fn test_category_filter_is_membership() {
        let query = ProductQuery {
            categories: vec![Category::Clothing, Category::Shoes],
            ..ProductQuery::default()
        };
        assert_eq!(
            names(&query.apply(&catalog())),
            ["Ankara Shirt", "Canvas Sneakers"]
        );
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let query = ProductQuery {
            min_price: 8_000,
            max_price: 18_000,
            ..ProductQuery::default()
        };
        assert_eq!(
            names(&query.apply(&catalog())),
            ["Ankara Shirt", "Power Bank", "Beaded Necklace"]
        );
    }

    #[test]
    fn test_inverted_price_range_matches_nothing() {
        let query = ProductQuery {
            min_price: 20_000,
            max_price: 10_000,
            ..ProductQuery::default()
        };
        // Accepted as given, not an error.
        assert!(query.apply(&catalog()).is_empty());
    }

    #[test]
    fn test_in_stock_only_drops_stock_zero() {
        let query = ProductQuery {
            in_stock_only: true,
            ..ProductQuery::default()
        };
        let result = query.apply(&catalog());
        assert!(result.iter().all(|p| p.stock > 0));
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_filters_are_complete_and_sound() {
        let query = ProductQuery {
            search: "e".to_string(),
            categories: vec![Category::Beauty, Category::Electronics, Category::Shoes],
            min_price: 5_000,
            max_price: 25_000,
            in_stock_only: true,
            ..ProductQuery::default()
        };
        let input = catalog();
        let output = query.apply(&input);

        // Soundness: every output product satisfies every predicate.
        assert!(output.iter().all(|p| query.matches(p)));
        // Completeness: no matching input product was excluded.
        let expected = input.iter().filter(|p| query.matches(p)).count();
        assert_eq!(output.len(), expected);
    }

    #[test]
    fn test_price_sorts() {
        let query = ProductQuery {
            sort: SortKey::PriceAscending,
            ..ProductQuery::default()
        };
        assert_eq!(
            names(&query.apply(&catalog())),
            [
                "Shea Butter",
                "Beaded Necklace",
                "Power Bank",
                "Ankara Shirt",
                "Canvas Sneakers"
            ]
        );

        let query = ProductQuery {
            sort: SortKey::PriceDescending,
            ..ProductQuery::default()
        };
        assert_eq!(
            names(&query.apply(&catalog())),
            [
                "Canvas Sneakers",
                "Ankara Shirt",
                "Power Bank",
                "Beaded Necklace",
                "Shea Butter"
            ]
        );
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let products = vec![
            product("zebra print", 1_000, Category::Home, 1),
            product("Ankara Shirt", 1_000, Category::Clothing, 1),
            product("beaded set", 1_000, Category::Accessories, 1),
        ];
        let query = ProductQuery {
            sort: SortKey::NameAscending,
            ..ProductQuery::default()
        };
        assert_eq!(
            names(&query.apply(&products)),
            ["Ankara Shirt", "beaded set", "zebra print"]
        );
    }

    #[test]
    fn test_sorts_are_stable_on_equal_keys() {
        let products = vec![
            product("First", 5_000, Category::Home, 1),
            product("Second", 5_000, Category::Home, 1),
            product("Third", 5_000, Category::Home, 1),
        ];
        let query = ProductQuery {
            sort: SortKey::PriceAscending,
            ..ProductQuery::default()
        };
        // Equal prices keep their pre-sort relative order.
        assert_eq!(names(&query.apply(&products)), ["First", "Second", "Third"]);

        let query = ProductQuery {
            sort: SortKey::PriceDescending,
            ..ProductQuery::default()
        };
        assert_eq!(names(&query.apply(&products)), ["First", "Second", "Third"]);
    }

    #[test]
    fn test_parse_categories() {
        assert_eq!(
            ProductQuery::parse_categories("clothing, shoes").unwrap(),
            vec![Category::Clothing, Category::Shoes]
        );
        assert_eq!(ProductQuery::parse_categories("").unwrap(), Vec::new());
        assert_eq!(
            ProductQuery::parse_categories("clothing,furniture").unwrap_err(),
            ValidationError::UnknownCategory("furniture".into())
        );
    }

    #[test]
    fn test_sort_key_wire_values() {
        assert_eq!(
            serde_json::to_string(&SortKey::PriceAscending).unwrap(),
            "\"price-ascending\""
        );
        assert_eq!("name-ascending".parse::<SortKey>().unwrap(), SortKey::NameAscending);
        assert!("price-low".parse::<SortKey>().is_err());
    }
}
