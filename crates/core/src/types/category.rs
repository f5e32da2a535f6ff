//! Product category enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// The fixed set of product categories.
///
/// Serialized as lowercase slugs (`"clothing"`, `"electronics"`, ...), the
/// same values used in query strings and the admin create/update payloads.
/// Unknown values are rejected at the boundary and never reach the filter
/// pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothing,
    Electronics,
    Accessories,
    Beauty,
    Home,
    Shoes,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::Clothing,
        Self::Electronics,
        Self::Accessories,
        Self::Beauty,
        Self::Home,
        Self::Shoes,
    ];

    /// URL/wire slug for the category.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Clothing => "clothing",
            Self::Electronics => "electronics",
            Self::Accessories => "accessories",
            Self::Beauty => "beauty",
            Self::Home => "home",
            Self::Shoes => "shoes",
        }
    }

    /// Human-readable label for the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::Electronics => "Electronics",
            Self::Accessories => "Accessories",
            Self::Beauty => "Beauty",
            Self::Home => "Home",
            Self::Shoes => "Shoes",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clothing" => Ok(Self::Clothing),
            "electronics" => Ok(Self::Electronics),
            "accessories" => Ok(Self::Accessories),
            "beauty" => Ok(Self::Beauty),
            "home" => Ok(Self::Home),
            "shoes" => Ok(Self::Shoes),
            _ => Err(ValidationError::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = "furniture".parse::<Category>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownCategory("furniture".into()));
    }

    #[test]
    fn test_serde_uses_slugs() {
        let json = serde_json::to_string(&Category::Beauty).unwrap();
        assert_eq!(json, "\"beauty\"");

        let back: Category = serde_json::from_str("\"shoes\"").unwrap();
        assert_eq!(back, Category::Shoes);
    }

    #[test]
    fn test_serde_rejects_unknown() {
        assert!(serde_json::from_str::<Category>("\"furniture\"").is_err());
    }
}
