//! Product domain models.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::id::ProductId;
use super::validation::ValidationError;

/// A catalog product.
///
/// Prices and stock are whole FCFA units and unit counts; both are unsigned,
/// so the non-negative invariants hold by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Price in whole FCFA.
    pub price: u32,
    /// Product category.
    pub category: Category,
    /// Units available.
    pub stock: u32,
    /// Image URLs, never empty.
    pub images: Vec<String>,
    /// Shown on the home page when set.
    pub featured: bool,
}

/// Input for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Price in whole FCFA.
    pub price: u32,
    /// Product category.
    pub category: Category,
    /// Units available.
    pub stock: u32,
    /// Image URLs, at least one required.
    pub images: Vec<String>,
    /// Defaults to false when omitted.
    #[serde(default)]
    pub featured: bool,
}

impl NewProduct {
    /// Validate the input fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the name or description is empty or
    /// no image is provided. Price, stock, and category are already
    /// constrained by their types.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if self.images.is_empty() {
            return Err(ValidationError::MissingImages);
        }
        Ok(())
    }

    /// Build the stored record under a freshly assigned ID.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            stock: self.stock,
            images: self.images,
            featured: self.featured,
        }
    }
}

/// Partial update for a product. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    /// Display name.
    pub name: Option<String>,
    /// Long-form description.
    pub description: Option<String>,
    /// Price in whole FCFA.
    pub price: Option<u32>,
    /// Product category.
    pub category: Option<Category>,
    /// Units available.
    pub stock: Option<u32>,
    /// Image URLs, at least one required when provided.
    pub images: Option<Vec<String>>,
    /// Shown on the home page when set.
    pub featured: Option<bool>,
}

impl ProductUpdate {
    /// Validate the provided fields only.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when a provided field fails the same check
    /// its `NewProduct` counterpart would.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(ValidationError::MissingName);
        }
        if let Some(description) = &self.description
            && description.trim().is_empty()
        {
            return Err(ValidationError::MissingDescription);
        }
        if let Some(images) = &self.images
            && images.is_empty()
        {
            return Err(ValidationError::MissingImages);
        }
        Ok(())
    }
}

impl Product {
    /// Merge the provided fields of `update` over this record.
    pub fn apply(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(images) = update.images {
            self.images = images;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    /// Test fixture: a valid product input.
    pub(crate) fn sample_input(name: &str, price: u32) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: format!("{name} description"),
            price,
            category: Category::Clothing,
            stock: 10,
            images: vec!["https://example.com/a.jpg".to_string()],
            featured: false,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(sample_input("Ankara Shirt", 18_000).validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut input = sample_input("x", 100);
        input.name = "   ".to_string();
        assert_eq!(input.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_blank_description_rejected() {
        let mut input = sample_input("x", 100);
        input.description = String::new();
        assert_eq!(input.validate(), Err(ValidationError::MissingDescription));
    }

    #[test]
    fn test_empty_images_rejected() {
        let mut input = sample_input("x", 100);
        input.images = Vec::new();
        assert_eq!(input.validate(), Err(ValidationError::MissingImages));
    }

    #[test]
    fn test_featured_defaults_to_false() {
        let input: NewProduct = serde_json::from_value(serde_json::json!({
            "name": "Soap",
            "description": "Black soap",
            "price": 3000,
            "category": "beauty",
            "stock": 60,
            "images": ["https://example.com/soap.jpg"],
        }))
        .unwrap();
        assert!(!input.featured);
    }

    #[test]
    fn test_update_validates_only_provided_fields() {
        // A bare price change must not trip the name/description checks.
        let update = ProductUpdate {
            price: Some(9_000),
            ..ProductUpdate::default()
        };
        assert!(update.validate().is_ok());

        let update = ProductUpdate {
            images: Some(Vec::new()),
            ..ProductUpdate::default()
        };
        assert_eq!(update.validate(), Err(ValidationError::MissingImages));
    }

    #[test]
    fn test_apply_merges_only_provided_fields() {
        let mut product = sample_input("Watch", 35_000).into_product(ProductId::new("p-1"));
        product.apply(ProductUpdate {
            stock: Some(5),
            ..ProductUpdate::default()
        });

        assert_eq!(product.stock, 5);
        assert_eq!(product.name, "Watch");
        assert_eq!(product.price, 35_000);
        assert_eq!(product.id, ProductId::new("p-1"));
    }

    #[test]
    fn test_negative_price_rejected_at_deserialization() {
        let result = serde_json::from_value::<NewProduct>(serde_json::json!({
            "name": "Soap",
            "description": "Black soap",
            "price": -1,
            "category": "beauty",
            "stock": 60,
            "images": ["https://example.com/soap.jpg"],
        }));
        assert!(result.is_err());
    }
}
