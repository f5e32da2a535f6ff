//! The launch catalog loaded at startup.

use afrishop_core::{Category, NewProduct};

/// The twelve launch products.
///
/// Prices are whole FCFA. Stock levels are the launch counts; the admin
/// API adjusts them from there.
#[must_use]
pub fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "African Print Dress".to_string(),
            description: "Beautiful handmade African print dress with vibrant colors. Perfect for special occasions and everyday wear.".to_string(),
            price: 25_000,
            category: Category::Clothing,
            stock: 15,
            images: vec!["https://images.unsplash.com/photo-1590735213920-68192a487bc2?w=800&h=1000&fit=crop".to_string()],
            featured: true,
        },
        NewProduct {
            name: "Wireless Bluetooth Earbuds".to_string(),
            description: "High-quality wireless earbuds with noise cancellation and long battery life. Compatible with all devices.".to_string(),
            price: 18_000,
            category: Category::Electronics,
            stock: 30,
            images: vec!["https://images.unsplash.com/photo-1590658268037-6bf12165a8df?w=800&h=1000&fit=crop".to_string()],
            featured: true,
        },
        NewProduct {
            name: "Men's Leather Watch".to_string(),
            description: "Classic leather strap watch with a modern design. Water-resistant and durable.".to_string(),
            price: 35_000,
            category: Category::Accessories,
            stock: 20,
            images: vec!["https://images.unsplash.com/photo-1524592094714-0f0654e20314?w=800&h=1000&fit=crop".to_string()],
            featured: true,
        },
        NewProduct {
            name: "Natural Shea Butter".to_string(),
            description: "100% pure organic shea butter from Ghana. Perfect for skin and hair care.".to_string(),
            price: 5_000,
            category: Category::Beauty,
            stock: 50,
            images: vec!["https://images.unsplash.com/photo-1608248597279-f99d160bfcbc?w=800&h=1000&fit=crop".to_string()],
            featured: false,
        },
        NewProduct {
            name: "Decorative Woven Basket".to_string(),
            description: "Handcrafted traditional African woven basket. Great for storage or decoration.".to_string(),
            price: 12_000,
            category: Category::Home,
            stock: 25,
            images: vec!["https://images.unsplash.com/photo-1595079676339-1534801ad6cf?w=800&h=1000&fit=crop".to_string()],
            featured: false,
        },
        NewProduct {
            name: "Leather Sandals".to_string(),
            description: "Comfortable handmade leather sandals. Perfect for the African climate.".to_string(),
            price: 15_000,
            category: Category::Shoes,
            stock: 40,
            images: vec!["https://images.unsplash.com/photo-1603487742131-4160ec999306?w=800&h=1000&fit=crop".to_string()],
            featured: true,
        },
        NewProduct {
            name: "Ankara Print Shirt".to_string(),
            description: "Men's stylish Ankara print shirt. Comfortable cotton fabric with bold patterns.".to_string(),
            price: 18_000,
            category: Category::Clothing,
            stock: 22,
            images: vec!["https://images.unsplash.com/photo-1594938298603-c8148c4dae35?w=800&h=1000&fit=crop".to_string()],
            featured: false,
        },
        NewProduct {
            name: "Smartphone Power Bank".to_string(),
            description: "20000mAh portable power bank with fast charging. Charge multiple devices at once.".to_string(),
            price: 12_000,
            category: Category::Electronics,
            stock: 35,
            images: vec!["https://images.unsplash.com/photo-1609091839311-d5365f9ff1c5?w=800&h=1000&fit=crop".to_string()],
            featured: false,
        },
        NewProduct {
            name: "Beaded Necklace Set".to_string(),
            description: "Traditional African beaded necklace and earring set. Handmade with love.".to_string(),
            price: 8_000,
            category: Category::Accessories,
            stock: 18,
            images: vec!["https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=800&h=1000&fit=crop".to_string()],
            featured: false,
        },
        NewProduct {
            name: "African Black Soap".to_string(),
            description: "Authentic African black soap made with natural ingredients. Great for all skin types.".to_string(),
            price: 3_000,
            category: Category::Beauty,
            stock: 60,
            images: vec!["https://images.unsplash.com/photo-1556228720-195a672e8a03?w=800&h=1000&fit=crop".to_string()],
            featured: false,
        },
        NewProduct {
            name: "Canvas Sneakers".to_string(),
            description: "Comfortable canvas sneakers for everyday wear. Lightweight and stylish.".to_string(),
            price: 22_000,
            category: Category::Shoes,
            stock: 28,
            images: vec!["https://images.unsplash.com/photo-1549298916-b41d501d3772?w=800&h=1000&fit=crop".to_string()],
            featured: false,
        },
        NewProduct {
            name: "African Wall Art".to_string(),
            description: "Beautiful canvas print featuring African landscape. Ready to hang.".to_string(),
            price: 28_000,
            category: Category::Home,
            stock: 10,
            images: vec!["https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&h=1000&fit=crop".to_string()],
            featured: false,
        },
    ]
}
