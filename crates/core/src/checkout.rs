//! Order assembly: cart lines + catalog + customer details -> order draft.

use crate::cart::Cart;
use crate::types::{CustomerInfo, NewOrder, OrderItem, Product, ValidationError};

/// Assemble an order draft from the current cart.
///
/// Each cart line is resolved against `products`; name and price are copied
/// into the line snapshot so later catalog edits cannot change the order.
/// Lines referencing a missing product are dropped, the same policy
/// [`Cart::total`] uses, so the draft's total always equals the cart total
/// over the same catalog.
///
/// # Errors
///
/// Returns `ValidationError` when the customer details are malformed or the
/// draft total is zero (empty cart, or every line referenced a vanished
/// product).
pub fn assemble_order(
    cart: &Cart,
    products: &[Product],
    customer_info: CustomerInfo,
) -> Result<NewOrder, ValidationError> {
    customer_info.validate()?;

    let items: Vec<OrderItem> = cart
        .items()
        .iter()
        .filter_map(|line| {
            products
                .iter()
                .find(|product| product.id == line.product_id)
                .map(|product| OrderItem {
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    price: product.price,
                    quantity: line.quantity,
                })
        })
        .collect();

    let total = items.iter().map(OrderItem::subtotal).sum();

    let draft = NewOrder {
        customer_info,
        items,
        total,
    };
    draft.validate()?;
    Ok(draft)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::customer::tests::sample_customer;
    use crate::types::product::tests::sample_input;
    use crate::types::ProductId;

    fn product(id: &str, price: u32) -> Product {
        sample_input(id, price).into_product(ProductId::new(id))
    }

    #[test]
    fn test_assembles_snapshots_and_total() {
        let products = vec![product("p-1", 1_000), product("p-2", 2_500)];

        let mut cart = Cart::new();
        cart.add_item(ProductId::new("p-1"), 2);
        cart.add_item(ProductId::new("p-2"), 1);

        let draft = assemble_order(&cart, &products, sample_customer()).unwrap();

        assert_eq!(draft.total, 4_500);
        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.items[0].product_name, "p-1");
        assert_eq!(draft.items[0].price, 1_000);
        assert_eq!(draft.items[0].quantity, 2);
    }

    #[test]
    fn test_snapshot_survives_later_price_change() {
        let mut products = vec![product("p-1", 1_000)];

        let mut cart = Cart::new();
        cart.add_item(ProductId::new("p-1"), 2);

        let draft = assemble_order(&cart, &products, sample_customer()).unwrap();

        // A later catalog edit must not affect the captured snapshot.
        products[0].price = 99_000;
        assert_eq!(draft.items[0].price, 1_000);
        assert_eq!(draft.total, 2_000);
    }

    #[test]
    fn test_missing_products_dropped_like_cart_total() {
        let products = vec![product("p-1", 1_000)];

        let mut cart = Cart::new();
        cart.add_item(ProductId::new("p-1"), 2);
        cart.add_item(ProductId::new("deleted"), 5);

        let draft = assemble_order(&cart, &products, sample_customer()).unwrap();

        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.total, cart.total(&products));
    }

    #[test]
    fn test_empty_cart_rejected() {
        let err = assemble_order(&Cart::new(), &[], sample_customer()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidTotal);
    }

    #[test]
    fn test_cart_of_only_vanished_products_rejected() {
        let mut cart = Cart::new();
        cart.add_item(ProductId::new("deleted"), 3);

        let err = assemble_order(&cart, &[], sample_customer()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidTotal);
    }

    #[test]
    fn test_invalid_customer_rejected_before_assembly() {
        let mut customer = sample_customer();
        customer.phone = "123".to_string();

        let mut cart = Cart::new();
        cart.add_item(ProductId::new("p-1"), 1);

        let err = assemble_order(&cart, &[product("p-1", 1_000)], customer).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone);
    }
}
