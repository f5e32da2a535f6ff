//! WhatsApp checkout hand-off.
//!
//! Checkout is cash-on-delivery, confirmed out of band: after the order is
//! stored, the client opens a `wa.me` deep link carrying the order summary.
//! The fields in the message are a contract - customer name/phone/address,
//! one line per item with its subtotal, the grand total, and the payment
//! method label - while the surrounding text is free to change.

use afrishop_core::Order;

/// The fixed payment method label.
pub const PAYMENT_METHOD: &str = "Cash on Delivery";

/// Format a whole-FCFA amount with thousands grouping, e.g. `25 000 FCFA`.
#[must_use]
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 + 5);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out.push_str(" FCFA");
    out
}

/// Compose the order summary message.
#[must_use]
pub fn order_message(order: &Order) -> String {
    let mut message = String::from("*New Order from AfriShop*\n\n");

    message.push_str("*Customer Information:*\n");
    message.push_str(&format!("Name: {}\n", order.customer_info.name));
    message.push_str(&format!("Phone: {}\n", order.customer_info.phone));
    message.push_str(&format!("Address: {}\n\n", order.customer_info.address));

    message.push_str("*Order Items:*\n");
    for item in &order.items {
        message.push_str(&format!(
            "- {} x{} = {}\n",
            item.product_name,
            item.quantity,
            format_price(item.subtotal())
        ));
    }

    message.push_str(&format!("\n*Total: {}*\n", format_price(order.total)));
    message.push_str(&format!("\n*Payment Method: {PAYMENT_METHOD}*"));

    message
}

/// Build the `wa.me` deep link for an order.
///
/// With no configured store number the link opens WhatsApp's recipient
/// picker with the message prefilled.
#[must_use]
pub fn handoff_url(order: &Order, store_number: Option<&str>) -> String {
    let message = order_message(order);
    let text = urlencoding::encode(&message);
    match store_number {
        Some(number) => format!("https://wa.me/{number}?text={text}"),
        None => format!("https://wa.me/?text={text}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use afrishop_core::{CustomerInfo, NewOrder, OrderId, OrderItem, ProductId};
    use chrono::Utc;

    fn sample_order() -> Order {
        NewOrder {
            customer_info: CustomerInfo {
                name: "Ama Mensah".to_string(),
                phone: "+22912345678".to_string(),
                address: "12 Rue des Cocotiers, Cotonou".to_string(),
            },
            items: vec![
                OrderItem {
                    product_id: ProductId::new("p-1"),
                    product_name: "African Print Dress".to_string(),
                    price: 25_000,
                    quantity: 2,
                },
                OrderItem {
                    product_id: ProductId::new("p-2"),
                    product_name: "Natural Shea Butter".to_string(),
                    price: 5_000,
                    quantity: 1,
                },
            ],
            total: 55_000,
        }
        .into_order(OrderId::new("o-1"), Utc::now())
    }

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(0), "0 FCFA");
        assert_eq!(format_price(500), "500 FCFA");
        assert_eq!(format_price(5_000), "5 000 FCFA");
        assert_eq!(format_price(25_000), "25 000 FCFA");
        assert_eq!(format_price(1_234_567), "1 234 567 FCFA");
    }

    #[test]
    fn test_message_carries_all_contract_fields() {
        let message = order_message(&sample_order());

        assert!(message.contains("Name: Ama Mensah"));
        assert!(message.contains("Phone: +22912345678"));
        assert!(message.contains("Address: 12 Rue des Cocotiers, Cotonou"));
        assert!(message.contains("- African Print Dress x2 = 50 000 FCFA"));
        assert!(message.contains("- Natural Shea Butter x1 = 5 000 FCFA"));
        assert!(message.contains("*Total: 55 000 FCFA*"));
        assert!(message.contains("*Payment Method: Cash on Delivery*"));
    }

    #[test]
    fn test_handoff_url_targets_store_number_when_configured() {
        let order = sample_order();

        let url = handoff_url(&order, Some("22998765432"));
        assert!(url.starts_with("https://wa.me/22998765432?text="));

        let url = handoff_url(&order, None);
        assert!(url.starts_with("https://wa.me/?text="));
    }

    #[test]
    fn test_handoff_url_is_percent_encoded() {
        let url = handoff_url(&sample_order(), None);
        let (_, text) = url.split_once("text=").unwrap();

        // Spaces, asterisks, and newlines from the message never appear raw.
        assert!(!text.contains(' '));
        assert!(!text.contains('*'));
        assert!(!text.contains('\n'));
        assert!(text.contains("%2A")); // encoded '*'
    }
}
