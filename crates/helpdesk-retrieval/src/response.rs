//! Canned response assembly.

use helpdesk_core::constants::ORDER_NUMBER_PLACEHOLDER;

/// Replace every `{{Order Number}}` in `response` with `order_number`.
/// With no order number (or an empty one) the text comes back unchanged.
pub fn substitute_placeholder(response: &str, order_number: Option<&str>) -> String {
    match order_number {
        Some(order) if !order.is_empty() => response.replace(ORDER_NUMBER_PLACEHOLDER, order),
        _ => response.to_string(),
    }
}
