use common::types::dtos::{DriverDTO, OrderDTO, OrderItemDTO, StageDetailDTO};
use common::types::order_status::OrderStatusId;
use std::collections::HashMap;

const RESTAURANT_NAME: &str = "The Gourmet Place";
const DRIVER_NAME: &str = "John D.";

/// Mock order shown by the tracking screen until a real data source exists.
pub fn sample_order(order_id: impl Into<String>, status: OrderStatusId) -> OrderDTO {
    let items = [
        ("1", "Margherita Pizza", 1, 15.99),
        ("2", "Caesar Salad", 1, 8.50),
        ("3", "Coke", 2, 2.00),
    ]
    .into_iter()
    .map(|(item_id, name, quantity, price)| OrderItemDTO {
        item_id: item_id.to_string(),
        name: name.to_string(),
        quantity,
        price,
    })
    .collect();

    OrderDTO {
        order_id: order_id.into(),
        restaurant_name: RESTAURANT_NAME.to_string(),
        delivery_address: "123 Main St, Anytown, USA, 12345".to_string(),
        estimated_delivery_time: "4:30 PM - 4:45 PM".to_string(),
        status,
        items,
        delivery_fee: 3.00,
        tax: 2.28,
        driver: Some(DriverDTO {
            name: DRIVER_NAME.to_string(),
            vehicle: "Blue Toyota Prius".to_string(),
            plate: "XYZ 123".to_string(),
        }),
        stage_details: sample_stage_details(status),
        time_stamp: std::time::SystemTime::now(),
    }
}

fn sample_time(id: OrderStatusId) -> &'static str {
    match id {
        OrderStatusId::OrderPlaced => "3:45 PM",
        OrderStatusId::Preparing => "3:50 PM",
        OrderStatusId::OutForDelivery => "4:15 PM",
        OrderStatusId::Delivered => "4:35 PM",
    }
}

/// Details for every stage; times only for the stages already reached at `status`.
fn sample_stage_details(status: OrderStatusId) -> HashMap<OrderStatusId, StageDetailDTO> {
    let detail = |id: OrderStatusId, details: String| StageDetailDTO {
        time: (id <= status).then(|| sample_time(id).to_string()),
        details: Some(details),
    };
    HashMap::from([
        (
            OrderStatusId::OrderPlaced,
            detail(OrderStatusId::OrderPlaced, "We've received your order.".to_string()),
        ),
        (
            OrderStatusId::Preparing,
            detail(OrderStatusId::Preparing, format!("{RESTAURANT_NAME} is preparing your delicious meal.")),
        ),
        (
            OrderStatusId::OutForDelivery,
            detail(OrderStatusId::OutForDelivery, format!("{DRIVER_NAME} is on the way with your order.")),
        ),
        (
            OrderStatusId::Delivered,
            detail(OrderStatusId::Delivered, "Enjoy your meal!".to_string()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::assert_about_eq;

    #[test]
    fn sample_order_matches_displayed_totals() {
        let order = sample_order("FF123456789", OrderStatusId::Preparing);
        assert_eq!(order.items.len(), 3);
        assert_about_eq!(order.subtotal(), 28.49);
        assert_about_eq!(order.total(), 33.77);
        assert!(
            order
                .detail_for(OrderStatusId::Preparing)
                .and_then(|d| d.details.as_deref())
                .unwrap()
                .starts_with("The Gourmet Place")
        );
    }

    #[test]
    fn sample_times_cover_reached_stages_only() {
        let order = sample_order("FF1", OrderStatusId::Preparing);
        let time = |id| order.detail_for(id).and_then(|d| d.time.as_deref());
        assert_eq!(time(OrderStatusId::OrderPlaced), Some("3:45 PM"));
        assert_eq!(time(OrderStatusId::Preparing), Some("3:50 PM"));
        assert_eq!(time(OrderStatusId::OutForDelivery), None);
        assert_eq!(time(OrderStatusId::Delivered), None);
    }
}
