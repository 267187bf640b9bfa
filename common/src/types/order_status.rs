use crate::progress::ProgressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a stage in an order's lifecycle.
///
/// Variants are declared in lifecycle order. The wire form is the
/// upper snake case name (`OUT_FOR_DELIVERY`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatusId {
    OrderPlaced,    // El restaurante recibió el pedido
    Preparing,      // El pedido se está cocinando
    OutForDelivery, // El repartidor está en camino
    Delivered,      // El pedido fue entregado al cliente
}

impl OrderStatusId {
    pub const ALL: [OrderStatusId; 4] = [
        OrderStatusId::OrderPlaced,
        OrderStatusId::Preparing,
        OrderStatusId::OutForDelivery,
        OrderStatusId::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatusId::OrderPlaced => "ORDER_PLACED",
            OrderStatusId::Preparing => "PREPARING",
            OrderStatusId::OutForDelivery => "OUT_FOR_DELIVERY",
            OrderStatusId::Delivered => "DELIVERED",
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            OrderStatusId::OrderPlaced => "Order Placed",
            OrderStatusId::Preparing => "Preparing",
            OrderStatusId::OutForDelivery => "Out for Delivery",
            OrderStatusId::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatusId {
    type Err = ProgressError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        OrderStatusId::ALL
            .into_iter()
            .find(|id| id.as_str() == raw)
            .ok_or_else(|| ProgressError::UnknownStatus(raw.to_string()))
    }
}
