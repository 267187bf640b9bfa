use crate::types::order_status::OrderStatusId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemDTO {
    /// ID del ítem dentro del pedido.
    pub item_id: String,
    /// Nombre del plato.
    pub name: String,
    /// Cantidad pedida.
    pub quantity: u32,
    /// Precio unitario.
    pub price: f64,
}

impl OrderItemDTO {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DriverDTO {
    pub name: String,
    pub vehicle: String,
    pub plate: String,
}

/// Display-only metadata attached to a stage of a particular order.
/// The progress model never looks at it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StageDetailDTO {
    /// Hora en la que el pedido alcanzó la etapa, ya formateada.
    pub time: Option<String>,
    /// Texto libre que acompaña la etapa.
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDTO {
    /// ID de la orden.
    pub order_id: String,
    /// Restaurante que prepara el pedido.
    pub restaurant_name: String,
    /// Dirección de entrega.
    pub delivery_address: String,
    /// Ventana estimada de entrega, por ejemplo "4:30 PM - 4:45 PM".
    pub estimated_delivery_time: String,
    /// Estado actual de la orden.
    pub status: OrderStatusId,
    /// Platos pedidos.
    pub items: Vec<OrderItemDTO>,
    pub delivery_fee: f64,
    pub tax: f64,
    /// Repartidor asignado, si lo hay.
    pub driver: Option<DriverDTO>,
    /// Metadatos por etapa.
    #[serde(default)]
    pub stage_details: HashMap<OrderStatusId, StageDetailDTO>,
    /// Marca de tiempo que registra la última actualización de la orden.
    pub time_stamp: std::time::SystemTime,
}

impl OrderDTO {
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(OrderItemDTO::line_total).sum()
    }

    pub fn total(&self) -> f64 {
        self.subtotal() + self.delivery_fee + self.tax
    }

    pub fn detail_for(&self, id: OrderStatusId) -> Option<&StageDetailDTO> {
        self.stage_details.get(&id)
    }

    /// The rider is only shown while the order is on its way.
    pub fn driver_visible(&self) -> Option<&DriverDTO> {
        match self.status {
            OrderStatusId::OutForDelivery => self.driver.as_ref(),
            _ => None,
        }
    }

    pub fn live_tracking_available(&self) -> bool {
        self.status == OrderStatusId::OutForDelivery
    }
}
