use actix::Message;
use common::progress::ProgressError;
use common::types::dtos::OrderDTO;
use common::types::stage::StageSequence;

/// Le pide al UIHandler que dibuje la pantalla de seguimiento.
/// Responde con el texto dibujado o con el error de progreso.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<String, ProgressError>")]
pub struct ShowOrderTracking {
    pub order: OrderDTO,
    pub stages: StageSequence,
}

/// Avanza la orden a la etapa siguiente. Responde `false` si ya estaba en la última.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "Result<bool, ProgressError>")]
pub struct AdvanceStatus;

#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "OrderDTO")]
pub struct GetOrder;
