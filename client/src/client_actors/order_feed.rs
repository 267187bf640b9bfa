use crate::client_actors::ui_handler::UIHandler;
use crate::messages::internal_messages::{AdvanceStatus, GetOrder, ShowOrderTracking};
use actix::prelude::*;
use chrono::Local;
use common::constants::STALL_PROBABILITY;
use common::logger::Logger;
use common::progress::ProgressError;
use common::types::dtos::OrderDTO;
use common::types::stage::StageSequence;
use common::utils::{format_stage_time, random_bool_by_given_probability};
use futures_channel::oneshot;
use std::time::Duration;

/// Actor OrderFeed: fuente de datos de la orden.
///
/// Owns the order and moves its status forward along the stage sequence,
/// one stage per tick. It never moves backwards. Every change is pushed to
/// the `UIHandler`; when the terminal stage is reached the feed stops
/// ticking and fires `finished`.
pub struct OrderFeed {
    /// Orden que se está siguiendo.
    pub order: OrderDTO,
    /// Secuencia de etapas de la orden.
    pub stages: StageSequence,
    /// Tiempo entre avances automáticos. `None` desactiva el avance automático.
    pub advance_interval: Option<Duration>,
    /// Probabilidad de que un tick no avance la orden.
    pub stall_probability: f32,
    /// Canal de envío hacia el actor `UIHandler`.
    pub ui_handler: Addr<UIHandler>,
    pub finished: Option<oneshot::Sender<OrderDTO>>,
    /// Handle del intervalo de avance automático.
    ticker: Option<SpawnHandle>,
    pub logger: Logger,
}

impl OrderFeed {
    pub fn new(
        order: OrderDTO,
        stages: StageSequence,
        advance_interval: Option<Duration>,
        ui_handler: Addr<UIHandler>,
        logger: Logger,
    ) -> Self {
        OrderFeed {
            order,
            stages,
            advance_interval,
            stall_probability: STALL_PROBABILITY,
            ui_handler,
            finished: None,
            ticker: None,
            logger,
        }
    }

    /// Receiver resolved with the final order once the terminal stage is reached.
    /// It is cancelled when the starting status cannot be placed on the sequence.
    pub fn on_finished(&mut self) -> oneshot::Receiver<OrderDTO> {
        let (tx, rx) = oneshot::channel();
        self.finished = Some(tx);
        rx
    }

    fn publish(&self) {
        self.ui_handler.do_send(ShowOrderTracking {
            order: self.order.clone(),
            stages: self.stages.clone(),
        });
    }

    fn is_terminal(&self) -> bool {
        self.stages
            .terminal()
            .is_some_and(|stage| stage.id == self.order.status)
    }

    /// Moves the order one stage forward. Returns `false` when it was
    /// already at the terminal stage.
    fn advance(&mut self, ctx: &mut Context<Self>) -> Result<bool, ProgressError> {
        let Some(next) = self.stages.next_after(self.order.status)? else {
            return Ok(false);
        };
        let next_id = next.id;
        let previous = self.order.status;
        self.order.status = next_id;
        self.order.time_stamp = std::time::SystemTime::now();
        let detail = self.order.stage_details.entry(next_id).or_default();
        if detail.time.is_none() {
            detail.time = Some(format_stage_time(Local::now()));
        }
        self.logger.info(format!(
            "Order {} moved from {} to {}",
            self.order.order_id, previous, next_id
        ));
        self.publish();

        if self.is_terminal() {
            self.finish(ctx);
        }
        Ok(true)
    }

    fn finish(&mut self, ctx: &mut Context<Self>) {
        self.logger
            .info(format!("Order {} reached its final stage", self.order.order_id));
        if let Some(finished) = self.finished.take() {
            if finished.send(self.order.clone()).is_err() {
                self.logger.debug("Nobody is waiting for the order to finish");
            }
        }
        if let Some(ticker) = self.ticker.take() {
            ctx.cancel_future(ticker);
        }
    }
}

impl Actor for OrderFeed {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.logger.info(format!(
            "Tracking order {} with current status {}",
            self.order.order_id, self.order.status
        ));
        self.publish();

        // Un estado que no pertenece a la secuencia no se adivina: se muestra el error y no se avanza.
        if let Err(err) = self.stages.classify(self.order.status) {
            self.logger
                .error(format!("Not advancing order {}: {}", self.order.order_id, err));
            // Soltar el sender cancela el receiver de quien espera el final.
            self.finished.take();
            return;
        }
        if self.is_terminal() {
            self.finish(ctx);
            return;
        }
        if let Some(interval) = self.advance_interval {
            let ticker = ctx.run_interval(interval, |act, ctx| {
                if random_bool_by_given_probability(act.stall_probability) {
                    act.logger
                        .debug(format!("Order {} stays in {}", act.order.order_id, act.order.status));
                    return;
                }
                if let Err(err) = act.advance(ctx) {
                    act.logger.error(format!("Cannot advance order: {}", err));
                }
            });
            self.ticker = Some(ticker);
        }
    }
}

impl Handler<AdvanceStatus> for OrderFeed {
    type Result = Result<bool, ProgressError>;

    fn handle(&mut self, _msg: AdvanceStatus, ctx: &mut Self::Context) -> Self::Result {
        self.advance(ctx)
    }
}

impl Handler<GetOrder> for OrderFeed {
    type Result = MessageResult<GetOrder>;

    fn handle(&mut self, _msg: GetOrder, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.order.clone())
    }
}
