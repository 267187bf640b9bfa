use crate::messages::internal_messages::ShowOrderTracking;
use crate::render::tracking_page;
use actix::prelude::*;
use common::logger::Logger;
use common::progress::ProgressError;

/// Actor UIHandler: Interfaz humano-sistema
///
/// Draws the tracking screen every time the order changes. When the status
/// cannot be placed on the stage sequence the rest of the screen is still
/// drawn, with an explicit message where the progress bar would be.
pub struct UIHandler {
    pub logger: Logger,
    /// Cantidad de pantallas dibujadas.
    pub frames: usize,
    /// Si es `false` se arma el texto pero no se imprime.
    pub print: bool,
}

impl UIHandler {
    pub fn new(logger: Logger) -> Self {
        UIHandler {
            logger,
            frames: 0,
            print: true,
        }
    }

    pub fn quiet(logger: Logger) -> Self {
        UIHandler {
            print: false,
            ..UIHandler::new(logger)
        }
    }
}

impl Actor for UIHandler {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.debug("UIHandler started");
    }
}

impl Handler<ShowOrderTracking> for UIHandler {
    type Result = Result<String, ProgressError>;

    fn handle(&mut self, msg: ShowOrderTracking, _ctx: &mut Self::Context) -> Self::Result {
        let page = tracking_page(&msg.order, &msg.stages);
        self.frames += 1;
        if self.print {
            println!("\n{}\n", page.text);
        }
        match page.error {
            None => Ok(page.text),
            Some(err) => {
                match &err {
                    ProgressError::EmptySequence => self.logger.warn("Stage sequence is empty"),
                    ProgressError::UnknownStatus(_) | ProgressError::DuplicateStage(_) => {
                        self.logger.error(format!(
                            "Order {}: {}",
                            msg.order.order_id, err
                        ))
                    }
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client_actors::order_feed::OrderFeed;
    use crate::messages::internal_messages::{AdvanceStatus, GetOrder};
    use crate::sample_data::sample_order;
    use colored::Color;
    use common::logger::LogLevel;
    use common::types::order_status::OrderStatusId;
    use common::types::stage::{Stage, StageIcon, StageSequence};
    use std::time::Duration;

    fn test_logger() -> Logger {
        Logger::new("test", Color::Cyan).with_level(LogLevel::Error)
    }

    fn start_feed(status: OrderStatusId, stages: StageSequence) -> Addr<OrderFeed> {
        let ui = UIHandler::quiet(test_logger()).start();
        OrderFeed::new(sample_order("FF1", status), stages, None, ui, test_logger()).start()
    }

    #[actix_rt::test]
    async fn test_show_order_tracking_returns_rendered_page() {
        let ui = UIHandler::quiet(test_logger()).start();
        let text = ui
            .send(ShowOrderTracking {
                order: sample_order("FF42", OrderStatusId::Preparing),
                stages: StageSequence::default(),
            })
            .await
            .unwrap()
            .unwrap();
        assert!(text.contains("Track Your Order: #FF42"));
    }

    #[actix_rt::test]
    async fn test_show_order_tracking_reports_unknown_status() {
        let ui = UIHandler::quiet(test_logger()).start();
        let stages = StageSequence::new(vec![Stage::new(
            OrderStatusId::Delivered,
            "Delivered",
            StageIcon::PackageCheck,
        )])
        .unwrap();
        let result = ui
            .send(ShowOrderTracking {
                order: sample_order("FF42", OrderStatusId::Preparing),
                stages,
            })
            .await
            .unwrap();
        assert_eq!(
            result,
            Err(ProgressError::UnknownStatus("PREPARING".to_string()))
        );
    }

    #[actix_rt::test]
    async fn test_advance_status_moves_forward_and_stamps_time() {
        let feed = start_feed(OrderStatusId::OrderPlaced, StageSequence::default());
        assert_eq!(feed.send(AdvanceStatus).await.unwrap(), Ok(true));

        let order = feed.send(GetOrder).await.unwrap();
        assert_eq!(order.status, OrderStatusId::Preparing);
        assert!(
            order
                .detail_for(OrderStatusId::Preparing)
                .and_then(|d| d.time.as_ref())
                .is_some()
        );
        // etapas no alcanzadas no tienen hora
        assert!(
            order
                .detail_for(OrderStatusId::Delivered)
                .and_then(|d| d.time.as_ref())
                .is_none()
        );
    }

    #[actix_rt::test]
    async fn test_advance_status_stops_at_terminal_stage() {
        let feed = start_feed(OrderStatusId::OutForDelivery, StageSequence::default());
        assert_eq!(feed.send(AdvanceStatus).await.unwrap(), Ok(true));
        assert_eq!(feed.send(AdvanceStatus).await.unwrap(), Ok(false));
        let order = feed.send(GetOrder).await.unwrap();
        assert_eq!(order.status, OrderStatusId::Delivered);
    }

    #[actix_rt::test]
    async fn test_advance_status_rejects_status_outside_sequence() {
        let stages = StageSequence::new(vec![
            Stage::new(OrderStatusId::OrderPlaced, "Placed", StageIcon::ClipboardList),
            Stage::new(OrderStatusId::Delivered, "Delivered", StageIcon::PackageCheck),
        ])
        .unwrap();
        let feed = start_feed(OrderStatusId::Preparing, stages);
        assert_eq!(
            feed.send(AdvanceStatus).await.unwrap(),
            Err(ProgressError::UnknownStatus("PREPARING".to_string()))
        );
        let order = feed.send(GetOrder).await.unwrap();
        assert_eq!(order.status, OrderStatusId::Preparing);
    }

    #[test]
    #[ntest::timeout(5000)]
    fn test_feed_cancels_completion_for_status_outside_sequence() {
        let system = System::new();
        let finished = system.block_on(async {
            let ui = UIHandler::quiet(test_logger()).start();
            let stages = StageSequence::new(vec![Stage::new(
                OrderStatusId::Delivered,
                "Delivered",
                StageIcon::PackageCheck,
            )])
            .unwrap();
            let mut feed = OrderFeed::new(
                sample_order("FF3", OrderStatusId::Preparing),
                stages,
                Some(Duration::from_millis(10)),
                ui,
                test_logger(),
            );
            let done = feed.on_finished();
            let _feed = feed.start();
            done.await
        });
        assert!(finished.is_err());
    }

    #[test]
    #[ntest::timeout(5000)]
    fn test_feed_cancels_completion_for_empty_sequence() {
        let system = System::new();
        let finished = system.block_on(async {
            let ui = UIHandler::quiet(test_logger()).start();
            let mut feed = OrderFeed::new(
                sample_order("FF5", OrderStatusId::OrderPlaced),
                StageSequence::new(Vec::new()).unwrap(),
                Some(Duration::from_millis(10)),
                ui,
                test_logger(),
            );
            let done = feed.on_finished();
            let _feed = feed.start();
            done.await
        });
        assert!(finished.is_err());
    }

    #[test]
    #[ntest::timeout(5000)]
    fn test_feed_runs_to_delivered_and_signals_completion() {
        let system = System::new();
        let finished = system.block_on(async {
            let ui = UIHandler::quiet(test_logger()).start();
            let mut feed = OrderFeed::new(
                sample_order("FF7", OrderStatusId::OrderPlaced),
                StageSequence::default(),
                Some(Duration::from_millis(10)),
                ui,
                test_logger(),
            );
            feed.stall_probability = 0.0;
            let done = feed.on_finished();
            let _feed = feed.start();
            done.await
        });
        let order = finished.unwrap();
        assert_eq!(order.status, OrderStatusId::Delivered);
    }
}
