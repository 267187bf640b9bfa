use actix::Actor;
use client::client_actors::order_feed::OrderFeed;
use client::client_actors::ui_handler::UIHandler;
use client::config::ClientConfig;
use client::sample_data::sample_order;
use colored::Color;
use common::logger::Logger;
use tokio::signal::ctrl_c;

#[actix::main]
async fn main() -> std::io::Result<()> {
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            let program = std::env::args().next().unwrap_or_else(|| "client".to_string());
            eprintln!("{err}");
            eprintln!("Uso: {program} [order_id] [initial_status] [stages.json]");
            std::process::exit(1);
        }
    };

    let logger = Logger::new(format!("Order {}", &config.order_id), Color::Cyan);
    let ui_handler = UIHandler::new(Logger::new("UI", Color::Blue)).start();

    let mut feed = OrderFeed::new(
        sample_order(config.order_id.clone(), config.initial_status),
        config.stages,
        config.advance_interval,
        ui_handler,
        logger.clone(),
    );
    let finished = feed.on_finished();
    let _feed = feed.start();

    tokio::select! {
        _ = ctrl_c() => {
            logger.info("Ctrl-C recibido, apagando...");
        }
        delivered = finished => match delivered {
            Ok(order) => {
                logger.info(format!("Order {} delivered. Enjoy your meal!", order.order_id));
            }
            Err(_) => {
                logger.error(format!("Order {} cannot be tracked, exiting", config.order_id));
                actix::System::current().stop();
                std::process::exit(1);
            }
        },
    }
    actix::System::current().stop();
    Ok(())
}
