//! Terminal rendering of the order tracking screen.
//!
//! Everything here is a pure function from order data to text. Colours
//! follow the stage classification: completed stages are green, the
//! active one blue and pending ones dimmed.

use colored::*;
use common::progress::{ConnectorState, Progress, ProgressError, StageState};
use common::types::dtos::OrderDTO;
use common::types::order_status::OrderStatusId;
use common::types::stage::{StageIcon, StageSequence};
use common::utils::format_price;

const CONNECTOR_COMPLETED: &str = "━━━";
const CONNECTOR_PENDING: &str = "───";
const TIMELINE_COMPLETED: &str = "┃";
const TIMELINE_PENDING: &str = "│";

pub fn glyph(icon: StageIcon) -> &'static str {
    match icon {
        StageIcon::ClipboardList => "📋",
        StageIcon::ChefHat => "🧑‍🍳",
        StageIcon::Truck => "🚚",
        StageIcon::PackageCheck => "📦",
        StageIcon::Package => "📦",
        StageIcon::Utensils => "🍴",
        StageIcon::Clock => "🕒",
        StageIcon::MapPin => "📍",
        StageIcon::CheckCircle => "✅",
    }
}

/// Timeline rows use their own icon set, independent of the tracker's.
pub fn timeline_icon(id: OrderStatusId) -> StageIcon {
    match id {
        OrderStatusId::OrderPlaced => StageIcon::Package,
        OrderStatusId::Preparing => StageIcon::Utensils,
        OrderStatusId::OutForDelivery => StageIcon::Clock,
        OrderStatusId::Delivered => StageIcon::MapPin,
    }
}

fn paint(text: &str, state: StageState) -> ColoredString {
    match state {
        StageState::Completed => text.green(),
        StageState::Active => text.blue().bold(),
        StageState::Pending => text.dimmed(),
    }
}

fn paint_connector(text: &str, state: ConnectorState) -> ColoredString {
    match state {
        ConnectorState::Completed => text.green(),
        ConnectorState::Pending => text.dimmed(),
    }
}

/// Horizontal progress bar: one node per stage, connectors in between.
pub fn render_progress(progress: &Progress<'_>) -> String {
    let mut line = String::new();
    for (i, entry) in progress.stages.iter().enumerate() {
        let node = format!("{} {}", glyph(entry.icon()), entry.stage.label);
        line.push_str(&paint(&node, entry.state).to_string());
        if let Some(connector) = progress.connectors.get(i) {
            line.push(' ');
            line.push_str(&paint_connector(connector_glyph(*connector), *connector).to_string());
            line.push(' ');
        }
    }
    line
}

fn connector_glyph(state: ConnectorState) -> &'static str {
    match state {
        ConnectorState::Completed => CONNECTOR_COMPLETED,
        ConnectorState::Pending => CONNECTOR_PENDING,
    }
}

/// Vertical timeline. Time and details are only shown for stages the
/// order has already reached.
pub fn render_timeline(order: &OrderDTO, progress: &Progress<'_>) -> String {
    let mut lines = Vec::new();
    for (i, entry) in progress.stages.iter().enumerate() {
        let marker = glyph(timeline_icon(entry.stage.id));
        lines.push(format!("{} {}", marker, paint(&entry.stage.label, entry.state)));
        if entry.is_reached() {
            if let Some(detail) = order.detail_for(entry.stage.id) {
                if let Some(time) = &detail.time {
                    lines.push(format!("   {}", time.dimmed()));
                }
                if let Some(details) = &detail.details {
                    lines.push(format!("   {}", details));
                }
            }
        }
        if let Some(connector) = progress.connectors.get(i) {
            let bar = match connector {
                ConnectorState::Completed => TIMELINE_COMPLETED,
                ConnectorState::Pending => TIMELINE_PENDING,
            };
            lines.push(format!(" {}", paint_connector(bar, *connector)));
        }
    }
    lines.join("\n")
}

pub fn render_summary(order: &OrderDTO) -> String {
    let mut lines = vec![
        "Order Summary".bold().to_string(),
        format!("From: {}", order.restaurant_name),
    ];
    for item in &order.items {
        lines.push(format!(
            "  {} (x{}) {}",
            item.name,
            item.quantity,
            format_price(item.line_total())
        ));
    }
    lines.push(format!("Subtotal: {}", format_price(order.subtotal())));
    lines.push(format!("Delivery Fee: {}", format_price(order.delivery_fee)));
    lines.push(format!("Tax: {}", format_price(order.tax)));
    lines.push(
        format!("Total: {}", format_price(order.total()))
            .bold()
            .to_string(),
    );
    lines.join("\n")
}

pub fn render_delivery_details(order: &OrderDTO) -> String {
    let mut lines = vec![
        "Delivery Details".bold().to_string(),
        format!("Delivery Address: {}", order.delivery_address),
    ];
    if let Some(driver) = order.driver_visible() {
        lines.push(format!("Your Rider: {}", driver.name));
        lines.push(format!("  {} ({})", driver.vehicle, driver.plate).dimmed().to_string());
    }
    let live_map = if order.live_tracking_available() {
        "[Track on Map (Live)]".normal()
    } else {
        "[Track on Map (Live)] unavailable".dimmed()
    };
    lines.push(live_map.to_string());
    lines.join("\n")
}

/// A rendered tracking screen. `error` is set when the progress sections
/// were replaced by an error message.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub text: String,
    pub error: Option<ProgressError>,
}

pub fn tracking_page(order: &OrderDTO, stages: &StageSequence) -> RenderedPage {
    let header = format!(
        "{}\nEstimated Delivery: {}",
        format!("Track Your Order: #{}", order.order_id).bold(),
        order.estimated_delivery_time.blue()
    );
    let (tracker, timeline, error) = match stages.classify(order.status) {
        Ok(progress) => (
            render_progress(&progress),
            render_timeline(order, &progress),
            None,
        ),
        Err(err) => {
            let message = err.user_message().red().to_string();
            (message, String::new(), Some(err))
        }
    };

    let mut sections = vec![header, tracker, render_summary(order)];
    sections.push(render_delivery_details(order));
    if !timeline.is_empty() {
        sections.push(format!("{}\n{}", "Order Timeline".bold(), timeline));
    }
    RenderedPage {
        text: sections.join("\n\n"),
        error,
    }
}
