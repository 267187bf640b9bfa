pub mod order_feed;
pub mod ui_handler;
