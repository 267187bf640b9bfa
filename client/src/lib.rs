pub mod client_actors;
pub mod config;
pub mod messages;
pub mod render;
pub mod sample_data;
