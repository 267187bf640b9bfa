pub mod constants;
pub mod logger;
pub mod progress;
pub mod types;
pub mod utils;
