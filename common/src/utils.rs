use crate::constants::{CURRENCY_SYMBOL, STAGE_TIME_FORMAT};
use chrono::{DateTime, Local};
use rand::random;

pub fn random_bool_by_given_probability(probability: f32) -> bool {
    let rand_value: f32 = random();
    rand_value < probability
}

pub fn format_price(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

/// Clock time the way stage timestamps are shown ("3:50 PM").
pub fn format_stage_time(at: DateTime<Local>) -> String {
    at.format(STAGE_TIME_FORMAT).to_string()
}
