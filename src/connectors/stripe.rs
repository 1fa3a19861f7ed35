use super::is_zero;
use crate::source::SourceConnector;
use serde::{Deserialize, Serialize};

pub struct Stripe;

impl SourceConnector for Stripe {
    const NAME: &'static str = "stripe";
    type Config = StripeConfig;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StripeConfig {
    pub start_date: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub lookback_window_days: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub slice_range: i64,
    pub client_secret: String,
    pub account_id: String,
}
