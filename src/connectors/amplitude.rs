use super::is_zero;
use crate::source::SourceConnector;
use serde::{Deserialize, Serialize};

pub struct Amplitude;

impl SourceConnector for Amplitude {
    const NAME: &'static str = "amplitude";
    type Config = AmplitudeConfig;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmplitudeConfig {
    pub api_key: String,
    pub secret_key: String,
    pub start_date: String,
    /// `"Standard Server"` or `"EU Residency Server"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data_region: String,
    /// Hours covered by one export request.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub request_time_range: i64,
}
