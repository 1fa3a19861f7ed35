use crate::source::SourceConnector;
use serde::{Deserialize, Serialize};

/// Synthetic data source, mostly used to try out a workspace.
pub struct Faker;

impl SourceConnector for Faker {
    const NAME: &'static str = "faker";
    type Config = FakerConfig;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FakerConfig {
    pub seed: i64,
    pub count: i64,
    pub records_per_sync: i64,
    pub records_per_slice: i64,
}
