use super::is_zero;
use crate::source::SourceConnector;
use serde::{Deserialize, Serialize};

pub struct Freshdesk;

impl SourceConnector for Freshdesk {
    const NAME: &'static str = "freshdesk";
    type Config = FreshdeskConfig;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreshdeskConfig {
    /// Freshdesk domain, e.g. `acme.freshdesk.com`.
    pub domain: String,
    pub start_date: String,
    pub api_key: String,
    /// Client-side throttle; Airbyte picks its own default when omitted.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub requests_per_minute: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_names() {
        let config = FreshdeskConfig {
            domain: "acme.freshdesk.com".to_string(),
            start_date: "2023-01-01T00:00:00Z".to_string(),
            api_key: "key".to_string(),
            requests_per_minute: 50,
        };
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "domain": "acme.freshdesk.com",
                "start_date": "2023-01-01T00:00:00Z",
                "api_key": "key",
                "requests_per_minute": 50
            })
        );
    }

    #[test]
    fn test_unset_rate_is_omitted() {
        let value = serde_json::to_value(FreshdeskConfig::default()).unwrap();
        assert!(value.get("requests_per_minute").is_none());
    }
}
