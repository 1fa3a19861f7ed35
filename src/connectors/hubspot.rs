use crate::source::SourceConnector;
use serde::{Deserialize, Serialize};

pub struct Hubspot;

impl SourceConnector for Hubspot {
    const NAME: &'static str = "hubspot";
    type Config = HubspotConfig;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HubspotConfig {
    pub start_date: String,
    pub credentials: HubspotCredentials,
}

/// `credentials_title` selects the method: `"OAuth Credentials"` uses the
/// client id, secret and refresh token; `"Private App Credentials"` uses the
/// access token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HubspotCredentials {
    pub credentials_title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub access_token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_secret: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_id: String,
}
