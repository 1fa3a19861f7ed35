use crate::source::SourceConnector;
use serde::{Deserialize, Serialize};

pub struct ZendeskSupport;

impl SourceConnector for ZendeskSupport {
    const NAME: &'static str = "zendesk_support";
    type Config = ZendeskSupportConfig;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZendeskSupportConfig {
    pub start_date: String,
    pub subdomain: String,
    #[serde(default)]
    pub ignore_pagination: bool,
    pub credentials: ZendeskSupportCredentials,
}

/// `credentials` is `"api_token"` (email + API token) or `"oauth2.0"`
/// (access token).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZendeskSupportCredentials {
    pub credentials: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub access_token: String,
}
