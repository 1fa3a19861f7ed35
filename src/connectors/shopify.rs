use crate::source::SourceConnector;
use serde::{Deserialize, Serialize};

pub struct Shopify;

impl SourceConnector for Shopify {
    const NAME: &'static str = "shopify";
    type Config = ShopifyConfig;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopifyConfig {
    pub start_date: String,
    /// Store name, without the `.myshopify.com` suffix.
    pub shop: String,
    pub credentials: ShopifyCredentials,
}

/// Either an API password (`auth_method = "api_password"`) or an OAuth app
/// (`auth_method = "oauth2.0"`). Fields of the other method stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopifyCredentials {
    pub auth_method: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_password: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_secret: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub access_token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_id: String,
}
