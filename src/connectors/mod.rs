//! Connection configurations of the supported Airbyte sources.
//!
//! Each module defines a [`SourceConnector`](crate::SourceConnector)
//! descriptor and the `connectionConfiguration` record it carries. Field names
//! are Airbyte's wire names.

pub mod amplitude;
pub mod faker;
pub mod freshdesk;
pub mod hubspot;
pub mod pipedrive;
pub mod shopify;
pub mod stripe;
pub mod zendesk_support;

pub use amplitude::Amplitude;
pub use faker::Faker;
pub use freshdesk::Freshdesk;
pub use hubspot::Hubspot;
pub use pipedrive::Pipedrive;
pub use shopify::Shopify;
pub use stripe::Stripe;
pub use zendesk_support::ZendeskSupport;

/// Optional numeric tuning parameters are left out of the payload when unset.
pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}
