//! Generic source adapter.
//!
//! Every Airbyte source type is managed through the same four endpoints and
//! differs only in the shape of its `connectionConfiguration`. A connector is
//! therefore described by a [`SourceConnector`] (a name plus a configuration
//! type), and [`SourceApi`] implements create/read/update/delete once for all
//! of them.
//!
//! # Example
//!
//! ```no_run
//! use airbyte::connectors::stripe::{Stripe, StripeConfig};
//! use airbyte::{Client, ClientConfig, Source, SourceApi};
//! use std::sync::Arc;
//!
//! # async fn run() -> airbyte::Result<()> {
//! let client = Arc::new(Client::new(ClientConfig {
//!     host: "http://localhost:8000".to_string(),
//!     username: "airbyte".to_string(),
//!     password: "password".to_string(),
//! })?);
//! let stripe = SourceApi::<Stripe>::new(client);
//!
//! let created = stripe
//!     .create(&Source {
//!         name: "billing".to_string(),
//!         source_definition_id: "e094cb9a-26de-4645-8761-65c0c425d1de".to_string(),
//!         workspace_id: "b9d3e1a2-0000-0000-0000-000000000000".to_string(),
//!         connection_configuration: StripeConfig {
//!             start_date: "2023-01-01T00:00:00Z".to_string(),
//!             account_id: "acct_123".to_string(),
//!             client_secret: "sk_test".to_string(),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! stripe.delete(&created.source_id).await?;
//! # Ok(())
//! # }
//! ```

use crate::client::Client;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};

pub const CREATE_PATH: &str = "/sources/create";
pub const GET_PATH: &str = "/sources/get";
pub const UPDATE_PATH: &str = "/sources/update";
pub const DELETE_PATH: &str = "/sources/delete";

/// Describes one Airbyte source type.
pub trait SourceConnector: Send + Sync + 'static {
    /// Lowercase connector name (e.g. `"stripe"`, `"zendesk_support"`).
    const NAME: &'static str;

    /// The connector-specific `connectionConfiguration` record.
    type Config: Serialize
        + DeserializeOwned
        + Clone
        + Debug
        + Default
        + PartialEq
        + Send
        + Sync
        + 'static;
}

/// A source as exchanged with the Airbyte API.
///
/// `source_id` is assigned by Airbyte: it is empty (and omitted from the
/// payload) before creation and always set on a successful response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source<C> {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_definition_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub workspace_id: String,
    pub connection_configuration: C,
}

impl<C> Source<C> {
    /// True once Airbyte has assigned an id.
    pub fn is_persisted(&self) -> bool {
        !self.source_id.is_empty()
    }
}

/// Request body of the get and delete endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SourceIdRequest<'a> {
    source_id: &'a str,
}

/// Create/read/update/delete for one source type.
pub struct SourceApi<S: SourceConnector> {
    client: Arc<Client>,
    _connector: PhantomData<S>,
}

impl<S: SourceConnector> Clone for SourceApi<S> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.client))
    }
}

impl<S: SourceConnector> SourceApi<S> {
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client,
            _connector: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        S::NAME
    }

    /// Create a source. The returned record carries the assigned `source_id`.
    pub async fn create(&self, source: &Source<S::Config>) -> Result<Source<S::Config>> {
        let created: Source<S::Config> = self.client.post_json(CREATE_PATH, source).await?;
        info!(
            connector = S::NAME,
            source_id = %created.source_id,
            name = %created.name,
            "Source created"
        );
        Ok(created)
    }

    /// Fetch the authoritative record of a source.
    ///
    /// An empty id is sent as-is; Airbyte's rejection is returned unchanged.
    pub async fn read(&self, source_id: &str) -> Result<Source<S::Config>> {
        let source = self
            .client
            .post_json(GET_PATH, &SourceIdRequest { source_id })
            .await?;
        debug!(connector = S::NAME, source_id, "Source read");
        Ok(source)
    }

    /// Update a source; `source.source_id` selects which one.
    pub async fn update(&self, source: &Source<S::Config>) -> Result<Source<S::Config>> {
        let updated: Source<S::Config> = self.client.post_json(UPDATE_PATH, source).await?;
        info!(
            connector = S::NAME,
            source_id = %source.source_id,
            "Source updated"
        );
        Ok(updated)
    }

    /// Delete a source. Any 2xx body is ignored.
    pub async fn delete(&self, source_id: &str) -> Result<()> {
        self.client
            .post(DELETE_PATH, &SourceIdRequest { source_id })
            .await?;
        info!(connector = S::NAME, source_id, "Source deleted");
        Ok(())
    }
}
