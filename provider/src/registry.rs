//! Resource registry - maps resource type names to constructors.
//!
//! Built once at startup. Type names are `<provider>_source_<connector>`,
//! e.g. `airbyte_source_stripe`.

use crate::resource::{ResourceService, SourceResource};
use airbyte::connectors::{
    Amplitude, Faker, Freshdesk, Hubspot, Pipedrive, Shopify, Stripe, ZendeskSupport,
};
use airbyte::{Client, SourceConnector};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Builds a resource bound to a configured client.
pub type ResourceConstructor = fn(Arc<Client>) -> Box<dyn ResourceService>;

fn construct_source<S: SourceConnector>(client: Arc<Client>) -> Box<dyn ResourceService> {
    Box::new(SourceResource::<S>::new(client))
}

pub struct Registry {
    provider: String,
    constructors: BTreeMap<String, ResourceConstructor>,
}

impl Registry {
    /// An empty registry for the given provider name.
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            constructors: BTreeMap::new(),
        }
    }

    /// A registry with every supported Airbyte source.
    pub fn with_default_sources(provider: impl Into<String>) -> Self {
        let mut registry = Self::new(provider);
        registry
            .register::<Faker>()
            .register::<Stripe>()
            .register::<Amplitude>()
            .register::<Shopify>()
            .register::<Freshdesk>()
            .register::<ZendeskSupport>()
            .register::<Hubspot>()
            .register::<Pipedrive>();
        registry
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Register the source resource for connector `S`.
    pub fn register<S: SourceConnector>(&mut self) -> &mut Self {
        let type_name = format!("{}_source_{}", self.provider, S::NAME);
        self.register_constructor(type_name, construct_source::<S>)
    }

    /// Register an arbitrary constructor under a full type name.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register_constructor(
        &mut self,
        type_name: impl Into<String>,
        constructor: ResourceConstructor,
    ) -> &mut Self {
        self.constructors.insert(type_name.into(), constructor);
        self
    }

    /// Instantiate the resource registered under `type_name`.
    pub fn build(&self, type_name: &str, client: Arc<Client>) -> Option<Box<dyn ResourceService>> {
        self.constructors.get(type_name).map(|construct| construct(client))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}
