use airbyte::{Client, Source, SourceApi, SourceConnector};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// A call from the host into a resource.
///
/// `plan_*` carry the desired state (create, update), `state_*` the state
/// recorded after the previous call (read, delete).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceRequest {
    #[serde(default)]
    pub plan_id: String,
    #[serde(default)]
    pub plan_contents: Value,
    #[serde(default)]
    pub state_id: String,
    #[serde(default)]
    pub state_contents: Value,
}

/// The new state the host should record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    #[serde(default)]
    pub state_id: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub state_contents: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_last_updated: Option<String>,
}

/// A resource type the host can manage.
///
/// Resources are stateless: everything needed for a call is in the request
/// and in the client they were built with.
#[async_trait]
pub trait ResourceService: Send + Sync {
    /// Type name without the provider prefix (e.g. `"source_stripe"`).
    fn type_suffix(&self) -> String;

    /// Full type name: provider name + `"_"` + suffix.
    fn type_name(&self, provider: &str) -> String {
        format!("{}_{}", provider, self.type_suffix())
    }

    async fn create(&self, req: &ServiceRequest) -> Result<ServiceResponse>;

    async fn read(&self, req: &ServiceRequest) -> Result<ServiceResponse>;

    async fn update(&self, req: &ServiceRequest) -> Result<ServiceResponse>;

    async fn delete(&self, req: &ServiceRequest) -> Result<ServiceResponse>;
}

/// Plan/state document of a source resource, in the host's snake_case shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceModel<C> {
    pub name: String,
    #[serde(default)]
    pub source_id: String,
    #[serde(default)]
    pub source_definition_id: String,
    #[serde(default)]
    pub workspace_id: String,
    pub connection_configuration: C,
}

impl<C> From<Source<C>> for ResourceModel<C> {
    fn from(source: Source<C>) -> Self {
        Self {
            name: source.name,
            source_id: source.source_id,
            source_definition_id: source.source_definition_id,
            workspace_id: source.workspace_id,
            connection_configuration: source.connection_configuration,
        }
    }
}

impl<C> ResourceModel<C> {
    pub fn into_source(self) -> Source<C> {
        Source {
            name: self.name,
            source_id: self.source_id,
            source_definition_id: self.source_definition_id,
            workspace_id: self.workspace_id,
            connection_configuration: self.connection_configuration,
        }
    }
}

/// Current time in RFC 850 format, as recorded in `state_last_updated`.
fn last_updated() -> String {
    Utc::now().format("%A, %d-%b-%y %H:%M:%S UTC").to_string()
}

/// Resource adapter for any Airbyte source type.
pub struct SourceResource<S: SourceConnector> {
    api: SourceApi<S>,
}

impl<S: SourceConnector> SourceResource<S> {
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            api: SourceApi::new(client),
        }
    }

    fn decode_plan(req: &ServiceRequest) -> Result<ResourceModel<S::Config>> {
        serde_json::from_value(req.plan_contents.clone())
            .with_context(|| format!("Failed to decode {} plan", S::NAME))
    }

    fn state_response(source: Source<S::Config>, stamp: bool) -> Result<ServiceResponse> {
        let state = ResourceModel::from(source);
        Ok(ServiceResponse {
            state_id: state.source_id.clone(),
            state_contents: serde_json::to_value(&state).context("Failed to encode state")?,
            state_last_updated: stamp.then(last_updated),
        })
    }
}

#[async_trait]
impl<S: SourceConnector> ResourceService for SourceResource<S> {
    fn type_suffix(&self) -> String {
        format!("source_{}", S::NAME)
    }

    async fn create(&self, req: &ServiceRequest) -> Result<ServiceResponse> {
        let plan = Self::decode_plan(req)?;

        // The id is assigned by Airbyte; never send one on create.
        let body = Source {
            source_id: String::new(),
            ..plan.into_source()
        };

        let source = self
            .api
            .create(&body)
            .await
            .with_context(|| format!("Failed to create {} source", S::NAME))?;

        Self::state_response(source, true)
    }

    async fn read(&self, req: &ServiceRequest) -> Result<ServiceResponse> {
        if req.state_id.is_empty() {
            debug!(connector = S::NAME, "No prior state, nothing to read");
            let state_contents = if req.state_contents.is_null() {
                Value::Null
            } else {
                let state: ResourceModel<S::Config> =
                    serde_json::from_value(req.state_contents.clone())
                        .with_context(|| format!("Failed to decode {} state", S::NAME))?;
                serde_json::to_value(&state).context("Failed to encode state")?
            };
            return Ok(ServiceResponse {
                state_id: String::new(),
                state_contents,
                state_last_updated: None,
            });
        }

        let source = self
            .api
            .read(&req.state_id)
            .await
            .with_context(|| format!("Failed to read {} source {}", S::NAME, req.state_id))?;

        Self::state_response(source, false)
    }

    async fn update(&self, req: &ServiceRequest) -> Result<ServiceResponse> {
        let plan = Self::decode_plan(req)?;

        // Definition and workspace cannot change; Airbyte only takes these three.
        let body = Source {
            name: plan.name,
            source_id: plan.source_id,
            connection_configuration: plan.connection_configuration,
            ..Default::default()
        };

        self.api
            .update(&body)
            .await
            .with_context(|| format!("Failed to update {} source {}", S::NAME, body.source_id))?;

        // The update response is not guaranteed to be complete, re-read it.
        let source_id = if req.plan_id.is_empty() {
            body.source_id.as_str()
        } else {
            req.plan_id.as_str()
        };
        let source = self
            .api
            .read(source_id)
            .await
            .with_context(|| format!("Failed to read {} source {}", S::NAME, source_id))?;

        Self::state_response(source, true)
    }

    async fn delete(&self, req: &ServiceRequest) -> Result<ServiceResponse> {
        self.api
            .delete(&req.state_id)
            .await
            .with_context(|| format!("Failed to delete {} source {}", S::NAME, req.state_id))?;

        Ok(ServiceResponse::default())
    }
}
