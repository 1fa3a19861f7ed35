use crate::source::SourceConnector;
use serde::{Deserialize, Serialize};

pub struct Pipedrive;

impl SourceConnector for Pipedrive {
    const NAME: &'static str = "pipedrive";
    type Config = PipedriveConfig;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipedriveConfig {
    pub replication_start_date: String,
    pub authorization: PipedriveAuthorization,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipedriveAuthorization {
    /// Always `"Token"` for API token auth.
    pub auth_type: String,
    pub api_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Client, ClientConfig, Source, SourceApi};
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_update_pipedrive_source() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/sources/update")
            .match_body(Matcher::Json(json!({
                "name": "crm",
                "sourceId": "src-1",
                "connectionConfiguration": {
                    "replication_start_date": "2023-06-01T00:00:00Z",
                    "authorization": {"auth_type": "Token", "api_token": "pd_123"}
                }
            })))
            .with_status(200)
            .with_body(
                json!({
                    "name": "crm",
                    "sourceId": "src-1",
                    "sourceDefinitionId": "d8286229-c680-4063-8c59-23b9b391c700",
                    "workspaceId": "ws-1",
                    "connectionConfiguration": {
                        "replication_start_date": "2023-06-01T00:00:00Z",
                        "authorization": {"auth_type": "Token", "api_token": "**********"}
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = Arc::new(
            Client::new(ClientConfig {
                host: server.url(),
                ..Default::default()
            })
            .unwrap(),
        );
        let updated = SourceApi::<Pipedrive>::new(client)
            .update(&Source {
                name: "crm".to_string(),
                source_id: "src-1".to_string(),
                connection_configuration: PipedriveConfig {
                    replication_start_date: "2023-06-01T00:00:00Z".to_string(),
                    authorization: PipedriveAuthorization {
                        auth_type: "Token".to_string(),
                        api_token: "pd_123".to_string(),
                    },
                },
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.workspace_id, "ws-1");
        assert_eq!(updated.connection_configuration.authorization.auth_type, "Token");
        mock.assert_async().await;
    }
}
