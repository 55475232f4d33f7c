//! Routing filter management.

use jadmin_api_models::{ActionResponse, FilterCreate, FilterDetail, FilterList};
use reqwest::Method;
use serde_json::Value;

use crate::error::Error;
use crate::gateway::{ApiGateway, decode};

/// Sub-client for `/filters`.
#[derive(Debug, Clone, Copy)]
pub struct FiltersApi<'a> {
    gateway: &'a ApiGateway,
}

impl ApiGateway {
    /// Routing filter operations.
    #[must_use]
    pub const fn filters(&self) -> FiltersApi<'_> {
        FiltersApi { gateway: self }
    }
}

impl FiltersApi<'_> {
    /// `GET /filters`
    pub async fn list(&self) -> Result<FilterList, Error> {
        self.gateway.get("/filters").await
    }

    /// `GET /filters/{fid}`
    pub async fn get(&self, fid: &str) -> Result<FilterDetail, Error> {
        self.gateway.get(&format!("/filters/{fid}")).await
    }

    /// `POST /filters`
    pub async fn create(&self, body: &FilterCreate) -> Result<Value, Error> {
        self.gateway.send(Method::POST, "/filters", body).await
    }

    /// `DELETE /filters/{fid}`
    pub async fn delete(&self, fid: &str) -> Result<ActionResponse, Error> {
        let value = self
            .gateway
            .request(Method::DELETE, &format!("/filters/{fid}"), None)
            .await?;
        decode(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::ApiGateway;
    use crate::session::SessionStore;
    use httpmock::prelude::*;
    use jadmin_api_models::FilterCreate;
    use url::Url;

    fn gateway_for(server: &MockServer) -> ApiGateway {
        let base = Url::parse(&server.url("/api")).expect("mock server URL");
        let session = SessionStore::in_memory();
        session.set_credentials("admin", "secret");
        ApiGateway::new(base, session)
    }

    #[tokio::test]
    async fn create_serializes_kind_under_the_type_key() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/filters").json_body(
                    serde_json::json!({ "fid": "f1", "type": "ConnectorFilter", "parameter": "smsc1" }),
                );
                then.status(200)
                    .json_body(serde_json::json!({ "fid": "f1" }));
            })
            .await;

        let gateway = gateway_for(&server);
        let body = FilterCreate {
            fid: "f1".to_string(),
            kind: "ConnectorFilter".to_string(),
            parameter: Some("smsc1".to_string()),
        };
        gateway.filters().create(&body).await.expect("create filter");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn get_decodes_the_filter_envelope() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/filters/f1");
                then.status(200).json_body(serde_json::json!({
                    "filter": { "fid": "f1", "type": "TransparentFilter" }
                }));
            })
            .await;

        let gateway = gateway_for(&server);
        let detail = gateway.filters().get("f1").await.expect("get filter");

        assert_eq!(detail.filter.kind, "TransparentFilter");
    }
}
