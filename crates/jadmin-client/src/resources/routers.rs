//! MT and MO routing table management.
//!
//! Route identity is the `order` value. `flush` empties a whole table; it
//! shares the DELETE verb with single-route removal, distinguished only by
//! the literal `flush` path segment.

use jadmin_api_models::{
    ActionResponse, MoRouterCreate, MoRouterList, MtRouterCreate, MtRouterList,
};
use reqwest::Method;
use serde_json::Value;

use crate::error::Error;
use crate::gateway::{ApiGateway, decode};

/// Sub-client for `/mtrouters`.
#[derive(Debug, Clone, Copy)]
pub struct MtRoutersApi<'a> {
    gateway: &'a ApiGateway,
}

/// Sub-client for `/morouters`.
#[derive(Debug, Clone, Copy)]
pub struct MoRoutersApi<'a> {
    gateway: &'a ApiGateway,
}

impl ApiGateway {
    /// MT (mobile-terminated) routing operations.
    #[must_use]
    pub const fn mt_routers(&self) -> MtRoutersApi<'_> {
        MtRoutersApi { gateway: self }
    }

    /// MO (mobile-originated) routing operations.
    #[must_use]
    pub const fn mo_routers(&self) -> MoRoutersApi<'_> {
        MoRoutersApi { gateway: self }
    }
}

impl MtRoutersApi<'_> {
    /// `GET /mtrouters`
    pub async fn list(&self) -> Result<MtRouterList, Error> {
        self.gateway.get("/mtrouters").await
    }

    /// `GET /mtrouters/{order}`
    pub async fn get(&self, order: &str) -> Result<Value, Error> {
        self.gateway.get(&format!("/mtrouters/{order}")).await
    }

    /// `POST /mtrouters`
    pub async fn create(&self, body: &MtRouterCreate) -> Result<Value, Error> {
        self.gateway.send(Method::POST, "/mtrouters", body).await
    }

    /// `DELETE /mtrouters/{order}`
    pub async fn delete(&self, order: &str) -> Result<ActionResponse, Error> {
        let value = self
            .gateway
            .request(Method::DELETE, &format!("/mtrouters/{order}"), None)
            .await?;
        decode(value)
    }

    /// `DELETE /mtrouters/flush` — drop the entire MT routing table.
    pub async fn flush(&self) -> Result<ActionResponse, Error> {
        let value = self
            .gateway
            .request(Method::DELETE, "/mtrouters/flush", None)
            .await?;
        decode(value)
    }
}

impl MoRoutersApi<'_> {
    /// `GET /morouters`
    pub async fn list(&self) -> Result<MoRouterList, Error> {
        self.gateway.get("/morouters").await
    }

    /// `GET /morouters/{order}`
    pub async fn get(&self, order: &str) -> Result<Value, Error> {
        self.gateway.get(&format!("/morouters/{order}")).await
    }

    /// `POST /morouters`
    pub async fn create(&self, body: &MoRouterCreate) -> Result<Value, Error> {
        self.gateway.send(Method::POST, "/morouters", body).await
    }

    /// `DELETE /morouters/{order}`
    pub async fn delete(&self, order: &str) -> Result<ActionResponse, Error> {
        let value = self
            .gateway
            .request(Method::DELETE, &format!("/morouters/{order}"), None)
            .await?;
        decode(value)
    }

    /// `DELETE /morouters/flush` — drop the entire MO routing table.
    pub async fn flush(&self) -> Result<ActionResponse, Error> {
        let value = self
            .gateway
            .request(Method::DELETE, "/morouters/flush", None)
            .await?;
        decode(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::ApiGateway;
    use crate::session::SessionStore;
    use httpmock::prelude::*;
    use jadmin_api_models::MtRouterCreate;
    use url::Url;

    fn gateway_for(server: &MockServer) -> ApiGateway {
        let base = Url::parse(&server.url("/api")).expect("mock server URL");
        let session = SessionStore::in_memory();
        session.set_credentials("admin", "secret");
        ApiGateway::new(base, session)
    }

    #[tokio::test]
    async fn create_comma_joins_connector_selections() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/mtrouters").json_body(
                    serde_json::json!({
                        "type": "StaticMTRoute",
                        "order": "10",
                        "rate": "0.0",
                        "smppconnectors": "smsc1,smsc2",
                        "filters": "f1"
                    }),
                );
                then.status(200)
                    .json_body(serde_json::json!({ "order": "10" }));
            })
            .await;

        let gateway = gateway_for(&server);
        let body = MtRouterCreate {
            kind: "StaticMTRoute".to_string(),
            order: "10".to_string(),
            rate: "0.0".to_string(),
            smppconnectors: Some("smsc1,smsc2".to_string()),
            httpconnectors: None,
            filters: Some("f1".to_string()),
        };
        gateway.mt_routers().create(&body).await.expect("create route");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn flush_deletes_the_whole_table() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/mtrouters/flush");
                then.status(204);
            })
            .await;

        let gateway = gateway_for(&server);
        let response = gateway.mt_routers().flush().await.expect("flush table");

        mock.assert_async().await;
        assert!(response.success);
    }

    #[tokio::test]
    async fn mo_list_decodes_the_morouters_envelope() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/morouters");
                then.status(200).json_body(serde_json::json!({
                    "morouters": [{
                        "order": "0",
                        "type": "DefaultRoute",
                        "connectors": ["push1"],
                        "filters": []
                    }]
                }));
            })
            .await;

        let gateway = gateway_for(&server);
        let list = gateway.mo_routers().list().await.expect("list routes");

        assert_eq!(list.morouters.len(), 1);
        assert_eq!(list.morouters[0].kind, "DefaultRoute");
    }
}
