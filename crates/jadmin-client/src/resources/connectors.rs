//! SMPP and HTTP client connector management.

use jadmin_api_models::{
    ActionResponse, HttpConnectorCreate, HttpConnectorList, SmppConnectorConfig,
    SmppConnectorDetail, SmppConnectorList,
};
use reqwest::Method;
use serde_json::Value;

use crate::error::Error;
use crate::gateway::{ApiGateway, decode};

/// Sub-client for `/smppsconns`.
#[derive(Debug, Clone, Copy)]
pub struct SmppConnectorsApi<'a> {
    gateway: &'a ApiGateway,
}

/// Sub-client for `/httpsconns`.
#[derive(Debug, Clone, Copy)]
pub struct HttpConnectorsApi<'a> {
    gateway: &'a ApiGateway,
}

impl ApiGateway {
    /// SMPP client connector operations.
    #[must_use]
    pub const fn smpp_connectors(&self) -> SmppConnectorsApi<'_> {
        SmppConnectorsApi { gateway: self }
    }

    /// HTTP client connector operations.
    #[must_use]
    pub const fn http_connectors(&self) -> HttpConnectorsApi<'_> {
        HttpConnectorsApi { gateway: self }
    }
}

impl SmppConnectorsApi<'_> {
    /// `GET /smppsconns`
    pub async fn list(&self) -> Result<SmppConnectorList, Error> {
        self.gateway.get("/smppsconns").await
    }

    /// `GET /smppsconns/{cid}`
    pub async fn get(&self, cid: &str) -> Result<SmppConnectorDetail, Error> {
        self.gateway.get(&format!("/smppsconns/{cid}")).await
    }

    /// `POST /smppsconns`
    pub async fn create(&self, config: &SmppConnectorConfig) -> Result<Value, Error> {
        self.gateway.send(Method::POST, "/smppsconns", config).await
    }

    /// `PATCH /smppsconns/{cid}`
    pub async fn update(&self, cid: &str, config: &SmppConnectorConfig) -> Result<Value, Error> {
        self.gateway
            .send(Method::PATCH, &format!("/smppsconns/{cid}"), config)
            .await
    }

    /// `DELETE /smppsconns/{cid}`
    pub async fn delete(&self, cid: &str) -> Result<ActionResponse, Error> {
        let value = self
            .gateway
            .request(Method::DELETE, &format!("/smppsconns/{cid}"), None)
            .await?;
        decode(value)
    }

    /// `PUT /smppsconns/{cid}/start`
    pub async fn start(&self, cid: &str) -> Result<ActionResponse, Error> {
        self.action(cid, "start").await
    }

    /// `PUT /smppsconns/{cid}/stop`
    pub async fn stop(&self, cid: &str) -> Result<ActionResponse, Error> {
        self.action(cid, "stop").await
    }

    async fn action(&self, cid: &str, verb: &str) -> Result<ActionResponse, Error> {
        let value = self
            .gateway
            .send_empty(Method::PUT, &format!("/smppsconns/{cid}/{verb}"))
            .await?;
        decode(value)
    }
}

impl HttpConnectorsApi<'_> {
    /// `GET /httpsconns`
    pub async fn list(&self) -> Result<HttpConnectorList, Error> {
        self.gateway.get("/httpsconns").await
    }

    /// `GET /httpsconns/{cid}`
    pub async fn get(&self, cid: &str) -> Result<Value, Error> {
        self.gateway.get(&format!("/httpsconns/{cid}")).await
    }

    /// `POST /httpsconns`
    pub async fn create(&self, body: &HttpConnectorCreate) -> Result<Value, Error> {
        self.gateway.send(Method::POST, "/httpsconns", body).await
    }

    /// `DELETE /httpsconns/{cid}`
    pub async fn delete(&self, cid: &str) -> Result<ActionResponse, Error> {
        let value = self
            .gateway
            .request(Method::DELETE, &format!("/httpsconns/{cid}"), None)
            .await?;
        decode(value)
    }
}
