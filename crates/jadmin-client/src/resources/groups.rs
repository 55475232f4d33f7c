//! User group management.

use jadmin_api_models::{ActionResponse, GroupCreate, GroupList};
use reqwest::Method;
use serde_json::Value;

use crate::error::Error;
use crate::gateway::{ApiGateway, decode};

/// Sub-client for `/groups`.
#[derive(Debug, Clone, Copy)]
pub struct GroupsApi<'a> {
    gateway: &'a ApiGateway,
}

impl ApiGateway {
    /// Group operations.
    #[must_use]
    pub const fn groups(&self) -> GroupsApi<'_> {
        GroupsApi { gateway: self }
    }
}

impl GroupsApi<'_> {
    /// `GET /groups`
    pub async fn list(&self) -> Result<GroupList, Error> {
        self.gateway.get("/groups").await
    }

    /// `POST /groups`
    pub async fn create(&self, gid: &str) -> Result<Value, Error> {
        let body = GroupCreate {
            gid: gid.to_string(),
        };
        self.gateway.send(Method::POST, "/groups", &body).await
    }

    /// `DELETE /groups/{gid}`
    pub async fn delete(&self, gid: &str) -> Result<ActionResponse, Error> {
        let value = self
            .gateway
            .request(Method::DELETE, &format!("/groups/{gid}"), None)
            .await?;
        decode(value)
    }

    /// `PUT /groups/{gid}/enable`
    pub async fn enable(&self, gid: &str) -> Result<ActionResponse, Error> {
        self.action(gid, "enable").await
    }

    /// `PUT /groups/{gid}/disable`
    pub async fn disable(&self, gid: &str) -> Result<ActionResponse, Error> {
        self.action(gid, "disable").await
    }

    async fn action(&self, gid: &str, verb: &str) -> Result<ActionResponse, Error> {
        let value = self
            .gateway
            .send_empty(Method::PUT, &format!("/groups/{gid}/{verb}"))
            .await?;
        decode(value)
    }
}
