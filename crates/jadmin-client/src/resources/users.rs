//! User account management.

use jadmin_api_models::{ActionResponse, UserCreate, UserDetail, UserList, UserUpdate};
use reqwest::Method;
use serde_json::Value;

use crate::error::Error;
use crate::gateway::{ApiGateway, decode};

/// Sub-client for `/users`.
#[derive(Debug, Clone, Copy)]
pub struct UsersApi<'a> {
    gateway: &'a ApiGateway,
}

impl ApiGateway {
    /// User account operations.
    #[must_use]
    pub const fn users(&self) -> UsersApi<'_> {
        UsersApi { gateway: self }
    }
}

impl UsersApi<'_> {
    /// `GET /users`
    pub async fn list(&self) -> Result<UserList, Error> {
        self.gateway.get("/users").await
    }

    /// `GET /users/{uid}`
    pub async fn get(&self, uid: &str) -> Result<UserDetail, Error> {
        self.gateway.get(&format!("/users/{uid}")).await
    }

    /// `POST /users`
    pub async fn create(&self, body: &UserCreate) -> Result<Value, Error> {
        self.gateway.send(Method::POST, "/users", body).await
    }

    /// `PATCH /users/{uid}`
    ///
    /// The update tuples are forwarded exactly as given; see
    /// [`UserUpdate`] for the positional format.
    pub async fn update(&self, uid: &str, updates: &[UserUpdate]) -> Result<Value, Error> {
        self.gateway
            .send(Method::PATCH, &format!("/users/{uid}"), updates)
            .await
    }

    /// `DELETE /users/{uid}`
    pub async fn delete(&self, uid: &str) -> Result<ActionResponse, Error> {
        let value = self
            .gateway
            .request(Method::DELETE, &format!("/users/{uid}"), None)
            .await?;
        decode(value)
    }

    /// `PUT /users/{uid}/enable`
    pub async fn enable(&self, uid: &str) -> Result<ActionResponse, Error> {
        self.action(uid, "enable").await
    }

    /// `PUT /users/{uid}/disable`
    pub async fn disable(&self, uid: &str) -> Result<ActionResponse, Error> {
        self.action(uid, "disable").await
    }

    /// `PUT /users/{uid}/smpp_ban` — ban the user from the SMPP server.
    pub async fn smpp_ban(&self, uid: &str) -> Result<ActionResponse, Error> {
        self.action(uid, "smpp_ban").await
    }

    /// `PUT /users/{uid}/smpp_unbind` — drop the user's SMPP binds.
    pub async fn smpp_unbind(&self, uid: &str) -> Result<ActionResponse, Error> {
        self.action(uid, "smpp_unbind").await
    }

    async fn action(&self, uid: &str, verb: &str) -> Result<ActionResponse, Error> {
        let value = self
            .gateway
            .send_empty(Method::PUT, &format!("/users/{uid}/{verb}"))
            .await?;
        decode(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::ApiGateway;
    use crate::session::SessionStore;
    use httpmock::prelude::*;
    use jadmin_api_models::UserUpdate;
    use url::Url;

    fn gateway_for(server: &MockServer) -> ApiGateway {
        let base = Url::parse(&server.url("/api")).expect("mock server URL");
        let session = SessionStore::in_memory();
        session.set_credentials("admin", "secret");
        ApiGateway::new(base, session)
    }

    #[tokio::test]
    async fn enable_puts_an_empty_object() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/users/u1/enable")
                    .json_body(serde_json::json!({}));
                then.status(204);
            })
            .await;

        let gateway = gateway_for(&server);
        let response = gateway.users().enable("u1").await.expect("enable user");

        mock.assert_async().await;
        assert!(response.success);
    }

    #[tokio::test]
    async fn update_forwards_the_tuple_array_unchanged() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH).path("/api/users/u1").json_body(
                    serde_json::json!([
                        ["gid", "g2"],
                        ["mt_messaging_cred", "quota", "balance", "100"]
                    ]),
                );
                then.status(200)
                    .json_body(serde_json::json!({ "user": { "uid": "u1" } }));
            })
            .await;

        let gateway = gateway_for(&server);
        let updates = vec![
            UserUpdate::new(["gid", "g2"]),
            UserUpdate::new(["mt_messaging_cred", "quota", "balance", "100"]),
        ];
        gateway
            .users()
            .update("u1", &updates)
            .await
            .expect("patch user");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn list_decodes_the_users_envelope() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users");
                then.status(200).json_body(serde_json::json!({
                    "users": [{"uid": "u1", "username": "alice", "gid": "g1"}]
                }));
            })
            .await;

        let gateway = gateway_for(&server);
        let list = gateway.users().list().await.expect("list users");

        assert_eq!(list.users.len(), 1);
        assert_eq!(list.users[0].uid, "u1");
    }
}
