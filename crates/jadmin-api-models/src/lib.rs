#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Jasmin management API.
//!
//! The management API fronts Jasmin's interactive management shell, so most
//! scalar values arrive as strings (`"ND"` marks an undefined quota). Every
//! list endpoint wraps its payload in an envelope keyed by resource name;
//! the envelopes default missing arrays to empty so a bare `{}` body decodes
//! cleanly. These types are shared between the client crate and the CLI to
//! keep the wire contract in one place.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle flag shared by users and groups.
///
/// The API omits the field for enabled entities in some listings, so the
/// serde default is [`EntityStatus::Enabled`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    /// Entity is active.
    #[default]
    Enabled,
    /// Entity has been disabled by an operator.
    Disabled,
}

impl EntityStatus {
    /// Wire label, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

/// Canonical empty-success marker.
///
/// Mutating endpoints reply `204 No Content`; the gateway substitutes this
/// body so callers always receive a decodable JSON document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionResponse {
    /// Always `true` for a normalized 204 reply.
    pub success: bool,
}

/// Per-user quota block nested under `mt_messaging_cred`.
///
/// All values are strings as emitted by the management shell; `"ND"` means
/// the quota is not defined (unlimited).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserQuota {
    /// Remaining MT credit balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    /// Remaining MT submit count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_count: Option<String>,
    /// Early decrement percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_percent: Option<String>,
    /// HTTP API throughput cap (messages per second).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_throughput: Option<String>,
    /// SMPP server throughput cap (messages per second).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smpps_throughput: Option<String>,
}

/// MT messaging credential attached to a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MtMessagingCred {
    /// Quota counters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<UserQuota>,
    /// Authorization switches (free-form key/value map).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Value>,
    /// Value filters constraining submit parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valuefilter: Option<Value>,
    /// Default values applied to submits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaultvalue: Option<Value>,
}

/// SMPP server credential attached to a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SmppsCred {
    /// Authorization switches (free-form key/value map).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Value>,
    /// Quota counters (free-form key/value map).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<Value>,
}

/// A gateway user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// User identifier.
    pub uid: String,
    /// Login name used on the HTTP and SMPP interfaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Owning group identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<String>,
    /// Enabled/disabled flag, annotated by the list endpoint.
    #[serde(default)]
    pub status: EntityStatus,
    /// MT messaging credential, when configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mt_messaging_cred: Option<MtMessagingCred>,
    /// SMPP server credential, when configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smpps_cred: Option<SmppsCred>,
}

/// Envelope for `GET /users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserList {
    /// All known users.
    #[serde(default)]
    pub users: Vec<User>,
}

/// Envelope for `GET /users/{uid}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserDetail {
    /// The requested user.
    pub user: User,
}

/// Body for `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserCreate {
    /// User identifier.
    pub uid: String,
    /// Login name.
    pub username: String,
    /// Plain-text password, hashed by the gateway.
    pub password: String,
    /// Owning group identifier.
    pub gid: String,
}

/// One positional update tuple for `PATCH /users/{uid}`.
///
/// The gateway applies updates as ordered key paths terminated by the new
/// value, e.g. `["mt_messaging_cred", "quota", "balance", "100"]`. The
/// sequence is forwarded to the server exactly as given, never reshaped
/// into an object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct UserUpdate(pub Vec<String>);

impl UserUpdate {
    /// Build an update tuple from path segments plus the new value.
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }
}

/// A user group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    /// Group identifier.
    pub name: String,
    /// Enabled/disabled flag.
    #[serde(default)]
    pub status: EntityStatus,
}

/// Envelope for `GET /groups`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupList {
    /// All known groups.
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Body for `POST /groups`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupCreate {
    /// Group identifier.
    pub gid: String,
}

/// A routing filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Filter {
    /// Filter identifier.
    pub fid: String,
    /// Filter class, e.g. `TransparentFilter` or `ConnectorFilter`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable description reported by the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Envelope for `GET /filters`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterList {
    /// All known filters.
    #[serde(default)]
    pub filters: Vec<Filter>,
}

/// Envelope for `GET /filters/{fid}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterDetail {
    /// The requested filter.
    pub filter: Filter,
}

/// Body for `POST /filters`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCreate {
    /// Filter identifier.
    pub fid: String,
    /// Filter class.
    #[serde(rename = "type")]
    pub kind: String,
    /// Class-specific parameter; not used by `TransparentFilter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

/// An SMPP client connector.
///
/// The management shell exposes dozens of `SMPPClientConfig` keys; the
/// fields the console cares about are lifted out and everything else is
/// kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SmppConnector {
    /// Connector identifier.
    pub cid: String,
    /// Remote SMSC host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Remote SMSC port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Service state, `started` or `stopped`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// SMPP session state, e.g. `bound` or `unbound`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    /// Remaining connector configuration keys, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl SmppConnector {
    /// Whether the connector service is currently started.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.status.as_deref() == Some("started")
    }
}

/// Envelope for `GET /smppsconns`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SmppConnectorList {
    /// All configured SMPP client connectors.
    #[serde(default)]
    pub connectors: Vec<SmppConnector>,
}

/// Envelope for `GET /smppsconns/{cid}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SmppConnectorDetail {
    /// The requested connector.
    pub connector: SmppConnector,
}

/// Body for `POST /smppsconns` and `PATCH /smppsconns/{cid}`.
///
/// The gateway accepts any `SMPPClientConfig` key, so the body is an open
/// key/value map; `cid` is required on create and ignored on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SmppConnectorConfig(pub serde_json::Map<String, Value>);

impl SmppConnectorConfig {
    /// Start a config map carrying the connector identifier.
    #[must_use]
    pub fn for_cid(cid: &str) -> Self {
        let mut map = serde_json::Map::new();
        map.insert("cid".to_string(), Value::String(cid.to_string()));
        Self(map)
    }

    /// Insert one configuration key.
    pub fn set(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }
}

/// An HTTP client connector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpConnector {
    /// Connector identifier.
    pub cid: String,
    /// Callback URL messages are forwarded to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// HTTP method used for delivery, `GET` or `POST`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Envelope for `GET /httpsconns`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpConnectorList {
    /// All configured HTTP client connectors.
    #[serde(default)]
    pub connectors: Vec<HttpConnector>,
}

/// Body for `POST /httpsconns`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpConnectorCreate {
    /// Connector identifier.
    pub cid: String,
    /// Callback URL.
    pub url: String,
    /// Delivery method, `GET` or `POST`.
    pub method: String,
}

/// One MT (mobile-terminated) routing rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MtRouter {
    /// Route order; lower values match first.
    pub order: String,
    /// Route class, e.g. `DefaultRoute` or `StaticMTRoute`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Billing rate applied to the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    /// Connector identifiers the route targets.
    #[serde(default)]
    pub connectors: Vec<String>,
    /// Filter identifiers guarding the route.
    #[serde(default)]
    pub filters: Vec<String>,
}

/// Envelope for `GET /mtrouters`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MtRouterList {
    /// The MT routing table, ordered by priority.
    #[serde(default)]
    pub mtrouters: Vec<MtRouter>,
}

/// One MO (mobile-originated) routing rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoRouter {
    /// Route order; lower values match first.
    pub order: String,
    /// Route class, e.g. `DefaultRoute` or `StaticMORoute`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Connector identifiers the route targets.
    #[serde(default)]
    pub connectors: Vec<String>,
    /// Filter identifiers guarding the route.
    #[serde(default)]
    pub filters: Vec<String>,
}

/// Envelope for `GET /morouters`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoRouterList {
    /// The MO routing table, ordered by priority.
    #[serde(default)]
    pub morouters: Vec<MoRouter>,
}

/// Body for `POST /mtrouters`.
///
/// Connector and filter selections are comma-joined identifier strings;
/// the management shell splits them on its side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MtRouterCreate {
    /// Route class.
    #[serde(rename = "type")]
    pub kind: String,
    /// Route order.
    pub order: String,
    /// Billing rate; `"0"` for a free route.
    pub rate: String,
    /// Comma-joined SMPP connector identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smppconnectors: Option<String>,
    /// Comma-joined HTTP connector identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub httpconnectors: Option<String>,
    /// Comma-joined filter identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
}

/// Body for `POST /morouters`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoRouterCreate {
    /// Route class.
    #[serde(rename = "type")]
    pub kind: String,
    /// Route order.
    pub order: String,
    /// Comma-joined SMPP connector identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smppconnectors: Option<String>,
    /// Comma-joined HTTP connector identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub httpconnectors: Option<String>,
    /// Comma-joined filter identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
}
