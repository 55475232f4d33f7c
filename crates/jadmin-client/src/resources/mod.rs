#![allow(clippy::missing_errors_doc)]

//! Typed per-resource sub-clients.
//!
//! Each sub-client borrows the gateway and exposes the resource's action
//! table as methods, so the set of reachable endpoints is a compile-time
//! enumeration rather than a string-keyed lookup. All methods go through
//! [`crate::ApiGateway::request`] and inherit its normalization contract;
//! none of them swallow errors.

pub mod connectors;
pub mod filters;
pub mod groups;
pub mod routers;
pub mod users;

pub use connectors::{HttpConnectorsApi, SmppConnectorsApi};
pub use filters::FiltersApi;
pub use groups::GroupsApi;
pub use routers::{MoRoutersApi, MtRoutersApi};
pub use users::UsersApi;
