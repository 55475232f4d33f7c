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
#![allow(clippy::module_name_repetitions)]
//! Authenticated access layer for the Jasmin management API.
//!
//! Two components carry the design weight: the [`session::SessionStore`],
//! which holds a username/password pair for the lifetime of a console
//! session and derives the Basic-auth header on demand, and the
//! [`gateway::ApiGateway`], the single choke point that attaches the auth
//! header, dispatches HTTP calls, and normalizes every response into either
//! a JSON document or a typed [`error::Error`].
//!
//! Layout:
//! - `session.rs`: credential storage, auth-header derivation, logout
//! - `error.rs`: the error taxonomy shared by all calls
//! - `gateway.rs`: the `request` primitive and the login probe
//! - `resources/`: typed sub-clients, one per management-API resource
//! - `overview.rs`: the concurrent dashboard aggregate

pub mod error;
pub mod gateway;
pub mod overview;
pub mod resources;
pub mod session;

pub use error::{Error, LoginError};
pub use gateway::ApiGateway;
pub use overview::DashboardSnapshot;
pub use session::{
    Credentials, CredentialStorage, MemoryStorage, NoRedirect, Redirect, SessionStore,
    derive_auth_header,
};
