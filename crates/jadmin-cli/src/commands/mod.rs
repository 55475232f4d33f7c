//! Command handlers grouped by resource.

pub(crate) mod connectors;
pub(crate) mod dashboard;
pub(crate) mod filters;
pub(crate) mod groups;
pub(crate) mod routers;
pub(crate) mod users;
