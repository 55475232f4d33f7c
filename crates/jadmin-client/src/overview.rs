//! Concurrent dashboard aggregate.
//!
//! The dashboard issues all seven list calls at once and joins when every
//! one has settled. Each call is individually guarded with an empty-list
//! fallback, so a failing endpoint degrades its own counters to zero
//! instead of blanking the whole dashboard. This is the only permissive
//! call site in the crate; plain resource methods always surface errors.

use std::future::Future;

use futures_util::join;
use serde::Serialize;

use crate::error::Error;
use crate::gateway::ApiGateway;

/// Point-in-time counts across the gateway's configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    /// Configured user accounts.
    pub users: usize,
    /// Configured groups.
    pub groups: usize,
    /// Client connectors, SMPP and HTTP combined.
    pub connectors: usize,
    /// Routing rules, MT and MO combined.
    pub routers: usize,
    /// Routing filters.
    pub filters: usize,
    /// SMPP connectors whose service is currently started.
    pub started_smpp: usize,
}

async fn guarded<T, F>(resource: &'static str, call: F) -> T
where
    T: Default,
    F: Future<Output = Result<T, Error>>,
{
    match call.await {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(resource, error = %err, "dashboard call failed, using empty fallback");
            T::default()
        }
    }
}

impl ApiGateway {
    /// Collect the dashboard counters.
    ///
    /// All seven list calls run concurrently; the join waits for every call
    /// to settle and never fails. A 401 on any individual call still ends
    /// the session through the normal forced-logout path before the
    /// fallback applies.
    pub async fn dashboard(&self) -> DashboardSnapshot {
        let users_api = self.users();
        let groups_api = self.groups();
        let smpp_api = self.smpp_connectors();
        let http_api = self.http_connectors();
        let mt_api = self.mt_routers();
        let mo_api = self.mo_routers();
        let filters_api = self.filters();

        let (users, groups, smpp, http, mt, mo, filters) = join!(
            guarded("users", users_api.list()),
            guarded("groups", groups_api.list()),
            guarded("smppsconns", smpp_api.list()),
            guarded("httpsconns", http_api.list()),
            guarded("mtrouters", mt_api.list()),
            guarded("morouters", mo_api.list()),
            guarded("filters", filters_api.list()),
        );

        DashboardSnapshot {
            users: users.users.len(),
            groups: groups.groups.len(),
            connectors: smpp.connectors.len() + http.connectors.len(),
            routers: mt.mtrouters.len() + mo.morouters.len(),
            filters: filters.filters.len(),
            started_smpp: smpp
                .connectors
                .iter()
                .filter(|connector| connector.is_started())
                .count(),
        }
    }
}
