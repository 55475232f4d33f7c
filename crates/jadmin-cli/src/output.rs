//! Output renderers and formatting helpers for CLI commands.

use anyhow::anyhow;
use jadmin_api_models::{
    FilterDetail, FilterList, GroupList, HttpConnectorList, MoRouterList, MtRouterList,
    SmppConnectorDetail, SmppConnectorList, UserDetail, UserList,
};
use jadmin_client::DashboardSnapshot;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

fn render_json<T: Serialize>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    println!("{text}");
    Ok(())
}

pub(crate) fn render_user_list(list: &UserList, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(list)?,
        OutputFormat::Table => {
            println!("{:<16} {:<16} {:<12} STATUS", "UID", "USERNAME", "GID");
            for user in &list.users {
                println!(
                    "{:<16} {:<16} {:<12} {}",
                    user.uid,
                    user.username.as_deref().unwrap_or("-"),
                    user.gid.as_deref().unwrap_or("-"),
                    user.status.as_str()
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_user_detail(detail: &UserDetail, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(detail)?,
        OutputFormat::Table => {
            let user = &detail.user;
            println!("uid: {}", user.uid);
            if let Some(username) = &user.username {
                println!("username: {username}");
            }
            if let Some(gid) = &user.gid {
                println!("gid: {gid}");
            }
            println!("status: {}", user.status.as_str());
            if let Some(quota) = user
                .mt_messaging_cred
                .as_ref()
                .and_then(|cred| cred.quota.as_ref())
            {
                println!("quota:");
                print_quota_line("balance", quota.balance.as_deref());
                print_quota_line("sms_count", quota.sms_count.as_deref());
                print_quota_line("early_percent", quota.early_percent.as_deref());
                print_quota_line("http_throughput", quota.http_throughput.as_deref());
                print_quota_line("smpps_throughput", quota.smpps_throughput.as_deref());
            }
        }
    }
    Ok(())
}

fn print_quota_line(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("  {label}: {value}");
    }
}

pub(crate) fn render_group_list(list: &GroupList, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(list)?,
        OutputFormat::Table => {
            println!("{:<16} STATUS", "NAME");
            for group in &list.groups {
                println!("{:<16} {}", group.name, group.status.as_str());
            }
        }
    }
    Ok(())
}

pub(crate) fn render_filter_list(list: &FilterList, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(list)?,
        OutputFormat::Table => {
            println!("{:<16} {:<24} DESCRIPTION", "FID", "TYPE");
            for filter in &list.filters {
                println!(
                    "{:<16} {:<24} {}",
                    filter.fid,
                    filter.kind,
                    filter.description.as_deref().unwrap_or("-")
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_filter_detail(detail: &FilterDetail, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(detail)?,
        OutputFormat::Table => {
            println!("fid: {}", detail.filter.fid);
            println!("type: {}", detail.filter.kind);
            if let Some(description) = &detail.filter.description {
                println!("description: {description}");
            }
        }
    }
    Ok(())
}

pub(crate) fn render_smpp_list(list: &SmppConnectorList, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(list)?,
        OutputFormat::Table => {
            println!(
                "{:<16} {:<20} {:<8} {:<10} SESSION",
                "CID", "HOST", "PORT", "STATUS"
            );
            for connector in &list.connectors {
                println!(
                    "{:<16} {:<20} {:<8} {:<10} {}",
                    connector.cid,
                    connector.host.as_deref().unwrap_or("-"),
                    connector.port.as_deref().unwrap_or("-"),
                    connector.status.as_deref().unwrap_or("-"),
                    connector.session.as_deref().unwrap_or("-")
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_smpp_detail(
    detail: &SmppConnectorDetail,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(detail)?,
        OutputFormat::Table => {
            let connector = &detail.connector;
            println!("cid: {}", connector.cid);
            if let Some(host) = &connector.host {
                println!("host: {host}");
            }
            if let Some(port) = &connector.port {
                println!("port: {port}");
            }
            if let Some(status) = &connector.status {
                println!("status: {status}");
            }
            if let Some(session) = &connector.session {
                println!("session: {session}");
            }
            let mut keys: Vec<&String> = connector.extra.keys().collect();
            keys.sort();
            for key in keys {
                println!("{key}: {}", connector.extra[key]);
            }
        }
    }
    Ok(())
}

pub(crate) fn render_http_list(list: &HttpConnectorList, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(list)?,
        OutputFormat::Table => {
            println!("{:<16} {:<8} URL", "CID", "METHOD");
            for connector in &list.connectors {
                println!(
                    "{:<16} {:<8} {}",
                    connector.cid,
                    connector.method.as_deref().unwrap_or("-"),
                    connector.url.as_deref().unwrap_or("-")
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_mt_list(list: &MtRouterList, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(list)?,
        OutputFormat::Table => {
            println!(
                "{:<8} {:<24} {:<8} {:<24} FILTERS",
                "ORDER", "TYPE", "RATE", "CONNECTORS"
            );
            for route in &list.mtrouters {
                println!(
                    "{:<8} {:<24} {:<8} {:<24} {}",
                    route.order,
                    route.kind,
                    route.rate.as_deref().unwrap_or("-"),
                    route.connectors.join(","),
                    route.filters.join(",")
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_mo_list(list: &MoRouterList, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(list)?,
        OutputFormat::Table => {
            println!(
                "{:<8} {:<24} {:<24} FILTERS",
                "ORDER", "TYPE", "CONNECTORS"
            );
            for route in &list.morouters {
                println!(
                    "{:<8} {:<24} {:<24} {}",
                    route.order,
                    route.kind,
                    route.connectors.join(","),
                    route.filters.join(",")
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_dashboard(snapshot: &DashboardSnapshot, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(snapshot)?,
        OutputFormat::Table => {
            println!("users: {}", snapshot.users);
            println!("groups: {}", snapshot.groups);
            println!("connectors: {}", snapshot.connectors);
            println!("routers: {}", snapshot.routers);
            println!("filters: {}", snapshot.filters);
            println!("smpp connectors started: {}", snapshot.started_smpp);
        }
    }
    Ok(())
}
