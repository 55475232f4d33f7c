//! Argument parsing, authentication, and command dispatch.

use clap::{Args, Parser, Subcommand, ValueEnum};
use jadmin_api_models::UserUpdate;
use url::Url;

use crate::client::{
    AppContext, CliResult, build_gateway, resolve_password, resolve_username,
};
use crate::commands::{connectors, dashboard, filters, groups, routers, users};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Parse arguments, authenticate, run the selected command, and return the
/// process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let gateway = build_gateway(cli.api_url, cli.timeout)?;
    let username = resolve_username(cli.username)?;
    let password = resolve_password(cli.password)?;
    gateway.login(&username, &password).await?;
    tracing::debug!(username, "authenticated against the management API");

    let ctx = AppContext {
        gateway,
        output: cli.output,
    };

    match cli.command {
        Command::Dashboard => dashboard::handle(&ctx).await,
        Command::User(command) => users::handle(&ctx, command).await,
        Command::Group(command) => groups::handle(&ctx, command).await,
        Command::Filter(command) => filters::handle(&ctx, command).await,
        Command::Smpp(command) => connectors::handle_smpp(&ctx, command).await,
        Command::Httpcc(command) => connectors::handle_httpcc(&ctx, command).await,
        Command::Mtrouter(command) => routers::handle_mt(&ctx, command).await,
        Command::Morouter(command) => routers::handle_mo(&ctx, command).await,
    }
}

#[derive(Parser)]
#[command(name = "jadmin", about = "Administrative console for a Jasmin SMS gateway")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "JADMIN_API_URL",
        value_parser = parse_url,
        default_value = DEFAULT_API_URL,
        help = "Base URL of the management API, including the mount prefix"
    )]
    pub(crate) api_url: Url,
    #[arg(long, global = true, env = "JADMIN_USERNAME")]
    pub(crate) username: Option<String>,
    #[arg(long, global = true, env = "JADMIN_PASSWORD", hide_env_values = true)]
    pub(crate) password: Option<String>,
    #[arg(
        long,
        global = true,
        env = "JADMIN_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub(crate) timeout: u64,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) output: OutputFormat,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    Dashboard,
    #[command(subcommand)]
    User(UserCommand),
    #[command(subcommand)]
    Group(GroupCommand),
    #[command(subcommand)]
    Filter(FilterCommand),
    #[command(subcommand)]
    Smpp(SmppCommand),
    #[command(subcommand)]
    Httpcc(HttpccCommand),
    #[command(subcommand)]
    Mtrouter(MtRouterCommand),
    #[command(subcommand)]
    Morouter(MoRouterCommand),
}

#[derive(Subcommand)]
pub(crate) enum UserCommand {
    Ls,
    Show(UserIdArgs),
    Add(UserAddArgs),
    Set(UserSetArgs),
    Rm(UserRmArgs),
    Enable(UserIdArgs),
    Disable(UserIdArgs),
    SmppBan(UserIdArgs),
    SmppUnbind(UserIdArgs),
}

#[derive(Args)]
pub(crate) struct UserIdArgs {
    #[arg(help = "User identifier")]
    pub(crate) uid: String,
}

#[derive(Args)]
pub(crate) struct UserAddArgs {
    #[arg(long)]
    pub(crate) uid: String,
    #[arg(long)]
    pub(crate) username: String,
    #[arg(long)]
    pub(crate) gid: String,
    #[arg(long, help = "Account password; prompted when omitted")]
    pub(crate) password: Option<String>,
}

#[derive(Args)]
pub(crate) struct UserSetArgs {
    #[arg(help = "User identifier")]
    pub(crate) uid: String,
    #[arg(
        long = "set",
        value_parser = parse_update,
        required = true,
        help = "Update as path.to.key=value, e.g. mt_messaging_cred.quota.balance=100"
    )]
    pub(crate) updates: Vec<UserUpdate>,
}

#[derive(Args)]
pub(crate) struct UserRmArgs {
    #[arg(help = "User identifier")]
    pub(crate) uid: String,
    #[arg(long, help = "Skip the confirmation prompt")]
    pub(crate) yes: bool,
}

#[derive(Subcommand)]
pub(crate) enum GroupCommand {
    Ls,
    Add(GroupIdArgs),
    Rm(GroupRmArgs),
    Enable(GroupIdArgs),
    Disable(GroupIdArgs),
}

#[derive(Args)]
pub(crate) struct GroupIdArgs {
    #[arg(help = "Group identifier")]
    pub(crate) gid: String,
}

#[derive(Args)]
pub(crate) struct GroupRmArgs {
    #[arg(help = "Group identifier")]
    pub(crate) gid: String,
    #[arg(long, help = "Skip the confirmation prompt")]
    pub(crate) yes: bool,
}

#[derive(Subcommand)]
pub(crate) enum FilterCommand {
    Ls,
    Show(FilterIdArgs),
    Add(FilterAddArgs),
    Rm(FilterRmArgs),
}

#[derive(Args)]
pub(crate) struct FilterIdArgs {
    #[arg(help = "Filter identifier")]
    pub(crate) fid: String,
}

#[derive(Args)]
pub(crate) struct FilterAddArgs {
    #[arg(long)]
    pub(crate) fid: String,
    #[arg(long = "type", value_name = "TYPE", help = "Filter class, e.g. TransparentFilter")]
    pub(crate) kind: String,
    #[arg(long, help = "Class-specific parameter, when the class takes one")]
    pub(crate) parameter: Option<String>,
}

#[derive(Args)]
pub(crate) struct FilterRmArgs {
    #[arg(help = "Filter identifier")]
    pub(crate) fid: String,
    #[arg(long, help = "Skip the confirmation prompt")]
    pub(crate) yes: bool,
}

#[derive(Subcommand)]
pub(crate) enum SmppCommand {
    Ls,
    Show(SmppIdArgs),
    Add(SmppConfigArgs),
    Set(SmppConfigArgs),
    Rm(SmppRmArgs),
    Start(SmppIdArgs),
    Stop(SmppIdArgs),
}

#[derive(Args)]
pub(crate) struct SmppIdArgs {
    #[arg(help = "Connector identifier")]
    pub(crate) cid: String,
}

#[derive(Args)]
pub(crate) struct SmppConfigArgs {
    #[arg(help = "Connector identifier")]
    pub(crate) cid: String,
    #[arg(
        long = "set",
        value_parser = parse_key_value,
        help = "Connector configuration as key=value, e.g. host=10.0.0.1"
    )]
    pub(crate) settings: Vec<KeyValueArg>,
}

#[derive(Args)]
pub(crate) struct SmppRmArgs {
    #[arg(help = "Connector identifier")]
    pub(crate) cid: String,
    #[arg(long, help = "Skip the confirmation prompt")]
    pub(crate) yes: bool,
}

#[derive(Subcommand)]
pub(crate) enum HttpccCommand {
    Ls,
    Add(HttpccAddArgs),
    Rm(HttpccRmArgs),
}

#[derive(Args)]
pub(crate) struct HttpccAddArgs {
    #[arg(long)]
    pub(crate) cid: String,
    #[arg(long, help = "Callback URL messages are forwarded to")]
    pub(crate) url: String,
    #[arg(long, default_value = "GET", help = "Delivery method, GET or POST")]
    pub(crate) method: String,
}

#[derive(Args)]
pub(crate) struct HttpccRmArgs {
    #[arg(help = "Connector identifier")]
    pub(crate) cid: String,
    #[arg(long, help = "Skip the confirmation prompt")]
    pub(crate) yes: bool,
}

#[derive(Subcommand)]
pub(crate) enum MtRouterCommand {
    Ls,
    Show(RouterOrderArgs),
    Add(MtRouterAddArgs),
    Rm(RouterRmArgs),
    Flush(RouterFlushArgs),
}

#[derive(Subcommand)]
pub(crate) enum MoRouterCommand {
    Ls,
    Show(RouterOrderArgs),
    Add(MoRouterAddArgs),
    Rm(RouterRmArgs),
    Flush(RouterFlushArgs),
}

#[derive(Args)]
pub(crate) struct RouterOrderArgs {
    #[arg(help = "Route order")]
    pub(crate) order: String,
}

#[derive(Args)]
pub(crate) struct MtRouterAddArgs {
    #[arg(long = "type", value_name = "TYPE", help = "Route class, e.g. StaticMTRoute")]
    pub(crate) kind: String,
    #[arg(long)]
    pub(crate) order: String,
    #[arg(long, default_value = "0.0", help = "Billing rate; 0.0 for a free route")]
    pub(crate) rate: String,
    #[arg(long, value_delimiter = ',', help = "SMPP connector identifiers")]
    pub(crate) smppconnectors: Vec<String>,
    #[arg(long, value_delimiter = ',', help = "HTTP connector identifiers")]
    pub(crate) httpconnectors: Vec<String>,
    #[arg(long, value_delimiter = ',', help = "Filter identifiers")]
    pub(crate) filters: Vec<String>,
}

#[derive(Args)]
pub(crate) struct MoRouterAddArgs {
    #[arg(long = "type", value_name = "TYPE", help = "Route class, e.g. DefaultRoute")]
    pub(crate) kind: String,
    #[arg(long)]
    pub(crate) order: String,
    #[arg(long, value_delimiter = ',', help = "SMPP connector identifiers")]
    pub(crate) smppconnectors: Vec<String>,
    #[arg(long, value_delimiter = ',', help = "HTTP connector identifiers")]
    pub(crate) httpconnectors: Vec<String>,
    #[arg(long, value_delimiter = ',', help = "Filter identifiers")]
    pub(crate) filters: Vec<String>,
}

#[derive(Args)]
pub(crate) struct RouterRmArgs {
    #[arg(help = "Route order")]
    pub(crate) order: String,
    #[arg(long, help = "Skip the confirmation prompt")]
    pub(crate) yes: bool,
}

#[derive(Args)]
pub(crate) struct RouterFlushArgs {
    #[arg(long, help = "Skip the confirmation prompt")]
    pub(crate) yes: bool,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// One `key=value` connector configuration entry.
#[derive(Debug, Clone)]
pub(crate) struct KeyValueArg {
    pub(crate) key: String,
    pub(crate) value: String,
}

fn parse_url(input: &str) -> Result<Url, String> {
    input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))
}

fn parse_update(value: &str) -> Result<UserUpdate, String> {
    let (path, new_value) = value
        .split_once('=')
        .ok_or_else(|| "expected format path.to.key=value".to_string())?;
    let mut segments: Vec<String> = path.split('.').map(|s| s.trim().to_string()).collect();
    if segments.iter().any(String::is_empty) {
        return Err("update path segments cannot be empty".to_string());
    }
    let new_value = new_value.trim();
    if new_value.is_empty() {
        return Err("update value cannot be empty".to_string());
    }
    segments.push(new_value.to_string());
    Ok(UserUpdate(segments))
}

fn parse_key_value(value: &str) -> Result<KeyValueArg, String> {
    let (key, value) = value
        .split_once('=')
        .ok_or_else(|| "expected format key=value".to_string())?;
    let key = key.trim();
    if key.is_empty() {
        return Err("key cannot be empty".to_string());
    }
    Ok(KeyValueArg {
        key: key.to_string(),
        value: value.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, UserCommand, parse_key_value, parse_update};
    use clap::Parser;

    #[test]
    fn parse_update_builds_a_positional_tuple() {
        let update = parse_update("mt_messaging_cred.quota.balance=100").expect("valid update");
        assert_eq!(
            update.0,
            vec!["mt_messaging_cred", "quota", "balance", "100"]
        );
        let update = parse_update("gid=g2").expect("single segment");
        assert_eq!(update.0, vec!["gid", "g2"]);
    }

    #[test]
    fn parse_update_rejects_malformed_input() {
        assert!(parse_update("no_equals_sign").is_err());
        assert!(parse_update("a..b=1").is_err());
        assert!(parse_update("gid=").is_err());
    }

    #[test]
    fn parse_key_value_splits_on_first_equals() {
        let parsed = parse_key_value("url=http://example.com/?a=b").expect("valid pair");
        assert_eq!(parsed.key, "url");
        assert_eq!(parsed.value, "http://example.com/?a=b");
        assert!(parse_key_value("novalue").is_err());
    }

    #[test]
    fn cli_parses_a_user_update_invocation() {
        let cli = Cli::try_parse_from([
            "jadmin",
            "--username",
            "admin",
            "--password",
            "secret",
            "user",
            "set",
            "u1",
            "--set",
            "gid=g2",
            "--set",
            "mt_messaging_cred.quota.balance=100",
        ])
        .expect("valid invocation");

        match cli.command {
            Command::User(UserCommand::Set(args)) => {
                assert_eq!(args.uid, "u1");
                assert_eq!(args.updates.len(), 2);
            }
            _ => panic!("expected user set command"),
        }
    }

    #[test]
    fn cli_defaults_point_at_the_local_gateway() {
        let cli = Cli::try_parse_from(["jadmin", "dashboard"]).expect("valid invocation");
        assert_eq!(cli.api_url.as_str(), "http://127.0.0.1:8000/api");
        assert_eq!(cli.timeout, 10);
    }
}
