//! Gateway construction, error types, and credential resolution for the CLI.

use std::fmt::{self, Display, Formatter};
use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

use anyhow::anyhow;
use jadmin_client::{ApiGateway, Error, LoginError, SessionStore};
use reqwest::Client;
use url::Url;

use crate::cli::OutputFormat;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<Error> for CliError {
    fn from(err: Error) -> Self {
        match err {
            Error::Api {
                status: 400 | 409 | 422,
                message,
            } => Self::Validation(message),
            Error::Unauthenticated | Error::SessionExpired => {
                Self::Failure(anyhow!("session expired, log in again"))
            }
            other => Self::Failure(other.into()),
        }
    }
}

impl From<LoginError> for CliError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::InvalidCredentials => Self::Validation(err.to_string()),
            other => Self::Failure(other.into()),
        }
    }
}

/// Application context passed to command handlers.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) gateway: ApiGateway,
    pub(crate) output: OutputFormat,
}

/// Build a gateway over a timeout-configured HTTP client and a fresh
/// in-memory session. Authentication happens separately via the login probe.
pub(crate) fn build_gateway(api_url: Url, timeout_secs: u64) -> CliResult<ApiGateway> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;
    Ok(ApiGateway::with_client(
        client,
        api_url,
        SessionStore::in_memory(),
    ))
}

pub(crate) fn resolve_username(input: Option<String>) -> CliResult<String> {
    input
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::validation("username is required (pass --username or set JADMIN_USERNAME)")
        })
}

/// Resolve the password from the flag/env value, falling back to an
/// interactive prompt when stdin is a terminal.
pub(crate) fn resolve_password(input: Option<String>) -> CliResult<String> {
    if let Some(value) = input {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CliError::validation("password cannot be empty"));
        }
        return Ok(trimmed.to_string());
    }

    if io::stdin().is_terminal() {
        let pass = rpassword::prompt_password("Password: ")
            .map_err(|err| CliError::failure(anyhow!("failed to read password: {err}")))?;
        let trimmed = pass.trim();
        if trimmed.is_empty() {
            return Err(CliError::validation("password cannot be empty"));
        }
        Ok(trimmed.to_string())
    } else {
        Err(CliError::validation(
            "password required; supply via --password or JADMIN_PASSWORD when running non-interactively",
        ))
    }
}

/// Gate a destructive action behind `--yes` or an interactive confirmation.
pub(crate) fn confirm(action: &str, yes: bool) -> CliResult<()> {
    if yes {
        return Ok(());
    }
    if !io::stdin().is_terminal() {
        return Err(CliError::validation(format!(
            "{action}: pass --yes to confirm when running non-interactively"
        )));
    }

    eprint!("{action}? [y/N] ");
    let _ = io::stderr().flush();
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|err| CliError::failure(anyhow!("failed to read confirmation: {err}")))?;
    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        Ok(())
    } else {
        Err(CliError::validation("aborted"))
    }
}
