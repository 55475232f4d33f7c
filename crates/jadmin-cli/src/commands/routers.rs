//! MT and MO routing table commands.

use jadmin_api_models::{MoRouterCreate, MtRouterCreate};

use crate::cli::{MoRouterCommand, MtRouterCommand};
use crate::client::{AppContext, CliError, CliResult, confirm};
use crate::output::{render_mo_list, render_mt_list};

pub(crate) async fn handle_mt(ctx: &AppContext, command: MtRouterCommand) -> CliResult<()> {
    match command {
        MtRouterCommand::Ls => {
            let list = ctx.gateway.mt_routers().list().await?;
            render_mt_list(&list, ctx.output)
        }
        MtRouterCommand::Show(args) => {
            let route = ctx.gateway.mt_routers().get(&args.order).await?;
            print_route(&route)
        }
        MtRouterCommand::Add(args) => {
            let body = MtRouterCreate {
                kind: args.kind,
                order: args.order,
                rate: args.rate,
                smppconnectors: join_selection(&args.smppconnectors),
                httpconnectors: join_selection(&args.httpconnectors),
                filters: join_selection(&args.filters),
            };
            ctx.gateway.mt_routers().create(&body).await?;
            println!("MT route '{}' created.", body.order);
            Ok(())
        }
        MtRouterCommand::Rm(args) => {
            confirm(&format!("delete MT route '{}'", args.order), args.yes)?;
            ctx.gateway.mt_routers().delete(&args.order).await?;
            println!("MT route '{}' deleted.", args.order);
            Ok(())
        }
        MtRouterCommand::Flush(args) => {
            confirm("flush the entire MT routing table", args.yes)?;
            ctx.gateway.mt_routers().flush().await?;
            println!("MT routing table flushed.");
            Ok(())
        }
    }
}

pub(crate) async fn handle_mo(ctx: &AppContext, command: MoRouterCommand) -> CliResult<()> {
    match command {
        MoRouterCommand::Ls => {
            let list = ctx.gateway.mo_routers().list().await?;
            render_mo_list(&list, ctx.output)
        }
        MoRouterCommand::Show(args) => {
            let route = ctx.gateway.mo_routers().get(&args.order).await?;
            print_route(&route)
        }
        MoRouterCommand::Add(args) => {
            let body = MoRouterCreate {
                kind: args.kind,
                order: args.order,
                smppconnectors: join_selection(&args.smppconnectors),
                httpconnectors: join_selection(&args.httpconnectors),
                filters: join_selection(&args.filters),
            };
            ctx.gateway.mo_routers().create(&body).await?;
            println!("MO route '{}' created.", body.order);
            Ok(())
        }
        MoRouterCommand::Rm(args) => {
            confirm(&format!("delete MO route '{}'", args.order), args.yes)?;
            ctx.gateway.mo_routers().delete(&args.order).await?;
            println!("MO route '{}' deleted.", args.order);
            Ok(())
        }
        MoRouterCommand::Flush(args) => {
            confirm("flush the entire MO routing table", args.yes)?;
            ctx.gateway.mo_routers().flush().await?;
            println!("MO routing table flushed.");
            Ok(())
        }
    }
}

fn join_selection(identifiers: &[String]) -> Option<String> {
    if identifiers.is_empty() {
        None
    } else {
        Some(identifiers.join(","))
    }
}

fn print_route(route: &serde_json::Value) -> CliResult<()> {
    let text = serde_json::to_string_pretty(route)
        .map_err(|err| CliError::failure(anyhow::anyhow!("failed to format JSON: {err}")))?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{handle_mt, join_selection};
    use crate::cli::{MtRouterAddArgs, MtRouterCommand, OutputFormat, RouterFlushArgs};
    use crate::client::{AppContext, CliError};
    use httpmock::prelude::*;
    use jadmin_client::{ApiGateway, SessionStore};
    use url::Url;

    fn context_for(server: &MockServer) -> AppContext {
        let base = Url::parse(&server.url("/api")).expect("mock server URL");
        let session = SessionStore::in_memory();
        session.set_credentials("admin", "secret");
        AppContext {
            gateway: ApiGateway::new(base, session),
            output: OutputFormat::Table,
        }
    }

    #[test]
    fn join_selection_skips_empty_lists() {
        assert_eq!(join_selection(&[]), None);
        assert_eq!(
            join_selection(&["a".to_string(), "b".to_string()]),
            Some("a,b".to_string())
        );
    }

    #[tokio::test]
    async fn add_comma_joins_the_selections() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/mtrouters").json_body(
                    serde_json::json!({
                        "type": "StaticMTRoute",
                        "order": "10",
                        "rate": "0.0",
                        "smppconnectors": "smsc1,smsc2",
                        "filters": "f1"
                    }),
                );
                then.status(200)
                    .json_body(serde_json::json!({ "order": "10" }));
            })
            .await;

        let ctx = context_for(&server);
        let args = MtRouterAddArgs {
            kind: "StaticMTRoute".to_string(),
            order: "10".to_string(),
            rate: "0.0".to_string(),
            smppconnectors: vec!["smsc1".to_string(), "smsc2".to_string()],
            httpconnectors: Vec::new(),
            filters: vec!["f1".to_string()],
        };
        handle_mt(&ctx, MtRouterCommand::Add(args))
            .await
            .expect("mtrouter add should succeed");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn flush_without_yes_fails_validation_when_non_interactive() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/mtrouters/flush");
                then.status(204);
            })
            .await;

        let ctx = context_for(&server);
        let err = handle_mt(
            &ctx,
            MtRouterCommand::Flush(RouterFlushArgs { yes: false }),
        )
        .await
        .expect_err("flush needs confirmation");

        assert!(matches!(err, CliError::Validation(_)));
        mock.assert_calls_async(0).await;
    }

    #[tokio::test]
    async fn flush_with_yes_deletes_the_table() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/mtrouters/flush");
                then.status(204);
            })
            .await;

        let ctx = context_for(&server);
        handle_mt(&ctx, MtRouterCommand::Flush(RouterFlushArgs { yes: true }))
            .await
            .expect("flush should succeed");
        mock.assert_async().await;
    }
}
