//! SMPP and HTTP connector commands.

use jadmin_api_models::{HttpConnectorCreate, SmppConnectorConfig};
use serde_json::Value;

use crate::cli::{HttpccCommand, KeyValueArg, SmppCommand};
use crate::client::{AppContext, CliResult, confirm};
use crate::output::{render_http_list, render_smpp_detail, render_smpp_list};

pub(crate) async fn handle_smpp(ctx: &AppContext, command: SmppCommand) -> CliResult<()> {
    match command {
        SmppCommand::Ls => {
            let list = ctx.gateway.smpp_connectors().list().await?;
            render_smpp_list(&list, ctx.output)
        }
        SmppCommand::Show(args) => {
            let detail = ctx.gateway.smpp_connectors().get(&args.cid).await?;
            render_smpp_detail(&detail, ctx.output)
        }
        SmppCommand::Add(args) => {
            let config = build_config(&args.cid, &args.settings);
            ctx.gateway.smpp_connectors().create(&config).await?;
            println!("SMPP connector '{}' created.", args.cid);
            Ok(())
        }
        SmppCommand::Set(args) => {
            let config = build_config(&args.cid, &args.settings);
            ctx.gateway
                .smpp_connectors()
                .update(&args.cid, &config)
                .await?;
            println!("SMPP connector '{}' updated.", args.cid);
            Ok(())
        }
        SmppCommand::Rm(args) => {
            confirm(&format!("delete SMPP connector '{}'", args.cid), args.yes)?;
            ctx.gateway.smpp_connectors().delete(&args.cid).await?;
            println!("SMPP connector '{}' deleted.", args.cid);
            Ok(())
        }
        SmppCommand::Start(args) => {
            ctx.gateway.smpp_connectors().start(&args.cid).await?;
            println!("SMPP connector '{}' started.", args.cid);
            Ok(())
        }
        SmppCommand::Stop(args) => {
            ctx.gateway.smpp_connectors().stop(&args.cid).await?;
            println!("SMPP connector '{}' stopped.", args.cid);
            Ok(())
        }
    }
}

fn build_config(cid: &str, settings: &[KeyValueArg]) -> SmppConnectorConfig {
    let mut config = SmppConnectorConfig::for_cid(cid);
    for entry in settings {
        config.set(&entry.key, Value::String(entry.value.clone()));
    }
    config
}

pub(crate) async fn handle_httpcc(ctx: &AppContext, command: HttpccCommand) -> CliResult<()> {
    match command {
        HttpccCommand::Ls => {
            let list = ctx.gateway.http_connectors().list().await?;
            render_http_list(&list, ctx.output)
        }
        HttpccCommand::Add(args) => {
            let body = HttpConnectorCreate {
                cid: args.cid,
                url: args.url,
                method: args.method,
            };
            ctx.gateway.http_connectors().create(&body).await?;
            println!("HTTP connector '{}' created.", body.cid);
            Ok(())
        }
        HttpccCommand::Rm(args) => {
            confirm(&format!("delete HTTP connector '{}'", args.cid), args.yes)?;
            ctx.gateway.http_connectors().delete(&args.cid).await?;
            println!("HTTP connector '{}' deleted.", args.cid);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{handle_httpcc, handle_smpp};
    use crate::cli::{
        HttpccAddArgs, HttpccCommand, KeyValueArg, OutputFormat, SmppCommand, SmppConfigArgs,
    };
    use crate::client::AppContext;
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

    #[tokio::test]
    async fn smpp_set_patches_the_config_map() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH).path("/api/smppsconns/smsc1").json_body(
                    serde_json::json!({ "cid": "smsc1", "host": "10.0.0.2" }),
                );
                then.status(200)
                    .json_body(serde_json::json!({ "cid": "smsc1" }));
            })
            .await;

        let ctx = context_for(&server);
        let args = SmppConfigArgs {
            cid: "smsc1".to_string(),
            settings: vec![KeyValueArg {
                key: "host".to_string(),
                value: "10.0.0.2".to_string(),
            }],
        };
        handle_smpp(&ctx, SmppCommand::Set(args))
            .await
            .expect("smpp set should succeed");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn httpcc_add_posts_the_connector() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/httpsconns").json_body(
                    serde_json::json!({
                        "cid": "push1",
                        "url": "http://example.com/mo",
                        "method": "POST"
                    }),
                );
                then.status(200)
                    .json_body(serde_json::json!({ "cid": "push1" }));
            })
            .await;

        let ctx = context_for(&server);
        let args = HttpccAddArgs {
            cid: "push1".to_string(),
            url: "http://example.com/mo".to_string(),
            method: "POST".to_string(),
        };
        handle_httpcc(&ctx, HttpccCommand::Add(args))
            .await
            .expect("httpcc add should succeed");
        mock.assert_async().await;
    }
}
