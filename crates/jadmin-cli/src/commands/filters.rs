//! Routing filter commands.

use jadmin_api_models::FilterCreate;

use crate::cli::FilterCommand;
use crate::client::{AppContext, CliResult, confirm};
use crate::output::{render_filter_detail, render_filter_list};

pub(crate) async fn handle(ctx: &AppContext, command: FilterCommand) -> CliResult<()> {
    match command {
        FilterCommand::Ls => {
            let list = ctx.gateway.filters().list().await?;
            render_filter_list(&list, ctx.output)
        }
        FilterCommand::Show(args) => {
            let detail = ctx.gateway.filters().get(&args.fid).await?;
            render_filter_detail(&detail, ctx.output)
        }
        FilterCommand::Add(args) => {
            let body = FilterCreate {
                fid: args.fid,
                kind: args.kind,
                parameter: args.parameter,
            };
            ctx.gateway.filters().create(&body).await?;
            println!("Filter '{}' created.", body.fid);
            Ok(())
        }
        FilterCommand::Rm(args) => {
            confirm(&format!("delete filter '{}'", args.fid), args.yes)?;
            ctx.gateway.filters().delete(&args.fid).await?;
            println!("Filter '{}' deleted.", args.fid);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::cli::{FilterCommand, FilterRmArgs, OutputFormat};
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
    async fn rm_deletes_the_filter() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/filters/f1");
                then.status(204);
            })
            .await;

        let ctx = context_for(&server);
        let args = FilterRmArgs {
            fid: "f1".to_string(),
            yes: true,
        };
        handle(&ctx, FilterCommand::Rm(args))
            .await
            .expect("filter rm should succeed");
        mock.assert_async().await;
    }
}
