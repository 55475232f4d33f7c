//! Group commands.

use crate::cli::GroupCommand;
use crate::client::{AppContext, CliResult, confirm};
use crate::output::render_group_list;

pub(crate) async fn handle(ctx: &AppContext, command: GroupCommand) -> CliResult<()> {
    match command {
        GroupCommand::Ls => {
            let list = ctx.gateway.groups().list().await?;
            render_group_list(&list, ctx.output)
        }
        GroupCommand::Add(args) => {
            ctx.gateway.groups().create(&args.gid).await?;
            println!("Group '{}' created.", args.gid);
            Ok(())
        }
        GroupCommand::Rm(args) => {
            confirm(&format!("delete group '{}'", args.gid), args.yes)?;
            ctx.gateway.groups().delete(&args.gid).await?;
            println!("Group '{}' deleted.", args.gid);
            Ok(())
        }
        GroupCommand::Enable(args) => {
            ctx.gateway.groups().enable(&args.gid).await?;
            println!("Group '{}' enabled.", args.gid);
            Ok(())
        }
        GroupCommand::Disable(args) => {
            ctx.gateway.groups().disable(&args.gid).await?;
            println!("Group '{}' disabled.", args.gid);
            Ok(())
        }
    }
}
