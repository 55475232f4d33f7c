//! User account commands.

use jadmin_api_models::UserCreate;

use crate::cli::UserCommand;
use crate::client::{AppContext, CliResult, confirm, resolve_password};
use crate::output::{render_user_detail, render_user_list};

pub(crate) async fn handle(ctx: &AppContext, command: UserCommand) -> CliResult<()> {
    match command {
        UserCommand::Ls => {
            let list = ctx.gateway.users().list().await?;
            render_user_list(&list, ctx.output)
        }
        UserCommand::Show(args) => {
            let detail = ctx.gateway.users().get(&args.uid).await?;
            render_user_detail(&detail, ctx.output)
        }
        UserCommand::Add(args) => {
            let password = resolve_password(args.password)?;
            let body = UserCreate {
                uid: args.uid,
                username: args.username,
                password,
                gid: args.gid,
            };
            ctx.gateway.users().create(&body).await?;
            println!("User '{}' created.", body.uid);
            Ok(())
        }
        UserCommand::Set(args) => {
            ctx.gateway.users().update(&args.uid, &args.updates).await?;
            println!("User '{}' updated.", args.uid);
            Ok(())
        }
        UserCommand::Rm(args) => {
            confirm(&format!("delete user '{}'", args.uid), args.yes)?;
            ctx.gateway.users().delete(&args.uid).await?;
            println!("User '{}' deleted.", args.uid);
            Ok(())
        }
        UserCommand::Enable(args) => {
            ctx.gateway.users().enable(&args.uid).await?;
            println!("User '{}' enabled.", args.uid);
            Ok(())
        }
        UserCommand::Disable(args) => {
            ctx.gateway.users().disable(&args.uid).await?;
            println!("User '{}' disabled.", args.uid);
            Ok(())
        }
        UserCommand::SmppBan(args) => {
            ctx.gateway.users().smpp_ban(&args.uid).await?;
            println!("User '{}' banned from the SMPP server.", args.uid);
            Ok(())
        }
        UserCommand::SmppUnbind(args) => {
            ctx.gateway.users().smpp_unbind(&args.uid).await?;
            println!("User '{}' SMPP sessions unbound.", args.uid);
            Ok(())
        }
    }
}
