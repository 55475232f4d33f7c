//! Gateway-wide dashboard command.

use crate::client::{AppContext, CliResult};
use crate::output::render_dashboard;

pub(crate) async fn handle(ctx: &AppContext) -> CliResult<()> {
    let snapshot = ctx.gateway.dashboard().await;
    render_dashboard(&snapshot, ctx.output)
}
