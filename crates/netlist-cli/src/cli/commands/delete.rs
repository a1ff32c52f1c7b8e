//! `netlist delete` - Delete a list.

use anyhow::Result;
use colored::Colorize;
use netlist::ListLifecycle;

use super::Context;
use crate::cli::args::DeleteArgs;

pub async fn execute(ctx: Context, args: DeleteArgs) -> Result<()> {
    let receipt = ListLifecycle::new(ctx.client()?).delete(&args.id).await?;

    if !ctx.output_format.emit(&receipt)? {
        println!("{} deleted {}", "Success:".green().bold(), receipt.unique_id.cyan());
    }

    Ok(())
}
