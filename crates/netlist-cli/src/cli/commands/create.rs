//! `netlist create` - Create an empty list.

use anyhow::Result;
use colored::Colorize;
use netlist::ListLifecycle;

use super::Context;
use crate::cli::args::CreateArgs;

pub async fn execute(ctx: Context, args: CreateArgs) -> Result<()> {
    let list = ListLifecycle::new(ctx.client()?)
        .create(&args.name, args.description.as_deref(), args.list_type)
        .await?;

    if !ctx.output_format.emit(&list)? {
        println!(
            "{} created {} list {} ({})",
            "Success:".green().bold(),
            list.list_type,
            list.name.cyan(),
            list.unique_id
        );
    }

    Ok(())
}
