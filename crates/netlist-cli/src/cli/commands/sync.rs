//! `netlist sync` - Copy entries from one list into another.

use anyhow::{Context as _, Result};
use colored::Colorize;
use netlist::SyncEngine;

use super::Context;
use crate::cli::args::SyncArgs;

pub async fn execute(ctx: Context, args: SyncArgs) -> Result<()> {
    let updated = SyncEngine::new(ctx.client()?)
        .sync(&args.id_src, &args.id_dst)
        .await
        .with_context(|| format!("sync {} -> {} failed", args.id_src, args.id_dst))?;

    if ctx.output_format.emit(&updated)? {
        return Ok(());
    }

    println!(
        "{} {} synced into {} ({} entries)",
        "Success:".green().bold(),
        args.id_src.trim().cyan(),
        updated.unique_id.cyan(),
        updated.len()
    );
    if let Some(sync_point) = updated.sync_point {
        println!("  {} {}", "Sync point:".bold(), sync_point);
    }
    println!();
    println!(
        "{}",
        format!(
            "Tip: activate the change with: netlist activate list --id {}",
            updated.unique_id
        )
        .dimmed()
    );

    Ok(())
}
