//! `netlist notification` - Manage activation notifications.

use anyhow::Result;
use colored::Colorize;
use netlist::{NotificationManager, SubscriptionMode};

use super::Context;
use crate::cli::args::NotificationArgs;

pub async fn execute(ctx: Context, args: NotificationArgs) -> Result<()> {
    let mode = SubscriptionMode::from_unsubscribe_flag(args.unsubscribe);
    let applied = NotificationManager::new(ctx.client()?)
        .manage(&args.list_ids, &args.recipients, mode)
        .await?;

    if ctx.output_format.emit(&applied)? {
        return Ok(());
    }

    if applied.recipients.is_empty() {
        println!("Nothing to unsubscribe.");
        return Ok(());
    }

    let verb = match mode {
        SubscriptionMode::Subscribe => "subscribed to",
        SubscriptionMode::Unsubscribe => "unsubscribed from",
    };
    println!(
        "{} {} {} {}",
        "Success:".green().bold(),
        applied.recipients.join(", ").cyan(),
        verb,
        applied.list_ids.join(", ")
    );

    Ok(())
}
