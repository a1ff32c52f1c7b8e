//! `netlist search` - Find lists by name or content.

use anyhow::Result;
use colored::Colorize;
use netlist::{ListAggregator, ListOptions};

use super::Context;
use crate::cli::args::SearchArgs;
use crate::output;

pub async fn execute(ctx: Context, args: SearchArgs) -> Result<()> {
    let options = ListOptions {
        include_elements: args.include_elements,
        extended: false,
    };
    let found = ListAggregator::new(ctx.client()?)
        .search_by_name(&args.pattern, args.list_type, options)
        .await?;

    if ctx.output_format.emit(&found)? {
        return Ok(());
    }

    println!("{} {}", "Pattern:".bold(), args.pattern.trim().dimmed());
    println!();
    output::print_lists(&found);

    if args.include_elements {
        let needle = args.pattern.trim().to_lowercase();
        for list in &found {
            let hits: Vec<&String> = list
                .items
                .iter()
                .filter(|item| item.to_lowercase().contains(&needle))
                .collect();
            if !hits.is_empty() {
                println!();
                println!("{} {}", list.unique_id.cyan(), "matching entries:".bold());
                for hit in hits {
                    println!("    {hit}");
                }
            }
        }
    }

    Ok(())
}
