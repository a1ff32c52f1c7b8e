//! `netlist get` - Show network lists.

use anyhow::Result;
use netlist::{ListAggregator, ListOptions};

use super::Context;
use crate::cli::args::{GetArgs, GetCommands};
use crate::output;

pub async fn execute(ctx: Context, args: GetArgs) -> Result<()> {
    let lists = ListAggregator::new(ctx.client()?);

    match args.command {
        GetCommands::All {
            list_type,
            include_elements,
            extended,
        } => {
            let options = ListOptions {
                include_elements,
                extended,
            };
            let found = lists.list_all(list_type, options).await?;
            if !ctx.output_format.emit(&found)? {
                output::print_lists(&found);
            }
        }
        GetCommands::ById {
            id,
            include_elements,
            extended,
        } => {
            let options = ListOptions {
                include_elements,
                extended,
            };
            let list = lists.get_by_id(&id, options).await?;
            if !ctx.output_format.emit(&list)? {
                output::print_list(&list);
            }
        }
        GetCommands::ByName {
            name,
            list_type,
            extended,
        } => {
            let options = ListOptions {
                include_elements: false,
                extended,
            };
            let found = lists.search_by_name(&name, list_type, options).await?;
            if !ctx.output_format.emit(&found)? {
                output::print_lists(&found);
            }
        }
    }

    Ok(())
}
