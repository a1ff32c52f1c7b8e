//! `netlist items` - Add or remove list entries.

use anyhow::Result;
use colored::Colorize;
use netlist::{ItemMutator, ItemSet, ListType, NetworkList};

use super::Context;
use crate::cli::args::{ItemsArgs, ItemsCommands};

pub async fn execute(ctx: Context, args: ItemsArgs) -> Result<()> {
    let mutator = ItemMutator::new(ctx.client()?);

    let (updated, message) = match args.command {
        ItemsCommands::Add { id, items } => {
            let updated = mutator.add_items(&id, &items).await?;
            let message = submitted_message(updated.list_type, &items);
            (updated, message)
        }
        ItemsCommands::Remove { id, element } => {
            let updated = mutator.remove_item(&id, &element).await?;
            (updated, format!("{} removed", element.trim()))
        }
    };

    if !ctx.output_format.emit(&updated)? {
        print_summary(&updated, &message);
    }

    Ok(())
}

/// Counts the distinct entries actually sent, not the raw arguments
fn submitted_message(list_type: ListType, items: &[String]) -> String {
    let submitted = ItemSet::from_items(list_type, items).len();
    format!("{submitted} entries submitted")
}

fn print_summary(list: &NetworkList, message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
    println!(
        "  {} {} now holds {} entries",
        "List:".bold(),
        list.unique_id.cyan(),
        list.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitted_count_ignores_blanks_and_duplicates() {
        let items = ["10.0.0.1", " 10.0.0.1 ", "", "10.0.0.2/32"].map(String::from);
        assert_eq!(submitted_message(ListType::Ip, &items), "2 entries submitted");

        let items = ["US", "US", "CU"].map(String::from);
        assert_eq!(submitted_message(ListType::Geo, &items), "2 entries submitted");
    }
}
