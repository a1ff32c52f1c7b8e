//! `netlist activate` - Activate lists and read activation status.

use anyhow::Result;
use colored::Colorize;
use netlist::{ActivationController, ActivationRequest, Network};

use super::Context;
use crate::cli::args::{ActivateArgs, ActivateCommands};
use crate::output;

pub async fn execute(ctx: Context, args: ActivateArgs) -> Result<()> {
    let activations = ActivationController::new(ctx.client()?);

    let activation = match args.command {
        ActivateCommands::List {
            id,
            comments,
            recipients,
            fast,
            prd,
        } => {
            let mut request = comments.map_or_else(ActivationRequest::default, ActivationRequest::new);
            request = request.recipients(recipients).fast(fast);
            activations
                .activate(&id, Network::from_production_flag(prd), &request)
                .await?
        }
        ActivateCommands::Status { id, prd } => {
            activations
                .status(&id, Network::from_production_flag(prd))
                .await?
        }
    };

    if ctx.output_format.emit(&activation)? {
        return Ok(());
    }

    output::print_activation(&activation);
    if !activation.status.is_settled() {
        println!();
        println!(
            "{}",
            format!(
                "Tip: check progress with: netlist activate status --id {}{}",
                activation.list_id,
                if activation.network == Network::Production { " --prd" } else { "" }
            )
            .dimmed()
        );
    }

    Ok(())
}
