//! netlist - network list management from the command line

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    netlist_cli::run().await
}
