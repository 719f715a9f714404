use anyhow::Result;
use bursar::cli::{init_logging, LedgerCli};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = LedgerCli::parse();
    init_logging(cli.verbose);
    cli.run().await
}
