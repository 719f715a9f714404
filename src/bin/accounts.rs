use anyhow::Result;
use bursar::cli::{init_logging, AccountsCli};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = AccountsCli::parse();
    init_logging(cli.verbose);
    cli.run().await
}
