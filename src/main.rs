use anyhow::Result;
use financeai::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
