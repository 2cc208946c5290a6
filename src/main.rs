mod cli;
mod cmd;
mod logging;

use eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = cli::start().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
