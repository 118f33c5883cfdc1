use anyhow::Result;
use tracing::info;

use atomik_cli::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("atomik starting");
    Session::new().run()?;
    Ok(())
}
