use clap::Parser;
use tracing::{error, warn};

use stockpilot_cli::{AppConfig, Cli, commands};
use stockpilot_observability::ObservabilityConfig;

fn main() -> anyhow::Result<()> {
    // A missing .env is fine; variables may come from the environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            stockpilot_observability::init_with(&ObservabilityConfig::default());
            error!(error = %e, "invalid configuration");
            return Err(e.into());
        }
    };
    stockpilot_observability::init_with(&config.observability);
    for notice in &config.notices {
        warn!("{notice}");
    }

    let output = commands::execute(cli, &config)
        .inspect_err(|e| error!(error = %e, "command failed"))?;
    println!("{output}");

    Ok(())
}
