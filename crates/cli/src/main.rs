use anyhow::Context;

use armory_cli::{DemoConfig, demo};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("invalid configuration")?;
    armory_observability::init(config.log_format);

    tracing::info!(
        "running equipment demo with price range {}..={}",
        config.min_price,
        config.max_price
    );

    let report = demo::run(&config)?;
    print!("{report}");
    Ok(())
}
