use anyhow::Context;
use sa2_population_etl::{
    config::Config,
    domain::pipeline::{log_summary, run, setup},
};

fn main() -> anyhow::Result<()> {
    setup::setup_logging()?;
    let config = Config::default();
    let summary = run(&config).context("ETL pipeline failed")?;
    log_summary(summary);
    Ok(())
}
