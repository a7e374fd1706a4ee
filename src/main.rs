use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use tokio::runtime::{Builder, Runtime};

use salesetl::conf::Config;
use salesetl::core::{CliArgs, setup_logging};
use salesetl::pipeline::run_from_config;

fn setup(args: &CliArgs) -> anyhow::Result<(Runtime, Config)> {
    let config = Config::load(args.config.as_deref()).context("loading configuration")?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building runtime")?;
    Ok((runtime, config))
}

fn main() -> ExitCode {
    setup_logging();
    let args = CliArgs::parse();
    info!(args = args; "salesetl started.");

    // Config and runtime errors come before the pipeline exists.
    let (runtime, config) = match setup(&args) {
        Ok(parts) => parts,
        Err(e) => {
            error!("Cannot start ETL pipeline: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // Pipeline failures, setup included, are logged by the pipeline.
    match runtime.block_on(run_from_config(&config, args.key)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
