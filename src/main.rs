use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use brew_compat::cli::{Cli, run};
use brew_compat::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = logging::init(cli.verbose);

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| runtime.block_on(run(&cli)));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}. Exiting...", e);
            ExitCode::FAILURE
        }
    }
}
