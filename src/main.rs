use std::process::ExitCode;

use screenflow_lib::bootstrap::tracing::init_tracing_subscriber;
use screenflow_lib::bootstrap::{config_path_from, load_optional_config, CONFIG_ENV_VAR};
use screenflow_lib::run_app;
use tokio::io::BufReader;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = config_path_from(std::env::args().skip(1), std::env::var(CONFIG_ENV_VAR).ok());
    let config = match load_optional_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_tracing_subscriber(config.log_dir.clone()) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    match run_app(config, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "screenflow failed");
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
