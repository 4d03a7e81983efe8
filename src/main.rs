use std::env;

use clap::Parser;
use config::Config;
use dotenvy::dotenv;

use barbershop_dashboard::cli::{Cli, run};
use barbershop_dashboard::models::config::DashboardConfig;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let dashboard_config = match settings.try_deserialize::<DashboardConfig>() {
        Ok(dashboard_config) => dashboard_config,
        Err(err) => {
            log::error!("Error loading dashboard config: {}", err);
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = run(&dashboard_config, cli.command, &mut out) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
