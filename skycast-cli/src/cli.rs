use clap::Parser;

use skycast_core::{Config, OpenWeatherClient, Pipeline, ViewState};

use crate::location::ConsoleLocationProvider;
use crate::view;

/// Top-level CLI struct. The session is single-shot by contract, so there
/// are no subcommands: running the binary runs the pipeline once.
#[derive(Debug, Parser)]
#[command(
    name = "skycast",
    version,
    about = "Five-day forecast for your current location"
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env()?;
        let service = OpenWeatherClient::new(config.api_key)?;
        let provider = ConsoleLocationProvider::new()?;

        view::render_state(&ViewState::Loading);

        let state = Pipeline::new(&provider, &service).run().await;
        view::render_state(&state);

        match state {
            ViewState::Denied => {
                tokio::task::spawn_blocking(view::acknowledge_denial)
                    .await
                    .ok();
                std::process::exit(1);
            }
            ViewState::Error(_) => std::process::exit(1),
            _ => Ok(()),
        }
    }
}
