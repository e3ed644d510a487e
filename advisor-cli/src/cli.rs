use advisor_core::{AdvisoryWorkflow, Config, OpenWeatherClient, ViewState};
use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-advisor", version, about = "Weather-based clothing advisor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key (and optionally a base URL override).
    Configure,

    /// One-shot: fetch weather and advice for a city, print, exit.
    Show {
        /// City name, e.g. "Ankara".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => {
                let workflow = build_workflow()?;
                workflow.submit_query(&city).await;
                render(&workflow.state());
                Ok(())
            }
            None => interactive().await,
        }
    }
}

fn build_workflow() -> Result<AdvisoryWorkflow> {
    let config = Config::load()?;
    let client = OpenWeatherClient::from_config(&config);
    Ok(AdvisoryWorkflow::new(Box::new(client)))
}

/// Prompt loop: one city per round, ESC or Ctrl-C to leave.
async fn interactive() -> Result<()> {
    let workflow = build_workflow()?;

    loop {
        let city = match Text::new("City:").prompt() {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        workflow.submit_query(&city).await;
        render(&workflow.state());
        println!();
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeather API key:").prompt()?;
    let base_url = Text::new("Base URL:")
        .with_default(config.base_url_or_default())
        .prompt()?;

    config.api_key = Some(api_key);
    config.base_url = Some(base_url);
    config.save()?;

    println!("Saved {}", Config::config_file_path()?.display());
    Ok(())
}

fn render(state: &ViewState) {
    if state.has_error() {
        println!("{}", state.error);
        return;
    }

    let Some(snapshot) = &state.snapshot else {
        return;
    };

    println!("{}, {}", snapshot.city_name, snapshot.country_code);
    println!("{:.0}°C  {}", snapshot.temperature_c, snapshot.description);
    println!(
        "Humidity: {}%  Wind: {} m/s  Feels like: {:.0}°C",
        snapshot.humidity_pct, snapshot.wind_speed_ms, snapshot.feels_like_c
    );
    println!(
        "Observed: {}",
        snapshot
            .observation_time
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
    );
    println!();
    println!("{}", state.advisory);
}
