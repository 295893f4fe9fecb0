mod controller;
mod cycle;
mod json_runner;
mod presenter;
mod settings;

use anyhow::{bail, Result};
use controller::Controller;
use cycle::ALL_DIRECTION_MODES;
use presenter::TextPresenter;
use settings::Settings;
use std::io::Write;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: cornerhop [demo [SETTINGS_JSON] | json]";

fn run_demo<W: Write>(settings: &Settings, out: W) -> Result<()> {
    let mut controller = Controller::new(settings, TextPresenter::new(out), settings.rng())?;

    for direction in ALL_DIRECTION_MODES {
        controller.set_direction(direction)?;

        for _ in 0..settings.taps {
            controller.tap()?;
        }
    }

    let state = controller.state();
    tracing::info!(
        taps = controller.taps(),
        position = %state.position,
        direction = %state.direction,
        "demo finished"
    );

    Ok(())
}

fn main() -> Result<()> {
    // Stdout belongs to the demo output or the JSON protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        [] | ["demo"] => run_demo(&Settings::default(), std::io::stdout().lock()),
        ["demo", settings] => {
            let settings = json_runner::parse_settings(settings)?;
            run_demo(&settings, std::io::stdout().lock())
        }
        ["json"] => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            json_runner::run(stdin.lock(), stdout.lock())
        }
        _ => bail!("unexpected arguments {args:?}\n{USAGE}"),
    }
}
