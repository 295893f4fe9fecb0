use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::{BufRead, Write};

use crate::controller::{Controller, ControllerState};
use crate::cycle::{DirectionMode, Position};
use crate::presenter::NullPresenter;
use crate::settings::Settings;

#[derive(Deserialize, Default)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SettingsJson {
    pub seed: Option<u64>,
    /// Seconds.
    pub animation_duration: Option<f64>,
    pub position: Option<Position>,
    pub direction: Option<DirectionMode>,
    pub taps: Option<usize>,
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "Command")]
pub enum CommandJson {
    Tap,
    SetDirection {
        #[serde(rename = "Direction")]
        direction: DirectionMode,
    },
    SetPosition {
        #[serde(rename = "Position")]
        position: Position,
    },
    Quit,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StateJson {
    pub position: Position,
    pub direction: DirectionMode,
    pub taps: usize,
}

impl StateJson {
    fn new(state: ControllerState, taps: usize) -> StateJson {
        StateJson {
            position: state.position,
            direction: state.direction,
            taps,
        }
    }
}

fn write_json<T: Serialize, W: Write>(output: &mut W, obj: T) -> Result<()> {
    serde_json::to_writer(&mut *output, &obj)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

/// Skips blank lines. `None` once the input is exhausted.
fn read_json<T: DeserializeOwned, R: BufRead>(input: &mut R) -> Result<Option<T>> {
    let mut line_buffer = String::new();

    loop {
        line_buffer.clear();

        if input.read_line(&mut line_buffer)? == 0 {
            return Ok(None);
        }

        if !line_buffer.trim().is_empty() {
            break;
        }
    }

    let json = serde_json::from_str(line_buffer.trim())
        .with_context(|| format!("malformed line: {}", line_buffer.trim_end()))?;

    Ok(Some(json))
}

/// Settings from a single JSON object, e.g. `{"Seed": 7, "Taps": 3}`.
pub fn parse_settings(json: &str) -> Result<Settings> {
    let settings_json: SettingsJson =
        serde_json::from_str(json).with_context(|| format!("malformed settings: {json}"))?;

    Ok(Settings::try_from(settings_json)?)
}

pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    writeln!(output, "cornerhop-start")?;
    output.flush()?;

    let Some(settings_json) = read_json::<SettingsJson, _>(&mut input)? else {
        tracing::warn!("input closed before settings were sent");
        return Ok(());
    };
    let settings = Settings::try_from(settings_json)?;

    let mut controller = Controller::new(&settings, NullPresenter, settings.rng())?;

    while let Some(command) = read_json::<CommandJson, _>(&mut input)? {
        tracing::debug!(?command, "received");

        match command {
            CommandJson::Tap => {
                controller.tap()?;
            }
            CommandJson::SetDirection { direction } => controller.set_direction(direction)?,
            CommandJson::SetPosition { position } => controller.set_position(position)?,
            CommandJson::Quit => {
                write_json(&mut output, StateJson::new(controller.state(), controller.taps()))?;
                return Ok(());
            }
        }

        write_json(&mut output, StateJson::new(controller.state(), controller.taps()))?;
    }

    tracing::info!(taps = controller.taps(), "input closed");

    Ok(())
}
