use crate::cycle::{DirectionMode, Position};
use crate::json_runner::SettingsJson;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    /// Seed for the random direction mode. Drawn from the thread RNG when absent.
    pub seed: Option<u64>,
    pub animation_duration: Duration,
    pub initial_position: Position,
    pub initial_direction: DirectionMode,
    /// Taps per direction mode in the scripted demo.
    pub taps: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            seed: None,
            animation_duration: Duration::from_millis(500),
            initial_position: Position::LeftTop,
            initial_direction: DirectionMode::Clockwise,
            taps: 8,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("animation duration must be a finite, non-negative number of seconds, got {0}")]
    InvalidAnimationDuration(f64),
}

impl Settings {
    pub fn rng(&self) -> Xoshiro256StarStar {
        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        tracing::info!(seed, "seeding position rng");
        Xoshiro256StarStar::seed_from_u64(seed)
    }
}

impl TryFrom<SettingsJson> for Settings {
    type Error = SettingsError;

    fn try_from(json: SettingsJson) -> Result<Self, Self::Error> {
        let defaults = Settings::default();

        let animation_duration = match json.animation_duration {
            None => defaults.animation_duration,
            Some(secs) => Duration::try_from_secs_f64(secs)
                .map_err(|_| SettingsError::InvalidAnimationDuration(secs))?,
        };

        Ok(Settings {
            seed: json.seed.or(defaults.seed),
            animation_duration,
            initial_position: json.position.unwrap_or(defaults.initial_position),
            initial_direction: json.direction.unwrap_or(defaults.initial_direction),
            taps: json.taps.unwrap_or(defaults.taps),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Settings, SettingsError> {
        serde_json::from_str::<SettingsJson>(line).unwrap().try_into()
    }

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(parse("{}"), Ok(Settings::default()));
    }

    #[test]
    fn overrides_are_applied() {
        let settings = parse(
            r#"{"Seed": 7, "AnimationDuration": 1.25, "Position": "RightBottom", "Direction": "Random", "Taps": 3}"#,
        )
        .unwrap();

        assert_eq!(
            settings,
            Settings {
                seed: Some(7),
                animation_duration: Duration::from_millis(1250),
                initial_position: Position::RightBottom,
                initial_direction: DirectionMode::Random,
                taps: 3,
            }
        );
    }

    #[test]
    fn rejects_negative_duration() {
        assert_eq!(
            parse(r#"{"AnimationDuration": -0.5}"#),
            Err(SettingsError::InvalidAnimationDuration(-0.5))
        );
    }

    #[test]
    fn rejects_non_finite_duration() {
        for secs in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let json = SettingsJson {
                animation_duration: Some(secs),
                ..SettingsJson::default()
            };

            match Settings::try_from(json) {
                Err(SettingsError::InvalidAnimationDuration(got)) => {
                    assert!((got.is_nan() && secs.is_nan()) || got == secs)
                }
                other => panic!("{secs} was accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_overflowing_duration() {
        assert_eq!(
            parse(r#"{"AnimationDuration": 1e300}"#),
            Err(SettingsError::InvalidAnimationDuration(1e300))
        );
    }

    #[test]
    fn same_seed_same_stream() {
        let settings = Settings { seed: Some(42), ..Settings::default() };
        assert_eq!(settings.rng().gen::<u64>(), settings.rng().gen::<u64>());
    }
}
