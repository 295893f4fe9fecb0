use crate::cycle::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rule that picks the corner following the current one.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Deserialize, Serialize)]
#[serde(try_from = "String")]
pub enum DirectionMode {
    Clockwise,
    Anticlockwise,
    Random,
}

pub const ALL_DIRECTION_MODES: [DirectionMode; 3] = [
    DirectionMode::Clockwise,
    DirectionMode::Anticlockwise,
    DirectionMode::Random,
];

impl DirectionMode {
    pub fn title(self) -> &'static str {
        use DirectionMode::*;
        match self {
            Clockwise => "Clockwise 🕐",
            Anticlockwise => "Anticlockwise 🕒",
            Random => "Random ♻️",
        }
    }

    pub fn to_str(self) -> &'static str {
        use DirectionMode::*;
        match self {
            Clockwise => "Clockwise",
            Anticlockwise => "Anticlockwise",
            Random => "Random",
        }
    }
}

impl fmt::Display for DirectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for DirectionMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_DIRECTION_MODES
            .into_iter()
            .find(|d| d.to_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownDirectionMode(s.to_owned()))
    }
}

impl TryFrom<&str> for DirectionMode {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for DirectionMode {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
