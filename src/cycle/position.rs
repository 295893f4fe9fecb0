use crate::cycle::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Corner slot the button can occupy. Declaration order is the clockwise order, so the
/// discriminant doubles as the cycle index.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Deserialize, Serialize)]
#[serde(try_from = "String")]
pub enum Position {
    LeftTop,
    RightTop,
    RightBottom,
    LeftBottom,
}

pub const ALL_POSITIONS: [Position; 4] = [
    Position::LeftTop,
    Position::RightTop,
    Position::RightBottom,
    Position::LeftBottom,
];

impl Position {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wraps around, so every `usize` maps to some corner.
    pub fn from_index(idx: usize) -> Position {
        ALL_POSITIONS[idx % ALL_POSITIONS.len()]
    }

    pub fn clockwise(self) -> Position {
        Position::from_index(self.index() + 1)
    }

    pub fn anticlockwise(self) -> Position {
        Position::from_index(self.index() + ALL_POSITIONS.len() - 1)
    }

    pub fn title(self) -> &'static str {
        use Position::*;
        match self {
            LeftTop => "↖️",
            RightTop => "↗️",
            RightBottom => "↘️",
            LeftBottom => "↙️",
        }
    }

    pub fn to_str(self) -> &'static str {
        use Position::*;
        match self {
            LeftTop => "LeftTop",
            RightTop => "RightTop",
            RightBottom => "RightBottom",
            LeftBottom => "LeftBottom",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_POSITIONS
            .into_iter()
            .find(|p| p.to_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownPosition(s.to_owned()))
    }
}

impl TryFrom<&str> for Position {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Position {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
