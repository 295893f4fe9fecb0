pub mod direction;
pub mod logic;
pub mod position;

pub use direction::*;
pub use logic::*;
pub use position::*;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("`{0}` is not a Position")]
    UnknownPosition(String),
    #[error("`{0}` is not a DirectionMode")]
    UnknownDirectionMode(String),
}
