use crate::cycle::{DirectionMode, Position, ALL_POSITIONS};
use rand::Rng;

/// Corner the button moves to after one tap.
///
/// Only `Random` touches `rng`. It picks an offset of one to three slots from the current
/// corner, which is a uniform draw over the three other corners and always terminates.
pub fn next<R: Rng + ?Sized>(position: Position, direction: DirectionMode, rng: &mut R) -> Position {
    use DirectionMode::*;

    match direction {
        Clockwise => position.clockwise(),
        Anticlockwise => position.anticlockwise(),
        Random => {
            let offset = rng.gen_range(1..ALL_POSITIONS.len());
            Position::from_index(position.index() + offset)
        }
    }
}
