use crate::cycle::Position;
use std::io::{self, Write};
use std::time::Duration;

/// The screen side of the demo: moves the button and shows the two labels.
pub trait Presenter {
    fn animate_to(&mut self, position: Position, duration: Duration) -> io::Result<()>;
    fn update_text(&mut self, direction_label: &str, position_label: &str) -> io::Result<()>;
}

/// Draws the four corners as a 2x2 grid of cells, one of them holding the button.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> TextPresenter<W> {
        TextPresenter { out }
    }
}

fn cell(slot: Position, button: Position) -> &'static str {
    if slot == button {
        "[■]"
    } else {
        "[ ]"
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn animate_to(&mut self, position: Position, duration: Duration) -> io::Result<()> {
        use Position::*;

        writeln!(self.out, "-> {} ({:.2}s)", position, duration.as_secs_f32())?;
        writeln!(self.out, "{} {}", cell(LeftTop, position), cell(RightTop, position))?;
        writeln!(self.out, "{} {}", cell(LeftBottom, position), cell(RightBottom, position))?;
        Ok(())
    }

    fn update_text(&mut self, direction_label: &str, position_label: &str) -> io::Result<()> {
        writeln!(self.out, "{direction_label}")?;
        writeln!(self.out, "{position_label}")?;
        self.out.flush()
    }
}

/// Swallows everything. Used when stdout already carries the JSON protocol.
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn animate_to(&mut self, _position: Position, _duration: Duration) -> io::Result<()> {
        Ok(())
    }

    fn update_text(&mut self, _direction_label: &str, _position_label: &str) -> io::Result<()> {
        Ok(())
    }
}
