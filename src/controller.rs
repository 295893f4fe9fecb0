use crate::{
    cycle::{next, DirectionMode, Position},
    presenter::Presenter,
    settings::Settings,
};
use rand::Rng;
use std::io;
use std::time::Duration;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ControllerState {
    pub position: Position,
    pub direction: DirectionMode,
}

/// Owns the button state and is the only thing allowed to change it. Every change is
/// computed first and then pushed to the presenter, never the other way round.
pub struct Controller<P: Presenter, R: Rng> {
    presenter: P,
    rng: R,
    animation_duration: Duration,
    state: ControllerState,
    taps: usize,
}

impl<P: Presenter, R: Rng> Controller<P, R> {
    pub fn new(settings: &Settings, presenter: P, rng: R) -> io::Result<Controller<P, R>> {
        let mut controller = Controller {
            presenter,
            rng,
            animation_duration: settings.animation_duration,
            state: ControllerState {
                position: settings.initial_position,
                direction: settings.initial_direction,
            },
            taps: 0,
        };

        // Initial layout snaps into place.
        controller.presenter.animate_to(controller.state.position, Duration::ZERO)?;
        controller.update_text()?;

        Ok(controller)
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn taps(&self) -> usize {
        self.taps
    }

    pub fn tap(&mut self) -> io::Result<Position> {
        let ControllerState { position: from, direction } = self.state;
        let to = next(from, direction, &mut self.rng);

        self.state.position = to;
        self.taps += 1;

        tracing::debug!(%from, %to, %direction, taps = self.taps, "tap");

        self.presenter.animate_to(to, self.animation_duration)?;
        self.update_text()?;

        Ok(to)
    }

    /// Takes effect from the next tap on. The button stays where it is.
    pub fn set_direction(&mut self, direction: DirectionMode) -> io::Result<()> {
        tracing::info!(from = %self.state.direction, to = %direction, "direction changed");

        self.state.direction = direction;
        self.update_text()
    }

    /// Moves the button straight to `position` without a transition.
    pub fn set_position(&mut self, position: Position) -> io::Result<()> {
        tracing::info!(from = %self.state.position, to = %position, "position changed");

        self.state.position = position;
        self.presenter.animate_to(position, Duration::ZERO)?;
        self.update_text()
    }

    fn update_text(&mut self) -> io::Result<()> {
        let direction_label = format!("Direction: {}", self.state.direction.title());
        let position_label = format!("Position: {}", self.state.position.title());

        self.presenter.update_text(&direction_label, &position_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[derive(Debug, PartialEq)]
    enum Call {
        Animate(Position, Duration),
        Text(String, String),
    }

    #[derive(Default)]
    struct RecordingPresenter {
        calls: Vec<Call>,
    }

    impl Presenter for RecordingPresenter {
        fn animate_to(&mut self, position: Position, duration: Duration) -> io::Result<()> {
            self.calls.push(Call::Animate(position, duration));
            Ok(())
        }

        fn update_text(&mut self, direction_label: &str, position_label: &str) -> io::Result<()> {
            self.calls
                .push(Call::Text(direction_label.to_owned(), position_label.to_owned()));
            Ok(())
        }
    }

    fn controller(settings: &Settings) -> Controller<RecordingPresenter, Xoshiro256StarStar> {
        Controller::new(
            settings,
            RecordingPresenter::default(),
            Xoshiro256StarStar::seed_from_u64(1),
        )
        .unwrap()
    }

    fn text(direction: &str, position: &str) -> Call {
        Call::Text(format!("Direction: {direction}"), format!("Position: {position}"))
    }

    #[test]
    fn initial_layout_snaps_then_shows_text() {
        let c = controller(&Settings::default());

        assert_eq!(c.state().position, Position::LeftTop);
        assert_eq!(c.state().direction, DirectionMode::Clockwise);
        assert_eq!(
            c.presenter.calls,
            [
                Call::Animate(Position::LeftTop, Duration::ZERO),
                text("Clockwise 🕐", "↖️"),
            ]
        );
    }

    #[test]
    fn tap_animates_then_updates_text() {
        let mut c = controller(&Settings::default());

        assert_eq!(c.tap().unwrap(), Position::RightTop);
        assert_eq!(c.taps(), 1);
        assert_eq!(
            c.presenter.calls[2..],
            [
                Call::Animate(Position::RightTop, Duration::from_millis(500)),
                text("Clockwise 🕐", "↗️"),
            ]
        );
    }

    #[test]
    fn direction_change_applies_to_next_tap() {
        let mut c = controller(&Settings::default());

        c.tap().unwrap();
        c.set_direction(DirectionMode::Anticlockwise).unwrap();
        assert_eq!(c.state().position, Position::RightTop);

        assert_eq!(c.tap().unwrap(), Position::LeftTop);
        assert_eq!(c.tap().unwrap(), Position::LeftBottom);
    }

    #[test]
    fn position_change_snaps_without_counting_a_tap() {
        let mut c = controller(&Settings::default());

        c.set_position(Position::LeftBottom).unwrap();
        assert_eq!(c.taps(), 0);
        assert_eq!(
            c.presenter.calls[2..],
            [
                Call::Animate(Position::LeftBottom, Duration::ZERO),
                text("Clockwise 🕐", "↙️"),
            ]
        );

        assert_eq!(c.tap().unwrap(), Position::LeftTop);
    }

    #[test]
    fn random_taps_always_move() {
        let settings = Settings {
            initial_direction: DirectionMode::Random,
            ..Settings::default()
        };
        let mut c = controller(&settings);

        for _ in 0..100 {
            let before = c.state().position;
            assert_ne!(c.tap().unwrap(), before);
        }
    }
}
