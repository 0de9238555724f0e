use tracing::debug;

use crate::bridge::EmbeddedWidget;
use crate::controller::Slideshow;
use crate::counter::Counter;
use crate::state::Direction;

/// Everything a click or key press can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Advance(Direction),
    JumpTo(usize),
    TogglePlay,
    Increment,
}

/// Single owner of all mutable UI state, handed to input handlers by `&mut`.
pub struct App<W> {
    pub slideshow: Slideshow<W>,
    pub counter: Counter,
}

impl<W: EmbeddedWidget> App<W> {
    pub fn new(slideshow: Slideshow<W>) -> Self {
        Self {
            slideshow,
            counter: Counter::default(),
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        debug!("action {:?}", action);
        match action {
            Action::Advance(direction) => self.slideshow.advance(direction),
            Action::JumpTo(index) => self.slideshow.jump_to(index),
            Action::TogglePlay => self.slideshow.toggle_play(),
            Action::Increment => self.counter.increment(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::testing::RecordingWidget;
    use crate::constants::EMBED_HOST;
    use crate::slide::SlideRegistry;

    fn app() -> App<RecordingWidget> {
        App::new(Slideshow::new(SlideRegistry::builtin(), RecordingWidget::live(), EMBED_HOST))
    }

    #[test]
    fn counter_ignores_interleaved_slideshow_actions() {
        let mut app = app();
        let noise = [
            Action::Advance(Direction::Next),
            Action::TogglePlay,
            Action::JumpTo(2),
            Action::Advance(Direction::Previous),
        ];
        for i in 0..12 {
            app.dispatch(Action::Increment);
            app.dispatch(noise[i % noise.len()]);
        }
        assert_eq!(app.counter.value(), 12);
    }

    #[test]
    fn slideshow_ignores_counter() {
        let mut app = app();
        app.dispatch(Action::JumpTo(1));
        app.dispatch(Action::Increment);
        app.dispatch(Action::Increment);
        assert_eq!(app.slideshow.current_index(), 1);
        assert!(!app.slideshow.is_playing());
    }

    #[test]
    fn dispatch_routes_navigation() {
        let mut app = app();
        app.dispatch(Action::Advance(Direction::Previous));
        assert_eq!(app.slideshow.current_index(), 2);
        app.dispatch(Action::TogglePlay);
        assert!(app.slideshow.is_playing());
        app.dispatch(Action::JumpTo(0));
        assert_eq!(app.slideshow.current_index(), 0);
        assert!(!app.slideshow.is_playing());
    }
}
