use tracing::debug;

use crate::bridge::{EmbeddedWidget, PlaybackBridge};
use crate::protocol::{PlayerCommand, embed_url};
use crate::slide::{SlideItem, SlideRegistry};
use crate::state::{Direction, SlideshowState, step_index};

pub struct Slideshow<W> {
    registry: SlideRegistry,
    state: SlideshowState,
    bridge: PlaybackBridge<W>,
    embed_host: String,
    addressed: Option<usize>, // Slide the widget was last loaded with
}

impl<W: EmbeddedWidget> Slideshow<W> {
    pub fn new(registry: SlideRegistry, widget: W, embed_host: &str) -> Self {
        Self {
            registry,
            state: SlideshowState::default(),
            bridge: PlaybackBridge::new(widget),
            embed_host: embed_host.to_string(),
            addressed: None,
        }
    }

    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn current_slide(&self) -> &SlideItem {
        self.registry.get(self.state.current_index)
    }

    pub fn current_embed_url(&self) -> String {
        embed_url(&self.embed_host, &self.current_slide().video_id)
    }

    pub fn is_widget_live(&self) -> bool {
        self.bridge.is_live()
    }

    #[cfg(test)]
    pub fn bridge(&self) -> &PlaybackBridge<W> {
        &self.bridge
    }

    /// Pause whatever the current widget is playing, then move one slide.
    pub fn advance(&mut self, direction: Direction) {
        let next = step_index(self.state.current_index, direction, self.registry.len());
        self.bridge.send(PlayerCommand::Pause);
        self.state.is_playing = false;
        self.state.current_index = next;
        debug!("advance {:?} -> slide {}", direction, next);
    }

    /// Dot click. Unlike `advance`, no pause is posted: the reload in
    /// `sync_embed` is the only thing that stops playback here.
    pub fn jump_to(&mut self, index: usize) {
        self.state.is_playing = false;
        self.state.current_index = index % self.registry.len();
        debug!("jump -> slide {}", self.state.current_index);
    }

    pub fn play(&mut self) {
        if self.bridge.send(PlayerCommand::Play) {
            self.state.is_playing = true;
        }
    }

    pub fn pause(&mut self) {
        if self.bridge.send(PlayerCommand::Pause) {
            self.state.is_playing = false;
        }
    }

    pub fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Re-address the widget when the current slide changed since the last load.
    /// Returns true when a reload happened.
    pub fn sync_embed(&mut self) -> bool {
        if self.addressed == Some(self.state.current_index) {
            return false;
        }
        let url = self.current_embed_url();
        self.bridge.readdress(&url);
        self.addressed = Some(self.state.current_index);
        self.state.is_playing = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::testing::{Event, RecordingWidget};
    use crate::constants::EMBED_HOST;

    fn slideshow(live: bool) -> Slideshow<RecordingWidget> {
        let widget = RecordingWidget { live, events: Vec::new() };
        Slideshow::new(SlideRegistry::builtin(), widget, EMBED_HOST)
    }

    #[test]
    fn three_slide_scenario_wraps_both_ways() {
        let mut show = slideshow(true);
        assert_eq!(show.current_index(), 0);
        show.advance(Direction::Next);
        assert_eq!(show.current_index(), 1);
        show.advance(Direction::Next);
        assert_eq!(show.current_index(), 2);
        show.advance(Direction::Next);
        assert_eq!(show.current_index(), 0);
        show.advance(Direction::Previous);
        assert_eq!(show.current_index(), 2);
    }

    #[test]
    fn previous_from_first_slide_goes_to_last() {
        let mut show = slideshow(false);
        show.advance(Direction::Previous);
        assert_eq!(show.current_index(), show.registry().len() - 1);
    }

    #[test]
    fn next_then_previous_round_trips_from_every_slide() {
        let mut show = slideshow(true);
        for start in 0..show.registry().len() {
            show.jump_to(start);
            show.advance(Direction::Next);
            show.advance(Direction::Previous);
            assert_eq!(show.current_index(), start);
        }
    }

    #[test]
    fn advance_pauses_the_widget_before_switching() {
        let mut show = slideshow(true);
        show.sync_embed();
        show.play();
        assert!(show.is_playing());

        show.advance(Direction::Next);
        assert!(!show.is_playing());

        let pause = PlayerCommand::Pause.encode();
        let events = &show.bridge().widget().events;
        // The pause reaches the widget still loaded with slide 0.
        assert_eq!(
            events.last(),
            Some(&Event::Post(pause)),
            "pause must be posted before any reload"
        );
        assert_eq!(show.bridge().widget().loads().len(), 1);

        assert!(show.sync_embed());
        assert_eq!(
            show.bridge().widget().loads().last().copied(),
            Some(embed_url(EMBED_HOST, "A2tXABSntNA").as_str())
        );
    }

    #[test]
    fn jump_to_posts_no_command() {
        let mut show = slideshow(true);
        show.sync_embed();
        show.play();
        let posted_before = show.bridge().widget().posts().len();

        show.jump_to(2);
        assert!(!show.is_playing());
        assert_eq!(show.current_index(), 2);
        assert_eq!(show.bridge().widget().posts().len(), posted_before);
    }

    #[test]
    fn jump_to_sets_exact_index_from_any_start() {
        let mut show = slideshow(false);
        let len = show.registry().len();
        for from in 0..len {
            for to in 0..len {
                show.jump_to(from);
                show.jump_to(to);
                assert_eq!(show.current_index(), to);
            }
        }
    }

    #[test]
    fn navigation_always_clears_playing() {
        let mut show = slideshow(true);
        show.play();
        show.advance(Direction::Previous);
        assert!(!show.is_playing());
        show.play();
        show.jump_to(1);
        assert!(!show.is_playing());
    }

    #[test]
    fn toggle_twice_posts_play_then_pause() {
        let mut show = slideshow(true);
        assert!(!show.is_playing());

        show.toggle_play();
        assert!(show.is_playing());
        show.toggle_play();
        assert!(!show.is_playing());

        let play = PlayerCommand::Play.encode();
        let pause = PlayerCommand::Pause.encode();
        assert_eq!(show.bridge().widget().posts(), vec![play.as_str(), pause.as_str()]);
    }

    #[test]
    fn toggle_without_live_widget_changes_nothing() {
        let mut show = slideshow(false);
        show.toggle_play();
        assert!(!show.is_playing());
        assert!(show.bridge().widget().posts().is_empty());
    }

    #[test]
    fn sync_embed_reloads_only_on_index_change() {
        let mut show = slideshow(true);
        assert!(show.sync_embed());
        assert!(!show.sync_embed());

        show.play();
        show.jump_to(0);
        assert!(!show.sync_embed());

        show.jump_to(1);
        assert!(show.sync_embed());
        assert_eq!(show.bridge().widget().loads().len(), 2);
    }

    #[test]
    fn sync_embed_resets_playing() {
        let mut show = slideshow(true);
        show.play();
        assert!(show.sync_embed());
        assert!(!show.is_playing());
    }
}
