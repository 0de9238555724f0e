use tracing::debug;

use crate::constants::TARGET_ORIGIN;
use crate::protocol::PlayerCommand;

/// Handle on the embedded video widget. Send-only: nothing ever comes back.
pub trait EmbeddedWidget {
    /// True once a live reference exists that can receive messages.
    fn is_live(&self) -> bool;

    /// Point the widget at a new embed URL. The widget reloads paused.
    fn load(&mut self, url: &str);

    /// Fire-and-forget. Delivery failures are the widget's own business.
    fn post_message(&mut self, message: &str, target_origin: &str);
}

impl<W: EmbeddedWidget + ?Sized> EmbeddedWidget for Box<W> {
    fn is_live(&self) -> bool {
        (**self).is_live()
    }

    fn load(&mut self, url: &str) {
        (**self).load(url)
    }

    fn post_message(&mut self, message: &str, target_origin: &str) {
        (**self).post_message(message, target_origin)
    }
}

/// Stand-in used when no helper program is configured. Never live.
#[derive(Debug, Default)]
pub struct DetachedWidget {
    pub url: Option<String>,
}

impl EmbeddedWidget for DetachedWidget {
    fn is_live(&self) -> bool {
        false
    }

    fn load(&mut self, url: &str) {
        self.url = Some(url.to_string());
    }

    fn post_message(&mut self, _message: &str, _target_origin: &str) {}
}

pub struct PlaybackBridge<W> {
    widget: W,
}

impl<W: EmbeddedWidget> PlaybackBridge<W> {
    pub fn new(widget: W) -> Self {
        Self { widget }
    }

    pub fn is_live(&self) -> bool {
        self.widget.is_live()
    }

    /// Returns false when there was no live widget to send to.
    pub fn send(&mut self, command: PlayerCommand) -> bool {
        if !self.widget.is_live() {
            debug!("no live widget, dropping {:?}", command);
            return false;
        }
        debug!("posting {:?}", command);
        self.widget.post_message(&command.encode(), TARGET_ORIGIN);
        true
    }

    pub fn readdress(&mut self, url: &str) {
        debug!("loading embed {}", url);
        self.widget.load(url);
    }

    #[cfg(test)]
    pub fn widget(&self) -> &W {
        &self.widget
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::EmbeddedWidget;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Event {
        Load(String),
        Post(String),
    }

    /// Records everything it is asked to do.
    #[derive(Debug, Default)]
    pub struct RecordingWidget {
        pub live: bool,
        pub events: Vec<Event>,
    }

    impl RecordingWidget {
        pub fn live() -> Self {
            Self { live: true, events: Vec::new() }
        }

        pub fn posts(&self) -> Vec<&str> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Post(m) => Some(m.as_str()),
                    Event::Load(_) => None,
                })
                .collect()
        }

        pub fn loads(&self) -> Vec<&str> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Load(u) => Some(u.as_str()),
                    Event::Post(_) => None,
                })
                .collect()
        }
    }

    impl EmbeddedWidget for RecordingWidget {
        fn is_live(&self) -> bool {
            self.live
        }

        fn load(&mut self, url: &str) {
            self.events.push(Event::Load(url.to_string()));
        }

        fn post_message(&mut self, message: &str, target_origin: &str) {
            assert_eq!(target_origin, "*");
            self.events.push(Event::Post(message.to_string()));
        }
    }
}
