//! Wire format understood by the embedded video widget.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Play,
    Pause,
}

impl PlayerCommand {
    pub fn func(self) -> &'static str {
        match self {
            PlayerCommand::Play => "playVideo",
            PlayerCommand::Pause => "pauseVideo",
        }
    }

    /// `{"event":"command","func":"playVideo","args":""}`
    pub fn encode(self) -> String {
        let message = CommandMessage {
            event: "command",
            func: self.func(),
            args: "",
        };
        // Serializing a struct of &str fields cannot fail.
        serde_json::to_string(&message).unwrap_or_default()
    }
}

#[derive(Serialize)]
struct CommandMessage<'a> {
    event: &'a str,
    func: &'a str,
    args: &'a str,
}

pub fn embed_url(host: &str, video_id: &str) -> String {
    format!(
        "https://{}/embed/{}?enablejsapi=1&autoplay=0&controls=1&showinfo=0&modestbranding=1",
        host, video_id
    )
}
