use std::path::PathBuf;

use clap::Parser;

use crate::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, EMBED_HOST};

/// Image slideshow with a synchronized music player.
#[derive(Debug, Parser)]
#[command(name = "music-slideshow", version, about)]
pub struct Args {
    /// TOML manifest with `[[slides]]` entries (image_url, video_id, title).
    /// The built-in slides are used when omitted.
    #[arg(long, value_name = "FILE")]
    pub slides: Option<PathBuf>,

    /// Helper program that hosts the embedded player. It is started as
    /// `<PROGRAM> <ARGS..> <EMBED_URL>` and receives JSON commands on stdin.
    #[arg(long, value_name = "PROGRAM")]
    pub player: Option<String>,

    /// Extra argument passed to the player helper before the embed URL.
    #[arg(long = "player-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub player_args: Vec<String>,

    /// Host serving the embedded player.
    #[arg(long, default_value = EMBED_HOST)]
    pub embed_host: String,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,
}
