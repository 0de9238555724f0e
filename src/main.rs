use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod bridge;
mod config;
mod constants;
mod controller;
mod counter;
mod error;
mod player_process;
mod protocol;
mod slide;
mod state;
mod texture_loader;
mod view;

use crate::app::App;
use crate::bridge::{DetachedWidget, EmbeddedWidget};
use crate::config::Args;
use crate::constants::*;
use crate::controller::Slideshow;
use crate::player_process::ProcessWidget;
use crate::slide::SlideRegistry;
use crate::texture_loader::load_slide_textures;
use crate::view::Layout;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // --- Slide Registry ---
    let registry = match &args.slides {
        Some(path) => SlideRegistry::load_manifest(path)
            .with_context(|| format!("loading slides from {}", path.display()))?,
        None => SlideRegistry::builtin(),
    };
    info!("{} slides", registry.len());

    let widget: Box<dyn EmbeddedWidget> = match &args.player {
        Some(program) => {
            info!("player helper: {} {:?}", program, args.player_args);
            Box::new(ProcessWidget::new(program, &args.player_args))
        }
        None => {
            info!("no player helper configured, playback commands are disabled");
            Box::new(DetachedWidget::default())
        }
    };

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Music Slideshow")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // Missing images become placeholders, they never stop the show
    let textures = load_slide_textures(&mut rl, &thread, registry.iter().map(|s| s.image_url.as_str()));

    let mut app = App::new(Slideshow::new(registry, widget, &args.embed_host));

    // --- Main Loop ---
    while !rl.window_should_close() {
        let layout = Layout::new(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            app.slideshow.registry().len(),
        );
        let mouse = rl.get_mouse_position();

        let mut actions = view::key_actions(&rl);
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            actions.extend(layout.hit_test(mouse));
        }
        for action in actions {
            app.dispatch(action);
        }

        // Embed follows the current slide and comes back paused
        app.slideshow.sync_embed();

        let mut d = rl.begin_drawing(&thread);
        view::draw(&mut d, &layout, &app, &textures, mouse);
    }

    Ok(())
}
