use raylib::prelude::Color;

pub const DEFAULT_WIDTH: i32 = 1280;          // Initial window width
pub const DEFAULT_HEIGHT: i32 = 720;          // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const EMBED_HOST: &str = "www.youtube.com";
pub const TARGET_ORIGIN: &str = "*";          // Commands are posted to any origin

pub const PANEL_PADDING: f32 = 24.0;
pub const NAV_BUTTON_WIDTH: f32 = 48.0;
pub const DOT_RADIUS: f32 = 7.0;
pub const DOT_SPACING: f32 = 26.0;
pub const DOT_ROW_HEIGHT: f32 = 40.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_WIDTH: f32 = 140.0;

pub const HEADING_SIZE: i32 = 28;
pub const SUBHEADING_SIZE: i32 = 22;
pub const TEXT_SIZE: i32 = 18;

pub const BACKGROUND: Color = Color::new(24, 24, 28, 255);
pub const LEFT_PANEL: Color = Color::new(12, 12, 14, 255);
pub const RIGHT_PANEL: Color = Color::new(245, 245, 245, 255);
pub const ACCENT: Color = Color::new(255, 0, 51, 255);
pub const MUTED: Color = Color::new(120, 120, 128, 255);
pub const TEXT: Color = Color::new(30, 30, 30, 255);
