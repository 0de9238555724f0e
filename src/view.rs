use raylib::prelude::*;

use crate::app::{Action, App};
use crate::bridge::EmbeddedWidget;
use crate::constants::*;
use crate::state::Direction;

const WELCOME: &str = "Welcome";
const INTRO: [&str; 2] = [
    "Pick a picture on the left, its song plays here.",
    "Use the arrows or the dots to change slides.",
];

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

/// Screen regions for one frame. Recomputed every frame so the window can be resized.
#[derive(Debug, Clone)]
pub struct Layout {
    pub left_panel: Rectangle,
    pub right_panel: Rectangle,
    pub prev_button: Rectangle,
    pub next_button: Rectangle,
    pub image: Rectangle,
    pub dots: Vec<Vector2>,
    pub now_playing_y: f32,
    pub embed: Rectangle,
    pub play_button: Rectangle,
    pub counter_y: f32,
    pub increment_button: Rectangle,
}

impl Layout {
    pub fn new(width: f32, height: f32, slide_count: usize) -> Self {
        let half = width * 0.5;
        let left_panel = Rectangle::new(0.0, 0.0, half, height);
        let right_panel = Rectangle::new(half, 0.0, width - half, height);

        let content_height = (height - 2.0 * PANEL_PADDING - DOT_ROW_HEIGHT).max(0.0);
        let prev_button = Rectangle::new(PANEL_PADDING, PANEL_PADDING, NAV_BUTTON_WIDTH, content_height);
        let next_button = Rectangle::new(
            half - PANEL_PADDING - NAV_BUTTON_WIDTH,
            PANEL_PADDING,
            NAV_BUTTON_WIDTH,
            content_height,
        );
        let image_x = prev_button.x + NAV_BUTTON_WIDTH + PANEL_PADDING * 0.5;
        let image = Rectangle::new(
            image_x,
            PANEL_PADDING,
            (next_button.x - PANEL_PADDING * 0.5 - image_x).max(0.0),
            content_height,
        );

        let dot_y = height - PANEL_PADDING - DOT_ROW_HEIGHT * 0.5;
        let first_dot_x = half * 0.5 - (slide_count.saturating_sub(1)) as f32 * DOT_SPACING * 0.5;
        let dots = (0..slide_count)
            .map(|i| Vector2::new(first_dot_x + i as f32 * DOT_SPACING, dot_y))
            .collect();

        let column_x = half + PANEL_PADDING;
        let column_width = (right_panel.width - 2.0 * PANEL_PADDING).max(0.0);
        let now_playing_y = PANEL_PADDING + HEADING_SIZE as f32 + 16.0 + 2.0 * (TEXT_SIZE as f32 + 6.0) + 24.0;
        let embed_y = now_playing_y + SUBHEADING_SIZE as f32 + 12.0;
        let embed = Rectangle::new(column_x, embed_y, column_width, (column_width * 9.0 / 16.0).min(height * 0.4));
        let play_button = Rectangle::new(column_x, embed.y + embed.height + 12.0, BUTTON_WIDTH, BUTTON_HEIGHT);
        let counter_y = play_button.y + BUTTON_HEIGHT + 32.0;
        let increment_button = Rectangle::new(column_x, counter_y + TEXT_SIZE as f32 + 10.0, BUTTON_WIDTH, BUTTON_HEIGHT);

        Self {
            left_panel,
            right_panel,
            prev_button,
            next_button,
            image,
            dots,
            now_playing_y,
            embed,
            play_button,
            counter_y,
            increment_button,
        }
    }

    /// Which control, if any, sits under `point`.
    pub fn hit_test(&self, point: Vector2) -> Option<Action> {
        if contains(&self.prev_button, point) {
            return Some(Action::Advance(Direction::Previous));
        }
        if contains(&self.next_button, point) {
            return Some(Action::Advance(Direction::Next));
        }
        let reach = DOT_SPACING * 0.5;
        if let Some(index) = self
            .dots
            .iter()
            .position(|dot| (point.x - dot.x).abs() < reach && (point.y - dot.y).abs() < reach)
        {
            return Some(Action::JumpTo(index));
        }
        if contains(&self.play_button, point) {
            return Some(Action::TogglePlay);
        }
        if contains(&self.increment_button, point) {
            return Some(Action::Increment);
        }
        None
    }
}

/// Keyboard shortcuts for the same actions the mouse can trigger.
pub fn key_actions(rl: &RaylibHandle) -> Vec<Action> {
    let mut actions = Vec::new();
    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        actions.push(Action::Advance(Direction::Previous));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        actions.push(Action::Advance(Direction::Next));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        actions.push(Action::TogglePlay);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
        actions.push(Action::Increment);
    }
    actions
}

fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, label: &str, hovered: bool) {
    let fill = if hovered { ACCENT.fade(0.85) } else { ACCENT };
    d.draw_rectangle_rec(rect, fill);
    let text_width = d.measure_text(label, TEXT_SIZE);
    d.draw_text(
        label,
        (rect.x + (rect.width - text_width as f32) * 0.5) as i32,
        (rect.y + (rect.height - TEXT_SIZE as f32) * 0.5) as i32,
        TEXT_SIZE,
        Color::WHITE,
    );
}

fn draw_arrow(d: &mut RaylibDrawHandle, rect: Rectangle, direction: Direction, hovered: bool) {
    if hovered {
        d.draw_rectangle_rec(rect, Color::WHITE.fade(0.08));
    }
    let cx = rect.x + rect.width * 0.5;
    let cy = rect.y + rect.height * 0.5;
    let s = rect.width * 0.3;
    // Vertices in counter-clockwise order
    match direction {
        Direction::Previous => d.draw_triangle(
            Vector2::new(cx - s, cy),
            Vector2::new(cx + s, cy + s),
            Vector2::new(cx + s, cy - s),
            Color::WHITE,
        ),
        Direction::Next => d.draw_triangle(
            Vector2::new(cx + s, cy),
            Vector2::new(cx - s, cy - s),
            Vector2::new(cx - s, cy + s),
            Color::WHITE,
        ),
    }
}

fn draw_image(d: &mut RaylibDrawHandle, area: Rectangle, texture: Option<&Texture2D>, label: &str) {
    let Some(texture) = texture else {
        d.draw_rectangle_lines_ex(area, 2.0, MUTED);
        d.draw_text("image unavailable", area.x as i32 + 12, area.y as i32 + 12, TEXT_SIZE, MUTED);
        d.draw_text(label, area.x as i32 + 12, area.y as i32 + 36, TEXT_SIZE, MUTED);
        return;
    };

    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    let scale = (area.width / tex_width).min(area.height / tex_height);
    let width = tex_width * scale;
    let height = tex_height * scale;

    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        Rectangle::new(
            area.x + (area.width - width) * 0.5,
            area.y + (area.height - height) * 0.5,
            width,
            height,
        ),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

pub fn draw<W: EmbeddedWidget>(
    d: &mut RaylibDrawHandle,
    layout: &Layout,
    app: &App<W>,
    textures: &[Option<Texture2D>],
    mouse: Vector2,
) {
    let show = &app.slideshow;
    let index = show.current_index();

    d.clear_background(BACKGROUND);
    d.draw_rectangle_rec(layout.left_panel, LEFT_PANEL);
    d.draw_rectangle_rec(layout.right_panel, RIGHT_PANEL);

    // --- Left: slide image and navigation ---
    draw_arrow(d, layout.prev_button, Direction::Previous, contains(&layout.prev_button, mouse));
    let alt = format!("Slide {}", index + 1);
    draw_image(d, layout.image, textures.get(index).and_then(Option::as_ref), &alt);
    draw_arrow(d, layout.next_button, Direction::Next, contains(&layout.next_button, mouse));

    for (i, dot) in layout.dots.iter().enumerate() {
        let color = if i == index { Color::WHITE } else { MUTED };
        d.draw_circle_v(*dot, DOT_RADIUS, color);
    }

    // --- Right: text, player, counter ---
    let x = (layout.right_panel.x + PANEL_PADDING) as i32;
    let mut y = PANEL_PADDING as i32;
    d.draw_text(WELCOME, x, y, HEADING_SIZE, TEXT);
    y += HEADING_SIZE + 16;
    for line in INTRO {
        d.draw_text(line, x, y, TEXT_SIZE, TEXT);
        y += TEXT_SIZE + 6;
    }

    let now_playing = format!("Now playing: {}", show.current_slide().display_title());
    d.draw_text(&now_playing, x, layout.now_playing_y as i32, SUBHEADING_SIZE, TEXT);

    d.draw_rectangle_rec(layout.embed, Color::BLACK);
    let embed_x = layout.embed.x as i32 + 12;
    let embed_y = layout.embed.y as i32 + 12;
    d.draw_text("YouTube video player", embed_x, embed_y, TEXT_SIZE, Color::WHITE);
    let url = show.current_embed_url();
    let (base, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
    d.draw_text(base, embed_x, embed_y + 30, 14, MUTED);
    d.draw_text(query, embed_x, embed_y + 48, 14, MUTED);
    let status = if show.is_widget_live() { "player connected" } else { "no player helper" };
    d.draw_text(status, embed_x, embed_y + 76, 14, MUTED);

    let play_label = if show.is_playing() { "Pause" } else { "Play" };
    draw_button(d, layout.play_button, play_label, contains(&layout.play_button, mouse));

    let counter = format!("Counter: {}", app.counter.value());
    d.draw_text(&counter, x, layout.counter_y as i32, TEXT_SIZE, TEXT);
    draw_button(d, layout.increment_button, "Increment", contains(&layout.increment_button, mouse));
}
