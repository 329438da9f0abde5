use macroquad::prelude::*;

use crate::animation::DeathAnimation;
use crate::game::{GameState, Status};
use crate::geometry::{BoardLayout, Cell, GRID};
use crate::theme::Theme;

pub const HUD_HEIGHT: f32 = 56.0;

const DEATH_RED: Color = Color::new(0.937, 0.267, 0.267, 1.0); // #ef4444
const HUD_TEXT: Color = Color::new(0.89, 0.91, 0.94, 1.0);
const HUD_DIM: Color = Color::new(0.58, 0.64, 0.72, 1.0);
const RECORD_GOLD: Color = Color::new(0.98, 0.8, 0.08, 1.0);
const OVERLAY_SHADE: Color = Color::new(0.0, 0.0, 0.0, 0.55);

// Eye placement in logical pixels
const EYE_FORWARD: f32 = 5.0;
const EYE_SIDE: f32 = 4.0;
const EYE_RADIUS: f32 = 2.0;

/// Score box contents drawn above the board.
pub struct Hud {
    pub score: u32,
    pub high_score: u32,
    pub new_record: bool,
}

pub fn draw_frame(state: &GameState, theme: &Theme, death: Option<&DeathAnimation>, hud: &Hud) {
    clear_background(theme.background);
    let mut layout = BoardLayout::fit(screen_width(), screen_height(), HUD_HEIGHT);

    match death.filter(|_| state.status() == Status::Dying) {
        Some(anim) => {
            let shake = anim.shake() * layout.scale();
            layout.off_x += shake.x;
            layout.off_y += shake.y;
            draw_death(&layout, anim);
        }
        None => draw_board(&layout, state, theme),
    }

    draw_hud(&layout, hud);
    draw_overlay(&layout, state, hud);
}

fn draw_grid(layout: &BoardLayout, theme: &Theme) {
    let size = layout.size();
    draw_rectangle(layout.off_x, layout.off_y, size, size, theme.background);
    let thickness = (0.5 * layout.scale()).max(0.5);
    for i in 1..GRID {
        let p = i as f32 * layout.tile;
        draw_line(layout.off_x + p, layout.off_y, layout.off_x + p, layout.off_y + size, thickness, theme.grid_line);
        draw_line(layout.off_x, layout.off_y + p, layout.off_x + size, layout.off_y + p, thickness, theme.grid_line);
    }
}

fn draw_food(layout: &BoardLayout, food: Option<Cell>, color: Color) {
    let Some(food) = food else {
        return;
    };
    let c = layout.cell_center(food);
    draw_circle(c.x, c.y, layout.tile / 2.0 - 3.0 * layout.scale(), color);
}

fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    let r = r.min(w / 2.0).min(h / 2.0);
    draw_rectangle(x + r, y, w - 2.0 * r, h, color);
    draw_rectangle(x, y + r, r, h - 2.0 * r, color);
    draw_rectangle(x + w - r, y + r, r, h - 2.0 * r, color);
    for (cx, cy) in [(x + r, y + r), (x + w - r, y + r), (x + r, y + h - r), (x + w - r, y + h - r)] {
        draw_circle(cx, cy, r, color);
    }
}

fn draw_board(layout: &BoardLayout, state: &GameState, theme: &Theme) {
    let s = layout.scale();
    draw_grid(layout, theme);
    draw_food(layout, state.food(), theme.food);

    // Body fades toward the tail
    let cells = state.snake().cells();
    let len = cells.len() as f32;
    for (i, cell) in cells.iter().enumerate().skip(1) {
        let alpha = 1.0 - ((i - 1) as f32 / len) * 0.6;
        let r = layout.cell_rect(*cell);
        let color = Color::new(theme.body.r, theme.body.g, theme.body.b, alpha);
        draw_rounded_rect(r.x + 2.0 * s, r.y + 2.0 * s, r.w - 4.0 * s, r.h - 4.0 * s, 3.0 * s, color);
    }

    // Head
    let head = state.snake().head();
    let r = layout.cell_rect(head);
    draw_rounded_rect(r.x + s, r.y + s, r.w - 2.0 * s, r.h - 2.0 * s, 5.0 * s, theme.head);

    // Eyes sit forward along the heading, spread along its perpendicular
    let c = layout.cell_center(head);
    let (dx, dy) = state.direction().delta();
    let forward = vec2(dx as f32, dy as f32) * EYE_FORWARD * s;
    let side = vec2(dy as f32, -dx as f32) * EYE_SIDE * s;
    for eye in [c + forward + side, c + forward - side] {
        draw_circle(eye.x, eye.y, EYE_RADIUS * s, theme.eye);
    }
}

fn draw_death(layout: &BoardLayout, anim: &DeathAnimation) {
    let theme = anim.theme();
    let s = layout.scale();
    draw_grid(layout, theme);

    let flash = anim.flash_alpha();
    if flash > 0.0 {
        let size = layout.size();
        draw_rectangle(layout.off_x, layout.off_y, size, size, Color::new(DEATH_RED.r, DEATH_RED.g, DEATH_RED.b, flash));
    }

    draw_food(layout, anim.food(), theme.food);

    for p in anim.frames() {
        let base = if p.is_head { DEATH_RED } else { theme.body };
        let center = layout.cell_center(p.cell) + p.offset * layout.tile;
        let side = (layout.tile - 4.0 * s) * p.scale;
        draw_rectangle_ex(
            center.x,
            center.y,
            side,
            side,
            DrawRectangleParams {
                offset: vec2(0.5, 0.5),
                rotation: p.rotation,
                color: Color::new(base.r, base.g, base.b, p.alpha),
                ..Default::default()
            },
        );
    }
}

fn draw_hud(layout: &BoardLayout, hud: &Hud) {
    let y = (layout.off_y - 18.0).max(28.0);
    draw_text(&format!("Score: {}", hud.score), layout.off_x + 4.0, y, 28.0, HUD_TEXT);

    let best = format!("Best: {}", hud.high_score);
    let m = measure_text(&best, None, 28, 1.0);
    draw_text(&best, layout.off_x + layout.size() - m.width - 4.0, y, 28.0, HUD_DIM);
}

fn draw_centered(text: &str, layout: &BoardLayout, y: f32, size: u16, color: Color) {
    let m = measure_text(text, None, size, 1.0);
    let x = layout.off_x + (layout.size() - m.width) * 0.5;
    draw_text(text, x, y, size as f32, color);
}

fn draw_overlay(layout: &BoardLayout, state: &GameState, hud: &Hud) {
    let lines: Vec<(String, u16, Color)> = match state.status() {
        Status::Running | Status::Dying => return,
        Status::Idle => vec![
            ("SNAKE".to_string(), 48, HUD_TEXT),
            ("Space / Enter to start".to_string(), 22, HUD_DIM),
            ("Arrows / WASD to steer".to_string(), 18, HUD_DIM),
        ],
        Status::Paused => vec![
            ("PAUSED".to_string(), 40, HUD_TEXT),
            ("Space / Enter to resume".to_string(), 22, HUD_DIM),
        ],
        Status::GameOver => {
            let mut lines = vec![
                ("GAME OVER".to_string(), 40, HUD_TEXT),
                (format!("Score {}", state.score()), 28, HUD_TEXT),
            ];
            if hud.new_record {
                lines.push(("New record!".to_string(), 26, RECORD_GOLD));
            }
            lines.push(("Space / Enter to play again".to_string(), 22, HUD_DIM));
            lines
        }
    };

    let size = layout.size();
    draw_rectangle(layout.off_x, layout.off_y, size, size, OVERLAY_SHADE);

    let total: f32 = lines.iter().map(|(_, sz, _)| *sz as f32 + 12.0).sum();
    let mut y = layout.off_y + (size - total) * 0.5;
    for (text, sz, color) in &lines {
        y += *sz as f32 + 12.0;
        draw_centered(text, layout, y, *sz, *color);
    }
}
