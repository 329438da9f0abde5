use std::time::Duration;

use macroquad::prelude::{Vec2, vec2};
use rand::Rng;

use crate::game::GameState;
use crate::geometry::Cell;
use crate::theme::Theme;

pub const DEATH_DURATION: Duration = Duration::from_millis(800);
/// Fraction of the animation during which the red flash is visible.
pub const FLASH_FRACTION: f32 = 0.3;
/// How far (in cells) a particle travels per unit of velocity.
const DRIFT_CELLS: f32 = 2.5;
const SHAKE_PX: f32 = 6.0;

#[derive(Copy, Clone, Debug, PartialEq)]
struct Particle {
    vx: f32,
    vy: f32,
    rot: f32,
}

/// One segment's pose for the current frame. `offset` is in cells.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParticleFrame {
    pub cell: Cell,
    pub offset: Vec2,
    pub scale: f32,
    pub rotation: f32,
    pub alpha: f32,
    pub is_head: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Playing,
    Finished,
    Cancelled,
}

/// The snake bursting apart after a fatal tick.
///
/// Seeded once from the state at the moment of death; after that it only
/// depends on elapsed time. The owner drives it with `advance` and gets
/// `true` back exactly once, on the frame it completes. `cancel` tears it
/// down and guarantees that `true` never comes.
#[derive(Debug, Clone)]
pub struct DeathAnimation {
    snake: Vec<Cell>,
    food: Option<Cell>,
    theme: &'static Theme,
    particles: Vec<Particle>,
    elapsed: Duration,
    phase: Phase,
}

impl DeathAnimation {
    pub fn start<R: Rng + ?Sized>(state: &GameState, theme: &'static Theme, rng: &mut R) -> Self {
        let snake = state.snake().cells().to_vec();
        let particles = snake
            .iter()
            .map(|_| Particle {
                vx: rng.gen_range(-0.5..0.5) * 4.0,
                vy: rng.gen_range(-0.5..0.5) * 4.0 - 0.5,
                rot: rng.gen_range(-0.5..0.5) * 8.0,
            })
            .collect();
        Self { snake, food: state.food(), theme, particles, elapsed: Duration::ZERO, phase: Phase::Playing }
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.elapsed = (self.elapsed + dt).min(DEATH_DURATION);
        if self.elapsed >= DEATH_DURATION {
            self.phase = Phase::Finished;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        if self.phase == Phase::Playing {
            self.phase = Phase::Cancelled;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn is_cancelled(&self) -> bool {
        self.phase == Phase::Cancelled
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.elapsed.as_secs_f32() / DEATH_DURATION.as_secs_f32()
    }

    /// Ease-out quad of `progress`.
    pub fn ease(&self) -> f32 {
        let t = self.progress();
        1.0 - (1.0 - t) * (1.0 - t)
    }

    /// Red overlay alpha: starts at 0.4 and fades out over the first 30%.
    pub fn flash_alpha(&self) -> f32 {
        let t = self.progress();
        if t < FLASH_FRACTION { 0.4 * (1.0 - t / FLASH_FRACTION) } else { 0.0 }
    }

    /// Board displacement in logical pixels, decaying to zero.
    pub fn shake(&self) -> Vec2 {
        let t = self.progress();
        let amp = SHAKE_PX * (1.0 - t);
        let phase = self.elapsed.as_secs_f32() * 60.0;
        vec2(phase.sin() * amp, (phase * 1.3).cos() * amp * 0.5)
    }

    pub fn frames(&self) -> Vec<ParticleFrame> {
        let ease = self.ease();
        let fade = 1.0 - ease;
        let len = self.snake.len() as f32;
        self.snake
            .iter()
            .zip(&self.particles)
            .enumerate()
            .map(|(i, (&cell, p))| {
                let gradient = if i == 0 { 1.0 } else { 1.0 - (i as f32 / len) * 0.6 };
                ParticleFrame {
                    cell,
                    offset: vec2(p.vx, p.vy) * ease * DRIFT_CELLS,
                    scale: 1.0 - ease * 0.5,
                    rotation: p.rot * ease,
                    alpha: gradient * fade,
                    is_head: i == 0,
                }
            })
            .collect()
    }
}
