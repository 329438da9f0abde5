//! Snake on a 20×20 grid: a pure state machine (`game`) driven by a
//! frame-based tick scheduler, with macroquad rendering and a JSON high-score
//! file around it.

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod logger;
pub mod render;
pub mod scheduler;
pub mod store;
pub mod theme;
