//! Falling sand simulation engine.
//!
//! A [`Simulation`] owns a [`Grid`] of [`Cell`]s and advances it one tick at a
//! time with [`Simulation::update`]. Drivers feed it [`Command`]s between
//! ticks and pull frames out through a [`RenderSink`].

pub mod api;
pub mod cell;
pub mod config;
pub mod elements;
pub mod error;
pub mod grid;
pub mod input;
pub mod material;
pub mod render;
pub mod simulation;
pub mod wasm;

pub use cell::Cell;
pub use config::{parse_dimension, SimConfig, USAGE_EXIT_CODE};
pub use error::ConfigError;
pub use grid::Grid;
pub use input::{Command, Control, InputFrame};
pub use material::{Color, Material};
pub use render::RenderSink;
pub use simulation::Simulation;
pub use wasm::Universe;
