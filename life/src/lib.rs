//! Conway's Game of Life on an unbounded plane.
//!
//! The [`Grid`] stores only live cells, so patterns may wander anywhere in
//! `i32` space. Supporting modules provide starting patterns, cycle
//! detection, seeded random fills and the viewer's configuration.

pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod seed;

pub use config::LifeConfig;
pub use error::{ConfigError, PatternError};
pub use grid::{Bounds, Cell, Grid};
pub use history::CycleDetector;
pub use patterns::{PATTERNS, Pattern};
