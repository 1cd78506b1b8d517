//! Labeling session for server-side superpixels: load a scene's polygons,
//! select them (by click or "next nearest unassigned"), assign land classes
//! from the keyboard and push the assignments back.

pub mod api;
pub mod callbacks;
pub mod classes;
pub mod config;
pub mod distance;
pub mod error;
pub mod input;
pub mod nearest;
pub mod renderer;
pub mod state;
pub mod style;
pub mod utils;
