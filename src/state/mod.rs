//! State types for a labeling session.
//!
//! This module contains:
//! - Superpixels as loaded from the server
//! - The session context (selection, last assignment, driver state)
//! - Layer visibility and the synchronized view pair

mod layers;
mod session;
mod superpixel;
mod view;

pub use layers::*;
pub use session::*;
pub use superpixel::*;
pub use view::*;
