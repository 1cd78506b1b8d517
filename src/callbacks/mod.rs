//! Handlers run against a [`Session`](crate::state::Session) in response to
//! operator input.
//!
//! - `selection` - select next unassigned, click selection, notice dismissal
//! - `annotation` - land-class assignment and push
//! - `layers` - basemap and auxiliary layer toggles
//! - `navigation` - view synchronisation

pub mod annotation;
pub mod layers;
pub mod navigation;
pub mod selection;
