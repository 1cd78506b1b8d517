//! Basemap and auxiliary layer toggles.

use crate::renderer::MapRenderer;
use crate::state::{Basemap, Session};

pub fn show_basemap(session: &mut Session, basemap: Basemap, renderer: &mut dyn MapRenderer) {
    let change = session.layers_mut().show_basemap(basemap);
    renderer.layer_visibility_changed(change);
}

/// Toggle the auxiliary layer bound to Ctrl+`slot`. Unbound slots do nothing.
pub fn toggle_auxiliary(session: &mut Session, slot: u8, renderer: &mut dyn MapRenderer) {
    if let Some(change) = session.layers_mut().toggle_auxiliary(slot) {
        renderer.layer_visibility_changed(change);
    }
}
