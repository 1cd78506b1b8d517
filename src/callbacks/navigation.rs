//! View navigation: keep the sentinel and satellite views in step.

use crate::renderer::MapRenderer;
use crate::state::{Session, ViewState, Viewport};

/// A view finished panning or zooming; mirror it onto the other one.
pub fn view_moved(
    session: &mut Session,
    viewport: Viewport,
    state: ViewState,
    renderer: &mut dyn MapRenderer,
) {
    let views = session.views_mut();
    views.moved(viewport, state);
    renderer.views_changed(views.sentinel(), views.satellite());
}
