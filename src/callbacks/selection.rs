//! Selection handlers.
//!
//! Handles: select next unassigned, select one, add to selection, select at a
//! map coordinate, deselect all, dismiss the "no unassigned" notice.

use crate::error::SessionError;
use crate::nearest::{count_unassigned, find_nearest_unassigned, first_unassigned};
use crate::renderer::{MapRenderer, Notice, SelectionChanged};
use crate::state::{DriverState, Session};
use geo::{Coord, Intersects, Point};
use tracing::{debug, info};

/// Move the selection to the next superpixel that still needs a label.
///
/// With nothing unassigned the "no unassigned" notice goes up and the
/// selection is left alone. Before anything was assigned in this session the
/// first unassigned superpixel in list order is picked; after that, the one
/// closest to the last assignment. If the nearest search comes up empty while
/// unassigned superpixels remain, list order is used instead.
///
/// Returns the selected position, or `None` when the notice was raised.
pub fn select_next(
    session: &mut Session,
    renderer: &mut dyn MapRenderer,
) -> Result<Option<usize>, SessionError> {
    let distances = session.distances()?;

    if count_unassigned(session.superpixels()) == 0 {
        info!("No unassigned superpixels left");
        session.set_driver_state(DriverState::NoUnassignedWarning);
        renderer.show_notice(Notice::NoUnassigned);
        return Ok(None);
    }

    let target = session
        .last_assigned()
        .and_then(|reference| find_nearest_unassigned(session.superpixels(), reference, distances))
        .or_else(|| first_unassigned(session.superpixels()));

    let Some(position) = target else {
        return Ok(None);
    };
    select_only(session, position, renderer);
    Ok(Some(position))
}

/// Replace the selection with the superpixel at `position` and recentre the
/// views on it. Out-of-range positions are ignored.
pub fn select_only(session: &mut Session, position: usize, renderer: &mut dyn MapRenderer) {
    let Some(sp) = session.superpixel(position) else {
        return;
    };
    let change = SelectionChanged {
        id: sp.id,
        position,
        center: sp.center(),
    };

    let selection = session.selection_mut();
    selection.clear();
    selection.push(position);

    let views = session.views_mut();
    views.recenter(change.center);
    let (sentinel, satellite) = (views.sentinel(), views.satellite());

    debug!("Selected superpixel {} at position {}", change.id, position);
    renderer.selection_changed(&change);
    renderer.views_changed(sentinel, satellite);
}

/// Add a superpixel to the selection without dropping the others. Used by
/// multi-select backends; assignment walks the selection in this order.
pub fn add_to_selection(session: &mut Session, position: usize) -> bool {
    if position >= session.superpixels().len() || session.selection().contains(&position) {
        return false;
    }
    session.selection_mut().push(position);
    true
}

/// Hit-test a map coordinate. Later superpixels win, matching draw order.
///
/// Clicks are dropped while the "no unassigned" notice is open.
pub fn select_at(
    session: &mut Session,
    coord: Coord<f64>,
    renderer: &mut dyn MapRenderer,
) -> Option<usize> {
    if session.driver_state() == DriverState::NoUnassignedWarning {
        debug!("Notice open, ignoring click");
        return None;
    }
    let point = Point::from(coord);
    let hit = session
        .superpixels()
        .iter()
        .rposition(|sp| sp.geometry.intersects(&point));
    match hit {
        Some(position) => select_only(session, position, renderer),
        None => deselect_all(session, renderer),
    }
    hit
}

pub fn deselect_all(session: &mut Session, renderer: &mut dyn MapRenderer) {
    if session.selection().is_empty() {
        return;
    }
    session.selection_mut().clear();
    renderer.selection_cleared();
}

pub fn dismiss_notice(session: &mut Session, renderer: &mut dyn MapRenderer) {
    if session.driver_state() == DriverState::NoUnassignedWarning {
        session.set_driver_state(DriverState::Idle);
        renderer.dismiss_notice();
    }
}
