//! Land-class assignment.

use crate::api::{LabelSink, UpdateBatch, UpdateRecord};
use crate::classes::LandClass;
use crate::renderer::MapRenderer;
use crate::state::Session;
use crate::style::feature_style;
use tracing::{info, warn};

/// Label every selected superpixel with `class`.
///
/// Local state changes right away and is never rolled back: a failed push is
/// only logged. The selection is walked in the order it was built, so the
/// last-assigned pointer ends on the most recently selected superpixel. An
/// empty selection does nothing.
///
/// Returns the batch handed to the sink.
pub fn assign_class(
    session: &mut Session,
    class: &LandClass,
    renderer: &mut dyn MapRenderer,
    sink: &dyn LabelSink,
) -> UpdateBatch {
    let selection = std::mem::take(session.selection_mut());
    if selection.is_empty() {
        return UpdateBatch::default();
    }

    let scene_id = session.scene_id();
    let mut batch = UpdateBatch::default();
    for position in selection {
        let Some(sp) = session.superpixels_mut().get_mut(position) else {
            continue;
        };
        sp.assign(class.id, &class.color);
        let id = sp.id;
        batch.upd.push(UpdateRecord {
            superpixel_id: id,
            class_id: class.id,
            scene_id,
        });
        session.set_last_assigned(id);
        renderer.feature_restyled(id, feature_style(Some(class.color.as_str()), false));
    }
    renderer.selection_cleared();

    info!(
        "Assigned land class {} to {} superpixel(s)",
        class.id,
        batch.len()
    );
    if let Err(e) = sink.push(&batch) {
        warn!("Failed to push assignment: {e}");
    }
    batch
}
