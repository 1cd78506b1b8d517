//! The seam to the mapping library that draws the views.

use crate::state::{LayerChange, ViewState};
use crate::style::FeatureStyle;
use geo::Coord;

/// Emitted when "select next" or a click replaces the selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionChanged {
    pub id: i64,
    /// Position in the session's superpixel list.
    pub position: usize,
    /// Bounding-box centre the views were recentred on.
    pub center: Coord<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Every superpixel already carries a land class.
    NoUnassigned,
}

/// Implemented by whatever renders the sentinel and satellite views.
///
/// Only `selection_changed` and `show_notice` are required; the rest default
/// to no-ops for renderers that poll session state instead.
pub trait MapRenderer {
    fn selection_changed(&mut self, change: &SelectionChanged);

    fn show_notice(&mut self, notice: Notice);

    fn dismiss_notice(&mut self) {}

    fn selection_cleared(&mut self) {}

    fn feature_restyled(&mut self, _id: i64, _style: FeatureStyle) {}

    fn layer_visibility_changed(&mut self, _change: LayerChange) {}

    fn views_changed(&mut self, _sentinel: ViewState, _satellite: ViewState) {}
}
