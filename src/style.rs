//! Per-feature style handed to the map renderer.

use crate::utils::{Rgba, hex_to_rgba};

const FILL_ALPHA: f32 = 0.5;
const SELECTED_Z_INDEX: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStyle {
    pub fill: Rgba,
    pub stroke: Rgba,
    pub stroke_width: f32,
    pub z_index: i32,
}

/// Style for one superpixel given its label colour and selection state.
///
/// Unlabeled superpixels get a transparent fill; a colour that fails to parse
/// is treated the same way. Selected superpixels are outlined in white and
/// drawn above the rest.
pub fn feature_style(color: Option<&str>, selected: bool) -> FeatureStyle {
    let fill = color
        .and_then(|c| hex_to_rgba(c, FILL_ALPHA))
        .unwrap_or(Rgba::TRANSPARENT);
    if selected {
        return FeatureStyle {
            fill,
            stroke: Rgba::WHITE,
            stroke_width: 1.0,
            z_index: SELECTED_Z_INDEX,
        };
    }
    let stroke = color
        .and_then(|c| hex_to_rgba(c, 1.0))
        .unwrap_or(Rgba::TRANSPARENT);
    FeatureStyle {
        fill,
        stroke,
        stroke_width: 1.0,
        z_index: 0,
    }
}
