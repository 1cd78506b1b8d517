// Test helper functions for building sessions and observing their output
#![allow(dead_code)]

use geo::{Coord, Geometry, Rect};
use spmc_labeler::api::{LabelSink, UpdateBatch};
use spmc_labeler::classes::{LandClassTable, parse_class_content};
use spmc_labeler::config::AppConfig;
use spmc_labeler::error::ApiError;
use spmc_labeler::renderer::{MapRenderer, Notice, SelectionChanged};
use spmc_labeler::state::{LayerChange, Session, Superpixel, ViewState};
use spmc_labeler::style::FeatureStyle;
use std::cell::RefCell;

pub const SCENE_ID: i64 = 4;

/// Create a unit square superpixel centred on (x, y)
pub fn create_square(id: i64, x: f64, y: f64, land_class_id: Option<i64>) -> Superpixel {
    let rect = Rect::new(
        Coord { x: x - 0.5, y: y - 0.5 },
        Coord { x: x + 0.5, y: y + 0.5 },
    );
    let color = land_class_id.map(|_| "#a51d2d".to_string());
    Superpixel::new(id, Geometry::Polygon(rect.to_polygon()), land_class_id, color)
        .expect("square has an extent")
}

/// Land classes bound to keys 1-3
pub fn create_classes() -> LandClassTable {
    parse_class_content(
        "- {key: 1, id: 1, name: Built-up, color: '#a51d2d'}\n\
         - {key: 2, id: 2, name: Cropland, color: '#e5a50a'}\n\
         - {key: 3, id: 3, name: Water, color: '#1c71d8'}",
    )
    .expect("valid class table")
}

/// Create a session that has not loaded anything yet
pub fn create_empty_session() -> Session {
    let mut config = AppConfig::default();
    config.scene.scene_id = SCENE_ID;
    config.layers.auxiliary = vec![
        "https://tiles.example.org/ndvi/{z}/{x}/{y}.png".to_string(),
        "https://tiles.example.org/swir/{z}/{x}/{y}.png".to_string(),
    ];
    Session::from_config(&config, create_classes())
}

/// Create a loaded session
pub fn create_session(superpixels: Vec<Superpixel>) -> Session {
    let mut session = create_empty_session();
    session.load_superpixels(superpixels);
    session
}

/// A(0,0), B(1,0), C(5,0), all unassigned
pub fn create_abc_scene() -> Session {
    create_session(vec![
        create_square(100, 0.0, 0.0, None),
        create_square(200, 1.0, 0.0, None),
        create_square(300, 5.0, 0.0, None),
    ])
}

/// Records everything a map view is told
#[derive(Default)]
pub struct RecordingRenderer {
    pub selections: Vec<SelectionChanged>,
    pub notices: Vec<Notice>,
    pub dismissed: usize,
    pub cleared: usize,
    pub restyled: Vec<(i64, FeatureStyle)>,
    pub layers: Vec<LayerChange>,
    pub views: Vec<(ViewState, ViewState)>,
}

impl MapRenderer for RecordingRenderer {
    fn selection_changed(&mut self, change: &SelectionChanged) {
        self.selections.push(*change);
    }

    fn show_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn dismiss_notice(&mut self) {
        self.dismissed += 1;
    }

    fn selection_cleared(&mut self) {
        self.cleared += 1;
    }

    fn feature_restyled(&mut self, id: i64, style: FeatureStyle) {
        self.restyled.push((id, style));
    }

    fn layer_visibility_changed(&mut self, change: LayerChange) {
        self.layers.push(change);
    }

    fn views_changed(&mut self, sentinel: ViewState, satellite: ViewState) {
        self.views.push((sentinel, satellite));
    }
}

/// Keeps every pushed batch; optionally fails each push after recording it
#[derive(Default)]
pub struct RecordingSink {
    pub batches: RefCell<Vec<UpdateBatch>>,
    pub fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            batches: RefCell::default(),
            fail: true,
        }
    }

    pub fn pushed(&self) -> Vec<UpdateBatch> {
        self.batches.borrow().clone()
    }
}

impl LabelSink for RecordingSink {
    fn push(&self, batch: &UpdateBatch) -> Result<(), ApiError> {
        self.batches.borrow_mut().push(batch.clone());
        if self.fail {
            return Err(ApiError::Status {
                url: "http://localhost/api/superpixels/save_sp/".to_string(),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        Ok(())
    }
}

/// Position of a superpixel id in the session list
pub fn position(session: &Session, id: i64) -> usize {
    session.position_of(id).expect("id is loaded")
}
