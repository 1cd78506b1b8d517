//! The labeling session: everything the input handlers read and mutate.

use crate::api::SuperpixelRecord;
use crate::classes::LandClassTable;
use crate::config::AppConfig;
use crate::distance::DistanceMatrix;
use crate::error::SessionError;
use crate::state::{LayerSet, Superpixel, SyncedViews};
use crate::style::{FeatureStyle, feature_style};
use geo::{BoundingRect, Coord};
use tracing::{info, warn};

/// Where the "select next" driver rests between commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DriverState {
    #[default]
    Idle,
    /// The "no unassigned superpixels" notice is up; only a dismiss gets through.
    NoUnassignedWarning,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
    /// Loaded superpixels labeled with an id missing from the class table.
    pub unknown_class: usize,
}

#[derive(Debug, Clone)]
pub struct Session {
    scene_id: i64,
    classes: LandClassTable,
    superpixels: Vec<Superpixel>,
    /// `None` until the first load finishes; gates the finder and the driver.
    distances: Option<DistanceMatrix>,
    last_assigned: Option<i64>,
    /// Selected positions in the order they were selected.
    selection: Vec<usize>,
    driver: DriverState,
    layers: LayerSet,
    views: SyncedViews,
}

impl Session {
    pub fn new(scene_id: i64, classes: LandClassTable, layers: LayerSet, views: SyncedViews) -> Self {
        Self {
            scene_id,
            classes,
            superpixels: Vec::new(),
            distances: None,
            last_assigned: None,
            selection: Vec::new(),
            driver: DriverState::Idle,
            layers,
            views,
        }
    }

    pub fn from_config(config: &AppConfig, classes: LandClassTable) -> Self {
        Self::new(
            config.scene.scene_id,
            classes,
            LayerSet::new(&config.layers.auxiliary),
            SyncedViews::new(
                Coord { x: 0.0, y: 0.0 },
                config.view.initial_zoom,
                config.view.zoom_offset,
            ),
        )
    }

    /// Parse fetched records and load them. Records with unusable geometry are
    /// skipped and logged; the rest still load. A label the class table does
    /// not know is kept as-is and logged.
    pub fn load(&mut self, records: &[SuperpixelRecord]) -> LoadReport {
        let mut superpixels = Vec::with_capacity(records.len());
        let mut skipped = 0;
        let mut unknown_class = 0;
        for record in records {
            match Superpixel::from_record(record) {
                Ok(sp) => {
                    if let Some(class_id) = sp.land_class_id {
                        if self.classes.by_id(class_id).is_none() {
                            warn!("Superpixel {} has unknown land class {}", sp.id, class_id);
                            unknown_class += 1;
                        }
                    }
                    superpixels.push(sp);
                }
                Err(e) => {
                    warn!("Skipping superpixel: {e}");
                    skipped += 1;
                }
            }
        }
        let loaded = superpixels.len();
        self.load_superpixels(superpixels);
        LoadReport {
            loaded,
            skipped,
            unknown_class,
        }
    }

    /// Replace the superpixel set and rebuild the distance matrix.
    ///
    /// The selection and any open notice are dropped. The last-assigned
    /// pointer survives; if its id is gone the next "select next" falls back
    /// to list order.
    pub fn load_superpixels(&mut self, superpixels: Vec<Superpixel>) {
        let distances = DistanceMatrix::build(&superpixels);
        if let Some(center) = extent_center(&superpixels) {
            self.views.recenter(center);
        }
        self.superpixels = superpixels;
        self.distances = Some(distances);
        self.selection.clear();
        self.driver = DriverState::Idle;
        info!(
            "Loaded {} superpixels ({} unassigned)",
            self.superpixels.len(),
            crate::nearest::count_unassigned(&self.superpixels)
        );
    }

    pub fn is_initialized(&self) -> bool {
        self.distances.is_some()
    }

    pub fn distances(&self) -> Result<&DistanceMatrix, SessionError> {
        self.distances.as_ref().ok_or(SessionError::NotInitialized)
    }

    pub fn scene_id(&self) -> i64 {
        self.scene_id
    }

    pub fn classes(&self) -> &LandClassTable {
        &self.classes
    }

    pub fn superpixels(&self) -> &[Superpixel] {
        &self.superpixels
    }

    pub fn superpixel(&self, position: usize) -> Option<&Superpixel> {
        self.superpixels.get(position)
    }

    pub fn position_of(&self, id: i64) -> Option<usize> {
        self.superpixels.iter().position(|sp| sp.id == id)
    }

    pub fn last_assigned(&self) -> Option<i64> {
        self.last_assigned
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn selected_ids(&self) -> Vec<i64> {
        self.selection
            .iter()
            .filter_map(|&i| self.superpixels.get(i).map(|sp| sp.id))
            .collect()
    }

    pub fn driver_state(&self) -> DriverState {
        self.driver
    }

    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    pub fn views(&self) -> &SyncedViews {
        &self.views
    }

    /// Style for the superpixel at `position`, or `None` if out of range.
    pub fn style_of(&self, position: usize) -> Option<FeatureStyle> {
        let sp = self.superpixels.get(position)?;
        Some(feature_style(
            sp.color.as_deref(),
            self.selection.contains(&position),
        ))
    }

    pub(crate) fn superpixels_mut(&mut self) -> &mut [Superpixel] {
        &mut self.superpixels
    }

    pub(crate) fn selection_mut(&mut self) -> &mut Vec<usize> {
        &mut self.selection
    }

    pub(crate) fn set_last_assigned(&mut self, id: i64) {
        self.last_assigned = Some(id);
    }

    pub(crate) fn set_driver_state(&mut self, state: DriverState) {
        self.driver = state;
    }

    pub(crate) fn layers_mut(&mut self) -> &mut LayerSet {
        &mut self.layers
    }

    pub(crate) fn views_mut(&mut self) -> &mut SyncedViews {
        &mut self.views
    }
}

/// Centre of the combined extent of all superpixels.
fn extent_center(superpixels: &[Superpixel]) -> Option<Coord<f64>> {
    let mut rects = superpixels.iter().filter_map(|sp| sp.geometry.bounding_rect());
    let first = rects.next()?;
    let (min, max) = rects.fold((first.min(), first.max()), |(min, max), r| {
        (
            Coord {
                x: min.x.min(r.min().x),
                y: min.y.min(r.min().y),
            },
            Coord {
                x: max.x.max(r.max().x),
                y: max.y.max(r.max().y),
            },
        )
    });
    Some(Coord {
        x: (min.x + max.x) / 2.0,
        y: (min.y + max.y) / 2.0,
    })
}
