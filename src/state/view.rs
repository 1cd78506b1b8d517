use geo::Coord;

/// Centre and zoom of one map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub center: Coord<f64>,
    pub zoom: f64,
}

impl ViewState {
    fn sanitized(self) -> Self {
        let zoom = if self.zoom.is_finite() && self.zoom >= 0.0 {
            self.zoom
        } else {
            0.0
        };
        Self { zoom, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Sentinel,
    Satellite,
}

/// The sentinel and satellite views share a centre; the satellite view sits
/// `zoom_offset` levels closer in.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncedViews {
    sentinel: ViewState,
    satellite: ViewState,
    zoom_offset: f64,
}

impl SyncedViews {
    pub fn new(center: Coord<f64>, sentinel_zoom: f64, zoom_offset: f64) -> Self {
        let sentinel = ViewState {
            center,
            zoom: sentinel_zoom,
        }
        .sanitized();
        Self {
            sentinel,
            satellite: ViewState {
                center,
                zoom: sentinel.zoom + zoom_offset,
            },
            zoom_offset,
        }
    }

    pub fn sentinel(&self) -> ViewState {
        self.sentinel
    }

    pub fn satellite(&self) -> ViewState {
        self.satellite
    }

    /// Apply a pan/zoom reported by one view and mirror it onto the other.
    pub fn moved(&mut self, viewport: Viewport, state: ViewState) {
        let state = state.sanitized();
        match viewport {
            Viewport::Sentinel => {
                self.sentinel = state;
                self.satellite = ViewState {
                    center: state.center,
                    zoom: state.zoom + self.zoom_offset,
                };
            }
            Viewport::Satellite => {
                self.satellite = state;
                self.sentinel = ViewState {
                    center: state.center,
                    zoom: (state.zoom - self.zoom_offset).max(0.0),
                };
            }
        }
    }

    /// Move both views to `center`, keeping their zoom levels.
    pub fn recenter(&mut self, center: Coord<f64>) {
        self.sentinel.center = center;
        self.satellite.center = center;
    }
}
