use crate::api::SuperpixelRecord;
use crate::error::GeometryError;
use geo::{BoundingRect, Coord, Geometry};

/// One server-provided polygon segment, the unit of labeling.
#[derive(Debug, Clone, PartialEq)]
pub struct Superpixel {
    pub id: i64,
    pub geometry: Geometry<f64>,
    pub land_class_id: Option<i64>,
    pub color: Option<String>,
    center: Coord<f64>,
}

impl Superpixel {
    /// Fails when the geometry has no bounding rectangle (e.g. an empty collection).
    pub fn new(
        id: i64,
        geometry: Geometry<f64>,
        land_class_id: Option<i64>,
        color: Option<String>,
    ) -> Result<Self, GeometryError> {
        let center = geometry
            .bounding_rect()
            .ok_or(GeometryError::Empty { id })?
            .center();
        Ok(Self {
            id,
            geometry,
            land_class_id,
            color,
            center,
        })
    }

    /// Build from a fetched record whose `features` field holds a GeoJSON geometry string.
    pub fn from_record(record: &SuperpixelRecord) -> Result<Self, GeometryError> {
        let id = record.id;
        let parsed: geojson::Geometry = record
            .features
            .parse()
            .map_err(|source| GeometryError::Parse { id, source })?;
        let geometry = Geometry::<f64>::try_from(parsed)
            .map_err(|source| GeometryError::Parse { id, source })?;
        Self::new(id, geometry, record.land_class_id, record.color.clone())
    }

    /// Centre of the axis-aligned bounding rectangle. This is what distances
    /// and view recentering use, not the area centroid.
    pub fn center(&self) -> Coord<f64> {
        self.center
    }

    pub fn is_assigned(&self) -> bool {
        self.land_class_id.is_some()
    }

    pub fn assign(&mut self, land_class_id: i64, color: &str) {
        self.land_class_id = Some(land_class_id);
        self.color = Some(color.to_string());
    }
}
