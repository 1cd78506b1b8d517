use thiserror::Error;

/// Errors raised while talking to the superpixel endpoints.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// A fetched record whose geometry could not be turned into a polygon.
#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("superpixel {id}: invalid GeoJSON geometry: {source}")]
    Parse {
        id: i64,
        #[source]
        source: geojson::Error,
    },

    #[error("superpixel {id}: geometry has no extent")]
    Empty { id: i64 },
}

/// Problems found while loading or validating the land-class table.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClassTableError {
    #[error("read error {path}: {message}")]
    Read { path: String, message: String },

    #[error("yaml parse error: {0}")]
    Parse(String),

    #[error("land class table is empty")]
    Empty,

    #[error("key {0} is outside 1..=9")]
    KeyOutOfRange(u8),

    #[error("key {0} is bound to more than one land class")]
    DuplicateKey(u8),

    #[error("land class id {0} is defined more than once")]
    DuplicateId(i64),

    #[error("land class {id} has invalid color {color:?}")]
    InvalidColor { id: i64, color: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("superpixels have not been loaded yet")]
    NotInitialized,
}
