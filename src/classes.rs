use crate::error::ClassTableError;
use crate::utils::parse_color;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// A land class bound to one of the number keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandClass {
    pub key: u8,
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub color: String,
}

/// Validated key → land class lookup. Keys and ids are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandClassTable {
    classes: Vec<LandClass>,
}

impl LandClassTable {
    pub fn new(classes: Vec<LandClass>) -> Result<Self, ClassTableError> {
        if classes.is_empty() {
            return Err(ClassTableError::Empty);
        }
        let mut keys = HashSet::new();
        let mut ids = HashSet::new();
        for class in &classes {
            if !(1..=9).contains(&class.key) {
                return Err(ClassTableError::KeyOutOfRange(class.key));
            }
            if !keys.insert(class.key) {
                return Err(ClassTableError::DuplicateKey(class.key));
            }
            if !ids.insert(class.id) {
                return Err(ClassTableError::DuplicateId(class.id));
            }
            if parse_color(&class.color).is_none() {
                return Err(ClassTableError::InvalidColor {
                    id: class.id,
                    color: class.color.clone(),
                });
            }
        }
        Ok(Self { classes })
    }

    pub fn by_key(&self, key: u8) -> Option<&LandClass> {
        self.classes.iter().find(|c| c.key == key)
    }

    pub fn by_id(&self, id: i64) -> Option<&LandClass> {
        self.classes.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LandClass> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

const BUNDLED_CLASSES: &str = include_str!("../land_classes.yaml");

/// Load the land-class table.
///
/// Search order:
///   1) explicit path (if provided)
///   2) ./land_classes.yaml
///   3) ~/.config/spmc-labeler/land_classes.yaml
///   4) the table bundled at compile time
pub fn load_classes(path: Option<&str>) -> Result<LandClassTable, ClassTableError> {
    let mut search_paths: Vec<String> = Vec::new();
    if let Some(p) = path {
        search_paths.push(p.to_string());
    }
    search_paths.push("./land_classes.yaml".to_string());
    search_paths.push("~/.config/spmc-labeler/land_classes.yaml".to_string());

    for candidate in search_paths {
        let expanded = shellexpand::tilde(&candidate);
        let path_obj = Path::new(expanded.as_ref());
        if !path_obj.exists() {
            continue;
        }

        match try_load_class_file(path_obj) {
            Ok(table) => {
                info!("Loaded {} land classes from {}", table.len(), path_obj.display());
                return Ok(table);
            }
            Err(e) => warn!("Failed to load land classes '{}': {}", path_obj.display(), e),
        }
    }

    parse_class_content(BUNDLED_CLASSES)
}

fn try_load_class_file(path: &Path) -> Result<LandClassTable, ClassTableError> {
    let content = std::fs::read_to_string(path).map_err(|e| ClassTableError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    parse_class_content(&content)
}

/// Parse and validate a YAML list of land classes.
pub fn parse_class_content(content: &str) -> Result<LandClassTable, ClassTableError> {
    let classes: Vec<LandClass> =
        serde_yaml::from_str(content).map_err(|e| ClassTableError::Parse(e.to_string()))?;
    LandClassTable::new(classes)
}
