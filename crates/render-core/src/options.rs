//! Construction options handed to an engine when a document is created.
use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineOptions {
    pub orientation: Orientation,
    pub unit: Unit,
    pub page_size: PageSize,
    pub unicode: bool,
    pub encoding: String,
    pub disk_cache: bool,
    pub pdfa: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            unit: Unit::Millimeters,
            page_size: PageSize::A4,
            unicode: true,
            encoding: "UTF8".to_string(),
            disk_cache: false,
            pdfa: false,
        }
    }
}

impl EngineOptions {
    /// Page width and height in points, with the orientation applied.
    pub fn page_dimensions_pt(&self) -> (f32, f32) {
        let (width, height) = self.page_size.dimensions_pt();
        match self.orientation {
            Orientation::Portrait => (width.min(height), width.max(height)),
            Orientation::Landscape => (width.max(height), width.min(height)),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    #[serde(rename = "P", alias = "portrait")]
    Portrait,
    #[serde(rename = "L", alias = "landscape")]
    Landscape,
}

/// Measurement unit for every coordinate passed to an engine.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    #[serde(rename = "pt")]
    Points,
    #[default]
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "in")]
    Inches,
}

impl Unit {
    pub fn points_per_unit(&self) -> f32 {
        match self {
            Unit::Points => 1.0,
            Unit::Millimeters => 72.0 / 25.4,
            Unit::Centimeters => 72.0 / 2.54,
            Unit::Inches => 72.0,
        }
    }

    pub fn to_pt(&self, value: f32) -> f32 {
        value * self.points_per_unit()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl Eq for PageSize {}

impl Hash for PageSize {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            PageSize::A3 => 0u8.hash(state),
            PageSize::A4 => 1u8.hash(state),
            PageSize::A5 => 2u8.hash(state),
            PageSize::Letter => 3u8.hash(state),
            PageSize::Legal => 4u8.hash(state),
            PageSize::Custom { width, height } => {
                5u8.hash(state);
                width.to_bits().hash(state);
                height.to_bits().hash(state);
            }
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A3 => serializer.serialize_str("A3"),
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::A5 => serializer.serialize_str("A5"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A3 => (841.89, 1190.55),
            PageSize::A4 => (595.28, 841.89),
            PageSize::A5 => (419.53, 595.28),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    /// Parse a page size name (e.g., "A4", "Letter", "Legal")
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "a3" => Ok(PageSize::A3),
            "a4" => Ok(PageSize::A4),
            "a5" => Ok(PageSize::A5),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}
