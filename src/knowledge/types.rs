//! Lookup axes and reference records for the knowledge base.
//!
//! Every axis the wizard indexes by is a closed enum. String forms exist only
//! at the edges (HTTP paths, JSON bodies) and are parsed through `FromStr`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Irrigation scale. Selects an independent set of tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Commercial / field irrigation
    Large,
    /// Garden / plot irrigation
    Small,
}

impl ScaleMode {
    pub const ALL: [ScaleMode; 2] = [ScaleMode::Large, ScaleMode::Small];

    /// Short key used in page identifiers and URLs
    pub fn key(&self) -> &'static str {
        match self {
            ScaleMode::Large => "large",
            ScaleMode::Small => "small",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScaleMode::Large => "Large Scale",
            ScaleMode::Small => "Small Scale",
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScaleMode {
    type Err = KnowledgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "large" => Ok(ScaleMode::Large),
            "small" => Ok(ScaleMode::Small),
            _ => Err(KnowledgeError::unknown("scale", s)),
        }
    }
}

/// Cropping season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Monsoon sowing (June-October)
    Kharif,
    /// Winter sowing (October-March)
    Rabi,
    /// Zaid / summer window
    Summer,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Summer];

    pub fn display_name(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Summer => "Summer",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Season {
    type Err = KnowledgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kharif" => Ok(Season::Kharif),
            "rabi" => Ok(Season::Rabi),
            "summer" => Ok(Season::Summer),
            _ => Err(KnowledgeError::unknown("season", s)),
        }
    }
}

/// Soil category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Alluvial,
    Black,
    Red,
    Sandy,
    Loamy,
}

impl SoilType {
    pub const ALL: [SoilType; 5] = [
        SoilType::Alluvial,
        SoilType::Black,
        SoilType::Red,
        SoilType::Sandy,
        SoilType::Loamy,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "Alluvial",
            SoilType::Black => "Black",
            SoilType::Red => "Red",
            SoilType::Sandy => "Sandy",
            SoilType::Loamy => "Loamy",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SoilType {
    type Err = KnowledgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alluvial" => Ok(SoilType::Alluvial),
            "black" => Ok(SoilType::Black),
            "red" => Ok(SoilType::Red),
            "sandy" => Ok(SoilType::Sandy),
            "loamy" => Ok(SoilType::Loamy),
            _ => Err(KnowledgeError::unknown("soil", s)),
        }
    }
}

/// Irrigation method key. Each method belongs to exactly one scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationMethod {
    Canal,
    #[serde(rename = "tubewell")]
    TubeWell,
    Dam,
    #[serde(rename = "riverlift")]
    RiverLift,
    #[serde(rename = "home")]
    HomeGarden,
    Drip,
    #[serde(rename = "limited")]
    LimitedWater,
    Sprinkler,
    #[serde(rename = "wells")]
    WellsAndBore,
    #[serde(rename = "rainwater")]
    RainwaterHarvesting,
}

impl IrrigationMethod {
    pub const LARGE: [IrrigationMethod; 4] = [
        IrrigationMethod::Canal,
        IrrigationMethod::TubeWell,
        IrrigationMethod::Dam,
        IrrigationMethod::RiverLift,
    ];

    pub const SMALL: [IrrigationMethod; 6] = [
        IrrigationMethod::HomeGarden,
        IrrigationMethod::Drip,
        IrrigationMethod::LimitedWater,
        IrrigationMethod::Sprinkler,
        IrrigationMethod::WellsAndBore,
        IrrigationMethod::RainwaterHarvesting,
    ];

    /// Methods offered for a scale, in presentation order
    pub fn for_scale(scale: ScaleMode) -> &'static [IrrigationMethod] {
        match scale {
            ScaleMode::Large => &Self::LARGE,
            ScaleMode::Small => &Self::SMALL,
        }
    }

    pub fn scale(&self) -> ScaleMode {
        match self {
            IrrigationMethod::Canal
            | IrrigationMethod::TubeWell
            | IrrigationMethod::Dam
            | IrrigationMethod::RiverLift => ScaleMode::Large,
            _ => ScaleMode::Small,
        }
    }

    /// Wire key (matches the serde representation)
    pub fn key(&self) -> &'static str {
        match self {
            IrrigationMethod::Canal => "canal",
            IrrigationMethod::TubeWell => "tubewell",
            IrrigationMethod::Dam => "dam",
            IrrigationMethod::RiverLift => "riverlift",
            IrrigationMethod::HomeGarden => "home",
            IrrigationMethod::Drip => "drip",
            IrrigationMethod::LimitedWater => "limited",
            IrrigationMethod::Sprinkler => "sprinkler",
            IrrigationMethod::WellsAndBore => "wells",
            IrrigationMethod::RainwaterHarvesting => "rainwater",
        }
    }
}

impl fmt::Display for IrrigationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for IrrigationMethod {
    type Err = KnowledgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        IrrigationMethod::LARGE
            .iter()
            .chain(IrrigationMethod::SMALL.iter())
            .copied()
            .find(|m| m.key() == wanted)
            .ok_or_else(|| KnowledgeError::unknown("irrigation method", s))
    }
}

/// Description of one irrigation method
#[derive(Debug, Clone, Serialize)]
pub struct IrrigationMethodProfile {
    pub method: IrrigationMethod,
    pub display_name: &'static str,
    pub description: &'static str,
}

/// Agronomic fact sheet for one crop under one scale
#[derive(Debug, Clone, Serialize)]
pub struct CropProfile {
    /// Name as it appears in recommendation lists
    #[serde(skip)]
    pub key: &'static str,
    pub display_name: &'static str,
    pub overview: &'static str,
    pub climate: &'static str,
    pub soil: &'static str,
    pub npk_ratio: &'static str,
    pub irrigation_steps: &'static [&'static str],
    pub pest_notes: &'static [&'static str],
}

/// Crops and advisory tips for one (scale, season, soil) cell
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub crops: &'static [&'static str],
    pub tips: &'static [&'static str],
}

/// Lookup failures. A miss on a value drawn from the wizard's own option
/// lists means the tables are out of sync.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnowledgeError {
    #[error("no recommendation for {scale} scale, {season} season, {soil} soil")]
    RecommendationNotFound {
        scale: ScaleMode,
        season: Season,
        soil: SoilType,
    },

    #[error("no {scale} scale crop profile named '{name}'")]
    CropNotFound { scale: ScaleMode, name: String },

    #[error("unknown {kind} '{value}'")]
    UnknownKey { kind: &'static str, value: String },
}

impl KnowledgeError {
    fn unknown(kind: &'static str, value: &str) -> Self {
        KnowledgeError::UnknownKey {
            kind,
            value: value.to_string(),
        }
    }

    /// True for table misses (as opposed to unparseable input)
    pub fn is_integrity_defect(&self) -> bool {
        !matches!(self, KnowledgeError::UnknownKey { .. })
    }
}
