//! Static Knowledge Base
//!
//! Immutable reference data for the advisor:
//! - `irrigation_methods` - method descriptions by scale
//! - `crop_profiles` - agronomic fact sheets by scale and crop
//! - `recommendations` - (scale, season, soil) → crops + tips
//! - `base` - `KnowledgeBase`, the indexed lookup surface
//!
//! Nothing here is computed: the tables are enumerable data and lookups are
//! plain key resolution.

pub mod types;
pub mod irrigation_methods;
pub mod crop_profiles;
pub mod recommendations;
pub mod base;

pub use base::{CropName, KnowledgeBase};
pub use types::{
    CropProfile, IrrigationMethod, IrrigationMethodProfile, KnowledgeError, Recommendation,
    ScaleMode, Season, SoilType,
};
