//! Indexed, read-only view over the static tables.
//!
//! Built once at process start and shared (the server wraps it in an `Arc`).

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use std::fmt;

use super::crop_profiles::{LARGE_CROPS, SMALL_CROPS};
use super::irrigation_methods::{method_profile, methods_for};
use super::recommendations::{LARGE_TABLE, SMALL_TABLE};
use super::types::{
    CropProfile, IrrigationMethod, IrrigationMethodProfile, KnowledgeError, Recommendation,
    ScaleMode, Season, SoilType,
};

/// A crop name that has been resolved against one scale's crop table.
///
/// Only `KnowledgeBase::crop_name` constructs these, so holding one proves the
/// profile exists.
#[derive(Clone, Copy)]
pub struct CropName {
    scale: ScaleMode,
    profile: &'static CropProfile,
}

impl CropName {
    pub fn scale(&self) -> ScaleMode {
        self.scale
    }

    /// Spelling used by the recommendation tables
    pub fn as_str(&self) -> &'static str {
        self.profile.key
    }

    pub fn profile(&self) -> &'static CropProfile {
        self.profile
    }
}

impl PartialEq for CropName {
    fn eq(&self, other: &Self) -> bool {
        self.scale == other.scale && self.profile.key == other.profile.key
    }
}

impl Eq for CropName {}

impl fmt::Debug for CropName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CropName({}/{})", self.scale, self.profile.key)
    }
}

impl fmt::Display for CropName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile.key)
    }
}

impl Serialize for CropName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.profile.key)
    }
}

/// Crop table keys use underscores where the recommendation lists use spaces
/// ("Bottle_Gourd" vs "Bottle Gourd"); both spellings resolve.
fn normalize_crop_name(name: &str) -> String {
    name.trim().replace('_', " ").to_lowercase()
}

fn crops_for(scale: ScaleMode) -> &'static [CropProfile] {
    match scale {
        ScaleMode::Large => LARGE_CROPS,
        ScaleMode::Small => SMALL_CROPS,
    }
}

fn table_for(scale: ScaleMode) -> &'static [(Season, SoilType, Recommendation)] {
    match scale {
        ScaleMode::Large => LARGE_TABLE,
        ScaleMode::Small => SMALL_TABLE,
    }
}

pub struct KnowledgeBase {
    crops: FxHashMap<(ScaleMode, String), &'static CropProfile>,
    recommendations: FxHashMap<(ScaleMode, Season, SoilType), &'static Recommendation>,
}

impl KnowledgeBase {
    /// Index the embedded tables and log any cross-table inconsistencies.
    pub fn load() -> Self {
        let mut crops = FxHashMap::default();
        let mut recommendations = FxHashMap::default();

        for scale in ScaleMode::ALL {
            for profile in crops_for(scale) {
                crops.insert((scale, normalize_crop_name(profile.key)), profile);
            }
            for (season, soil, rec) in table_for(scale) {
                recommendations.insert((scale, *season, *soil), rec);
            }
        }

        let kb = Self { crops, recommendations };

        let defects = kb.integrity_report();
        for defect in &defects {
            tracing::warn!("Knowledge base inconsistency: {}", defect);
        }
        tracing::info!(
            "Loaded knowledge base: {} crop profiles, {} recommendation cells, {} inconsistencies",
            kb.crops.len(),
            kb.recommendations.len(),
            defects.len()
        );

        kb
    }

    /// Irrigation methods offered at a scale, in presentation order
    pub fn methods(&self, scale: ScaleMode) -> &'static [IrrigationMethodProfile] {
        methods_for(scale)
    }

    pub fn method(&self, method: IrrigationMethod) -> &'static IrrigationMethodProfile {
        method_profile(method)
    }

    /// Crops and tips for one (scale, season, soil) cell
    pub fn resolve_recommendation(
        &self,
        scale: ScaleMode,
        season: Season,
        soil: SoilType,
    ) -> Result<&'static Recommendation, KnowledgeError> {
        self.recommendations
            .get(&(scale, season, soil))
            .copied()
            .ok_or(KnowledgeError::RecommendationNotFound { scale, season, soil })
    }

    /// Validate a crop name against a scale's crop table
    pub fn crop_name(&self, scale: ScaleMode, name: &str) -> Result<CropName, KnowledgeError> {
        self.crops
            .get(&(scale, normalize_crop_name(name)))
            .map(|profile| CropName { scale, profile })
            .ok_or_else(|| KnowledgeError::CropNotFound {
                scale,
                name: name.to_string(),
            })
    }

    pub fn resolve_crop_detail(
        &self,
        scale: ScaleMode,
        name: &str,
    ) -> Result<&'static CropProfile, KnowledgeError> {
        self.crop_name(scale, name).map(|crop| crop.profile())
    }

    /// Every missing recommendation cell and every recommended crop without a
    /// profile. Empty when the tables are in sync.
    pub fn integrity_report(&self) -> Vec<KnowledgeError> {
        let mut defects = Vec::new();

        for scale in ScaleMode::ALL {
            for season in Season::ALL {
                for soil in SoilType::ALL {
                    match self.resolve_recommendation(scale, season, soil) {
                        Ok(rec) => {
                            for name in rec.crops {
                                if let Err(e) = self.crop_name(scale, name) {
                                    if !defects.contains(&e) {
                                        defects.push(e);
                                    }
                                }
                            }
                        }
                        Err(e) => defects.push(e),
                    }
                }
            }
        }

        defects
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::load()
    }
}
