//! View models for the rendering boundary.
//!
//! One record per page kind. The host renders these; nothing here produces
//! markup.

use serde::Serialize;

use crate::knowledge::{
    CropProfile, IrrigationMethod, KnowledgeBase, KnowledgeError, ScaleMode, Season, SoilType,
};
use crate::session::Session;
use crate::view::PageId;
use crate::wizard::WizardState;

#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    pub key: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodSummary {
    pub method: IrrigationMethod,
    pub name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CropDetailView {
    pub name: &'static str,
    pub overview: &'static str,
    pub climate: &'static str,
    pub soil: &'static str,
    pub npk: &'static str,
    pub irrigation: &'static [&'static str],
    pub pests: &'static [&'static str],
}

impl From<&'static CropProfile> for CropDetailView {
    fn from(p: &'static CropProfile) -> Self {
        Self {
            name: p.display_name,
            overview: p.overview,
            climate: p.climate,
            soil: p.soil,
            npk: p.npk_ratio,
            irrigation: p.irrigation_steps,
            pests: p.pest_notes,
        }
    }
}

/// Content of the visible page
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    SignIn {
        error: Option<String>,
    },
    SignUp {
        error: Option<String>,
    },
    Entry {
        scales: Vec<Choice>,
    },
    ScaleOptions {
        scale: ScaleMode,
        methods: Vec<MethodSummary>,
    },
    ScaleDetail {
        scale: ScaleMode,
        method: IrrigationMethod,
        name: &'static str,
        description: &'static str,
    },
    SeasonStep {
        scale: ScaleMode,
        seasons: Vec<Choice>,
        selected: Option<Season>,
    },
    SoilStep {
        scale: ScaleMode,
        season: Season,
        soils: Vec<Choice>,
    },
    Results {
        scale: ScaleMode,
        summary: String,
        crops: &'static [&'static str],
        tips: &'static [&'static str],
    },
    CropDetail(CropDetailView),
}

/// Results heading; the two scales word it differently
pub fn selection_summary(scale: ScaleMode, season: Season, soil: SoilType) -> String {
    match scale {
        ScaleMode::Large => format!("{} season & {} soil", season, soil),
        ScaleMode::Small => format!("{} season on {} soil", season, soil),
    }
}

impl PageView {
    /// Project a session onto the view model for its visible page
    pub fn build(session: &Session, kb: &KnowledgeBase) -> Result<PageView, KnowledgeError> {
        if session.user().is_none() {
            let error = session.notice().map(|n| n.message.clone());
            return Ok(match session.page() {
                PageId::SignUp => PageView::SignUp { error },
                _ => PageView::SignIn { error },
            });
        }

        let view = match session.state() {
            WizardState::Entry => PageView::Entry {
                scales: ScaleMode::ALL
                    .iter()
                    .map(|s| Choice {
                        key: s.key().to_string(),
                        label: s.display_name(),
                    })
                    .collect(),
            },
            WizardState::ScaleOptions { scale } => PageView::ScaleOptions {
                scale,
                methods: kb
                    .methods(scale)
                    .iter()
                    .map(|p| MethodSummary {
                        method: p.method,
                        name: p.display_name,
                    })
                    .collect(),
            },
            WizardState::MethodDetail { scale, method } => {
                let profile = kb.method(method);
                PageView::ScaleDetail {
                    scale,
                    method,
                    name: profile.display_name,
                    description: profile.description,
                }
            }
            WizardState::AwaitingSeason { scale } => PageView::SeasonStep {
                scale,
                seasons: Season::ALL
                    .iter()
                    .map(|s| Choice {
                        key: s.display_name().to_string(),
                        label: s.display_name(),
                    })
                    .collect(),
                selected: session.wizard().selection(scale).season(),
            },
            WizardState::AwaitingSoil { scale, season } => PageView::SoilStep {
                scale,
                season,
                soils: SoilType::ALL
                    .iter()
                    .map(|s| Choice {
                        key: s.display_name().to_string(),
                        label: s.display_name(),
                    })
                    .collect(),
            },
            WizardState::ShowingResults { scale, season, soil } => {
                let rec = kb.resolve_recommendation(scale, season, soil)?;
                PageView::Results {
                    scale,
                    summary: selection_summary(scale, season, soil),
                    crops: rec.crops,
                    tips: rec.tips,
                }
            }
            WizardState::ShowingCropDetail { crop, .. } => PageView::CropDetail(crop.profile().into()),
        };
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_wording_per_scale() {
        assert_eq!(
            selection_summary(ScaleMode::Large, Season::Kharif, SoilType::Black),
            "Kharif season & Black soil"
        );
        assert_eq!(
            selection_summary(ScaleMode::Small, Season::Rabi, SoilType::Red),
            "Rabi season on Red soil"
        );
    }

    #[test]
    fn test_signed_out_session_renders_sign_in() {
        let kb = KnowledgeBase::load();
        let session = Session::new();
        let json = serde_json::to_value(PageView::build(&session, &kb).unwrap()).unwrap();
        assert_eq!(json["page"], "sign_in");
        assert!(json["error"].is_null());
    }

    #[test]
    fn test_crop_detail_serializes_flat() {
        let kb = KnowledgeBase::load();
        let profile = kb.resolve_crop_detail(ScaleMode::Large, "Cotton").unwrap();
        let json = serde_json::to_value(PageView::CropDetail(profile.into())).unwrap();
        assert_eq!(json["page"], "crop_detail");
        assert_eq!(json["npk"], "NPK 150:75:75 kg/ha");
        assert_eq!(json["pests"][0], "Bollworms, sucking pests");
    }
}
