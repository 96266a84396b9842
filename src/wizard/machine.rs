//! Selection State Machine
//!
//! ```text
//! Entry ─chooseScale→ ScaleOptions(m) ─chooseMethod→ MethodDetail(m, k) ─proceed→ AwaitingSeason
//!   AwaitingSeason ─selectSeason→ AwaitingSoil ─selectSoil→ ShowingResults ⇄ ShowingCropDetail
//! ```
//!
//! `back` undoes one step (soil before season); `return_to_entry` discards
//! the mode and both selection records. Transitions that do not apply to the
//! current state are rejected without touching anything.

use serde::{Deserialize, Serialize};

use super::selection::SelectionState;
use crate::knowledge::{
    CropName, CropProfile, IrrigationMethod, KnowledgeBase, KnowledgeError, Recommendation,
    ScaleMode, Season, SoilType,
};

/// User-driven wizard events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WizardEvent {
    ChooseScale { scale: ScaleMode },
    ChooseMethod { method: IrrigationMethod },
    Proceed,
    SelectSeason { season: Season },
    SelectSoil { soil: SoilType },
    OpenCropDetail { crop: String },
    Back,
    ReturnToEntry,
}

impl WizardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::ChooseScale { .. } => "choose_scale",
            WizardEvent::ChooseMethod { .. } => "choose_method",
            WizardEvent::Proceed => "proceed",
            WizardEvent::SelectSeason { .. } => "select_season",
            WizardEvent::SelectSoil { .. } => "select_soil",
            WizardEvent::OpenCropDetail { .. } => "open_crop_detail",
            WizardEvent::Back => "back",
            WizardEvent::ReturnToEntry => "return_to_entry",
        }
    }
}

/// Observable wizard state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WizardState {
    Entry,
    ScaleOptions {
        scale: ScaleMode,
    },
    MethodDetail {
        scale: ScaleMode,
        method: IrrigationMethod,
    },
    AwaitingSeason {
        scale: ScaleMode,
    },
    AwaitingSoil {
        scale: ScaleMode,
        season: Season,
    },
    ShowingResults {
        scale: ScaleMode,
        season: Season,
        soil: SoilType,
    },
    ShowingCropDetail {
        scale: ScaleMode,
        season: Season,
        soil: SoilType,
        crop: CropName,
    },
}

impl WizardState {
    pub fn name(&self) -> &'static str {
        match self {
            WizardState::Entry => "entry",
            WizardState::ScaleOptions { .. } => "scale_options",
            WizardState::MethodDetail { .. } => "method_detail",
            WizardState::AwaitingSeason { .. } => "awaiting_season",
            WizardState::AwaitingSoil { .. } => "awaiting_soil",
            WizardState::ShowingResults { .. } => "showing_results",
            WizardState::ShowingCropDetail { .. } => "showing_crop_detail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("cannot {event} from {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },

    #[error("{method} irrigation is not offered at {scale} scale")]
    MethodScaleMismatch {
        method: IrrigationMethod,
        scale: ScaleMode,
    },

    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlanningStep {
    Season,
    Soil,
    Results,
    CropDetail(CropName),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Entry,
    ScaleOptions(ScaleMode),
    MethodDetail(ScaleMode, IrrigationMethod),
    Planning { mode: ScaleMode, step: PlanningStep },
}

/// Wizard state for one session. Owns one `SelectionState` per scale.
#[derive(Debug, Clone)]
pub struct Wizard {
    stage: Stage,
    large: SelectionState,
    small: SelectionState,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            stage: Stage::Entry,
            large: SelectionState::default(),
            small: SelectionState::default(),
        }
    }

    /// Committed scale mode; `None` until the user proceeds past a method
    /// description.
    pub fn mode(&self) -> Option<ScaleMode> {
        match self.stage {
            Stage::Planning { mode, .. } => Some(mode),
            _ => None,
        }
    }

    pub fn selection(&self, scale: ScaleMode) -> &SelectionState {
        match scale {
            ScaleMode::Large => &self.large,
            ScaleMode::Small => &self.small,
        }
    }

    fn selection_mut(&mut self, scale: ScaleMode) -> &mut SelectionState {
        match scale {
            ScaleMode::Large => &mut self.large,
            ScaleMode::Small => &mut self.small,
        }
    }

    pub fn state(&self) -> WizardState {
        match self.stage {
            Stage::Entry => WizardState::Entry,
            Stage::ScaleOptions(scale) => WizardState::ScaleOptions { scale },
            Stage::MethodDetail(scale, method) => WizardState::MethodDetail { scale, method },
            Stage::Planning { mode: scale, step } => {
                let sel = self.selection(scale);
                match (step, sel.season(), sel.soil()) {
                    (PlanningStep::Soil, Some(season), _) => WizardState::AwaitingSoil { scale, season },
                    (PlanningStep::Results, Some(season), Some(soil)) => {
                        WizardState::ShowingResults { scale, season, soil }
                    }
                    (PlanningStep::CropDetail(crop), Some(season), Some(soil)) => {
                        WizardState::ShowingCropDetail { scale, season, soil, crop }
                    }
                    // Season step; the mutators never leave a later step without its fields
                    _ => WizardState::AwaitingSeason { scale },
                }
            }
        }
    }

    fn reject(&self, event: &'static str) -> WizardError {
        WizardError::InvalidTransition {
            state: self.state().name(),
            event,
        }
    }

    /// Dispatch an event to its transition
    pub fn apply(&mut self, kb: &KnowledgeBase, event: &WizardEvent) -> Result<WizardState, WizardError> {
        tracing::debug!("Wizard event {} in state {}", event.name(), self.state().name());
        match event {
            WizardEvent::ChooseScale { scale } => self.choose_scale(*scale)?,
            WizardEvent::ChooseMethod { method } => self.choose_method(*method)?,
            WizardEvent::Proceed => self.proceed()?,
            WizardEvent::SelectSeason { season } => self.select_season(*season)?,
            WizardEvent::SelectSoil { soil } => {
                self.select_soil(kb, *soil)?;
            }
            WizardEvent::OpenCropDetail { crop } => {
                self.open_crop_detail(kb, crop)?;
            }
            WizardEvent::Back => self.back()?,
            WizardEvent::ReturnToEntry => self.return_to_entry(),
        }
        Ok(self.state())
    }

    pub fn choose_scale(&mut self, scale: ScaleMode) -> Result<(), WizardError> {
        match self.stage {
            Stage::Entry => {
                self.stage = Stage::ScaleOptions(scale);
                Ok(())
            }
            _ => Err(self.reject("choose_scale")),
        }
    }

    /// Open a method description and remember the method for that scale
    pub fn choose_method(&mut self, method: IrrigationMethod) -> Result<(), WizardError> {
        let Stage::ScaleOptions(scale) = self.stage else {
            return Err(self.reject("choose_method"));
        };
        if method.scale() != scale {
            return Err(WizardError::MethodScaleMismatch { method, scale });
        }
        self.selection_mut(scale).set_irrigation_method(method);
        self.stage = Stage::MethodDetail(scale, method);
        Ok(())
    }

    /// Commit to the scale whose method description is showing
    pub fn proceed(&mut self) -> Result<(), WizardError> {
        let Stage::MethodDetail(scale, _) = self.stage else {
            return Err(self.reject("proceed"));
        };
        self.stage = Stage::Planning {
            mode: scale,
            step: PlanningStep::Season,
        };
        tracing::debug!("Scale mode committed: {}", scale);
        Ok(())
    }

    pub fn select_season(&mut self, season: Season) -> Result<(), WizardError> {
        match self.stage {
            Stage::Planning {
                mode,
                step: PlanningStep::Season,
            } => {
                self.selection_mut(mode).set_season(season);
                self.stage = Stage::Planning {
                    mode,
                    step: PlanningStep::Soil,
                };
                Ok(())
            }
            _ => Err(self.reject("select_season")),
        }
    }

    /// Record the soil and resolve the recommendation cell. A missing cell is
    /// logged as a data-integrity defect and leaves the state unchanged.
    pub fn select_soil(
        &mut self,
        kb: &KnowledgeBase,
        soil: SoilType,
    ) -> Result<&'static Recommendation, WizardError> {
        let (mode, season) = match self.state() {
            WizardState::AwaitingSoil { scale, season } => (scale, season),
            _ => return Err(self.reject("select_soil")),
        };

        let recommendation = kb.resolve_recommendation(mode, season, soil).map_err(|e| {
            tracing::error!("Data integrity defect: {}", e);
            e
        })?;

        self.selection_mut(mode).set_soil(soil);
        self.stage = Stage::Planning {
            mode,
            step: PlanningStep::Results,
        };
        Ok(recommendation)
    }

    /// Show a crop's fact sheet over the results. The selection is untouched.
    pub fn open_crop_detail(
        &mut self,
        kb: &KnowledgeBase,
        name: &str,
    ) -> Result<&'static CropProfile, WizardError> {
        let mode = match self.state() {
            WizardState::ShowingResults { scale, .. } => scale,
            _ => return Err(self.reject("open_crop_detail")),
        };

        let crop = kb.crop_name(mode, name).map_err(|e| {
            tracing::error!("Data integrity defect: {}", e);
            e
        })?;

        self.stage = Stage::Planning {
            mode,
            step: PlanningStep::CropDetail(crop),
        };
        Ok(crop.profile())
    }

    /// Single-step undo
    pub fn back(&mut self) -> Result<(), WizardError> {
        match self.stage {
            Stage::Entry => return Err(self.reject("back")),
            Stage::ScaleOptions(_) => self.stage = Stage::Entry,
            Stage::MethodDetail(scale, _) => self.stage = Stage::ScaleOptions(scale),
            Stage::Planning { mode, step } => match step {
                PlanningStep::CropDetail(_) => {
                    self.stage = Stage::Planning {
                        mode,
                        step: PlanningStep::Results,
                    };
                }
                PlanningStep::Results => {
                    self.selection_mut(mode).clear_soil();
                    self.stage = Stage::Planning {
                        mode,
                        step: PlanningStep::Soil,
                    };
                }
                PlanningStep::Soil => {
                    self.selection_mut(mode).clear_soil();
                    self.stage = Stage::Planning {
                        mode,
                        step: PlanningStep::Season,
                    };
                }
                PlanningStep::Season => self.return_to_entry(),
            },
        }
        Ok(())
    }

    /// Drop the mode and both selection records
    pub fn return_to_entry(&mut self) {
        self.large.reset();
        self.small.reset();
        self.stage = Stage::Entry;
    }

    /// Recommendation for the current results or crop-detail view
    pub fn current_recommendation(
        &self,
        kb: &KnowledgeBase,
    ) -> Option<Result<&'static Recommendation, KnowledgeError>> {
        match self.state() {
            WizardState::ShowingResults { scale, season, soil }
            | WizardState::ShowingCropDetail { scale, season, soil, .. } => {
                Some(kb.resolve_recommendation(scale, season, soil))
            }
            _ => None,
        }
    }
}
