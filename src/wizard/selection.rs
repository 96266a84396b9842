//! Per-scale selection record.

use serde::Serialize;

use crate::knowledge::{IrrigationMethod, Season, SoilType};

/// What the user has picked so far under one scale mode.
///
/// Fields are private so the cascade holds: a soil is never recorded without a
/// season, and a new season drops the old soil.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    season: Option<Season>,
    soil: Option<SoilType>,
    irrigation_method: Option<IrrigationMethod>,
}

impl SelectionState {
    pub fn season(&self) -> Option<Season> {
        self.season
    }

    pub fn soil(&self) -> Option<SoilType> {
        self.soil
    }

    pub fn irrigation_method(&self) -> Option<IrrigationMethod> {
        self.irrigation_method
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Record a season. Any soil chosen for a previous season is dropped.
    pub(crate) fn set_season(&mut self, season: Season) {
        self.season = Some(season);
        self.soil = None;
    }

    /// Record a soil. Returns the season it pairs with, or `None` (and records
    /// nothing) when no season is set.
    pub(crate) fn set_soil(&mut self, soil: SoilType) -> Option<Season> {
        let season = self.season?;
        self.soil = Some(soil);
        Some(season)
    }

    pub(crate) fn clear_soil(&mut self) {
        self.soil = None;
    }

    pub(crate) fn set_irrigation_method(&mut self, method: IrrigationMethod) {
        self.irrigation_method = Some(method);
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soil_requires_season() {
        let mut state = SelectionState::default();
        assert_eq!(state.set_soil(SoilType::Red), None);
        assert_eq!(state.soil(), None);

        state.set_season(Season::Rabi);
        assert_eq!(state.set_soil(SoilType::Red), Some(Season::Rabi));
        assert_eq!(state.soil(), Some(SoilType::Red));
    }

    #[test]
    fn test_new_season_drops_old_soil() {
        let mut state = SelectionState::default();
        state.set_season(Season::Kharif);
        state.set_soil(SoilType::Black);
        state.set_season(Season::Summer);
        assert_eq!(state.season(), Some(Season::Summer));
        assert_eq!(state.soil(), None);
    }

    #[test]
    fn test_reset_clears_method() {
        let mut state = SelectionState::default();
        state.set_irrigation_method(IrrigationMethod::Drip);
        state.set_season(Season::Rabi);
        assert!(!state.is_empty());
        state.reset();
        assert!(state.is_empty());
    }
}
