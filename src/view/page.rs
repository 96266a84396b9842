//! Page identifiers and the single-visible-page controller.

use serde::{Serialize, Serializer};

use crate::knowledge::ScaleMode;
use crate::wizard::WizardState;

/// Step within a scale's planning container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    Season,
    Soil,
    Results,
}

/// Every page the advisor can show. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    SignIn,
    SignUp,
    /// Scale choice ("irrigation" landing page)
    Entry,
    /// Method list for a scale
    ScaleOptions(ScaleMode),
    /// One method's description, with the proceed button
    ScaleDetail(ScaleMode),
    WizardStep(ScaleMode, StepId),
    CropDetail,
}

impl PageId {
    pub const ALL: [PageId; 14] = [
        PageId::SignIn,
        PageId::SignUp,
        PageId::Entry,
        PageId::ScaleOptions(ScaleMode::Large),
        PageId::ScaleOptions(ScaleMode::Small),
        PageId::ScaleDetail(ScaleMode::Large),
        PageId::ScaleDetail(ScaleMode::Small),
        PageId::WizardStep(ScaleMode::Large, StepId::Season),
        PageId::WizardStep(ScaleMode::Large, StepId::Soil),
        PageId::WizardStep(ScaleMode::Large, StepId::Results),
        PageId::WizardStep(ScaleMode::Small, StepId::Season),
        PageId::WizardStep(ScaleMode::Small, StepId::Soil),
        PageId::WizardStep(ScaleMode::Small, StepId::Results),
        PageId::CropDetail,
    ];

    /// Stable element identifier for the rendering host
    pub fn element_id(&self) -> &'static str {
        use ScaleMode::{Large, Small};
        match self {
            PageId::SignIn => "signin-page",
            PageId::SignUp => "signup-page",
            PageId::Entry => "irrigation-page",
            PageId::ScaleOptions(Large) => "large-scale-page",
            PageId::ScaleOptions(Small) => "small-scale-page",
            PageId::ScaleDetail(Large) => "large-scale-detail-page",
            PageId::ScaleDetail(Small) => "small-scale-detail-page",
            PageId::WizardStep(Large, StepId::Season) => "step1-large",
            PageId::WizardStep(Large, StepId::Soil) => "step2-large",
            PageId::WizardStep(Large, StepId::Results) => "step3-large",
            PageId::WizardStep(Small, StepId::Season) => "step1-small",
            PageId::WizardStep(Small, StepId::Soil) => "step2-small",
            PageId::WizardStep(Small, StepId::Results) => "step3-small",
            PageId::CropDetail => "detail-page",
        }
    }

    /// Page that presents a wizard state
    pub fn for_state(state: &WizardState) -> PageId {
        match *state {
            WizardState::Entry => PageId::Entry,
            WizardState::ScaleOptions { scale } => PageId::ScaleOptions(scale),
            WizardState::MethodDetail { scale, .. } => PageId::ScaleDetail(scale),
            WizardState::AwaitingSeason { scale } => PageId::WizardStep(scale, StepId::Season),
            WizardState::AwaitingSoil { scale, .. } => PageId::WizardStep(scale, StepId::Soil),
            WizardState::ShowingResults { scale, .. } => PageId::WizardStep(scale, StepId::Results),
            WizardState::ShowingCropDetail { .. } => PageId::CropDetail,
        }
    }
}

impl Serialize for PageId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.element_id())
    }
}

/// Keeps exactly one page visible
#[derive(Debug, Clone)]
pub struct ViewController {
    visible: PageId,
}

impl ViewController {
    pub fn new(initial: PageId) -> Self {
        Self { visible: initial }
    }

    /// Reveal `page` and hide every other. Returns whether anything changed.
    pub fn show(&mut self, page: PageId) -> bool {
        if self.visible == page {
            return false;
        }
        tracing::debug!("View: {} -> {}", self.visible.element_id(), page.element_id());
        self.visible = page;
        true
    }

    pub fn visible(&self) -> PageId {
        self.visible
    }

    pub fn is_visible(&self, page: PageId) -> bool {
        self.visible == page
    }

    /// Visibility of every page, in `PageId::ALL` order
    pub fn visibility(&self) -> impl Iterator<Item = (PageId, bool)> + '_ {
        PageId::ALL.into_iter().map(move |page| (page, page == self.visible))
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(PageId::SignIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_element_ids_are_unique() {
        let ids: HashSet<&str> = PageId::ALL.iter().map(|p| p.element_id()).collect();
        assert_eq!(ids.len(), PageId::ALL.len());
    }

    #[test]
    fn test_exactly_one_page_visible() {
        let mut view = ViewController::default();
        for page in PageId::ALL {
            view.show(page);
            let shown: Vec<PageId> = view.visibility().filter(|(_, v)| *v).map(|(p, _)| p).collect();
            assert_eq!(shown, vec![page]);
        }
    }

    #[test]
    fn test_show_is_idempotent() {
        let mut view = ViewController::new(PageId::Entry);
        assert!(view.show(PageId::CropDetail));
        assert!(!view.show(PageId::CropDetail));
        assert!(view.is_visible(PageId::CropDetail));
        assert!(!view.is_visible(PageId::Entry));
    }

    #[test]
    fn test_page_serializes_as_element_id() {
        let json = serde_json::to_string(&PageId::WizardStep(ScaleMode::Small, StepId::Soil)).unwrap();
        assert_eq!(json, "\"step2-small\"");
    }
}
