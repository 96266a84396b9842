// Wizard flow integration tests
//
// Drives whole sessions through the public API: auth, scale and method
// choice, season/soil selection, results and crop detail.
// Run with: cargo test --test wizard_flow_tests

use irrigation_advisor::identity::{is_valid_email, validate_sign_up, friendly_message, FALLBACK_MESSAGE};
use irrigation_advisor::{
    IdentityGateway, IrrigationMethod, KnowledgeBase, KnowledgeError, LocalIdentityProvider,
    MemoryDocumentStore, PageId, PageView, ScaleMode, Season, Session, SessionError, SoilType,
    ViewController, Wizard, WizardError, WizardEvent, WizardState,
};

type Gateway = IdentityGateway<LocalIdentityProvider, MemoryDocumentStore>;

fn gateway() -> Gateway {
    IdentityGateway::new(LocalIdentityProvider::new(), MemoryDocumentStore::new())
}

/// Wizard positioned at the season step for `scale`
fn wizard_at_season(kb: &KnowledgeBase, scale: ScaleMode) -> Wizard {
    let method = IrrigationMethod::for_scale(scale)[0];
    let mut wizard = Wizard::new();
    for event in [
        WizardEvent::ChooseScale { scale },
        WizardEvent::ChooseMethod { method },
        WizardEvent::Proceed,
    ] {
        wizard.apply(kb, &event).unwrap();
    }
    wizard
}

fn wizard_at_results(kb: &KnowledgeBase, scale: ScaleMode, season: Season, soil: SoilType) -> Wizard {
    let mut wizard = wizard_at_season(kb, scale);
    wizard.select_season(season).unwrap();
    wizard.select_soil(kb, soil).unwrap();
    wizard
}

// ============================================================================
// Knowledge base
// ============================================================================

#[test]
fn test_every_cell_has_crops_and_tips() {
    let kb = KnowledgeBase::load();
    for scale in ScaleMode::ALL {
        for season in Season::ALL {
            for soil in SoilType::ALL {
                let rec = kb.resolve_recommendation(scale, season, soil).unwrap();
                assert!(!rec.crops.is_empty(), "{} {} {}", scale, season, soil);
                assert!(!rec.tips.is_empty(), "{} {} {}", scale, season, soil);
            }
        }
    }
}

#[test]
fn test_large_kharif_black_cotton() {
    let kb = KnowledgeBase::load();
    let mut wizard = wizard_at_season(&kb, ScaleMode::Large);
    wizard.select_season(Season::Kharif).unwrap();
    let rec = wizard.select_soil(&kb, SoilType::Black).unwrap();
    assert_eq!(rec.crops, ["Cotton", "Soybean", "Groundnut"]);

    let cotton = wizard.open_crop_detail(&kb, "Cotton").unwrap();
    assert_eq!(cotton.npk_ratio, "NPK 150:75:75 kg/ha");
}

#[test]
fn test_small_rabi_red_has_unprofiled_crops() {
    let kb = KnowledgeBase::load();
    let mut wizard = wizard_at_season(&kb, ScaleMode::Small);
    wizard.select_season(Season::Rabi).unwrap();
    let rec = wizard.select_soil(&kb, SoilType::Red).unwrap();
    assert_eq!(rec.crops, ["Peas", "Beans", "Lentil", "Chickpea"]);

    for missing in ["Beans", "Chickpea"] {
        let err = wizard.open_crop_detail(&kb, missing).unwrap_err();
        assert!(matches!(
            err,
            WizardError::Knowledge(KnowledgeError::CropNotFound { scale: ScaleMode::Small, .. })
        ));
        assert!(matches!(wizard.state(), WizardState::ShowingResults { .. }));
    }
    assert!(wizard.open_crop_detail(&kb, "Peas").is_ok());
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_back_from_soil_keeps_season() {
    let kb = KnowledgeBase::load();
    let mut wizard = wizard_at_season(&kb, ScaleMode::Large);
    wizard.select_season(Season::Rabi).unwrap();

    wizard.apply(&kb, &WizardEvent::Back).unwrap();
    assert_eq!(wizard.state(), WizardState::AwaitingSeason { scale: ScaleMode::Large });
    let sel = wizard.selection(ScaleMode::Large);
    assert_eq!(sel.season(), Some(Season::Rabi));
    assert_eq!(sel.soil(), None);
}

#[test]
fn test_back_from_season_returns_to_entry() {
    let kb = KnowledgeBase::load();
    let mut wizard = wizard_at_season(&kb, ScaleMode::Small);

    assert_eq!(wizard.apply(&kb, &WizardEvent::Back).unwrap(), WizardState::Entry);
    assert!(wizard.selection(ScaleMode::Small).is_empty());
    assert_eq!(wizard.mode(), None);
}

#[test]
fn test_return_to_entry_from_any_depth() {
    let kb = KnowledgeBase::load();
    for scale in ScaleMode::ALL {
        let mut wizard = wizard_at_results(&kb, scale, Season::Summer, SoilType::Sandy);
        let crop = wizard.current_recommendation(&kb).unwrap().unwrap().crops[0];
        wizard.open_crop_detail(&kb, crop).unwrap();

        assert_eq!(wizard.apply(&kb, &WizardEvent::ReturnToEntry).unwrap(), WizardState::Entry);
        assert_eq!(wizard.mode(), None);
        assert!(wizard.selection(ScaleMode::Large).is_empty());
        assert!(wizard.selection(ScaleMode::Small).is_empty());
    }
}

#[test]
fn test_crop_detail_back_restores_results() {
    let kb = KnowledgeBase::load();
    let mut wizard = wizard_at_results(&kb, ScaleMode::Large, Season::Kharif, SoilType::Alluvial);
    let before = wizard.state();

    let crop = wizard.current_recommendation(&kb).unwrap().unwrap().crops[0];
    wizard.open_crop_detail(&kb, crop).unwrap();
    assert!(matches!(wizard.state(), WizardState::ShowingCropDetail { .. }));

    wizard.back().unwrap();
    assert_eq!(wizard.state(), before);
}

#[test]
fn test_events_out_of_order_are_rejected() {
    let kb = KnowledgeBase::load();
    let mut wizard = Wizard::new();
    let err = wizard
        .apply(&kb, &WizardEvent::SelectSoil { soil: SoilType::Red })
        .unwrap_err();
    assert!(matches!(err, WizardError::InvalidTransition { .. }));
    assert_eq!(wizard.state(), WizardState::Entry);

    wizard.choose_scale(ScaleMode::Large).unwrap();
    let err = wizard.choose_method(IrrigationMethod::Drip).unwrap_err();
    assert!(matches!(err, WizardError::MethodScaleMismatch { .. }));
}

// ============================================================================
// Validation and error translation
// ============================================================================

#[test]
fn test_email_and_password_rules() {
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("not-an-email"));

    assert!(validate_sign_up("Asha", "asha@farm.in", "abc12").is_err());
    assert!(validate_sign_up("Asha", "asha@farm.in", "abc123").is_ok());
}

#[test]
fn test_unknown_provider_code_falls_back() {
    assert_eq!(friendly_message("auth/something-new"), FALLBACK_MESSAGE);
}

#[test]
fn test_view_controller_single_visible_page() {
    let mut view = ViewController::new(PageId::SignIn);
    assert!(view.show(PageId::Entry));
    assert!(!view.show(PageId::Entry));
    assert_eq!(view.visibility().filter(|(_, shown)| *shown).count(), 1);
    assert_eq!(view.visible(), PageId::Entry);
}

// ============================================================================
// Full session
// ============================================================================

#[tokio::test]
async fn test_full_session_follows_wizard() {
    let kb = KnowledgeBase::load();
    let gw = gateway();
    gw.sign_up("Asha", "asha@farm.in", "secret1").await.unwrap();

    let mut session = Session::new();
    assert_eq!(session.page(), PageId::SignIn);
    let page = session.sign_in(&gw, "asha@farm.in", "secret1").await.unwrap();
    assert_eq!(page, PageId::Entry);

    let events = [
        WizardEvent::ChooseScale { scale: ScaleMode::Small },
        WizardEvent::ChooseMethod { method: IrrigationMethod::Drip },
        WizardEvent::Proceed,
        WizardEvent::SelectSeason { season: Season::Kharif },
        WizardEvent::SelectSoil { soil: SoilType::Loamy },
    ];
    for event in &events {
        let page = session.handle(&kb, event).unwrap();
        assert_eq!(page, PageId::for_state(&session.state()));
        assert!(session.view().is_visible(page));
    }

    let PageView::Results { crops, summary, .. } = PageView::build(&session, &kb).unwrap() else {
        panic!("expected the results page");
    };
    assert_eq!(summary, "Kharif season on Loamy soil");

    let page = session
        .handle(&kb, &WizardEvent::OpenCropDetail { crop: crops[0].to_string() })
        .unwrap();
    assert_eq!(page, PageId::CropDetail);
    assert!(matches!(PageView::build(&session, &kb).unwrap(), PageView::CropDetail(_)));
}

#[tokio::test]
async fn test_sign_up_with_offline_store_still_signs_in() {
    let gw = IdentityGateway::new(LocalIdentityProvider::new(), MemoryDocumentStore::offline());
    let mut session = Session::new();
    session.show_sign_up().unwrap();

    let outcome = session.sign_up(&gw, "Ravi", "ravi@farm.in", "secret1").await.unwrap();
    assert!(!outcome.profile_persisted);
    assert_eq!(session.page(), PageId::Entry);
    assert!(session.user().is_some());
}

#[tokio::test]
async fn test_sign_up_writes_user_document() {
    let gw = gateway();
    let mut session = Session::new();
    let outcome = session.sign_up(&gw, "Meena", "meena@farm.in", "secret1").await.unwrap();
    assert!(outcome.profile_persisted);

    let doc = gw.store().get(&outcome.credential.uid).unwrap();
    assert_eq!(doc.uid, outcome.credential.uid);
    assert_eq!(doc.name, "Meena");
}

#[tokio::test]
async fn test_events_before_sign_in_are_refused() {
    let kb = KnowledgeBase::load();
    let mut session = Session::new();
    let err = session.handle(&kb, &WizardEvent::Back).unwrap_err();
    assert_eq!(err, SessionError::NotSignedIn);
}
