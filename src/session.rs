//! Session-scoped context
//!
//! One `Session` per user visit: the signed-in identity, the wizard with both
//! selection records, the view controller and the last message to surface.
//! Every operation that changes the wizard also moves the view to the page
//! for the new state.

use serde::Serialize;

use crate::identity::{AuthError, Credential, DocumentStore, Field, IdentityGateway, IdentityProvider, SignUpOutcome};
use crate::knowledge::KnowledgeBase;
use crate::view::{PageId, ViewController};
use crate::wizard::{Wizard, WizardError, WizardEvent, WizardState};

/// How a message reaches the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// Next to the offending form field
    Inline,
    /// Blocking dialog
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub presentation: Presentation,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
}

impl Notice {
    fn inline(message: impl Into<String>, field: Option<Field>) -> Self {
        Self {
            presentation: Presentation::Inline,
            message: message.into(),
            field,
        }
    }

    fn alert(message: impl Into<String>) -> Self {
        Self {
            presentation: Presentation::Alert,
            message: message.into(),
            field: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("sign in to use the advisor")]
    NotSignedIn,

    #[error("already signed in")]
    AlreadySignedIn,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

#[derive(Debug, Clone)]
pub struct Session {
    user: Option<Credential>,
    wizard: Wizard,
    view: ViewController,
    notice: Option<Notice>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            user: None,
            wizard: Wizard::new(),
            view: ViewController::new(PageId::SignIn),
            notice: None,
        }
    }

    pub fn user(&self) -> Option<&Credential> {
        self.user.as_ref()
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn view(&self) -> &ViewController {
        &self.view
    }

    pub fn page(&self) -> PageId {
        self.view.visible()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn ensure_signed_out(&self) -> Result<(), SessionError> {
        match self.user {
            Some(_) => Err(SessionError::AlreadySignedIn),
            None => Ok(()),
        }
    }

    pub fn show_sign_up(&mut self) -> Result<PageId, SessionError> {
        self.ensure_signed_out()?;
        self.notice = None;
        self.view.show(PageId::SignUp);
        Ok(self.page())
    }

    pub fn show_sign_in(&mut self) -> Result<PageId, SessionError> {
        self.ensure_signed_out()?;
        self.notice = None;
        self.view.show(PageId::SignIn);
        Ok(self.page())
    }

    fn enter(&mut self, credential: Credential) -> PageId {
        self.user = Some(credential);
        self.notice = None;
        self.wizard = Wizard::new();
        self.view.show(PageId::Entry);
        self.page()
    }

    /// Email/password sign-in. Failures are shown inline on the sign-in page.
    pub async fn sign_in<P, S>(
        &mut self,
        gateway: &IdentityGateway<P, S>,
        email: &str,
        password: &str,
    ) -> Result<PageId, SessionError>
    where
        P: IdentityProvider,
        S: DocumentStore,
    {
        self.ensure_signed_out()?;
        match gateway.sign_in(email, password).await {
            Ok(credential) => Ok(self.enter(credential)),
            Err(e) => {
                let field = match &e {
                    AuthError::Validation(v) => Some(v.field()),
                    AuthError::Provider(_) => None,
                };
                self.notice = Some(Notice::inline(e.user_message(), field));
                Err(e.into())
            }
        }
    }

    pub async fn sign_in_as_guest<P, S>(&mut self, gateway: &IdentityGateway<P, S>) -> Result<PageId, SessionError>
    where
        P: IdentityProvider,
        S: DocumentStore,
    {
        self.ensure_signed_out()?;
        match gateway.sign_in_anonymously().await {
            Ok(credential) => Ok(self.enter(credential)),
            Err(e) => {
                self.notice = Some(Notice::alert(format!("Guest sign-in failed: {}", e.user_message())));
                Err(e.into())
            }
        }
    }

    /// Register and sign in. Form problems are shown inline; provider
    /// failures as an alert.
    pub async fn sign_up<P, S>(
        &mut self,
        gateway: &IdentityGateway<P, S>,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SignUpOutcome, SessionError>
    where
        P: IdentityProvider,
        S: DocumentStore,
    {
        self.ensure_signed_out()?;
        match gateway.sign_up(name, email, password).await {
            Ok(outcome) => {
                self.enter(outcome.credential.clone());
                Ok(outcome)
            }
            Err(AuthError::Validation(v)) => {
                self.notice = Some(Notice::inline(v.to_string(), Some(v.field())));
                Err(AuthError::Validation(v).into())
            }
            Err(e) => {
                self.notice = Some(Notice::alert(format!("Sign up failed: {}", e.user_message())));
                Err(e.into())
            }
        }
    }

    /// Apply a wizard event and show the page for the resulting state.
    /// Rejected events leave both the wizard and the view where they were.
    pub fn handle(&mut self, kb: &KnowledgeBase, event: &WizardEvent) -> Result<PageId, SessionError> {
        if self.user.is_none() {
            return Err(SessionError::NotSignedIn);
        }
        match self.wizard.apply(kb, event) {
            Ok(state) => {
                self.notice = None;
                self.view.show(PageId::for_state(&state));
                Ok(self.page())
            }
            Err(e) => {
                if let WizardError::Knowledge(k) = &e {
                    if k.is_integrity_defect() {
                        self.notice = Some(Notice::alert(format!("Advice unavailable: {}", k)));
                    }
                }
                Err(e.into())
            }
        }
    }

    pub fn state(&self) -> WizardState {
        self.wizard.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{LocalIdentityProvider, MemoryDocumentStore};
    use crate::knowledge::{IrrigationMethod, ScaleMode, Season, SoilType};

    fn gateway() -> IdentityGateway<LocalIdentityProvider, MemoryDocumentStore> {
        IdentityGateway::new(LocalIdentityProvider::new(), MemoryDocumentStore::new())
    }

    #[test]
    fn test_events_need_a_user() {
        let kb = KnowledgeBase::load();
        let mut session = Session::new();
        let err = session
            .handle(&kb, &WizardEvent::ChooseScale { scale: ScaleMode::Large })
            .unwrap_err();
        assert_eq!(err, SessionError::NotSignedIn);
        assert_eq!(session.page(), PageId::SignIn);
    }

    #[test]
    fn test_toggle_between_auth_pages() {
        let mut session = Session::new();
        assert_eq!(session.show_sign_up().unwrap(), PageId::SignUp);
        assert_eq!(session.show_sign_in().unwrap(), PageId::SignIn);
    }

    #[tokio::test]
    async fn test_sign_in_error_is_inline() {
        let gw = gateway();
        let mut session = Session::new();
        session.sign_in(&gw, "a@b.co", "secret1").await.unwrap_err();

        let notice = session.notice().unwrap();
        assert_eq!(notice.presentation, Presentation::Inline);
        assert_eq!(notice.message, "No account found with this email.");
        assert_eq!(session.page(), PageId::SignIn);
    }

    #[tokio::test]
    async fn test_sign_up_failure_is_alert() {
        let gw = gateway();
        gw.sign_up("Asha", "asha@farm.in", "secret1").await.unwrap();

        let mut session = Session::new();
        session.show_sign_up().unwrap();
        session.sign_up(&gw, "Asha", "asha@farm.in", "secret1").await.unwrap_err();
        let notice = session.notice().unwrap();
        assert_eq!(notice.presentation, Presentation::Alert);
        assert_eq!(notice.message, "Sign up failed: This email is already registered. Please sign in.");
        assert_eq!(session.page(), PageId::SignUp);
    }

    #[tokio::test]
    async fn test_sign_up_short_password_flags_field() {
        let gw = gateway();
        let mut session = Session::new();
        session.sign_up(&gw, "Asha", "asha@farm.in", "abc12").await.unwrap_err();
        let notice = session.notice().unwrap();
        assert_eq!(notice.presentation, Presentation::Inline);
        assert_eq!(notice.field, Some(Field::Password));
    }

    #[tokio::test]
    async fn test_guest_reaches_entry_and_cannot_sign_in_again() {
        let gw = gateway();
        let mut session = Session::new();
        assert_eq!(session.sign_in_as_guest(&gw).await.unwrap(), PageId::Entry);
        assert!(session.user().unwrap().anonymous);
        assert_eq!(
            session.sign_in(&gw, "a@b.co", "secret1").await.unwrap_err(),
            SessionError::AlreadySignedIn
        );
    }

    #[tokio::test]
    async fn test_view_follows_wizard() {
        let kb = KnowledgeBase::load();
        let gw = gateway();
        let mut session = Session::new();
        session.sign_in_as_guest(&gw).await.unwrap();

        let steps = [
            (WizardEvent::ChooseScale { scale: ScaleMode::Large }, "large-scale-page"),
            (WizardEvent::ChooseMethod { method: IrrigationMethod::Canal }, "large-scale-detail-page"),
            (WizardEvent::Proceed, "step1-large"),
            (WizardEvent::SelectSeason { season: Season::Rabi }, "step2-large"),
            (WizardEvent::SelectSoil { soil: SoilType::Loamy }, "step3-large"),
            (WizardEvent::OpenCropDetail { crop: "Oats".to_string() }, "detail-page"),
            (WizardEvent::Back, "step3-large"),
            (WizardEvent::ReturnToEntry, "irrigation-page"),
        ];
        for (event, page) in steps {
            let shown = session.handle(&kb, &event).unwrap();
            assert_eq!(shown.element_id(), page, "after {:?}", event);
            assert_eq!(shown, PageId::for_state(&session.state()));
        }
    }

    #[tokio::test]
    async fn test_missing_profile_raises_alert() {
        let kb = KnowledgeBase::load();
        let gw = gateway();
        let mut session = Session::new();
        session.sign_in_as_guest(&gw).await.unwrap();
        for event in [
            WizardEvent::ChooseScale { scale: ScaleMode::Large },
            WizardEvent::ChooseMethod { method: IrrigationMethod::Dam },
            WizardEvent::Proceed,
            WizardEvent::SelectSeason { season: Season::Summer },
            WizardEvent::SelectSoil { soil: SoilType::Loamy },
        ] {
            session.handle(&kb, &event).unwrap();
        }

        let page = session.page();
        session
            .handle(&kb, &WizardEvent::OpenCropDetail { crop: "Fodder".to_string() })
            .unwrap_err();
        assert_eq!(session.page(), page);
        assert_eq!(session.notice().unwrap().presentation, Presentation::Alert);
    }
}
