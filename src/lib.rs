//! Irrigation Advisor
//!
//! Wizard for choosing an irrigation scale and method, then a season and
//! soil, ending in crop recommendations and per-crop agronomy notes.
//!
//! - `knowledge/`: static reference tables (methods, crops, recommendations)
//! - `wizard/`: selection state machine over the knowledge base
//! - `view/`: page ids, single-visible-page controller, view models
//! - `identity/`: form validation, provider error translation, gateway
//! - `session`: per-visit context tying the above together
//! - `api_server`: HTTP surface (feature `api`)

pub mod knowledge;
pub mod wizard;
pub mod view;
pub mod identity;
pub mod session;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use knowledge::{
    CropName, CropProfile, IrrigationMethod, KnowledgeBase, KnowledgeError, Recommendation,
    ScaleMode, Season, SoilType,
};
pub use wizard::{SelectionState, Wizard, WizardError, WizardEvent, WizardState};
pub use view::{PageId, PageView, ViewController};
pub use identity::{AuthError, IdentityGateway, LocalIdentityProvider, MemoryDocumentStore};
pub use session::{Notice, Presentation, Session, SessionError};
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
