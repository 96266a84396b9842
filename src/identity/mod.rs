//! Identity Gateway Adapter
//!
//! - `validation.rs` - form checks run before any external call
//! - `errors.rs` - provider error codes → user-facing messages
//! - `gateway.rs` - provider/store traits and `IdentityGateway`
//! - `local.rs` - in-process provider and store

pub mod validation;
pub mod errors;
pub mod gateway;
pub mod local;

pub use errors::{friendly_message, AuthError, ProviderError, FALLBACK_MESSAGE};
pub use gateway::{
    Credential, DocumentStore, IdentityGateway, IdentityProvider, SignUpOutcome, StoredUser,
    UserDocument, USERS_COLLECTION,
};
pub use local::{LocalIdentityProvider, MemoryDocumentStore};
pub use validation::{is_valid_email, validate_sign_in, validate_sign_up, Field, ValidationError};
