//! Identity Gateway Adapter
//!
//! Thin layer over two external collaborators: an identity provider (accounts
//! and credentials) and a document store (user profiles). Inputs are
//! validated before any call goes out; provider failures come back as
//! `AuthError::Provider` carrying the provider's code.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::future::Future;

use super::errors::{AuthError, ProviderError};
use super::validation::{validate_sign_in, validate_sign_up};

/// Collection holding one profile document per user, keyed by uid
pub const USERS_COLLECTION: &str = "users";

/// Signed-in identity as returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub anonymous: bool,
}

/// Profile document written on sign-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDocument {
    pub uid: String,
    pub name: String,
    pub email: String,
}

/// Stored profile; `created_at` is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredUser {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

pub trait IdentityProvider: Send + Sync {
    fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Credential, ProviderError>> + Send;

    fn sign_in_anonymously(&self) -> impl Future<Output = Result<Credential, ProviderError>> + Send;

    fn create_user_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Credential, ProviderError>> + Send;

    fn update_profile(
        &self,
        uid: &str,
        display_name: &str,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;
}

pub trait DocumentStore: Send + Sync {
    /// Write (create or replace) `users/{doc.uid}`
    fn write_user(&self, doc: UserDocument) -> impl Future<Output = Result<(), ProviderError>> + Send;
}

/// Result of a sign-up. The account exists whenever this is returned;
/// `profile_persisted` reports whether the follow-up writes landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignUpOutcome {
    pub credential: Credential,
    pub profile_persisted: bool,
}

pub struct IdentityGateway<P, S> {
    provider: P,
    store: S,
}

impl<P: IdentityProvider, S: DocumentStore> IdentityGateway<P, S> {
    pub fn new(provider: P, store: S) -> Self {
        Self { provider, store }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Credential, AuthError> {
        let form = validate_sign_in(email, password)?;
        let credential = self
            .provider
            .sign_in_with_email_and_password(&form.email, &form.password)
            .await
            .map_err(|e| {
                tracing::info!("Sign-in rejected: {}", e.code);
                e
            })?;
        tracing::info!("Signed in uid={}", credential.uid);
        Ok(credential)
    }

    pub async fn sign_in_anonymously(&self) -> Result<Credential, AuthError> {
        let credential = self.provider.sign_in_anonymously().await.map_err(|e| {
            tracing::info!("Guest sign-in rejected: {}", e.code);
            e
        })?;
        tracing::info!("Signed in guest uid={}", credential.uid);
        Ok(credential)
    }

    /// Create the account, then set its display name and write the profile
    /// document. Only account creation can fail the call: the two follow-up
    /// writes are best-effort and a failure is logged and reported through
    /// `SignUpOutcome::profile_persisted`.
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let form = validate_sign_up(name, email, password)?;

        let mut credential = self
            .provider
            .create_user_with_email_and_password(&form.email, &form.password)
            .await
            .map_err(|e| {
                tracing::info!("Sign-up rejected: {}", e.code);
                e
            })?;
        tracing::info!("Created account uid={}", credential.uid);

        let mut profile_persisted = true;

        match self.provider.update_profile(&credential.uid, &form.name).await {
            Ok(()) => credential.display_name = Some(form.name.clone()),
            Err(e) => {
                tracing::warn!("Display name update failed for uid={}: {}", credential.uid, e);
                profile_persisted = false;
            }
        }

        let doc = UserDocument {
            uid: credential.uid.clone(),
            name: form.name,
            email: form.email,
        };
        if let Err(e) = self.store.write_user(doc).await {
            tracing::warn!(
                "Profile write to {}/{} failed: {}",
                USERS_COLLECTION,
                credential.uid,
                e
            );
            profile_persisted = false;
        }

        Ok(SignUpOutcome {
            credential,
            profile_persisted,
        })
    }
}
