//! In-process identity provider and document store.
//!
//! Used by the development server and the tests in place of the hosted
//! service. They enforce the same provider-side rules and return the same
//! error codes the hosted service does.

use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::errors::{
    ProviderError, EMAIL_ALREADY_IN_USE, INVALID_EMAIL, NETWORK_REQUEST_FAILED, TOO_MANY_REQUESTS,
    USER_NOT_FOUND, WEAK_PASSWORD, WRONG_PASSWORD,
};
use super::gateway::{Credential, DocumentStore, IdentityProvider, StoredUser, UserDocument};
use super::validation::{is_valid_email, MIN_PASSWORD_LEN};

/// Consecutive wrong passwords before an account is throttled
pub const MAX_FAILED_ATTEMPTS: u32 = 5;

/// How long a throttled account refuses sign-in
pub const DEFAULT_LOCKOUT_SECS: i64 = 60;

const UID_LEN: usize = 28;

fn new_uid() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(UID_LEN)
        .map(char::from)
        .collect()
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Clone)]
struct Account {
    uid: String,
    email: String,
    password: String,
    display_name: Option<String>,
    failed_attempts: u32,
    locked_until: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
struct Accounts {
    /// Keyed by lowercased email
    by_email: FxHashMap<String, Account>,
    /// uid -> lowercased email
    email_of: FxHashMap<String, String>,
}

#[derive(Debug)]
pub struct LocalIdentityProvider {
    accounts: Mutex<Accounts>,
    guests: AtomicUsize,
    lockout: Duration,
}

impl Default for LocalIdentityProvider {
    fn default() -> Self {
        Self::with_lockout(Duration::seconds(DEFAULT_LOCKOUT_SECS))
    }
}

impl LocalIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lockout(lockout: Duration) -> Self {
        Self {
            accounts: Mutex::default(),
            guests: AtomicUsize::new(0),
            lockout,
        }
    }

    pub fn account_count(&self) -> usize {
        lock(&self.accounts).by_email.len()
    }

    pub fn guest_count(&self) -> usize {
        self.guests.load(Ordering::Relaxed)
    }

    pub fn display_name(&self, uid: &str) -> Option<String> {
        let accounts = lock(&self.accounts);
        let email = accounts.email_of.get(uid)?;
        accounts.by_email.get(email)?.display_name.clone()
    }
}

impl IdentityProvider for LocalIdentityProvider {
    async fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Credential, ProviderError> {
        let mut accounts = lock(&self.accounts);
        let account = accounts
            .by_email
            .get_mut(&email.to_lowercase())
            .ok_or_else(|| ProviderError::new(USER_NOT_FOUND, "no user record for this identifier"))?;

        let now = Utc::now();
        if let Some(until) = account.locked_until {
            if now < until {
                return Err(ProviderError::new(
                    TOO_MANY_REQUESTS,
                    "access temporarily disabled after repeated failures",
                ));
            }
            account.locked_until = None;
            account.failed_attempts = 0;
        }
        if account.password != password {
            account.failed_attempts += 1;
            if account.failed_attempts >= MAX_FAILED_ATTEMPTS {
                account.locked_until = Some(now + self.lockout);
            }
            return Err(ProviderError::new(WRONG_PASSWORD, "password is invalid"));
        }

        account.failed_attempts = 0;
        Ok(Credential {
            uid: account.uid.clone(),
            email: Some(account.email.clone()),
            display_name: account.display_name.clone(),
            anonymous: false,
        })
    }

    async fn sign_in_anonymously(&self) -> Result<Credential, ProviderError> {
        self.guests.fetch_add(1, Ordering::Relaxed);
        Ok(Credential {
            uid: new_uid(),
            email: None,
            display_name: None,
            anonymous: true,
        })
    }

    async fn create_user_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Credential, ProviderError> {
        if !is_valid_email(email) {
            return Err(ProviderError::new(INVALID_EMAIL, "email address is badly formatted"));
        }
        if password.encode_utf16().count() < MIN_PASSWORD_LEN {
            return Err(ProviderError::new(WEAK_PASSWORD, "password should be at least 6 characters"));
        }

        let key = email.to_lowercase();
        let mut accounts = lock(&self.accounts);
        if accounts.by_email.contains_key(&key) {
            return Err(ProviderError::new(
                EMAIL_ALREADY_IN_USE,
                "email address is already in use by another account",
            ));
        }

        let account = Account {
            uid: new_uid(),
            email: email.to_string(),
            password: password.to_string(),
            display_name: None,
            failed_attempts: 0,
            locked_until: None,
        };
        let credential = Credential {
            uid: account.uid.clone(),
            email: Some(account.email.clone()),
            display_name: None,
            anonymous: false,
        };
        accounts.email_of.insert(account.uid.clone(), key.clone());
        accounts.by_email.insert(key, account);
        Ok(credential)
    }

    async fn update_profile(&self, uid: &str, display_name: &str) -> Result<(), ProviderError> {
        let mut accounts = lock(&self.accounts);
        let email = accounts
            .email_of
            .get(uid)
            .cloned()
            .ok_or_else(|| ProviderError::new(USER_NOT_FOUND, "no user record for this uid"))?;
        if let Some(account) = accounts.by_email.get_mut(&email) {
            account.display_name = Some(display_name.to_string());
        }
        Ok(())
    }
}

/// `users` collection held in memory
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    users: Mutex<FxHashMap<String, StoredUser>>,
    offline: bool,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes all fail with a network error
    pub fn offline() -> Self {
        Self {
            users: Mutex::default(),
            offline: true,
        }
    }

    pub fn get(&self, uid: &str) -> Option<StoredUser> {
        lock(&self.users).get(uid).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.users).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentStore for MemoryDocumentStore {
    async fn write_user(&self, doc: UserDocument) -> Result<(), ProviderError> {
        if self.offline {
            return Err(ProviderError::new(NETWORK_REQUEST_FAILED, "document store unreachable"));
        }
        let stored = StoredUser {
            uid: doc.uid,
            name: doc.name,
            email: doc.email,
            created_at: Utc::now(),
        };
        lock(&self.users).insert(stored.uid.clone(), stored);
        Ok(())
    }
}
