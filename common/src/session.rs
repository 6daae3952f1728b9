//! Session lifecycle: credential ownership, persistence, passive validation.
//!
//! The store is the only component allowed to mutate the credential. Validity
//! is defined purely as "a protected endpoint accepts this token" — there is
//! no local token-expiry parsing. Every credential mutation writes through to
//! durable storage in the same call as the in-memory update, so memory and
//! storage never disagree for more than one operation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// The persisted credential: an opaque bearer token plus the email it was
/// issued for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    pub email: String,
}

/// Durable storage for the credential. The frontend implements this over
/// localStorage; tests use an in-memory map.
pub trait CredentialStore {
    fn load(&self) -> Option<Credential>;
    fn save(&mut self, credential: &Credential);
    fn clear(&mut self);
}

/// Round-trip check against a protected endpoint. `Ok(())` means the token
/// was accepted; a 401 means it was rejected; anything else is indeterminate.
#[async_trait(?Send)]
pub trait SessionProbe {
    async fn check(&self, token: &str) -> ApiResult<()>;
}

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// No credential held.
    Anonymous,
    /// A credential is held but has not yet passed a validation round-trip.
    Pending,
    /// The last validation round-trip accepted the credential.
    Authenticated,
}

/// Owns the current credential and its durable copy.
///
/// Transitions: `Anonymous -> Pending` on [`set_credential`],
/// `Pending -> Authenticated` on a successful [`validate`], and
/// `Pending | Authenticated -> Anonymous` on a 401 or explicit [`clear`].
/// The store is re-enterable indefinitely; there is no terminal state.
///
/// [`set_credential`]: SessionStore::set_credential
/// [`validate`]: SessionStore::validate
/// [`clear`]: SessionStore::clear
pub struct SessionStore<S: CredentialStore> {
    storage: S,
    credential: Option<Credential>,
    phase: AuthPhase,
}

impl<S: CredentialStore> SessionStore<S> {
    /// Restores any persisted credential. A restored credential starts
    /// `Pending`: it still has to pass a validation round-trip.
    pub fn new(storage: S) -> Self {
        let credential = storage.load();
        let phase = if credential.is_some() {
            AuthPhase::Pending
        } else {
            AuthPhase::Anonymous
        };
        Self {
            storage,
            credential,
            phase,
        }
    }

    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    pub fn token(&self) -> Option<&str> {
        self.credential.as_ref().map(|c| c.token.as_str())
    }

    pub fn email(&self) -> Option<&str> {
        self.credential.as_ref().map(|c| c.email.as_str())
    }

    /// Stores and persists the credential, marking the session provisionally
    /// authenticated. Completes a login; only the auth flow calls this.
    pub fn set_credential(&mut self, token: String, email: String) {
        let credential = Credential { token, email };
        self.storage.save(&credential);
        self.credential = Some(credential);
        self.phase = AuthPhase::Pending;
    }

    /// Authoritative validity check.
    ///
    /// No token held: reports `false` without touching the network. A 401
    /// from the probe drops the credential (memory and storage) and reports
    /// `false`. Any other failure (network, 5xx) leaves everything untouched
    /// and returns the error — the caller retries; a transient blip never
    /// logs the user out.
    pub async fn validate<P: SessionProbe + ?Sized>(&mut self, probe: &P) -> ApiResult<bool> {
        let Some(token) = self.token().map(str::to_owned) else {
            self.phase = AuthPhase::Anonymous;
            return Ok(false);
        };
        let outcome = probe.check(&token).await;
        self.apply_validation(outcome)
    }

    /// Synchronous half of [`validate`](SessionStore::validate), for callers
    /// that run the probe in a spawned task and feed the outcome back in.
    pub fn apply_validation(&mut self, outcome: ApiResult<()>) -> ApiResult<bool> {
        match outcome {
            Ok(()) => {
                self.phase = AuthPhase::Authenticated;
                Ok(true)
            }
            Err(err) if err.is_unauthorized() => {
                self.clear();
                Ok(false)
            }
            // Indeterminate: keep the credential, let the caller retry.
            Err(err) => Err(err),
        }
    }

    /// Drops the credential from memory and durable storage. Idempotent.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.credential = None;
        self.phase = AuthPhase::Anonymous;
    }

    /// Read access to the storage, for tests and diagnostics.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;

    use super::*;

    /// In-memory stand-in for localStorage.
    #[derive(Default)]
    pub struct MemoryStore {
        pub credential: Option<Credential>,
    }

    impl CredentialStore for MemoryStore {
        fn load(&self) -> Option<Credential> {
            self.credential.clone()
        }

        fn save(&mut self, credential: &Credential) {
            self.credential = Some(credential.clone());
        }

        fn clear(&mut self) {
            self.credential = None;
        }
    }

    /// Probe returning a scripted outcome, counting calls.
    pub struct ScriptedProbe {
        pub outcome: ApiResult<()>,
        pub calls: RefCell<u32>,
    }

    impl ScriptedProbe {
        pub fn new(outcome: ApiResult<()>) -> Self {
            Self {
                outcome,
                calls: RefCell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl SessionProbe for ScriptedProbe {
        async fn check(&self, _token: &str) -> ApiResult<()> {
            *self.calls.borrow_mut() += 1;
            self.outcome.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::test_support::{MemoryStore, ScriptedProbe};
    use super::*;

    fn unauthorized() -> ApiError {
        ApiError::Remote {
            status: 401,
            message: "invalid token".to_string(),
        }
    }

    #[test]
    fn starts_anonymous_with_empty_storage() {
        let store = SessionStore::new(MemoryStore::default());
        assert_eq!(store.phase(), AuthPhase::Anonymous);
        assert!(store.token().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn restores_persisted_credential_as_pending() {
        let storage = MemoryStore {
            credential: Some(Credential {
                token: "t0".to_string(),
                email: "a@b.com".to_string(),
            }),
        };
        let store = SessionStore::new(storage);
        assert_eq!(store.phase(), AuthPhase::Pending);
        assert_eq!(store.token(), Some("t0"));
        assert_eq!(store.email(), Some("a@b.com"));
    }

    #[test]
    fn set_credential_writes_through_to_storage() {
        let mut store = SessionStore::new(MemoryStore::default());
        store.set_credential("t1".to_string(), "a@b.com".to_string());

        assert_eq!(store.phase(), AuthPhase::Pending);
        let persisted = store.storage().credential.as_ref().unwrap();
        assert_eq!(persisted.token, "t1");
        assert_eq!(persisted.email, "a@b.com");
    }

    #[test]
    fn validate_without_token_makes_no_network_call() {
        let mut store = SessionStore::new(MemoryStore::default());
        let probe = ScriptedProbe::new(Ok(()));

        let valid = block_on(store.validate(&probe)).unwrap();
        assert!(!valid);
        assert_eq!(*probe.calls.borrow(), 0);
        assert_eq!(store.phase(), AuthPhase::Anonymous);
    }

    #[test]
    fn successful_probe_authenticates() {
        let mut store = SessionStore::new(MemoryStore::default());
        store.set_credential("t1".to_string(), "a@b.com".to_string());
        let probe = ScriptedProbe::new(Ok(()));

        let valid = block_on(store.validate(&probe)).unwrap();
        assert!(valid);
        assert!(store.is_authenticated());
        assert_eq!(*probe.calls.borrow(), 1);
    }

    #[test]
    fn probe_401_clears_credential_and_storage() {
        let mut store = SessionStore::new(MemoryStore::default());
        store.set_credential("t1".to_string(), "a@b.com".to_string());
        let probe = ScriptedProbe::new(Ok(()));
        block_on(store.validate(&probe)).unwrap();
        assert!(store.is_authenticated());

        // Next protected call reports 401: straight back to Anonymous.
        let rejecting = ScriptedProbe::new(Err(unauthorized()));
        let valid = block_on(store.validate(&rejecting)).unwrap();
        assert!(!valid);
        assert_eq!(store.phase(), AuthPhase::Anonymous);
        assert!(store.token().is_none());
        assert!(store.storage().credential.is_none());
    }

    #[test]
    fn indeterminate_probe_failure_leaves_credential_untouched() {
        let mut store = SessionStore::new(MemoryStore::default());
        store.set_credential("t1".to_string(), "a@b.com".to_string());

        let flaky = ScriptedProbe::new(Err(ApiError::Network("timeout".to_string())));
        let err = block_on(store.validate(&flaky)).unwrap_err();
        assert_eq!(err, ApiError::Network("timeout".to_string()));
        assert_eq!(store.phase(), AuthPhase::Pending);
        assert_eq!(store.token(), Some("t1"));
        assert!(store.storage().credential.is_some());

        let server_error = ScriptedProbe::new(Err(ApiError::Remote {
            status: 503,
            message: "unavailable".to_string(),
        }));
        assert!(block_on(store.validate(&server_error)).is_err());
        assert_eq!(store.token(), Some("t1"));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = SessionStore::new(MemoryStore::default());
        store.set_credential("t1".to_string(), "a@b.com".to_string());

        store.clear();
        let after_once = (store.phase(), store.token().is_none());
        store.clear();
        let after_twice = (store.phase(), store.token().is_none());

        assert_eq!(after_once, after_twice);
        assert_eq!(store.phase(), AuthPhase::Anonymous);
        assert!(store.storage().credential.is_none());
    }
}
