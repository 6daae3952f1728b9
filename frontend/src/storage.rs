use web_sys::Storage;

use common::session::{Credential, CredentialStore};

use crate::config::{AUTH_EMAIL_KEY, AUTH_TOKEN_KEY};

pub fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// [`CredentialStore`] over the browser's localStorage. Token and email are
/// stored under fixed keys so a reload restores the session.
#[derive(Default)]
pub struct LocalCredentialStore;

impl CredentialStore for LocalCredentialStore {
    fn load(&self) -> Option<Credential> {
        let storage = local_storage()?;
        let token = storage.get_item(AUTH_TOKEN_KEY).ok()??;
        if token.is_empty() {
            return None;
        }
        let email = storage
            .get_item(AUTH_EMAIL_KEY)
            .ok()
            .flatten()
            .unwrap_or_default();
        Some(Credential { token, email })
    }

    fn save(&mut self, credential: &Credential) {
        let Some(storage) = local_storage() else {
            gloo_console::error!("localStorage unavailable; credential not persisted");
            return;
        };
        if storage.set_item(AUTH_TOKEN_KEY, &credential.token).is_err()
            || storage.set_item(AUTH_EMAIL_KEY, &credential.email).is_err()
        {
            gloo_console::error!("failed to persist credential");
        }
    }

    fn clear(&mut self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(AUTH_TOKEN_KEY);
            let _ = storage.remove_item(AUTH_EMAIL_KEY);
        }
    }
}
