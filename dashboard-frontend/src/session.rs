//! Browser-local session persistence: the auth token and display name.

use web_sys::Storage;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn token() -> Option<String> {
    storage()?.get_item(TOKEN_KEY).ok().flatten()
}

pub fn username() -> Option<String> {
    storage()?.get_item(USERNAME_KEY).ok().flatten()
}

/// Persist the credential pair issued at login/register.
pub fn store(token: &str, username: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USERNAME_KEY, username);
    }
}

/// Drop all session state; used on logout and on any verification failure.
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.clear();
    }
}
