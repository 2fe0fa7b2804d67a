//! Persisted access-token storage.
//!
//! The bearer token lives in `localStorage` under a fixed key. Presence of
//! a token never implies validity; the session store revalidates it against
//! `/auth/me` before trusting it. Requires a browser environment; on the
//! server every operation is inert.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "access_token";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted access token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the access token.
pub fn store(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted access token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
