//! Persistence of the bearer token between page loads.

use std::sync::{Arc, Mutex};

use crate::error::{ClientError, ClientResult};

/// Where the session token lives. The web app backs this with `localStorage`.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        (**self).save(token)
    }

    fn clear(&self) -> ClientResult<()> {
        (**self).clear()
    }
}

/// Process-local store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().ok()?.clone()
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        let mut slot = self.slot.lock().map_err(|e| ClientError::Storage(e.to_string()))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        let mut slot = self.slot.lock().map_err(|e| ClientError::Storage(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}
