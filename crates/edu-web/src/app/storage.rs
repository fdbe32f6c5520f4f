use edu_client::{ClientError, ClientResult, TokenStore, config::DEFAULT_TOKEN_KEY};

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// localStorage - persists across browser sessions
    Local,
    /// No-op mode - for when storage is disabled or unavailable
    None,
}

/// Thin wrapper over the browser's key/value storage. Outside the browser every
/// read misses and every write is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserStorage {
    storage_type: StorageType,
}

impl BrowserStorage {
    pub fn new(storage_type: StorageType) -> Self {
        Self { storage_type }
    }

    pub fn local() -> Self {
        Self::new(StorageType::Local)
    }

    #[cfg(feature = "web")]
    fn backend(&self) -> Result<Option<web_sys::Storage>, String> {
        if self.storage_type == StorageType::None {
            return Ok(None);
        }
        let window = web_sys::window().ok_or_else(|| "Window not available".to_string())?;
        window.local_storage().map_err(|e| format!("{:?}", e))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "web")]
        {
            let storage = self.backend().ok()??;
            match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key, error = ?e, "failed to read from storage");
                    None
                }
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            None
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(feature = "web")]
        {
            let Some(storage) = self.backend()? else {
                return Ok(());
            };
            storage
                .set_item(key, value)
                .map_err(|e| format!("Failed to set item in storage '{}': {:?}", key, e))
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    pub fn remove(&self, key: &str) -> Result<(), String> {
        #[cfg(feature = "web")]
        {
            let Some(storage) = self.backend()? else {
                return Ok(());
            };
            storage
                .remove_item(key)
                .map_err(|e| format!("Failed to remove item from storage '{}': {:?}", key, e))
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// Bearer token persisted in `localStorage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserTokenStore {
    storage: BrowserStorage,
    key: String,
}

impl BrowserTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            storage: BrowserStorage::local(),
            key: key.into(),
        }
    }
}

impl Default for BrowserTokenStore {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_KEY)
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        self.storage.get(&self.key).filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        self.storage.set(&self.key, token).map_err(ClientError::Storage)
    }

    fn clear(&self) -> ClientResult<()> {
        self.storage.remove(&self.key).map_err(ClientError::Storage)
    }
}
