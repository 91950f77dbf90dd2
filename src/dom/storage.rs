//! `localStorage`-backed preference store.
//!
//! A browser that refuses storage (private mode, disabled cookies) still gets
//! a working page; reads come back empty and writes report [`Error::Storage`].

use web_sys::{Storage, Window};

use crate::error::Error;
use crate::util::storage::KeyValueStore;

pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    /// Open the origin's `localStorage`.
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let Some(storage) = &self.storage else {
            return Err(Error::Storage("localStorage is not available".to_owned()));
        };
        storage
            .set_item(key, value)
            .map_err(|err| Error::Storage(format!("{err:?}")))
    }
}
