//! Storage wrapper.

use crate::error::{Error, Result};
use crate::models::{StoredPrefs, PREFS_KEY};
use chronodeck_core::UserPrefs;
use native_db::*;
use std::path::Path;
use std::sync::LazyLock;

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<StoredPrefs>().unwrap();
    models
});

/// Durable store for user preferences.
pub struct Store {
    db: Database<'static>,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new()
            .create(&MODELS, path.as_ref())
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Save the preference record, replacing any prior one.
    pub fn save_prefs(&self, prefs: &UserPrefs) -> Result<()> {
        let stored = StoredPrefs::from_prefs(prefs);
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        Ok(())
    }

    /// Load the preference record, if one has been saved.
    pub fn load_prefs(&self) -> Result<Option<UserPrefs>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredPrefs> = r.get().primary(PREFS_KEY.to_string())?;
        Ok(stored.map(|s| s.to_prefs()))
    }

    /// Remove the preference record.
    pub fn clear(&self) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        let stored: Option<StoredPrefs> = rw.get().primary(PREFS_KEY.to_string())?;
        if let Some(s) = stored {
            rw.remove(s)?;
        }
        rw.commit()?;
        Ok(())
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}
