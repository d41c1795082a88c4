//! Session lifecycle around the model and runtime

use crate::Result;
use chronodeck_core::{Changed, Model, Msg, Runtime};
use chronodeck_db::Store;

/// One running dashboard session
///
/// Explicitly constructed and explicitly closed; no process-wide singleton.
/// All mutations flow through `dispatch` or `tick` so the preference
/// write-through cannot be bypassed.
pub struct Session {
    model: Model,
    runtime: Runtime,
    store: Option<Store>,
}

impl Session {
    /// Create an ephemeral session with no durable storage
    pub fn new(model: Model) -> Self {
        Self {
            model,
            runtime: Runtime::new(),
            store: None,
        }
    }

    /// Create a session backed by durable storage
    ///
    /// Hydration is total: an absent, unreadable, or incompatible preference
    /// record falls back to the default tuple and never fails construction.
    pub fn with_store(mut model: Model, store: Store) -> Self {
        model.prefs = store.load_prefs().ok().flatten().unwrap_or_default();
        Self {
            model,
            runtime: Runtime::new(),
            store: Some(store),
        }
    }

    /// Read access to the current state
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The backing store, if this session has one
    pub fn store(&self) -> Option<&Store> {
        self.store.as_ref()
    }

    /// Queue a message without processing it yet
    pub fn send(&mut self, msg: impl Into<Msg>) {
        self.runtime.send(msg);
    }

    /// Queue a message, drain the queue, and persist preferences if they
    /// changed
    pub fn dispatch(&mut self, msg: impl Into<Msg>) -> Result<Changed> {
        self.runtime.send(msg);
        let changed = self.runtime.process_queue(&mut self.model);
        self.persist_if_changed(changed)?;
        Ok(changed)
    }

    /// Advance the session clock by one tick, then drain the queue
    pub fn tick(&mut self) -> Result<Changed> {
        let changed = self.runtime.tick(&mut self.model);
        self.persist_if_changed(changed)?;
        Ok(changed)
    }

    /// Close the session, flushing preferences on the way out
    pub fn close(self) -> Result<()> {
        if let Some(store) = &self.store {
            store.save_prefs(&self.model.prefs)?;
        }
        Ok(())
    }

    fn persist_if_changed(&self, changed: Changed) -> Result<()> {
        if changed.prefs {
            if let Some(store) = &self.store {
                store.save_prefs(&self.model.prefs)?;
            }
        }
        Ok(())
    }
}
