//! Ownership of the current context across requests.

use crate::domain::{AppError, ContextUpdate, CurrentContext};
use crate::ports::ContextStore;

/// Owns the in-memory `CurrentContext` and the store it is persisted to.
///
/// Requests borrow the context mutably; the session writes it back through
/// the store. Nothing else reads or writes the stored context.
pub struct Session<S: ContextStore> {
    store: S,
    context: CurrentContext,
}

impl<S: ContextStore> Session<S> {
    /// Load the stored context.
    pub fn load(store: S) -> Result<Self, AppError> {
        let context = store.load()?;
        Ok(Self { store, context })
    }

    pub fn context(&self) -> &CurrentContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut CurrentContext {
        &mut self.context
    }

    /// Partial update, then persist.
    pub fn set_context(&mut self, update: ContextUpdate) -> Result<&CurrentContext, AppError> {
        self.context.set(update);
        self.persist()?;
        Ok(&self.context)
    }

    /// Full overwrite, then persist.
    pub fn save_context(
        &mut self,
        project: &str,
        shot: &str,
        role: &str,
    ) -> Result<&CurrentContext, AppError> {
        self.context.save(project, shot, role);
        self.persist()?;
        Ok(&self.context)
    }

    pub fn clear(&mut self) -> Result<&CurrentContext, AppError> {
        self.context.clear();
        self.persist()?;
        Ok(&self.context)
    }

    /// Write the in-memory context to the store.
    pub fn persist(&self) -> Result<(), AppError> {
        self.store.store(&self.context)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
