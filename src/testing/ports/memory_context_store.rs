//! Test double for `ContextStore`.

use std::cell::{Cell, RefCell};

use crate::domain::{AppError, CurrentContext};
use crate::ports::ContextStore;

/// In-memory context store that counts writes.
#[derive(Debug, Default)]
pub struct MemoryContextStore {
    stored: RefCell<CurrentContext>,
    writes: Cell<usize>,
}

impl MemoryContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: CurrentContext) -> Self {
        Self { stored: RefCell::new(context), writes: Cell::new(0) }
    }

    pub fn stored(&self) -> CurrentContext {
        self.stored.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ContextStore for MemoryContextStore {
    fn load(&self) -> Result<CurrentContext, AppError> {
        Ok(self.stored.borrow().clone())
    }

    fn store(&self, context: &CurrentContext) -> Result<(), AppError> {
        *self.stored.borrow_mut() = context.clone();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
