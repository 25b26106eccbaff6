use crate::domain::{AppError, CurrentContext};

/// Port for persisting the current context between requests.
pub trait ContextStore {
    /// Load the stored context; an absent store yields the empty context.
    fn load(&self) -> Result<CurrentContext, AppError>;

    /// Replace the stored context.
    fn store(&self, context: &CurrentContext) -> Result<(), AppError>;
}
