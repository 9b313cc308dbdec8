use thiserror::Error;

/// Errors reported by appliance construction and inventory operations.
///
/// Every failure is raised synchronously at the offending call, before any state is
/// mutated. There is no partial-failure state to recover from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A precondition on the supplied arguments was violated
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A key that does not resolve to an appliance in this inventory
    #[error("key does not resolve to an appliance in this inventory")]
    UnknownKey,
}

impl InventoryError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
