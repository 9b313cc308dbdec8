/// Checks used to verify the consistency of the inventory's state.
pub mod assertions;
