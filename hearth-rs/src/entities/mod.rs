mod appliance;
mod inventory;

#[doc(inline)]
pub use appliance::Appliance;

#[doc(inline)]
pub use appliance::ApplianceKind;

#[doc(inline)]
pub use inventory::ApplianceKey;

#[doc(inline)]
pub use inventory::Inventory;
