use serde::{Deserialize, Serialize};

/// External representation of an [`Appliance`](crate::entities::Appliance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtAppliance {
    /// Display name of the appliance
    pub name: String,
    /// Rated power draw in watts
    pub rated_power_watts: u32,
    /// Electromagnetic radiation level (unitless scale)
    pub radiation_level: f32,
    /// Whether the appliance starts out plugged in.
    /// Unplugged if not specified
    #[serde(default)]
    pub plugged_in: bool,
    /// Variant of the appliance
    pub kind: ExtApplianceKind,
}

/// The variant set of [`ApplianceKind`](crate::entities::ApplianceKind) and the
/// variant-specific attribute each one carries.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ExtApplianceKind {
    Refrigerator { has_freezer: bool },
    Laptop { screen_size_inches: u32 },
    HairDryer { speed_settings: u32 },
}

/// External representation of a full [`Inventory`](crate::entities::Inventory).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInventory {
    /// The appliances in the dwelling, in inventory order
    pub appliances: Vec<ExtAppliance>,
}
