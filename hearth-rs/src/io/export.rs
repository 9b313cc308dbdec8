use itertools::Itertools;

use crate::entities::{Appliance, ApplianceKind, Inventory};
use crate::io::ext_repr::{ExtAppliance, ExtApplianceKind, ExtInventory};

/// Exports the live state of an [`Appliance`], including its current plug state.
pub fn export_appliance(appliance: &Appliance) -> ExtAppliance {
    let kind = match appliance.kind() {
        ApplianceKind::Refrigerator { has_freezer } => {
            ExtApplianceKind::Refrigerator { has_freezer }
        }
        ApplianceKind::Laptop { screen_size_inches } => {
            ExtApplianceKind::Laptop { screen_size_inches }
        }
        ApplianceKind::HairDryer { speed_settings } => {
            ExtApplianceKind::HairDryer { speed_settings }
        }
    };

    ExtAppliance {
        name: appliance.name().to_string(),
        rated_power_watts: appliance.rated_power_watts(),
        radiation_level: appliance.radiation_level(),
        plugged_in: appliance.plugged_in(),
        kind,
    }
}

/// Exports the full inventory in its current order.
pub fn export_inventory(inventory: &Inventory) -> ExtInventory {
    ExtInventory {
        appliances: inventory
            .iter()
            .map(|(_, appliance)| export_appliance(appliance))
            .collect_vec(),
    }
}
