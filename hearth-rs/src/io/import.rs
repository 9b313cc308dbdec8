use crate::entities::{Appliance, ApplianceKind, Inventory};
use crate::errors::InventoryError;
use crate::io::ext_repr::{ExtAppliance, ExtApplianceKind, ExtInventory};

/// Converts an [`ExtAppliance`] into an [`Appliance`].
///
/// Validation happens in the constructor, an external appliance with a blank name,
/// zero wattage or negative radiation level is rejected here. The plug flag is
/// applied after construction.
pub fn import_appliance(ext_appliance: &ExtAppliance) -> Result<Appliance, InventoryError> {
    let kind = match ext_appliance.kind {
        ExtApplianceKind::Refrigerator { has_freezer } => {
            ApplianceKind::Refrigerator { has_freezer }
        }
        ExtApplianceKind::Laptop { screen_size_inches } => {
            ApplianceKind::Laptop { screen_size_inches }
        }
        ExtApplianceKind::HairDryer { speed_settings } => {
            ApplianceKind::HairDryer { speed_settings }
        }
    };

    let mut appliance = Appliance::new(
        ext_appliance.name.clone(),
        ext_appliance.rated_power_watts,
        ext_appliance.radiation_level,
        kind,
    )?;
    if ext_appliance.plugged_in {
        appliance.plug_in();
    }
    Ok(appliance)
}

/// Builds an [`Inventory`] from an external roster, preserving the listed order.
/// Fails on the first invalid appliance, leaving nothing half-imported behind.
pub fn import_inventory(ext_inventory: &ExtInventory) -> Result<Inventory, InventoryError> {
    let mut inventory = Inventory::new();
    for ext_appliance in &ext_inventory.appliances {
        inventory.add(import_appliance(ext_appliance)?);
    }
    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_maps_variant_payload() {
        let ext: ExtAppliance = serde_json::from_str(
            r#"{
                "name": "Samsung Fridge",
                "rated_power_watts": 150,
                "radiation_level": 0.8,
                "kind": { "type": "refrigerator", "has_freezer": true }
            }"#,
        )
        .unwrap();

        let appliance = import_appliance(&ext).unwrap();
        assert_eq!(appliance.name(), "Samsung Fridge");
        assert_eq!(
            appliance.kind(),
            ApplianceKind::Refrigerator { has_freezer: true }
        );
        assert!(!appliance.plugged_in());
    }

    #[test]
    fn test_import_applies_plug_flag() {
        let ext: ExtAppliance = serde_json::from_str(
            r#"{
                "name": "MacBook Pro",
                "rated_power_watts": 60,
                "radiation_level": 0.2,
                "plugged_in": true,
                "kind": { "type": "laptop", "screen_size_inches": 16 }
            }"#,
        )
        .unwrap();

        let appliance = import_appliance(&ext).unwrap();
        assert!(appliance.plugged_in());
    }

    #[test]
    fn test_import_rejects_invalid_appliance() {
        let ext: ExtAppliance = serde_json::from_str(
            r#"{
                "name": "Broken Dryer",
                "rated_power_watts": 0,
                "radiation_level": 1.0,
                "kind": { "type": "hair_dryer", "speed_settings": 2 }
            }"#,
        )
        .unwrap();

        assert!(matches!(
            import_appliance(&ext),
            Err(InventoryError::InvalidArgument(_))
        ));
    }
}
