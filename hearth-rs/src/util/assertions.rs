use itertools::Itertools;

use crate::entities::{ApplianceKey, Inventory};

//Various checks to verify correctness of the state of the inventory
//Used in debug_assert!() blocks

/// The ordered sequence contains every key exactly once and all of them resolve.
pub fn order_covers_arena(inventory: &Inventory) -> bool {
    let order = inventory.all();
    order.iter().unique().count() == inventory.len()
        && order.iter().all(|&key| inventory.appliance(key).is_ok())
}

/// The given key sequence is non-decreasing in rated power.
pub fn keys_sorted_by_power(inventory: &Inventory, keys: &[ApplianceKey]) -> bool {
    keys.iter()
        .filter_map(|&key| inventory.appliance(key).ok())
        .tuple_windows()
        .all(|(a, b)| a.rated_power_watts() <= b.rated_power_watts())
}
