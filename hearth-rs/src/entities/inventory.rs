use itertools::Itertools;
use log::warn;
use slotmap::{SlotMap, new_key_type};

use crate::entities::Appliance;
use crate::errors::InventoryError;
use crate::util::assertions;

new_key_type! {
    /// Unique key to address an [`Appliance`] within an [`Inventory`].
    pub struct ApplianceKey;
}

/// Holds all appliances of a dwelling and answers aggregate queries over them.
///
/// Appliances live in a keyed arena. Their position in the ordered sequence starts
/// out as insertion order and is re-ordered in place by
/// [`Inventory::sort_by_power_ascending`]. Callers keep the [`ApplianceKey`] returned
/// by [`Inventory::add`] and toggle plug state through [`Inventory::appliance_mut`];
/// every query recomputes from the live collection, so such mutations are immediately
/// visible. No removal operation exists, the inventory grows monotonically.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    /// All appliances, indexed by a unique key
    appliances: SlotMap<ApplianceKey, Appliance>,
    /// Current order of the appliances
    order: Vec<ApplianceKey>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `appliance` into the inventory, appending it to the end of the ordered
    /// sequence. Returns the key under which it can be addressed from now on.
    /// Duplicate names or specs are permitted.
    pub fn add(&mut self, appliance: Appliance) -> ApplianceKey {
        let key = self.appliances.insert(appliance);
        self.order.push(key);
        debug_assert!(assertions::order_covers_arena(self));
        key
    }

    /// Resolves a key to the appliance it addresses.
    /// Fails with [`InventoryError::UnknownKey`] when the key does not resolve to an
    /// appliance in this inventory.
    pub fn appliance(&self, key: ApplianceKey) -> Result<&Appliance, InventoryError> {
        self.appliances.get(key).ok_or(InventoryError::UnknownKey)
    }

    /// Mutable counterpart of [`Inventory::appliance`], used to toggle plug state.
    pub fn appliance_mut(&mut self, key: ApplianceKey) -> Result<&mut Appliance, InventoryError> {
        self.appliances
            .get_mut(key)
            .ok_or(InventoryError::UnknownKey)
    }

    /// Total rated power of all appliances that are currently plugged in.
    /// An empty inventory totals 0 W, with an advisory warning.
    pub fn total_active_power(&self) -> u64 {
        if self.order.is_empty() {
            warn!("inventory is empty, total active power defaults to 0 W");
            return 0;
        }
        self.iter()
            .filter(|(_, appliance)| appliance.plugged_in())
            .map(|(_, appliance)| appliance.rated_power_watts() as u64)
            .sum()
    }

    /// Re-orders the backing sequence in place by rated power, ascending, and returns
    /// a snapshot of the newly ordered keys. The sort is stable: appliances with equal
    /// rated power keep their relative order.
    pub fn sort_by_power_ascending(&mut self) -> Vec<ApplianceKey> {
        if self.order.is_empty() {
            warn!("inventory is empty, nothing to sort");
            return vec![];
        }
        let Self { appliances, order } = self;
        order.sort_by_key(|&key| appliances[key].rated_power_watts());

        debug_assert!(assertions::keys_sorted_by_power(self, &self.all()));
        self.order.clone()
    }

    /// Keys of every appliance whose radiation level lies within
    /// `[min_level, max_level]` (closed interval), in the current order of the
    /// inventory.
    ///
    /// Fails with [`InventoryError::InvalidArgument`] when either bound is negative
    /// or non-finite, or when `min_level > max_level`, regardless of the inventory's
    /// contents. An empty result is a normal outcome and yields an empty vector
    /// along with an advisory warning, never an error.
    pub fn find_by_emission_range(
        &self,
        min_level: f32,
        max_level: f32,
    ) -> Result<Vec<ApplianceKey>, InventoryError> {
        if !min_level.is_finite()
            || !max_level.is_finite()
            || min_level < 0.0
            || max_level < 0.0
            || min_level > max_level
        {
            return Err(InventoryError::invalid_argument(format!(
                "invalid radiation range [{min_level} - {max_level}], \
                 bounds must be non-negative and min <= max"
            )));
        }
        if self.order.is_empty() {
            warn!("inventory is empty, no search performed");
            return Ok(vec![]);
        }

        let matches = self
            .iter()
            .filter(|(_, appliance)| {
                (min_level..=max_level).contains(&appliance.radiation_level())
            })
            .map(|(key, _)| key)
            .collect_vec();

        if matches.is_empty() {
            warn!("no appliances found in range [{min_level} - {max_level}]");
        }
        Ok(matches)
    }

    /// Snapshot of all keys in the current order, which reflects the most recent
    /// sort, if any.
    pub fn all(&self) -> Vec<ApplianceKey> {
        self.order.clone()
    }

    /// Iterates over `(key, appliance)` pairs in the current order.
    pub fn iter(&self) -> impl Iterator<Item = (ApplianceKey, &Appliance)> {
        self.order.iter().map(|&key| (key, &self.appliances[key]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
