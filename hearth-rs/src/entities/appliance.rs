use std::fmt;

use log::info;

use crate::errors::InventoryError;

/// A single electrical appliance in the dwelling.
///
/// Everything except the plug state is fixed at construction. [`Appliance::new`]
/// rejects any input violating `rated_power_watts > 0`, `radiation_level >= 0` or
/// a non-blank name, so the invariant holds for the lifetime of the value.
#[derive(Clone, Debug)]
pub struct Appliance {
    name: String,
    /// Rated power draw in watts
    rated_power_watts: u32,
    /// Electromagnetic radiation level (unitless scale)
    radiation_level: f32,
    plugged_in: bool,
    kind: ApplianceKind,
}

impl Appliance {
    /// Creates a new appliance, unplugged.
    ///
    /// Fails with [`InventoryError::InvalidArgument`] when `name` is blank,
    /// `rated_power_watts` is zero or `radiation_level` is negative or non-finite.
    pub fn new(
        name: impl Into<String>,
        rated_power_watts: u32,
        radiation_level: f32,
        kind: ApplianceKind,
    ) -> Result<Self, InventoryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InventoryError::invalid_argument("name must not be blank"));
        }
        if rated_power_watts == 0 {
            return Err(InventoryError::invalid_argument(
                "rated power must be a positive number of watts",
            ));
        }
        if !radiation_level.is_finite() || radiation_level < 0.0 {
            return Err(InventoryError::invalid_argument(format!(
                "radiation level must be finite and non-negative, got {radiation_level}"
            )));
        }

        Ok(Self {
            name,
            rated_power_watts,
            radiation_level,
            plugged_in: false,
            kind,
        })
    }

    /// Plugs the appliance into the socket. Idempotent, a notice is logged either way.
    pub fn plug_in(&mut self) {
        if self.plugged_in {
            info!("{} is already plugged in", self.name);
        } else {
            self.plugged_in = true;
            info!("{} is now plugged in", self.name);
        }
    }

    /// Unplugs the appliance from the socket. Idempotent, a notice is logged either way.
    pub fn unplug(&mut self) {
        if self.plugged_in {
            self.plugged_in = false;
            info!("{} is now unplugged", self.name);
        } else {
            info!("{} is already unplugged", self.name);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rated_power_watts(&self) -> u32 {
        self.rated_power_watts
    }

    pub fn radiation_level(&self) -> f32 {
        self.radiation_level
    }

    /// Whether the appliance is currently plugged into the socket
    pub fn plugged_in(&self) -> bool {
        self.plugged_in
    }

    pub fn kind(&self) -> ApplianceKind {
        self.kind
    }
}

impl fmt::Display for Appliance {
    /// Single-line summary of the appliance's state, used for display only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<15} | Power: {:>4}W | Plugged: {:<5} | EMR Level: {:.2}",
            self.name,
            self.rated_power_watts,
            if self.plugged_in { "Yes" } else { "No" },
            self.radiation_level,
        )?;
        match self.kind {
            ApplianceKind::Refrigerator { has_freezer } => write!(
                f,
                " | Type: Refrigerator (Freezer: {})",
                if has_freezer { "Yes" } else { "No" }
            ),
            ApplianceKind::Laptop { screen_size_inches } => {
                write!(f, " | Type: Laptop (Screen: {screen_size_inches}\")")
            }
            ApplianceKind::HairDryer { speed_settings } => {
                write!(f, " | Type: Hair Dryer (Speeds: {speed_settings})")
            }
        }
    }
}

/// The closed set of appliance variants, each carrying one variant-specific attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplianceKind {
    Refrigerator { has_freezer: bool },
    Laptop { screen_size_inches: u32 },
    HairDryer { speed_settings: u32 },
}

impl ApplianceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ApplianceKind::Refrigerator { .. } => "Refrigerator",
            ApplianceKind::Laptop { .. } => "Laptop",
            ApplianceKind::HairDryer { .. } => "Hair Dryer",
        }
    }
}
