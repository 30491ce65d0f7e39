use serde::{Deserialize, Serialize};

pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const AIR_GAS_CONSTANT: f64 = 287.05287; // J/(kg·K)
pub const AIR_HEAT_CAPACITY_RATIO: f64 = 1.4;
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const ISA_SEA_LEVEL_KINEMATIC_VISCOSITY: f64 = 1.4607e-5; // m^2/s

/// Physical constants shared by every stage reading the variable store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Standard gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Specific gas constant for dry air (J/(kg·K)).
    pub air_gas_constant: f64,
    /// Ratio of specific heats for air.
    pub heat_capacity_ratio: f64,
    /// ISA sea-level temperature (K).
    pub sea_level_temperature: f64,
    /// ISA sea-level density (kg/m³).
    pub sea_level_density: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            air_gas_constant: AIR_GAS_CONSTANT,
            heat_capacity_ratio: AIR_HEAT_CAPACITY_RATIO,
            sea_level_temperature: ISA_SEA_LEVEL_TEMP,
            sea_level_density: ISA_SEA_LEVEL_DENSITY,
        }
    }
}

impl PhysicalConstants {
    /// Speed of sound for an ideal gas at the given temperature (K).
    pub fn speed_of_sound(&self, temperature: f64) -> f64 {
        (self.heat_capacity_ratio * self.air_gas_constant * temperature).sqrt()
    }
}
