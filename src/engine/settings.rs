use crate::error::PolicyError;

pub const DEFAULT_MAX_CARGO: u32 = 1000;
pub const DEFAULT_PRODUCTION_COST: u32 = 1000;
pub const DEFAULT_PRODUCTION_TURN_CUTOFF: u32 = 200;
pub const DEFAULT_LOW_YIELD_DIVISOR: u32 = 20;

/// Tuning values for the turn policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicySettings {
    pub max_cargo: u32,
    pub production_cost: u32,
    /// Last turn (inclusive) on which a unit may be produced.
    pub production_turn_cutoff: u32,
    /// A cell is "low yield" below `max_cargo / low_yield_divisor`.
    pub low_yield_divisor: u32
}

impl Default for PolicySettings {
    fn default() -> PolicySettings {
        PolicySettings {
            max_cargo: DEFAULT_MAX_CARGO,
            production_cost: DEFAULT_PRODUCTION_COST,
            production_turn_cutoff: DEFAULT_PRODUCTION_TURN_CUTOFF,
            low_yield_divisor: DEFAULT_LOW_YIELD_DIVISOR
        }
    }
}

impl PolicySettings {
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.max_cargo == 0 {
            return Err(PolicyError::InvalidSettings("maxCargo must be positive".to_string()));
        }
        if self.low_yield_divisor == 0 {
            return Err(PolicyError::InvalidSettings("lowYieldDivisor must be positive".to_string()));
        }
        Ok(())
    }

    /// Exact integer form of `cell_halite < max_cargo / low_yield_divisor`.
    pub fn is_low_yield(&self, cell_halite: u32) -> bool {
        u64::from(cell_halite) * u64::from(self.low_yield_divisor) < u64::from(self.max_cargo)
    }

    pub fn in_production_window(&self, turn_number: u32) -> bool {
        turn_number <= self.production_turn_cutoff
    }

    pub fn can_afford_unit(&self, banked: u32) -> bool {
        banked >= self.production_cost
    }
}
