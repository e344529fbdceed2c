use crate::engine::command::Command;
use crate::engine::geometry::Direction;
use crate::engine::settings::PolicySettings;
use crate::engine::{GameMap, Player, Unit};
use crate::error::PolicyError;
use crate::strategy::nearest_base::nearest_base;
use crate::strategy::safe_step::safe_random_step;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitDecision {
    /// Carrying cargo, head for the nearest base.
    Return,
    /// Empty on a nearly exhausted cell, wander somewhere safe.
    Seek,
    /// Empty on a cell still worth harvesting.
    Hold
}

impl UnitDecision {
    pub fn classify(unit: &Unit, cell_halite: u32, settings: &PolicySettings) -> UnitDecision {
        if unit.has_cargo() {
            UnitDecision::Return
        } else if settings.is_low_yield(cell_halite) {
            UnitDecision::Seek
        } else {
            UnitDecision::Hold
        }
    }
}

/// Builds this turn's commands: one move per unit, in `player.units` order,
/// followed by a production command when `should_produce` allows it.
///
/// Units are planned one at a time against the same `map`, so a cell
/// reserved for an earlier unit is unavailable to every later one.
pub fn plan_turn<M: GameMap, R: Rng>(player: &Player, map: &mut M, turn_number: u32, settings: &PolicySettings, rng: &mut R) -> Result<Vec<Command>, PolicyError> {
    let mut commands = Vec::with_capacity(player.units.len() + 1);
    let bases = player.base_positions();

    for unit in &player.units {
        let decision = UnitDecision::classify(unit, map.halite_at(unit.position), settings);
        let direction = match decision {
            UnitDecision::Return => {
                let target = nearest_base(unit.position, &bases, |a, b| map.distance(a, b))?;
                map.naive_navigate(unit, target)
            },
            UnitDecision::Seek => match safe_random_step(unit, map, rng) {
                Some(direction) => direction,
                None => {
                    warn!(unit = %unit.id, position = %unit.position, "unit is surrounded, staying still");
                    Direction::Still
                }
            },
            UnitDecision::Hold => Direction::Still
        };
        debug!(unit = %unit.id, ?decision, %direction, "unit planned");
        commands.push(Command::Move(unit.id, direction));
    }

    if should_produce(player, &*map, turn_number, settings) {
        commands.push(Command::Produce);
    }

    info!(turn_number, units = player.units.len(), commands = commands.len(), "turn planned");
    Ok(commands)
}

/// Early in the game, with enough banked resource and nothing sitting on
/// the home base.
pub fn should_produce<M: GameMap>(player: &Player, map: &M, turn_number: u32, settings: &PolicySettings) -> bool {
    settings.in_production_window(turn_number) &&
        settings.can_afford_unit(player.banked) &&
        !map.is_occupied(player.home_base)
}
