use crate::engine::command::Command;
use crate::engine::settings::PolicySettings;
use crate::engine::{GameMap, Player, PlayerId};
use crate::error::{EngineError, GameError};
use crate::strategy::turn_policy;

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

pub const DEFAULT_BOT_NAME: &str = "CassiusBot";
pub const DEFAULT_SEED: u64 = 0x7b6a_e1f4_413c_e90f;

/// One refreshed turn handed over by the engine. The map handle is the
/// turn's occupancy state; it is only valid until the next refresh.
pub struct Frame<'a, M: GameMap> {
    pub turn_number: u32,
    pub me: &'a Player,
    pub map: &'a mut M
}

/// The game engine as seen from the bot. Adapters own the wire format.
pub trait Engine {
    type Map: GameMap;

    /// Announces the bot and returns the player id the engine assigned.
    fn ready(&mut self, name: &str) -> Result<PlayerId, EngineError>;
    /// Refreshes the world for the next turn, or `None` once the game is over.
    fn update_frame(&mut self) -> Result<Option<Frame<'_, Self::Map>>, EngineError>;
    fn end_turn(&mut self, commands: &[Command]) -> Result<(), EngineError>;
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub name: String,
    pub seed: u64,
    pub settings: PolicySettings
}

impl Default for BotConfig {
    fn default() -> BotConfig {
        BotConfig {
            name: DEFAULT_BOT_NAME.to_string(),
            seed: DEFAULT_SEED,
            settings: PolicySettings::default()
        }
    }
}

#[derive(Debug)]
pub struct Bot {
    name: String,
    settings: PolicySettings,
    rng: XorShiftRng
}

impl Bot {
    pub fn new(config: BotConfig) -> Result<Bot, GameError> {
        config.settings.validate()?;
        Ok(Bot {
            name: config.name,
            settings: config.settings,
            rng: XorShiftRng::seed_from_u64(config.seed)
        })
    }

    pub fn take_turn<M: GameMap>(&mut self, frame: Frame<'_, M>) -> Result<Vec<Command>, GameError> {
        let commands = turn_policy::plan_turn(frame.me, frame.map, frame.turn_number, &self.settings, &mut self.rng)?;
        Ok(commands)
    }

    /// Plays until the engine reports the game over. The first failure ends
    /// the game; nothing is retried.
    pub fn play<E: Engine>(&mut self, engine: &mut E) -> Result<u32, GameError> {
        let player_id = engine.ready(&self.name).map_err(GameError::Engine)?;
        info!("Successfully created bot! My Player ID is {}.", player_id);

        let mut turns_played = 0;
        loop {
            let frame = match engine.update_frame().map_err(GameError::Engine)? {
                Some(frame) => frame,
                None => break
            };
            let commands = match self.take_turn(frame) {
                Ok(commands) => commands,
                Err(error) => {
                    error!(%error, "turn planning failed");
                    return Err(error);
                }
            };
            engine.end_turn(&commands).map_err(GameError::Engine)?;
            turns_played += 1;
        }

        info!(turns_played, "game over");
        Ok(turns_played)
    }
}
