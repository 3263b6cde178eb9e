pub mod claim;
pub mod config;
pub mod events;
pub mod grid;
pub mod movement;
pub mod pilot;
pub mod score;
pub mod state;

use std::time::Duration;

use prost::Message;

use crate::game::traits::{Game, GameError, PlayerId, TickResult};
use crate::protocol;

pub use claim::{ClaimOutcome, FillPolicy};
pub use config::{get_player_color, TerritoryConfig};
pub use grid::{Cell, Grid};
pub use state::{CornerPath, Direction, GameState, GridPos, Player};

use events::{DeferredAction, DeferredQueue};

pub struct TerritoryGame {
    /// Current game state
    state: GameState,
    /// Game configuration
    config: TerritoryConfig,
    /// Current tick number
    tick: u64,
    /// Actions waiting for a later tick (respawns)
    deferred: DeferredQueue,
}

impl TerritoryGame {
    pub fn new() -> Self {
        Self::with_config(TerritoryConfig::default())
    }

    pub fn with_config(config: TerritoryConfig) -> Self {
        Self {
            state: GameState::new(config.grid_width, config.grid_height),
            config,
            tick: 0,
            deferred: DeferredQueue::new(),
        }
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &TerritoryConfig {
        &self.config
    }

    fn build_snapshot(&self) -> protocol::territory::WorldState {
        let (width, height) = self.state.grid.dimensions();
        let mut players: Vec<protocol::territory::PlayerSnapshot> = Vec::new();
        for id in self.state.sorted_player_ids() {
            if let Some(player) = self.state.get_player(id) {
                players.push(protocol::territory::PlayerSnapshot {
                    player_id: player.id,
                    name: player.name.clone(),
                    position: Some(protocol::common::GridPos {
                        x: player.position.x,
                        y: player.position.y,
                    }),
                    direction: player.direction.code(),
                    alive: player.alive,
                    score: player.score,
                    color: player.color,
                    trail: player
                        .trail
                        .iter()
                        .map(|p| protocol::common::GridPos { x: p.x, y: p.y })
                        .collect(),
                });
            }
        }
        protocol::territory::WorldState {
            tick: self.tick as u32,
            width,
            height,
            tile_owners: self.state.grid.tile_codes(),
            trail_owners: self.state.grid.trail_codes(),
            players,
        }
    }
}

impl Default for TerritoryGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TerritoryGame {
    fn tick(&mut self) -> TickResult {
        self.tick += 1;
        let mut result = TickResult::default();

        // Step 1: perform respawns that came due this tick
        for action in self.deferred.drain_due(self.tick) {
            match action {
                DeferredAction::Respawn(player_id) => {
                    let dead = self
                        .state
                        .get_player(player_id)
                        .map(|p| !p.alive)
                        .unwrap_or(false);
                    if !dead {
                        continue; // left the game, or already revived
                    }
                    if let Some(pos) = movement::find_spawn_position(&self.state, &self.config) {
                        movement::full_respawn(&mut self.state, player_id, pos, &self.config);
                        result.respawns.push(player_id);
                    }
                }
            }
        }

        // Step 2: movement, trail checks and loop claims
        let step = movement::update_movement(
            &mut self.state,
            &self.config,
            &mut self.deferred,
            self.tick,
        );

        for (player_id, outcome) in &step.claims {
            tracing::info!(
                "Player {} claimed {} cells ({} stolen)",
                player_id,
                outcome.cells_claimed,
                outcome.cells_stolen
            );
        }
        result.eliminated = step.eliminations;
        result.respawns.extend(step.respawns);

        // Step 3: refresh scores from the ledger
        movement::update_scores(&mut self.state);

        result.broadcast = Some(self.encode_state());
        result
    }

    fn handle_input(&mut self, player_id: PlayerId, input: &[u8]) -> Result<(), GameError> {
        let player_input = protocol::territory::PlayerInput::decode(input)
            .map_err(|e| GameError::InvalidInput(format!("Failed to decode input: {}", e)))?;

        if !self.state.players.contains_key(&player_id) {
            return Err(GameError::PlayerNotFound(player_id));
        }

        let direction = Direction::from_code(player_input.direction);

        movement::set_player_direction(
            &mut self.state,
            player_id,
            direction,
            self.config.allow_reverse,
        )
        .map_err(|e| GameError::InvalidInput(e.to_string()))?;

        Ok(())
    }

    fn player_joined(&mut self, player_id: PlayerId, name: String) -> Result<(), GameError> {
        if self.state.players.len() >= self.config.max_players {
            return Err(GameError::InvalidState("Game is full".to_string()));
        }
        if self.state.players.contains_key(&player_id) {
            return Err(GameError::InvalidState(format!(
                "Player {} already joined",
                player_id
            )));
        }

        let spawn_pos = movement::find_spawn_position(&self.state, &self.config)
            .ok_or_else(|| GameError::InvalidState("No valid spawn position".to_string()))?;

        let color = get_player_color(player_id);
        let player = Player::new(player_id, name.clone(), spawn_pos, color);
        self.state.players.insert(player_id, player);

        movement::grant_starting_territory(
            &mut self.state.grid,
            player_id,
            spawn_pos,
            self.config.starting_territory_size,
        );

        movement::update_scores(&mut self.state);

        tracing::info!("Player {} ({}) joined at {:?}", player_id, name, spawn_pos);

        Ok(())
    }

    fn player_left(&mut self, player_id: PlayerId) {
        if let Some(player) = self.state.players.remove(&player_id) {
            self.state.grid.clear_player_territory(player_id);
            self.state.grid.clear_player_trails(player_id);

            tracing::info!("Player {} ({}) left the game", player_id, player.name);
        }
    }

    fn encode_state(&self) -> Vec<u8> {
        self.build_snapshot().encode_to_vec()
    }

    fn tick_rate(&self) -> Duration {
        Duration::from_millis(1000 / self.config.tick_rate_hz as u64)
    }

    fn is_game_over(&self) -> bool {
        !self.get_winners().is_empty()
    }

    fn get_winners(&self) -> Vec<PlayerId> {
        let mut winners: Vec<PlayerId> = self
            .state
            .players
            .values()
            .filter(|p| p.score >= self.config.win_score)
            .map(|p| p.id)
            .collect();
        winners.sort_unstable();
        winners
    }
}
