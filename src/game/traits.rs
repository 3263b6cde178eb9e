use std::time::Duration;

pub type PlayerId = u32;

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// Player not found in game state
    PlayerNotFound(PlayerId),
    /// Invalid input received
    InvalidInput(String),
    /// Game is not in a valid state for the operation
    InvalidState(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            GameError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            GameError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminationReason {
    /// Trail was crossed by another player
    TrailCut,
    /// Player crossed their own trail
    SelfCollision,
    /// Hit map boundary
    Boundary,
}

/// A death event reported to the controller; the engine never destroys
/// player entries itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elimination {
    /// Player who was eliminated
    pub victim: PlayerId,
    /// Player who caused the elimination (0 for self/boundary)
    pub killer: PlayerId,
    pub reason: EliminationReason,
}

pub struct TickResult {
    pub broadcast: Option<Vec<u8>>,
    pub eliminated: Vec<Elimination>,
    pub respawns: Vec<PlayerId>,
}

impl Default for TickResult {
    fn default() -> Self {
        Self {
            broadcast: None,
            eliminated: Vec::new(),
            respawns: Vec::new(),
        }
    }
}

pub trait Game: Send + Sync {
    fn tick(&mut self) -> TickResult;
    fn handle_input(&mut self, player_id: PlayerId, input: &[u8]) -> Result<(), GameError>;
    fn player_joined(&mut self, player_id: PlayerId, name: String) -> Result<(), GameError>;
    fn player_left(&mut self, player_id: PlayerId);
    fn encode_state(&self) -> Vec<u8>;
    fn encode_state_for_player(&self, player_id: PlayerId) -> Vec<u8> {
        let _ = player_id; // Silence unused warning in default impl
        self.encode_state()
    }
    fn tick_rate(&self) -> Duration;
    fn is_game_over(&self) -> bool {
        false
    }
    fn get_winners(&self) -> Vec<PlayerId> {
        Vec::new()
    }
}
