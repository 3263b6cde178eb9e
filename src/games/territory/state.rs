use crate::game::traits::PlayerId;
use std::collections::HashMap;

use super::grid::Grid;

/// A position on the game grid
///
/// (0,0) is the top-left corner,
/// x increases to the right, y increases downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn moved(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// Manhattan distance.
    pub fn distance(&self, other: GridPos) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }
}

impl std::ops::Add for GridPos {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for GridPos {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::None => Direction::None,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Wire encoding used by `PlayerInput`; anything out of range maps to None.
    pub fn from_code(value: i32) -> Direction {
        match value {
            1 => Direction::Up,
            2 => Direction::Down,
            3 => Direction::Left,
            4 => Direction::Right,
            _ => Direction::None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Direction::None => 0,
            Direction::Up => 1,
            Direction::Down => 2,
            Direction::Left => 3,
            Direction::Right => 4,
        }
    }
}

/// Ordered turning points of a player's current excursion outside its
/// territory. The list is what the claim engine closes into a polygon.
#[derive(Debug, Clone, Default)]
pub struct CornerPath {
    points: Vec<GridPos>,
}

impl CornerPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a corner, skipping consecutive duplicates.
    pub fn push(&mut self, pos: GridPos) {
        if self.points.last() != Some(&pos) {
            self.points.push(pos);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[GridPos] {
        &self.points
    }

    pub fn last(&self) -> Option<GridPos> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Unique player identifier
    pub id: PlayerId,
    /// Display name
    pub name: String,
    /// Current position on the grid
    pub position: GridPos,
    /// Direction of the last committed step
    pub direction: Direction,
    /// Direction requested for the next step
    pub queued_direction: Direction,
    /// Cells carrying this player's trail mark, oldest first.
    /// Empty whenever the player is inside its own territory.
    pub trail: Vec<GridPos>,
    /// Turning points of the current excursion
    pub corners: CornerPath,
    /// Whether the player is currently alive
    pub alive: bool,
    /// Whether the previous step ended inside the player's own territory
    pub was_inside_owned: bool,
    /// Player's score (territory percentage * 100 for integer precision)
    pub score: u32,
    /// Player's color (RGBA packed as u32)
    pub color: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: String, position: GridPos, color: u32) -> Self {
        Self {
            id,
            name,
            position,
            direction: Direction::None,
            queued_direction: Direction::None,
            trail: Vec::new(),
            corners: CornerPath::new(),
            alive: true,
            was_inside_owned: true,
            score: 0,
            color,
        }
    }

    pub fn has_trail(&self) -> bool {
        !self.trail.is_empty()
    }
}

#[derive(Debug)]
pub struct GameState {
    /// All players in the game
    pub players: HashMap<PlayerId, Player>,
    /// Territory and trail layers
    pub grid: Grid,
}

impl GameState {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            players: HashMap::new(),
            grid: Grid::new(width, height),
        }
    }

    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    /// Player ids in ascending order; the tick loop iterates in this order so
    /// simultaneous trail-cut races resolve deterministically.
    pub fn sorted_player_ids(&self) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self.players.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn get_alive_count(&self) -> usize {
        self.players.values().filter(|p| p.alive).count()
    }
}
