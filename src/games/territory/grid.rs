use crate::game::traits::PlayerId;

use super::score::ScoreLedger;
use super::state::GridPos;

/// What a grid read sees at a coordinate.
///
/// Off-grid reads yield `OutOfBounds` rather than failing; the movement and
/// claim systems rely on that sentinel to treat the map edge as hostile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    OutOfBounds,
    Free,
    Owned(PlayerId),
}

impl Cell {
    /// External encoding used in snapshots and observations:
    /// -1 = out of bounds, 0 = free, otherwise the owner id.
    pub fn code(&self) -> i32 {
        match self {
            Cell::OutOfBounds => -1,
            Cell::Free => 0,
            Cell::Owned(id) => *id as i32,
        }
    }

    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Cell::Owned(id) => Some(*id),
            _ => None,
        }
    }
}

/// The board: a tile-ownership layer and a trail layer over the same
/// width x height index space. All writes are bounds-checked no-ops off-grid;
/// tile writes keep the embedded score ledger in sync.
pub struct Grid {
    width: u32,
    height: u32,
    /// Ownership data: None = unclaimed, Some(id) = owned by player
    tiles: Vec<Option<PlayerId>>,
    /// Trail data: None = clear, Some(id) = trailed by player
    trails: Vec<Option<PlayerId>>,
    ledger: ScoreLedger,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let cells = (width * height) as usize;
        Self {
            width,
            height,
            tiles: vec![None; cells],
            trails: vec![None; cells],
            ledger: ScoreLedger::new(),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        if self.in_bounds(pos) {
            Some((pos.y as u32 * self.width + pos.x as u32) as usize)
        } else {
            None
        }
    }

    pub fn tile(&self, pos: GridPos) -> Cell {
        match self.index(pos) {
            Some(idx) => self.tiles[idx].map_or(Cell::Free, Cell::Owned),
            None => Cell::OutOfBounds,
        }
    }

    /// Writes a tile owner. On an actual ownership change the (prev, next)
    /// transition is applied to the score ledger in the same call.
    pub fn set_tile(&mut self, pos: GridPos, owner: Option<PlayerId>) {
        if let Some(idx) = self.index(pos) {
            let prev = self.tiles[idx];
            if prev != owner {
                self.tiles[idx] = owner;
                self.ledger.apply(prev, owner);
            }
        }
    }

    pub fn trail(&self, pos: GridPos) -> Cell {
        match self.index(pos) {
            Some(idx) => self.trails[idx].map_or(Cell::Free, Cell::Owned),
            None => Cell::OutOfBounds,
        }
    }

    pub fn set_trail(&mut self, pos: GridPos, owner: Option<PlayerId>) {
        if let Some(idx) = self.index(pos) {
            self.trails[idx] = owner;
        }
    }

    pub fn is_owned_by(&self, pos: GridPos, player_id: PlayerId) -> bool {
        self.tile(pos) == Cell::Owned(player_id)
    }

    pub fn owned_count(&self, player_id: PlayerId) -> usize {
        self.ledger.count(player_id)
    }

    pub fn total_cells(&self) -> usize {
        self.tiles.len()
    }

    pub fn ownership_percentage(&self, player_id: PlayerId) -> f32 {
        let owned = self.owned_count(player_id) as f32;
        let total = self.total_cells() as f32;
        (owned / total) * 100.0
    }

    /// Sweeps the trail layer clearing every mark left by `player_id`.
    pub fn clear_player_trails(&mut self, player_id: PlayerId) {
        for trail in self.trails.iter_mut() {
            if *trail == Some(player_id) {
                *trail = None;
            }
        }
    }

    /// Sweeps the tile layer releasing every cell owned by `player_id`,
    /// decrementing the ledger as it goes.
    pub fn clear_player_territory(&mut self, player_id: PlayerId) {
        for idx in 0..self.tiles.len() {
            if self.tiles[idx] == Some(player_id) {
                self.tiles[idx] = None;
                self.ledger.apply(Some(player_id), None);
            }
        }
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Row-major owner codes of the tile layer (0 = free).
    pub fn tile_codes(&self) -> Vec<i32> {
        self.tiles
            .iter()
            .map(|cell| cell.map_or(0, |id| id as i32))
            .collect()
    }

    /// Row-major owner codes of the trail layer (0 = clear).
    pub fn trail_codes(&self) -> Vec<i32> {
        self.trails
            .iter()
            .map(|cell| cell.map_or(0, |id| id as i32))
            .collect()
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("claimed_cells", &self.ledger.total_owned())
            .finish()
    }
}
