use super::grid::{Cell, Grid};
use super::state::{Direction, GridPos, Player};

/// Where a player's next direction comes from. The engine only consumes
/// directions through the input layer, so human keys, scripted bots and
/// learned policies are interchangeable behind this trait.
pub trait DirectionSource {
    fn next_direction(&mut self, player: &Player, grid: &Grid) -> Direction;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leg {
    Right,
    Up,
    Left,
    Down,
    Returning,
}

impl Leg {
    fn for_direction(direction: Direction) -> Option<Leg> {
        match direction {
            Direction::Right => Some(Leg::Right),
            Direction::Up => Some(Leg::Up),
            Direction::Left => Some(Leg::Left),
            Direction::Down => Some(Leg::Down),
            Direction::None => None,
        }
    }
}

fn perpendicular(direction: Direction) -> [Direction; 2] {
    match direction {
        Direction::Right | Direction::Left => [Direction::Up, Direction::Down],
        _ => [Direction::Right, Direction::Left],
    }
}

/// Scripted pilot that claims ground by drawing rectangles: fixed-length
/// excursion legs followed by a walk back home, steering clear of the map
/// edge the whole way.
pub struct RectanglePilot {
    leg: Leg,
    steps: u32,
    horizontal_steps: u32,
    vertical_steps: u32,
    wall_margin: i32,
}

impl RectanglePilot {
    pub fn new() -> Self {
        Self::with_legs(10, 8)
    }

    pub fn with_legs(horizontal_steps: u32, vertical_steps: u32) -> Self {
        Self {
            leg: Leg::Right,
            steps: 0,
            horizontal_steps,
            vertical_steps,
            wall_margin: 3,
        }
    }

    fn is_safe(&self, grid: &Grid, pos: GridPos) -> bool {
        let (width, height) = grid.dimensions();
        pos.x > self.wall_margin
            && pos.x < width as i32 - self.wall_margin
            && pos.y > self.wall_margin
            && pos.y < height as i32 - self.wall_margin
    }

    fn danger_ahead(&self, grid: &Grid, player: &Player) -> bool {
        player.direction != Direction::None
            && !self.is_safe(grid, player.position.moved(player.direction))
    }

    fn evasive_direction(&self, grid: &Grid, player: &Player) -> Direction {
        for dir in perpendicular(player.direction) {
            if self.is_safe(grid, player.position.moved(dir)) {
                return dir;
            }
        }
        player.direction
    }

    /// Prefer a 90-degree turn that steps straight onto owned ground; failing
    /// that, any safe turn; failing that, hold course.
    fn homeward_direction(&self, grid: &Grid, player: &Player) -> Direction {
        let turns = perpendicular(player.direction);
        for dir in turns {
            let next = player.position.moved(dir);
            if self.is_safe(grid, next) && grid.tile(next) == Cell::Owned(player.id) {
                return dir;
            }
        }
        for dir in turns {
            if self.is_safe(grid, player.position.moved(dir)) {
                return dir;
            }
        }
        player.direction
    }

    fn decide(&mut self, player: &Player, grid: &Grid) -> Direction {
        if self.danger_ahead(grid, player) {
            let evade = self.evasive_direction(grid, player);
            if let Some(leg) = Leg::for_direction(evade) {
                self.leg = leg;
            }
            self.steps = 0;
            return evade;
        }

        match self.leg {
            Leg::Right => {
                if self.steps >= self.horizontal_steps {
                    self.leg = Leg::Up;
                    self.steps = 0;
                    return Direction::Up;
                }
                self.steps += 1;
                Direction::Right
            }
            Leg::Up => {
                if self.steps >= self.vertical_steps
                    || !self.is_safe(grid, player.position.moved(Direction::Up))
                {
                    self.leg = Leg::Left;
                    self.steps = 0;
                    return Direction::Left;
                }
                self.steps += 1;
                Direction::Up
            }
            Leg::Left => {
                if self.steps >= self.horizontal_steps
                    || !self.is_safe(grid, player.position.moved(Direction::Left))
                {
                    self.leg = Leg::Down;
                    self.steps = 0;
                    return Direction::Down;
                }
                self.steps += 1;
                Direction::Left
            }
            Leg::Down => {
                if self.steps >= self.vertical_steps
                    || !self.is_safe(grid, player.position.moved(Direction::Down))
                {
                    self.leg = Leg::Returning;
                    self.steps = 0;
                    return self.homeward_direction(grid, player);
                }
                self.steps += 1;
                Direction::Down
            }
            Leg::Returning => {
                if player.was_inside_owned {
                    self.leg = Leg::Right;
                    self.steps = 0;
                    Direction::Right
                } else {
                    self.homeward_direction(grid, player)
                }
            }
        }
    }
}

impl Default for RectanglePilot {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionSource for RectanglePilot {
    fn next_direction(&mut self, player: &Player, grid: &Grid) -> Direction {
        let wanted = self.decide(player, grid);
        // Reversals would be rejected by the input layer anyway
        if wanted != Direction::None && !wanted.is_opposite(&player.direction) {
            wanted
        } else {
            Direction::None
        }
    }
}
