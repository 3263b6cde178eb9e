use crate::game::traits::{Elimination, EliminationReason, PlayerId};

use super::claim::{self, ClaimOutcome};
use super::config::TerritoryConfig;
use super::events::{DeferredAction, DeferredQueue};
use super::grid::{Cell, Grid};
use super::state::{Direction, GameState, GridPos};

/// Everything a movement pass produced, for the tick loop to log and relay.
#[derive(Debug, Default)]
pub struct StepEvents {
    pub eliminations: Vec<Elimination>,
    pub claims: Vec<(PlayerId, ClaimOutcome)>,
    pub respawns: Vec<PlayerId>,
}

/// Advances every alive player one cell. Players are processed in ascending
/// id order; that order is the tie-break for simultaneous mutual trail cuts,
/// so a player killed earlier in the pass does not get to move.
pub fn update_movement(
    state: &mut GameState,
    config: &TerritoryConfig,
    events: &mut DeferredQueue,
    tick: u64,
) -> StepEvents {
    let mut out = StepEvents::default();
    for player_id in state.sorted_player_ids() {
        move_player(state, player_id, config, events, tick, &mut out);
    }
    out
}

fn move_player(
    state: &mut GameState,
    player_id: PlayerId,
    config: &TerritoryConfig,
    events: &mut DeferredQueue,
    tick: u64,
    out: &mut StepEvents,
) {
    let (position, direction, queued, was_inside) = match state.players.get(&player_id) {
        Some(p) if p.alive => (p.position, p.direction, p.queued_direction, p.was_inside_owned),
        _ => return,
    };

    let new_direction = if queued != Direction::None { queued } else { direction };
    if new_direction == Direction::None {
        return; // idle until the first direction arrives
    }

    // A turn taken outside owned ground adds the pivot cell to the polygon.
    if !was_inside
        && direction != Direction::None
        && queued != Direction::None
        && queued != direction
    {
        if let Some(player) = state.players.get_mut(&player_id) {
            player.corners.push(position);
        }
    }

    let new_pos = position.moved(new_direction);

    if !state.grid.in_bounds(new_pos) {
        let elimination = Elimination {
            victim: player_id,
            killer: 0,
            reason: EliminationReason::Boundary,
        };
        eliminate_player(state, events, elimination, config, tick, out);
        return;
    }

    match state.grid.trail(new_pos) {
        Cell::Owned(owner) if owner == player_id => {
            let elimination = Elimination {
                victim: player_id,
                killer: 0,
                reason: EliminationReason::SelfCollision,
            };
            eliminate_player(state, events, elimination, config, tick, out);
            return;
        }
        Cell::Owned(other) => {
            // Cutting an opponent's trail kills them; the mover passes through.
            state.grid.set_trail(new_pos, None);
            let elimination = Elimination {
                victim: other,
                killer: player_id,
                reason: EliminationReason::TrailCut,
            };
            eliminate_player(state, events, elimination, config, tick, out);
        }
        _ => {}
    }

    let is_inside = state.grid.is_owned_by(new_pos, player_id);

    let Some(player) = state.players.get_mut(&player_id) else {
        return;
    };
    player.direction = new_direction;
    player.position = new_pos;

    if !is_inside {
        state.grid.set_trail(new_pos, Some(player_id));
        if player.trail.last() != Some(&new_pos) {
            player.trail.push(new_pos);
        }
    }

    if was_inside && !is_inside {
        // Leaving home: record the crossing edge even when no turn happened.
        player.corners.push(position);
        player.corners.push(new_pos);
    }

    if !was_inside && is_inside {
        player.corners.push(new_pos);
        if let Some(outcome) =
            claim::check_loop(&mut state.grid, &mut player.corners, player_id, config.fill_policy)
        {
            out.claims.push((player_id, outcome));
        }
        for cell in player.trail.drain(..) {
            if state.grid.trail(cell) == Cell::Owned(player_id) {
                state.grid.set_trail(cell, None);
            }
        }
    }

    if was_inside && is_inside && !player.corners.is_empty() {
        // Stale points from spawn; drop them before they poison a claim.
        player.corners.clear();
    }

    player.was_inside_owned = is_inside;
}

/// Queues a direction for the player's next step. Reversals are rejected
/// unless the config allows them; a None direction is ignored so no-input
/// ticks keep the current heading.
pub fn set_player_direction(
    state: &mut GameState,
    player_id: PlayerId,
    new_direction: Direction,
    allow_reverse: bool,
) -> Result<(), &'static str> {
    let player = state
        .players
        .get_mut(&player_id)
        .ok_or("Player not found")?;

    if !player.alive {
        return Err("Player is dead");
    }

    if new_direction == Direction::None {
        return Ok(());
    }

    if !allow_reverse
        && player.direction != Direction::None
        && player.direction.is_opposite(&new_direction)
    {
        return Err("Cannot reverse direction");
    }

    player.queued_direction = new_direction;
    Ok(())
}

/// Kills a player and fully resets its footprint before its next tick:
/// trail cells, corner path and territory are all released. Respawn is
/// scheduled on the deferred queue, or performed immediately when the
/// configured delay is zero.
pub fn eliminate_player(
    state: &mut GameState,
    events: &mut DeferredQueue,
    elimination: Elimination,
    config: &TerritoryConfig,
    tick: u64,
    out: &mut StepEvents,
) {
    let trail_cells = {
        let Some(player) = state.players.get_mut(&elimination.victim) else {
            return;
        };
        if !player.alive {
            return;
        }
        player.alive = false;
        player.direction = Direction::None;
        player.queued_direction = Direction::None;
        player.corners.clear();
        std::mem::take(&mut player.trail)
    };

    for cell in trail_cells {
        if state.grid.trail(cell) == Cell::Owned(elimination.victim) {
            state.grid.set_trail(cell, None);
        }
    }
    state.grid.clear_player_territory(elimination.victim);

    tracing::info!(
        "Player {} eliminated ({:?}, killer {})",
        elimination.victim,
        elimination.reason,
        elimination.killer
    );
    out.eliminations.push(elimination);

    if config.respawn_delay_ticks == 0 {
        if let Some(pos) = find_spawn_position(state, config) {
            full_respawn(state, elimination.victim, pos, config);
            out.respawns.push(elimination.victim);
        }
    } else {
        events.schedule(
            tick + config.respawn_delay_ticks as u64,
            DeferredAction::Respawn(elimination.victim),
        );
    }
}

/// Deterministic spawn search: the grid center first, then a row-major scan
/// for a spot whose starting block is free and which keeps the configured
/// distance from every alive player. Falls back to the center on a crowded
/// map rather than failing.
pub fn find_spawn_position(state: &GameState, config: &TerritoryConfig) -> Option<GridPos> {
    let (width, height) = state.grid.dimensions();
    let center = GridPos::new(width as i32 / 2, height as i32 / 2);

    if spawn_block_is_clear(state, center, config) {
        return Some(center);
    }

    let margin = (config.starting_territory_size / 2) as i32 + 1;
    for y in margin..height as i32 - margin {
        for x in margin..width as i32 - margin {
            let pos = GridPos::new(x, y);
            if spawn_block_is_clear(state, pos, config) {
                return Some(pos);
            }
        }
    }

    Some(center)
}

fn spawn_block_is_clear(state: &GameState, center: GridPos, config: &TerritoryConfig) -> bool {
    let half = (config.starting_territory_size / 2) as i32;
    for dy in -half..=half {
        for dx in -half..=half {
            if state.grid.tile(center.offset(dx, dy)) != Cell::Free {
                return false;
            }
        }
    }
    state
        .players
        .values()
        .filter(|p| p.alive)
        .all(|p| p.position.distance(center) >= config.min_spawn_distance)
}

pub fn grant_starting_territory(
    grid: &mut Grid,
    player_id: PlayerId,
    center: GridPos,
    size: u32,
) {
    let half = (size / 2) as i32;
    for dy in -half..=half {
        for dx in -half..=half {
            grid.set_tile(center.offset(dx, dy), Some(player_id));
        }
    }
}

/// The reset contract: wipe everything the player left behind, move it to
/// `position`, re-seed its starting block and mark it back inside home.
pub fn full_respawn(
    state: &mut GameState,
    player_id: PlayerId,
    position: GridPos,
    config: &TerritoryConfig,
) {
    state.grid.clear_player_trails(player_id);
    state.grid.clear_player_territory(player_id);

    let Some(player) = state.players.get_mut(&player_id) else {
        return;
    };
    player.position = position;
    player.direction = Direction::None;
    player.queued_direction = Direction::None;
    player.trail.clear();
    player.corners.clear();
    player.alive = true;
    player.was_inside_owned = true;

    grant_starting_territory(
        &mut state.grid,
        player_id,
        position,
        config.starting_territory_size,
    );

    tracing::info!("Player {} respawned at {:?}", player_id, position);
}

pub fn update_scores(state: &mut GameState) {
    let player_ids: Vec<PlayerId> = state.players.keys().copied().collect();

    for player_id in player_ids {
        let percentage = state.grid.ownership_percentage(player_id);
        // Store as integer with 2 decimal precision (e.g., 12.34% -> 1234)
        let score = (percentage * 100.0) as u32;

        if let Some(player) = state.players.get_mut(&player_id) {
            player.score = score;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::state::Player;

    fn test_config() -> TerritoryConfig {
        TerritoryConfig {
            grid_width: 20,
            grid_height: 20,
            respawn_delay_ticks: 5,
            min_spawn_distance: 0,
            ..Default::default()
        }
    }

    fn setup_game_state() -> GameState {
        GameState::new(20, 20)
    }

    fn setup_player_with_territory(state: &mut GameState, player_id: PlayerId) {
        let spawn = GridPos::new(10, 10);
        let player = Player::new(player_id, "Test".to_string(), spawn, 0xFFFFFFFF);
        state.players.insert(player_id, player);
        grant_starting_territory(&mut state.grid, player_id, spawn, 3);
    }

    fn step(state: &mut GameState, config: &TerritoryConfig, tick: u64) -> StepEvents {
        let mut events = DeferredQueue::new();
        update_movement(state, config, &mut events, tick)
    }

    #[test]
    fn test_player_moves_in_direction() {
        let mut state = setup_game_state();
        let config = test_config();
        setup_player_with_territory(&mut state, 1);

        set_player_direction(&mut state, 1, Direction::Right, false).unwrap();
        let initial_pos = state.get_player(1).unwrap().position;

        step(&mut state, &config, 1);

        let player = state.get_player(1).unwrap();
        assert_eq!(player.position, initial_pos.moved(Direction::Right));
        assert_eq!(player.direction, Direction::Right);
    }

    #[test]
    fn test_player_stationary_without_direction() {
        let mut state = setup_game_state();
        let config = test_config();
        setup_player_with_territory(&mut state, 1);

        let initial_pos = state.get_player(1).unwrap().position;
        step(&mut state, &config, 1);

        assert_eq!(state.get_player(1).unwrap().position, initial_pos);
    }

    #[test]
    fn test_exit_transition_stamps_trail_and_corners() {
        let mut state = setup_game_state();
        let config = test_config();
        setup_player_with_territory(&mut state, 1);

        // Right edge of the 3x3 starting block
        state.players.get_mut(&1).unwrap().position = GridPos::new(11, 10);
        set_player_direction(&mut state, 1, Direction::Right, false).unwrap();

        step(&mut state, &config, 1);

        let player = state.get_player(1).unwrap();
        assert_eq!(player.position, GridPos::new(12, 10));
        assert!(!player.was_inside_owned);
        assert!(player.has_trail());
        assert_eq!(state.grid.trail(GridPos::new(12, 10)), Cell::Owned(1));
        // Crossing edge: the last owned cell and the first outside cell
        assert_eq!(
            player.corners.points(),
            &[GridPos::new(11, 10), GridPos::new(12, 10)]
        );
    }

    #[test]
    fn test_corner_recorded_on_turn_outside() {
        let mut state = setup_game_state();
        let config = test_config();
        setup_player_with_territory(&mut state, 1);

        state.players.get_mut(&1).unwrap().position = GridPos::new(11, 10);
        set_player_direction(&mut state, 1, Direction::Right, false).unwrap();
        step(&mut state, &config, 1); // exit at (12,10)
        step(&mut state, &config, 2); // (13,10)

        set_player_direction(&mut state, 1, Direction::Down, false).unwrap();
        step(&mut state, &config, 3);

        let player = state.get_player(1).unwrap();
        assert_eq!(player.position, GridPos::new(13, 11));
        assert_eq!(
            player.corners.points(),
            &[
                GridPos::new(11, 10),
                GridPos::new(12, 10),
                GridPos::new(13, 10),
            ]
        );
    }

    #[test]
    fn test_loop_closure_claims_enclosed_area() {
        let mut state = setup_game_state();
        let config = test_config();
        setup_player_with_territory(&mut state, 1);
        assert_eq!(state.grid.owned_count(1), 9);

        // Walk a rectangle outside the block and re-enter it from below.
        set_player_direction(&mut state, 1, Direction::Right, false).unwrap();
        let mut tick = 0;
        let mut events = DeferredQueue::new();
        let mut claims = Vec::new();
        let mut drive = |state: &mut GameState, dir: Direction, steps: u32, tick: &mut u64, events: &mut DeferredQueue, claims: &mut Vec<(PlayerId, ClaimOutcome)>| {
            set_player_direction(state, 1, dir, false).unwrap();
            for _ in 0..steps {
                *tick += 1;
                let out = update_movement(state, &config, events, *tick);
                claims.extend(out.claims);
            }
        };

        drive(&mut state, Direction::Right, 3, &mut tick, &mut events, &mut claims); // (13,10)
        drive(&mut state, Direction::Down, 2, &mut tick, &mut events, &mut claims); // (13,12)
        drive(&mut state, Direction::Left, 2, &mut tick, &mut events, &mut claims); // (11,12)
        drive(&mut state, Direction::Up, 1, &mut tick, &mut events, &mut claims); // (11,11), inside

        let player = state.get_player(1).unwrap();
        assert!(player.was_inside_owned);
        assert!(player.corners.is_empty());
        assert!(!player.has_trail());

        // The 3x3 block grew by the 7 cells of the walked rectangle.
        assert_eq!(state.grid.owned_count(1), 16);
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].1.cells_claimed, 7);

        // The excursion's trail marks are gone.
        assert!(state.grid.trail_codes().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_self_trail_death() {
        let mut state = setup_game_state();
        let config = test_config();
        setup_player_with_territory(&mut state, 1);

        // Park the player outside its territory facing its own trail mark.
        {
            let player = state.players.get_mut(&1).unwrap();
            player.position = GridPos::new(5, 5);
            player.was_inside_owned = false;
            player.trail.push(GridPos::new(6, 5));
        }
        state.grid.set_trail(GridPos::new(6, 5), Some(1));
        set_player_direction(&mut state, 1, Direction::Right, false).unwrap();

        let mut events = DeferredQueue::new();
        let out = update_movement(&mut state, &config, &mut events, 10);

        assert_eq!(out.eliminations.len(), 1);
        assert_eq!(out.eliminations[0].victim, 1);
        assert_eq!(out.eliminations[0].reason, EliminationReason::SelfCollision);

        let player = state.get_player(1).unwrap();
        assert!(!player.alive);
        assert!(player.corners.is_empty());
        assert!(!player.has_trail());
        // Death releases the player's footprint entirely
        assert_eq!(state.grid.owned_count(1), 0);
        assert_eq!(state.grid.trail(GridPos::new(6, 5)), Cell::Free);
        // Respawn is queued for later, not performed now
        assert!(!events.is_empty());
        assert_eq!(events.drain_due(15), vec![DeferredAction::Respawn(1)]);
    }

    #[test]
    fn test_opponent_trail_cut() {
        let mut state = setup_game_state();
        let config = test_config();
        setup_player_with_territory(&mut state, 1);

        let victim_spawn = GridPos::new(4, 4);
        state
            .players
            .insert(2, Player::new(2, "Victim".to_string(), victim_spawn, 0xFF00FFFF));
        grant_starting_territory(&mut state.grid, 2, victim_spawn, 3);
        {
            let victim = state.players.get_mut(&2).unwrap();
            victim.position = GridPos::new(6, 10);
            victim.was_inside_owned = false;
            victim.trail.push(GridPos::new(6, 10));
        }
        state.grid.set_trail(GridPos::new(6, 10), Some(2));

        // Player 1 walks out of its block into the victim's trail cell.
        state.players.get_mut(&1).unwrap().position = GridPos::new(7, 10);
        state.players.get_mut(&1).unwrap().was_inside_owned = false;
        set_player_direction(&mut state, 1, Direction::Left, false).unwrap();

        let mut events = DeferredQueue::new();
        let out = update_movement(&mut state, &config, &mut events, 1);

        assert_eq!(out.eliminations.len(), 1);
        assert_eq!(
            out.eliminations[0],
            Elimination {
                victim: 2,
                killer: 1,
                reason: EliminationReason::TrailCut
            }
        );

        // The victim is fully reset; the killer walks on unharmed.
        assert!(!state.get_player(2).unwrap().alive);
        assert_eq!(state.grid.owned_count(2), 0);
        let killer = state.get_player(1).unwrap();
        assert!(killer.alive);
        assert_eq!(killer.position, GridPos::new(6, 10));
        // The cut cell now carries the killer's trail
        assert_eq!(state.grid.trail(GridPos::new(6, 10)), Cell::Owned(1));
    }

    #[test]
    fn test_mutual_cut_resolved_in_id_order() {
        let mut state = setup_game_state();
        let config = test_config();
        setup_player_with_territory(&mut state, 1);

        state
            .players
            .insert(2, Player::new(2, "Second".to_string(), GridPos::new(9, 2), 0xFF00FFFF));

        // Each player's next cell holds the other's trail.
        {
            let p1 = state.players.get_mut(&1).unwrap();
            p1.position = GridPos::new(5, 5);
            p1.was_inside_owned = false;
            p1.trail.push(GridPos::new(10, 2));
        }
        state.grid.set_trail(GridPos::new(10, 2), Some(1));
        {
            let p2 = state.players.get_mut(&2).unwrap();
            p2.position = GridPos::new(9, 2);
            p2.was_inside_owned = false;
            p2.trail.push(GridPos::new(6, 5));
        }
        state.grid.set_trail(GridPos::new(6, 5), Some(2));

        set_player_direction(&mut state, 1, Direction::Right, false).unwrap();
        set_player_direction(&mut state, 2, Direction::Right, false).unwrap();

        let mut events = DeferredQueue::new();
        let out = update_movement(&mut state, &config, &mut events, 1);

        // Lower id moves first: player 1 cuts player 2, who never gets to move.
        assert_eq!(out.eliminations.len(), 1);
        assert_eq!(out.eliminations[0].victim, 2);
        assert!(state.get_player(1).unwrap().alive);
        assert!(!state.get_player(2).unwrap().alive);
    }

    #[test]
    fn test_boundary_death() {
        let mut state = setup_game_state();
        let config = test_config();
        setup_player_with_territory(&mut state, 1);

        state.players.get_mut(&1).unwrap().position = GridPos::new(10, 0);
        set_player_direction(&mut state, 1, Direction::Up, false).unwrap();

        let mut events = DeferredQueue::new();
        let out = update_movement(&mut state, &config, &mut events, 1);

        assert_eq!(out.eliminations.len(), 1);
        assert_eq!(out.eliminations[0].reason, EliminationReason::Boundary);
        assert!(!state.get_player(1).unwrap().alive);
        assert_eq!(state.grid.owned_count(1), 0);
    }

    #[test]
    fn test_immediate_respawn_with_zero_delay() {
        let mut state = setup_game_state();
        let config = TerritoryConfig {
            respawn_delay_ticks: 0,
            ..test_config()
        };
        setup_player_with_territory(&mut state, 1);

        state.players.get_mut(&1).unwrap().position = GridPos::new(10, 0);
        set_player_direction(&mut state, 1, Direction::Up, false).unwrap();

        let mut events = DeferredQueue::new();
        let out = update_movement(&mut state, &config, &mut events, 1);

        assert_eq!(out.respawns, vec![1]);
        assert!(events.is_empty());
        let player = state.get_player(1).unwrap();
        assert!(player.alive);
        assert!(player.was_inside_owned);
        assert_eq!(state.grid.owned_count(1), 9);
    }

    #[test]
    fn test_cannot_reverse_direction() {
        let mut state = setup_game_state();
        setup_player_with_territory(&mut state, 1);
        let config = test_config();

        set_player_direction(&mut state, 1, Direction::Right, false).unwrap();
        step(&mut state, &config, 1);

        let result = set_player_direction(&mut state, 1, Direction::Left, false);
        assert!(result.is_err());
        assert_eq!(state.get_player(1).unwrap().queued_direction, Direction::Right);
    }

    #[test]
    fn test_reverse_allowed_by_policy() {
        let mut state = setup_game_state();
        setup_player_with_territory(&mut state, 1);
        let config = test_config();

        set_player_direction(&mut state, 1, Direction::Right, true).unwrap();
        step(&mut state, &config, 1);

        set_player_direction(&mut state, 1, Direction::Left, true).unwrap();
        assert_eq!(state.get_player(1).unwrap().queued_direction, Direction::Left);
    }

    #[test]
    fn test_none_input_keeps_heading() {
        let mut state = setup_game_state();
        setup_player_with_territory(&mut state, 1);

        set_player_direction(&mut state, 1, Direction::Right, false).unwrap();
        set_player_direction(&mut state, 1, Direction::None, false).unwrap();
        assert_eq!(state.get_player(1).unwrap().queued_direction, Direction::Right);
    }

    #[test]
    fn test_can_turn_90_degrees() {
        let mut state = setup_game_state();
        setup_player_with_territory(&mut state, 1);

        set_player_direction(&mut state, 1, Direction::Right, false).unwrap();
        set_player_direction(&mut state, 1, Direction::Up, false).unwrap();
        assert_eq!(state.get_player(1).unwrap().queued_direction, Direction::Up);
    }

    #[test]
    fn test_steady_state_clears_stale_corners() {
        let mut state = setup_game_state();
        let config = test_config();
        setup_player_with_territory(&mut state, 1);

        // Leftover points from initialization
        state
            .players
            .get_mut(&1)
            .unwrap()
            .corners
            .push(GridPos::new(0, 0));
        state.players.get_mut(&1).unwrap().position = GridPos::new(9, 10);
        set_player_direction(&mut state, 1, Direction::Right, false).unwrap();

        step(&mut state, &config, 1); // (10,10), still inside

        let player = state.get_player(1).unwrap();
        assert!(player.was_inside_owned);
        assert!(player.corners.is_empty());
    }

    #[test]
    fn test_full_respawn_contract() {
        let mut state = setup_game_state();
        let config = test_config();
        setup_player_with_territory(&mut state, 1);

        let mut events = DeferredQueue::new();
        let mut out = StepEvents::default();
        let elimination = Elimination {
            victim: 1,
            killer: 0,
            reason: EliminationReason::Boundary,
        };
        eliminate_player(&mut state, &mut events, elimination, &config, 1, &mut out);
        assert!(!state.get_player(1).unwrap().alive);

        let spawn = GridPos::new(4, 15);
        full_respawn(&mut state, 1, spawn, &config);

        let player = state.get_player(1).unwrap();
        assert!(player.alive);
        assert!(player.was_inside_owned);
        assert_eq!(player.position, spawn);
        assert_eq!(player.direction, Direction::None);
        assert!(player.corners.is_empty());
        assert!(!player.has_trail());
        for dy in -1..=1 {
            for dx in -1..=1 {
                assert!(state.grid.is_owned_by(spawn.offset(dx, dy), 1));
            }
        }
        assert_eq!(state.grid.owned_count(1), 9);
    }

    #[test]
    fn test_spawn_position_respects_min_distance() {
        let mut state = setup_game_state();
        let config = TerritoryConfig {
            min_spawn_distance: 15,
            ..test_config()
        };
        setup_player_with_territory(&mut state, 1); // alive at the center

        let spawn = find_spawn_position(&state, &config).unwrap();
        assert_ne!(spawn, GridPos::new(10, 10));
        assert!(spawn.distance(GridPos::new(10, 10)) >= 15);

        // The block there is actually free
        for dy in -1..=1 {
            for dx in -1..=1 {
                assert_eq!(state.grid.tile(spawn.offset(dx, dy)), Cell::Free);
            }
        }
    }

    #[test]
    fn test_update_scores() {
        let mut state = GameState::new(10, 10); // 100 cells

        state
            .players
            .insert(1, Player::new(1, "Test".to_string(), GridPos::new(5, 5), 0xFFFFFFFF));

        for x in 0..10 {
            state.grid.set_tile(GridPos::new(x, 0), Some(1));
        }

        update_scores(&mut state);

        let player = state.get_player(1).unwrap();
        assert_eq!(player.score, 1000); // 10.00% * 100 = 1000
    }
}
