use std::collections::{HashMap, HashSet, VecDeque};

use crate::game::traits::PlayerId;

use super::grid::{Cell, Grid};
use super::state::{CornerPath, GridPos};

/// Neighbor probe order for path repair and flood fill. Fixed so both
/// searches are reproducible for a given grid and input.
const NEIGHBORS: [GridPos; 4] = [
    GridPos { x: 0, y: -1 },
    GridPos { x: 1, y: 0 },
    GridPos { x: 0, y: 1 },
    GridPos { x: -1, y: 0 },
];

/// Sample offsets for the strict interior test: one point near each corner
/// of a cell. A cell is accepted only if all four fall inside the polygon,
/// which keeps the fill from leaking through diagonal pinches.
const CORNER_OFFSETS: [(f64, f64); 4] = [(0.1, 0.1), (0.1, 0.9), (0.9, 0.1), (0.9, 0.9)];

/// Which interior test the flood fill applies per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillPolicy {
    /// Accept a cell when its center lies inside the polygon.
    CellCenter,
    /// Accept a cell only when all four corner samples lie inside.
    #[default]
    FourCorner,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClaimOutcome {
    /// Number of new cells the owner gained
    pub cells_claimed: usize,
    /// Number of cells taken over from other players
    pub cells_stolen: usize,
    /// Players who lost territory, ascending, deduplicated
    pub victims: Vec<PlayerId>,
}

/// Loop-closure check run when a player re-enters its own territory.
///
/// Only the last corner matters: if it sits on the owner's territory the
/// excursion closed a loop and the enclosed area is claimed; otherwise the
/// player merely grazed its border and nothing happens.
pub fn check_loop(
    grid: &mut Grid,
    path: &mut CornerPath,
    owner: PlayerId,
    policy: FillPolicy,
) -> Option<ClaimOutcome> {
    let last = path.last()?;
    if grid.tile(last) != Cell::Owned(owner) {
        return None;
    }
    let outcome = claim_enclosed_area(grid, owner, path.points(), policy);
    path.clear();
    Some(outcome)
}

/// Closes the corner path into a polygon, flood-fills its interior and
/// paints its boundary, stamping every claimed cell with `owner`.
///
/// Degenerate input (fewer than 2 corners) leaves the grid untouched and
/// returns a zero outcome.
pub fn claim_enclosed_area(
    grid: &mut Grid,
    owner: PlayerId,
    corners: &[GridPos],
    policy: FillPolicy,
) -> ClaimOutcome {
    let mut outcome = ClaimOutcome::default();
    if corners.len() < 2 {
        return outcome;
    }

    let before = grid.owned_count(owner);

    let polygon = close_polygon(grid, corners, owner);
    let seed = find_interior_seed(grid, &polygon);
    flood_fill(grid, seed, &polygon, owner, policy, &mut outcome);
    paint_boundary(grid, &polygon, owner, &mut outcome);

    outcome.cells_claimed = grid.owned_count(owner).saturating_sub(before);
    outcome.victims.sort_unstable();
    outcome.victims.dedup();
    outcome
}

/// The raw corner list is the path walked outside the owner's territory; its
/// endpoints both touch owned ground but are not connected through it. This
/// appends a compressed return path found through the owned region, yielding
/// a closed polygon. If the owned region does not connect the endpoints the
/// raw corners are used as-is.
fn close_polygon(grid: &Grid, corners: &[GridPos], owner: PlayerId) -> Vec<GridPos> {
    let mut polygon: Vec<GridPos> = Vec::with_capacity(corners.len() + 8);
    for &p in corners {
        if polygon.last() != Some(&p) {
            polygon.push(p);
        }
    }
    if polygon.len() < 2 {
        return polygon;
    }

    let first = polygon[0];
    let last = polygon[polygon.len() - 1];
    if let Some(return_path) = return_path_through_owned(grid, last, first, owner) {
        for p in return_path.into_iter().skip(1) {
            if !polygon.contains(&p) {
                polygon.push(p);
            }
        }
    }
    polygon
}

/// Breadth-first search from `start` over tiles owned by `owner` until a
/// tile adjacent to `goal` is reached. Returns the walked path from `start`
/// to that tile, compressed to its endpoints and direction changes.
fn return_path_through_owned(
    grid: &Grid,
    start: GridPos,
    goal: GridPos,
    owner: PlayerId,
) -> Option<Vec<GridPos>> {
    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    let mut parent: HashMap<GridPos, GridPos> = HashMap::new();

    queue.push_back(start);
    visited.insert(start);

    let mut meet = None;
    while let Some(current) = queue.pop_front() {
        if current.distance(goal) == 1 {
            meet = Some(current);
            break;
        }
        for step in NEIGHBORS {
            let next = current + step;
            if visited.contains(&next) || grid.tile(next) != Cell::Owned(owner) {
                continue;
            }
            visited.insert(next);
            parent.insert(next, current);
            queue.push_back(next);
        }
    }

    let meet = meet?;
    let mut walk = vec![meet];
    let mut current = meet;
    while current != start {
        current = *parent.get(&current)?;
        walk.push(current);
    }
    walk.reverse();
    Some(compress_collinear(&walk))
}

/// Keeps the endpoints and every point where the step direction changes,
/// dropping collinear interior points.
fn compress_collinear(path: &[GridPos]) -> Vec<GridPos> {
    if path.len() <= 2 {
        return path.to_vec();
    }
    let mut out = vec![path[0]];
    for i in 1..path.len() - 1 {
        let before = path[i] - path[i - 1];
        let after = path[i + 1] - path[i];
        if before != after {
            out.push(path[i]);
        }
    }
    out.push(path[path.len() - 1]);
    out
}

/// Probes the four axis-neighbors of every polygon vertex for an in-bounds
/// cell whose center lies inside the polygon. Falls back to the rounded
/// centroid when every probe fails.
fn find_interior_seed(grid: &Grid, polygon: &[GridPos]) -> GridPos {
    for &vertex in polygon {
        for step in NEIGHBORS {
            let candidate = vertex + step;
            if grid.in_bounds(candidate)
                && point_in_polygon(
                    candidate.x as f64 + 0.5,
                    candidate.y as f64 + 0.5,
                    polygon,
                )
            {
                return candidate;
            }
        }
    }

    let n = polygon.len().max(1) as f64;
    let sx: f64 = polygon.iter().map(|p| p.x as f64).sum();
    let sy: f64 = polygon.iter().map(|p| p.y as f64).sum();
    GridPos::new((sx / n).round() as i32, (sy / n).round() as i32)
}

/// Even-odd ray casting. The half-open comparison on the y span keeps
/// vertices and horizontal edges from being counted twice.
fn point_in_polygon(px: f64, py: f64, polygon: &[GridPos]) -> bool {
    let n = polygon.len();
    let mut inside = false;
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let (xi, yi) = (polygon[i].x as f64, polygon[i].y as f64);
        let (xj, yj) = (polygon[j].x as f64, polygon[j].y as f64);
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn cell_is_interior(pos: GridPos, polygon: &[GridPos], policy: FillPolicy) -> bool {
    match policy {
        FillPolicy::CellCenter => {
            point_in_polygon(pos.x as f64 + 0.5, pos.y as f64 + 0.5, polygon)
        }
        FillPolicy::FourCorner => CORNER_OFFSETS.iter().all(|&(dx, dy)| {
            point_in_polygon(pos.x as f64 + dx, pos.y as f64 + dy, polygon)
        }),
    }
}

/// BFS from `seed`, stamping every in-bounds cell that passes the interior
/// test. Neighbors of rejected cells are not expanded, so the search stays
/// inside the polygon.
fn flood_fill(
    grid: &mut Grid,
    seed: GridPos,
    polygon: &[GridPos],
    owner: PlayerId,
    policy: FillPolicy,
    outcome: &mut ClaimOutcome,
) {
    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    queue.push_back(seed);
    visited.insert(seed);

    while let Some(current) = queue.pop_front() {
        if !grid.in_bounds(current) {
            continue;
        }
        if !cell_is_interior(current, polygon, policy) {
            continue;
        }
        stamp(grid, current, owner, outcome);
        for step in NEIGHBORS {
            let next = current + step;
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
}

/// Rasterizes every polygon edge onto the grid with integer stepping, so
/// thin edges are claimed even where the strict interior test excluded them.
fn paint_boundary(grid: &mut Grid, polygon: &[GridPos], owner: PlayerId, outcome: &mut ClaimOutcome) {
    for pair in polygon.windows(2) {
        paint_segment(grid, pair[0], pair[1], owner, outcome);
    }
}

fn paint_segment(
    grid: &mut Grid,
    from: GridPos,
    to: GridPos,
    owner: PlayerId,
    outcome: &mut ClaimOutcome,
) {
    let steps = (to.x - from.x).abs().max((to.y - from.y).abs());
    let step = GridPos::new((to.x - from.x).signum(), (to.y - from.y).signum());

    let mut current = from;
    stamp(grid, current, owner, outcome);
    for _ in 0..steps {
        current = current + step;
        stamp(grid, current, owner, outcome);
    }
}

fn stamp(grid: &mut Grid, pos: GridPos, owner: PlayerId, outcome: &mut ClaimOutcome) {
    match grid.tile(pos) {
        Cell::Free => grid.set_tile(pos, Some(owner)),
        Cell::Owned(prev) if prev != owner => {
            outcome.cells_stolen += 1;
            outcome.victims.push(prev);
            grid.set_tile(pos, Some(owner));
        }
        _ => {}
    }
}
