//! Food and power-up placement

use std::collections::HashMap;

use glam::Vec2;
use rand::Rng;

use super::state::{Board, Food, FoodKind};
use crate::consts::*;
use crate::distance;

/// Uniform whole-pixel point at least `margin` away from every edge
pub fn random_point<R: Rng + ?Sized>(board: &Board, margin: u32, rng: &mut R) -> Vec2 {
    let x = rng.random_range(margin..=board.width() - margin);
    let y = rng.random_range(margin..=board.height() - margin);
    Vec2::new(x as f32, y as f32)
}

/// Place food clear of the snake body; gold with `GOLD_FOOD_CHANCE`
pub fn spawn_food<R: Rng + ?Sized>(body: &[Vec2], board: &Board, rng: &mut R) -> Food {
    let pos = find_clear_point(body, board, rng);
    let kind = if rng.random_bool(GOLD_FOOD_CHANCE) {
        FoodKind::Gold
    } else {
        FoodKind::Normal
    };
    log::debug!("Food spawned at ({}, {}) as {:?}", pos.x, pos.y, kind);
    Food { pos, kind }
}

/// Roll for a power-up if none is live; an existing one is left alone
pub fn maybe_spawn_power_up<R: Rng + ?Sized>(
    existing: Option<Vec2>,
    board: &Board,
    chance: f64,
    rng: &mut R,
) -> Option<Vec2> {
    existing.or_else(|| {
        if rng.random_bool(chance) {
            Some(random_point(board, SPAWN_MARGIN, rng))
        } else {
            None
        }
    })
}

fn find_clear_point<R: Rng + ?Sized>(body: &[Vec2], board: &Board, rng: &mut R) -> Vec2 {
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let p = random_point(board, SPAWN_MARGIN, rng);
        if body.iter().all(|s| distance(p, *s) > FOOD_CLEARANCE) {
            return p;
        }
    }

    log::warn!(
        "No clear food spot after {} samples ({} segments), scanning board",
        MAX_SPAWN_ATTEMPTS,
        body.len()
    );
    scan_for_clear_point(body, board)
}

/// Exhaustive whole-pixel scan. Returns the first clear point, or the point
/// with the most room if the body leaves nothing clear.
fn scan_for_clear_point(body: &[Vec2], board: &Board) -> Vec2 {
    let grid = SegmentGrid::new(body);
    let mut best = (f32::NEG_INFINITY, Vec2::new(SPAWN_MARGIN as f32, SPAWN_MARGIN as f32));

    for y in SPAWN_MARGIN..=board.height() - SPAWN_MARGIN {
        for x in SPAWN_MARGIN..=board.width() - SPAWN_MARGIN {
            let p = Vec2::new(x as f32, y as f32);
            let room = grid.clearance(p);
            if room > FOOD_CLEARANCE {
                return p;
            }
            if room > best.0 {
                best = (room, p);
            }
        }
    }

    log::warn!("Board is full, placing food at the roomiest spot ({})", best.0);
    best.1
}

/// Body segments bucketed by `FOOD_CLEARANCE`-sized cells, so a clearance
/// query only has to look at the 3x3 cells around a point.
struct SegmentGrid {
    cells: HashMap<(i32, i32), Vec<Vec2>>,
}

impl SegmentGrid {
    fn new(body: &[Vec2]) -> Self {
        let mut cells: HashMap<(i32, i32), Vec<Vec2>> = HashMap::new();
        for &s in body {
            cells.entry(Self::cell_of(s)).or_default().push(s);
        }
        Self { cells }
    }

    fn cell_of(p: Vec2) -> (i32, i32) {
        (
            (p.x / FOOD_CLEARANCE).floor() as i32,
            (p.y / FOOD_CLEARANCE).floor() as i32,
        )
    }

    /// Distance to the nearest segment, capped to infinity beyond one cell
    fn clearance(&self, p: Vec2) -> f32 {
        let (cx, cy) = Self::cell_of(p);
        let mut nearest = f32::INFINITY;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if let Some(segments) = self.cells.get(&(cx + dx, cy + dy)) {
                    for s in segments {
                        nearest = nearest.min(distance(p, *s));
                    }
                }
            }
        }
        nearest
    }
}
