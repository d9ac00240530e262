//! Any-angle (Theta*) shortest-path search over an 8-connected occupancy
//! grid, with parent-shortcutting via line-of-sight (§4.4).
//!
//! The open set is a binary heap keyed by `f = g + w*h`, with lazy
//! decrease-key: relaxing a node pushes a fresh heap entry rather than
//! mutating one in place, and a popped entry whose cost no longer matches
//! the node's authoritative `g` is a stale duplicate, skipped on pop. Node
//! storage is an `IndexMap` keyed by cell — adapted from this crate's own
//! grid-pathfinding module, which uses the same `fxhash`-backed `IndexMap`
//! + lazy-heap pattern for an unrelated (quadtree-cell) search.

use fxhash::FxHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::BuildHasherDefault;

use crate::{line_of_sight, OccupancyGrid, PlanError, Point};

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

struct NodeRecord {
    g: f32,
    h: f32,
    parent: usize,
}

struct HeapEntry {
    f: f32,
    h: f32,
    g: f32,
    index: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.h == other.h && self.index == other.index
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    // `BinaryHeap` is a max-heap; invert every comparison so the entry with
    // the smallest `f` (ties: smallest `h`, then earliest-inserted index)
    // sorts as the greatest and is popped first.
    fn cmp(&self, other: &Self) -> Ordering {
        match other.f.partial_cmp(&self.f).unwrap() {
            Ordering::Equal => match other.h.partial_cmp(&self.h).unwrap() {
                Ordering::Equal => other.index.cmp(&self.index),
                ord => ord,
            },
            ord => ord,
        }
    }
}

/// Run Theta* with the default heuristic weight (1.0, admissible) and
/// 8-connected neighbors.
#[inline]
pub fn theta_star_default(
    grid: &OccupancyGrid,
    start: Point,
    goal: Point,
) -> Result<Option<Vec<Point>>, PlanError> {
    theta_star(grid, start, goal, 1.0, true)
}

/// Find a short, any-angle, obstacle-avoiding path from `start` to `goal`
/// over `grid` (§4.4, §6 Planner entry point).
///
/// `heuristic_weight >= 1.0` trades optimality for speed: `1.0` is
/// admissible, larger values run weighted A* (suboptimal by at most a
/// factor of `heuristic_weight`). `diagonals = false` restricts expansion to
/// the four cardinal neighbors.
///
/// Returns `Err(PlanError::BlockedOrOutOfBounds)` if `start` or `goal` is out
/// of the grid's bounds or sits on a blocked cell — the API refuses rather
/// than silently forcing the cell free. Returns `Ok(None)` if no path
/// exists; that is a valid outcome, not an error (§7).
pub fn theta_star(
    grid: &OccupancyGrid,
    start: Point,
    goal: Point,
    heuristic_weight: f32,
    diagonals: bool,
) -> Result<Option<Vec<Point>>, PlanError> {
    if !grid.is_free(start) || !grid.is_free(goal) {
        return Err(PlanError::BlockedOrOutOfBounds);
    }

    if start == goal {
        return Ok(Some(vec![start]));
    }

    tracing::debug!(?start, ?goal, heuristic_weight, diagonals, "theta_star: search starting");

    let mut nodes: FxIndexMap<Point, NodeRecord> = FxIndexMap::default();
    let mut closed: Vec<bool> = Vec::new();

    let start_h = start.distance_to(goal);
    nodes.insert(
        start,
        NodeRecord {
            g: 0.0,
            h: start_h,
            parent: 0,
        },
    );
    closed.push(false);

    let mut open = BinaryHeap::new();
    open.push(HeapEntry {
        f: heuristic_weight * start_h,
        h: start_h,
        g: 0.0,
        index: 0,
    });

    while let Some(HeapEntry { g, index, .. }) = open.pop() {
        if closed[index] {
            continue;
        }
        let (s_cell, s_g, s_parent) = {
            let (cell, record) = nodes.get_index(index).unwrap();
            (*cell, record.g, record.parent)
        };
        if g != s_g {
            continue; // stale: g improved since this entry was pushed
        }

        if s_cell == goal {
            tracing::debug!(cost = s_g, considered = nodes.len(), "theta_star: goal reached");
            return Ok(Some(reconstruct_path(&nodes, index)));
        }

        closed[index] = true;

        let neighbors: Vec<Point> = if diagonals {
            s_cell.neighbors8().to_vec()
        } else {
            s_cell.neighbors4().to_vec()
        };

        for neighbor in neighbors {
            if !grid.is_free(neighbor) {
                continue;
            }
            if let Some(i) = nodes.get_index_of(&neighbor) {
                if closed[i] {
                    continue;
                }
            }

            update_vertex(
                &mut nodes,
                &mut closed,
                &mut open,
                grid,
                goal,
                heuristic_weight,
                index,
                s_cell,
                s_g,
                s_parent,
                neighbor,
            );
        }
    }

    tracing::debug!(considered = nodes.len(), "theta_star: open set exhausted, no path");
    Ok(None)
}

/// `UpdateVertex(s, n)` (§4.4): shortcut through `parent(s)` when it has
/// line-of-sight to `n`, else fall back to the ordinary edge `s -> n`, else
/// leave `n` unrelaxed.
#[allow(clippy::too_many_arguments)]
fn update_vertex(
    nodes: &mut FxIndexMap<Point, NodeRecord>,
    closed: &mut Vec<bool>,
    open: &mut BinaryHeap<HeapEntry>,
    grid: &OccupancyGrid,
    goal: Point,
    heuristic_weight: f32,
    s_index: usize,
    s_cell: Point,
    s_g: f32,
    s_parent: usize,
    neighbor: Point,
) {
    let (parent_cell, parent_g) = {
        let (cell, record) = nodes.get_index(s_parent).unwrap();
        (*cell, record.g)
    };

    let (from_cell, from_g, from_index) = if line_of_sight(parent_cell, neighbor, grid) {
        (parent_cell, parent_g, s_parent)
    } else if line_of_sight(s_cell, neighbor, grid) {
        (s_cell, s_g, s_index)
    } else {
        return;
    };

    let tentative_g = from_g + from_cell.distance_to(neighbor);

    match nodes.entry(neighbor) {
        Vacant(entry) => {
            let h = neighbor.distance_to(goal);
            let index = entry.index();
            entry.insert(NodeRecord {
                g: tentative_g,
                h,
                parent: from_index,
            });
            closed.push(false);
            open.push(HeapEntry {
                f: tentative_g + heuristic_weight * h,
                h,
                g: tentative_g,
                index,
            });
        }
        Occupied(mut entry) => {
            if tentative_g < entry.get().g {
                let h = entry.get().h;
                let index = entry.index();
                entry.get_mut().g = tentative_g;
                entry.get_mut().parent = from_index;
                open.push(HeapEntry {
                    f: tentative_g + heuristic_weight * h,
                    h,
                    g: tentative_g,
                    index,
                });
            }
        }
    }
}

/// Walk `parent` indices from `goal_index` until a node is its own parent
/// (the self-parented start sentinel), then reverse.
fn reconstruct_path(nodes: &FxIndexMap<Point, NodeRecord>, goal_index: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut index = goal_index;
    loop {
        let (cell, record) = nodes.get_index(index).unwrap();
        path.push(*cell);
        if record.parent == index {
            break;
        }
        index = record.parent;
    }
    path.reverse();
    path
}
