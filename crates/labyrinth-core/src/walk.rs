//! Automatic walks over the labyrinth graph.
//!
//! Walks resolve rooms exactly like the navigator does but never touch a
//! session's history. The graph is cyclic and, through procedural rooms,
//! unbounded, so every walk carries its own stopping rule.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use crate::catalog::RoomCatalog;
use crate::room::RoomId;

/// Why a walk ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason", content = "room")]
pub enum StopReason {
    /// The step budget ran out.
    MaxSteps,
    /// The next door led into a room already on the path.
    Revisit(RoomId),
    /// The current room has no doors.
    DeadEnd,
}

/// The rooms a walk passed through, in order, and why it stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walk {
    /// Distinct rooms in visiting order, starting with the start room.
    pub path: Vec<RoomId>,
    /// Why the walk ended.
    pub stop: StopReason,
}

impl Walk {
    /// Number of doors taken.
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }
}

/// Always take the first door of each room.
pub fn leftmost_walk(catalog: &RoomCatalog, start: RoomId, max_steps: usize) -> Walk {
    walk_with(catalog, start, max_steps, |doors| doors.first().cloned())
}

/// Take a uniformly random door at each room.
pub fn random_walk<R: Rng + ?Sized>(
    catalog: &RoomCatalog,
    start: RoomId,
    max_steps: usize,
    rng: &mut R,
) -> Walk {
    walk_with(catalog, start, max_steps, |doors| doors.choose(&mut *rng).cloned())
}

fn walk_with<F>(catalog: &RoomCatalog, start: RoomId, max_steps: usize, mut pick: F) -> Walk
where
    F: FnMut(&[RoomId]) -> Option<RoomId>,
{
    let mut path = vec![start];
    loop {
        if path.len() > max_steps {
            return Walk {
                path,
                stop: StopReason::MaxSteps,
            };
        }

        let current = &path[path.len() - 1];
        let targets: Vec<RoomId> = catalog.resolve(current).targets().cloned().collect();
        let Some(next) = pick(&targets) else {
            return Walk {
                path,
                stop: StopReason::DeadEnd,
            };
        };

        if path.contains(&next) {
            tracing::debug!(room = %next, steps = path.len() - 1, "walk closed a loop");
            return Walk {
                path,
                stop: StopReason::Revisit(next),
            };
        }
        path.push(next);
    }
}

/// Bounds for [`explore`].
#[derive(Debug, Clone, Copy)]
pub struct ExploreLimits {
    /// Rooms further than this many doors from the start are not entered.
    pub max_depth: usize,
    /// Exploration stops once this many distinct rooms were reached.
    pub max_rooms: usize,
}

impl Default for ExploreLimits {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_rooms: 10_000,
        }
    }
}

/// How an exploration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExploreStatus {
    /// Every room within the depth limit was reached.
    Completed,
    /// The room budget ran out first.
    RoomLimit,
}

/// Statistics of a depth-first exploration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExploreSummary {
    /// How the exploration ended.
    pub status: ExploreStatus,
    /// Distinct rooms reached, including the start.
    pub rooms: usize,
    /// Doors examined across all expanded rooms.
    pub doors_tried: usize,
    /// Deepest distance from the start at which a room was reached.
    pub max_depth: usize,
    /// Reached rooms that are not in the catalog.
    pub uncharted: usize,
}

struct Frame {
    depth: usize,
    targets: Vec<RoomId>,
    next: usize,
}

/// Depth-first exploration with backtracking.
///
/// Doors are tried in declared order. A room is expanded again only when it
/// is reached at a shallower depth than before, so the result matches the
/// set of rooms within `max_depth` doors of `start`.
pub fn explore(catalog: &RoomCatalog, start: RoomId, limits: ExploreLimits) -> ExploreSummary {
    let mut best: HashMap<RoomId, usize> = HashMap::new();
    let mut doors_tried = 0;
    let mut status = ExploreStatus::Completed;

    let mut stack = Vec::new();
    if limits.max_rooms > 0 {
        stack.push(frame(catalog, &start, 0, limits.max_depth));
        best.insert(start, 0);
    } else {
        status = ExploreStatus::RoomLimit;
    }

    while let Some(top) = stack.last_mut() {
        let Some(target) = top.targets.get(top.next).cloned() else {
            stack.pop();
            continue;
        };
        top.next += 1;
        doors_tried += 1;
        let depth = top.depth + 1;
        let known = best.len();

        match best.entry(target.clone()) {
            Entry::Occupied(mut seen) => {
                if *seen.get() <= depth {
                    continue;
                }
                seen.insert(depth);
            }
            Entry::Vacant(slot) => {
                if known >= limits.max_rooms {
                    status = ExploreStatus::RoomLimit;
                    break;
                }
                slot.insert(depth);
            }
        }
        stack.push(frame(catalog, &target, depth, limits.max_depth));
    }

    let summary = ExploreSummary {
        status,
        rooms: best.len(),
        doors_tried,
        max_depth: best.values().copied().max().unwrap_or(0),
        uncharted: best.keys().filter(|id| !catalog.contains(id)).count(),
    };
    tracing::debug!(?summary, "exploration finished");
    summary
}

fn frame(catalog: &RoomCatalog, id: &RoomId, depth: usize, max_depth: usize) -> Frame {
    let targets = if depth < max_depth {
        catalog.resolve(id).targets().cloned().collect()
    } else {
        Vec::new()
    };
    Frame {
        depth,
        targets,
        next: 0,
    }
}
