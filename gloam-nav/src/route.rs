use core::cmp::Ordering;
use std::collections::BinaryHeap;

use gloam_core::Cell;

use crate::BlockingView;

#[derive(Debug)]
struct OpenNode {
    f: u32,
    g: u32,
    cell: Cell,
    tie: u64,
}

impl OpenNode {
    fn key(&self) -> (u32, u32, Cell, u64) {
        (self.f, self.g, self.cell, self.tie)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

fn idx(map: &impl BlockingView, cell: Cell) -> Option<usize> {
    if cell.x < 0 || cell.y < 0 || cell.x >= map.width() || cell.y >= map.height() {
        return None;
    }
    Some((cell.y * map.width() + cell.x) as usize)
}

fn cell_from_idx(map: &impl BlockingView, idx: usize) -> Cell {
    let idx = idx as i32;
    Cell::new(idx % map.width(), idx / map.width())
}

// Fixed order for determinism: N, E, S, W.
fn neighbors(cell: Cell) -> [Cell; 4] {
    [
        cell.offset(0, -1),
        cell.offset(1, 0),
        cell.offset(0, 1),
        cell.offset(-1, 0),
    ]
}

fn reconstruct_path(came_from: &[Option<usize>], mut current: usize) -> Vec<usize> {
    let mut out = vec![current];
    while let Some(prev) = came_from[current] {
        current = prev;
        out.push(current);
    }
    out.reverse();
    out
}

/// A* over 4-directional adjacency with unit step cost and the Manhattan
/// heuristic. Returns the cell sequence inclusive of both endpoints, or
/// `None` when no path exists.
pub fn route(map: &impl BlockingView, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
    let start_idx = idx(map, start)?;
    let goal_idx = idx(map, goal)?;
    if map.is_blocking(start) || map.is_blocking(goal) {
        return None;
    }

    let mut open = BinaryHeap::<OpenNode>::new();
    let mut tie: u64 = 0;

    let grid_len = (map.width() * map.height()) as usize;
    let mut g_score = vec![u32::MAX; grid_len];
    let mut came_from: Vec<Option<usize>> = vec![None; grid_len];

    g_score[start_idx] = 0;
    let h0 = start.manhattan(goal);
    open.push(OpenNode {
        f: h0,
        g: 0,
        cell: start,
        tie,
    });
    tie += 1;

    while let Some(node) = open.pop() {
        if node.cell == goal {
            let idx_path = reconstruct_path(&came_from, goal_idx);
            return Some(idx_path.into_iter().map(|i| cell_from_idx(map, i)).collect());
        }

        let node_idx = idx(map, node.cell)?;
        if node.g != g_score[node_idx] {
            // Stale heap entry.
            continue;
        }

        for n in neighbors(node.cell) {
            let Some(n_idx) = idx(map, n) else { continue };
            if map.is_blocking(n) {
                continue;
            }

            let tentative_g = node.g.saturating_add(1);
            if tentative_g >= g_score[n_idx] {
                continue;
            }

            came_from[n_idx] = Some(node_idx);
            g_score[n_idx] = tentative_g;
            let h = n.manhattan(goal);
            open.push(OpenNode {
                f: tentative_g.saturating_add(h),
                g: tentative_g,
                cell: n,
                tie,
            });
            tie += 1;
        }
    }

    None
}
