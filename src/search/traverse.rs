// Region traversal on a toroidal sector map.
//
// Both strategies measure the maximal connected region of one resource
// reachable from a start cell under 4-directional wrap-around adjacency.
// Depth-first runs on an explicit LIFO stack rather than recursion, so the
// worst-case memory is the region size on the heap instead of the call
// stack. Both mark every visited cell in the shared mask, which is how the
// top-k scan avoids measuring the same colony twice.

use std::collections::VecDeque;

use crate::core::types::SectorMap;

const NEIGHBORS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Maps any signed (row, col) onto the torus. Total for rows > 0, cols > 0;
/// callers reject empty maps before wrapping anything.
pub fn wrap(row: i64, col: i64, rows: usize, cols: usize) -> (usize, usize) {
    let r = ((row % rows as i64) + rows as i64) % rows as i64;
    let c = ((col % cols as i64) + cols as i64) % cols as i64;
    (r as usize, c as usize)
}

/// One bool per cell, all false at construction. Owned by a single top-k
/// query and handed `&mut` to each traversal.
#[derive(Debug, Clone)]
pub struct VisitedMask {
    cells: Vec<Vec<bool>>,
}

impl VisitedMask {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { cells: vec![vec![false; cols]; rows] }
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize) {
        self.cells[row][col] = true;
    }
}

/// Depth-first region size from a wrapped start cell. Returns 0 with no
/// side effect if the start is already visited or holds a different value.
pub fn region_size_dfs(
    map: &SectorMap,
    row: i64,
    col: i64,
    resource: i32,
    visited: &mut VisitedMask,
) -> usize {
    let (rows, cols) = (map.len(), map[0].len());
    let (r, c) = wrap(row, col, rows, cols);
    if visited.is_set(r, c) || map[r][c] != resource {
        return 0;
    }

    let mut stack = vec![(r, c)];
    visited.set(r, c);
    let mut size = 0;

    while let Some((cr, cc)) = stack.pop() {
        size += 1;
        for (dr, dc) in NEIGHBORS {
            let (nr, nc) = wrap(cr as i64 + dr, cc as i64 + dc, rows, cols);
            if !visited.is_set(nr, nc) && map[nr][nc] == resource {
                visited.set(nr, nc);
                stack.push((nr, nc));
            }
        }
    }
    size
}

/// Breadth-first region size. Same entry contract as the depth-first form;
/// neighbors are marked on enqueue so no cell is queued twice.
pub fn region_size_bfs(
    map: &SectorMap,
    row: i64,
    col: i64,
    resource: i32,
    visited: &mut VisitedMask,
) -> usize {
    let (rows, cols) = (map.len(), map[0].len());
    let (r, c) = wrap(row, col, rows, cols);
    if visited.is_set(r, c) || map[r][c] != resource {
        return 0;
    }

    let mut queue = VecDeque::new();
    queue.push_back((r, c));
    visited.set(r, c);
    let mut size = 0;

    while let Some((cr, cc)) = queue.pop_front() {
        size += 1;
        for (dr, dc) in NEIGHBORS {
            let (nr, nc) = wrap(cr as i64 + dr, cc as i64 + dc, rows, cols);
            if !visited.is_set(nr, nc) && map[nr][nc] == resource {
                visited.set(nr, nc);
                queue.push_back((nr, nc));
            }
        }
    }
    size
}
