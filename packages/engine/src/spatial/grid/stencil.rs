//! Half-neighbour stencil and cell coloring
//!
//! Row-major layout, index = y * width + x, +y is "north".
//!
//! Each home cell is tested against itself and four of its eight
//! neighbours: E, NW, N, NE. For any two adjacent cells A != B:
//! - same row: only the western one reaches the other, through E;
//! - different rows: only the southern one reaches the other, through
//!   exactly one of NW / N / NE.
//! So every unordered adjacent pair is examined exactly once per pass.
//! All four offsets are positive, so an occupied cell at x in [1, w-2],
//! y in [1, h-2] never reads past the allocation.
//!
//! A home cell at (x, y) touches cells in x-1..=x+1, y..=y+1. Two home
//! cells touch a common cell only if |dx| <= 2 and |dy| <= 1, so
//! `color = x % 3 + 3 * (y % 2)` yields classes whose cells can be solved
//! concurrently without sharing a particle.

use super::*;

pub const COLOR_COUNT: usize = 6;

/// Stencil color of the cell at (x, y)
#[inline(always)]
pub fn color_of(x: u32, y: u32) -> usize {
    (x % 3) as usize + 3 * (y % 2) as usize
}

impl CollisionGrid {
    /// Index offsets of the E, NW, N, NE neighbours
    #[inline(always)]
    pub fn half_stencil(&self) -> [usize; 4] {
        let w = self.width as usize;
        [1, w - 1, w, w + 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn touched(grid: &CollisionGrid, x: u32, y: u32) -> Vec<usize> {
        let home = grid.index(x, y);
        let mut out = vec![home];
        out.extend(grid.half_stencil().iter().map(|o| home + o));
        out
    }

    #[test]
    fn every_adjacent_pair_is_visited_exactly_once() {
        let (w, h) = (9u32, 7u32);
        let grid = CollisionGrid::new(w, h);
        let mut visited: Vec<(usize, usize)> = Vec::new();
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                let home = grid.index(x, y);
                for off in grid.half_stencil() {
                    let n = home + off;
                    visited.push((home.min(n), home.max(n)));
                }
            }
        }

        let unique: HashSet<_> = visited.iter().copied().collect();
        assert_eq!(unique.len(), visited.len(), "a cell pair was visited twice");

        // Every 8-connected pair of interior cells must be covered
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                for (dx, dy) in [(-1i32, -1i32), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)] {
                    let nx = x as i32 + dx;
                    let ny = y as i32 + dy;
                    if nx < 1 || ny < 1 || nx > w as i32 - 2 || ny > h as i32 - 2 {
                        continue;
                    }
                    let a = grid.index(x, y);
                    let b = grid.index(nx as u32, ny as u32);
                    assert!(unique.contains(&(a.min(b), a.max(b))), "missed pair {:?}-{:?}", (x, y), (nx, ny));
                }
            }
        }
    }

    #[test]
    fn stencil_stays_inside_allocation_for_margin_cells() {
        let grid = CollisionGrid::new(5, 4);
        let last = grid.index(3, 2);
        for off in grid.half_stencil() {
            assert!(last + off < grid.size());
        }
    }

    #[test]
    fn same_color_cells_touch_disjoint_sets() {
        let (w, h) = (14u32, 10u32);
        let grid = CollisionGrid::new(w, h);
        for color in 0..COLOR_COUNT {
            let mut seen = HashSet::new();
            for y in 1..h - 1 {
                for x in 1..w - 1 {
                    if color_of(x, y) != color {
                        continue;
                    }
                    for c in touched(&grid, x, y) {
                        assert!(seen.insert(c), "color {} shares cell {}", color, c);
                    }
                }
            }
        }
    }
}
