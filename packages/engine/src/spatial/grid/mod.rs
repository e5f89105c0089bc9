//! Collision grid - dense uniform grid of fixed-capacity cells
//!
//! One cell per unit square of the world (cell size = particle diameter).
//! Rebuilt once per external frame, not per sub-step.
//!
//! The 1-unit border ring of the world is never inserted into: callers only
//! insert particles strictly inside `(1, size - 1)` on both axes. That ring
//! is the padding that keeps every half-stencil neighbour of an occupied
//! cell inside the allocation, so the hot path skips bounds checks.

use crate::domain::ParticleId;

mod cell;
pub use cell::{CollisionCell, CELL_CAPACITY};

mod indexing;
mod stencil;
pub use stencil::{color_of, COLOR_COUNT};

pub struct CollisionGrid {
    width: u32,
    height: u32,
    cells: Vec<CollisionCell>,
    /// Cells that received at least one insertion this frame, each listed once
    occupied: Vec<u32>,
    /// `occupied` split by stencil color; same-colored cells never share a neighbour
    color_classes: [Vec<u32>; COLOR_COUNT],
    dropped_inserts: usize,
    /// One past the largest id stored since the last `clear()`
    id_bound: usize,
}

impl CollisionGrid {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "collision grid dimensions must be positive, got {}x{}",
            width,
            height
        );
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![CollisionCell::default(); size],
            occupied: Vec::new(),
            color_classes: Default::default(),
            dropped_inserts: 0,
            id_bound: 0,
        }
    }

    /// Empty every cell and the occupied list. Only occupied cells can be
    /// non-empty, so this is O(occupied) rather than O(width * height).
    pub fn clear(&mut self) {
        for &idx in &self.occupied {
            fast_mut!(self.cells, [idx as usize]).clear();
        }
        self.occupied.clear();
        for class in self.color_classes.iter_mut() {
            class.clear();
        }
        self.dropped_inserts = 0;
        self.id_bound = 0;
    }

    /// Insert particle `id` into the cell containing (x, y).
    ///
    /// Returns false when (x, y) is outside the collision margin
    /// (`1 < x < width - 1`, `1 < y < height - 1`, NaN included) or when the
    /// cell is full and the particle is dropped from collision for this frame.
    pub fn insert(&mut self, x: f32, y: f32, id: ParticleId) -> bool {
        if !self.in_margin(x, y) {
            return false;
        }
        let cx = x as u32;
        let cy = y as u32;
        let idx = self.index(cx, cy);
        let cell = fast_mut!(self.cells, [idx]);
        let first = cell.is_empty();
        if !cell.add(id) {
            self.dropped_inserts += 1;
            return false;
        }
        if first {
            self.occupied.push(idx as u32);
            self.color_classes[color_of(cx, cy)].push(idx as u32);
        }
        self.id_bound = self.id_bound.max(id as usize + 1);
        true
    }

    #[inline]
    pub fn occupied(&self) -> &[u32] {
        &self.occupied
    }

    #[inline]
    pub fn color_classes(&self) -> &[Vec<u32>; COLOR_COUNT] {
        &self.color_classes
    }

    /// Every stored id is below this; a store shorter than it cannot be solved
    #[inline]
    pub fn id_bound(&self) -> usize {
        self.id_bound
    }

    /// Insertions dropped by full cells since the last `clear()`
    #[inline]
    pub fn dropped_inserts(&self) -> usize {
        self.dropped_inserts
    }
}
