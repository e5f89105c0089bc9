use super::*;

impl CollisionGrid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.cells.len() }

    // === Index conversion (row-major, +y = next row) ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "index: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + x as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.width as usize) as u32;
        let y = (idx / self.width as usize) as u32;
        (x, y)
    }

    /// True if a particle at (x, y) may be inserted (strictly inside the border ring)
    #[inline]
    pub fn in_margin(&self, x: f32, y: f32) -> bool {
        x > 1.0 && x < (self.width as f32 - 1.0) && y > 1.0 && y < (self.height as f32 - 1.0)
    }

    // === Cell access ===
    #[inline]
    pub fn cells(&self) -> &[CollisionCell] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, idx: usize) -> &CollisionCell {
        &self.cells[idx]
    }

    #[inline]
    pub fn cell_at(&self, x: u32, y: u32) -> &CollisionCell {
        &self.cells[self.index(x, y)]
    }

    /// Cell lookup for stencil traversal; bounds are only checked in debug builds
    #[inline(always)]
    pub(crate) fn cell_fast(&self, idx: usize) -> &CollisionCell {
        fast!(self.cells, [idx])
    }
}
