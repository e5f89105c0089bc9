use crate::domain::ParticleId;

/// Max concurrent occupants of one unit cell. Unit-diameter particles
/// that are not overlapping fit at most 4 to a cell.
pub const CELL_CAPACITY: usize = 4;

/// Fixed-capacity bucket of particle ids, stored inline (no per-cell heap)
#[derive(Clone, Copy, Debug)]
pub struct CollisionCell {
    objects: [ParticleId; CELL_CAPACITY],
    count: u8,
}

impl Default for CollisionCell {
    fn default() -> Self {
        Self {
            objects: [0; CELL_CAPACITY],
            count: 0,
        }
    }
}

impl CollisionCell {
    /// Append `id`. Returns false (and drops the id for this frame) when full.
    #[inline(always)]
    pub fn add(&mut self, id: ParticleId) -> bool {
        let n = self.count as usize;
        if n >= CELL_CAPACITY {
            return false;
        }
        self.objects[n] = id;
        self.count += 1;
        true
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count as usize
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline(always)]
    pub fn objects(&self) -> &[ParticleId] {
        &self.objects[..self.count as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_until_full_then_drop() {
        let mut cell = CollisionCell::default();
        for id in 0..CELL_CAPACITY as u32 {
            assert!(cell.add(id));
        }
        assert!(!cell.add(99));
        assert_eq!(cell.len(), CELL_CAPACITY);
        assert!(!cell.objects().contains(&99));
    }

    #[test]
    fn clear_resets_occupancy_only() {
        let mut cell = CollisionCell::default();
        cell.add(3);
        cell.add(8);
        cell.clear();
        assert!(cell.is_empty());
        assert!(cell.objects().is_empty());
        assert!(cell.add(5));
        assert_eq!(cell.objects(), &[5]);
    }
}
