//! Particle arena - Structure of Arrays (SoA), append-only
//!
//! Instead of: Vec<Box<Particle>>          // pointer chasing, poor cache
//! We have:    positions[], previous[], ... // linear memory, index = identity
//!
//! A particle's id is its slot. Slots are never removed or reordered, so the
//! raw `u32` ids stored in collision cells stay valid across `Vec` growth
//! (the arrays may move in memory, the indices never change meaning).

use crate::core::Vec2;

/// Stable particle identifier (slot in the store)
pub type ParticleId = u32;

/// Value snapshot of one particle, used for insertion and readback.
///
/// Velocity is implicit: `position - prev_position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub prev_position: Vec2,
    pub acceleration: Vec2,
    pub pressure: f32,
}

impl Particle {
    /// Particle at rest at (x, y)
    pub fn at(x: f32, y: f32) -> Self {
        let position = Vec2::new(x, y);
        Self {
            position,
            prev_position: position,
            acceleration: Vec2::ZERO,
            pressure: 0.0,
        }
    }

    /// Particle at (x, y) that will travel `velocity` per integration step
    pub fn with_velocity(x: f32, y: f32, velocity: Vec2) -> Self {
        let position = Vec2::new(x, y);
        Self {
            position,
            prev_position: position - velocity,
            acceleration: Vec2::ZERO,
            pressure: 0.0,
        }
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.position - self.prev_position
    }
}

/// SoA particle storage
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    pub(crate) positions: Vec<Vec2>,
    pub(crate) prev_positions: Vec<Vec2>,
    pub(crate) accelerations: Vec<Vec2>,
    pub(crate) pressures: Vec<f32>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            prev_positions: Vec::with_capacity(capacity),
            accelerations: Vec::with_capacity(capacity),
            pressures: Vec::with_capacity(capacity),
        }
    }

    /// Append a particle and return its permanent id
    pub fn push(&mut self, particle: Particle) -> ParticleId {
        let id = self.positions.len() as ParticleId;
        self.positions.push(particle.position);
        self.prev_positions.push(particle.prev_position);
        self.accelerations.push(particle.acceleration);
        self.pressures.push(particle.pressure);
        id
    }

    pub fn reserve(&mut self, additional: usize) {
        self.positions.reserve(additional);
        self.prev_positions.reserve(additional);
        self.accelerations.reserve(additional);
        self.pressures.reserve(additional);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: ParticleId) -> bool {
        (id as usize) < self.len()
    }

    pub fn get(&self, id: ParticleId) -> Option<Particle> {
        let i = id as usize;
        if i >= self.len() {
            return None;
        }
        Some(Particle {
            position: self.positions[i],
            prev_position: self.prev_positions[i],
            acceleration: self.accelerations[i],
            pressure: self.pressures[i],
        })
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Particle> + '_ {
        (0..self.len()).map(move |i| Particle {
            position: self.positions[i],
            prev_position: self.prev_positions[i],
            acceleration: self.accelerations[i],
            pressure: self.pressures[i],
        })
    }

    // === Field access (panics on a foreign id, like slice indexing) ===

    #[inline]
    pub fn position(&self, id: ParticleId) -> Vec2 {
        self.positions[id as usize]
    }

    #[inline]
    pub fn pressure(&self, id: ParticleId) -> f32 {
        self.pressures[id as usize]
    }

    #[inline]
    pub fn velocity(&self, id: ParticleId) -> Vec2 {
        let i = id as usize;
        self.positions[i] - self.prev_positions[i]
    }

    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    #[inline]
    pub fn pressures(&self) -> &[f32] {
        &self.pressures
    }

    // === Implicit-velocity helpers ===

    /// Teleport without introducing velocity
    pub fn set_position(&mut self, id: ParticleId, position: Vec2) {
        let i = id as usize;
        self.positions[i] = position;
        self.prev_positions[i] = position;
    }

    /// Change velocity by moving the previous position
    #[inline]
    pub fn add_velocity(&mut self, id: ParticleId, v: Vec2) {
        self.prev_positions[id as usize] -= v;
    }

    #[inline]
    pub fn accelerate(&mut self, id: ParticleId, a: Vec2) {
        self.accelerations[id as usize] += a;
    }

    /// Scale velocity by `1 - ratio`
    #[inline]
    pub fn slowdown(&mut self, id: ParticleId, ratio: f32) {
        let i = id as usize;
        let v = self.positions[i] - self.prev_positions[i];
        self.prev_positions[i] += v * ratio;
    }

    pub fn reset_pressures(&mut self) {
        self.pressures.fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_slots() {
        let mut store = ParticleStore::new();
        let a = store.push(Particle::at(1.0, 2.0));
        let b = store.push(Particle::at(3.0, 4.0));
        assert_eq!((a, b), (0, 1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.position(b), Vec2::new(3.0, 4.0));
        assert!(store.get(2).is_none());
    }

    #[test]
    fn ids_survive_growth() {
        let mut store = ParticleStore::with_capacity(1);
        let first = store.push(Particle::at(7.0, 7.0));
        for i in 0..1000 {
            store.push(Particle::at(i as f32, 0.0));
        }
        assert_eq!(store.position(first), Vec2::new(7.0, 7.0));
    }

    #[test]
    fn velocity_helpers_work_on_previous_position() {
        let mut store = ParticleStore::new();
        let id = store.push(Particle::with_velocity(5.0, 5.0, Vec2::new(0.5, 0.0)));
        assert_eq!(store.velocity(id), Vec2::new(0.5, 0.0));

        store.add_velocity(id, Vec2::new(0.0, 0.25));
        assert_eq!(store.velocity(id), Vec2::new(0.5, 0.25));

        store.slowdown(id, 0.5);
        assert_eq!(store.velocity(id), Vec2::new(0.25, 0.125));

        store.set_position(id, Vec2::new(1.0, 1.0));
        assert_eq!(store.velocity(id), Vec2::ZERO);
    }

    #[test]
    fn accelerate_accumulates() {
        let mut store = ParticleStore::new();
        let id = store.push(Particle::at(0.0, 0.0));
        store.accelerate(id, Vec2::new(1.0, 0.0));
        store.accelerate(id, Vec2::new(0.0, 2.0));
        assert_eq!(store.get(id).map(|p| p.acceleration), Some(Vec2::new(1.0, 2.0)));
    }
}
