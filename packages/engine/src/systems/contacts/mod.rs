//! Contact resolution - unit-diameter non-penetration
//!
//! For an overlapping pair (p, q) with d = p - q and |d| < 1:
//!   delta = response_coef * 0.5 * (1 - |d|)
//!   p += axis * delta, q -= axis * delta, both pressures += delta
//!   then a `velocity_coef` fraction of the relative velocity is exchanged
//!   (inelastic damping, not momentum exact).
//!
//! Corrections are applied in place as pairs are discovered (Gauss-Seidel),
//! so results depend on traversal order.

use crate::core::Vec2;
use crate::domain::{ParticleId, ParticleStore};
use crate::grid::CollisionGrid;

mod slots;
use slots::ParticleSlots;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Separation axis used when two particles sit on exactly the same point
pub const DEGENERATE_AXIS: Vec2 = Vec2::new(1.0, 0.0);

/// Per-contact tunables
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactParams {
    pub response_coef: f32,
    pub velocity_coef: f32,
}

/// Resolve the pair (a, b) on the store directly.
/// Returns true if the particles were overlapping.
pub fn resolve_pair(store: &mut ParticleStore, params: &ContactParams, a: ParticleId, b: ParticleId) -> bool {
    assert!(store.contains(a) && store.contains(b), "resolve_pair: unknown particle id");
    let slots = ParticleSlots::new(store);
    // SAFETY: both ids are in range and `slots` is the only live access to `store`.
    unsafe { slots.resolve(params, a, b) }
}

/// Run `iterations` full contact passes over every occupied cell.
///
/// Color classes run one after another; cells inside a class share no
/// particle, so they are solved in parallel when the feature is enabled.
///
/// Panics if the grid holds an id the store does not have.
pub fn solve_contacts(store: &mut ParticleStore, grid: &CollisionGrid, params: &ContactParams, iterations: u32) {
    assert!(
        grid.id_bound() <= store.len(),
        "solve_contacts: grid references particle {} but the store holds {}",
        grid.id_bound().saturating_sub(1),
        store.len()
    );
    let slots = ParticleSlots::new(store);
    for _ in 0..iterations {
        for class in grid.color_classes() {
            #[cfg(feature = "parallel")]
            {
                class.par_iter().for_each(|&cell| {
                    // SAFETY: every grid id is below `store.len()` (checked above), and
                    // same-colored cells touch disjoint cells, hence disjoint particles.
                    unsafe { solve_cell(&slots, grid, params, cell as usize) }
                });
            }
            #[cfg(not(feature = "parallel"))]
            {
                for &cell in class {
                    // SAFETY: single-threaded; grid ids are below `store.len()` (checked above).
                    unsafe { solve_cell(&slots, grid, params, cell as usize) }
                }
            }
        }
    }
}

/// Test every occupant of `home` against the rest of `home` (both orders)
/// and against its E, NW, N, NE neighbours.
///
/// # Safety
/// All ids in the touched cells must be valid for `slots`, and no other
/// thread may touch particles in those cells concurrently.
unsafe fn solve_cell(slots: &ParticleSlots, grid: &CollisionGrid, params: &ContactParams, home: usize) {
    let cell = grid.cell_fast(home);
    let stencil = grid.half_stencil();
    for &a in cell.objects() {
        for &b in cell.objects() {
            slots.resolve(params, a, b);
        }
        for off in stencil {
            for &b in grid.cell_fast(home + off).objects() {
                slots.resolve(params, a, b);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Particle;

    const PARAMS: ContactParams = ContactParams { response_coef: 0.8, velocity_coef: 0.0025 };

    fn distance(store: &ParticleStore, a: ParticleId, b: ParticleId) -> f32 {
        (store.position(a) - store.position(b)).length()
    }

    #[test]
    fn overlapping_pair_moves_apart() {
        for gap in [0.05f32, 0.3, 0.5, 0.9, 0.999] {
            let mut store = ParticleStore::new();
            let a = store.push(Particle::at(5.0, 5.0));
            let b = store.push(Particle::at(5.0 + gap * 0.6, 5.0 + gap * 0.8));
            let before = distance(&store, a, b);
            assert!(resolve_pair(&mut store, &PARAMS, a, b));
            assert!(distance(&store, a, b) > before, "gap {} did not grow", gap);
        }
    }

    #[test]
    fn correction_is_symmetric_and_adds_pressure() {
        let mut store = ParticleStore::new();
        let a = store.push(Particle::at(5.0, 5.0));
        let b = store.push(Particle::at(5.5, 5.0));
        resolve_pair(&mut store, &ContactParams { response_coef: 1.0, velocity_coef: 0.0 }, a, b);

        assert!((store.position(a).x - 4.75).abs() < 1e-6);
        assert!((store.position(b).x - 5.75).abs() < 1e-6);
        assert!((distance(&store, a, b) - 1.0).abs() < 1e-6);
        assert_eq!(store.pressure(a), store.pressure(b));
        assert!((store.pressure(a) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn separated_pair_is_untouched() {
        let mut store = ParticleStore::new();
        let a = store.push(Particle::at(5.0, 5.0));
        let b = store.push(Particle::at(6.0, 5.0));
        let before = store.clone();
        assert!(!resolve_pair(&mut store, &PARAMS, a, b));
        assert_eq!(store.positions(), before.positions());
        assert_eq!(store.pressure(a), 0.0);
    }

    #[test]
    fn self_pair_is_ignored() {
        let mut store = ParticleStore::new();
        let a = store.push(Particle::at(5.0, 5.0));
        assert!(!resolve_pair(&mut store, &PARAMS, a, a));
        assert_eq!(store.pressure(a), 0.0);
    }

    #[test]
    fn coincident_particles_split_along_fixed_axis() {
        let mut store = ParticleStore::new();
        let a = store.push(Particle::at(5.0, 5.0));
        let b = store.push(Particle::at(5.0, 5.0));
        assert!(resolve_pair(&mut store, &PARAMS, a, b));

        let pa = store.position(a);
        let pb = store.position(b);
        assert!(pa.is_finite() && pb.is_finite());
        assert!(pa.x > pb.x);
        assert_eq!(pa.y, pb.y);
        assert!((distance(&store, a, b) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn velocity_exchange_damps_relative_motion() {
        let mut store = ParticleStore::new();
        let a = store.push(Particle::with_velocity(5.0, 5.0, Vec2::new(0.3, 0.0)));
        let b = store.push(Particle::with_velocity(5.9, 5.0, Vec2::new(-0.3, 0.0)));
        let params = ContactParams { response_coef: 0.0, velocity_coef: 0.25 };
        resolve_pair(&mut store, &params, a, b);

        // Zero response: positions fixed, only the exchange acts
        let rel = store.velocity(a) - store.velocity(b);
        assert!((rel.x - 0.3).abs() < 1e-5, "relative velocity {:?}", rel);
    }

    #[test]
    fn solve_contacts_separates_neighbouring_cells() {
        let mut grid = CollisionGrid::new(10, 10);
        let mut store = ParticleStore::new();
        // One overlapping partner in each of the four stencil directions
        let home = store.push(Particle::at(4.5, 4.9));
        let east = store.push(Particle::at(5.2, 4.9));
        let north_west = store.push(Particle::at(3.9, 5.2));
        let north = store.push(Particle::at(4.5, 5.3));
        let north_east = store.push(Particle::at(5.1, 5.2));
        let ids = [home, east, north_west, north, north_east];
        for id in ids {
            let p = store.position(id);
            assert!(grid.insert(p.x, p.y, id));
        }
        solve_contacts(&mut store, &grid, &PARAMS, 1);
        for id in ids {
            assert!(store.pressure(id) > 0.0, "particle {} saw no contact", id);
        }
    }

    #[test]
    #[should_panic(expected = "grid references particle")]
    fn foreign_grid_ids_are_refused() {
        let mut grid = CollisionGrid::new(10, 10);
        let mut store = ParticleStore::new();
        let a = store.push(Particle::at(5.5, 5.5));
        grid.insert(5.5, 5.5, a);
        grid.insert(5.6, 5.5, 50_000_000);
        solve_contacts(&mut store, &grid, &PARAMS, 1);
    }
}
