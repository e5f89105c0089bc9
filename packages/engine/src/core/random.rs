//! Random number generator (xorshift32)
//!
//! Deterministic and allocation-free; good enough for scattering particles,
//! never used inside the solver pipeline.

/// Advance the state and return the next value. A zero state is remapped,
/// xorshift would otherwise stay at zero forever.
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = if *state == 0 { 0x9E37_79B9 } else { *state };
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float in [0, 1)
#[inline]
pub fn next_unit_f32(state: &mut u32) -> f32 {
    // Top 24 bits fit the f32 mantissa exactly
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xorshift_is_deterministic() {
        let mut a = 12345;
        let mut b = 12345;
        for _ in 0..100 {
            assert_eq!(xorshift32(&mut a), xorshift32(&mut b));
        }
    }

    #[test]
    fn test_zero_seed_does_not_stick() {
        let mut s = 0;
        assert_ne!(xorshift32(&mut s), 0);
        assert_ne!(s, 0);
    }

    #[test]
    fn test_unit_range() {
        let mut s = 7;
        for _ in 0..10_000 {
            let v = next_unit_f32(&mut s);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
