//! Core building blocks shared by every layer
//!
//! - utils/  - zero-cost indexing macros (must be first for macro export!)
//! - math/   - 2D vector type
//! - random  - tiny deterministic RNG for scene seeding

#[macro_use]
#[path = "utils/safety.rs"]
pub mod safety;

#[path = "math/vec2.rs"]
pub mod vec2;

pub mod random;

pub use random::xorshift32;
pub use vec2::Vec2;
