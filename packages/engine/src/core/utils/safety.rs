//! Zero-cost indexing macros for the grid hot path
//!
//! Debug builds keep normal bounds-checked indexing so a broken stencil
//! panics with a useful message; release builds drop to `get_unchecked`.
//! Every call site must uphold the index invariant on its own (for the
//! collision grid: only in-margin cells are ever occupied, so the
//! half-stencil neighbours of an occupied cell are always allocated).
//!
//! ```rust
//! use granule_engine::{fast, fast_mut};
//!
//! let mut counts = vec![0u8; 9];
//! let home = 4;
//! fast!(counts, [home] = 3);
//! *fast_mut!(counts, [home + 1]) += 1;
//! assert_eq!(*fast!(counts, [home]), 3);
//! assert_eq!(counts[5], 1);
//! ```

/// Shared access: `fast!(slice, [index])`, write: `fast!(slice, [index] = value)`
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

/// Mutable access: `fast_mut!(slice, [index])`
#[macro_export]
macro_rules! fast_mut {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &mut $slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked_mut($index) }
        }
    }};
}
