//! Verbosity-gated diagnostics.
//!
//! There is no logging framework: messages go to stderr when the global
//! [`DISPLAY_LEVEL`] is high enough.
//!
//! Levels:
//!   0 — silent
//!   1 — errors
//!   2 — results and warnings (default)
//!   3 — progress and first-chance codec errors
//!   4 — per-attempt detail

use std::sync::atomic::{AtomicU32, Ordering};

/// Current verbosity level shared by the library and the CLI.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Read the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Set the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr when the display level is at least `$level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::display::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_level_roundtrip() {
        let prev = display_level();
        set_display_level(4);
        assert_eq!(display_level(), 4);
        set_display_level(prev);
        assert_eq!(display_level(), prev);
    }
}
