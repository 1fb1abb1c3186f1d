//! Wrap-around cursor arithmetic.
//!
//! Every level moves its cursor through these functions. None of them panic
//! for an empty list; callers decide separately whether moving is meaningful.

/// Index after moving one entry forward in a list of `count` entries.
///
/// Wraps from the last entry to the first. Returns `0` when `count` is zero.
pub fn next(index: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (index % count + 1) % count
}

/// Index after moving one entry back in a list of `count` entries.
///
/// Wraps from the first entry to the last. Returns `0` when `count` is zero.
pub fn previous(index: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (index % count + count - 1) % count
}

/// Repair a cursor that may have gone stale after its list was rebuilt.
pub fn clamp(index: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    index.min(count - 1)
}
