//! Buffer overlap predicates
//!
//! Block modes accept a source and a destination that are either the same
//! buffer or disjoint buffers. A destination that starts somewhere inside the
//! source would overwrite input blocks before they are read.

use core::ops::Range;

/// Address range covered by a slice
#[inline(always)]
fn address_range(x: &[u8]) -> Range<usize> {
    let start = x.as_ptr() as usize;
    start..start + x.len()
}

/// Reports whether two non-empty ranges share at least one position
pub fn ranges_overlap(x: Range<usize>, y: Range<usize>) -> bool {
    !x.is_empty() && !y.is_empty() && x.start < y.end && y.start < x.end
}

/// Reports whether two ranges overlap without starting at the same position
pub fn ranges_inexact_overlap(x: Range<usize>, y: Range<usize>) -> bool {
    if x.is_empty() || y.is_empty() || x.start == y.start {
        return false;
    }
    ranges_overlap(x, y)
}

/// Reports whether `x` and `y` share memory at non-corresponding offsets
///
/// Two views of the same buffer starting at the same address are an exact
/// overlap, which is allowed for in-place processing.
pub fn inexact_overlap(x: &[u8], y: &[u8]) -> bool {
    ranges_inexact_overlap(address_range(x), address_range(y))
}
