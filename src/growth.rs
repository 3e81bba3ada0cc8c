//! Capacity growth policy.
//!
//! A resize adds at least [`INITIAL_GROWTH`] slots and doubles the increment
//! until it covers the reserved front offset plus the slots being inserted.

/// Smallest number of slots a single resize adds.
pub const INITIAL_GROWTH: usize = 4;

/// Returns `true` when `slots_needed` more elements do not fit behind `len`.
#[must_use]
pub const fn needs_resize(len: usize, capacity: usize, slots_needed: usize) -> bool {
    len + slots_needed > capacity
}

/// Number of slots to add so that a resize can reserve `offset` leading
/// slots and still fit `slots_needed` new elements.
#[must_use]
pub const fn slots_to_add(offset: usize, slots_needed: usize) -> usize {
    let required = offset + slots_needed;
    let mut slots = INITIAL_GROWTH;
    while slots < required {
        slots *= 2;
    }
    slots
}
