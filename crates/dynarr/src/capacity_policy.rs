//! Growth rules applied when an insertion needs more slots than are allocated.
//!
//! The policy is picked per array type, `DynamicArray<T, Incremental>`,
//! so the cost profile of a container is visible in its signature.

pub trait CapacityPolicy {
    /// Capacity to reallocate to when `required` slots are needed and
    /// `current` are allocated (`required > current`).
    ///
    /// `None` means the policy refuses to grow.
    fn grow(current: usize, required: usize) -> Option<usize>;
}

/// Geometric growth: at least twice the current capacity.
///
/// The first insertion into an unallocated array allocates exactly one slot,
/// then 2, 4, 8... Appending `n` elements costs `O(n)` element moves.
pub struct Doubling;

impl CapacityPolicy for Doubling {

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        Some(required.max(current.saturating_mul(2)))
    }
}

/// Grows to exactly the required capacity, one slot per overflowing push.
///
/// Every push into a full array moves all existing elements, so `n` appends
/// from empty cost `O(n^2)` element moves.
pub struct Incremental;

impl CapacityPolicy for Incremental {

    #[inline]
    fn grow(_: usize, required: usize) -> Option<usize> {
        Some(required)
    }
}

/// Never grows; storage comes only from `with_capacity`, `reserve` or `assign`.
pub struct Fixed;

impl CapacityPolicy for Fixed {

    #[inline]
    fn grow(_: usize, _: usize) -> Option<usize> {
        None
    }
}
