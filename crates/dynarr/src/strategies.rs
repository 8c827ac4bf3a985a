use core::{
    mem::needs_drop,
    ptr::{self, NonNull},
};

/// Bitwise move of `len` initialized elements into fresh storage.
///
/// # Safety
/// Both ranges must be valid for `len` elements and must not overlap.
/// The source range is logically uninitialized afterwards.
#[inline(always)]
pub(crate) unsafe fn move_elements<T>(src: NonNull<T>, dst: NonNull<T>, len: usize) {
    unsafe {
        src.copy_to_nonoverlapping(dst, len);
    }
}

/// # Safety
/// `ptr` must point to `len` initialized elements that are not used afterwards.
#[inline(always)]
pub(crate) unsafe fn drop_in_place<T>(ptr: NonNull<T>, len: usize) {
    if needs_drop::<T>() {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), len));
        }
    }
}
