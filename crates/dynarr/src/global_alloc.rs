use std::alloc::{Layout, alloc, alloc_zeroed, dealloc};

use core::ptr::NonNull;

use crate::errors::CapacityError::{self, AllocFailed, CapacityOverflow, ZeroSizedElement};

/// Typed front end over the process allocator.
pub(crate) struct GlobalAlloc;

pub(crate) static GLOBAL_ALLOC: GlobalAlloc = GlobalAlloc;

impl GlobalAlloc {

    fn layout<T>(count: usize) -> Result<Layout, CapacityError> {
        if size_of::<T>() == 0 {
            return Err(ZeroSizedElement)
        }
        debug_assert!(count != 0);
        Layout::array::<T>(count)
            .map_err(|_| CapacityOverflow { requested: count })
    }

    pub fn allocate_uninit<T>(&self, count: usize) -> Result<NonNull<T>, CapacityError> {
        let layout = Self::layout::<T>(count)?;
        let ptr = unsafe { alloc(layout) };
        NonNull::new(ptr)
            .map(|ptr| ptr.cast::<T>())
            .ok_or(AllocFailed { new_capacity: count })
    }

    /// Like [`allocate_uninit`](Self::allocate_uninit), with every byte cleared.
    pub fn allocate_zeroed<T>(&self, count: usize) -> Result<NonNull<T>, CapacityError> {
        let layout = Self::layout::<T>(count)?;
        let ptr = unsafe { alloc_zeroed(layout) };
        NonNull::new(ptr)
            .map(|ptr| ptr.cast::<T>())
            .ok_or(AllocFailed { new_capacity: count })
    }

    /// # Safety
    /// `ptr` must come from this allocator with the same `count`, and must not be used again.
    pub unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let layout = match Layout::array::<T>(count) {
            Ok(l) => l,
            Err(_) => return,
        };
        unsafe { dealloc(ptr.as_ptr().cast::<u8>(), layout) }
    }
}
