use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    marker::PhantomData,
    ptr::NonNull,
    slice,
};

use crate::{
    global_alloc::GLOBAL_ALLOC,
    strategies,
};

pub struct Iter<'a, T> {
    ptr: NonNull<T>,
    end: NonNull<T>,
    _markers: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {

    #[inline(always)]
    pub(crate) fn new(items: &'a [T]) -> Self {
        let ptr = NonNull::from(items).cast::<T>();
        Self {
            ptr,
            end: unsafe { ptr.add(items.len()) },
            _markers: PhantomData,
        }
    }

    #[inline(always)]
    fn remaining(&self) -> usize {
        if size_of::<T>() == 0 {
            return 0
        }
        unsafe { self.end.offset_from(self.ptr) as usize }
    }

    /// Elements not yet yielded.
    #[inline(always)]
    pub fn as_slice(&self) -> &'a [T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.remaining()) }
    }
}

impl<'a, T> Clone for Iter<'a, T> {

    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            ptr: self.ptr,
            end: self.end,
            _markers: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {

    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            let item = unsafe { self.ptr.as_ref() };
            self.ptr = unsafe { self.ptr.add(1) };
            Some(item)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {

    fn next_back(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            self.end = unsafe { self.end.sub(1) };
            Some(unsafe { self.end.as_ref() })
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T: Debug> Debug for Iter<'a, T> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

pub struct IterMut<'a, T> {
    ptr: NonNull<T>,
    end: NonNull<T>,
    _markers: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {

    #[inline(always)]
    pub(crate) fn new(items: &'a mut [T]) -> Self {
        let len = items.len();
        let ptr = NonNull::from(items).cast::<T>();
        Self {
            ptr,
            end: unsafe { ptr.add(len) },
            _markers: PhantomData,
        }
    }

    #[inline(always)]
    fn remaining(&self) -> usize {
        if size_of::<T>() == 0 {
            return 0
        }
        unsafe { self.end.offset_from(self.ptr) as usize }
    }

    /// Consumes the iterator, keeping the unvisited elements borrowed.
    #[inline(always)]
    pub fn into_slice(self) -> &'a mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.remaining()) }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {

    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            let item = unsafe { self.ptr.as_mut() };
            self.ptr = unsafe { self.ptr.add(1) };
            Some(item)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {

    fn next_back(&mut self) -> Option<Self::Item> {
        if self.ptr == self.end {
            None
        }
        else {
            self.end = unsafe { self.end.sub(1) };
            Some(unsafe { self.end.as_mut() })
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> Debug for IterMut<'a, T> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.remaining())
            .finish()
    }
}

unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}
unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}

/// Owning iterator. Frees the block once dropped, along with any elements
/// that were never yielded.
pub struct IntoIter<T> {
    buf: NonNull<T>,
    capacity: usize,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {

    /// # Safety
    /// `buf` must be a block of `capacity` slots from the global allocator (or
    /// dangling with `capacity == 0`) whose first `len` slots are initialized.
    /// Ownership of the block passes to the iterator.
    #[inline(always)]
    pub(crate) unsafe fn new(buf: NonNull<T>, capacity: usize, len: usize) -> Self {
        Self {
            buf,
            capacity,
            start: 0,
            end: len,
        }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            slice::from_raw_parts(self.buf.add(self.start).as_ptr(), self.end - self.start)
        }
    }
}

impl<T> Iterator for IntoIter<T> {

    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None
        }
        let item = unsafe { self.buf.add(self.start).read() };
        self.start += 1;
        Some(item)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {

    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None
        }
        self.end -= 1;
        Some(unsafe { self.buf.add(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {

    fn drop(&mut self) {
        let len = self.end - self.start;
        self.end = self.start;
        unsafe {
            strategies::drop_in_place(self.buf.add(self.start), len);
            if self.capacity != 0 {
                GLOBAL_ALLOC.free_uninit(self.buf, self.capacity);
            }
        }
    }
}

unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}
