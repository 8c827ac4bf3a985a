use core::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::{self, ManuallyDrop},
    ops::{Index, IndexMut, Deref, DerefMut},
    ptr::NonNull,
    slice,
};

use dynarr_log::{debug, trace};

use crate::{
    capacity_policy::{CapacityPolicy, Doubling},
    errors::CapacityError,
    global_alloc::GLOBAL_ALLOC,
    strategies,
    const_assert,
    size_of,
    impl_traits,
    Result,
};

use super::{
    Cursor,
    CursorMut,
    Iter,
    IterMut,
    IntoIter,
};

use CapacityError::{FixedCapacity, CapacityOverflow, IndexOutOfBounds, SourceTooShort, Empty};

/// Growable array over one exclusively owned heap block.
///
/// `capacity` counts allocated slots and `len` counts initialized elements,
/// `len <= capacity` always. With `capacity == 0` nothing is allocated.
/// How the block grows when a push finds it full is decided by `Policy`.
///
/// Zero-sized element types cannot be stored; every allocating operation
/// reports [`CapacityError::ZeroSizedElement`] for them.
pub struct DynamicArray<T, Policy = Doubling>
    where
        Policy: CapacityPolicy,
{
    data: NonNull<T>,
    capacity: usize,
    len: usize,
    _markers: PhantomData<(T, Policy)>,
}

const_assert!(size_of!(DynamicArray<u32>) == size_of!(Option<DynamicArray<u32>>));

// SAFETY: the block is owned exclusively, like a `Box<[T]>`.
unsafe impl<T: Send, Policy: CapacityPolicy> Send for DynamicArray<T, Policy> {}
unsafe impl<T: Sync, Policy: CapacityPolicy> Sync for DynamicArray<T, Policy> {}

impl<T, Policy> DynamicArray<T, Policy>
    where
        Policy: CapacityPolicy,
{

    pub const fn new() -> Self {
        Self {
            data: NonNull::dangling(),
            capacity: 0,
            len: 0,
            _markers: PhantomData,
        }
    }

    /// Allocates `capacity` zero-filled slots without adding elements.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut arr = Self::new();
        if capacity != 0 {
            arr.data = GLOBAL_ALLOC.allocate_zeroed(capacity)?;
            arr.capacity = capacity;
            trace!("allocated {} zeroed slots", capacity);
        }
        Ok(arr)
    }

    /// Allocates exactly `len` slots holding clones of `source[..len]`.
    pub fn with_data(len: usize, source: &[T]) -> Result<Self>
        where
            T: Clone
    {
        if source.len() < len {
            return Err(SourceTooShort { required: len, provided: source.len() })
        }
        let mut arr = Self::new();
        if len != 0 {
            arr.data = GLOBAL_ALLOC.allocate_uninit(len)?;
            arr.capacity = len;
            trace!("allocated {} slots for copied data", len);
        }
        for value in &source[..len] {
            unsafe { arr.write_next(value.clone()); }
        }
        Ok(arr)
    }

    /// [`with_data`](Self::with_data) over a raw contiguous sequence.
    ///
    /// # Safety
    /// When `len != 0`, `source` must be non-null, aligned, and point to at
    /// least `len` initialized elements.
    pub unsafe fn from_raw_data(len: usize, source: *const T) -> Result<Self>
        where
            T: Clone
    {
        if len == 0 {
            return Ok(Self::new())
        }
        let source = unsafe { slice::from_raw_parts(source, len) };
        Self::with_data(len, source)
    }

    /// Deep copy keeping the source's capacity.
    pub fn try_clone(&self) -> Result<Self>
        where
            T: Clone
    {
        let mut arr = Self::new();
        if self.capacity != 0 {
            arr.data = GLOBAL_ALLOC.allocate_uninit(self.capacity)?;
            arr.capacity = self.capacity;
            trace!("allocated {} slots for clone", self.capacity);
        }
        for value in self.as_slice() {
            unsafe { arr.write_next(value.clone()); }
        }
        Ok(arr)
    }

    /// Copy-assignment: replaces the contents with clones of `source`'s and
    /// takes on its capacity. The current block is reused when the capacities
    /// already match.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<()>
        where
            T: Clone
    {
        if self.capacity == source.capacity {
            self.drop_elements();
        }
        else {
            self.release();
            if source.capacity != 0 {
                self.data = GLOBAL_ALLOC.allocate_uninit(source.capacity)?;
                self.capacity = source.capacity;
                trace!("allocated {} slots for clone", source.capacity);
            }
        }
        for value in source.as_slice() {
            unsafe { self.write_next(value.clone()); }
        }
        Ok(())
    }

    /// Moves the whole array out, leaving `self` empty and unallocated.
    #[inline(always)]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Move-assignment: releases the current storage and takes over `from`'s
    /// block. `from` is left empty and unallocated; no element is copied.
    pub fn move_from(&mut self, from: &mut Self) {
        self.release();
        self.swap(from);
    }

    /// One-shot pre-allocation of `capacity` zero-filled slots.
    ///
    /// Only acts on an unallocated array. Returns `Ok(false)` and changes
    /// nothing when storage already exists.
    pub fn reserve(&mut self, capacity: usize) -> Result<bool> {
        if self.capacity != 0 {
            debug!("reserve of {} slots ignored, {} already allocated", capacity, self.capacity);
            return Ok(false)
        }
        if capacity != 0 {
            self.data = GLOBAL_ALLOC.allocate_zeroed(capacity)?;
            self.capacity = capacity;
            trace!("reserved {} zeroed slots", capacity);
        }
        Ok(true)
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Replaces everything with `len` clones of `value` in a block of exactly
    /// `len` slots.
    pub fn assign(&mut self, len: usize, value: T) -> Result<()>
        where
            T: Clone
    {
        self.release();
        if len == 0 {
            return Ok(())
        }
        self.data = GLOBAL_ALLOC.allocate_uninit(len)?;
        self.capacity = len;
        trace!("allocated {} slots for assign", len);
        for _ in 1..len {
            unsafe { self.write_next(value.clone()); }
        }
        unsafe { self.write_next(value); }
        Ok(())
    }

    /// Appends `value`, growing by `Policy` when the block is full.
    ///
    /// A reallocation moves every element, so cursors and references into the
    /// array cannot be held across this call:
    ///
    /// ```compile_fail
    /// let mut arr = dynarr::DynamicArray::<i32>::new();
    /// let cursor = arr.begin();
    /// arr.push_back(1).unwrap();
    /// cursor.get();
    /// ```
    ///
    /// A cursor taken after the push sees the new element.
    ///
    /// ```
    /// let mut arr = dynarr::DynamicArray::<i32>::new();
    /// arr.push_back(1).unwrap();
    /// assert_eq!(arr.begin().get(), Some(&1));
    /// ```
    pub fn push_back(&mut self, value: T) -> Result<&mut T> {
        self.grow_for(1)?;
        Ok(unsafe { self.write_next(value) })
    }

    #[inline(always)]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None
        }
        self.len -= 1;
        Some(unsafe { self.data.add(self.len).read() })
    }

    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<()>
        where
            T: Clone
    {
        self.grow_for(values.len())?;
        for value in values {
            unsafe { self.write_next(value.clone()); }
        }
        Ok(())
    }

    pub fn at(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { self.data.add(index).as_ref() })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { self.data.add(index).as_mut() })
    }

    #[inline(always)]
    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(Empty)
    }

    #[inline(always)]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().first_mut().ok_or(Empty)
    }

    #[inline(always)]
    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(Empty)
    }

    #[inline(always)]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().last_mut().ok_or(Empty)
    }

    /// Exchanges blocks, capacities and lengths. Nothing is copied.
    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.data, &mut other.data);
        mem::swap(&mut self.capacity, &mut other.capacity);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Drops every element and releases the block.
    pub fn clear(&mut self) {
        self.release();
    }

    /// Reallocates to exactly `len` slots, releasing the block when empty.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        if self.capacity == self.len {
            return Ok(())
        }
        debug!("shrinking from {} to {} slots", self.capacity, self.len);
        self.realloc(self.len)
    }

    #[inline(always)]
    pub fn contains(&self, value: &T) -> bool
        where
            T: PartialEq
    {
        self.as_slice().contains(value)
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Cursor at the first element.
    #[inline(always)]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Cursor one past the last element.
    #[inline(always)]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len as isize)
    }

    /// Mutable cursor at the first element. It holds the array's exclusive
    /// borrow, so the array cannot be cleared or grown under it:
    ///
    /// ```compile_fail
    /// let mut arr = dynarr::dynarr![1, 2, 3];
    /// let mut cursor = arr.begin_mut();
    /// arr.clear();
    /// cursor.inc();
    /// ```
    #[inline(always)]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), 0)
    }

    #[inline(always)]
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len as isize;
        CursorMut::new(self.as_mut_slice(), len)
    }

    /// # Safety
    /// `len < capacity`.
    #[inline(always)]
    unsafe fn write_next(&mut self, value: T) -> &mut T {
        debug_assert!(self.len < self.capacity);
        unsafe {
            let mut ptr = self.data.add(self.len);
            ptr.write(value);
            self.len += 1;
            ptr.as_mut()
        }
    }

    fn grow_for(&mut self, additional: usize) -> Result<()> {
        let required = self.len
            .checked_add(additional)
            .ok_or(CapacityOverflow { requested: usize::MAX })?;
        if required <= self.capacity {
            return Ok(())
        }
        let new_capacity = Policy::grow(self.capacity, required)
            .ok_or(FixedCapacity { capacity: self.capacity })?;
        debug_assert!(new_capacity >= required);
        self.realloc(new_capacity)
    }

    fn realloc(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.len);
        if new_capacity == self.capacity {
            return Ok(())
        }
        let data =
            if new_capacity == 0 {
                NonNull::dangling()
            }
            else {
                let tmp = GLOBAL_ALLOC.allocate_uninit(new_capacity)?;
                unsafe { strategies::move_elements(self.data, tmp, self.len); }
                tmp
            };
        if self.capacity != 0 {
            unsafe { GLOBAL_ALLOC.free_uninit(self.data, self.capacity); }
        }
        trace!("reallocated {} slots to {}, moved {} elements", self.capacity, new_capacity, self.len);
        self.data = data;
        self.capacity = new_capacity;
        Ok(())
    }

    #[inline(always)]
    fn drop_elements(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        unsafe { strategies::drop_in_place(self.data, len); }
    }

    fn release(&mut self) {
        self.drop_elements();
        if self.capacity == 0 {
            return
        }
        unsafe { GLOBAL_ALLOC.free_uninit(self.data, self.capacity); }
        trace!("released {} slots", self.capacity);
        self.capacity = 0;
        self.data = NonNull::dangling();
    }
}

/// Free-standing form of [`DynamicArray::swap`].
#[inline(always)]
pub fn swap<T, Policy: CapacityPolicy>(
    lhs: &mut DynamicArray<T, Policy>,
    rhs: &mut DynamicArray<T, Policy>,
) {
    lhs.swap(rhs);
}

impl_traits!{
    for DynamicArray<T, Policy: CapacityPolicy>
    Drop =>

        fn drop(&mut self) {
            self.release()
        }
    ,
    Default =>

        #[inline(always)]
        fn default() -> Self {
            Self::new()
        }
    ,
    Clone where T: Clone =>

        fn clone(&self) -> Self {
            match self.try_clone() {
                Ok(arr) => arr,
                Err(err) => panic!("failed to clone dynamic array: {}", err),
            }
        }

        fn clone_from(&mut self, source: &Self) {
            if let Err(err) = self.try_clone_from(source) {
                panic!("failed to clone dynamic array: {}", err)
            }
        }
    ,
    Index<usize> =>

        type Output = T;

        #[inline(always)]
        fn index(&self, index: usize) -> &Self::Output {
            if index >= self.len {
                panic!("index {} out of bounds for length {}", index, self.len)
            }
            unsafe { self.data.add(index).as_ref() }
        }
    ,
    IndexMut<usize> =>

        #[inline(always)]
        fn index_mut(&mut self, index: usize) -> &mut Self::Output {
            if index >= self.len {
                panic!("index {} out of bounds for length {}", index, self.len)
            }
            unsafe { self.data.add(index).as_mut() }
        }
    ,
    AsRef<[T]> =>

        #[inline(always)]
        fn as_ref(&self) -> &[T] {
            self.as_slice()
        }
    ,
    AsMut<[T]> =>

        #[inline(always)]
        fn as_mut(&mut self) -> &mut [T] {
            self.as_mut_slice()
        }
    ,
    Deref =>

        type Target = [T];

        #[inline(always)]
        fn deref(&self) -> &Self::Target {
            self.as_slice()
        }
    ,
    DerefMut =>

        #[inline(always)]
        fn deref_mut(&mut self) -> &mut Self::Target {
            self.as_mut_slice()
        }
    ,
    PartialEq where T: PartialEq =>

        #[inline(always)]
        fn eq(&self, other: &Self) -> bool {
            self.as_slice() == other.as_slice()
        }
    ,
    PartialEq<[T]> where T: PartialEq =>

        #[inline(always)]
        fn eq(&self, other: &[T]) -> bool {
            self.as_slice() == other
        }
    ,
    Eq where T: Eq =>
    ,
    PartialOrd where T: PartialOrd =>

        #[inline(always)]
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.as_slice().partial_cmp(other.as_slice())
        }
    ,
    Ord where T: Ord =>

        #[inline(always)]
        fn cmp(&self, other: &Self) -> Ordering {
            self.as_slice().cmp(other.as_slice())
        }
    ,
    Hash where T: Hash =>

        fn hash<H: Hasher>(&self, state: &mut H) {
            self.as_slice().hash(state)
        }
    ,
    Debug where T: Debug =>

        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.debug_list().entries(self.as_slice()).finish()
        }
    ,
}

impl<T, Policy, const N: usize> PartialEq<[T; N]> for DynamicArray<T, Policy>
    where
        T: PartialEq,
        Policy: CapacityPolicy,
{

    #[inline(always)]
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, Policy> Extend<T> for DynamicArray<T, Policy>
    where
        Policy: CapacityPolicy,
{

    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(err) = self.grow_for(lower) {
            panic!("failed to extend dynamic array: {}", err)
        }
        for value in iter {
            if let Err(err) = self.push_back(value) {
                panic!("failed to extend dynamic array: {}", err)
            }
        }
    }
}

impl<T, Policy> FromIterator<T> for DynamicArray<T, Policy>
    where
        Policy: CapacityPolicy,
{

    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<T, Policy> IntoIterator for DynamicArray<T, Policy>
    where
        Policy: CapacityPolicy,
{

    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let arr = ManuallyDrop::new(self);
        unsafe { IntoIter::new(arr.data, arr.capacity, arr.len) }
    }
}

impl<'vec, T, Policy> IntoIterator for &'vec DynamicArray<T, Policy>
    where
        Policy: CapacityPolicy,
{

    type Item = &'vec T;
    type IntoIter = Iter<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'vec, T, Policy> IntoIterator for &'vec mut DynamicArray<T, Policy>
    where
        Policy: CapacityPolicy,
{

    type Item = &'vec mut T;
    type IntoIter = IterMut<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {

    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::{dynarr, Incremental, Fixed, CapacityError::ZeroSizedElement};

    #[derive(Clone)]
    struct Counted(Rc<Cell<usize>>);

    impl Drop for Counted {

        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn from_slice(values: &[i32]) -> DynamicArray<i32> {
        DynamicArray::with_data(values.len(), values).unwrap()
    }

    #[test]
    fn new_is_unallocated() {
        let arr = DynamicArray::<i32>::new();
        assert_eq!(arr.capacity(), 0);
        assert_eq!(arr.size(), 0);
        assert!(arr.empty());
        assert_eq!(arr.at(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    }

    #[test]
    fn with_capacity_zero_fills_without_elements() {
        let mut arr = DynamicArray::<u64>::with_capacity(4).unwrap();
        assert_eq!(arr.capacity(), 4);
        assert_eq!(arr.size(), 0);
        for i in 0..4 {
            assert_eq!(unsafe { arr.as_ptr().add(i).read() }, 0);
        }
        arr.push_back(7).unwrap();
        assert_eq!(arr.capacity(), 4);
        assert_eq!(arr, [7]);
    }

    #[test]
    fn with_data_copies_a_prefix() {
        let arr = DynamicArray::<i32>::with_data(2, &[1, 2, 3]).unwrap();
        assert_eq!(arr, [1, 2]);
        assert_eq!(arr.capacity(), 2);
        assert_eq!(
            DynamicArray::<i32>::with_data(4, &[1, 2]),
            Err(SourceTooShort { required: 4, provided: 2 }),
        );
    }

    #[test]
    fn from_raw_data_reads_the_pointer() {
        let source = [4, 5, 6];
        let arr = unsafe { DynamicArray::<i32>::from_raw_data(3, source.as_ptr()) }.unwrap();
        assert_eq!(arr, source);
        let empty = unsafe { DynamicArray::<i32>::from_raw_data(0, core::ptr::null()) }.unwrap();
        assert_eq!(empty.capacity(), 0);
    }

    #[test]
    fn push_back_grows_by_one_with_incremental() {
        let mut arr = DynamicArray::<i32, Incremental>::new();
        let mut capacities = Vec::new();
        for value in [10, 20, 30] {
            arr.push_back(value).unwrap();
            capacities.push(arr.capacity());
        }
        assert_eq!(capacities, [1, 2, 3]);
        assert_eq!((arr[0], arr[1], arr[2]), (10, 20, 30));
    }

    #[test]
    fn push_back_doubles_by_default() {
        let mut arr = DynamicArray::<i32>::new();
        let mut capacities = Vec::new();
        for value in 0..5 {
            arr.push_back(value).unwrap();
            capacities.push(arr.capacity());
        }
        assert_eq!(capacities, [1, 2, 4, 4, 8]);
    }

    #[test]
    fn push_back_returns_the_new_element() {
        let mut arr = DynamicArray::<i32>::new();
        *arr.push_back(1).unwrap() += 41;
        assert_eq!(arr.back(), Ok(&42));
    }

    #[test]
    fn fixed_policy_refuses_to_grow() {
        let mut arr = DynamicArray::<i32, Fixed>::with_capacity(2).unwrap();
        arr.push_back(1).unwrap();
        arr.push_back(2).unwrap();
        assert_eq!(arr.push_back(3).map(|v| *v), Err(FixedCapacity { capacity: 2 }));
        assert_eq!(arr, [1, 2]);
        let mut empty = DynamicArray::<i32, Fixed>::new();
        assert_eq!(empty.push_back(1).map(|v| *v), Err(FixedCapacity { capacity: 0 }));
    }

    #[test]
    fn zero_sized_elements_are_rejected() {
        let mut arr = DynamicArray::<()>::new();
        assert_eq!(arr.push_back(()).map(|_| ()), Err(ZeroSizedElement));
        assert_eq!(arr.reserve(3), Err(ZeroSizedElement));
        assert_eq!(arr.capacity(), 0);
        assert!(arr.iter().next().is_none());
    }

    #[test]
    fn pop_back_returns_in_reverse() {
        let mut arr = from_slice(&[1, 2, 3]);
        assert_eq!(arr.pop_back(), Some(3));
        assert_eq!(arr.pop_back(), Some(2));
        assert_eq!(arr.capacity(), 3);
        assert_eq!(arr.pop_back(), Some(1));
        assert_eq!(arr.pop_back(), None);
    }

    #[test]
    fn extend_from_slice_appends_clones() {
        let mut arr = from_slice(&[1]);
        arr.extend_from_slice(&[2, 3, 4]).unwrap();
        assert_eq!(arr, [1, 2, 3, 4]);
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    fn at_uses_a_strict_bound() {
        let mut arr = from_slice(&[1, 2, 3]);
        assert_eq!(arr.at(2), Ok(&3));
        assert_eq!(arr.at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
        *arr.at_mut(0).unwrap() = 9;
        assert_eq!(arr.at_mut(5).map(|v| *v), Err(IndexOutOfBounds { index: 5, len: 3 }));
        assert_eq!(arr[0], 9);
    }

    #[test]
    #[should_panic(expected = "index 3 out of bounds for length 3")]
    fn index_past_len_panics() {
        let arr = from_slice(&[1, 2, 3]);
        let _value = arr[3];
    }

    #[test]
    fn front_and_back() {
        let mut arr = from_slice(&[1, 2, 3]);
        assert_eq!(arr.front(), Ok(&1));
        assert_eq!(arr.back(), Ok(&3));
        *arr.front_mut().unwrap() = 0;
        *arr.back_mut().unwrap() = 4;
        assert_eq!(arr, [0, 2, 4]);
        arr.clear();
        assert_eq!(arr.front(), Err(Empty));
        assert_eq!(arr.back_mut().map(|v| *v), Err(Empty));
    }

    #[test]
    fn reserve_is_one_shot() {
        let mut arr = DynamicArray::<i32>::new();
        assert_eq!(arr.reserve(5), Ok(true));
        assert_eq!(arr.capacity(), 5);
        assert_eq!(arr.reserve(10), Ok(false));
        assert_eq!(arr.capacity(), 5);
        let mut empty = DynamicArray::<i32>::new();
        assert_eq!(empty.reserve(0), Ok(true));
        assert_eq!(empty.capacity(), 0);
    }

    #[test]
    fn assign_replaces_everything() {
        let mut arr = from_slice(&[1, 2, 3, 4, 5]);
        arr.assign(3, 7).unwrap();
        assert_eq!(arr, [7, 7, 7]);
        assert_eq!(arr.capacity(), 3);
        arr.assign(0, 1).unwrap();
        assert_eq!(arr.capacity(), 0);
        assert!(arr.empty());
    }

    #[test]
    fn clear_then_push_behaves_like_new() {
        let mut arr = DynamicArray::<i32, Incremental>::new();
        arr.extend([1, 2, 3]);
        arr.clear();
        assert_eq!((arr.size(), arr.capacity()), (0, 0));
        arr.push_back(4).unwrap();
        assert_eq!((arr.size(), arr.capacity()), (1, 1));
    }

    #[test]
    fn clone_is_deep() {
        let original = from_slice(&[1, 2, 3]);
        let mut copy = original.clone();
        copy[0] = 100;
        copy.push_back(4).unwrap();
        assert_eq!(original, [1, 2, 3]);
        assert_eq!(copy, [100, 2, 3, 4]);
    }

    #[test]
    fn clone_keeps_capacity() {
        let mut original = DynamicArray::<i32>::with_capacity(8).unwrap();
        original.push_back(1).unwrap();
        let copy = original.try_clone().unwrap();
        assert_eq!(copy.capacity(), 8);
        assert_eq!(copy, [1]);
    }

    #[test]
    fn clone_from_takes_source_state() {
        let source = from_slice(&[5, 6]);
        let mut dest = from_slice(&[1, 2, 3, 4]);
        dest.clone_from(&source);
        assert_eq!(dest, [5, 6]);
        assert_eq!(dest.capacity(), 2);
        let mut same = from_slice(&[8, 9]);
        let block = same.as_ptr();
        same.clone_from(&source);
        assert_eq!(same.as_ptr(), block);
        assert_eq!(same, source);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut source = from_slice(&[1, 2, 3]);
        let block = source.as_ptr();
        let moved = source.take();
        assert_eq!(moved.as_ptr(), block);
        assert_eq!(moved, [1, 2, 3]);
        assert_eq!((source.size(), source.capacity()), (0, 0));
    }

    #[test]
    fn move_from_transfers_the_block() {
        let drops = Rc::new(Cell::new(0));
        let mut dest: DynamicArray<Counted> = (0..2).map(|_| Counted(drops.clone())).collect();
        let mut source: DynamicArray<Counted> = (0..3).map(|_| Counted(drops.clone())).collect();
        let block = source.as_ptr();
        dest.move_from(&mut source);
        assert_eq!(drops.get(), 2);
        assert_eq!(dest.as_ptr(), block);
        assert_eq!(dest.size(), 3);
        assert!(source.empty());
        assert_eq!(source.capacity(), 0);
    }

    #[test]
    fn swap_exchanges_full_state() {
        let mut a = from_slice(&[1, 2, 3]);
        let mut b = DynamicArray::<i32>::with_capacity(10).unwrap();
        b.push_back(9).unwrap();
        let (block_a, block_b) = (a.as_ptr(), b.as_ptr());
        a.swap(&mut b);
        assert_eq!((a.as_ptr(), b.as_ptr()), (block_b, block_a));
        assert_eq!((a.size(), a.capacity()), (1, 10));
        assert_eq!((b.size(), b.capacity()), (3, 3));
        swap(&mut a, &mut b);
        assert_eq!(a, [1, 2, 3]);
        assert_eq!(b, [9]);
    }

    #[test]
    fn shrink_to_fit_matches_len() {
        let mut arr = DynamicArray::<i32>::with_capacity(16).unwrap();
        arr.extend([1, 2, 3]);
        arr.shrink_to_fit().unwrap();
        assert_eq!(arr.capacity(), 3);
        assert_eq!(arr, [1, 2, 3]);
        arr.clear();
        arr.reserve(4).unwrap();
        arr.shrink_to_fit().unwrap();
        assert_eq!(arr.capacity(), 0);
    }

    #[test]
    fn comparisons_are_lexicographic() {
        let a = from_slice(&[1, 2]);
        let b = from_slice(&[1, 2, 3]);
        let c = from_slice(&[2]);
        let d = from_slice(&[1, 9]);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a, from_slice(&[1, 2]));
        assert!(c > d);
        assert!(a <= a.clone());
        assert_ne!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert!(a == *[1, 2].as_slice());
    }

    #[test]
    fn every_element_is_dropped_once() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut arr = DynamicArray::<Counted, Incremental>::new();
            for _ in 0..5 {
                arr.push_back(Counted(drops.clone())).unwrap();
            }
            assert_eq!(drops.get(), 0);
            drop(arr.pop_back());
            assert_eq!(drops.get(), 1);
            arr.assign(2, Counted(drops.clone())).unwrap();
            assert_eq!(drops.get(), 5);
        }
        assert_eq!(drops.get(), 7);
    }

    #[test]
    fn macro_forms() {
        let empty: DynamicArray<i32> = dynarr![];
        assert!(empty.empty());
        let listed = dynarr![1, 2, 3];
        assert_eq!(listed, [1, 2, 3]);
        let repeated = dynarr!["x"; 3];
        assert_eq!(repeated, ["x", "x", "x"]);
        assert_eq!(format!("{:?}", listed), "[1, 2, 3]");
    }
}
