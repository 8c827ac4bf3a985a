//! Pointer-like positions over the elements of a [`DynamicArray`].
//!
//! A cursor borrows the array it came from, so the array cannot reallocate
//! while the cursor exists. Moving a cursor is plain integer arithmetic and
//! may step anywhere; only dereferencing checks that the position names an
//! element. Cursors order by the array they walk, then by position, so a
//! cursor stepped before the first element stays below `begin()`.
//!
//! [`DynamicArray`]: crate::DynamicArray

use core::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::impl_traits;

/// Shared cursor. Freely copyable.
pub struct Cursor<'a, T> {
    items: &'a [T],
    pos: isize,
}

impl<'a, T> Cursor<'a, T> {

    #[inline(always)]
    pub(crate) fn new(items: &'a [T], pos: isize) -> Self {
        Self {
            items,
            pos,
        }
    }

    /// Offset from the first element. Negative once stepped before it.
    #[inline(always)]
    pub fn position(&self) -> isize {
        self.pos
    }

    /// Element index, if the cursor is on an element.
    #[inline(always)]
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.pos)
            .ok()
            .filter(|&index| index < self.items.len())
    }

    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.pos == self.items.len() as isize
    }

    #[inline(always)]
    pub fn get(&self) -> Option<&'a T> {
        self.index().map(|index| &self.items[index])
    }

    /// # Safety
    /// The cursor must be on an element, `0 <= position() < len`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &'a T {
        unsafe { self.items.get_unchecked(self.pos as usize) }
    }

    /// Address of the slot. May be outside the block; never dereference it
    /// without checking [`index`](Self::index) first.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr().wrapping_offset(self.pos)
    }

    /// Comparison key. The position is compared unwrapped, the address of
    /// a stepped-out slot is not.
    #[inline(always)]
    fn key(&self) -> (*const T, isize) {
        (self.items.as_ptr(), self.pos)
    }

    /// Pre-increment.
    #[inline(always)]
    pub fn inc(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_add(1);
        self
    }

    /// Post-increment: steps forward and returns the previous position.
    #[inline(always)]
    pub fn post_inc(&mut self) -> Self {
        let prev = *self;
        self.inc();
        prev
    }

    #[inline(always)]
    pub fn dec(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_sub(1);
        self
    }

    #[inline(always)]
    pub fn post_dec(&mut self) -> Self {
        let prev = *self;
        self.dec();
        prev
    }
}

impl_traits!{
    for Cursor<'a, T>
    Clone =>

        #[inline(always)]
        fn clone(&self) -> Self {
            *self
        }
    ,
    Copy =>
    ,
    PartialEq =>

        #[inline(always)]
        fn eq(&self, other: &Self) -> bool {
            self.key() == other.key()
        }
    ,
    Eq =>
    ,
    PartialOrd =>

        #[inline(always)]
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    ,
    Ord =>

        #[inline(always)]
        fn cmp(&self, other: &Self) -> Ordering {
            self.key().cmp(&other.key())
        }
    ,
    Debug =>

        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.debug_struct("Cursor")
                .field("position", &self.pos)
                .field("len", &self.items.len())
                .finish()
        }
    ,
    Add<isize> =>

        type Output = Self;

        #[inline(always)]
        fn add(self, rhs: isize) -> Self::Output {
            Self::new(self.items, self.pos.wrapping_add(rhs))
        }
    ,
    Add<usize> =>

        type Output = Self;

        #[inline(always)]
        fn add(self, rhs: usize) -> Self::Output {
            Self::new(self.items, self.pos.wrapping_add_unsigned(rhs))
        }
    ,
    Sub<isize> =>

        type Output = Self;

        #[inline(always)]
        fn sub(self, rhs: isize) -> Self::Output {
            Self::new(self.items, self.pos.wrapping_sub(rhs))
        }
    ,
    Sub<usize> =>

        type Output = Self;

        #[inline(always)]
        fn sub(self, rhs: usize) -> Self::Output {
            Self::new(self.items, self.pos.wrapping_sub_unsigned(rhs))
        }
    ,
    AddAssign<isize> =>

        #[inline(always)]
        fn add_assign(&mut self, rhs: isize) {
            self.pos = self.pos.wrapping_add(rhs);
        }
    ,
    AddAssign<usize> =>

        #[inline(always)]
        fn add_assign(&mut self, rhs: usize) {
            self.pos = self.pos.wrapping_add_unsigned(rhs);
        }
    ,
    SubAssign<isize> =>

        #[inline(always)]
        fn sub_assign(&mut self, rhs: isize) {
            self.pos = self.pos.wrapping_sub(rhs);
        }
    ,
    SubAssign<usize> =>

        #[inline(always)]
        fn sub_assign(&mut self, rhs: usize) {
            self.pos = self.pos.wrapping_sub_unsigned(rhs);
        }
    ,
}

impl<'a, T> Sub for Cursor<'a, T> {

    type Output = isize;

    /// Distance in elements, for cursors over the same array.
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.pos.wrapping_sub(rhs.pos)
    }
}

/// Exclusive cursor, the mutable counterpart of [`Cursor`].
///
/// It holds the array's only borrow, so it is not `Copy` and has no
/// post-increment form.
pub struct CursorMut<'a, T> {
    items: &'a mut [T],
    pos: isize,
}

impl<'a, T> CursorMut<'a, T> {

    #[inline(always)]
    pub(crate) fn new(items: &'a mut [T], pos: isize) -> Self {
        Self {
            items,
            pos,
        }
    }

    #[inline(always)]
    pub fn position(&self) -> isize {
        self.pos
    }

    #[inline(always)]
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.pos)
            .ok()
            .filter(|&index| index < self.items.len())
    }

    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.pos == self.items.len() as isize
    }

    #[inline(always)]
    pub fn get(&self) -> Option<&T> {
        self.index().map(|index| &self.items[index])
    }

    #[inline(always)]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.index().map(|index| &mut self.items[index])
    }

    /// Consumes the cursor, keeping the element borrowed for the array's
    /// full borrow.
    #[inline(always)]
    pub fn into_mut(self) -> Option<&'a mut T> {
        let index = self.index()?;
        Some(&mut self.items[index])
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr().wrapping_offset(self.pos)
    }

    #[inline(always)]
    fn key(&self) -> (*const T, isize) {
        (self.items.as_ptr(), self.pos)
    }

    /// Read-only view at the same position.
    #[inline(always)]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.items, self.pos)
    }

    #[inline(always)]
    pub fn inc(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_add(1);
        self
    }

    #[inline(always)]
    pub fn dec(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_sub(1);
        self
    }
}

impl_traits!{
    for CursorMut<'a, T>
    PartialEq =>

        #[inline(always)]
        fn eq(&self, other: &Self) -> bool {
            self.key() == other.key()
        }
    ,
    PartialOrd =>

        #[inline(always)]
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.key().cmp(&other.key()))
        }
    ,
    Debug =>

        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.debug_struct("CursorMut")
                .field("position", &self.pos)
                .field("len", &self.items.len())
                .finish()
        }
    ,
    Add<isize> =>

        type Output = Self;

        #[inline(always)]
        fn add(mut self, rhs: isize) -> Self::Output {
            self.pos = self.pos.wrapping_add(rhs);
            self
        }
    ,
    Sub<isize> =>

        type Output = Self;

        #[inline(always)]
        fn sub(mut self, rhs: isize) -> Self::Output {
            self.pos = self.pos.wrapping_sub(rhs);
            self
        }
    ,
    AddAssign<isize> =>

        #[inline(always)]
        fn add_assign(&mut self, rhs: isize) {
            self.pos = self.pos.wrapping_add(rhs);
        }
    ,
    AddAssign<usize> =>

        #[inline(always)]
        fn add_assign(&mut self, rhs: usize) {
            self.pos = self.pos.wrapping_add_unsigned(rhs);
        }
    ,
    SubAssign<isize> =>

        #[inline(always)]
        fn sub_assign(&mut self, rhs: isize) {
            self.pos = self.pos.wrapping_sub(rhs);
        }
    ,
    SubAssign<usize> =>

        #[inline(always)]
        fn sub_assign(&mut self, rhs: usize) {
            self.pos = self.pos.wrapping_sub_unsigned(rhs);
        }
    ,
}
