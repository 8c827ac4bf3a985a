mod dyn_array;
mod cursor;
mod iter;

pub use dyn_array::{DynamicArray, swap};
pub use cursor::{Cursor, CursorMut};
pub use iter::{Iter, IterMut, IntoIter};
