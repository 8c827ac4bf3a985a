//! Growable contiguous array with a pluggable growth policy, and cursors
//! tied to a borrow of the array they walk.
//!
//! ```
//! use dynarr::{DynamicArray, Incremental};
//!
//! let mut arr = DynamicArray::<i32, Incremental>::new();
//! for value in [10, 20, 30] {
//!     arr.push_back(value).unwrap();
//! }
//! assert_eq!(arr.capacity(), 3);
//! assert_eq!(arr.at(1), Ok(&20));
//!
//! let mut cursor = arr.begin();
//! cursor += 2usize;
//! assert_eq!(cursor.get(), Some(&30));
//! ```

mod macros;

pub mod capacity_policy;
pub mod vec_types;

mod errors;
mod global_alloc;
mod strategies;

pub use errors::CapacityError;
pub use capacity_policy::{CapacityPolicy, Doubling, Incremental, Fixed};
pub use vec_types::{DynamicArray, Cursor, CursorMut, Iter, IterMut, IntoIter, swap};

pub type Result<T> = core::result::Result<T, CapacityError>;
