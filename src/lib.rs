#![no_std]

//! `DynArray`: a growable, index-addressable array.
//!
//! `DynArray<T>` keeps a logical length separate from the capacity of its
//! backing buffer. The buffer grows on demand, both at the back (append,
//! extend, insert) and at the front (prepend), and never shrinks except on
//! `clear()`.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Growth Policy
//!
//! When `n` more elements do not fit behind the current length, the buffer is
//! replaced by one that is larger by at least 4 slots; the increment doubles
//! until it covers the slots needed. Growth triggered by a prepend reserves
//! the leading slots during the same copy, so the existing elements are moved
//! once rather than moved and then shifted.
//!
//! ```
//! # use dynarray::DynArray;
//! let mut array = DynArray::new();
//! assert_eq!(array.capacity(), 0);
//!
//! array.append(1);
//! assert_eq!(array.capacity(), 4);
//!
//! array.extend_from_slice(&[2, 3, 4, 5]);
//! assert_eq!(array.capacity(), 8);
//! assert_eq!(array.len(), 5);
//! ```
//!
//! ## Time Complexity
//! - `append()`, `extend_from_slice()`: amortized O(1) per element
//! - `prepend()`, `insert()`, `delete()`: O(n) - elements are shifted
//! - `get()`, `set()`, `pop()`: O(1)
//! - `index_of()`, `count()`, `contains()`, `remove()`: O(n) - linear scan
//! - `clear()`: releases the buffer
//!
//! # Indexing
//!
//! `get()`, `set()` and `insert()` take a signed index. Negative indices count
//! from the end: `-1` is the last element.
//!
//! ```
//! # use dynarray::{DynArray, DynArrayError};
//! let mut array = DynArray::from(vec![1, 8, 4, 3]);
//!
//! assert_eq!(array.get(0), Ok(&1));
//! assert_eq!(array.get(-1), Ok(&3));
//! assert_eq!(
//!     array.get(4),
//!     Err(DynArrayError::IndexOutOfRange { index: 4, length: 4 })
//! );
//!
//! array.insert(0, 100);
//! array.insert(1000, 99);
//! array.insert(2, 49);
//! assert_eq!(array.to_vec(), vec![100, 1, 49, 8, 4, 3, 99]);
//! ```
//!
//! # Search and Removal
//!
//! Element equality is `PartialEq`:
//!
//! ```
//! # use dynarray::{DynArray, DynArrayError};
//! let mut array = DynArray::from(vec![1, 8, 8, 4, 3]);
//!
//! assert_eq!(array.index_of(&8), Some(1));
//! assert_eq!(array.count(&8), 2);
//! assert_eq!(array.remove(&8), Ok(Some(8)));
//! assert_eq!(array.to_string(), "[1,8,4,3]");
//!
//! array.clear();
//! assert_eq!(array.pop(), Err(DynArrayError::EmptyArray));
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use dynarray::DynArray;
//! let mut array: DynArray<i32> = (1..=3).collect();
//! array.prepend(0);
//!
//! for element in &array {
//!     println!("{element}");
//! }
//!
//! let reversed: Vec<_> = array.iter_rev().copied().collect();
//! assert_eq!(reversed, vec![3, 2, 1, 0]);
//! ```

extern crate alloc;

mod array;
mod error;
pub mod growth;
mod iter;

// Re-export public types and traits
pub use array::DynArray;
pub use error::{DynArrayError, Result};
pub use iter::{DynArrayIter, IntoIter};
