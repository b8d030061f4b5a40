#![no_std]

//! `SimpleVector`: a growable heap array with explicit size and capacity control.
//!
//! `SimpleVector<T>` owns one contiguous allocation through [`OwnedBuffer`] and
//! tracks its logical length separately from the allocated capacity. Slots past
//! the length keep whatever they last held (a default, or a value that was popped,
//! erased or cleared) until they are overwritten.
//!
//! This crate is `no_std` compatible; it only needs `alloc`.
//!
//! # Growth Policy
//!
//! | Trigger | New capacity |
//! |---|---|
//! | `push_back` / `insert` on a full vector | `max(1, 2 * capacity)` |
//! | `reserve(n)` with `n > capacity` | exactly `n` |
//! | `resize(n)` with `n > capacity` | `2 * n` |
//!
//! Everything else reuses the current buffer. Capacity never shrinks.
//!
//! ```
//! # use simple_vector::SimpleVector;
//! let mut v = SimpleVector::new();
//! let mut capacities = Vec::new();
//! for value in [1, 2, 3] {
//!     v.push_back(value);
//!     capacities.push(v.capacity());
//! }
//! assert_eq!(capacities, [1, 2, 4]);
//!
//! v.insert(1, 99);
//! assert_eq!(v, [1, 99, 2, 3]);
//! v.erase(0);
//! assert_eq!(v, [99, 2, 3]);
//! v.pop_back();
//! assert_eq!(v, [99, 2]);
//! ```
//!
//! ## Time Complexity
//! - `push_back()`: amortized O(1), O(n) when it reallocates
//! - `insert()`, `erase()`: O(n) - the tail is shifted by one slot
//! - `pop_back()`, `clear()`: O(1) - only the length changes
//! - `at()`, indexing: O(1)
//! - `swap()`, `take()`: O(1) - buffers change owners, elements stay put
//!
//! # Construction
//!
//! ```
//! # use simple_vector::{reserve, SimpleVector};
//! let defaults: SimpleVector<i32> = SimpleVector::with_size(3);
//! assert_eq!(defaults, [0, 0, 0]);
//!
//! let filled = SimpleVector::with_value(2, &7);
//! assert_eq!(filled, [7, 7]);
//!
//! let listed = SimpleVector::from([1, 2, 3]);
//! assert_eq!(listed.capacity(), 3);
//!
//! let reserved: SimpleVector<String> = SimpleVector::with_reserve(reserve(16));
//! assert!(reserved.is_empty());
//! assert_eq!(reserved.capacity(), 16);
//! ```
//!
//! # Errors
//!
//! Bounds-checked access and the `try_*` family report failures through
//! [`SimpleVectorError`]. The infallible variants panic on misuse and hand
//! allocation failures to the global allocation error handler.
//!
//! ```
//! # use simple_vector::{SimpleVector, SimpleVectorError};
//! let v = SimpleVector::from([10, 20]);
//! assert_eq!(v.at(1), Ok(&20));
//! assert_eq!(
//!     v.at(2),
//!     Err(SimpleVectorError::IndexOutOfBounds { index: 2, length: 2 })
//! );
//! ```
//!
//! # Features
//!
//! - `std`: turns on the `std` features of `thiserror` and `log`.
//! - `log`: emits a `trace` record through the `log` facade on every reallocation.

extern crate alloc;

mod buffer;
mod core;
mod error;
mod growth;
mod iter;
mod reserve;
mod traits;

// Re-export public types and traits
pub use buffer::OwnedBuffer;
pub use crate::core::SimpleVector;
pub use error::{Result, SimpleVectorError};
pub use iter::{IntoIter, Iter, IterMut};
pub use reserve::{reserve, ReserveProxy};
