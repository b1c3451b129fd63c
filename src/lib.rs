//! # dynvec
//!
//! A growable, contiguous sequence container with explicit capacity control.
//!
//! ## What's inside
//!
//! 1. **`Vector<T>`**
//!    - Amortized O(1) `push_back` with a doubling growth policy (0 -> 1 -> 2 -> 4 ...)
//!    - `reserve` / `resize` / `clear` that never shrink the backing storage
//!    - Bounds-checked `at`, `front`, `back` returning `Result`
//!    - Positional `insert` / `erase` that shift elements in place
//!
//! 2. **Construction options**
//!    - `VectorOption<T>` applied in order, last one wins
//!    - `VectorBuilder<T>` for chaining
//!    - The `vector!` macro
//!
//! 3. **Small helpers** in [`tasks`] that use the container.
//!
//! ## Quick start
//!
//! ```
//! use dynvec::{vector, Vector, VectorError};
//!
//! let mut v = vector![1, 2, 3];
//! v.insert(1, 99).unwrap();
//! assert_eq!(v.data(), &[1, 99, 2, 3]);
//! assert_eq!(v.capacity(), 6);
//!
//! let empty: Vector<i32> = Vector::new();
//! assert!(matches!(empty.front(), Err(VectorError::EmptyContainer { .. })));
//! ```

pub mod error;
mod macros;
pub mod options;
pub mod tasks;
pub mod vector;

pub use error::{Result, VectorError};
pub use options::{
    from_slice, with_capacity, with_fill, with_size, with_values, VectorBuilder, VectorOption,
};
pub use vector::{Float64Vector, IntVector, StringVector, Vector};
