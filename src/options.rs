//! Construction options for [`Vector`].
//!
//! Options are applied to an empty draft in the order given. Each one rewrites the
//! whole shape (storage, size and capacity), so when several are supplied the last one wins.

use crate::vector::Vector;

/// One step of vector construction.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorOption<T> {
    /// Reserve room for `n` elements, size 0.
    Capacity(usize),
    /// Copy the given values, `size == capacity == values.len()`.
    Values(Vec<T>),
    /// `len` slots each holding `value`.
    Size { len: usize, value: T },
    /// `count` copies of `value`.
    Fill { count: usize, value: T },
    /// Copy an external sequence, `size == capacity == seq.len()`.
    Sequence(Vec<T>),
}

impl<T: Clone> VectorOption<T> {
    pub(crate) fn apply(self, draft: &mut Vector<T>) {
        match self {
            VectorOption::Capacity(n) => draft.replace_storage(Vec::with_capacity(n), n),
            VectorOption::Values(values) | VectorOption::Sequence(values) => {
                let capacity = values.len();
                draft.replace_storage(values, capacity);
            }
            VectorOption::Size { len: n, value } | VectorOption::Fill { count: n, value } => {
                draft.replace_storage(vec![value; n], n);
            }
        }
    }
}

pub fn with_capacity<T>(n: usize) -> VectorOption<T> {
    VectorOption::Capacity(n)
}

pub fn with_values<T>(values: impl IntoIterator<Item = T>) -> VectorOption<T> {
    VectorOption::Values(values.into_iter().collect())
}

pub fn with_size<T>(n: usize, default_value: T) -> VectorOption<T> {
    VectorOption::Size {
        len: n,
        value: default_value,
    }
}

pub fn with_fill<T>(count: usize, value: T) -> VectorOption<T> {
    VectorOption::Fill { count, value }
}

pub fn from_slice<T: Clone>(seq: &[T]) -> VectorOption<T> {
    VectorOption::Sequence(seq.to_vec())
}

/// Consuming builder that records options in call order.
///
/// ```
/// use dynvec::Vector;
///
/// let v: Vector<i32> = Vector::builder().capacity(8).build();
/// assert_eq!((v.size(), v.capacity()), (0, 8));
///
/// // last shape-defining call wins
/// let v = Vector::builder().fill(2, 'x').values(['a', 'b', 'c']).build();
/// assert_eq!(v.data(), &['a', 'b', 'c']);
/// ```
#[must_use = "a builder does nothing until `build` is called"]
#[derive(Debug, Clone)]
pub struct VectorBuilder<T> {
    options: Vec<VectorOption<T>>,
}

impl<T> Default for VectorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VectorBuilder<T> {
    pub fn new() -> Self {
        VectorBuilder {
            options: Vec::new(),
        }
    }

    pub fn option(mut self, option: VectorOption<T>) -> Self {
        self.options.push(option);
        self
    }

    pub fn capacity(self, n: usize) -> Self {
        self.option(with_capacity(n))
    }

    pub fn values(self, values: impl IntoIterator<Item = T>) -> Self {
        self.option(with_values(values))
    }

    pub fn size(self, n: usize, default_value: T) -> Self {
        self.option(with_size(n, default_value))
    }

    pub fn fill(self, count: usize, value: T) -> Self {
        self.option(with_fill(count, value))
    }
}

impl<T: Clone> VectorBuilder<T> {
    pub fn sequence(self, seq: &[T]) -> Self {
        self.option(from_slice(seq))
    }

    pub fn build(self) -> Vector<T> {
        Vector::with_options(self.options)
    }
}
