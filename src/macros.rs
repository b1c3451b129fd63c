/// Builds a [`Vector`](crate::Vector) the way `vec!` builds a `Vec`.
///
/// `vector![a, b, c]` goes through the with-values option, `vector![value; n]`
/// through with-fill. Either way `size == capacity`.
///
/// ```
/// use dynvec::vector;
///
/// let v = vector![1, 2, 3];
/// assert_eq!((v.size(), v.capacity()), (3, 3));
///
/// let zeros = vector![0u8; 4];
/// assert_eq!(zeros.data(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($value:expr; $count:expr) => {
        $crate::Vector::with_options([$crate::with_fill($count, $value)])
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::Vector::with_options([$crate::with_values([$($elem),+])])
    };
}
