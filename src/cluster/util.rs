use num_traits::Float;

/// Squared Euclidean distance.
///
/// The square root is never taken: squared distance preserves the nearest
/// ranking and keeps the assignment scan cheap.
#[inline]
pub(crate) fn squared_euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x - y;
            d * d
        })
        .fold(T::zero(), |acc, d2| acc + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_euclidean() {
        assert_eq!(squared_euclidean(&[0.0f64, 0.0], &[3.0, 4.0]), 25.0);
        assert_eq!(squared_euclidean(&[1.0f32], &[1.0]), 0.0);
    }
}
