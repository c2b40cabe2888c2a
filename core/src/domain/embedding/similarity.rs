/// Cosine similarity of two equal-length vectors.
///
/// Returns `NaN` when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vectors must share dimensionality");

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return f32::NAN;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric() {
        let a = [0.3, -1.2, 4.0, 0.0];
        let b = [2.0, 0.5, -0.25, 9.0];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn test_self_similarity_is_one() {
        let v = [1.5, -2.0, 0.25, 7.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_orthogonal_and_opposite() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 3.0]), 0.0);
        assert!((cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_magnitude_independent() {
        let s1 = cosine_similarity(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]);
        let s2 = cosine_similarity(&[10.0, 20.0, 30.0], &[3.0, 2.0, 1.0]);
        assert!((s1 - s2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_norm_is_nan() {
        assert!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).is_nan());
        assert!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]).is_nan());
    }
}
