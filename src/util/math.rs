/// Three-point interpolation of a difficulty value.
///
/// Maps `0` to `min`, `5` to `mid`, and `10` to `max`, linearly in between.
/// Values outside of `0..=10` are extrapolated.
pub fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid - (mid - min) * (5.0 - difficulty) / 5.0
    } else {
        mid
    }
}

#[cfg(test)]
mod tests {
    use super::difficulty_range;

    #[test]
    fn range_endpoints() {
        assert!((difficulty_range(0.0, 3.0, 5.0, 7.5) - 3.0).abs() < f64::EPSILON);
        assert!((difficulty_range(5.0, 3.0, 5.0, 7.5) - 5.0).abs() < f64::EPSILON);
        assert!((difficulty_range(10.0, 3.0, 5.0, 7.5) - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn range_interpolates() {
        assert!((difficulty_range(2.5, 3.0, 5.0, 7.5) - 4.0).abs() < f64::EPSILON);
        assert!((difficulty_range(7.0, 3.0, 5.0, 7.5) - 6.0).abs() < f64::EPSILON);
    }
}
